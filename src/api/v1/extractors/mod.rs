/*
 * Responsibility
 * - path / query から値を取り出し、検証済みの型として handler に渡す
 */
mod query;
mod tags;
