/*
 * Responsibility
 * - v1 の公開ポイント (routes() の re-export など)
 */
mod dto;
mod extractors;
mod handlers;
mod routes;

pub use routes::routes;
