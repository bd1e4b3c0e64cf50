/*
 * Responsibility
 * - middleware の公開インターフェース
 * - 各モジュールは `apply(router, ...)` を持ち、app.rs から順に適用する
 */
pub mod cors;
pub mod http;
pub mod security_headers;
