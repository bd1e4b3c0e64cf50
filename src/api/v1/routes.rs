/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /posts (tags なし) も同じ handler に通し、extractor で 400 を返す
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{health::health, posts::list_posts_by_tags};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/posts", get(list_posts_by_tags))
        .route("/posts/{tags}", get(list_posts_by_tags))
}
