/*
 * Responsibility
 * - GET /posts/{tags}?sortBy=&direction=
 * - tags / query の解釈は extractor 側、ここでは service 呼び出しと envelope 化のみ
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::dto::posts::PostsQuery,
    error::AppError,
    services::posts::{PostsEnvelope, TagList},
    state::AppState,
};

pub async fn list_posts_by_tags(
    State(state): State<AppState>,
    tags: TagList,
    query: PostsQuery,
) -> Result<Json<PostsEnvelope>, AppError> {
    let posts = state.posts.search(&tags, query.sort_order()).await?;

    Ok(Json(PostsEnvelope { posts }))
}
