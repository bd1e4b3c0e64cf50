/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - posts: upstream client を内包した PostsService
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use crate::services::posts::PostsService;

#[derive(Clone)]
pub struct AppState {
    pub posts: PostsService,
}

impl AppState {
    pub fn new(posts: PostsService) -> Self {
        Self { posts }
    }
}
