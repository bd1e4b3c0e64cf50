/*
 * Responsibility
 * - TagList → tag ごとの fetch (並列数を制限) → aggregate
 * - 結果は tag の順に並べ直してから aggregate に渡す
 * - どれか 1 つでも失敗したら全体を失敗にする (部分結果は返さない)
 */
use futures::{StreamExt, TryStreamExt, stream};

use super::{
    aggregator::aggregate,
    fetcher::{FetchError, PostFetcher},
    model::Post,
    sort::SortOrder,
    tags::TagList,
};

#[derive(Clone)]
pub struct PostsService {
    fetcher: PostFetcher,
    concurrency: usize,
}

impl PostsService {
    pub fn new(fetcher: PostFetcher, concurrency: usize) -> Self {
        Self {
            fetcher,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetch every tag, merge, and sort.
    ///
    /// `buffered` yields in input order, so the first error surfaced is the
    /// first failing tag in list order, and the per-tag lists reach the
    /// aggregator in tag order whatever order the fetches finish in.
    pub async fn search(&self, tags: &TagList, order: SortOrder) -> Result<Vec<Post>, FetchError> {
        // owned tags + cloned fetcher keep each future 'static (axum needs Send)
        let per_tag: Vec<Vec<Post>> = stream::iter(tags.as_slice().to_vec())
            .map(|tag| {
                let fetcher = self.fetcher.clone();
                async move { fetcher.fetch(&tag).await }
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        let posts = aggregate(per_tag, order);
        tracing::info!(
            tags = tags.len(),
            sort_by = order.key.as_str(),
            direction = ?order.direction,
            posts = posts.len(),
            "posts aggregated"
        );

        Ok(posts)
    }
}
