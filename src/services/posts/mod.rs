pub mod aggregator;
pub mod fetcher;
pub mod model;
pub mod service;
pub mod sort;
pub mod tags;

pub use fetcher::{FetchError, PostFetcher};
pub use model::PostsEnvelope;
pub use service::PostsService;
pub use sort::SortOrder;
pub use tags::TagList;
