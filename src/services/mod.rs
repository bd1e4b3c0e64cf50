pub mod posts;
pub mod upstream;
