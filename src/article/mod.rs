// Article pages assembled from content queries

pub mod config;
pub mod error;
pub mod image;
pub mod page;
pub mod queries;
pub mod types;

pub use config::{ImageConfig, PageConfig};
pub use error::PageError;
pub use image::ImageUrlBuilder;
pub use page::{ArticleList, ArticlePage, ArticlePages};
pub use types::{Article, Slug};
