pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, NewArticle};
pub use repository::{CategoryRepository, CategoryShelf};
pub use services::{FeedAggregator, order_by_date_desc};
pub use value_objects::{
    ArticlePayload, ArticleSlug, ArticleTags, ArticleTitle, Category, CategoryLabel,
    PublicationDate, ReadTime,
};
