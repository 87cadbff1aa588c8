//! In-memory article catalog: per-category registries, a date-ordered global
//! feed, and category-scoped lookups.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::{
    commands::catalog::{CatalogCommandService, RegisterCategoryCommand},
    dto::{ArticleDto, CategorySummaryDto},
    error::{ApplicationError, ApplicationResult},
    queries::articles::{ArticleQueryService, GetArticleBySlugQuery, ListCategoryArticlesQuery},
    services::ApplicationServices,
};
pub use infrastructure::{
    catalog::{CatalogDocument, CatalogLoadError},
    repositories::InMemoryCategoryRegistry,
};
