mod categories;
mod get_by_slug;
mod list;
mod list_by_category;
mod service;

pub use get_by_slug::GetArticleBySlugQuery;
pub use list_by_category::ListCategoryArticlesQuery;
pub use service::ArticleQueryService;
