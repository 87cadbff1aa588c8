use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleSlug, Category},
};

pub struct GetArticleBySlugQuery {
    pub category: String,
    pub slug: String,
}

impl ArticleQueryService {
    /// # Errors
    ///
    /// `ApplicationError::NotFound` when no article matches.
    pub fn find_by_slug(&self, query: GetArticleBySlugQuery) -> ApplicationResult<ArticleDto> {
        let GetArticleBySlugQuery { category, slug } = query;
        let not_found =
            || ApplicationError::not_found(format!("article `{slug}` in category `{category}`"));

        let category_key = Category::new(category.as_str()).map_err(|_| not_found())?;
        let slug_key = ArticleSlug::new(slug.as_str()).map_err(|_| not_found())?;

        self.read_repo
            .get(&category_key)
            .into_iter()
            .find(|article| article.slug == slug_key)
            .map(Into::into)
            .ok_or_else(not_found)
    }
}
