use super::ArticleQueryService;
use crate::{application::dto::ArticleDto, domain::article::Category};

pub struct ListCategoryArticlesQuery {
    pub category: String,
}

impl ArticleQueryService {
    /// Articles of one category in the order they were registered.
    ///
    /// Category pages are curated, so no date ordering is applied here. An
    /// unknown category yields an empty list.
    #[must_use]
    pub fn list_by_category(&self, query: ListCategoryArticlesQuery) -> Vec<ArticleDto> {
        // A malformed tag can never have been registered.
        let Ok(category) = Category::new(query.category) else {
            return Vec::new();
        };

        let records = self.read_repo.get(&category);
        records.into_iter().map(Into::into).collect()
    }
}
