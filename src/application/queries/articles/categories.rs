use super::ArticleQueryService;
use crate::application::dto::CategorySummaryDto;

impl ArticleQueryService {
    /// Registered categories in registration order.
    #[must_use]
    pub fn categories(&self) -> Vec<CategorySummaryDto> {
        self.read_repo
            .snapshot()
            .iter()
            .map(CategorySummaryDto::from)
            .collect()
    }
}
