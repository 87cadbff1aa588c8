use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// The global feed: every category merged, newest first.
    ///
    /// # Errors
    ///
    /// `ApplicationError::DataIntegrity` when any article date does not parse.
    pub fn list_all(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let feed = self.aggregator.aggregate()?;
        Ok(feed.into_iter().map(Into::into).collect())
    }
}
