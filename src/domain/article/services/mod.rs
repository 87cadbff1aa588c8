// src/domain/article/services/mod.rs
use std::cmp::Reverse;
use std::sync::Arc;

use crate::domain::article::entity::Article;
use crate::domain::article::repository::CategoryRepository;
use crate::domain::errors::DomainResult;

/// Domain service producing the global feed: every registered article,
/// newest first.
pub struct FeedAggregator {
    repo: Arc<dyn CategoryRepository>,
}

impl FeedAggregator {
    #[must_use]
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// Collects categories in registration order and articles in registry
    /// order, then orders them by date. Recomputed on every call.
    ///
    /// # Errors
    ///
    /// `DomainError::DataIntegrity` for the first article whose date does not
    /// parse; no partial feed is returned.
    pub fn aggregate(&self) -> DomainResult<Vec<Article>> {
        let collected: Vec<Article> = self
            .repo
            .snapshot()
            .iter()
            .flat_map(|shelf| shelf.articles.iter().cloned())
            .collect();

        let feed = order_by_date_desc(collected).inspect_err(|err| {
            tracing::warn!(error = %err, "feed aggregation aborted");
        })?;
        tracing::debug!(articles = feed.len(), "feed aggregated");
        Ok(feed)
    }
}

/// Stable sort by publication date, most recent first.
///
/// Every date is parsed before anything is reordered; the first unparsable
/// one fails the whole call.
///
/// # Errors
///
/// `DomainError::DataIntegrity` naming the first unparsable article.
pub fn order_by_date_desc(articles: Vec<Article>) -> DomainResult<Vec<Article>> {
    let mut keyed = articles
        .into_iter()
        .map(|article| Ok((article.published_on()?, article)))
        .collect::<DomainResult<Vec<_>>>()?;

    keyed.sort_by_key(|(date, _)| Reverse(*date));
    Ok(keyed.into_iter().map(|(_, article)| article).collect())
}
