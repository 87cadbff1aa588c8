use std::sync::Arc;

use crate::domain::article::{CategoryRepository, FeedAggregator};

/// Read side of the catalog.
pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn CategoryRepository>,
    pub(super) aggregator: FeedAggregator,
}

impl ArticleQueryService {
    #[must_use]
    pub fn new(read_repo: Arc<dyn CategoryRepository>) -> Self {
        let aggregator = FeedAggregator::new(Arc::clone(&read_repo));
        Self {
            read_repo,
            aggregator,
        }
    }
}
