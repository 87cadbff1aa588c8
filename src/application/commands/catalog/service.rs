use std::sync::Arc;

use crate::domain::article::CategoryRepository;

/// Write side of the catalog, driven by the catalog loader at startup.
pub struct CatalogCommandService {
    pub(super) repo: Arc<dyn CategoryRepository>,
}

impl CatalogCommandService {
    #[must_use]
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }
}
