// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{commands::catalog::CatalogCommandService, queries::articles::ArticleQueryService},
    domain::article::CategoryRepository,
};

pub struct ApplicationServices {
    pub catalog_commands: Arc<CatalogCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        let catalog_commands = Arc::new(CatalogCommandService::new(Arc::clone(&category_repo)));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&category_repo)));

        Self {
            catalog_commands,
            article_queries,
        }
    }
}
