use super::CatalogCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{Article, Category, NewArticle},
        errors::DomainResult,
    },
};

pub struct RegisterCategoryCommand {
    pub category: String,
    pub articles: Vec<NewArticle>,
}

impl CatalogCommandService {
    /// Validates the records and replaces the category's article list.
    /// Returns the number of articles now registered under it.
    ///
    /// # Errors
    ///
    /// `ApplicationError::Validation` when a record is malformed or the batch
    /// breaks slug uniqueness, label consistency or category membership.
    pub fn register_category(&self, command: RegisterCategoryCommand) -> ApplicationResult<usize> {
        let outcome = Self::prepare(command).and_then(|(category, articles)| {
            let count = articles.len();
            self.repo.register(&category, articles).map(|()| count)
        });

        outcome.map_err(|err| {
            tracing::warn!(error = %err, "category registration rejected");
            err.into()
        })
    }

    fn prepare(command: RegisterCategoryCommand) -> DomainResult<(Category, Vec<Article>)> {
        let category = Category::new(command.category)?;
        let articles = command
            .articles
            .into_iter()
            .map(Article::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((category, articles))
    }
}
