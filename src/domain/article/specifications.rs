use std::collections::HashSet;

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::Category;
use crate::domain::errors::{DomainError, DomainResult};

/// Every article in the batch is tagged with the registry's own category.
pub struct BelongsToCategorySpec<'a> {
    category: &'a Category,
    articles: &'a [Article],
}

impl<'a> BelongsToCategorySpec<'a> {
    #[must_use]
    pub const fn new(category: &'a Category, articles: &'a [Article]) -> Self {
        Self { category, articles }
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.first_violation().is_none()
    }

    /// # Errors
    ///
    /// `DomainError::Validation` describing the first violating article.
    pub fn check(&self) -> DomainResult<()> {
        match self.first_violation() {
            Some(article) => Err(DomainError::Validation(format!(
                "article `{}` has category `{}` but was registered under `{}`",
                article.slug, article.category, self.category
            ))),
            None => Ok(()),
        }
    }

    fn first_violation(&self) -> Option<&'a Article> {
        self.articles
            .iter()
            .find(|article| !article.is_in(self.category))
    }
}

/// No two articles in the batch share a slug.
pub struct UniqueSlugSpec<'a> {
    articles: &'a [Article],
}

impl<'a> UniqueSlugSpec<'a> {
    #[must_use]
    pub const fn new(articles: &'a [Article]) -> Self {
        Self { articles }
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.first_duplicate().is_none()
    }

    /// # Errors
    ///
    /// `DomainError::Validation` describing the first violating article.
    pub fn check(&self) -> DomainResult<()> {
        match self.first_duplicate() {
            Some(article) => Err(DomainError::Validation(format!(
                "duplicate slug `{}` in category `{}`",
                article.slug, article.category
            ))),
            None => Ok(()),
        }
    }

    fn first_duplicate(&self) -> Option<&'a Article> {
        let mut seen = HashSet::with_capacity(self.articles.len());
        self.articles
            .iter()
            .find(|article| !seen.insert(article.slug.as_str()))
    }
}

/// All articles in the batch carry the same category label.
pub struct ConsistentLabelSpec<'a> {
    articles: &'a [Article],
}

impl<'a> ConsistentLabelSpec<'a> {
    #[must_use]
    pub const fn new(articles: &'a [Article]) -> Self {
        Self { articles }
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.first_mismatch().is_none()
    }

    /// # Errors
    ///
    /// `DomainError::Validation` describing the first violating article.
    pub fn check(&self) -> DomainResult<()> {
        match self.first_mismatch() {
            Some((expected, article)) => Err(DomainError::Validation(format!(
                "article `{}` has label `{}` but category `{}` is labelled `{}`",
                article.slug,
                article.category_label,
                article.category,
                expected.category_label
            ))),
            None => Ok(()),
        }
    }

    fn first_mismatch(&self) -> Option<(&'a Article, &'a Article)> {
        let (first, rest) = self.articles.split_first()?;
        rest.iter()
            .find(|article| article.category_label != first.category_label)
            .map(|article| (first, article))
    }
}

/// Runs the registration checks in order and reports the first failure.
///
/// # Errors
///
/// The first `DomainError::Validation` raised by the checks.
pub fn check_registration(category: &Category, articles: &[Article]) -> DomainResult<()> {
    BelongsToCategorySpec::new(category, articles).check()?;
    UniqueSlugSpec::new(articles).check()?;
    ConsistentLabelSpec::new(articles).check()
}
