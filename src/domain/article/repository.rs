use std::sync::Arc;

use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::Category;
use crate::domain::errors::DomainResult;

/// One category's article list, shared read-only with whoever took the
/// snapshot.
#[derive(Debug, Clone)]
pub struct CategoryShelf {
    pub category: Category,
    pub articles: Arc<[Article]>,
}

/// Per-category article store.
///
/// Implementations must serialize `register` calls and hand out snapshots so
/// readers never observe a half-replaced list.
pub trait CategoryRepository: Send + Sync {
    /// Replace the whole article list of `category`.
    ///
    /// # Errors
    ///
    /// `DomainError::Validation` when the batch breaks category membership,
    /// slug uniqueness or label consistency; nothing is stored in that case.
    fn register(&self, category: &Category, articles: Vec<Article>) -> DomainResult<()>;
    /// Articles of `category` in insertion order; empty when unknown.
    fn get(&self, category: &Category) -> Vec<Article>;
    /// Every registered category, in first-registration order.
    fn snapshot(&self) -> Vec<CategoryShelf>;
}
