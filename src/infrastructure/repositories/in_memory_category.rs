// src/infrastructure/repositories/in_memory_category.rs
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::article::specifications::check_registration;
use crate::domain::article::{Article, Category, CategoryRepository, CategoryShelf};
use crate::domain::errors::DomainResult;

#[derive(Default)]
struct Shelves {
    order: Vec<Category>,
    by_category: HashMap<Category, Arc<[Article]>>,
}

/// Category registry held in process memory.
///
/// Writers take the lock only to swap in an already validated list, so a
/// poisoned lock still guards a consistent map and is recovered.
#[derive(Default)]
pub struct InMemoryCategoryRegistry {
    inner: RwLock<Shelves>,
}

impl InMemoryCategoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CategoryRepository for InMemoryCategoryRegistry {
    fn register(&self, category: &Category, articles: Vec<Article>) -> DomainResult<()> {
        check_registration(category, &articles)?;

        let count = articles.len();
        let articles: Arc<[Article]> = articles.into();
        let mut shelves = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = shelves
            .by_category
            .insert(category.clone(), articles)
            .is_some();
        if !replaced {
            shelves.order.push(category.clone());
        }
        drop(shelves);

        tracing::info!(%category, count, replaced, "category registered");
        Ok(())
    }

    fn get(&self, category: &Category) -> Vec<Article> {
        let shelves = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        shelves
            .by_category
            .get(category)
            .map(|articles| articles.to_vec())
            .unwrap_or_default()
    }

    fn snapshot(&self) -> Vec<CategoryShelf> {
        let shelves = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        shelves
            .order
            .iter()
            .filter_map(|category| {
                shelves.by_category.get(category).map(|articles| CategoryShelf {
                    category: category.clone(),
                    articles: Arc::clone(articles),
                })
            })
            .collect()
    }
}
