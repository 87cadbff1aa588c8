// src/infrastructure/catalog.rs
//! Catalog loader: reads the authored catalog document and registers each
//! category once at startup.
use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::application::commands::catalog::{CatalogCommandService, RegisterCategoryCommand};
use crate::application::error::ApplicationError;
use crate::domain::article::NewArticle;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("category `{0}` appears more than once in the catalog")]
    DuplicateCategory(String),
    #[error("category `{category}` rejected: {source}")]
    Registration {
        category: String,
        #[source]
        source: ApplicationError,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<CategoryEntry>,
}

/// One category block. Articles may omit `category` and `categoryLabel`;
/// they inherit the block's values.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub category: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub articles: Vec<NewArticle>,
}

impl CategoryEntry {
    fn into_command(self) -> RegisterCategoryCommand {
        let Self {
            category,
            label,
            articles,
        } = self;

        let articles = articles
            .into_iter()
            .map(|mut article| {
                if article.category.is_empty() {
                    article.category.clone_from(&category);
                }
                if let Some(label) = label.as_ref().filter(|_| article.category_label.is_empty()) {
                    article.category_label.clone_from(label);
                }
                article
            })
            .collect();

        RegisterCategoryCommand { category, articles }
    }
}

impl CatalogDocument {
    /// # Errors
    ///
    /// `CatalogLoadError::Json` when the document does not match the schema.
    pub fn from_json(raw: &str) -> Result<Self, CatalogLoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// `CatalogLoadError::Io` when the file cannot be read, otherwise as
    /// [`CatalogDocument::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// The catalog shipped with the crate.
    ///
    /// # Errors
    ///
    /// `CatalogLoadError::Json` if the bundled document is malformed.
    pub fn embedded() -> Result<Self, CatalogLoadError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Registers every category in document order and returns the total
    /// number of articles registered. Stops at the first rejected category.
    ///
    /// # Errors
    ///
    /// `DuplicateCategory` when a category block is repeated (checked before
    /// anything is registered), `Registration` when a block fails validation.
    pub fn load_into(self, commands: &CatalogCommandService) -> Result<usize, CatalogLoadError> {
        self.ensure_unique_categories()?;

        let mut total = 0;
        for entry in self.categories {
            let category = entry.category.clone();
            total += commands
                .register_category(entry.into_command())
                .map_err(|source| CatalogLoadError::Registration { category, source })?;
        }
        tracing::info!(articles = total, "catalog loaded");
        Ok(total)
    }

    fn ensure_unique_categories(&self) -> Result<(), CatalogLoadError> {
        let mut seen = HashSet::with_capacity(self.categories.len());
        match self
            .categories
            .iter()
            .find(|entry| !seen.insert(entry.category.as_str()))
        {
            Some(entry) => Err(CatalogLoadError::DuplicateCategory(entry.category.clone())),
            None => Ok(()),
        }
    }
}
