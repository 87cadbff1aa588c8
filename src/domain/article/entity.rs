// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticlePayload, ArticleSlug, ArticleTags, ArticleTitle, Category, CategoryLabel,
    PublicationDate, ReadTime,
};
use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use serde::Deserialize;

/// A catalog entry. Built once while the catalog is assembled and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: ArticleTitle,
    pub description: String,
    pub slug: ArticleSlug,
    pub category: Category,
    pub category_label: CategoryLabel,
    pub date: PublicationDate,
    pub read_time: ReadTime,
    pub tags: ArticleTags,
    pub payload: Option<ArticlePayload>,
}

impl Article {
    /// Parsed publication date, or a data-integrity error naming this article.
    ///
    /// # Errors
    ///
    /// `DomainError::DataIntegrity` when the date does not parse.
    pub fn published_on(&self) -> DomainResult<NaiveDate> {
        self.date
            .parse()
            .map_err(|reason| DomainError::data_integrity(self.slug.as_str(), reason))
    }

    #[must_use]
    pub fn distinct_tags(&self) -> Vec<&str> {
        self.tags.distinct()
    }

    #[must_use]
    pub fn is_in(&self, category: &Category) -> bool {
        &self.category == category
    }
}

/// Article record as authored by the catalog loader, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub slug: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub category_label: String,
    pub date: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

impl TryFrom<NewArticle> for Article {
    type Error = DomainError;

    fn try_from(value: NewArticle) -> DomainResult<Self> {
        Ok(Self {
            title: ArticleTitle::new(value.title)?,
            description: value.description,
            slug: ArticleSlug::new(value.slug)?,
            category: Category::new(value.category)?,
            category_label: CategoryLabel::new(value.category_label)?,
            date: PublicationDate::new(value.date),
            read_time: ReadTime::new(value.read_time),
            tags: ArticleTags::new(value.tags),
            payload: value.payload.map(ArticlePayload::new),
        })
    }
}
