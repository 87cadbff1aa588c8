use crate::domain::article::{Article, ArticlePayload, CategoryShelf};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub title: String,
    pub description: String,
    pub slug: String,
    pub category: String,
    pub category_label: String,
    pub date: String,
    pub read_time: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            title: article.title.into_inner(),
            description: article.description,
            slug: article.slug.into_inner(),
            category: article.category.into_inner(),
            category_label: article.category_label.into_inner(),
            date: article.date.into_inner(),
            read_time: article.read_time.into_inner(),
            tags: article.tags.into_inner(),
            payload: article.payload.map(ArticlePayload::into_inner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummaryDto {
    pub category: String,
    /// Absent while the category has no articles to take a label from.
    #[serde(default)]
    pub label: Option<String>,
    pub article_count: usize,
}

impl From<&CategoryShelf> for CategorySummaryDto {
    fn from(shelf: &CategoryShelf) -> Self {
        Self {
            category: shelf.category.as_str().to_owned(),
            label: shelf
                .articles
                .first()
                .map(|article| article.category_label.as_str().to_owned()),
            article_count: shelf.articles.len(),
        }
    }
}
