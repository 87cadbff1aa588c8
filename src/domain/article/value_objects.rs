use crate::domain::errors::{DomainError, DomainResult};
use chrono::NaiveDate;
use std::fmt;

/// A slug is URL-safe when it is already in its own slugified form:
/// lowercase ASCII alphanumerics separated by single hyphens.
fn is_url_safe(value: &str) -> bool {
    !value.is_empty() && slug::slugify(value) == value
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the title is blank.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleSlug(String);

impl ArticleSlug {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the slug is blank or not URL-safe.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_url_safe(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must be lowercase and hyphen-separated"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category tag owning a registry, e.g. `blockchain` or `tools`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the tag is empty or not URL-safe.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if !is_url_safe(&value) {
            return Err(DomainError::Validation(format!(
                "category `{value}` must be a non-empty lowercase tag"
            )));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLabel(String);

impl CategoryLabel {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when the label is blank.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "category label cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Publication date as authored (`YYYY-MM-DD`).
///
/// The text is kept verbatim and only parsed when the feed is ordered, so a
/// malformed date surfaces as a data-integrity failure of the aggregation
/// rather than being repaired or dropped at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicationDate(String);

impl PublicationDate {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// # Errors
    ///
    /// Describes why the text is not a `YYYY-MM-DD` calendar date.
    pub fn parse(&self) -> Result<NaiveDate, String> {
        let bytes = self.0.as_bytes();
        let shaped = bytes.len() == 10
            && bytes.iter().enumerate().all(|(idx, byte)| match idx {
                4 | 7 => *byte == b'-',
                _ => byte.is_ascii_digit(),
            });
        if !shaped {
            return Err(format!("date `{}` is not in YYYY-MM-DD form", self.0));
        }
        NaiveDate::parse_from_str(&self.0, Self::FORMAT)
            .map_err(|err| format!("date `{}` is not a calendar date: {err}", self.0))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display-only reading estimate such as `15 min read`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadTime(String);

impl ReadTime {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleTags(Vec<String>);

impl ArticleTags {
    #[must_use]
    pub fn new(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(tags.into_iter().map(Into::into).collect())
    }

    /// Tags as authored, duplicates included.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Set view of the tags; the first occurrence of each label wins.
    #[must_use]
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.0
            .iter()
            .map(String::as_str)
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Long-form content attached to an article. Never inspected by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticlePayload(serde_json::Value);

impl ArticlePayload {
    #[must_use]
    pub const fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> serde_json::Value {
        self.0
    }
}
