// tests/support/builders.rs
use article_catalog::domain::article::NewArticle;

pub struct ArticleBuilder {
    title: String,
    slug: String,
    category: String,
    category_label: String,
    date: String,
    tags: Vec<String>,
}

impl ArticleBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: format!("Article {slug}"),
            slug,
            category: "blockchain".into(),
            category_label: "Blockchain".into(),
            date: "2026-01-01".into(),
            tags: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>, label: impl Into<String>) -> Self {
        self.category = category.into();
        self.category_label = label.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.category_label = label.into();
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| (*tag).to_owned()).collect();
        self
    }

    pub fn build(self) -> NewArticle {
        NewArticle {
            title: self.title,
            description: String::new(),
            slug: self.slug,
            category: self.category,
            category_label: self.category_label,
            date: self.date,
            read_time: "5 min read".into(),
            tags: self.tags,
            payload: None,
        }
    }
}

pub fn blockchain(slug: &str, date: &str) -> NewArticle {
    ArticleBuilder::new(slug).date(date).build()
}

pub fn tool(slug: &str, date: &str) -> NewArticle {
    ArticleBuilder::new(slug)
        .category("tools", "Tools")
        .date(date)
        .build()
}
