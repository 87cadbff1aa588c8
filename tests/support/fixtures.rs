// tests/support/fixtures.rs
use std::sync::Arc;

use article_catalog::{
    ApplicationServices, ArticleDto, InMemoryCategoryRegistry, RegisterCategoryCommand,
    domain::article::NewArticle,
};
use once_cell::sync::Lazy;

use super::builders::{blockchain, tool};

/// Scenario A data: three blockchain articles in authoring order.
pub static BLOCKCHAIN_ARTICLES: Lazy<Vec<NewArticle>> = Lazy::new(|| {
    vec![
        blockchain("pumpfun-with-raydium", "2026-01-02"),
        blockchain("uniswapv3-tick-easy-way", "2026-01-03"),
        blockchain("impermanent-loss", "2026-02-02"),
    ]
});

/// Scenario B addition: one tools entry.
pub static TOOLS_ARTICLES: Lazy<Vec<NewArticle>> =
    Lazy::new(|| vec![tool("usdc-cctp-bridge", "2026-01-12")]);

pub fn services() -> ApplicationServices {
    ApplicationServices::new(Arc::new(InMemoryCategoryRegistry::new()))
}

pub fn register(services: &ApplicationServices, category: &str, articles: &[NewArticle]) {
    services
        .catalog_commands
        .register_category(RegisterCategoryCommand {
            category: category.into(),
            articles: articles.to_vec(),
        })
        .expect("fixture registration must succeed");
}

/// Blockchain then tools, as the original site assembles them.
pub fn seeded_services() -> ApplicationServices {
    let services = services();
    register(&services, "blockchain", &BLOCKCHAIN_ARTICLES);
    register(&services, "tools", &TOOLS_ARTICLES);
    services
}

pub fn slugs(articles: &[ArticleDto]) -> Vec<&str> {
    articles.iter().map(|article| article.slug.as_str()).collect()
}

pub fn dates(articles: &[ArticleDto]) -> Vec<&str> {
    articles.iter().map(|article| article.date.as_str()).collect()
}
