use article_catalog::{
    ApplicationError, GetArticleBySlugQuery, ListCategoryArticlesQuery,
};

mod support;
use support::{
    ArticleBuilder, BLOCKCHAIN_ARTICLES, TOOLS_ARTICLES, blockchain, dates, register,
    seeded_services, services, slugs, tool,
};

fn by_category(services: &article_catalog::ApplicationServices, category: &str) -> Vec<article_catalog::ArticleDto> {
    services
        .article_queries
        .list_by_category(ListCategoryArticlesQuery {
            category: category.into(),
        })
}

#[test]
fn single_category_feed_is_newest_first() {
    let services = services();
    register(&services, "blockchain", &BLOCKCHAIN_ARTICLES);

    let feed = services.article_queries.list_all().unwrap();
    assert_eq!(dates(&feed), vec!["2026-02-02", "2026-01-03", "2026-01-02"]);
}

#[test]
fn second_category_interleaves_by_date() {
    let services = seeded_services();

    let feed = services.article_queries.list_all().unwrap();
    assert_eq!(
        dates(&feed),
        vec!["2026-02-02", "2026-01-12", "2026-01-03", "2026-01-02"]
    );
    assert_eq!(feed[1].slug, "usdc-cctp-bridge");
    assert_eq!(feed[1].category_label, "Tools");
}

#[test]
fn registration_order_of_categories_does_not_change_distinct_dates() {
    let forward = seeded_services();
    let backward = services();
    register(&backward, "tools", &TOOLS_ARTICLES);
    register(&backward, "blockchain", &BLOCKCHAIN_ARTICLES);

    assert_eq!(
        forward.article_queries.list_all().unwrap(),
        backward.article_queries.list_all().unwrap()
    );
}

#[test]
fn repeated_listing_is_identical() {
    let services = seeded_services();
    let first = services.article_queries.list_all().unwrap();
    for _ in 0..5 {
        assert_eq!(services.article_queries.list_all().unwrap(), first);
    }
}

#[test]
fn feed_dates_never_increase() {
    let services = services();
    register(
        &services,
        "blockchain",
        &[
            blockchain("a", "2025-12-31"),
            blockchain("b", "2026-03-15"),
            blockchain("c", "2026-01-01"),
            blockchain("d", "2026-03-15"),
        ],
    );
    register(
        &services,
        "tools",
        &[tool("e", "2026-02-01"), tool("f", "2024-07-04")],
    );

    let feed = services.article_queries.list_all().unwrap();
    assert!(feed.windows(2).all(|pair| pair[0].date >= pair[1].date));
}

#[test]
fn equal_dates_follow_collection_order() {
    let services = services();
    register(
        &services,
        "blockchain",
        &[blockchain("chain-one", "2026-01-05"), blockchain("chain-two", "2026-01-05")],
    );
    register(&services, "tools", &[tool("tool-one", "2026-01-05")]);
    // Re-registering keeps blockchain ahead of tools in collection order.
    register(
        &services,
        "blockchain",
        &[blockchain("chain-two", "2026-01-05"), blockchain("chain-one", "2026-01-05")],
    );

    let feed = services.article_queries.list_all().unwrap();
    assert_eq!(slugs(&feed), vec!["chain-two", "chain-one", "tool-one"]);
}

#[test]
fn every_feed_article_appears_in_its_own_category_once() {
    let services = seeded_services();
    let feed = services.article_queries.list_all().unwrap();
    let categories = ["blockchain", "tools"];

    for article in &feed {
        for category in categories {
            let hits = by_category(&services, category)
                .iter()
                .filter(|candidate| *candidate == article)
                .count();
            let expected = usize::from(article.category == category);
            assert_eq!(hits, expected, "{} in {category}", article.slug);
        }
    }

    let total: usize = categories
        .iter()
        .map(|category| by_category(&services, category).len())
        .sum();
    assert_eq!(total, feed.len());
}

#[test]
fn category_listing_keeps_registration_order() {
    let services = services();
    register(
        &services,
        "blockchain",
        &[
            blockchain("impermanent-loss", "2026-02-02"),
            blockchain("pumpfun-with-raydium", "2026-01-02"),
            blockchain("uniswapv3-tick-easy-way", "2026-01-03"),
        ],
    );

    let listed = by_category(&services, "blockchain");
    assert_eq!(
        slugs(&listed),
        vec!["impermanent-loss", "pumpfun-with-raydium", "uniswapv3-tick-easy-way"]
    );
}

#[test]
fn unknown_or_malformed_category_lists_nothing() {
    let services = seeded_services();
    assert!(by_category(&services, "defi").is_empty());
    assert!(by_category(&services, "Block Chain").is_empty());
}

#[test]
fn find_by_slug_returns_matching_record() {
    let services = seeded_services();
    let article = services
        .article_queries
        .find_by_slug(GetArticleBySlugQuery {
            category: "blockchain".into(),
            slug: "impermanent-loss".into(),
        })
        .unwrap();
    assert_eq!(article.slug, "impermanent-loss");
    assert_eq!(article.category, "blockchain");
    assert_eq!(article.date, "2026-02-02");
}

#[test]
fn find_by_slug_reports_not_found() {
    let services = seeded_services();
    let cases = [
        ("blockchain", "does-not-exist"),
        ("tools", "impermanent-loss"),
        ("defi", "impermanent-loss"),
        ("blockchain", "Not A Slug"),
    ];
    for (category, slug) in cases {
        let err = services
            .article_queries
            .find_by_slug(GetArticleBySlugQuery {
                category: category.into(),
                slug: slug.into(),
            })
            .unwrap_err();
        assert!(err.is_not_found(), "{category}/{slug}: {err}");
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }
}

#[test]
fn broken_date_fails_the_whole_feed() {
    let services = seeded_services();
    register(
        &services,
        "tools",
        &[
            tool("usdc-cctp-bridge", "2026-01-12"),
            ArticleBuilder::new("half-written")
                .category("tools", "Tools")
                .date("2026-13-40")
                .build(),
        ],
    );

    match services.article_queries.list_all() {
        Err(ApplicationError::DataIntegrity { slug, .. }) => assert_eq!(slug, "half-written"),
        other => panic!("unexpected result: {other:?}"),
    }

    // Category pages do not parse dates and keep working.
    assert_eq!(by_category(&services, "tools").len(), 2);
}

#[test]
fn categories_are_summarised_in_registration_order() {
    let services = seeded_services();
    register(&services, "research", &[]);

    let summaries = services.article_queries.categories();
    let shape: Vec<_> = summaries
        .iter()
        .map(|summary| {
            (
                summary.category.as_str(),
                summary.label.as_deref(),
                summary.article_count,
            )
        })
        .collect();
    assert_eq!(
        shape,
        vec![
            ("blockchain", Some("Blockchain"), 3),
            ("tools", Some("Tools"), 1),
            ("research", None, 0),
        ]
    );
}
