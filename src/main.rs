use anyhow::Result;
use article_catalog::{
    ApplicationServices, CatalogDocument, InMemoryCategoryRegistry, config::AppConfig,
    domain::article::CategoryRepository,
};
use std::{fs, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    if let Err(err) = bootstrap() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let registry: Arc<dyn CategoryRepository> = Arc::new(InMemoryCategoryRegistry::new());
    let services = ApplicationServices::new(Arc::clone(&registry));

    let document = match config.catalog_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog from file");
            CatalogDocument::from_path(path)?
        }
        None => CatalogDocument::embedded()?,
    };
    document.load_into(&services.catalog_commands)?;

    for summary in services.article_queries.categories() {
        tracing::info!(
            category = %summary.category,
            label = summary.label.as_deref().unwrap_or("-"),
            articles = summary.article_count,
            "category ready"
        );
    }

    let feed = services.article_queries.list_all()?;
    let rendered = if config.snapshot_pretty() {
        serde_json::to_string_pretty(&feed)?
    } else {
        serde_json::to_string(&feed)?
    };

    match config.snapshot_path() {
        Some(path) => {
            fs::write(path, rendered)?;
            tracing::info!(path = %path.display(), articles = feed.len(), "feed snapshot written");
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
