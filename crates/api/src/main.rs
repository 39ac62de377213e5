use std::sync::Arc;

use anyhow::Context;

use catalog_api::config::AppConfig;
use catalog_products::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = AppConfig::from_env()?;

    let catalog = Arc::new(Catalog::new());
    if config.seed_demo {
        catalog_api::seed::demo_products(&catalog).context("failed to seed demo products")?;
        tracing::info!(products = catalog.len(), "seeded demo catalog");
    }

    let app = catalog_api::app::build_app(catalog);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
