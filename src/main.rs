use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use activity_signup::config::Config;
use activity_signup::database::{activities_repo, ActivityDirectory};
use activity_signup::web;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env();

    let directory = Arc::new(ActivityDirectory::seeded());
    info!(
        "Loaded {} activities",
        activities_repo::list_activities(&directory).len()
    );

    let app = web::build_router(directory, &config.static_dir);

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            warn!(
                "Could not bind {}: {}. Trying fallback {}",
                config.bind_addr(),
                e,
                config.fallback_bind_addr()
            );
            tokio::net::TcpListener::bind(config.fallback_bind_addr())
                .await
                .with_context(|| format!("binding {}", config.fallback_bind_addr()))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);
    info!("Open http://{}/ to manage signups", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
