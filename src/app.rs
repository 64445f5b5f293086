/*
 * Responsibility
 * - Config読み込み → 依存生成 (PgPool / Valkey) → Router 組み立て
 * - Middleware の適用 (HTTP/CORS/Security headers)
 * - axum::serve() で起動、Ctrl-C で graceful shutdown
 */
use std::{panic, process, sync::Arc};

use anyhow::{Context, Result};
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api, config::Config, middleware, repos::poll_repo::PgPollRepo,
    services::votes::ValkeyTallyStore, state::AppState,
};

fn init_tracing() {
    // RUST_LOG=info,poll_api=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development crashes loudly; production keeps serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting poll API in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config).await?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn build_state(config: &Config) -> Result<AppState> {
    let db = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await
        .context("failed to connect to postgres")?;

    let tallies = ValkeyTallyStore::connect(&config.valkey_url, config.vote_key_prefix.clone())
        .await
        .context("failed to connect to valkey")?;

    Ok(AppState::new(
        Arc::new(PgPollRepo::new(db)),
        Arc::new(tallies),
    ))
}

/// Routes without the HTTP middleware stack.
///
/// The poll route is served both unprefixed and under `/api/v1`.
pub fn build_api(state: AppState) -> Router {
    Router::new()
        .merge(api::v1::polls())
        .nest("/api/v1", api::v1::routes())
        .with_state(state)
}

fn build_router(state: AppState, config: &Config) -> Router {
    let router = build_api(state);

    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
