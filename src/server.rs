use axum::{
    Json, Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use leptos::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::chain::ChainClient;
use crate::config::AppConfig;
use crate::model::User;
use crate::ui::{Shell, render_to_html};

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/profile", get(profile_handler))
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Construct state from configuration, bind, and serve until shutdown.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let chain = ChainClient::from_config(&config.chain)?;
    let state = AppState::new(chain, config.profile.clone());

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "server.started",
        address = %format!("http://{address}"),
        "Server started"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let user = state.user.as_ref().clone();
    Html(render_to_html(move || view! { <Shell user=user/> }))
}

async fn profile_handler(State(state): State<AppState>) -> Json<User> {
    Json(state.user.as_ref().clone())
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    rpc_endpoint: String,
    signing_keys: usize,
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        rpc_endpoint: state.chain.rpc.endpoint().to_string(),
        signing_keys: state.chain.signer.key_count(),
    })
}
