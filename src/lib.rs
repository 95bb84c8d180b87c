//! Grassroots
//!
//! A server-rendered single-page client for a blockchain account/channel
//! application. The page is built from Leptos components and served by Axum.
//! A JSON-RPC handle and a signature provider are constructed from injected
//! configuration at startup and held in state.
//!
//! # Modules
//!
//! - [`chain`]: RPC handle and signature provider
//! - [`config`]: Layered configuration (defaults, file, env, CLI)
//! - [`model`]: Data shown by the components
//! - [`server`]: HTTP routes
//! - [`ui`]: Leptos components

pub mod chain;
pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use chain::ChainClient;
use model::User;

pub use error::{Error, Result};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Blockchain handles. Constructed at startup, not used by any route yet.
    pub chain: Arc<ChainClient>,
    /// Profile rendered in the server info panel.
    pub user: Arc<User>,
}

impl AppState {
    pub fn new(chain: ChainClient, user: User) -> Self {
        Self {
            chain: Arc::new(chain),
            user: Arc::new(user),
        }
    }
}
