//! Blockchain client handles.
//!
//! The RPC handle and signature provider are built once at startup from
//! configuration and kept in application state. Nothing here sends requests
//! or produces signatures yet.
//!
//! # Modules
//!
//! - [`rpc`]: JSON-RPC endpoint handle
//! - [`signer`]: Local signature provider

pub mod rpc;
pub mod signer;

pub use rpc::{DEFAULT_RPC_ENDPOINT, JsonRpc};
pub use signer::{PrivateKey, SignatureProvider};

use crate::config::ChainConfig;
use crate::error::Result;

/// RPC handle and signature provider, bundled.
#[derive(Debug, Clone)]
pub struct ChainClient {
    pub rpc: JsonRpc,
    pub signer: SignatureProvider,
}

impl ChainClient {
    /// Construct both handles from injected configuration.
    pub fn from_config(config: &ChainConfig) -> Result<Self> {
        let rpc = JsonRpc::new(&config.rpc_endpoint)?;
        let signer = match config.private_key.as_deref() {
            Some(key) if !key.trim().is_empty() => SignatureProvider::new([key])?,
            _ => SignatureProvider::empty(),
        };

        tracing::info!(
            name: "chain.client.ready",
            endpoint = %rpc.endpoint(),
            signing_keys = signer.key_count(),
            "Chain client constructed"
        );

        Ok(Self { rpc, signer })
    }
}
