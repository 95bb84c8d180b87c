//! JSON-RPC handle for a blockchain node.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default local node address.
pub const DEFAULT_RPC_ENDPOINT: &str = "http://127.0.0.1:8888";

/// Handle for submitting queries to a node over HTTP JSON-RPC.
///
/// Holds a validated endpoint and a pooled HTTP client. Cloning is cheap
/// (`reqwest::Client` is reference counted).
#[derive(Debug, Clone)]
pub struct JsonRpc {
    endpoint: Url,
    /// Pooled client for node requests; nothing issues any yet.
    #[allow(dead_code)]
    http: reqwest::Client,
}

impl JsonRpc {
    /// Build a handle for `endpoint`. No connection is made.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint.trim())?;
        match endpoint.scheme() {
            "http" | "https" => {}
            other => {
                return Err(Error::InvalidEndpoint(format!(
                    "unsupported scheme `{other}`"
                )));
            }
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { endpoint, http })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_parses() {
        let rpc = JsonRpc::new(DEFAULT_RPC_ENDPOINT).unwrap();
        assert_eq!(rpc.endpoint().host_str(), Some("127.0.0.1"));
        assert_eq!(rpc.endpoint().port(), Some(8888));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = JsonRpc::new("ws://127.0.0.1:8888").unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint(_)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(JsonRpc::new("not a url").is_err());
    }
}
