use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

use crate::chain::DEFAULT_RPC_ENDPOINT;
use crate::model::User;

/// Fallback config file looked up in the base directory.
const FALLBACK_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Blockchain node JSON-RPC endpoint
    #[arg(long, env = "RPC_ENDPOINT")]
    pub rpc_endpoint: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub chain: ChainConfig,
    pub profile: User,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone)]
pub struct ChainConfig {
    pub rpc_endpoint: String,
    /// Signing key, injected through the environment or a local config file.
    #[serde(default)]
    pub private_key: Option<String>,
}

impl std::fmt::Debug for ChainConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainConfig")
            .field("rpc_endpoint", &self.rpc_endpoint)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ServerConfig {
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::load_from_args_in(args, Path::new("."))
    }

    /// Like [`AppConfig::load_from_args`], but looks for the fallback
    /// `config.yaml` in `base_dir` instead of the working directory.
    pub fn load_from_args_in<I, T>(args: I, base_dir: &Path) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "127.0.0.1")?
            .set_default("chain.rpc_endpoint", DEFAULT_RPC_ENDPOINT)?
            .set_default("profile.profile_name", "Anonymous")?
            .set_default("profile.image", "")?;

        // Explicit file must exist; the fallback is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::new(path, FileFormat::Yaml)),
            None => builder.add_source(
                File::from(base_dir.join(FALLBACK_CONFIG_FILE))
                    .format(FileFormat::Yaml)
                    .required(false),
            ),
        };

        // E.g. GRASSROOTS_SERVER__PORT=8000, GRASSROOTS_CHAIN__PRIVATE_KEY=...
        // Values stay strings; deserialization converts numeric fields.
        builder = builder.add_source(
            Environment::with_prefix("GRASSROOTS")
                .prefix_separator("_")
                .separator("__"),
        );

        // Priority: CLI flag > CLI env var > GRASSROOTS_ env > file > defaults.
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(endpoint) = cli.rpc_endpoint {
            builder = builder.set_override("chain.rpc_endpoint", endpoint)?;
        }

        builder.build()?.try_deserialize()
    }
}
