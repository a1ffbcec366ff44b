//! Command-line and environment configuration.

use clap::Parser;
use user_rpc::ServerConfig;

/// In-memory users API server.
#[derive(Parser, Debug)]
#[command(name = "users-api", version, about)]
pub struct Cli {
    /// Interface to bind.
    #[arg(long, env = "USERS_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, short, env = "USERS_API_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Start with an empty collection instead of the sample records.
    #[arg(long, env = "USERS_API_NO_SEED", default_value_t = false)]
    pub no_seed: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            seed: !self.no_seed,
        }
    }
}
