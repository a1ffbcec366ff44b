mod args;

use args::Cli;
use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;
use user_rpc::RpcServer;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_logging(&cli.log_level)?;

    let config = cli.server_config();
    tracing::info!(addr = %config.addr(), seed = config.seed, "starting users API");

    RpcServer::new(config).start().await?;

    Ok(())
}

fn init_logging(default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)?,
    };

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}
