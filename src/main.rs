use cardano_data_client::{cli::Args, logging::setup_tracing};
use clap::Parser;
use dotenvy::dotenv;
use tracing::debug;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    // Logging
    setup_tracing(args.log_level.clone().into());

    debug!(
        "Starting {} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    );

    cardano_data_client::cli::run(args).await
}
