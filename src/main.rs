use std::process::ExitCode;
use clap::Parser;
use dotenv::dotenv;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use maya_portal::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            warn!("maya-portal stopped due to: {:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
