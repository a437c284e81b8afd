use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cabin_watch::{CabinWatcher, EmailNotifier, WatchConfig, helpers::ferry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let config = WatchConfig::from_env()?;
    info!("Starting cabin watch for route {}", config.route_code);

    let client = ferry::ferry_client_init()?;
    let notifier = EmailNotifier::new(config.email.clone());
    let watcher = CabinWatcher::new(client, notifier, config);

    let hits = watcher.run().await?;
    info!("Check finished with {} hit(s)", hits.len());
    Ok(())
}
