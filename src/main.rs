use clap::Parser;
use user_loader::utils::{logger, validation::Validate};
use user_loader::{BatchRunner, FileLogSink, HttpUserApi, ImportConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ImportConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting user-loader");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let sink = FileLogSink::open(&config.log_file)?;
    let api = HttpUserApi::new(&config)?;
    let runner = BatchRunner::new(api, config, sink);

    runner.run().await?;

    tracing::info!("✅ Import run finished");
    Ok(())
}
