use clap::Parser;
use opscan::utils::{logger, validation::Validate};
use opscan::{CliConfig, LocalStore, ScanEngine, ScanPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting opscan");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let verbose = config.verbose;
    let pipeline = ScanPipeline::new(LocalStore::new(), config);
    let engine = ScanEngine::new(pipeline);

    match engine.run().await {
        Ok(records) => {
            tracing::info!("✅ Matched {} client operations", records.len());
            if verbose {
                tracing::debug!("Operation records: {}", serde_json::to_string_pretty(&records)?);
            }
            for record in &records {
                println!("{}", record.name);
            }
        }
        Err(e) => {
            tracing::error!("❌ Scan failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
