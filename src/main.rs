use clap::Parser;
use iss_crew::utils::{logger, validation::Validate};
use iss_crew::{CliConfig, CrewEngine, HttpFetcher};

// One request per run; a current-thread runtime is all the blocking GET needs.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting iss-crew CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let fetcher = HttpFetcher::new(config)?;
    let engine = CrewEngine::new(fetcher);

    match engine.run().await {
        Ok(craft) => {
            tracing::info!("✅ Crew fetch completed successfully");
            println!("{}", craft);
        }
        Err(e) => {
            tracing::error!("❌ Crew fetch failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
