use clap::Parser;
use cvpartner::utils::{logger, validation::Validate};
use cvpartner::{load_cv_file, summarize, CliConfig, CvLocation, CvSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting cvpartner CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let cv = match &settings.location {
        CvLocation::File(path) => load_cv_file(path),
        CvLocation::Api { user_id, cv_id } => match settings.client() {
            Ok(client) => client.get_cv(user_id, cv_id).await,
            Err(e) => Err(e),
        },
    };

    let summary = match cv.and_then(|cv| summarize(&cv, &settings.report)) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Failed to summarize CV: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    for skipped in &summary.skipped_certifications {
        tracing::warn!("{}", skipped);
    }

    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
