use anyhow::Context;
use carbon_footprint::utils::{logger, validation::Validate};
use carbon_footprint::{server, CliConfig, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting carbon-footprint server");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(path) = cli.config.clone() {
        let config = TomlConfig::from_file(&path)
            .with_context(|| format!("Failed to load config file {}", path))?;

        if let Err(e) = config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }

        server::serve(config).await.context("Server terminated abnormally")?;
    } else {
        if let Err(e) = cli.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }

        server::serve(cli).await.context("Server terminated abnormally")?;
    }

    Ok(())
}
