pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::domain::model::{EmissionFactors, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_bind_address, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "carbon-footprint")]
#[command(about = "A small carbon footprint report server")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:7860")]
    pub bind: String,

    #[arg(long, default_value = "./reports")]
    pub reports_path: String,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        &self.bind
    }

    fn reports_path(&self) -> &str {
        &self.reports_path
    }

    fn chart_size(&self) -> (u32, u32) {
        (DEFAULT_CHART_WIDTH, DEFAULT_CHART_HEIGHT)
    }

    fn factors(&self) -> EmissionFactors {
        EmissionFactors::default()
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_bind_address("bind", &self.bind)?;
        validate_path("reports_path", &self.reports_path)
    }
}
