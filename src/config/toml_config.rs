use crate::core::ConfigProvider;
use crate::domain::model::{
    EmissionFactors, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH,
};
use crate::utils::error::{CarbonError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_BIND: &str = "127.0.0.1:7860";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub report: ReportConfig,
    pub server: Option<ServerConfig>,
    pub factors: Option<FactorsConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
    pub chart_width: Option<u32>,
    pub chart_height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorsConfig {
    pub electricity_per_eur: Option<f64>,
    pub gas_per_eur: Option<f64>,
    pub transport_per_eur: Option<f64>,
    pub waste_base: Option<f64>,
    pub travel_per_km: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CarbonError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CarbonError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Substitutes environment variables written as ${VAR_NAME}.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_path("report.output_path", &self.report.output_path)?;

        if let Some(bind) = self.server.as_ref().and_then(|s| s.bind.as_deref()) {
            crate::utils::validation::validate_bind_address("server.bind", bind)?;
        }

        for (field, value) in [
            ("report.chart_width", self.report.chart_width),
            ("report.chart_height", self.report.chart_height),
        ] {
            if let Some(dimension) = value {
                if dimension == 0 {
                    return Err(CarbonError::InvalidConfigValueError {
                        field: field.to_string(),
                        value: dimension.to_string(),
                        reason: "Chart dimension must be greater than zero".to_string(),
                    });
                }
            }
        }

        if let Some(factors) = &self.factors {
            for (field, value) in [
                ("factors.electricity_per_eur", factors.electricity_per_eur),
                ("factors.gas_per_eur", factors.gas_per_eur),
                ("factors.transport_per_eur", factors.transport_per_eur),
                ("factors.waste_base", factors.waste_base),
                ("factors.travel_per_km", factors.travel_per_km),
            ] {
                if let Some(factor) = value {
                    crate::utils::validation::validate_positive_factor(field, factor)?;
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.bind.as_deref())
            .unwrap_or(DEFAULT_BIND)
    }

    fn reports_path(&self) -> &str {
        &self.report.output_path
    }

    fn chart_size(&self) -> (u32, u32) {
        (
            self.report.chart_width.unwrap_or(DEFAULT_CHART_WIDTH),
            self.report.chart_height.unwrap_or(DEFAULT_CHART_HEIGHT),
        )
    }

    fn factors(&self) -> EmissionFactors {
        let defaults = EmissionFactors::default();
        let Some(overrides) = &self.factors else {
            return defaults;
        };

        EmissionFactors {
            electricity_per_eur: overrides
                .electricity_per_eur
                .unwrap_or(defaults.electricity_per_eur),
            gas_per_eur: overrides.gas_per_eur.unwrap_or(defaults.gas_per_eur),
            transport_per_eur: overrides
                .transport_per_eur
                .unwrap_or(defaults.transport_per_eur),
            waste_base: overrides.waste_base.unwrap_or(defaults.waste_base),
            travel_per_km: overrides.travel_per_km.unwrap_or(defaults.travel_per_km),
        }
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
