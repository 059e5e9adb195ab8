use crate::utils::error::Result;
use crate::utils::validation::{
    validate_amount_ceiling, validate_company_name, validate_percentage, validate_positive_amount,
    Validate,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sanity ceiling for the monthly electricity bill, in EUR.
pub const ELECTRIC_BILL_CEILING: f64 = 10_000.0;
/// Sanity ceiling for monthly waste generation, in kg.
pub const MONTHLY_WASTE_CEILING: f64 = 1_000.0;

pub const DEFAULT_CHART_WIDTH: u32 = 1400;
pub const DEFAULT_CHART_HEIGHT: u32 = 800;

/// The raw form inputs for one footprint computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub company_name: String,
    pub avg_electric_bill: f64,
    pub avg_gas_bill: f64,
    pub avg_transport_cost: f64,
    pub monthly_waste_generated: f64,
    pub recycled_waste_percent: f64,
    pub annual_travel_kms: f64,
    pub fuel_efficiency: f64,
}

impl Validate for Submission {
    fn validate(&self) -> Result<()> {
        validate_company_name("Company name", &self.company_name)?;

        let non_zero_fields = [
            ("Electricity bill", self.avg_electric_bill),
            ("Gas bill", self.avg_gas_bill),
            ("Transport cost", self.avg_transport_cost),
            ("Monthly waste", self.monthly_waste_generated),
            ("Annual travel distance", self.annual_travel_kms),
            ("Fuel efficiency", self.fuel_efficiency),
        ];

        for (name, value) in non_zero_fields {
            validate_positive_amount(name, value)?;
        }

        validate_amount_ceiling("Electricity bill", self.avg_electric_bill, ELECTRIC_BILL_CEILING)?;
        validate_amount_ceiling(
            "Monthly waste",
            self.monthly_waste_generated,
            MONTHLY_WASTE_CEILING,
        )?;

        validate_percentage("Recycled waste percent", self.recycled_waste_percent)
    }
}

/// Multiplicative constants of the footprint formula, all in kg CO2e.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EmissionFactors {
    /// Per EUR of monthly electricity spend.
    pub electricity_per_eur: f64,
    /// Per EUR of monthly gas spend.
    pub gas_per_eur: f64,
    /// Per EUR of monthly transport fuel spend.
    pub transport_per_eur: f64,
    /// Base factor per kg of monthly waste, reduced by the recycling rate.
    pub waste_base: f64,
    /// Applied to annual travel distance divided by fuel efficiency.
    pub travel_per_km: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            electricity_per_eur: 0.0005,
            gas_per_eur: 0.0053,
            transport_per_eur: 2.32,
            waste_base: 0.57,
            travel_per_km: 2.31,
        }
    }
}

/// Derived emission figures for one submission, annual kg CO2e.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionBreakdown {
    pub company_name: String,
    pub energy_kg: f64,
    pub waste_kg: f64,
    pub travel_kg: f64,
    pub total_kg: f64,
    pub generated_at: DateTime<Utc>,
}

/// Intermediate render outputs, before they are bundled for download.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub summary_html: String,
    pub chart_svg: String,
    pub figures_csv: String,
}

/// The finished report handed back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub breakdown: EmissionBreakdown,
    pub summary_html: String,
    pub chart_svg: String,
    pub file_name: String,
}
