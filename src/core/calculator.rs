use crate::domain::model::{EmissionBreakdown, EmissionFactors, Submission};
use chrono::Utc;

/// Derives the annual emission figures from a validated submission.
///
/// Utility bills are monthly, so they are annualized before the factor is
/// applied. The waste factor shrinks with the recycling rate and goes
/// negative above a 57% rate, which counts as an offset.
pub fn compute_breakdown(submission: &Submission, factors: &EmissionFactors) -> EmissionBreakdown {
    let energy_kg = submission.avg_electric_bill * 12.0 * factors.electricity_per_eur
        + submission.avg_gas_bill * 12.0 * factors.gas_per_eur
        + submission.avg_transport_cost * 12.0 * factors.transport_per_eur;

    let waste_kg = submission.monthly_waste_generated
        * 12.0
        * (factors.waste_base - submission.recycled_waste_percent / 100.0);

    let travel_kg =
        submission.annual_travel_kms * (1.0 / submission.fuel_efficiency) * factors.travel_per_km;

    EmissionBreakdown {
        company_name: submission.company_name.clone(),
        energy_kg,
        waste_kg,
        travel_kg,
        total_kg: energy_kg + waste_kg + travel_kg,
        generated_at: Utc::now(),
    }
}
