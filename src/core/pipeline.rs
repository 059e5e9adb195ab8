use crate::core::chart;
use crate::core::{calculator, ConfigProvider, Pipeline, Storage};
use crate::domain::model::{EmissionBreakdown, RenderResult, Submission};
use crate::utils::error::{CarbonError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Report files are named after the company: lowercased, spaces replaced
/// with underscores, truncated to 10 characters.
fn report_slug(company_name: &str) -> String {
    company_name
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .take(10)
        .collect()
}

fn figures_csv(breakdown: &EmissionBreakdown) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(["category", "kg_co2e_per_year"])?;
    writer.write_record(["energy", format!("{:.2}", breakdown.energy_kg).as_str()])?;
    writer.write_record(["waste", format!("{:.2}", breakdown.waste_kg).as_str()])?;
    writer.write_record(["business_travel", format!("{:.2}", breakdown.travel_kg).as_str()])?;
    writer.write_record(["total", format!("{:.2}", breakdown.total_kg).as_str()])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| CarbonError::ProcessingError {
            message: format!("CSV buffer error: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| CarbonError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

fn summary_html(
    submission: &Submission,
    breakdown: &EmissionBreakdown,
    chart_svg: &str,
) -> String {
    let chart_b64 = BASE64.encode(chart_svg.as_bytes());

    format!(
        r#"<div class="report-summary">
  <h3>Carbon Footprint Summary for {company}</h3>
  <ul>
    <li>🏭 <strong>Total carbon impact</strong>: {total:.1} kg CO2e per year</li>
    <li>💡 <strong>Energy consumption</strong>: €{energy_spend:.2} per month ({energy:.1} kg CO2e)</li>
    <li>🚗 <strong>Business travel</strong>: {kms} km per year ({travel:.1} kg CO2e)</li>
    <li>🗑️ <strong>Waste management</strong>: {waste_in} kg per month, {recycled}% recycled ({waste:.1} kg CO2e)</li>
  </ul>
  <img src="data:image/svg+xml;base64,{chart_b64}" style="max-width: 100%; height: auto;" alt="Carbon footprint chart"/>
</div>"#,
        company = breakdown.company_name,
        total = breakdown.total_kg,
        energy_spend = submission.avg_electric_bill + submission.avg_gas_bill,
        energy = breakdown.energy_kg,
        kms = submission.annual_travel_kms,
        travel = breakdown.travel_kg,
        waste_in = submission.monthly_waste_generated,
        recycled = submission.recycled_waste_percent,
        waste = breakdown.waste_kg,
        chart_b64 = chart_b64,
    )
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    async fn compute(&self, submission: &Submission) -> Result<EmissionBreakdown> {
        tracing::debug!("Computing emission figures for {}", submission.company_name);

        Ok(calculator::compute_breakdown(submission, &self.config.factors()))
    }

    async fn render(
        &self,
        submission: &Submission,
        breakdown: &EmissionBreakdown,
    ) -> Result<RenderResult> {
        let (width, height) = self.config.chart_size();

        tracing::debug!("Rendering {}x{} chart", width, height);
        let chart_svg = chart::render_chart(breakdown, width, height)?;

        Ok(RenderResult {
            summary_html: summary_html(submission, breakdown, &chart_svg),
            figures_csv: figures_csv(breakdown)?,
            chart_svg,
        })
    }

    async fn export(&self, breakdown: &EmissionBreakdown, result: &RenderResult) -> Result<String> {
        let file_name = format!("{}_report.zip", report_slug(&breakdown.company_name));

        let zip_data = {
            let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

            zip.start_file::<_, ()>("summary.html", FileOptions::default())?;
            zip.write_all(result.summary_html.as_bytes())?;

            zip.start_file::<_, ()>("chart.svg", FileOptions::default())?;
            zip.write_all(result.chart_svg.as_bytes())?;

            zip.start_file::<_, ()>("figures.csv", FileOptions::default())?;
            zip.write_all(result.figures_csv.as_bytes())?;

            let cursor = zip.finish()?;
            cursor.into_inner()
        };

        tracing::debug!(
            "Writing report bundle {} ({} bytes) to storage",
            file_name,
            zip_data.len()
        );
        self.storage.write_file(&file_name, &zip_data).await?;

        Ok(file_name)
    }
}
