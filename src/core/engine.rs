use crate::core::Pipeline;
use crate::domain::model::{Report, Submission};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::Validate;

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs validate, compute, render and export for one submission.
    pub async fn run(&self, submission: Submission) -> Result<Report> {
        submission.validate()?;

        tracing::info!("Computing footprint for \"{}\"", submission.company_name);
        let breakdown = self.pipeline.compute(&submission).await?;
        tracing::info!(
            "💨 Estimated footprint: {:.1} kg CO2e per year",
            breakdown.total_kg
        );

        let rendered = self.pipeline.render(&submission, &breakdown).await?;

        let file_name = self.pipeline.export(&breakdown, &rendered).await?;
        tracing::info!("📁 Report bundle saved as {}", file_name);

        self.monitor.log_stats("Report generated");

        Ok(Report {
            breakdown,
            summary_html: rendered.summary_html,
            chart_svg: rendered.chart_svg,
            file_name,
        })
    }
}
