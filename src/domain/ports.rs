use crate::domain::model::{EmissionBreakdown, EmissionFactors, RenderResult, Submission};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_address(&self) -> &str;
    fn reports_path(&self) -> &str;
    fn chart_size(&self) -> (u32, u32);
    fn factors(&self) -> EmissionFactors;
    fn monitoring_enabled(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn compute(&self, submission: &Submission) -> Result<EmissionBreakdown>;
    async fn render(
        &self,
        submission: &Submission,
        breakdown: &EmissionBreakdown,
    ) -> Result<RenderResult>;
    async fn export(&self, breakdown: &EmissionBreakdown, result: &RenderResult) -> Result<String>;
}
