pub mod calculator;
pub mod chart;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    EmissionBreakdown, EmissionFactors, RenderResult, Report, Submission,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
