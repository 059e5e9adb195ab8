use crate::config::cli::LocalStorage;
use crate::core::engine::ReportEngine;
use crate::core::pipeline::ReportPipeline;
use crate::core::{ConfigProvider, Storage};
use crate::domain::model::{Report, Submission};
use crate::utils::error::{CarbonError, Result};
use axum::extract::{Form, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

pub struct AppState<C: ConfigProvider> {
    inner: Arc<AppStateInner<C>>,
}

struct AppStateInner<C: ConfigProvider> {
    engine: ReportEngine<ReportPipeline<LocalStorage, C>>,
    storage: LocalStorage,
    started: Instant,
}

impl<C: ConfigProvider> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C: ConfigProvider + Send + Sync + 'static> AppState<C> {
    pub fn new(config: C) -> Self {
        let storage = LocalStorage::new(config.reports_path().to_string());
        let monitor_enabled = config.monitoring_enabled();
        let engine = ReportEngine::new_with_monitoring(
            ReportPipeline::new(storage.clone(), config),
            monitor_enabled,
        );

        Self {
            inner: Arc::new(AppStateInner {
                engine,
                storage,
                started: Instant::now(),
            }),
        }
    }
}

pub fn router<C>(state: AppState<C>) -> Router
where
    C: ConfigProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(index))
        .route("/report", post(generate_report::<C>))
        .route("/reports/{file}", get(download_report::<C>))
        .route("/health", get(health::<C>))
        .with_state(state)
}

/// Binds the configured address and serves the calculator until shutdown.
pub async fn serve<C>(config: C) -> Result<()>
where
    C: ConfigProvider + Send + Sync + 'static,
{
    let bind = config.bind_address().to_string();
    let state = AppState::new(config);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("🌍 Carbon footprint calculator listening on http://{}", bind);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

impl IntoResponse for CarbonError {
    fn into_response(self) -> Response {
        match &self {
            CarbonError::ValidationError { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(format!(
                    r#"<div class="error">❌ {}</div><p><a href="/">Fix the input and resubmit</a></p>"#,
                    self
                )),
            )
                .into_response(),
            _ => {
                tracing::error!("Report generation failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(r#"<div class="error">Report generation failed, see server log</div>"#.to_string()),
                )
                    .into_response()
            }
        }
    }
}

async fn index() -> Html<&'static str> {
    Html(FORM_PAGE)
}

async fn generate_report<C>(
    State(state): State<AppState<C>>,
    Form(submission): Form<Submission>,
) -> Response
where
    C: ConfigProvider + Send + Sync + 'static,
{
    match state.inner.engine.run(submission).await {
        Ok(report) => Html(report_page(&report)).into_response(),
        Err(err) => err.into_response(),
    }
}

async fn download_report<C>(
    State(state): State<AppState<C>>,
    Path(file): Path<String>,
) -> Response
where
    C: ConfigProvider + Send + Sync + 'static,
{
    if file.contains('/') || file.contains('\\') || file.contains("..") {
        return (StatusCode::BAD_REQUEST, "invalid report name").into_response();
    }

    match state.inner.storage.read_file(&file).await {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/zip".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", file),
                ),
            ],
            bytes,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "report not found").into_response(),
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    uptime: u64,
}

async fn health<C>(State(state): State<AppState<C>>) -> impl IntoResponse
where
    C: ConfigProvider + Send + Sync + 'static,
{
    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(HealthResponse {
            status: "up",
            version: env!("CARGO_PKG_VERSION"),
            uptime: state.inner.started.elapsed().as_secs(),
        }),
    )
}

fn report_page(report: &Report) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>Carbon Footprint Report</title>
  <style>
    body {{ max-width: 1400px; margin: 0 auto; font-family: Arial, sans-serif; color: #333; }}
    .error {{ color: #b00020; }}
    .actions {{ margin: 1em 0; }}
  </style>
</head>
<body>
  {summary}
  <div class="actions">
    <a href="/reports/{file}" download>📄 Download report bundle</a>
    <a href="/" style="margin-left: 2em;">New calculation</a>
  </div>
  <p><small>Generated at {generated}</small></p>
</body>
</html>"#,
        summary = report.summary_html,
        file = report.file_name,
        generated = report.breakdown.generated_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

const FORM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8"/>
  <title>Carbon Footprint Calculator</title>
  <style>
    body { max-width: 720px; margin: 0 auto; font-family: Arial, sans-serif; color: #333; }
    label { display: block; margin-top: 1em; font-weight: bold; }
    small { display: block; color: #666; font-weight: normal; }
    input { width: 100%; padding: 0.4em; margin-top: 0.2em; }
    button { margin-top: 1.5em; padding: 0.6em 2em; }
  </style>
</head>
<body>
  <h1>🌍 Carbon Footprint Calculator</h1>
  <form method="post" action="/report">
    <label>Company Name
      <small>Required: full legal company name</small>
      <input type="text" name="company_name" placeholder="Enter your company name"/>
    </label>
    <label>Average Electricity Bill (€)
      <small>Monthly electricity expenses</small>
      <input type="number" name="avg_electric_bill" step="any" value="1.0"/>
    </label>
    <label>Average Gas Bill (€)
      <small>Monthly natural gas expenses</small>
      <input type="number" name="avg_gas_bill" step="any" value="1.0"/>
    </label>
    <label>Average Transport Cost (€)
      <small>Monthly fuel bill for transport</small>
      <input type="number" name="avg_transport_cost" step="any" value="1.0"/>
    </label>
    <label>Monthly Waste Generated (kg)
      <small>Total waste produced monthly</small>
      <input type="number" name="monthly_waste_generated" step="any" value="1.0"/>
    </label>
    <label>Recycled Waste (%)
      <small>Percentage of waste recycled</small>
      <input type="number" name="recycled_waste_percent" step="any" value="0.0"/>
    </label>
    <label>Annual Business Travel (km)
      <small>Total kilometers traveled by employees</small>
      <input type="number" name="annual_travel_kms" step="any" value="1.0"/>
    </label>
    <label>Vehicle Fuel Efficiency (L/100 km)
      <small>Average fleet fuel consumption</small>
      <input type="number" name="fuel_efficiency" step="any" value="1.0"/>
    </label>
    <button type="submit">Generate Report</button>
  </form>
</body>
</html>"#;
