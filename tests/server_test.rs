use carbon_footprint::core::ConfigProvider;
use carbon_footprint::domain::model::EmissionFactors;
use carbon_footprint::server::{router, AppState};
use tempfile::TempDir;

struct TestConfig {
    reports_path: String,
}

impl ConfigProvider for TestConfig {
    fn bind_address(&self) -> &str {
        "127.0.0.1:0"
    }

    fn reports_path(&self) -> &str {
        &self.reports_path
    }

    fn chart_size(&self) -> (u32, u32) {
        (800, 600)
    }

    fn factors(&self) -> EmissionFactors {
        EmissionFactors::default()
    }

    fn monitoring_enabled(&self) -> bool {
        false
    }
}

async fn spawn_server() -> (String, TempDir) {
    let reports_dir = TempDir::new().unwrap();
    let config = TestConfig {
        reports_path: reports_dir.path().to_string_lossy().into_owned(),
    };

    let state = AppState::new(config);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    (format!("http://{}", addr), reports_dir)
}

fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("company_name", "Acme Corp"),
        ("avg_electric_bill", "200"),
        ("avg_gas_bill", "100"),
        ("avg_transport_cost", "50"),
        ("monthly_waste_generated", "80"),
        ("recycled_waste_percent", "25"),
        ("annual_travel_kms", "12000"),
        ("fuel_efficiency", "8"),
    ]
}

#[tokio::test]
async fn test_index_serves_the_form() {
    let (base, _reports) = spawn_server().await;

    let body = reqwest::get(format!("{}/", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("Carbon Footprint Calculator"));
    assert!(body.contains(r#"name="company_name""#));
    assert!(body.contains(r#"name="fuel_efficiency""#));
    assert!(body.contains("Generate Report"));
}

#[tokio::test]
async fn test_valid_submission_returns_summary_page() {
    let (base, _reports) = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/report", base))
        .form(&valid_form())
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());

    let body = response.text().await.unwrap();
    assert!(body.contains("Carbon Footprint Summary for Acme Corp"));
    assert!(body.contains("data:image/svg+xml;base64,"));
    assert!(body.contains("/reports/acme_corp_report.zip"));
}

#[tokio::test]
async fn test_generated_bundle_can_be_downloaded() {
    let (base, _reports) = spawn_server().await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/report", base))
        .form(&valid_form())
        .send()
        .await
        .unwrap()
        .error_for_status()
        .unwrap();

    let response = client
        .get(format!("{}/reports/acme_corp_report.zip", base))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/zip"
    );

    let bytes = response.bytes().await.unwrap();
    // Zip local file header magic
    assert!(bytes.starts_with(b"PK"));
}

#[tokio::test]
async fn test_invalid_submission_is_rejected_with_message() {
    let (base, _reports) = spawn_server().await;
    let client = reqwest::Client::new();

    let mut form = valid_form();
    form[1] = ("avg_electric_bill", "-5");

    let response = client
        .post(format!("{}/report", base))
        .form(&form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);

    let body = response.text().await.unwrap();
    assert!(body.contains("Electricity bill"));
}

#[tokio::test]
async fn test_non_numeric_submission_is_rejected() {
    let (base, _reports) = spawn_server().await;
    let client = reqwest::Client::new();

    let mut form = valid_form();
    form[1] = ("avg_electric_bill", "plenty");

    let response = client
        .post(format!("{}/report", base))
        .form(&form)
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_missing_report_returns_not_found() {
    let (base, _reports) = spawn_server().await;

    let response = reqwest::get(format!("{}/reports/nonexistent_report.zip", base))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn test_traversal_report_names_are_rejected() {
    let (base, _reports) = spawn_server().await;

    let response = reqwest::get(format!("{}/reports/..%2Fescape.zip", base))
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn test_health_reports_status() {
    let (base, _reports) = spawn_server().await;

    let response = reqwest::get(format!("{}/health", base)).await.unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "up");
    assert!(body["version"].is_string());
}
