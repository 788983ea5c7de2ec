//! HTTP route handlers for the soil analysis API.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::HeaderMap,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::history::HistoryEntry;
use crate::reference::{catalog, RequirementSource, ResolvedRequirement};
use crate::AppState;

use super::engine::{self, ENGINE, ENGINE_VERSION};
use super::models::{AnalysisRequest, AreaUnit};
use super::report::AnalysisReport;
use super::validator;

/// Header naming the caller's session for history tracking.
pub const SESSION_HEADER: &str = "x-session-id";

/// Create the soil router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/analyze", post(analyze))
        .route("/report", post(report))
        .route("/requirements", get(requirements))
        .route("/crops", get(crops))
        .route("/states", get(states))
        .route("/history/:session_id", get(history))
}

/// Health check for the recommendation engine.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "soil-engine",
        "engine": ENGINE,
        "version": ENGINE_VERSION,
        "requirement_rows": state.requirements.len(),
    }))
}

/// Validate, analyse (memoised by input hash) and record in the session history.
async fn run_analysis(
    state: &AppState,
    headers: &HeaderMap,
    payload: std::result::Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Arc<AnalysisReport>> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let input = validator::validate(&request).inspect_err(|e| {
        tracing::warn!("Rejected soil analysis request: {}", e);
    })?;

    let hash = engine::input_hash(&input);
    let requirements = state.requirements.clone();
    let report = state
        .cache
        .get_or_compute(hash, move || engine::analyze(&input, &requirements))
        .await
        .inspect_err(|e| tracing::warn!("Could not price fertilizer plan: {}", e))?;

    if report.requirement_source != RequirementSource::Exact {
        tracing::debug!(
            "Requirement for crop {} in {}/{} resolved from {:?} tier",
            report.crop.id,
            report.region.state_id,
            report.region.district,
            report.requirement_source
        );
    }

    if let Some(session_id) = session_id(headers) {
        state.history.record(session_id, report.clone()).await;
    }

    Ok(report)
}

fn session_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Analyse a soil sample and return the report as JSON.
async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: std::result::Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<Arc<AnalysisReport>>> {
    let report = run_analysis(&state, &headers, payload).await?;
    Ok(Json(report))
}

struct FertilizerRow {
    name: &'static str,
    per_ha_kg: f64,
    total_kg: f64,
    cost: String,
}

/// Printable report page
#[derive(Template)]
#[template(path = "soil/report.html")]
struct ReportTemplate<'a> {
    report: &'a AnalysisReport,
    crop_name: String,
    region: String,
    plot_value: f64,
    plot_unit: &'static str,
    requirement_source: String,
    fertilizer_lines: Vec<FertilizerRow>,
    total_cost: String,
    ph_status: String,
    organic_matter_status: String,
    salinity_status: String,
    suitability_band: String,
    micronutrients: String,
    secondary_nutrients: String,
}

impl<'a> ReportTemplate<'a> {
    fn new(report: &'a AnalysisReport) -> Self {
        let crop_name = report
            .crop
            .name
            .map(str::to_string)
            .unwrap_or_else(|| format!("Crop #{}", report.crop.id));
        let region = match report.region.state_name {
            Some(state) => format!("{}, {}", report.region.district, state),
            None => format!("{}, state #{}", report.region.district, report.region.state_id),
        };
        let plot_unit = match report.plot_area.unit {
            AreaUnit::Hectare => "ha",
            AreaUnit::Acre => "acre",
        };

        let plan = &report.fertilizers;
        let fertilizer_lines = [("Urea", &plan.urea), ("DAP", &plan.dap), ("MOP", &plan.mop)]
            .into_iter()
            .map(|(name, line)| FertilizerRow {
                name,
                per_ha_kg: line.per_ha_kg,
                total_kg: line.total_kg,
                cost: line.cost.round_dp(2).to_string(),
            })
            .collect();

        let names = |list: &[super::classify::TraceNutrient]| {
            list.iter()
                .map(|n| format!("{:?}", n))
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            report,
            crop_name,
            region,
            plot_value: report.plot_area.value,
            plot_unit,
            requirement_source: format!("{:?}", report.requirement_source),
            fertilizer_lines,
            total_cost: plan.total_cost.round_dp(2).to_string(),
            ph_status: format!("{:?}", report.ph.status),
            organic_matter_status: format!("{:?}", report.organic_matter.status),
            salinity_status: format!("{:?}", report.electrical_conductivity.status),
            suitability_band: format!("{:?}", report.crop_suitability.status),
            micronutrients: names(&report.deficiencies.micronutrients),
            secondary_nutrients: names(&report.deficiencies.secondary_nutrients),
        }
    }
}

/// Analyse a soil sample and return a printable HTML report.
async fn report(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: std::result::Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Html<String>> {
    let report = run_analysis(&state, &headers, payload).await?;
    let html = ReportTemplate::new(&report).render()?;
    Ok(Html(html))
}

#[derive(Debug, Deserialize)]
struct RequirementQuery {
    crop_id: u32,
    state_id: u32,
    district: String,
}

#[derive(Debug, Serialize)]
struct RequirementResponse {
    #[serde(flatten)]
    resolved: ResolvedRequirement,
    crop_name: Option<&'static str>,
    /// Whether the district is listed for the state in the catalogue.
    known_district: bool,
}

/// Resolve the requirement row a selection would be analysed against.
async fn requirements(
    State(state): State<AppState>,
    query: std::result::Result<Query<RequirementQuery>, QueryRejection>,
) -> Result<Json<RequirementResponse>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let district = query.district.trim();
    let resolved = state
        .requirements
        .resolve(query.crop_id, query.state_id, district);

    Ok(Json(RequirementResponse {
        resolved,
        crop_name: catalog::crop(query.crop_id).map(|c| c.name),
        known_district: catalog::state(query.state_id).is_some_and(|s| s.has_district(district)),
    }))
}

async fn crops() -> Json<&'static [catalog::Crop]> {
    Json(catalog::CROPS)
}

async fn states() -> Json<&'static [catalog::State]> {
    Json(catalog::STATES)
}

/// Past analyses for a session, newest first.
async fn history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<Vec<HistoryEntry>> {
    Json(state.history.entries(&session_id).await)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::reference::RequirementTable;
    use crate::AppState;

    fn app() -> axum::Router {
        let state = AppState::new(RequirementTable::builtin(), &Config::default());
        crate::app(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    const SAMPLE: &str = r#"{
        "nitrogen": 60, "phosphorus": 60, "potassium": 40, "ph": 7.0,
        "plot_area": 2, "area_unit": "hectare",
        "crop_id": 12, "state_id": 33, "district": "Jammu"
    }"#;

    #[tokio::test]
    async fn test_analyze_returns_report() {
        let response = app()
            .oneshot(post_json("/api/soil/analyze", SAMPLE))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["deficiencies"]["nitrogen"], 60.0);
        assert_eq!(body["requirement_source"], "default");
        assert_eq!(body["crop"]["name"], "Barley");
    }

    #[tokio::test]
    async fn test_invalid_ph_is_bad_request() {
        let response = app()
            .oneshot(post_json(
                "/api/soil/analyze",
                r#"{"nitrogen": 60, "phosphorus": 60, "potassium": 40, "ph": 15,
                    "plot_area": 1, "crop_id": 1, "state_id": 1, "district": "Guntur"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid pH value: must be between 0 and 14");
        assert_eq!(body["engine"], "krishi-soil-engine");
        assert!(body.get("fertilizers").is_none());
    }

    #[tokio::test]
    async fn test_non_numeric_input_is_bad_request() {
        let response = app()
            .oneshot(post_json(
                "/api/soil/analyze",
                r#"{"nitrogen": "lots", "phosphorus": 60, "potassium": 40, "ph": 7}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("nitrogen"));
    }

    #[tokio::test]
    async fn test_session_history_is_recorded() {
        let app = app();

        for _ in 0..2 {
            let mut request = post_json("/api/soil/analyze", SAMPLE);
            request
                .headers_mut()
                .insert("x-session-id", "farm-42".parse().unwrap());
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/soil/history/farm-42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_json(response).await;
        let entries = body.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["report"]["input_hash"], entries[1]["report"]["input_hash"]);
    }

    #[tokio::test]
    async fn test_printable_report() {
        let response = app()
            .oneshot(post_json("/api/soil/report", SAMPLE))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("Soil Analysis Report"));
        assert!(html.contains("Barley"));
        assert!(html.contains("Urea"));
        assert!(html.contains("1565.22"));
    }

    #[tokio::test]
    async fn test_requirement_lookup_endpoint() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/soil/requirements?crop_id=1&state_id=14&district=Pune")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let body = body_json(response).await;
        assert_eq!(body["source"], "exact");
        assert_eq!(body["requirement"]["required_n"], 140.0);
        assert_eq!(body["crop_name"], "Wheat");
        assert_eq!(body["known_district"], true);
    }

    #[tokio::test]
    async fn test_requirement_lookup_rejects_bad_query() {
        for uri in [
            "/api/soil/requirements?state_id=14&district=Pune",
            "/api/soil/requirements?crop_id=wheat&state_id=14&district=Pune",
        ] {
            let response = app()
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_json(response).await;
            assert!(body["error"]
                .as_str()
                .unwrap()
                .starts_with("Failed to deserialize query string"));
            assert_eq!(body["engine"], "krishi-soil-engine");
        }
    }

    #[tokio::test]
    async fn test_huge_plot_is_bad_request() {
        let response = app()
            .oneshot(post_json(
                "/api/soil/analyze",
                r#"{"nitrogen": 0, "phosphorus": 0, "potassium": 0, "ph": 6.5,
                    "plot_area": 1e26, "crop_id": 12, "state_id": 33, "district": "Jammu"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "invalid plot area: must not exceed 1000000");
    }

    #[tokio::test]
    async fn test_catalogue_endpoints() {
        let app = app();

        let crops = body_json(
            app.clone()
                .oneshot(Request::builder().uri("/api/soil/crops").body(Body::empty()).unwrap())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(crops.as_array().unwrap().len(), 40);

        let states = body_json(
            app.oneshot(Request::builder().uri("/api/soil/states").body(Body::empty()).unwrap())
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(states[3]["name"], "Bihar");
    }
}
