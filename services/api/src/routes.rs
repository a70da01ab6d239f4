use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate};
use epc_advisor::error::AppError;
use epc_advisor::tools::analyser::{
    analyse_epc, parse_certificate_text, EpcAnalyserInputs, EpcAnalysisResults, EpcParseResult,
};
use epc_advisor::tools::calculator::{
    calculate_upgrade_costs, excluded_improvements, CalculatorInputs, CalculatorResults,
    ExcludedImprovement,
};
use epc_advisor::tools::exemption::{check_exemption, ExemptionAssessment, ExemptionInputs};
use epc_advisor::tools::grants::{
    find_grants, grant_check_report, schemes_needing_refresh, AreaGrantInputs, AreaGrantReport,
    GrantCheckReport, GrantCheckerInputs, GrantScheme, SchemeId, GRANT_SCHEMES,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchemeCatalogResponse {
    pub(crate) schemes: &'static [GrantScheme],
    pub(crate) checked_on: NaiveDate,
    pub(crate) needing_refresh: Vec<SchemeId>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CostCalculatorResponse {
    #[serde(flatten)]
    pub(crate) results: CalculatorResults,
    pub(crate) excluded: Vec<ExcludedImprovement>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CertificateText {
    pub(crate) text: String,
}

pub(crate) fn router() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/grants/schemes", get(scheme_catalog_endpoint))
        .route("/api/v1/tools/grant-checker", post(grant_checker_endpoint))
        .route("/api/v1/tools/grant-finder", post(grant_finder_endpoint))
        .route("/api/v1/tools/cost-calculator", post(cost_calculator_endpoint))
        .route("/api/v1/tools/epc-analyser", post(epc_analyser_endpoint))
        .route("/api/v1/tools/epc-parser", post(epc_parser_endpoint))
        .route(
            "/api/v1/tools/exemption-checker",
            post(exemption_checker_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) fn scheme_catalog(today: NaiveDate) -> SchemeCatalogResponse {
    SchemeCatalogResponse {
        schemes: &GRANT_SCHEMES,
        checked_on: today,
        needing_refresh: schemes_needing_refresh(today)
            .into_iter()
            .map(|scheme| scheme.id)
            .collect(),
    }
}

pub(crate) async fn scheme_catalog_endpoint() -> Json<SchemeCatalogResponse> {
    Json(scheme_catalog(Local::now().date_naive()))
}

pub(crate) async fn grant_checker_endpoint(
    Json(inputs): Json<GrantCheckerInputs>,
) -> Json<GrantCheckReport> {
    Json(grant_check_report(&inputs))
}

/// Incomplete answers come back as 400 with every failing field named.
pub(crate) async fn grant_finder_endpoint(
    Json(inputs): Json<AreaGrantInputs>,
) -> Result<Json<AreaGrantReport>, AppError> {
    Ok(Json(find_grants(&inputs)?))
}

pub(crate) fn cost_calculator(inputs: &CalculatorInputs) -> CostCalculatorResponse {
    CostCalculatorResponse {
        results: calculate_upgrade_costs(inputs),
        excluded: excluded_improvements(inputs),
    }
}

pub(crate) async fn cost_calculator_endpoint(
    Json(inputs): Json<CalculatorInputs>,
) -> Json<CostCalculatorResponse> {
    Json(cost_calculator(&inputs))
}

pub(crate) async fn epc_analyser_endpoint(
    Json(inputs): Json<EpcAnalyserInputs>,
) -> Json<EpcAnalysisResults> {
    Json(analyse_epc(&inputs))
}

pub(crate) async fn epc_parser_endpoint(
    Json(body): Json<CertificateText>,
) -> Json<EpcParseResult> {
    Json(parse_certificate_text(&body.text))
}

pub(crate) async fn exemption_checker_endpoint(
    Json(inputs): Json<ExemptionInputs>,
) -> Json<ExemptionAssessment> {
    Json(check_exemption(&inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum_prometheus::PrometheusMetricLayer;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::{Arc, OnceLock};
    use tower::ServiceExt;

    fn app(ready: bool) -> Router {
        // the exporter installs a global recorder, so the pair is built once
        static STATE: OnceLock<Arc<metrics_exporter_prometheus::PrometheusHandle>> =
            OnceLock::new();
        let metrics = STATE
            .get_or_init(|| {
                let (_, handle) = PrometheusMetricLayer::pair();
                Arc::new(handle)
            })
            .clone();
        router().layer(Extension(AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics,
        }))
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds");
        let response = app(true).oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let request = Request::builder()
            .uri("/ready")
            .body(Body::empty())
            .expect("request builds");
        let response = app(false).oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn grant_checker_returns_one_result_per_scheme() {
        let (status, body) = post_json(
            "/api/v1/tools/grant-checker",
            json!({
                "propertyType": "house",
                "currentEpcRating": "D",
                "tenure": "freehold",
                "councilTaxBand": "B",
                "currentHeating": "gas-boiler",
                "consideringHeatingReplacement": "no",
                "tenantOnBenefits": "yes",
                "tenantIncome": "below-36000",
                "numberOfProperties": "1"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let results = body["results"].as_array().expect("results array");
        assert_eq!(results.len(), 4);
        assert_eq!(results[0]["scheme"]["id"], "eco4");
        assert_eq!(results[0]["confidence"], "definite");
        let bus = results
            .iter()
            .find(|result| result["scheme"]["id"] == "boiler-upgrade-scheme")
            .expect("bus result present");
        assert_eq!(bus["confidence"], "not-eligible");
        assert_eq!(bus["maxPotentialGrant"], 0);
    }

    #[tokio::test]
    async fn grant_finder_matches_council_schemes_by_postcode() {
        let (status, body) = post_json(
            "/api/v1/tools/grant-finder",
            json!({
                "postcode": "m14 5tp",
                "propertyType": "victorian-terrace",
                "currentEpcRating": "D",
                "tenure": "freehold",
                "heatingSystem": "gas-boiler",
                "tenantBenefitStatus": "yes",
                "tenantIncomeStatus": "below-36000"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["localAuthority"]["id"], "manchester");
        assert_eq!(body["totalPotentialValue"], 70_500);
        let eligible = body["eligible"].as_array().expect("eligible array");
        assert!(eligible
            .iter()
            .any(|m| m["scheme"]["id"] == "manchester-retrofit-accelerator"));
    }

    #[tokio::test]
    async fn grant_finder_rejects_incomplete_answers() {
        let (status, body) = post_json(
            "/api/v1/tools/grant-finder",
            json!({
                "postcode": "not a postcode",
                "propertyType": "victorian-terrace",
                "tenure": "freehold",
                "heatingSystem": "gas-boiler"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().expect("error message");
        assert!(message.contains("Please enter a valid UK postcode (postcode)"));
        assert!(!message.contains("tenure"));
    }

    #[tokio::test]
    async fn epc_parser_reads_certificate_text() {
        let (status, body) = post_json(
            "/api/v1/tools/epc-parser",
            json!({
                "text": "Current energy efficiency rating E (48). Walls: Solid brick, as built, no insulation. Windows: Single glazed."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["currentRating"], "E");
        assert_eq!(body["data"]["currentScore"], 48);
        assert_ne!(body["confidence"], "high");
        assert!(body["warnings"].as_array().is_some_and(|w| !w.is_empty()));
    }

    #[tokio::test]
    async fn cost_calculator_flattens_results_with_exclusions() {
        let (status, body) = post_json(
            "/api/v1/tools/cost-calculator",
            json!({
                "currentRating": "E",
                "propertyType": "1930s-semi",
                "bedrooms": 3,
                "wallConstruction": "cavity",
                "heatingSystem": "gas-boiler",
                "loftInsulation": "under-100mm",
                "glazingType": "double",
                "region": "unknown"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let loft = body["recommendations"]
            .as_array()
            .expect("recommendations array")
            .iter()
            .find(|rec| rec["id"] == "loft-insulation-topup")
            .expect("loft top-up recommended");
        assert_eq!(loft["estimatedCostLow"], 440);
        assert_eq!(loft["estimatedCostHigh"], 660);
        assert!(body["excluded"].as_array().is_some_and(|items| !items.is_empty()));
        assert!(body["totalCostMid"].is_u64());
    }

    #[tokio::test]
    async fn exemption_checker_grades_heritage_claims() {
        let (status, body) = post_json(
            "/api/v1/tools/exemption-checker",
            json!({
                "currentRating": "F",
                "propertyType": "victorian-terrace",
                "isListed": true,
                "exemptionReason": "listed-building",
                "evidenceAvailable": ["current-epc", "listed-officer-advice"]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["exemptionType"], "heritage");
        assert_eq!(body["eligibility"]["level"], "green");
        assert_eq!(body["validForYears"], 5);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/tools/epc-analyser")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{ not json"))
            .expect("request builds");
        let response = app(true).oneshot(request).await.expect("router responds");
        assert!(response.status().is_client_error());
    }

    #[test]
    fn scheme_catalog_flags_stale_entries() {
        let far_future = NaiveDate::from_ymd_opt(2100, 1, 1).expect("valid date");
        let catalog = scheme_catalog(far_future);
        assert_eq!(catalog.schemes.len(), 4);
        assert_eq!(catalog.needing_refresh.len(), 4);
    }
}
