use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::area::AreaProfile;
use super::config::{PricingRule, RuleConfiguration};
use super::outcome::PricingResult;
use super::product::Product;
use super::service::PricingService;
use super::timestamp::deserialize_optional_reference_time;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub product: Product,
    #[serde(default)]
    pub rules: Option<RuleConfiguration>,
    #[serde(default, deserialize_with = "deserialize_optional_reference_time")]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct BatchEvaluateRequest {
    pub products: Vec<Product>,
    #[serde(default)]
    pub rules: Option<RuleConfiguration>,
    #[serde(default, deserialize_with = "deserialize_optional_reference_time")]
    pub now: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BatchEvaluateResponse {
    pub evaluated_at: DateTime<Utc>,
    pub results: Vec<PricingResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RuleDescription {
    pub rule: PricingRule,
    pub description: String,
    pub enabled: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RulesResponse {
    pub rules: Vec<RuleDescription>,
    pub configuration: RuleConfiguration,
}

/// Router builder exposing pricing quotes and reference data.
pub fn pricing_router(service: Arc<PricingService>) -> Router {
    Router::new()
        .route("/api/v1/pricing/rules", get(rules_handler))
        .route("/api/v1/pricing/areas", get(areas_handler))
        .route("/api/v1/pricing/evaluate", post(evaluate_handler))
        .route("/api/v1/pricing/batch", post(batch_handler))
        .with_state(service)
}

pub(crate) async fn rules_handler(State(service): State<Arc<PricingService>>) -> Response {
    let configuration = service.default_rules().clone();
    let rules = PricingRule::ALL
        .into_iter()
        .map(|rule| RuleDescription {
            rule,
            description: rule.description().to_string(),
            enabled: configuration.is_enabled(rule),
        })
        .collect();

    (
        StatusCode::OK,
        axum::Json(RulesResponse {
            rules,
            configuration,
        }),
    )
        .into_response()
}

pub(crate) async fn areas_handler(State(service): State<Arc<PricingService>>) -> Response {
    let areas: Vec<AreaProfile> = service.areas().profiles().cloned().collect();
    (StatusCode::OK, axum::Json(areas)).into_response()
}

pub(crate) async fn evaluate_handler(
    State(service): State<Arc<PricingService>>,
    axum::Json(request): axum::Json<EvaluateRequest>,
) -> Response {
    let now = request.now.unwrap_or_else(Utc::now);
    let result = service.quote(&request.product, request.rules.as_ref(), now);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<PricingService>>,
    axum::Json(request): axum::Json<BatchEvaluateRequest>,
) -> Response {
    let now = request.now.unwrap_or_else(Utc::now);
    let results = service.quote_batch(&request.products, request.rules.as_ref(), now);
    (
        StatusCode::OK,
        axum::Json(BatchEvaluateResponse {
            evaluated_at: now,
            results,
        }),
    )
        .into_response()
}
