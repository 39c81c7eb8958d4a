use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    routing::{delete, get, post},
    Json, Router,
};
use domain::entities::{Assessment, AssessmentError, RiskRecord};
use domain::scoring::Level;
use serde::Deserialize;
use serde_json::{Map, Value};
use shared::dto::{DeleteAllResponse, DeleteRiskResponse, RiskResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assess-risk", post(assess_risk))
        .route("/risks", get(list_risks).delete(delete_all_risks))
        .route("/risks/:id", delete(delete_risk))
}

#[derive(Debug, Deserialize)]
pub struct ListRisksQuery {
    pub level: Option<String>,
}

pub(crate) fn to_response(record: RiskRecord) -> RiskResponse {
    RiskResponse {
        id: record.id,
        asset: record.asset,
        threat: record.threat,
        likelihood: record.likelihood,
        impact: record.impact,
        score: record.score,
        level: record.level.label().to_string(),
        mitigation_hint: record.mitigation_hint,
    }
}

/// Whole-number rating from a JSON value. Integral floats (`3.0`) and numeric
/// strings (`"3"`) are accepted; anything else is not a rating.
fn rating(fields: &Map<String, Value>, field: &'static str) -> Result<i32, AssessmentError> {
    let whole = match fields.get(field) {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= f64::from(i32::MAX))
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    whole
        .and_then(|v| i32::try_from(v).ok())
        .ok_or(AssessmentError::NotAnInteger(field))
}

fn text(fields: &Map<String, Value>, field: &str) -> Result<String, ServiceError> {
    match fields.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ServiceError::Unprocessable(format!("{} must be a string", field))),
    }
}

/// Builds an assessment from the raw body. Any problem with the ratings is
/// reported as 400 ahead of problems with the text fields.
fn parse_assessment(body: &Value) -> Result<Assessment, ServiceError> {
    let fields = body.as_object().ok_or_else(|| {
        ServiceError::Unprocessable("Request body must be a JSON object".to_string())
    })?;

    let likelihood = rating(fields, "likelihood")?;
    let impact = rating(fields, "impact")?;

    match (text(fields, "asset"), text(fields, "threat")) {
        (Ok(asset), Ok(threat)) => Ok(Assessment::new(asset, threat, likelihood, impact)?),
        (Err(err), _) | (_, Err(err)) => {
            Assessment::check_ratings(likelihood, impact)?;
            Err(err)
        }
    }
}

pub async fn assess_risk(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RiskResponse>, ServiceError> {
    let Json(body) = payload.map_err(|e| ServiceError::Unprocessable(e.body_text()))?;

    let assessment = parse_assessment(&body).map_err(|e| {
        tracing::debug!("Rejected assessment: {:?}", e);
        e
    })?;

    let record = state.risks.create(&assessment).await;
    tracing::info!(
        id = record.id,
        score = record.score,
        level = %record.level,
        "Recorded risk"
    );

    Ok(Json(to_response(record)))
}

pub async fn list_risks(
    State(state): State<AppState>,
    Query(params): Query<ListRisksQuery>,
) -> Json<Vec<RiskResponse>> {
    let filter = params.level.as_deref().map(str::trim).filter(|l| !l.is_empty());

    let records = match filter {
        None => state.risks.list(None).await,
        Some(label) => match Level::from_label(label) {
            Some(level) => state.risks.list(Some(level)).await,
            // no stored risk can carry a label outside the four levels
            None => Vec::new(),
        },
    };

    Json(records.into_iter().map(to_response).collect())
}

pub async fn delete_risk(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteRiskResponse>, ServiceError> {
    let Path(id) = path.map_err(|e| ServiceError::Unprocessable(e.body_text()))?;
    if !state.risks.delete(id).await {
        return Err(ServiceError::NotFound("Risk not found".to_string()));
    }

    tracing::info!(id, "Deleted risk");
    Ok(Json(DeleteRiskResponse { ok: true, id }))
}

pub async fn delete_all_risks(State(state): State<AppState>) -> Json<DeleteAllResponse> {
    state.risks.delete_all().await;

    Json(DeleteAllResponse {
        ok: true,
        deleted: "all".to_string(),
    })
}
