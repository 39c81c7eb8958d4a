use crate::handlers::ServiceError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use csv::Writer;
use domain::entities::RiskRecord;

const CSV_HEADER: [&str; 8] = [
    "id",
    "asset",
    "threat",
    "likelihood",
    "impact",
    "score",
    "level",
    "mitigation_hint",
];

pub fn router() -> Router<AppState> {
    Router::new().route("/risks/export/csv", get(export_risks_csv))
}

pub fn render_csv(records: &[RiskRecord]) -> Result<String, ServiceError> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record(CSV_HEADER)
        .map_err(|e| ServiceError::InternalError(format!("CSV writer error: {}", e)))?;

    for risk in records {
        wtr.write_record([
            risk.id.to_string(),
            risk.asset.clone(),
            risk.threat.clone(),
            risk.likelihood.to_string(),
            risk.impact.to_string(),
            risk.score.to_string(),
            risk.level.label().to_string(),
            risk.mitigation_hint.clone(),
        ])
        .map_err(|e| ServiceError::InternalError(format!("CSV writer error: {}", e)))?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ServiceError::InternalError(format!("CSV writer error: {}", e)))?;
    String::from_utf8(data)
        .map_err(|e| ServiceError::InternalError(format!("UTF-8 conversion error: {}", e)))
}

pub async fn export_risks_csv(State(state): State<AppState>) -> Result<Response, ServiceError> {
    let records = state.risks.list(None).await;
    let body = render_csv(&records).map_err(|e| {
        tracing::error!("CSV export failed: {:?}", e);
        e
    })?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, "attachment; filename=risks.csv"),
        ],
        body,
    )
        .into_response())
}
