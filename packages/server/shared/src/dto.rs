use serde::{Deserialize, Serialize};

/// Body of `POST /assess-risk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessRiskRequest {
    pub asset: String,
    pub threat: String,
    pub likelihood: i32,
    pub impact: i32,
}

/// A risk as it travels over the wire. `level` is kept as the raw label so a
/// client can cope with labels it does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskResponse {
    pub id: i64,
    pub asset: String,
    pub threat: String,
    pub likelihood: i32,
    pub impact: i32,
    pub score: i32,
    pub level: String,
    #[serde(default)]
    pub mitigation_hint: String,
}

/// Error body; `detail` is meant to be shown to the user as is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: serde_json::Value::String(detail.into()),
        }
    }

    /// Flattens `detail` into one line, whatever shape the server sent.
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRiskResponse {
    pub ok: bool,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteAllResponse {
    pub ok: bool,
    pub deleted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
