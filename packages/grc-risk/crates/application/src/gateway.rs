//! Client side of the risk collection service.

use crate::config::ClientConfig;
use crate::error::GatewayError;
use async_trait::async_trait;
use domain::entities::{Assessment, RiskRecord};
use domain::scoring::{classify, Level};
use serde::de::DeserializeOwned;
use shared::dto::{AssessRiskRequest, ErrorResponse, HealthResponse, RiskResponse};

/// Operations the dashboard needs from the collection service.
#[async_trait]
pub trait RiskGateway: Send + Sync {
    async fn list_risks(&self) -> Result<Vec<RiskRecord>, GatewayError>;
    async fn list_risks_by_level(&self, level: Level) -> Result<Vec<RiskRecord>, GatewayError>;
    async fn assess_risk(&self, assessment: &Assessment) -> Result<RiskRecord, GatewayError>;
    async fn delete_risk(&self, id: i64) -> Result<(), GatewayError>;
    async fn delete_all_risks(&self) -> Result<(), GatewayError>;
    async fn download_csv(&self) -> Result<String, GatewayError>;
    async fn health(&self) -> Result<HealthResponse, GatewayError>;
}

/// Converts a wire record. In-matrix ratings are authoritative: a score that
/// disagrees with them is recomputed along with its level and hint. Otherwise
/// an unknown label is re-derived from the score.
pub fn into_record(risk: RiskResponse) -> RiskRecord {
    let in_matrix = (1..=5).contains(&risk.likelihood) && (1..=5).contains(&risk.impact);
    if in_matrix && risk.score != risk.likelihood * risk.impact {
        let classification = classify(risk.likelihood, risk.impact);
        tracing::warn!(
            id = risk.id,
            score = risk.score,
            expected = classification.score,
            "Risk score disagrees with its ratings, recomputing"
        );
        return RiskRecord {
            id: risk.id,
            asset: risk.asset,
            threat: risk.threat,
            likelihood: risk.likelihood,
            impact: risk.impact,
            score: classification.score,
            level: classification.level,
            mitigation_hint: classification.level.mitigation_hint().to_string(),
        };
    }

    let level = Level::from_label(&risk.level).unwrap_or_else(|| {
        let derived = Level::from_score(risk.score);
        tracing::warn!(
            id = risk.id,
            label = %risk.level,
            derived = %derived,
            "Unknown risk level from service, using score band"
        );
        derived
    });

    let mitigation_hint = if risk.mitigation_hint.is_empty() {
        level.mitigation_hint().to_string()
    } else {
        risk.mitigation_hint
    };

    RiskRecord {
        id: risk.id,
        asset: risk.asset,
        threat: risk.threat,
        likelihood: risk.likelihood,
        impact: risk.impact,
        score: risk.score,
        level,
        mitigation_hint,
    }
}

#[derive(Clone)]
pub struct HttpRiskGateway {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpRiskGateway {
    pub fn new(config: ClientConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(GatewayError::Transport)?;

        Ok(Self { client, config })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Address a browser or downloader can fetch the CSV export from.
    pub fn export_csv_url(&self) -> String {
        self.config.endpoint("/risks/export/csv")
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let response = self.client.get(self.config.endpoint(path)).send().await?;
        Self::handle_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let response = self.client.delete(self.config.endpoint(path)).send().await?;
        Self::check_status(response).await.map(|_| ())
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GatewayError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode(e.to_string()))
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let reason = status.canonical_reason().unwrap_or("Request failed").to_string();
        let detail = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message(),
            Err(_) => reason,
        };

        Err(GatewayError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

#[async_trait]
impl RiskGateway for HttpRiskGateway {
    async fn list_risks(&self) -> Result<Vec<RiskRecord>, GatewayError> {
        let risks: Vec<RiskResponse> = self.get("/risks").await?;
        Ok(risks.into_iter().map(into_record).collect())
    }

    async fn list_risks_by_level(&self, level: Level) -> Result<Vec<RiskRecord>, GatewayError> {
        let risks: Vec<RiskResponse> = self.get(&format!("/risks?level={}", level.label())).await?;
        Ok(risks.into_iter().map(into_record).collect())
    }

    async fn assess_risk(&self, assessment: &Assessment) -> Result<RiskRecord, GatewayError> {
        let body = AssessRiskRequest {
            asset: assessment.asset().to_string(),
            threat: assessment.threat().to_string(),
            likelihood: assessment.likelihood(),
            impact: assessment.impact(),
        };

        let response = self
            .client
            .post(self.config.endpoint("/assess-risk"))
            .json(&body)
            .send()
            .await?;

        let risk: RiskResponse = Self::handle_response(response).await?;
        Ok(into_record(risk))
    }

    async fn delete_risk(&self, id: i64) -> Result<(), GatewayError> {
        self.delete(&format!("/risks/{}", id)).await
    }

    async fn delete_all_risks(&self) -> Result<(), GatewayError> {
        self.delete("/risks").await
    }

    async fn download_csv(&self) -> Result<String, GatewayError> {
        let response = self.client.get(self.export_csv_url()).send().await?;
        let response = Self::check_status(response).await?;
        Ok(response.text().await?)
    }

    async fn health(&self) -> Result<HealthResponse, GatewayError> {
        self.get("/health").await
    }
}
