use crate::entities::Assessment;
use crate::scoring::{classify, Level};
use serde::{Deserialize, Serialize};

/// One assessed (asset, threat) pair as held by the collection service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRecord {
    pub id: i64,
    pub asset: String,
    pub threat: String,
    pub likelihood: i32,
    pub impact: i32,
    pub score: i32,
    pub level: Level,
    pub mitigation_hint: String,
}

impl RiskRecord {
    /// Materialises an assessment under a freshly assigned id.
    pub fn record(id: i64, assessment: &Assessment) -> Self {
        let classification = assessment.preview();
        Self {
            id,
            asset: assessment.asset().to_string(),
            threat: assessment.threat().to_string(),
            likelihood: assessment.likelihood(),
            impact: assessment.impact(),
            score: classification.score,
            level: classification.level,
            mitigation_hint: classification.level.mitigation_hint().to_string(),
        }
    }

    /// Fixture constructor for tests: builds a record straight from ratings,
    /// skipping `Assessment` validation. Real records come from [`Self::record`].
    pub fn from_ratings(
        id: i64,
        asset: impl Into<String>,
        threat: impl Into<String>,
        likelihood: i32,
        impact: i32,
    ) -> Self {
        let classification = classify(likelihood, impact);
        Self {
            id,
            asset: asset.into(),
            threat: threat.into(),
            likelihood,
            impact,
            score: classification.score,
            level: classification.level,
            mitigation_hint: classification.level.mitigation_hint().to_string(),
        }
    }

    /// True when both coordinates fall inside the 5x5 matrix.
    pub fn in_matrix(&self) -> bool {
        (1..=5).contains(&self.likelihood) && (1..=5).contains(&self.impact)
    }
}
