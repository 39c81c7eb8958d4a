use crate::scoring::{classify, Classification};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("Likelihood and impact must be integers between 1 and 5 (inclusive).")]
    RatingOutOfRange { likelihood: i32, impact: i32 },

    /// A rating that did not arrive as a whole number (or did not arrive at all).
    #[error("Likelihood and impact must be integers between 1 and 5 (inclusive).")]
    NotAnInteger(&'static str),
}

/// A validated request to record a new risk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    asset: String,
    threat: String,
    likelihood: i32,
    impact: i32,
}

impl Assessment {
    pub fn new(
        asset: impl Into<String>,
        threat: impl Into<String>,
        likelihood: i32,
        impact: i32,
    ) -> Result<Self, AssessmentError> {
        let asset = asset.into().trim().to_string();
        let threat = threat.into().trim().to_string();

        Self::check_ratings(likelihood, impact)?;

        if asset.is_empty() {
            return Err(AssessmentError::EmptyField("asset"));
        }
        if threat.is_empty() {
            return Err(AssessmentError::EmptyField("threat"));
        }

        Ok(Self {
            asset,
            threat,
            likelihood,
            impact,
        })
    }

    /// Range check on its own, for callers that must report rating problems
    /// ahead of anything else in the request.
    pub fn check_ratings(likelihood: i32, impact: i32) -> Result<(), AssessmentError> {
        let in_range = |v: i32| (MIN_RATING..=MAX_RATING).contains(&v);
        if in_range(likelihood) && in_range(impact) {
            Ok(())
        } else {
            Err(AssessmentError::RatingOutOfRange { likelihood, impact })
        }
    }

    pub fn asset(&self) -> &str {
        &self.asset
    }

    pub fn threat(&self) -> &str {
        &self.threat
    }

    pub fn likelihood(&self) -> i32 {
        self.likelihood
    }

    pub fn impact(&self) -> i32 {
        self.impact
    }

    /// Score and level this assessment will receive once recorded.
    pub fn preview(&self) -> Classification {
        classify(self.likelihood, self.impact)
    }
}
