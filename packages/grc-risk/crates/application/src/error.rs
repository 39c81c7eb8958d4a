use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Could not reach the risk service: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("{detail} (HTTP {status})")]
    Status { status: u16, detail: String },

    #[error("Unexpected response from the risk service: {0}")]
    Decode(String),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
}

impl GatewayError {
    /// One line suitable for showing in place of the risk table.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Status { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::Status { status: 404, .. })
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Transport(err)
        }
    }
}
