use grc_risk::application::GatewayError;
use grc_risk::domain::AssessmentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid assessment: {0}")]
    InvalidInput(#[from] AssessmentError),

    #[error("Risk service unreachable: {0}")]
    Unreachable(String),

    #[error("Risk service rejected the request: {0}")]
    Rejected(String),

    #[error("Risk register unavailable: {0}")]
    Unavailable(String),

    #[error("Risk {0} not found")]
    NotFound(i64),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation cancelled by user")]
    Cancelled,
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => Some(
                "Pass --api-url, set GRC_API_URL, or add api_url to ~/.config/grc-risk/config.toml."
                    .to_string(),
            ),
            CliError::InvalidInput(
                AssessmentError::RatingOutOfRange { .. } | AssessmentError::NotAnInteger(_),
            ) => {
                Some("Rate likelihood and impact from 1 (lowest) to 5 (highest).".to_string())
            }
            CliError::InvalidInput(AssessmentError::EmptyField(_)) => {
                Some("Both --asset and --threat need a value.".to_string())
            }
            CliError::Unreachable(_) | CliError::Unavailable(_) => Some(
                "Start the service with `risk-api` or point --api-url at a running one.".to_string(),
            ),
            CliError::NotFound(_) => Some("Run `grc-risk list` to see current ids.".to_string()),
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

impl From<GatewayError> for CliError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::Transport(e) => CliError::Unreachable(e.to_string()),
            GatewayError::Status { detail, .. } => CliError::Rejected(detail),
            GatewayError::InvalidUrl(msg) => CliError::Config(msg),
            other @ GatewayError::Decode(_) => CliError::Runtime(other.to_string()),
        }
    }
}
