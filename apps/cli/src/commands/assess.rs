use anyhow::Result;
use clap::Args;
use cliclack::{intro, log, outro};
use grc_risk::application::{ClientConfig, RiskGateway};
use grc_risk::domain::entities::assessment::{MAX_RATING, MIN_RATING};
use grc_risk::domain::Assessment;

use crate::commands::connect;
use crate::error::CliError;
use crate::ui::components::Spinner;
use crate::ui::Theme;

#[derive(Args, Debug)]
pub struct AssessCommand {
    /// Asset at risk, e.g. "Customer DB" (prompted when omitted)
    #[arg(short, long)]
    pub asset: Option<String>,

    /// Threat to the asset, e.g. "SQL injection" (prompted when omitted)
    #[arg(short, long)]
    pub threat: Option<String>,

    /// Likelihood rating, 1 (rare) to 5 (almost certain)
    #[arg(short, long)]
    pub likelihood: Option<i32>,

    /// Impact rating, 1 (negligible) to 5 (severe)
    #[arg(short, long)]
    pub impact: Option<i32>,

    /// Show the score, level and hint without recording anything
    #[arg(long)]
    pub dry_run: bool,
}

fn prompt_text(prompt: &str, placeholder: &str) -> Result<String, CliError> {
    cliclack::input(prompt)
        .placeholder(placeholder)
        .validate(|value: &String| {
            if value.trim().is_empty() {
                Err("Please enter a value")
            } else {
                Ok(())
            }
        })
        .interact()
        .map_err(|_| CliError::Cancelled)
}

fn prompt_rating(prompt: &str, labels: [&str; 5]) -> Result<i32, CliError> {
    let mut select = cliclack::select(prompt).initial_value(MIN_RATING);
    for (rating, label) in (MIN_RATING..=MAX_RATING).zip(labels) {
        select = select.item(rating, format!("{} - {}", rating, label), "");
    }
    select.interact().map_err(|_| CliError::Cancelled)
}

impl AssessCommand {
    pub async fn execute(&self, config: &ClientConfig) -> Result<()> {
        intro(console::style("GRC Risk Assessment").bold())?;

        let asset = match &self.asset {
            Some(asset) => asset.clone(),
            None => prompt_text("Asset", "e.g. Customer DB")?,
        };
        let threat = match &self.threat {
            Some(threat) => threat.clone(),
            None => prompt_text("Threat", "e.g. SQL injection")?,
        };
        let likelihood = match self.likelihood {
            Some(value) => value,
            None => prompt_rating(
                "Likelihood",
                ["Rare", "Unlikely", "Possible", "Likely", "Almost certain"],
            )?,
        };
        let impact = match self.impact {
            Some(value) => value,
            None => prompt_rating(
                "Impact",
                ["Negligible", "Minor", "Moderate", "Major", "Severe"],
            )?,
        };

        let assessment =
            Assessment::new(asset, threat, likelihood, impact).map_err(CliError::from)?;
        let preview = assessment.preview();

        log::info(format!(
            "Score {} ({} x {}) {} {}",
            Theme::bold(preview.score),
            likelihood,
            impact,
            Theme::level(preview.level),
            Theme::muted(preview.level.mitigation_hint())
        ))?;

        if self.dry_run {
            outro("Dry run, nothing recorded")?;
            return Ok(());
        }

        let gateway = connect(config)?;
        let spinner = Spinner::new("Recording risk");
        match gateway.assess_risk(&assessment).await {
            Ok(risk) => {
                spinner.success(format!("Recorded risk #{}", risk.id));
                tracing::info!(id = risk.id, score = risk.score, "Risk recorded");
                outro(format!(
                    "{} / {} is {}",
                    risk.asset,
                    risk.threat,
                    Theme::level(risk.level)
                ))?;
                Ok(())
            }
            Err(err) => {
                spinner.fail(err.user_message());
                Err(CliError::from(err).into())
            }
        }
    }
}
