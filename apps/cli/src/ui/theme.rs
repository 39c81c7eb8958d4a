use console::style;
use grc_risk::domain::Level;
use std::fmt;

/// Colour palette for the risk dashboard.
pub struct Theme;

impl Theme {
    pub fn primary(text: impl fmt::Display) -> String {
        style(text).cyan().bold().to_string()
    }

    pub fn bold(text: impl fmt::Display) -> String {
        style(text).bold().to_string()
    }

    pub fn success(text: impl fmt::Display) -> String {
        style(text).green().bold().to_string()
    }

    pub fn warning(text: impl fmt::Display) -> String {
        style(text).yellow().bold().to_string()
    }

    pub fn error(text: impl fmt::Display) -> String {
        style(text).red().bold().to_string()
    }

    pub fn muted(text: impl fmt::Display) -> String {
        style(text).dim().to_string()
    }

    /// Level label in its band colour.
    pub fn level(level: Level) -> String {
        match level {
            Level::Low => style(level).green().to_string(),
            Level::Medium => style(level).yellow().to_string(),
            Level::High => style(level).color256(208).bold().to_string(),
            Level::Critical => style(level).red().bold().to_string(),
        }
    }
}

pub enum Icon {
    Shield,
    Chart,
    File,
    Info,
    Warning,
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = match self {
            Icon::Shield => "🛡️ ",
            Icon::Chart => "📊",
            Icon::File => "📄",
            Icon::Info => "ℹ️ ",
            Icon::Warning => "⚠️ ",
        };
        write!(f, "{}", icon)
    }
}
