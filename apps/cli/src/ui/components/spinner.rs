use crate::ui::Theme;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(msg: impl Into<String>) -> Self {
        let pb = crate::ui::multi_progress().add(ProgressBar::new_spinner());
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner:.cyan} {prefix:.bold} {msg:.dim}")
        {
            pb.set_style(style);
        }
        pb.set_prefix(msg.into());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    pub fn success(&self, msg: impl Into<String>) {
        self.pb
            .finish_with_message(format!("{} {}", Theme::success("✔"), msg.into()));
    }

    pub fn fail(&self, msg: impl Into<String>) {
        self.pb
            .finish_with_message(format!("{} {}", Theme::error("✖"), msg.into()));
    }

    /// Removes the spinner line without leaving a message.
    pub fn clear(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
