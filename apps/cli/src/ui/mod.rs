use indicatif::MultiProgress;
use std::sync::OnceLock;

pub mod components;
pub mod tables;
pub mod theme;

pub use theme::{Icon, Theme};

static MULTI_PROGRESS: OnceLock<MultiProgress> = OnceLock::new();

pub fn multi_progress() -> &'static MultiProgress {
    MULTI_PROGRESS.get_or_init(MultiProgress::new)
}

/// Prints above any live spinner; falls back to plain stdout when output is
/// not a terminal, where indicatif would drop the line.
fn emit(line: &str) {
    let mp = multi_progress();
    if mp.is_hidden() || mp.println(line).is_err() {
        println!("{}", line);
    }
}

pub fn info(message: impl AsRef<str>) {
    emit(&format!("{} {}", Theme::primary(Icon::Info), message.as_ref()));
}

pub fn warn(message: impl AsRef<str>) {
    emit(&format!("{} {}", Theme::warning(Icon::Warning), message.as_ref()));
}

pub fn println(message: impl AsRef<str>) {
    emit(message.as_ref());
}
