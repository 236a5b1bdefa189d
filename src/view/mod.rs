//! Declarative view state for the page
//! Typed models of every page region, rebuilt from data on each render.

pub mod counter;
pub mod ids;
pub mod jobs;
pub mod page;
pub mod results;
pub mod thresholds;

pub use jobs::{JobCard, JobResultsView};
pub use page::PageView;
pub use results::ResultsPanel;
pub use thresholds::{MatchComment, ScoreColor};

/// Percentages keep their fractional part and drop a trailing `.0`
/// (`72.5` -> `72.5`, `80.0` -> `80`).
pub fn format_percent(value: f64) -> String {
    format!("{}", value)
}

/// Link targets are passed through only for web and in-page URLs.
pub fn safe_href(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_ascii_lowercase();
    let allowed = lower.starts_with("http://")
        || lower.starts_with("https://")
        || trimmed.starts_with('/')
        || trimmed.starts_with('#');
    if allowed && !trimmed.is_empty() {
        trimmed.to_string()
    } else {
        "#".to_string()
    }
}
