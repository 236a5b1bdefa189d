//! Job results grid view model

use crate::model::JobListing;
use crate::view::thresholds::ScoreColor;
use crate::view::{format_percent, safe_href};
use serde::Serialize;

pub const NO_JOBS_FOUND: &str = "No matching jobs found. Try a different location or role.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobCard {
    pub title: String,
    pub company: String,
    pub badge_label: String,
    pub badge_color: ScoreColor,
    pub location: String,
    pub description: String,
    pub apply_href: String,
}

impl JobCard {
    pub fn from_listing(job: &JobListing) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            badge_label: format!("{}% Match", format_percent(job.match_score)),
            badge_color: ScoreColor::for_job_score(job.match_score),
            location: job.location.clone(),
            description: job.description_snippet.clone(),
            apply_href: safe_href(&job.job_url),
        }
    }
}

/// Content of `jobResults`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum JobResultsView {
    #[default]
    Empty,
    Cards(Vec<JobCard>),
    NoMatches,
    /// Inline error shown in place of the grid.
    Error(String),
}

impl JobResultsView {
    pub fn from_jobs(jobs: Option<&[JobListing]>) -> Self {
        match jobs {
            Some(jobs) if !jobs.is_empty() => {
                JobResultsView::Cards(jobs.iter().map(JobCard::from_listing).collect())
            }
            _ => JobResultsView::NoMatches,
        }
    }

    pub fn error(message: &str) -> Self {
        JobResultsView::Error(format!("Error searching jobs: {}", message))
    }

    pub fn cards(&self) -> &[JobCard] {
        match self {
            JobResultsView::Cards(cards) => cards,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(score: f64) -> JobListing {
        JobListing {
            title: "Senior Web Developer".to_string(),
            company: "Tech Innovations Inc.".to_string(),
            match_score: score,
            location: "Remote".to_string(),
            description_snippet: "Build things.".to_string(),
            job_url: "https://jobs.example.com/1".to_string(),
        }
    }

    #[test]
    fn test_cards_from_listings() {
        let jobs = vec![listing(71.3), listing(50.0), listing(12.0)];
        let view = JobResultsView::from_jobs(Some(&jobs));
        let cards = view.cards();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].badge_label, "71.3% Match");
        assert_eq!(cards[0].badge_color, ScoreColor::Green);
        assert_eq!(cards[1].badge_color, ScoreColor::Amber);
        assert_eq!(cards[2].badge_color, ScoreColor::Red);
        assert_eq!(cards[0].apply_href, "https://jobs.example.com/1");
    }

    #[test]
    fn test_no_jobs() {
        assert_eq!(JobResultsView::from_jobs(None), JobResultsView::NoMatches);
        assert_eq!(JobResultsView::from_jobs(Some(&[])), JobResultsView::NoMatches);
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            JobResultsView::error("Failed to fetch jobs"),
            JobResultsView::Error("Error searching jobs: Failed to fetch jobs".to_string())
        );
    }
}
