//! Score thresholds: ring color, match comment and job badge color

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Red,
    Amber,
    Green,
}

impl ScoreColor {
    pub fn hex(&self) -> &'static str {
        match self {
            ScoreColor::Red => "#ef4444",
            ScoreColor::Amber => "#f59e0b",
            ScoreColor::Green => "#22c55e",
        }
    }

    /// Stroke of the match ring: red below 40, amber below 70.
    pub fn for_match_percentage(percentage: f64) -> Self {
        if percentage < 40.0 {
            ScoreColor::Red
        } else if percentage < 70.0 {
            ScoreColor::Amber
        } else {
            ScoreColor::Green
        }
    }

    /// Background of a job card badge: green from 70, amber from 50.
    pub fn for_job_score(score: f64) -> Self {
        if score >= 70.0 {
            ScoreColor::Green
        } else if score >= 50.0 {
            ScoreColor::Amber
        } else {
            ScoreColor::Red
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchComment {
    Excellent,
    Good,
    Low,
}

impl MatchComment {
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage > 80.0 {
            MatchComment::Excellent
        } else if percentage > 50.0 {
            MatchComment::Good
        } else {
            MatchComment::Low
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            MatchComment::Excellent => "Excellent match! You are a strong candidate.",
            MatchComment::Good => "Good match, but some key skills are missing.",
            MatchComment::Low => "Low match. Consider upskilling in the missing areas.",
        }
    }
}
