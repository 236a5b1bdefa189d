//! Results panel view model built from an analysis result

use crate::model::{AnalysisResult, CandidateInfo};
use crate::view::thresholds::{MatchComment, ScoreColor};
use crate::view::{format_percent, safe_href};
use serde::Serialize;

pub const NO_MISSING_SKILLS: &str = "None! You have all required skills.";
pub const NO_MATCHED_SKILLS: &str = "No specific skills matched.";
pub const NO_RECOMMENDATIONS: &str = "No specific recommendations found.";

/// A list region: either real items or a single placeholder line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ListView<T> {
    Items(Vec<T>),
    Placeholder(&'static str),
}

impl<T> ListView<T> {
    fn from_items(items: Vec<T>, placeholder: &'static str) -> Self {
        if items.is_empty() {
            ListView::Placeholder(placeholder)
        } else {
            ListView::Items(items)
        }
    }

    /// Number of rendered entries; a placeholder counts as one.
    pub fn rendered_len(&self) -> usize {
        match self {
            ListView::Items(items) => items.len(),
            ListView::Placeholder(_) => 1,
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListView::Items(items) => items,
            ListView::Placeholder(_) => &[],
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListView::Items(_) => None,
            ListView::Placeholder(text) => Some(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressRing {
    /// SVG `stroke-dasharray`, filled proportionally to the percentage.
    pub dash_array: String,
    pub color: ScoreColor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillLink {
    pub skill: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationCard {
    pub role: String,
    pub percentage: String,
}

/// Everything shown inside `resultsArea`. Built from scratch for every
/// analysis, so nothing from an earlier result survives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsPanel {
    pub match_percentage: f64,
    pub ring: ProgressRing,
    pub comment: MatchComment,
    pub missing_skills: ListView<SkillLink>,
    pub matched_skills: ListView<String>,
    pub candidate_info: Option<CandidateInfo>,
    pub tips: Option<Vec<String>>,
    pub recommendations: ListView<RecommendationCard>,
}

impl ResultsPanel {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let percentage = result.match_percentage;

        let missing = result
            .missing_skills
            .iter()
            .map(|item| SkillLink {
                skill: item.skill.clone(),
                href: safe_href(&item.link),
            })
            .collect();

        let recommendations = result
            .recommendations
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|rec| RecommendationCard {
                role: rec.role.clone(),
                percentage: format!("{}%", format_percent(rec.percentage)),
            })
            .collect();

        Self {
            match_percentage: percentage,
            ring: ProgressRing {
                dash_array: format!("{}, 100", format_percent(percentage)),
                color: ScoreColor::for_match_percentage(percentage),
            },
            comment: MatchComment::for_percentage(percentage),
            missing_skills: ListView::from_items(missing, NO_MISSING_SKILLS),
            matched_skills: ListView::from_items(result.matched_skills.clone(), NO_MATCHED_SKILLS),
            candidate_info: result.candidate_info.clone(),
            tips: result.tips.clone(),
            recommendations: ListView::from_items(recommendations, NO_RECOMMENDATIONS),
        }
    }

    /// Final text of the percentage counter.
    pub fn percentage_label(&self) -> String {
        format!("{}%", format_percent(self.match_percentage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MissingSkill, RoleRecommendation};

    fn result(percentage: f64) -> AnalysisResult {
        AnalysisResult {
            resume_text: String::new(),
            job_role: Some("DevOps Engineer".to_string()),
            match_percentage: percentage,
            missing_skills: vec![],
            matched_skills: vec![],
            candidate_info: None,
            tips: None,
            recommendations: None,
        }
    }

    #[test]
    fn test_empty_lists_render_placeholders() {
        let panel = ResultsPanel::from_result(&result(30.0));
        assert_eq!(panel.missing_skills.rendered_len(), 1);
        assert_eq!(panel.missing_skills.placeholder(), Some(NO_MISSING_SKILLS));
        assert_eq!(panel.matched_skills.placeholder(), Some(NO_MATCHED_SKILLS));
        assert_eq!(panel.recommendations.placeholder(), Some(NO_RECOMMENDATIONS));
        assert!(panel.candidate_info.is_none());
        assert!(panel.tips.is_none());
    }

    #[test]
    fn test_missing_skill_with_link() {
        let mut data = result(45.0);
        data.missing_skills = vec![MissingSkill {
            skill: "Docker".to_string(),
            link: "https://x".to_string(),
        }];
        let panel = ResultsPanel::from_result(&data);
        assert_eq!(panel.missing_skills.rendered_len(), 1);
        assert_eq!(panel.missing_skills.items()[0].skill, "Docker");
        assert_eq!(panel.missing_skills.items()[0].href, "https://x");
    }

    #[test]
    fn test_ring_and_comment() {
        let panel = ResultsPanel::from_result(&result(72.5));
        assert_eq!(panel.ring.dash_array, "72.5, 100");
        assert_eq!(panel.ring.color, ScoreColor::Green);
        assert_eq!(panel.comment, MatchComment::Good);
        assert_eq!(panel.percentage_label(), "72.5%");
    }

    #[test]
    fn test_empty_recommendations_use_placeholder() {
        let mut data = result(90.0);
        data.recommendations = Some(vec![]);
        assert_eq!(
            ResultsPanel::from_result(&data).recommendations.placeholder(),
            Some(NO_RECOMMENDATIONS)
        );

        data.recommendations = Some(vec![RoleRecommendation {
            role: "Cloud Architect".to_string(),
            percentage: 62.5,
        }]);
        let panel = ResultsPanel::from_result(&data);
        assert_eq!(panel.recommendations.items()[0].percentage, "62.5%");
    }

    #[test]
    fn test_unsafe_link_is_neutralized() {
        let mut data = result(10.0);
        data.missing_skills = vec![MissingSkill {
            skill: "xss".to_string(),
            link: "javascript:alert(1)".to_string(),
        }];
        let panel = ResultsPanel::from_result(&data);
        assert_eq!(panel.missing_skills.items()[0].href, "#");
    }
}
