//! Output formatters: console, JSON and HTML renderings of the page regions

use crate::config::OutputFormat;
use crate::error::Result;
use crate::view::page::PageSnapshot;
use crate::view::results::{ListView, RecommendationCard, SkillLink};
use crate::view::{JobResultsView, ResultsPanel, ScoreColor};
use askama::Template;
use colored::{Color, Colorize};

/// Trait for rendering the results panel and the job grid
pub trait OutputFormatter {
    fn format_results(&self, panel: &ResultsPanel) -> Result<String>;
    fn format_jobs(&self, jobs: &JobResultsView) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal rendering with threshold colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON rendering of the view models
pub struct JsonFormatter {
    pretty: bool,
}

/// HTML rendering bound to the page's element ids
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Picks the formatter for a configured format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<section id="resultsArea" class="results-area{% if hidden %} hidden{% endif %}">
{% if has_results %}
    <div class="score-card">
        <svg viewBox="0 0 36 36" class="circular-chart">
            <path class="circle-bg" d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831" />
            <path class="circle" stroke-dasharray="{{ dash_array }}" style="stroke: {{ ring_color }};" d="M18 2.0845 a 15.9155 15.9155 0 0 1 0 31.831 a 15.9155 15.9155 0 0 1 0 -31.831" />
            <text x="18" y="20.35" class="percentage">{{ percentage_label }}</text>
        </svg>
        <p id="matchComment">{{ comment }}</p>
    </div>
    <div class="skills-grid">
        <div class="skills-box">
            <h3>Missing Skills</h3>
            <ul id="missingSkillsList">
            {% for item in missing_skills %}
                <li class="skill-item-missing"><span>{{ item.skill }}</span> <a href="{{ item.href }}" target="_blank" rel="noopener noreferrer" class="learn-btn" title="Learn this skill">Learn</a></li>
            {% endfor %}
            {% if has_missing_placeholder %}
                <li>{{ missing_placeholder }}</li>
            {% endif %}
            </ul>
        </div>
        <div class="skills-box">
            <h3>Matched Skills</h3>
            <ul id="matchedSkillsList">
            {% for skill in matched_skills %}
                <li>{{ skill }}</li>
            {% endfor %}
            {% if has_matched_placeholder %}
                <li>{{ matched_placeholder }}</li>
            {% endif %}
            </ul>
        </div>
    </div>
    <div id="candidateInfo">
    {% if has_candidate_info %}
        <div class="info-item">{{ email }}</div>
        <div class="info-item">{{ phone }}</div>
    {% endif %}
    </div>
    <ul id="tipsList">
    {% for tip in tips %}
        <li>{{ tip }}</li>
    {% endfor %}
    </ul>
    <div id="recommendationList" class="rec-grid">
    {% for rec in recommendations %}
        <div class="rec-card"><span class="rec-role">{{ rec.role }}</span><div class="rec-percentage">{{ rec.percentage }}</div></div>
    {% endfor %}
    {% if has_recommendation_placeholder %}
        <p class="placeholder">{{ recommendation_placeholder }}</p>
    {% endif %}
    </div>
{% endif %}
</section>"#, ext = "html")]
struct ResultsTemplate {
    hidden: bool,
    has_results: bool,
    dash_array: String,
    ring_color: String,
    percentage_label: String,
    comment: String,
    missing_skills: Vec<SkillLink>,
    has_missing_placeholder: bool,
    missing_placeholder: String,
    matched_skills: Vec<String>,
    has_matched_placeholder: bool,
    matched_placeholder: String,
    has_candidate_info: bool,
    email: String,
    phone: String,
    tips: Vec<String>,
    recommendations: Vec<RecommendationCard>,
    has_recommendation_placeholder: bool,
    recommendation_placeholder: String,
}

#[derive(Template)]
#[template(source = r#"<div id="jobResults" class="job-grid">
{% for job in cards %}
    <div class="job-card">
        <div class="job-header">
            <div>
                <div class="job-title">{{ job.title }}</div>
                <div class="job-company">{{ job.company }}</div>
            </div>
            <div class="job-match-badge" style="background: {{ job.badge_color }};">{{ job.badge_label }}</div>
        </div>
        <div class="job-location">{{ job.location }}</div>
        <div class="job-desc">{{ job.description }}</div>
        <a href="{{ job.apply_href }}" target="_blank" rel="noopener noreferrer" class="apply-btn">Apply Now</a>
    </div>
{% endfor %}
{% if has_message %}
    <p class="{{ message_class }}">{{ message }}</p>
{% endif %}
</div>"#, ext = "html")]
struct JobsTemplate {
    cards: Vec<HtmlJobCard>,
    has_message: bool,
    message_class: String,
    message: String,
}

struct HtmlJobCard {
    title: String,
    company: String,
    badge_color: String,
    badge_label: String,
    location: String,
    description: String,
    apply_href: String,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Match</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #0f172a; color: #f8fafc; max-width: 960px; margin: 0 auto; padding: 24px; }
        .hidden { display: none; }
        .drop-zone { border: 2px dashed rgba(255,255,255,0.3); border-radius: 12px; padding: 32px; text-align: center; cursor: pointer; }
        .drop-zone.dragover { border-color: #6366f1; }
        .drop-zone.filled { border-color: #22c55e; }
        .circular-chart { width: 160px; }
        .circle-bg { fill: none; stroke: rgba(255,255,255,0.1); stroke-width: 3.8; }
        .circle { fill: none; stroke-width: 2.8; stroke-linecap: round; }
        .percentage { fill: #f8fafc; font-size: 0.5em; text-anchor: middle; }
        .skills-grid, .rec-grid, .job-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px; }
        .rec-card, .job-card { background: rgba(255,255,255,0.05); border-radius: 12px; padding: 16px; }
        .job-match-badge { border-radius: 999px; padding: 4px 10px; font-weight: bold; }
        .placeholder { grid-column: 1/-1; text-align: center; color: rgba(255,255,255,0.5); }
        .error { grid-column: 1/-1; text-align: center; color: #ef4444; }
    </style>
    {% endif %}
</head>
<body>
<main id="output">
    <form id="uploadForm">
        <div id="dropZone" class="{{ drop_zone_class }}">
            <input type="file" id="resumeFile" name="resume" hidden>
            <p class="upload-text"{% if !hint_visible %} style="display: none;"{% endif %}>Drag and drop your resume here, or click to browse</p>
            <p id="fileName">{{ file_label }}</p>
        </div>
        <select id="jobRole" name="job_role">
            <option value="">Select a job role</option>
        {% for role in roles %}
            <option value="{{ role.name }}"{% if role.selected %} selected{% endif %}>{{ role.name }}</option>
        {% endfor %}
        </select>
        <button type="submit" id="analyzeBtn" class="analyze-btn"{% if analyze_disabled %} disabled{% endif %}>
            <span style="visibility: {% if label_visible %}visible{% else %}hidden{% endif %};">Analyze Resume</span>
            <div id="btnLoader" class="loader" style="display: {% if loader_visible %}block{% else %}none{% endif %};"></div>
        </button>
    </form>

    {{ results_html|safe }}

    <section class="job-search">
        <input type="text" id="jobLocation" placeholder="Location" value="{{ location }}">
        <button type="button" id="searchJobsBtn"{% if search_disabled %} disabled{% endif %}>Find Jobs</button>
        <div id="jobLoader" class="loader{% if !job_loader_visible %} hidden{% endif %}"></div>
        {{ jobs_html|safe }}
    </section>
</main>
<footer><small>Rendered {{ rendered_at }}</small></footer>
</body>
</html>"#, ext = "html")]
struct PageTemplate {
    include_styles: bool,
    drop_zone_class: String,
    hint_visible: bool,
    file_label: String,
    roles: Vec<RoleOption>,
    analyze_disabled: bool,
    label_visible: bool,
    loader_visible: bool,
    results_html: String,
    location: String,
    search_disabled: bool,
    job_loader_visible: bool,
    jobs_html: String,
    rendered_at: String,
}

struct RoleOption {
    name: String,
    selected: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn terminal_color(color: ScoreColor) -> Color {
        match color {
            ScoreColor::Red => Color::Red,
            ScoreColor::Amber => Color::Yellow,
            ScoreColor::Green => Color::Green,
        }
    }

    /// Text gauge standing in for the progress ring.
    fn format_gauge(&self, percentage: f64, color: ScoreColor) -> String {
        let filled = (percentage.clamp(0.0, 100.0) / 5.0).round() as usize;
        let bar = format!("{}{}", "■".repeat(filled), "□".repeat(20 - filled));
        self.colorize(&bar, Self::terminal_color(color))
    }

    fn format_list<T>(&self, list: &ListView<T>, item: impl Fn(&T) -> String) -> String {
        match list {
            ListView::Items(items) => items.iter().map(|i| format!("  • {}\n", item(i))).collect(),
            ListView::Placeholder(text) => format!("  {}\n", self.colorize(text, Color::BrightBlack)),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_results(&self, panel: &ResultsPanel) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 RESUME MATCH RESULTS", 1));
        output.push_str(&format!(
            "Match: {} {}\n",
            self.colorize(&panel.percentage_label(), Self::terminal_color(panel.ring.color)),
            self.format_gauge(panel.match_percentage, panel.ring.color)
        ));
        output.push_str(&format!("{}\n", self.colorize(panel.comment.text(), Color::Cyan)));

        output.push_str(&self.format_header("🎯 Missing Skills", 2));
        output.push_str(&self.format_list(&panel.missing_skills, |s| {
            format!("{} {}", s.skill, self.colorize(&format!("(learn: {})", s.href), Color::BrightBlack))
        }));

        output.push_str(&self.format_header("✅ Matched Skills", 2));
        output.push_str(&self.format_list(&panel.matched_skills, |s| self.colorize(s, Color::Green)));

        if let Some(info) = &panel.candidate_info {
            output.push_str(&self.format_header("👤 Candidate", 2));
            output.push_str(&format!("  ✉ {}\n  ☎ {}\n", info.email, info.phone));
        }

        if let Some(tips) = &panel.tips {
            output.push_str(&self.format_header("💡 Tips", 2));
            for tip in tips {
                output.push_str(&format!("  • {}\n", tip));
            }
        }

        output.push_str(&self.format_header("🧭 Recommended Roles", 2));
        output.push_str(&self.format_list(&panel.recommendations, |r| {
            format!("{} {}", r.role, self.colorize(&r.percentage, Color::Cyan))
        }));

        Ok(output)
    }

    fn format_jobs(&self, jobs: &JobResultsView) -> Result<String> {
        let mut output = self.format_header("💼 Job Listings", 1);

        match jobs {
            JobResultsView::Empty => {}
            JobResultsView::NoMatches => {
                output.push_str(&format!(
                    "{}\n",
                    self.colorize(crate::view::jobs::NO_JOBS_FOUND, Color::BrightBlack)
                ));
            }
            JobResultsView::Error(message) => {
                output.push_str(&format!("{}\n", self.colorize(message, Color::Red)));
            }
            JobResultsView::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    output.push_str(&format!(
                        "{}. {} {} {}\n",
                        i + 1,
                        self.colorize(&card.title, Color::White),
                        self.colorize(&format!("@ {}", card.company), Color::BrightBlack),
                        self.colorize(&format!("[{}]", card.badge_label), Self::terminal_color(card.badge_color))
                    ));
                    output.push_str(&format!("   📍 {}\n", card.location));
                    if !card.description.is_empty() {
                        output.push_str(&format!("   {}\n", card.description));
                    }
                    output.push_str(&format!("   Apply: {}\n\n", card.apply_href));
                }
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, panel: &ResultsPanel) -> Result<String> {
        self.to_json(panel)
    }

    fn format_jobs(&self, jobs: &JobResultsView) -> Result<String> {
        self.to_json(jobs)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn results_template(panel: Option<&ResultsPanel>, percentage_label: String, hidden: bool) -> ResultsTemplate {
        let Some(panel) = panel else {
            return ResultsTemplate {
                hidden,
                has_results: false,
                dash_array: String::new(),
                ring_color: String::new(),
                percentage_label,
                comment: String::new(),
                missing_skills: Vec::new(),
                has_missing_placeholder: false,
                missing_placeholder: String::new(),
                matched_skills: Vec::new(),
                has_matched_placeholder: false,
                matched_placeholder: String::new(),
                has_candidate_info: false,
                email: String::new(),
                phone: String::new(),
                tips: Vec::new(),
                recommendations: Vec::new(),
                has_recommendation_placeholder: false,
                recommendation_placeholder: String::new(),
            };
        };

        ResultsTemplate {
            hidden,
            has_results: true,
            dash_array: panel.ring.dash_array.clone(),
            ring_color: panel.ring.color.hex().to_string(),
            percentage_label,
            comment: panel.comment.text().to_string(),
            missing_skills: panel.missing_skills.items().to_vec(),
            has_missing_placeholder: panel.missing_skills.placeholder().is_some(),
            missing_placeholder: panel.missing_skills.placeholder().unwrap_or_default().to_string(),
            matched_skills: panel.matched_skills.items().to_vec(),
            has_matched_placeholder: panel.matched_skills.placeholder().is_some(),
            matched_placeholder: panel.matched_skills.placeholder().unwrap_or_default().to_string(),
            has_candidate_info: panel.candidate_info.is_some(),
            email: panel.candidate_info.as_ref().map(|c| c.email.clone()).unwrap_or_default(),
            phone: panel.candidate_info.as_ref().map(|c| c.phone.clone()).unwrap_or_default(),
            tips: panel.tips.clone().unwrap_or_default(),
            recommendations: panel.recommendations.items().to_vec(),
            has_recommendation_placeholder: panel.recommendations.placeholder().is_some(),
            recommendation_placeholder: panel.recommendations.placeholder().unwrap_or_default().to_string(),
        }
    }

    fn jobs_template(jobs: &JobResultsView) -> JobsTemplate {
        let (message_class, message) = match jobs {
            JobResultsView::NoMatches => ("placeholder", crate::view::jobs::NO_JOBS_FOUND.to_string()),
            JobResultsView::Error(message) => ("error", message.clone()),
            JobResultsView::Empty | JobResultsView::Cards(_) => ("", String::new()),
        };

        JobsTemplate {
            cards: jobs
                .cards()
                .iter()
                .map(|card| HtmlJobCard {
                    title: card.title.clone(),
                    company: card.company.clone(),
                    badge_color: card.badge_color.hex().to_string(),
                    badge_label: card.badge_label.clone(),
                    location: card.location.clone(),
                    description: card.description.clone(),
                    apply_href: card.apply_href.clone(),
                })
                .collect(),
            has_message: !message.is_empty(),
            message_class: message_class.to_string(),
            message,
        }
    }

    /// The whole page with every element id, as the view stands right now.
    pub fn format_page(&self, page: &PageSnapshot<'_>) -> Result<String> {
        let view = page.view;
        let zone = &view.drop_zone;

        let mut drop_zone_class = String::from("drop-zone");
        if zone.is_dragover() {
            drop_zone_class.push_str(" dragover");
        }
        if zone.is_filled() {
            drop_zone_class.push_str(" filled");
        }

        let results_html = Self::results_template(view.results(), view.counter().label(), !view.results_visible())
            .render()?;
        let jobs_html = Self::jobs_template(view.job_results()).render()?;
        let button = view.analyze_button();

        let template = PageTemplate {
            include_styles: self.include_styles,
            drop_zone_class,
            hint_visible: zone.hint_visible(),
            file_label: zone.file_label().to_string(),
            roles: page
                .roles
                .iter()
                .map(|role| RoleOption {
                    name: role.clone(),
                    selected: role == page.selected_role,
                })
                .collect(),
            analyze_disabled: button.disabled,
            label_visible: button.label_visible,
            loader_visible: button.loader_visible,
            results_html,
            location: page.location.to_string(),
            search_disabled: view.search_button_disabled(),
            job_loader_visible: view.job_loader_visible(),
            jobs_html,
            rendered_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        };

        Ok(template.render()?)
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_results(&self, panel: &ResultsPanel) -> Result<String> {
        Ok(Self::results_template(Some(panel), panel.percentage_label(), false).render()?)
    }

    fn format_jobs(&self, jobs: &JobResultsView) -> Result<String> {
        Ok(Self::jobs_template(jobs).render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, include_styles: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
            html_formatter: HtmlFormatter::new(include_styles),
        }
    }

    pub fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Html => &self.html_formatter,
        }
    }

    pub fn html(&self) -> &HtmlFormatter {
        &self.html_formatter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalysisResult, CandidateInfo, JobListing, MissingSkill};

    fn analysis(percentage: f64) -> AnalysisResult {
        AnalysisResult {
            resume_text: String::new(),
            job_role: None,
            match_percentage: percentage,
            missing_skills: vec![],
            matched_skills: vec![],
            candidate_info: None,
            tips: None,
            recommendations: None,
        }
    }

    #[test]
    fn test_html_missing_skill_link() {
        let mut data = analysis(40.0);
        data.missing_skills = vec![MissingSkill {
            skill: "Docker".to_string(),
            link: "https://x".to_string(),
        }];
        let html = HtmlFormatter::new(false)
            .format_results(&ResultsPanel::from_result(&data))
            .unwrap();

        assert_eq!(html.matches("skill-item-missing").count(), 1);
        assert!(html.contains("<span>Docker</span>"));
        assert!(html.contains(r#"href="https://x""#));
        assert!(html.contains("stroke: #f59e0b"));
        assert!(html.contains(r#"stroke-dasharray="40, 100""#));
    }

    #[test]
    fn test_html_placeholders() {
        let html = HtmlFormatter::new(false)
            .format_results(&ResultsPanel::from_result(&analysis(20.0)))
            .unwrap();
        assert!(html.contains("<li>None! You have all required skills.</li>"));
        assert!(html.contains("<li>No specific skills matched.</li>"));
        assert!(html.contains("No specific recommendations found."));
        assert!(html.contains("Low match. Consider upskilling in the missing areas."));
    }

    #[test]
    fn test_html_escapes_server_text() {
        let mut data = analysis(90.0);
        data.matched_skills = vec!["<script>alert(1)</script>".to_string()];
        data.candidate_info = Some(CandidateInfo {
            email: "a@b.co".to_string(),
            phone: "\"555\"".to_string(),
        });
        let html = HtmlFormatter::new(false)
            .format_results(&ResultsPanel::from_result(&data))
            .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a@b.co"));
        assert!(!html.contains("\"555\""));
    }

    #[test]
    fn test_html_job_cards() {
        let jobs = vec![JobListing {
            title: "Senior <b>Dev</b>".to_string(),
            company: "Global Corp".to_string(),
            match_score: 82.0,
            location: "New York, NY".to_string(),
            description_snippet: "Lead our team.".to_string(),
            job_url: "https://jobs.example.com/9".to_string(),
        }];
        let html = HtmlFormatter::new(false)
            .format_jobs(&JobResultsView::from_jobs(Some(&jobs)))
            .unwrap();

        assert!(html.contains("background: #22c55e;"));
        assert!(html.contains("82% Match"));
        assert!(html.contains("Senior &lt;b&gt;Dev&lt;/b&gt;"));
        assert!(html.contains(r#"href="https://jobs.example.com/9""#));
        assert!(html.contains("Apply Now"));
    }

    #[test]
    fn test_html_job_error_inline() {
        let html = HtmlFormatter::new(false)
            .format_jobs(&JobResultsView::error("Failed to fetch jobs"))
            .unwrap();
        assert!(html.contains(r#"<p class="error">Error searching jobs: Failed to fetch jobs</p>"#));
    }

    #[test]
    fn test_console_without_colors() {
        let mut data = analysis(85.0);
        data.matched_skills = vec!["python".to_string()];
        data.tips = Some(vec!["Great job! Your resume covers the basics well.".to_string()]);
        let text = ConsoleFormatter::new(false)
            .format_results(&ResultsPanel::from_result(&data))
            .unwrap();

        assert!(text.contains("Match: 85% "));
        assert!(text.contains("Excellent match! You are a strong candidate."));
        assert!(text.contains("  • python"));
        assert!(text.contains("None! You have all required skills."));
        assert!(text.contains("Great job!"));
        assert!(!text.contains("Candidate"));
    }

    #[test]
    fn test_json_results() {
        let json = JsonFormatter::new(false)
            .format_results(&ResultsPanel::from_result(&analysis(55.0)))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["comment"], "good");
        assert_eq!(value["ring"]["color"], "amber");
        assert_eq!(value["missing_skills"]["kind"], "placeholder");
    }

    #[tokio::test]
    async fn test_page_carries_every_element_id() {
        let mut view = crate::view::PageView::new(std::time::Duration::from_millis(1));
        view.show_results(ResultsPanel::from_result(&analysis(64.0)));
        let roles = vec!["Web Developer".to_string()];
        let snapshot = PageSnapshot {
            view: &view,
            roles: &roles,
            selected_role: "Web Developer",
            location: "Remote",
        };

        let html = HtmlFormatter::new(true).format_page(&snapshot).unwrap();
        for id in crate::view::ids::ALL_IDS {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing id {}", id);
        }
        for class in crate::view::ids::ALL_CLASSES {
            assert!(html.contains(class), "missing class {}", class);
        }
        assert!(html.contains(r#"<option value="Web Developer" selected>"#));
        assert!(html.contains(r#"value="Remote""#));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::new(false, true);
        assert_eq!(generator.formatter(OutputFormat::Json).supports_format(), OutputFormat::Json);
        assert_eq!(generator.formatter(OutputFormat::Html).supports_format(), OutputFormat::Html);
        assert_eq!(generator.formatter(OutputFormat::Console).supports_format(), OutputFormat::Console);
    }
}
