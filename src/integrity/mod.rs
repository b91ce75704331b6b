//! Self-checks for content and rendered output.
//!
//! Both checks only report. Every violation is logged at error level as it
//! is found and collected into an [`IntegrityReport`]; neither check returns
//! an error or stops rendering. Whether a non-empty report fails the run is
//! decided by the caller (see strict mode in the pipeline).

use crate::domain::model::PortfolioContent;
use crate::utils::validation::validate_link;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::OnceLock;

pub const MIN_PROJECTS: usize = 3;
pub const MIN_EXPERIENCES: usize = 2;

/// Section ids every rendered page must expose exactly once.
pub const SECTION_ANCHORS: [&str; 9] = [
    "home",
    "experience",
    "projects",
    "about",
    "skills",
    "coursework",
    "education",
    "resume",
    "contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    DataShape,
    Anchors,
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::DataShape => write!(f, "data-shape"),
            CheckKind::Anchors => write!(f, "anchors"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub check: CheckKind,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.check, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegrityReport {
    diagnostics: Vec<Diagnostic>,
}

impl IntegrityReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed assertion. Logs immediately.
    pub fn assert(&mut self, condition: bool, check: CheckKind, message: impl FnOnce() -> String) {
        if condition {
            return;
        }
        let diagnostic = Diagnostic {
            check,
            message: message(),
        };
        tracing::error!("❌ Assertion failed: {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    pub fn merge(&mut self, other: IntegrityReport) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Runs once on loaded content, before anything is rendered.
pub fn check_content(content: &PortfolioContent) -> IntegrityReport {
    use CheckKind::DataShape;

    let mut report = IntegrityReport::new();

    report.assert(content.projects.len() >= MIN_PROJECTS, DataShape, || {
        format!("Projects should have ≥ {} items", MIN_PROJECTS)
    });

    for project in &content.projects {
        report.assert(!project.name.is_empty(), DataShape, || {
            "Project name missing".to_string()
        });
        report.assert(!project.tags.is_empty(), DataShape, || {
            format!("Stack missing for {}", project.name)
        });

        match serde_json::to_string(project) {
            Ok(serialized) => report.assert(!serialized.contains("\\\""), DataShape, || {
                format!("Escaped quotes detected in {}", project.name)
            }),
            Err(e) => report.assert(false, DataShape, || {
                format!("Could not serialize {}: {}", project.name, e)
            }),
        }

        if let Some(href) = &project.href {
            check_link(&mut report, &format!("projects.{}.href", project.name), href);
        }
    }

    report.assert(content.experiences.len() >= MIN_EXPERIENCES, DataShape, || {
        format!("Experiences should have ≥ {} items", MIN_EXPERIENCES)
    });

    for experience in &content.experiences {
        report.assert(!experience.bullets.is_empty(), DataShape, || {
            format!("Bullets missing for {}", experience.organization)
        });
    }

    let mut labels = HashSet::new();
    for group in &content.skills {
        report.assert(labels.insert(group.label.as_str()), DataShape, || {
            format!("Duplicate skill group {}", group.label)
        });
    }

    let profile = &content.profile;
    check_link(&mut report, "profile.github_url", &profile.github_url);
    check_link(&mut report, "profile.linkedin_url", &profile.linkedin_url);
    check_link(&mut report, "profile.legacy_site_url", &profile.legacy_site_url);

    if report.is_clean() {
        tracing::debug!("Content check passed");
    }
    report
}

/// Outbound links must be absolute http(s) URLs; anything else ships a dead href.
fn check_link(report: &mut IntegrityReport, field: &str, link: &str) {
    if let Err(e) = validate_link(field, link) {
        report.assert(false, CheckKind::DataShape, || e.to_string());
    }
}

fn element_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"<[A-Za-z][^<>]*?\sid\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("element id pattern is valid")
    })
}

fn non_markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>|<!--.*?-->")
            .expect("non-markup pattern is valid")
    })
}

/// Count of elements carrying each `id` attribute in `html`.
/// Script bodies, style blocks and comments are ignored.
pub fn element_ids(html: &str) -> HashMap<String, usize> {
    let markup = non_markup_pattern().replace_all(html, "");
    let mut counts = HashMap::new();
    for caps in element_id_pattern().captures_iter(&markup) {
        if let Some(id) = caps.get(1).or_else(|| caps.get(2)) {
            *counts.entry(id.as_str().to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Runs once on the finished page.
pub fn check_anchors(html: &str) -> IntegrityReport {
    use CheckKind::Anchors;

    let counts = element_ids(html);
    let mut report = IntegrityReport::new();

    for anchor in SECTION_ANCHORS {
        let found = counts.get(anchor).copied().unwrap_or(0);
        report.assert(found != 0, Anchors, || format!("Missing section #{}", anchor));
        report.assert(found <= 1, Anchors, || {
            format!("Section #{} appears {} times", anchor, found)
        });
    }

    if report.is_clean() {
        tracing::debug!("All {} section anchors present", SECTION_ANCHORS.len());
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::shipped;
    use crate::domain::model::{Project, SkillGroup};

    fn project(name: &str, tags: &[&str], summary: &str) -> Project {
        Project {
            name: name.to_string(),
            href: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            dates: "2026".to_string(),
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_shipped_content_is_clean() {
        let report = check_content(&shipped());
        assert!(report.is_clean(), "{:?}", report.diagnostics());
    }

    #[test]
    fn test_each_violation_reported_once() {
        let mut content = shipped();
        content.projects = vec![
            project("", &["Go"], "fine"),
            project("No Tags", &[], "fine"),
        ];
        content.experiences.truncate(1);
        content.experiences[0].bullets.clear();
        content.skills.push(SkillGroup {
            label: "Tools".to_string(),
            skills: vec!["Make".to_string()],
        });

        let report = check_content(&content);
        let messages: Vec<&str> = report
            .diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();

        assert_eq!(
            messages,
            vec![
                "Projects should have ≥ 3 items",
                "Project name missing",
                "Stack missing for No Tags",
                "Experiences should have ≥ 2 items",
                "Bullets missing for Lutron Electronics Company",
                "Duplicate skill group Tools",
            ]
        );
        assert!(report
            .diagnostics()
            .iter()
            .all(|d| d.check == CheckKind::DataShape));
    }

    #[test]
    fn test_bad_links_are_diagnostics() {
        let mut content = shipped();
        content.projects[0].href = Some("project1.html".to_string());
        content.profile.linkedin_url = "mailto:someone@example.com".to_string();

        let report = check_content(&content);
        assert_eq!(report.len(), 2);
        assert!(report.diagnostics()[0]
            .message
            .contains("projects.SIP MWI Go Service.href"));
        assert!(report.diagnostics()[1].message.contains("profile.linkedin_url"));
        assert!(report
            .diagnostics()
            .iter()
            .all(|d| d.check == CheckKind::DataShape));
    }

    #[test]
    fn test_quote_in_summary_or_tag_is_flagged() {
        let mut content = shipped();
        content.projects[1].summary = r#"The "best" theater"#.to_string();
        content.projects[2].tags.push(r#"C\""#.to_string());

        let report = check_content(&content);
        assert_eq!(report.len(), 2);
        assert!(report.diagnostics()[0]
            .message
            .contains("Movie Theater Management Programs"));
        assert!(report.diagnostics()[1]
            .message
            .contains("University Faculty/Staff Manager"));
    }

    #[test]
    fn test_anchor_check_counts_elements() {
        let html = r#"<main>
<section id="home"></section><section id="experience"></section>
<section id='projects'></section><section id="about"></section>
<section id="skills"></section><section id="coursework"></section>
<section id="education"></section><section id="resume">
<div class="glass" id="contact"></div></section></main>"#;
        assert!(check_anchors(html).is_clean());
    }

    #[test]
    fn test_anchor_check_reports_missing_and_duplicate() {
        let html = r##"<section id="home"></section><section id="home"></section>
<a href="#experience">Experience</a>
<script>document.getElementById("projects"); var s = '<div id="projects">';</script>
<!-- <div id="about"></div> -->"##;

        let report = check_anchors(html);
        let messages: Vec<String> = report.diagnostics().iter().map(|d| d.message.clone()).collect();

        assert!(messages.contains(&"Section #home appears 2 times".to_string()));
        assert!(messages.contains(&"Missing section #experience".to_string()));
        assert!(messages.contains(&"Missing section #projects".to_string()));
        assert!(messages.contains(&"Missing section #about".to_string()));
        assert_eq!(report.len(), 9);
    }

    #[test]
    fn test_data_attributes_are_not_ids() {
        let counts = element_ids(r#"<div data-id="home" grid="x"></div><p id="about">"#);
        assert_eq!(counts.get("home"), None);
        assert_eq!(counts.get("about"), Some(&1));
    }
}
