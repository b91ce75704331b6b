use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub organization: String,
    pub role: String,
    pub location: String,
    pub dates: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub tags: Vec<String>,
    pub dates: String,
    pub summary: String,
}

/// Label plus its skills, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseworkGroup {
    pub label: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub dates: String,
    pub gpa: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub headline_accent: String,
    pub intro: String,
    pub about: String,
    pub phone: String,
    pub email: String,
    pub locations: String,
    pub highlights: Vec<String>,
    pub github_url: String,
    pub linkedin_url: String,
    pub legacy_site_url: String,
    /// Path the resume is served from, relative to the site root.
    pub resume_path: String,
}

/// Everything the page shows. Loaded once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub coursework: Vec<CourseworkGroup>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub dark_mode: bool,
}
