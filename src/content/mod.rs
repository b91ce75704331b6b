//! Page content: the shipped literals plus an optional TOML override file.
//!
//! An override file may name any subset of the top-level collections. A
//! collection present in the file replaces the shipped one wholesale; absent
//! collections keep the shipped values.

pub mod data;

use crate::domain::model::{
    CourseworkGroup, Education, Experience, PortfolioContent, Profile, Project, SkillGroup,
};
use crate::utils::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use data::shipped;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentOverrides {
    pub profile: Option<Profile>,
    pub experiences: Option<Vec<Experience>>,
    pub projects: Option<Vec<Project>>,
    pub skills: Option<Vec<SkillGroup>>,
    pub coursework: Option<Vec<CourseworkGroup>>,
    pub education: Option<Vec<Education>>,
}

impl ContentOverrides {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SiteError::ConfigValidationError {
            field: "content".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Layer these overrides on top of `base`.
    pub fn apply(self, mut base: PortfolioContent) -> PortfolioContent {
        if let Some(profile) = self.profile {
            base.profile = profile;
        }
        if let Some(experiences) = self.experiences {
            base.experiences = experiences;
        }
        if let Some(projects) = self.projects {
            base.projects = projects;
        }
        if let Some(skills) = self.skills {
            base.skills = skills;
        }
        if let Some(coursework) = self.coursework {
            base.coursework = coursework;
        }
        if let Some(education) = self.education {
            base.education = education;
        }
        base
    }
}
