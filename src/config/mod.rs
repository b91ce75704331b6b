pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_file_name, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./dist";
pub const DEFAULT_OUTPUT_FILENAME: &str = "index.html";
/// Where the resume is published, relative to the output directory.
pub const RESUME_ASSET: &str = "resume.pdf";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "portfolio-site"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Render the portfolio page to static HTML")
)]
pub struct CliConfig {
    /// Directory the page and assets are written to [default: ./dist]
    #[cfg_attr(feature = "cli", arg(long))]
    pub output_path: Option<String>,

    /// Site TOML file; flags given on the command line win over it
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// TOML file replacing some or all of the shipped content
    #[cfg_attr(feature = "cli", arg(long))]
    pub content: Option<String>,

    /// Resume PDF copied into the output directory as resume.pdf
    #[cfg_attr(feature = "cli", arg(long))]
    pub resume: Option<String>,

    /// Fail the run when any integrity diagnostic is reported
    #[cfg_attr(feature = "cli", arg(long))]
    pub strict: bool,

    /// Render with the light theme as the initial state
    #[cfg_attr(feature = "cli", arg(long))]
    pub light: bool,

    /// Run the checks and render, but write nothing
    #[cfg_attr(feature = "cli", arg(long))]
    pub dry_run: bool,

    /// Emit logs as JSON lines
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_json: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn output_filename(&self) -> &str {
        DEFAULT_OUTPUT_FILENAME
    }

    fn content_file(&self) -> Option<&str> {
        self.content.as_deref()
    }

    fn resume_source(&self) -> Option<&str> {
        self.resume.as_deref()
    }

    fn strict(&self) -> bool {
        self.strict
    }

    fn dark_by_default(&self) -> bool {
        !self.light
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", self.output_path())?;
        validate_file_name("output_filename", self.output_filename())?;
        if let Some(content) = &self.content {
            validate_path("content", content)?;
        }
        if let Some(resume) = &self.resume {
            validate_path("resume", resume)?;
        }
        Ok(())
    }
}
