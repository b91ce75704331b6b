pub mod app;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod integrity;
pub mod render;
pub mod theme;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::SiteToml, CliConfig};
pub use crate::core::{
    engine::{DiagnosticPolicy, SiteEngine, SiteOutcome},
    site_pipeline::SitePipeline,
};
pub use integrity::{check_anchors, check_content, Diagnostic, IntegrityReport, SECTION_ANCHORS};
pub use theme::{RootClassList, ThemeController};
pub use utils::error::{Result, SiteError};
