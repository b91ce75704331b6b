use crate::config::{CliConfig, DEFAULT_OUTPUT_FILENAME, DEFAULT_OUTPUT_PATH};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{
    validate_file_name, validate_non_empty_string, validate_path, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteToml {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub output: OutputSection,
    pub assets: Option<AssetsSection>,
    pub content: Option<ContentSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub strict: bool,
    #[serde(default = "default_dark")]
    pub dark_by_default: bool,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: None,
            lang: default_lang(),
            strict: false,
            dark_by_default: default_dark(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default = "default_output_path")]
    pub path: String,
    #[serde(default = "default_output_filename")]
    pub filename: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            filename: default_output_filename(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsSection {
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    pub file: String,
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_dark() -> bool {
    true
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_output_filename() -> String {
    DEFAULT_OUTPUT_FILENAME.to_string()
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap())
}

impl SiteToml {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESUME_PATH})，未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    /// Command-line flags win over the file.
    pub fn apply_cli_overrides(&mut self, cli: &CliConfig) {
        if let Some(path) = &cli.output_path {
            self.output.path = path.clone();
        }
        if let Some(file) = &cli.content {
            self.content = Some(ContentSection { file: file.clone() });
        }
        if let Some(resume) = &cli.resume {
            self.assets = Some(AssetsSection {
                resume: Some(resume.clone()),
            });
        }
        if cli.strict {
            self.site.strict = true;
        }
        if cli.light {
            self.site.dark_by_default = false;
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("output.path", &self.output.path)?;
        validate_file_name("output.filename", &self.output.filename)?;
        validate_non_empty_string("site.lang", &self.site.lang)?;

        if let Some(title) = &self.site.title {
            validate_non_empty_string("site.title", title)?;
        }
        if let Some(content) = &self.content {
            validate_path("content.file", &content.file)?;
        }
        if let Some(resume) = self.resume_source() {
            validate_path("assets.resume", resume)?;
        }

        Ok(())
    }
}

impl ConfigProvider for SiteToml {
    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_filename(&self) -> &str {
        &self.output.filename
    }

    fn content_file(&self) -> Option<&str> {
        self.content.as_ref().map(|c| c.file.as_str())
    }

    fn resume_source(&self) -> Option<&str> {
        self.assets.as_ref().and_then(|a| a.resume.as_deref())
    }

    fn strict(&self) -> bool {
        self.site.strict
    }

    fn dark_by_default(&self) -> bool {
        self.site.dark_by_default
    }

    fn site_title(&self) -> Option<&str> {
        self.site.title.as_deref()
    }

    fn lang(&self) -> &str {
        &self.site.lang
    }
}

impl Validate for SiteToml {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
