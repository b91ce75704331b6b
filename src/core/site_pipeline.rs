pub use crate::app::pipelines::site_pipeline::SitePipeline;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::SiteToml;
    use crate::config::CliConfig;
    use crate::core::engine::{DiagnosticPolicy, SiteEngine};
    use crate::domain::ports::{Pipeline, Storage};
    use crate::utils::error::{Result, SiteError};
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        rejected: Option<&'static str>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                rejected: None,
            }
        }

        /// Writes to `path` fail with a permission error.
        fn rejecting(path: &'static str) -> Self {
            Self {
                rejected: Some(path),
                ..Self::new()
            }
        }

        async fn put_file(&self, path: &str, data: &[u8]) {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }

        async fn file_count(&self) -> usize {
            self.files.lock().await.len()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                SiteError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.rejected == Some(path) {
                return Err(SiteError::IoError(std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    format!("Read-only: {}", path),
                )));
            }
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }

        async fn exists(&self, path: &str) -> bool {
            self.files.lock().await.contains_key(path)
        }
    }

    fn content_file(toml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();
        file
    }

    const TWO_PROJECTS: &str = r#"
[[projects]]
name = "Alpha"
tags = ["Rust"]
dates = "2026"
summary = "First."

[[projects]]
name = "Beta"
tags = []
dates = "2026"
summary = "Second."
"#;

    const RELATIVE_LINK: &str = r#"
[[projects]]
name = "Alpha"
href = "project1.html"
tags = ["Rust"]
dates = "2026"
summary = "First."

[[projects]]
name = "Beta"
href = "https://example.com/beta"
tags = ["Go"]
dates = "2026"
summary = "Second."

[[projects]]
name = "Gamma"
tags = ["C++"]
dates = "2026"
summary = "Third."
"#;

    #[tokio::test]
    async fn test_shipped_site_publishes_clean() {
        let storage = MockStorage::new();
        let pipeline = SitePipeline::new(storage.clone(), CliConfig::default()).with_year(2026);
        let engine = SiteEngine::new(pipeline);

        let outcome = engine.run().await.unwrap();

        assert!(outcome.report.is_clean());
        assert!(outcome.dark_mode);
        assert_eq!(outcome.output_path.as_deref(), Some("./dist/index.html"));

        let html = String::from_utf8(storage.get_file("index.html").await.unwrap()).unwrap();
        assert!(html.contains(r#"class="dark""#));
        assert!(html.contains("SIP MWI Go Service"));
        // No resume source configured, so only the page is written.
        assert_eq!(storage.file_count().await, 1);
    }

    #[tokio::test]
    async fn test_light_flag_renders_without_marker() {
        let config = CliConfig {
            light: true,
            ..CliConfig::default()
        };
        let pipeline = SitePipeline::new(MockStorage::new(), config);

        let content = pipeline.load_content().await.unwrap();
        let page = pipeline.render(&content).await.unwrap();

        assert!(!page.dark_mode);
        assert!(page.html.contains("<html lang=\"en\">"));
    }

    #[tokio::test]
    async fn test_bad_content_still_publishes_by_default() {
        let file = content_file(TWO_PROJECTS);
        let config = CliConfig {
            content: Some(file.path().to_string_lossy().to_string()),
            ..CliConfig::default()
        };
        let storage = MockStorage::new();
        let engine = SiteEngine::new(SitePipeline::new(storage.clone(), config));

        let outcome = engine.run().await.unwrap();

        assert_eq!(outcome.report.len(), 2);
        assert_eq!(
            outcome.report.diagnostics()[0].message,
            "Projects should have ≥ 3 items"
        );
        assert_eq!(outcome.report.diagnostics()[1].message, "Stack missing for Beta");
        assert!(storage.get_file("index.html").await.is_some());
    }

    #[tokio::test]
    async fn test_strict_policy_refuses_to_publish() {
        let file = content_file(TWO_PROJECTS);
        let config = CliConfig {
            content: Some(file.path().to_string_lossy().to_string()),
            ..CliConfig::default()
        };
        let storage = MockStorage::new();
        let engine = SiteEngine::new_with_policy(
            SitePipeline::new(storage.clone(), config),
            DiagnosticPolicy::Strict,
        );

        let err = engine.run().await.unwrap_err();

        assert!(matches!(err, SiteError::IntegrityError { count: 2 }));
        assert_eq!(storage.file_count().await, 0);
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let storage = MockStorage::new();
        let engine = SiteEngine::new(SitePipeline::new(storage.clone(), CliConfig::default()));

        let outcome = engine.dry_run().await.unwrap();

        assert!(outcome.output_path.is_none());
        assert!(outcome.report.is_clean());
        assert_eq!(storage.file_count().await, 0);
    }

    #[tokio::test]
    async fn test_site_toml_title_and_filename() {
        let config = SiteToml::from_toml_str(
            "[site]\ntitle = \"Portfolio\"\nlang = \"en-US\"\n\n[output]\nfilename = \"home.html\"\n",
        )
        .unwrap();
        let storage = MockStorage::new();
        let pipeline = SitePipeline::new(storage.clone(), config);

        let content = pipeline.load_content().await.unwrap();
        let page = pipeline.render(&content).await.unwrap();
        let path = pipeline.publish(page).await.unwrap();

        assert_eq!(path, "./dist/home.html");
        let html = String::from_utf8(storage.read_file("home.html").await.unwrap()).unwrap();
        assert!(html.contains("<title>Portfolio</title>"));
        assert!(html.contains(r#"<html lang="en-US" class="dark">"#));
    }

    #[tokio::test]
    async fn test_missing_resume_is_not_fatal() {
        let config = CliConfig {
            resume: Some("/definitely/not/here/resume.pdf".to_string()),
            ..CliConfig::default()
        };
        let storage = MockStorage::new();
        let engine = SiteEngine::new(SitePipeline::new(storage.clone(), config));

        let outcome = engine.run().await.unwrap();

        assert!(outcome.output_path.is_some());
        assert!(storage.get_file("resume.pdf").await.is_none());
    }

    #[tokio::test]
    async fn test_unreadable_content_file_is_an_error() {
        let config = CliConfig {
            content: Some("/definitely/not/here/content.toml".to_string()),
            ..CliConfig::default()
        };
        let engine = SiteEngine::new(SitePipeline::new(MockStorage::new(), config));

        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, SiteError::IoError(_)));
    }

    #[tokio::test]
    async fn test_relative_project_link_is_reported_not_fatal() {
        let file = content_file(RELATIVE_LINK);
        let config = CliConfig {
            content: Some(file.path().to_string_lossy().to_string()),
            ..CliConfig::default()
        };
        let storage = MockStorage::new();
        let engine = SiteEngine::new(SitePipeline::new(storage.clone(), config.clone()));

        let outcome = engine.run().await.unwrap();

        assert_eq!(outcome.report.len(), 1);
        assert!(outcome.report.diagnostics()[0]
            .message
            .contains("projects.Alpha.href"));
        let html = String::from_utf8(storage.get_file("index.html").await.unwrap()).unwrap();
        assert!(html.contains(r#"href="project1.html""#));

        let storage = MockStorage::new();
        let strict = SiteEngine::new_with_policy(
            SitePipeline::new(storage.clone(), config),
            DiagnosticPolicy::Strict,
        );
        let err = strict.run().await.unwrap_err();
        assert!(matches!(err, SiteError::IntegrityError { count: 1 }));
        assert_eq!(storage.file_count().await, 0);
    }

    #[tokio::test]
    async fn test_resume_read_through_asset_storage() {
        let assets = MockStorage::new();
        assets.put_file("cv/resume.pdf", b"%PDF-1.4").await;
        let config = CliConfig {
            resume: Some("cv/resume.pdf".to_string()),
            ..CliConfig::default()
        };
        let storage = MockStorage::new();
        let engine = SiteEngine::new(SitePipeline::new(storage.clone(), config).with_assets(assets));

        engine.run().await.unwrap();

        assert_eq!(storage.get_file("resume.pdf").await.unwrap(), b"%PDF-1.4".to_vec());
        assert!(storage.get_file("index.html").await.is_some());
    }

    #[tokio::test]
    async fn test_failed_resume_write_leaves_no_page() {
        let assets = MockStorage::new();
        assets.put_file("resume.pdf", b"%PDF-1.4").await;
        let config = CliConfig {
            resume: Some("resume.pdf".to_string()),
            ..CliConfig::default()
        };
        let storage = MockStorage::rejecting("resume.pdf");
        let engine = SiteEngine::new(SitePipeline::new(storage.clone(), config).with_assets(assets));

        let err = engine.run().await.unwrap_err();

        assert!(matches!(err, SiteError::IoError(_)));
        assert!(storage.get_file("index.html").await.is_none());
        assert_eq!(storage.file_count().await, 0);
    }
}
