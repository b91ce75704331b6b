use crate::domain::ports::Pipeline;
use crate::integrity::{check_anchors, check_content, IntegrityReport};
use crate::utils::error::{Result, SiteError};

/// What a non-empty integrity report does to the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagnosticPolicy {
    /// Log every diagnostic and publish anyway.
    #[default]
    LogAndContinue,
    /// Refuse to publish when any diagnostic was reported.
    Strict,
}

#[derive(Debug)]
pub struct SiteOutcome {
    /// `None` for dry runs.
    pub output_path: Option<String>,
    pub report: IntegrityReport,
    pub dark_mode: bool,
}

pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
    policy: DiagnosticPolicy,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_policy(pipeline, DiagnosticPolicy::default())
    }

    pub fn new_with_policy(pipeline: P, policy: DiagnosticPolicy) -> Self {
        Self { pipeline, policy }
    }

    pub async fn run(&self) -> Result<SiteOutcome> {
        self.execute(true).await
    }

    /// Load, check and render without writing anything.
    pub async fn dry_run(&self) -> Result<SiteOutcome> {
        self.execute(false).await
    }

    async fn execute(&self, publish: bool) -> Result<SiteOutcome> {
        tracing::info!("📚 Loading content...");
        let content = self.pipeline.load_content().await?;
        tracing::info!(
            "Loaded {} experiences, {} projects, {} skill groups",
            content.experiences.len(),
            content.projects.len(),
            content.skills.len()
        );

        let mut report = check_content(&content);

        tracing::info!("🎨 Rendering page...");
        let page = self.pipeline.render(&content).await?;

        // 頁面完成後才檢查錨點
        report.merge(check_anchors(&page.html));

        if report.is_clean() {
            tracing::info!("✅ Integrity checks passed");
        } else {
            tracing::warn!("⚠️ Integrity checks reported {} diagnostic(s)", report.len());
            if self.policy == DiagnosticPolicy::Strict {
                return Err(SiteError::IntegrityError {
                    count: report.len(),
                });
            }
        }

        let dark_mode = page.dark_mode;
        let output_path = if publish {
            tracing::info!("📦 Publishing...");
            Some(self.pipeline.publish(page).await?)
        } else {
            tracing::info!("🔍 Dry run, nothing written");
            None
        };

        Ok(SiteOutcome {
            output_path,
            report,
            dark_mode,
        })
    }
}
