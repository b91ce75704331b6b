use crate::config::cli::LocalStorage;
use crate::config::RESUME_ASSET;
use crate::content::{shipped, ContentOverrides};
use crate::domain::model::{PortfolioContent, RenderedPage};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::render::PageRenderer;
use crate::theme::{RootClassList, ThemeController};
use crate::utils::error::Result;

/// `storage` receives the published files; `assets` is where source files
/// such as the resume are read from.
pub struct SitePipeline<S: Storage, C: ConfigProvider, A: Storage = LocalStorage> {
    pub(crate) storage: S,
    pub(crate) assets: A,
    pub(crate) config: C,
    pub(crate) year: Option<i32>,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    /// Asset paths resolve against the working directory.
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            assets: LocalStorage::new("."),
            config,
            year: None,
        }
    }
}

impl<S: Storage, C: ConfigProvider, A: Storage> SitePipeline<S, C, A> {
    pub fn with_assets<B: Storage>(self, assets: B) -> SitePipeline<S, C, B> {
        SitePipeline {
            storage: self.storage,
            assets,
            config: self.config,
            year: self.year,
        }
    }

    /// Pin the footer year, for reproducible output.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn renderer(&self, content: &PortfolioContent) -> PageRenderer {
        let title = self
            .config
            .site_title()
            .unwrap_or(content.profile.name.as_str());
        let renderer = PageRenderer::new(title, self.config.lang());
        match self.year {
            Some(year) => renderer.with_year(year),
            None => renderer,
        }
    }

    async fn publish_resume(&self) -> Result<()> {
        let Some(source) = self.config.resume_source() else {
            tracing::debug!("No resume source configured, skipping /{}", RESUME_ASSET);
            return Ok(());
        };

        match self.assets.read_file(source).await {
            Ok(data) => {
                tracing::debug!("Copying resume {} ({} bytes)", source, data.len());
                self.storage.write_file(RESUME_ASSET, &data).await
            }
            Err(e) => {
                // 連結仍會輸出，只是下載會 404
                tracing::warn!("⚠️ Resume not found at {}: {}", source, e);
                Ok(())
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, A: Storage> Pipeline for SitePipeline<S, C, A> {
    async fn load_content(&self) -> Result<PortfolioContent> {
        let base = shipped();
        match self.config.content_file() {
            Some(path) => {
                tracing::debug!("Loading content overrides from: {}", path);
                Ok(ContentOverrides::from_file(path)?.apply(base))
            }
            None => Ok(base),
        }
    }

    async fn render(&self, content: &PortfolioContent) -> Result<RenderedPage> {
        let theme = ThemeController::mount_with(RootClassList::new(), self.config.dark_by_default());
        let html = self.renderer(content).render(content, &theme);
        Ok(RenderedPage {
            html,
            dark_mode: theme.is_dark(),
        })
    }

    async fn publish(&self, page: RenderedPage) -> Result<String> {
        let filename = self.config.output_filename();
        if self.storage.exists(filename).await {
            tracing::debug!("Overwriting existing {}", filename);
        }

        // 先寫履歷，失敗時不留下半套輸出
        self.publish_resume().await?;
        self.storage.write_file(filename, page.html.as_bytes()).await?;

        let output_path = format!("{}/{}", self.config.output_path(), filename);
        tracing::debug!("Page written to {}", output_path);
        Ok(output_path)
    }
}
