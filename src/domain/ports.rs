use crate::domain::model::{PortfolioContent, RenderedPage};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn content_file(&self) -> Option<&str>;
    fn resume_source(&self) -> Option<&str>;
    fn strict(&self) -> bool;
    /// Initial theme state at mount.
    fn dark_by_default(&self) -> bool {
        true
    }
    /// `<title>` of the page; the profile name when unset.
    fn site_title(&self) -> Option<&str> {
        None
    }
    fn lang(&self) -> &str {
        "en"
    }
}

/// The element the dark-mode marker is applied to.
pub trait DocumentRoot {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn load_content(&self) -> Result<PortfolioContent>;
    async fn render(&self, content: &PortfolioContent) -> Result<RenderedPage>;
    async fn publish(&self, page: RenderedPage) -> Result<String>;
}
