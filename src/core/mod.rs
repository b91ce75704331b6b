pub mod engine;
pub mod site_pipeline;

pub use crate::domain::model::{PortfolioContent, RenderedPage};
pub use crate::domain::ports::{ConfigProvider, DocumentRoot, Pipeline, Storage};
pub use crate::utils::error::Result;
