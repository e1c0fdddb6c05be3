pub mod cache;
pub mod config;

pub use cache::LayoutCache;
pub use config::{GraphConfig, LayoutSettings, Theme};
