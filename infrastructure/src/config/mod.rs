//! Configuration loading and schema

mod file_config;
mod loader;

pub use file_config::{BehaviorSection, FileConfig, ProviderSettings, ProvidersSection};
pub use loader::ConfigLoader;
