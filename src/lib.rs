pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{builtin::services_placeholders, cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{engine::InjectEngine, injector::Injector, pipeline::InjectionPipeline};
pub use domain::model::{InjectionPlan, InjectionReport, LocalePlan, MergePolicy, MergeStats};
pub use utils::error::{InjectError, Result};
