pub mod builtin;
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{InjectionPlan, LocalePlan, MergePolicy};
#[cfg(feature = "cli")]
use crate::utils::error::{InjectError, Result};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "i18n-inject")]
#[command(about = "Inject translated strings into JSON localization bundles")]
pub struct CliConfig {
    /// TOML plan file; the built-in services placeholder plan runs without it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding <code>.json bundles for the built-in plan
    #[arg(long, default_value = builtin::DEFAULT_MESSAGES_DIR, conflicts_with = "config")]
    pub messages_dir: String,

    /// Override a locale's bundle path, e.g. --locale es=/srv/app/es.json
    #[arg(long = "locale", value_name = "CODE=PATH", value_parser = parse_locale_override)]
    pub locale_overrides: Vec<(String, String)>,

    /// Override the target section (dot-separated key path)
    #[arg(long)]
    pub section: Option<String>,

    /// Keep values already present instead of overwriting them
    #[arg(long)]
    pub skip_existing: bool,

    /// Show what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
fn parse_locale_override(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((code, path)) if !code.is_empty() && !path.is_empty() => {
            Ok((code.to_string(), path.to_string()))
        }
        _ => Err(format!("expected CODE=PATH, got '{}'", raw)),
    }
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the plan (file or built-in) and applies command line overrides.
    pub fn resolve_plan(&self) -> Result<InjectionPlan> {
        let mut plan = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading plan from: {}", path);
                toml_config::TomlConfig::from_file(path)?.into_plan()
            }
            None => {
                tracing::debug!("Using built-in plan with messages dir {}", self.messages_dir);
                builtin::services_placeholders(&self.messages_dir)
            }
        };

        if let Some(section) = &self.section {
            tracing::info!("🔧 Section overridden to: {}", section);
            plan.section = section.clone();
        }

        if self.skip_existing {
            plan.policy = MergePolicy::SkipExisting;
        }

        for (code, path) in &self.locale_overrides {
            let locale = plan.locale_mut(code).ok_or_else(|| {
                InjectError::InvalidConfigValueError {
                    field: "--locale".to_string(),
                    value: code.clone(),
                    reason: "Locale is not part of the plan".to_string(),
                }
            })?;
            locale.path = path.clone();
        }

        Ok(plan)
    }
}

impl ConfigProvider for InjectionPlan {
    fn section(&self) -> &str {
        &self.section
    }

    fn policy(&self) -> MergePolicy {
        self.policy
    }

    fn locales(&self) -> &[LocalePlan] {
        &self.locales
    }
}
