use crate::domain::model::{InjectionPlan, LocalePlan, MergePolicy};
use crate::utils::error::{InjectError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A plan file: `[plan]` settings plus one `[[locales]]` table per bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub plan: PlanConfig,
    pub locales: Vec<LocalePlan>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    pub name: String,
    pub section: String,
    pub policy: Option<MergePolicy>,
}

impl TomlConfig {
    /// Loads a plan file from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| InjectError::io(path.as_ref().display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| InjectError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| InjectError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn into_plan(self) -> InjectionPlan {
        InjectionPlan {
            name: self.plan.name,
            section: self.plan.section,
            policy: self.plan.policy.unwrap_or_default(),
            locales: self.locales,
        }
    }
}
