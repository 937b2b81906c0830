use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What to do when an entry key already exists in the target section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergePolicy {
    #[default]
    Overwrite,
    SkipExisting,
}

/// One bundle file and the strings to inject into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalePlan {
    pub code: String,
    pub path: String,
    pub entries: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjectionPlan {
    pub name: String,
    /// Dot-separated key path of the section receiving the entries.
    pub section: String,
    #[serde(default)]
    pub policy: MergePolicy,
    pub locales: Vec<LocalePlan>,
}

impl InjectionPlan {
    pub fn locale(&self, code: &str) -> Option<&LocalePlan> {
        self.locales.iter().find(|l| l.code == code)
    }

    pub fn locale_mut(&mut self, code: &str) -> Option<&mut LocalePlan> {
        self.locales.iter_mut().find(|l| l.code == code)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    pub inserted: usize,
    pub overwritten: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub section_created: bool,
}

impl MergeStats {
    /// Number of keys whose value changed in the bundle.
    pub fn changed(&self) -> usize {
        self.inserted + self.overwritten
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub bundle: serde_json::Value,
    pub stats: MergeStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct InjectionReport {
    pub locale: String,
    pub path: String,
    pub stats: MergeStats,
    pub written: bool,
}
