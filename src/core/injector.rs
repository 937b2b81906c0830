use crate::domain::model::{MergePolicy, MergeStats};
use crate::utils::error::{InjectError, Result};
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Merges an entry table into one section of a bundle.
#[derive(Debug, Clone)]
pub struct Injector {
    segments: Vec<String>,
    policy: MergePolicy,
}

impl Injector {
    pub fn new(section: &str, policy: MergePolicy) -> Self {
        Self {
            segments: section.split('.').map(str::to_string).collect(),
            policy,
        }
    }

    pub fn section(&self) -> String {
        self.segments.join(".")
    }

    /// Applies `entries` to the section of `bundle`, creating the section
    /// (and any missing parents) as empty objects first.
    ///
    /// `origin` only labels errors. If a section segment exists but is not
    /// an object the bundle is returned untouched with `SectionNotObject`.
    pub fn apply(
        &self,
        origin: &str,
        bundle: &mut Value,
        entries: &IndexMap<String, String>,
    ) -> Result<MergeStats> {
        let root = bundle.as_object_mut().ok_or_else(|| InjectError::NotAnObject {
            path: origin.to_string(),
        })?;

        let mut stats = MergeStats::default();
        let section = self.section_mut(origin, root, &mut stats)?;

        for (key, value) in entries {
            match section.get(key) {
                None => {
                    section.insert(key.clone(), Value::String(value.clone()));
                    stats.inserted += 1;
                }
                Some(Value::String(existing)) if existing == value => {
                    stats.unchanged += 1;
                }
                Some(existing) => match self.policy {
                    MergePolicy::Overwrite => {
                        tracing::debug!("{}: overwriting '{}' (was {})", origin, key, existing);
                        section.insert(key.clone(), Value::String(value.clone()));
                        stats.overwritten += 1;
                    }
                    MergePolicy::SkipExisting => {
                        tracing::debug!("{}: keeping existing '{}'", origin, key);
                        stats.skipped += 1;
                    }
                },
            }
        }

        Ok(stats)
    }

    // Once a segment is missing every later one is created fresh, so a
    // non-object can only be found before anything was inserted.
    fn section_mut<'a>(
        &self,
        origin: &str,
        root: &'a mut Map<String, Value>,
        stats: &mut MergeStats,
    ) -> Result<&'a mut Map<String, Value>> {
        let mut current = root;
        for (depth, segment) in self.segments.iter().enumerate() {
            if !current.contains_key(segment) {
                stats.section_created = true;
            }
            let slot = current
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match slot {
                Value::Object(child) => child,
                _ => {
                    return Err(InjectError::SectionNotObject {
                        path: origin.to_string(),
                        section: self.segments[..=depth].join("."),
                    })
                }
            };
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_creates_missing_section() {
        let mut bundle = json!({"common": {"save": "Save"}});
        let injector = Injector::new("services", MergePolicy::Overwrite);

        let stats = injector
            .apply("en.json", &mut bundle, &entries(&[("a", "1"), ("b", "2")]))
            .unwrap();

        assert!(stats.section_created);
        assert_eq!(stats.inserted, 2);
        assert_eq!(bundle, json!({"common": {"save": "Save"}, "services": {"a": "1", "b": "2"}}));
    }

    #[test]
    fn test_overwrite_keeps_key_position() {
        let mut bundle = json!({"services": {"a": "old", "title": "Services"}});
        let injector = Injector::new("services", MergePolicy::Overwrite);

        let stats = injector
            .apply("en.json", &mut bundle, &entries(&[("a", "new"), ("title", "Services")]))
            .unwrap();

        assert_eq!(stats.overwritten, 1);
        assert_eq!(stats.unchanged, 1);
        assert!(!stats.section_created);
        let keys: Vec<&String> = bundle["services"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["a", "title"]);
        assert_eq!(bundle["services"]["a"], "new");
    }

    #[test]
    fn test_skip_existing_leaves_values() {
        let mut bundle = json!({"services": {"a": "mine"}});
        let injector = Injector::new("services", MergePolicy::SkipExisting);

        let stats = injector
            .apply("es.json", &mut bundle, &entries(&[("a", "theirs"), ("b", "2")]))
            .unwrap();

        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.inserted, 1);
        assert_eq!(bundle, json!({"services": {"a": "mine", "b": "2"}}));
    }

    #[test]
    fn test_overwrites_non_string_values() {
        let mut bundle = json!({"services": {"a": {"nested": "x"}}});
        let injector = Injector::new("services", MergePolicy::Overwrite);

        let stats = injector
            .apply("en.json", &mut bundle, &entries(&[("a", "flat")]))
            .unwrap();

        assert_eq!(stats.overwritten, 1);
        assert_eq!(bundle, json!({"services": {"a": "flat"}}));
    }

    #[test]
    fn test_nested_section_path() {
        let mut bundle = json!({"settings": {"title": "Settings"}});
        let injector = Injector::new("settings.clinics", MergePolicy::Overwrite);

        injector
            .apply("en.json", &mut bundle, &entries(&[("title", "Clinics")]))
            .unwrap();

        assert_eq!(
            bundle,
            json!({"settings": {"title": "Settings", "clinics": {"title": "Clinics"}}})
        );
    }

    #[test]
    fn test_section_not_object_is_rejected_without_changes() {
        let original = json!({"services": "Services"});
        let mut bundle = original.clone();
        let injector = Injector::new("services.form", MergePolicy::Overwrite);

        let err = injector
            .apply("en.json", &mut bundle, &entries(&[("a", "1")]))
            .unwrap_err();

        match err {
            InjectError::SectionNotObject { section, .. } => assert_eq!(section, "services"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(bundle, original);
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let mut bundle = json!({"services": {"title": "Services"}});
        let injector = Injector::new("services", MergePolicy::Overwrite);
        let table = entries(&[("a", "1"), ("title", "Services!")]);

        injector.apply("en.json", &mut bundle, &table).unwrap();
        let once = bundle.clone();
        let second = injector.apply("en.json", &mut bundle, &table).unwrap();

        assert_eq!(bundle, once);
        assert_eq!(second.changed(), 0);
        assert_eq!(second.unchanged, 2);
    }
}
