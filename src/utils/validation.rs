use crate::domain::model::{InjectionPlan, LocalePlan};
use crate::utils::error::{InjectError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InjectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InjectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(InjectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(InjectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InjectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A section path is one or more non-empty keys joined by `.`.
pub fn validate_section_path(field_name: &str, section: &str) -> Result<()> {
    if section.split('.').any(|segment| segment.trim().is_empty()) {
        return Err(InjectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: section.to_string(),
            reason: "Section path segments cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_locales(locales: &[LocalePlan]) -> Result<()> {
    if locales.is_empty() {
        return Err(InjectError::MissingConfigError {
            field: "locales".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for locale in locales {
        validate_non_empty_string("locales.code", &locale.code)?;
        if !seen.insert(locale.code.as_str()) {
            return Err(InjectError::InvalidConfigValueError {
                field: "locales.code".to_string(),
                value: locale.code.clone(),
                reason: "Locale code is listed more than once".to_string(),
            });
        }

        let path_field = format!("locales.{}.path", locale.code);
        validate_path(&path_field, &locale.path)?;
        validate_file_extension(&path_field, &locale.path, &["json"])?;

        if locale.entries.is_empty() {
            return Err(InjectError::MissingConfigError {
                field: format!("locales.{}.entries", locale.code),
            });
        }

        // Entry keys are literal keys inside the section, not paths.
        for key in locale.entries.keys() {
            if key.is_empty() || key.contains('.') {
                return Err(InjectError::InvalidConfigValueError {
                    field: format!("locales.{}.entries", locale.code),
                    value: key.clone(),
                    reason: "Entry keys must be non-empty and must not contain '.'".to_string(),
                });
            }
        }
    }

    Ok(())
}

impl Validate for InjectionPlan {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("plan.name", &self.name)?;
        validate_section_path("plan.section", &self.section)?;
        validate_locales(&self.locales)
    }
}
