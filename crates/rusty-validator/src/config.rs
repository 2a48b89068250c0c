// File: src/config.rs
// Purpose: Declarative validations and renderers loaded from TOML or JSON

use crate::error::ValidatorError;
use crate::form::Form;
use crate::renderer::{ContainerRenderer, ErrorRenderer, InlineErrorRenderer, ListRenderer};
use crate::validator::Validator;
use crate::validators::RuleOptions;
use anyhow::{Context, Result};
use rusty_validator_dom::HtmlForm;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Validation configuration
///
/// ```toml
/// [renderers]
/// list = "Please double check your data before continuing:"
/// container = true
///
/// [[validations]]
/// kind = "presence"
/// selector = "#name"
/// options = { message = "Name is required" }
///
/// [[validations]]
/// kind = "length"
/// attribute = "password"
/// options = { min = 8, message = { min = "Password must have at least 8 characters" } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub renderers: RendererConfig,

    #[serde(default)]
    pub validations: Vec<ValidationEntry>,
}

/// One declared check
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationEntry {
    pub kind: String,

    /// Record attribute (or field name) to check
    #[serde(default)]
    pub attribute: Option<String>,

    /// Field selector, used when binding to a form
    #[serde(default)]
    pub selector: Option<String>,

    #[serde(default)]
    pub options: RuleOptions,
}

/// Which renderers a bound form uses
#[derive(Debug, Clone, Deserialize)]
pub struct RendererConfig {
    /// Inline message after each failing control
    #[serde(default = "default_true")]
    pub inline: bool,

    #[serde(default = "default_inline_class")]
    pub inline_class: String,

    /// Banner of the error list; no list when unset
    #[serde(default)]
    pub list: Option<String>,

    /// Error class on failing field containers
    #[serde(default)]
    pub container: bool,

    #[serde(default = "default_container_class")]
    pub container_class: String,
}

// Default values
fn default_true() -> bool {
    true
}

fn default_inline_class() -> String {
    "error".to_string()
}

fn default_container_class() -> String {
    "with-error".to_string()
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            inline: true,
            inline_class: default_inline_class(),
            list: None,
            container: false,
            container_class: default_container_class(),
        }
    }
}

impl RendererConfig {
    /// Renderers in display order: inline, list, container
    pub fn build(&self) -> Vec<Box<dyn ErrorRenderer>> {
        let mut renderers: Vec<Box<dyn ErrorRenderer>> = Vec::new();

        if self.inline {
            renderers.push(Box::new(InlineErrorRenderer {
                class: self.inline_class.clone(),
            }));
        }
        if let Some(banner) = &self.list {
            renderers.push(Box::new(ListRenderer::new(banner.as_str())));
        }
        if self.container {
            renderers.push(Box::new(ContainerRenderer {
                class: self.container_class.clone(),
            }));
        }

        renderers
    }
}

impl ValidationConfig {
    /// Load from a `.json` or `.toml` file
    ///
    /// A missing file yields an empty configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read validation config: {:?}", path))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        let config = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        };

        config.with_context(|| format!("Failed to parse validation config: {:?}", path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML validation config")
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid JSON validation config")
    }

    /// Record validator with every entry declared on its `attribute`
    pub fn build_validator(&self) -> Result<Validator, ValidatorError> {
        let mut validator = Validator::new();

        for entry in &self.validations {
            let attribute = entry
                .attribute
                .as_deref()
                .ok_or_else(|| ValidatorError::MissingTarget(entry.kind.clone()))?;
            validator.validate(&entry.kind, attribute, entry.options.clone())?;
        }

        Ok(validator)
    }

    /// Bind a form with the configured renderers and validations
    ///
    /// Entries use their `selector`, or their `attribute` as a field name.
    pub fn bind(&self, form: HtmlForm) -> Result<Form, ValidatorError> {
        let mut bound = Form::new(form, self.renderers.build());

        for entry in &self.validations {
            let target = entry
                .selector
                .as_deref()
                .or(entry.attribute.as_deref())
                .ok_or_else(|| ValidatorError::MissingTarget(entry.kind.clone()))?;
            bound.validate(&entry.kind, target, entry.options.clone())?;
        }

        Ok(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const SIGNUP: &str = r##"
        [renderers]
        list = "Please double check your data before continuing:"
        container = true

        [[validations]]
        kind = "presence"
        attribute = "name"
        selector = "#name"
        options = { message = "Name is required" }

        [[validations]]
        kind = "length"
        attribute = "password"
        options = { min = 8, message = { min = "Password must have at least 8 characters" } }
    "##;

    #[test]
    fn test_from_toml() {
        let config = ValidationConfig::from_toml(SIGNUP).unwrap();

        assert_eq!(config.validations.len(), 2);
        assert_eq!(config.validations[1].options.min, Some(8));
        assert_eq!(config.renderers.build().len(), 3);
    }

    #[test]
    fn test_build_validator() {
        let config = ValidationConfig::from_toml(SIGNUP).unwrap();
        let mut validator = config.build_validator().unwrap();

        assert!(!validator.is_valid(&json!({"name": "John", "password": "1234"})));
        assert_eq!(
            validator.errors().on("password"),
            &["Password must have at least 8 characters".to_string()]
        );
    }

    #[test]
    fn test_entry_without_target() {
        let config = ValidationConfig::from_json(
            r#"{"validations": [{"kind": "presence", "options": {}}]}"#,
        )
        .unwrap();

        assert!(matches!(
            config.build_validator(),
            Err(ValidatorError::MissingTarget(_))
        ));
    }

    #[test]
    fn test_default_renderers() {
        let config = ValidationConfig::default();
        assert_eq!(config.renderers.build().len(), 1);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = std::env::temp_dir().join("rusty-validator-config-invalid.json");
        fs::write(&path, "{\"validations\": [").unwrap();

        let err = ValidationConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse validation config"));

        fs::remove_file(&path).ok();
    }
}
