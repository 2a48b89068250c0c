// File: src/ruleset.rs
// Purpose: Declarative rules and per-field custom messages

use crate::error::RuleError;
use crate::param::{FieldRules, RuleParam};
use rusty_validator_dom::Selector;
use serde::Deserialize;
use std::collections::HashMap;

/// Rules keyed by field name, plus custom messages keyed by field then rule
///
/// ```toml
/// [rules.email]
/// required = true
/// email = true
///
/// [messages.email]
/// email = "Informe um e-mail válido"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub rules: HashMap<String, FieldRules>,

    #[serde(default)]
    pub messages: HashMap<String, HashMap<String, String>>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, RuleError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_toml(toml: &str) -> Result<Self, RuleError> {
        Ok(toml::from_str(toml)?)
    }

    /// Builder-style rule declaration
    pub fn rule(
        mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        param: impl Into<RuleParam>,
    ) -> Self {
        self.add_rule(field, rule, param);
        self
    }

    /// Builder-style custom message
    pub fn message(
        mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.messages
            .entry(field.into())
            .or_default()
            .insert(rule.into(), message.into());
        self
    }

    pub fn add_rule(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<String>,
        param: impl Into<RuleParam>,
    ) {
        self.rules.entry(field.into()).or_default().set(rule, param);
    }

    pub fn field_rules(&self, field: &str) -> Option<&FieldRules> {
        self.rules.get(field)
    }

    /// Custom message for a field's rule, ignoring empty strings
    pub fn custom_message(&self, field: &str, rule: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|messages| messages.get(rule))
            .map(String::as_str)
            .filter(|message| !message.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.values().all(FieldRules::is_empty)
    }

    /// Check that built-in rule parameters are usable
    ///
    /// `min`/`max` need a character count, `equalTo` needs a selector and a
    /// textual `required` parameter must be a selector.
    pub fn check_params(&self) -> Result<(), RuleError> {
        for (field, rules) in &self.rules {
            for (rule, param) in rules.normalized() {
                match rule {
                    "min" | "max" => {
                        if param.as_usize().is_none() {
                            return Err(RuleError::InvalidLength {
                                field: field.clone(),
                                rule: rule.to_string(),
                                param: param.to_string(),
                            });
                        }
                    }
                    "equalTo" => {
                        let selector = param.as_text().ok_or_else(|| RuleError::MissingSelector {
                            field: field.clone(),
                            rule: rule.to_string(),
                        })?;
                        parse_selector(field, rule, selector)?;
                    }
                    "required" => {
                        if let Some(selector) = param.as_text() {
                            parse_selector(field, rule, selector)?;
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

fn parse_selector(field: &str, rule: &str, selector: &str) -> Result<Selector, RuleError> {
    Selector::parse(selector).map_err(|source| RuleError::Selector {
        field: field.to_string(),
        rule: rule.to_string(),
        source,
    })
}
