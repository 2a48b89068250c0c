// File: src/methods.rs
// Purpose: Built-in rule methods and the input they receive

use crate::param::RuleParam;
use crate::ruleset::RuleSet;
use rusty_validator_core::{is_valid_email, validate_max_length, validate_min_length};
use rusty_validator_dom::{Field, FieldKind, HtmlForm, Selector};
use std::collections::HashMap;
use std::sync::Arc;

/// A rule predicate: `true` when the field passes
pub type Method = Arc<dyn Fn(&RuleInput<'_>) -> bool + Send + Sync>;

/// Everything a rule method can look at
pub struct RuleInput<'a> {
    /// Current value of the field being checked
    pub value: &'a str,
    pub field: &'a Field,
    pub param: &'a RuleParam,
    pub form: &'a HtmlForm,
    pub rules: &'a RuleSet,
}

impl<'a> RuleInput<'a> {
    /// An empty field that is not `required = true` passes value rules
    pub fn optional(&self) -> bool {
        is_optional(self.rules, self.field)
    }

    /// Find another field of the form by selector
    pub fn lookup(&self, selector: &str) -> Option<&'a Field> {
        let selector = Selector::parse(selector).ok()?;
        self.form.query(&selector)
    }
}

/// Whether a field may be left empty
pub fn is_optional(rules: &RuleSet, field: &Field) -> bool {
    let required = rules
        .field_rules(&field.name)
        .map(|r| r.is_required())
        .unwrap_or(false);

    !required && field.value.is_empty()
}

/// The methods every validator starts with
pub fn builtin_methods() -> HashMap<String, Method> {
    let mut methods: HashMap<String, Method> = HashMap::new();
    methods.insert("required".to_string(), Arc::new(required));
    methods.insert("email".to_string(), Arc::new(email));
    methods.insert("min".to_string(), Arc::new(min));
    methods.insert("max".to_string(), Arc::new(max));
    methods.insert("equalTo".to_string(), Arc::new(equal_to));
    methods
}

fn required(input: &RuleInput<'_>) -> bool {
    match input.field.kind {
        FieldKind::Select => !input.value.is_empty(),
        FieldKind::Checkbox | FieldKind::Radio => input
            .form
            .fields_named(&input.field.name)
            .any(|f| f.checked),
        _ => match input.param {
            RuleParam::Predicate(predicate) => predicate(input.field, input.value),
            // Required only while the referenced field has a value
            RuleParam::Text(selector) => match input.lookup(selector) {
                Some(dependency) if !dependency.value.is_empty() => !input.value.is_empty(),
                _ => true,
            },
            _ => !input.value.is_empty(),
        },
    }
}

fn email(input: &RuleInput<'_>) -> bool {
    input.optional() || is_valid_email(input.value)
}

fn min(input: &RuleInput<'_>) -> bool {
    input.optional()
        || input
            .param
            .as_usize()
            .map(|min| validate_min_length(input.value, min))
            .unwrap_or(false)
}

fn max(input: &RuleInput<'_>) -> bool {
    input.optional()
        || input
            .param
            .as_usize()
            .map(|max| validate_max_length(input.value, max))
            .unwrap_or(false)
}

fn equal_to(input: &RuleInput<'_>) -> bool {
    let Some(other) = input.param.as_text().and_then(|s| input.lookup(s)) else {
        tracing::warn!(
            field = %input.field.name,
            selector = %input.param,
            "equalTo target not found in form"
        );
        return false;
    };

    is_optional(input.rules, other) || (input.value == other.value && !input.value.is_empty())
}
