// File: src/validator.rs
// Purpose: Rule-set form validator: message resolution, checks, submission

use crate::error::RuleError;
use crate::methods::{builtin_methods, Method, RuleInput};
use crate::options::ValidatorOptions;
use crate::param::RuleParam;
use crate::ruleset::RuleSet;
use rusty_validator_core::{replace_message_params, Errors};
use rusty_validator_dom::{ErrorList, HtmlForm};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form may be sent
    Submit,
    /// Submission was stopped; last message of each failing field
    Blocked { messages: Vec<String> },
}

impl SubmitOutcome {
    pub fn is_submit(&self) -> bool {
        matches!(self, SubmitOutcome::Submit)
    }
}

/// Validates an [`HtmlForm`] against a declarative [`RuleSet`]
///
/// ```rust,ignore
/// let form = HtmlForm::new()
///     .with_field(Field::text("name"))
///     .with_field(Field::email("email"));
///
/// let rules = RuleSet::new()
///     .rule("name", "required", true)
///     .rule("email", "required", true)
///     .rule("email", "email", true)
///     .message("email", "email", "Informe um e-mail válido");
///
/// let mut validator = FormValidator::new(form, rules, ValidatorOptions::default())?;
/// if !validator.validate() {
///     println!("{:?}", validator.errors_messages());
/// }
/// ```
pub struct FormValidator {
    form: HtmlForm,
    rules: RuleSet,
    options: ValidatorOptions,
    methods: HashMap<String, Method>,
    default_messages: HashMap<String, String>,
    /// Resolved message per field and rule, parameters substituted
    messages: HashMap<String, HashMap<String, String>>,
    errors: Errors,
    valid: bool,
}

impl std::fmt::Debug for FormValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormValidator")
            .field("fields", &self.form.len())
            .field("valid", &self.valid)
            .field("errors", &self.errors)
            .finish()
    }
}

impl FormValidator {
    /// Create a validator; rule parameters are checked up front
    pub fn new(form: HtmlForm, rules: RuleSet, options: ValidatorOptions) -> Result<Self, RuleError> {
        rules.check_params()?;

        let nothing_to_validate = rules.is_empty();
        if nothing_to_validate {
            info!("Nothing to validate.");
        }

        let mut validator = Self {
            default_messages: options.merged_default_messages(),
            form,
            rules,
            options,
            methods: builtin_methods(),
            messages: HashMap::new(),
            errors: Errors::new(),
            valid: nothing_to_validate,
        };
        validator.messages = validator.resolve_messages();

        Ok(validator)
    }

    /// Validator with default options
    pub fn with_rules(form: HtmlForm, rules: RuleSet) -> Result<Self, RuleError> {
        Self::new(form, rules, ValidatorOptions::default())
    }

    /// Resolve the message of every active rule in the rule set
    fn resolve_messages(&self) -> HashMap<String, HashMap<String, String>> {
        self.rules
            .rules
            .iter()
            .map(|(name, field_rules)| {
                let field_messages = field_rules
                    .normalized()
                    .map(|(rule, param)| (rule.to_string(), self.resolve_message(name, rule, param)))
                    .collect();
                (name.clone(), field_messages)
            })
            .collect()
    }

    /// Custom per-field message, else the rule's default message, else the
    /// generic fallback; `{0}` is replaced with the rule parameter.
    fn resolve_message(&self, field: &str, rule: &str, param: &RuleParam) -> String {
        let template = self
            .rules
            .custom_message(field, rule)
            .or_else(|| self.default_messages.get(rule).map(String::as_str))
            .unwrap_or(self.options.default_error_message.as_str());

        replace_message_params(template, param)
    }

    /// Register a custom rule method
    ///
    /// `message` becomes the rule's default message; without one the generic
    /// fallback is used.
    pub fn add_method<F>(&mut self, name: impl Into<String>, method: F, message: Option<&str>)
    where
        F: Fn(&RuleInput<'_>) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or(self.options.default_error_message.as_str())
            .to_string();

        debug!(method = %name, "registering rule method");
        self.methods.insert(name.clone(), Arc::new(method));
        self.default_messages.insert(name, message);
        self.messages = self.resolve_messages();
    }

    /// Check a single field by name, updating its error decoration
    ///
    /// Returns `true` when the field passes (or is not part of the form).
    pub fn check(&mut self, name: &str) -> bool {
        let failures = match self.form.field(name) {
            Some(field) => self.failures_for(field),
            None => {
                debug!(field = %name, "field not in form, nothing to check");
                return true;
            }
        };

        let container_class = self.options.container_field_error_class.clone();
        let message_class = self.options.message_error_class.clone();

        self.form.remove_inline_error(name, &message_class);

        let Some(first) = failures.first() else {
            self.errors.replace(name, failures);
            self.form.remove_container_class(name, &container_class);
            debug!(field = %name, "field is valid");
            return true;
        };

        self.form.set_inline_error(name, &message_class, first.clone());
        self.form.add_container_class(name, &container_class);
        self.errors.replace(name, failures);

        debug!(field = %name, errors = self.errors.on(name).len(), "field is invalid");
        false
    }

    fn failures_for(&self, field: &rusty_validator_dom::Field) -> Vec<String> {
        let Some(field_rules) = self.rules.field_rules(&field.name) else {
            return Vec::new();
        };

        let mut failures = Vec::new();

        for (rule, param) in field_rules.normalized() {
            let Some(method) = self.methods.get(rule) else {
                warn!(field = %field.name, rule, "no method registered for rule, skipping");
                continue;
            };

            let input = RuleInput {
                value: &field.value,
                field,
                param,
                form: &self.form,
                rules: &self.rules,
            };

            if !method(&input) {
                let message = self
                    .messages
                    .get(&field.name)
                    .and_then(|m| m.get(rule))
                    .cloned()
                    .unwrap_or_else(|| self.resolve_message(&field.name, rule, param));
                failures.push(message);
            }
        }

        failures
    }

    /// Check every field and store the form validity
    pub fn validate(&mut self) -> bool {
        let mut valid = true;

        for name in self.field_names() {
            if !self.check(&name) {
                valid = false;
            }
        }

        self.valid = valid;
        debug!(valid, errors = self.errors.len(), "form validated");
        valid
    }

    /// Validity stored by the last [`validate`](Self::validate)
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Messages recorded for a field by the last check
    pub fn errors_messages_for(&self, name: &str) -> &[String] {
        self.errors.on(name)
    }

    /// Last message of every failing field, in form order
    pub fn errors_messages(&self) -> Vec<String> {
        self.errors.last_messages()
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Resolved message of a field's rule
    pub fn message(&self, field: &str, rule: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|m| m.get(rule))
            .map(String::as_str)
    }

    /// Validate before sending the form
    ///
    /// When blocked and an error list container is configured, the list of
    /// messages is rendered into it.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.validate() {
            self.form.clear_error_list();
            return SubmitOutcome::Submit;
        }

        let messages = self.errors_messages();

        if let Some(container) = &self.options.error_list_container {
            let list = ErrorList::new(&self.options.default_error_list_message, messages.clone())
                .in_container(container.as_str());
            self.form.set_error_list(list);
        }

        SubmitOutcome::Blocked { messages }
    }

    /// Leaving an invalid field removes its error class and message
    pub fn blur(&mut self, name: &str) {
        let container_class = &self.options.container_field_error_class;
        if self.form.has_container_class(name, container_class) {
            self.form
                .blur(name, container_class, &self.options.message_error_class);
        }
    }

    pub fn form(&self) -> &HtmlForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut HtmlForm {
        &mut self.form
    }

    pub fn into_form(self) -> HtmlForm {
        self.form
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    // Distinct field names in document order
    fn field_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for field in self.form.fields() {
            if !names.contains(&field.name) {
                names.push(field.name.clone());
            }
        }
        names
    }
}
