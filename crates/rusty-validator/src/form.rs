// File: src/form.rs
// Purpose: Record validator bound to a form document, with error renderers

use crate::error::ValidatorError;
use crate::renderer::{ErrorRenderer, InlineErrorRenderer};
use crate::validator::Validator;
use crate::validators::RuleOptions;
use rusty_validator_core::Errors;
use rusty_validator_dom::{HtmlForm, Selector};
use tracing::{debug, warn};

/// Validates an [`HtmlForm`] as a record and shows errors through renderers
///
/// ```rust,ignore
/// let renderers: Vec<Box<dyn ErrorRenderer>> = vec![
///     Box::new(InlineErrorRenderer::default()),
///     Box::new(ListRenderer::new("Please double check your data before continuing:")),
///     Box::new(ContainerRenderer::default()),
/// ];
///
/// let mut form = Form::new(html_form, renderers);
/// form.validate("presence", "#name", RuleOptions::new().message("Name is required"))?;
/// form.validate("confirmation", "#password", RuleOptions::new())?;
///
/// if form.is_valid() {
///     // send it
/// }
/// ```
#[derive(Debug)]
pub struct Form {
    form: HtmlForm,
    renderers: Vec<Box<dyn ErrorRenderer>>,
    validator: Validator,
}

impl Form {
    /// Bind a form; without renderers errors are shown inline
    pub fn new(form: HtmlForm, renderers: Vec<Box<dyn ErrorRenderer>>) -> Self {
        let renderers = if renderers.is_empty() {
            vec![Box::new(InlineErrorRenderer::default()) as Box<dyn ErrorRenderer>]
        } else {
            renderers
        };

        Self {
            form,
            renderers,
            validator: Validator::new(),
        }
    }

    /// Declare a check on every field matched by `selector`
    ///
    /// Each matched field is checked by name, once per name.
    pub fn validate(
        &mut self,
        kind: &str,
        selector: &str,
        options: RuleOptions,
    ) -> Result<&mut Self, ValidatorError> {
        let parsed = Selector::parse(selector)?;

        let mut names: Vec<String> = Vec::new();
        for index in self.form.select(&parsed) {
            let name = &self.form.fields()[index].name;
            if !names.contains(name) {
                names.push(name.clone());
            }
        }

        if names.is_empty() {
            warn!(kind, selector, "selector matched no field");
        }

        for name in &names {
            self.validator.validate(kind, name, options.clone())?;
        }

        Ok(self)
    }

    /// Underlying validator, for registering custom kinds
    pub fn validator_mut(&mut self) -> &mut Validator {
        &mut self.validator
    }

    /// Clean every renderer, validate the document and render the errors
    pub fn is_valid(&mut self) -> bool {
        for renderer in &self.renderers {
            renderer.clean(&mut self.form);
        }

        let valid = self.validator.is_valid(&self.form);

        if !valid {
            for renderer in &self.renderers {
                renderer.render(&mut self.form, self.validator.errors());
            }
        }

        debug!(valid, errors = self.validator.errors().len(), "form validated");
        valid
    }

    /// Validate before sending: the form when valid, its errors otherwise
    pub fn submit(&mut self) -> Result<&HtmlForm, &Errors> {
        if self.is_valid() {
            Ok(&self.form)
        } else {
            Err(self.validator.errors())
        }
    }

    pub fn errors(&self) -> &Errors {
        self.validator.errors()
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
}
