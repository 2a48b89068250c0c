// File: src/renderer.rs
// Purpose: Strategies that show record errors on a form document

use rusty_validator_core::Errors;
use rusty_validator_dom::{ErrorList, HtmlForm};
use std::fmt::Debug;

/// Shows errors on the form and removes them again
pub trait ErrorRenderer: Debug + Send + Sync {
    fn render(&self, form: &mut HtmlForm, errors: &Errors);

    fn clean(&self, form: &mut HtmlForm);
}

// Distinct field names, in document order
fn field_names(form: &HtmlForm) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for field in form.fields() {
        if !names.contains(&field.name) {
            names.push(field.name.clone());
        }
    }
    names
}

/// Message element right after the control of each failing field
#[derive(Debug, Clone)]
pub struct InlineErrorRenderer {
    pub class: String,
}

impl Default for InlineErrorRenderer {
    fn default() -> Self {
        Self {
            class: "error".to_string(),
        }
    }
}

impl ErrorRenderer for InlineErrorRenderer {
    /// Only the first message of a field is shown
    fn render(&self, form: &mut HtmlForm, errors: &Errors) {
        for (attribute, messages) in errors.all() {
            if let Some(first) = messages.first() {
                form.set_inline_error(attribute, &self.class, first.as_str());
            }
        }
    }

    fn clean(&self, form: &mut HtmlForm) {
        for name in field_names(form) {
            form.remove_inline_error(&name, &self.class);
        }
    }
}

/// Banner plus a list of every message at the top of the form
#[derive(Debug, Clone)]
pub struct ListRenderer {
    pub banner: String,
}

impl ListRenderer {
    pub fn new(banner: impl Into<String>) -> Self {
        Self {
            banner: banner.into(),
        }
    }
}

impl ErrorRenderer for ListRenderer {
    fn render(&self, form: &mut HtmlForm, errors: &Errors) {
        let items = errors.messages().map(str::to_string).collect();
        form.set_error_list(ErrorList::new(self.banner.as_str(), items));
    }

    fn clean(&self, form: &mut HtmlForm) {
        form.clear_error_list();
    }
}

/// Error class on the container of each failing field
#[derive(Debug, Clone)]
pub struct ContainerRenderer {
    pub class: String,
}

impl Default for ContainerRenderer {
    fn default() -> Self {
        Self {
            class: "with-error".to_string(),
        }
    }
}

impl ErrorRenderer for ContainerRenderer {
    fn render(&self, form: &mut HtmlForm, errors: &Errors) {
        for attribute in errors.fields() {
            form.add_container_class(attribute, &self.class);
        }
    }

    fn clean(&self, form: &mut HtmlForm) {
        for name in field_names(form) {
            form.remove_container_class(&name, &self.class);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rusty_validator_dom::Field;

    fn errors() -> Errors {
        let mut errors = Errors::new();
        errors.add("name", "Name is required");
        errors.add("name", "Name is too short");
        errors.add("email", "E-mail is invalid");
        errors
    }

    fn form() -> HtmlForm {
        HtmlForm::new()
            .with_field(Field::text("name"))
            .with_field(Field::email("email"))
    }

    #[test]
    fn test_inline_renderer_shows_first_message() {
        let mut form = form();
        InlineErrorRenderer::default().render(&mut form, &errors());

        assert_eq!(form.inline_error("name").unwrap().message, "Name is required");
        assert_eq!(form.inline_error("email").unwrap().class, "error");

        InlineErrorRenderer::default().clean(&mut form);
        assert!(form.inline_error("name").is_none());
        assert!(form.inline_error("email").is_none());
    }

    #[test]
    fn test_list_renderer_lists_every_message() {
        let mut form = form();
        ListRenderer::new("Please check your data before continuing:").render(&mut form, &errors());

        let list = form.error_list().unwrap();
        assert_eq!(list.heading, "Please check your data before continuing:");
        assert_eq!(
            list.items,
            vec!["Name is required", "Name is too short", "E-mail is invalid"]
        );

        ListRenderer::new("").clean(&mut form);
        assert!(form.error_list().is_none());
    }

    #[test]
    fn test_container_renderer() {
        let mut form = form();
        let renderer = ContainerRenderer::default();

        renderer.render(&mut form, &errors());
        assert!(form.has_container_class("name", "with-error"));
        assert!(form.has_container_class("email", "with-error"));

        renderer.clean(&mut form);
        assert!(form.field("name").unwrap().state.is_clean());
    }
}
