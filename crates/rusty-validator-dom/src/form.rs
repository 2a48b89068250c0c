// File: src/form.rs
// Purpose: In-memory form document with error decoration

use crate::field::{Field, FieldKind, InlineError};
use crate::selector::Selector;
use serde_json::Value as JsonValue;

/// Class of the error list wrapper element
pub const ERROR_LIST_CLASS: &str = "error-messages";

/// Banner plus list of messages rendered at the top of a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorList {
    /// Id of the container the list is rendered into, if any
    pub container: Option<String>,
    pub class: String,
    pub heading: String,
    pub items: Vec<String>,
}

impl ErrorList {
    pub fn new(heading: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            container: None,
            class: ERROR_LIST_CLASS.to_string(),
            heading: heading.into(),
            items,
        }
    }

    /// Render into the element with the given id (a leading `#` is ignored)
    pub fn in_container(mut self, container: impl Into<String>) -> Self {
        let container = container.into();
        self.container = Some(container.trim_start_matches('#').to_string());
        self
    }
}

/// Form document: ordered fields plus an optional error list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlForm {
    /// Id attribute of the `<form>` element
    pub id: Option<String>,
    fields: Vec<Field>,
    error_list: Option<ErrorList>,
}

impl HtmlForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field append
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Build text fields from an `application/x-www-form-urlencoded` body
    ///
    /// Values are percent-decoded (`+` is a space) and trimmed. Repeated keys
    /// produce repeated fields.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut form = Self::new();

        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key);
            if key.is_empty() {
                continue;
            }
            let value = decode_component(value);
            form.push(Field::text(key).value(value.trim()));
        }

        form
    }

    /// Build fields from a JSON object
    ///
    /// Strings and numbers become text fields, booleans become checkboxes
    /// (checked when `true`), arrays produce one field per element. Nulls
    /// and nested objects are skipped.
    pub fn from_json(json: &JsonValue) -> Self {
        let mut form = Self::new();

        if let JsonValue::Object(map) = json {
            for (key, value) in map {
                form.push_json_value(key, value);
            }
        }

        form
    }

    fn push_json_value(&mut self, key: &str, value: &JsonValue) {
        match value {
            JsonValue::String(s) => self.push(Field::text(key).value(s.trim())),
            JsonValue::Number(n) => self.push(Field::text(key).value(n.to_string())),
            JsonValue::Bool(b) => self.push(Field::checkbox(key, "true").checked(*b)),
            JsonValue::Array(items) => {
                for item in items {
                    self.push_json_value(key, item);
                }
            }
            JsonValue::Null | JsonValue::Object(_) => {}
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [Field] {
        &mut self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// First field with the given name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Every field sharing a name (radio groups, checkbox lists)
    pub fn fields_named<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a Field> + 'n
    where
        'a: 'n,
    {
        self.fields.iter().filter(move |f| f.name == name)
    }

    /// Indices of the fields matched by a selector, in document order
    pub fn select(&self, selector: &Selector) -> Vec<usize> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, field)| selector.matches(field))
            .map(|(index, _)| index)
            .collect()
    }

    /// First field matched by a selector
    pub fn query(&self, selector: &Selector) -> Option<&Field> {
        self.fields.iter().find(|field| selector.matches(field))
    }

    /// Update the value of the first field with the given name
    ///
    /// Returns `false` when no such field exists.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Check a checkbox/radio by name and value
    ///
    /// Checking a radio unchecks the rest of its group.
    pub fn set_checked(&mut self, name: &str, value: &str, checked: bool) -> bool {
        let mut found = false;
        for field in self.fields.iter_mut().filter(|f| f.name == name) {
            if field.value == value {
                field.checked = checked;
                found = true;
            } else if checked && field.kind == FieldKind::Radio {
                field.checked = false;
            }
        }
        found
    }

    pub fn add_container_class(&mut self, name: &str, class: &str) {
        for field in self.fields.iter_mut().filter(|f| f.name == name) {
            field.state.container_classes.insert(class.to_string());
        }
    }

    pub fn remove_container_class(&mut self, name: &str, class: &str) {
        for field in self.fields.iter_mut().filter(|f| f.name == name) {
            field.state.container_classes.remove(class);
        }
    }

    pub fn has_container_class(&self, name: &str, class: &str) -> bool {
        self.field(name)
            .map(|f| f.state.container_classes.contains(class))
            .unwrap_or(false)
    }

    /// Show an inline message after the first field with the given name
    ///
    /// Nothing changes when an inline message with the same class is already
    /// shown, so the first message wins until it is removed. Returns whether
    /// a message was inserted.
    pub fn set_inline_error(&mut self, name: &str, class: &str, message: impl Into<String>) -> bool {
        let Some(field) = self.field_mut(name) else {
            return false;
        };

        if matches!(&field.state.inline_error, Some(existing) if existing.class == class) {
            return false;
        }

        field.state.inline_error = Some(InlineError {
            class: class.to_string(),
            message: message.into(),
        });
        true
    }

    /// Remove an inline message with the given class
    pub fn remove_inline_error(&mut self, name: &str, class: &str) {
        for field in self.fields.iter_mut().filter(|f| f.name == name) {
            if matches!(&field.state.inline_error, Some(existing) if existing.class == class) {
                field.state.inline_error = None;
            }
        }
    }

    pub fn inline_error(&self, name: &str) -> Option<&InlineError> {
        self.field(name).and_then(|f| f.state.inline_error.as_ref())
    }

    /// Replace the error list
    pub fn set_error_list(&mut self, list: ErrorList) {
        self.error_list = Some(list);
    }

    pub fn clear_error_list(&mut self) {
        self.error_list = None;
    }

    pub fn error_list(&self) -> Option<&ErrorList> {
        self.error_list.as_ref()
    }

    /// Leaving a field clears its error class and inline message
    pub fn blur(&mut self, name: &str, container_class: &str, message_class: &str) {
        self.remove_container_class(name, container_class);
        self.remove_inline_error(name, message_class);
    }
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}
