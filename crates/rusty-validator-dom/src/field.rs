// File: src/field.rs
// Purpose: Form controls and their error render state

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Kind of form control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Password,
    Email,
    Hidden,
    Checkbox,
    Radio,
    Select,
    Textarea,
    Other(String),
}

impl FieldKind {
    /// Map an `<input type="...">` attribute to a kind
    pub fn from_type_attr(type_attr: &str) -> Self {
        match type_attr.trim().to_ascii_lowercase().as_str() {
            "" | "text" => FieldKind::Text,
            "password" => FieldKind::Password,
            "email" => FieldKind::Email,
            "hidden" => FieldKind::Hidden,
            "checkbox" => FieldKind::Checkbox,
            "radio" => FieldKind::Radio,
            "select" => FieldKind::Select,
            "textarea" => FieldKind::Textarea,
            other => FieldKind::Other(other.to_string()),
        }
    }

    /// Value of the `type` attribute for `<input>` kinds
    pub fn type_attr(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Password => "password",
            FieldKind::Email => "email",
            FieldKind::Hidden => "hidden",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Select => "select",
            FieldKind::Textarea => "textarea",
            FieldKind::Other(other) => other,
        }
    }

    /// Checkbox and radio controls carry a value only when checked
    pub fn is_checkable(&self) -> bool {
        matches!(self, FieldKind::Checkbox | FieldKind::Radio)
    }
}

/// Option of a `<select>` control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Inline error message shown right after a control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineError {
    /// CSS class of the message element
    pub class: String,
    pub message: String,
}

/// Error decoration of a single field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Classes on the field's container element
    pub container_classes: BTreeSet<String>,
    pub inline_error: Option<InlineError>,
}

impl FieldState {
    pub fn is_clean(&self) -> bool {
        self.container_classes.is_empty() && self.inline_error.is_none()
    }
}

/// A single form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub id: Option<String>,
    pub kind: FieldKind,
    pub value: String,
    /// Only meaningful for checkbox and radio controls
    pub checked: bool,
    pub label: Option<String>,
    /// Only meaningful for select controls
    pub options: Vec<SelectOption>,
    pub state: FieldState,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            id: None,
            kind,
            value: String::new(),
            checked: false,
            label: None,
            options: Vec::new(),
            state: FieldState::default(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn password(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Password)
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn textarea(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Textarea)
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox).value(value)
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Radio).value(value)
    }

    pub fn select(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        let mut field = Self::new(name, FieldKind::Select);
        field.options = options;
        field
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Value the control would submit, if any
    ///
    /// Unchecked checkboxes and radios submit nothing.
    pub fn submitted_value(&self) -> Option<&str> {
        if self.kind.is_checkable() && !self.checked {
            None
        } else {
            Some(&self.value)
        }
    }
}
