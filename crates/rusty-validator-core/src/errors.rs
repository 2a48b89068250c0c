//! Ordered error collection
//!
//! Fields keep the order in which they first received a message, so the
//! "last message per field" summary follows the order the fields were checked.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Error messages grouped by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    entries: Vec<(String, Vec<String>)>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        let field = field.into();
        let message = message.into();

        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.entries.push((field, vec![message])),
        }
    }

    /// Messages for a field (empty when the field has none)
    pub fn on(&self, field: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a field has at least one message
    pub fn has(&self, field: &str) -> bool {
        !self.on(field).is_empty()
    }

    /// Iterate fields and their messages in insertion order
    pub fn all(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Field names in insertion order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Every message, field by field
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    /// Last message recorded for each field
    pub fn last_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|(_, messages)| messages.last().cloned())
            .collect()
    }

    /// Drop all messages for a field
    pub fn remove(&mut self, field: &str) -> Option<Vec<String>> {
        let index = self.entries.iter().position(|(name, _)| name == field)?;
        Some(self.entries.remove(index).1)
    }

    /// Set a field's messages, keeping its position
    ///
    /// An empty list drops the field; an unknown field is appended.
    pub fn replace(&mut self, field: &str, messages: Vec<String>) {
        let index = self.entries.iter().position(|(name, _)| name == field);

        match (index, messages.is_empty()) {
            (Some(index), true) => {
                self.entries.remove(index);
            }
            (Some(index), false) => self.entries[index].1 = messages,
            (None, false) => self.entries.push((field.to_string(), messages)),
            (None, true) => {}
        }
    }

    /// Drop every message
    pub fn clean(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }

    /// Number of fields with messages
    pub fn field_count(&self) -> usize {
        self.entries.len()
    }

    /// Convert into a plain field → messages map
    pub fn into_map(self) -> HashMap<String, Vec<String>> {
        self.entries.into_iter().collect()
    }

    /// `Ok(())` when empty, the collection itself otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_is_empty() {
        let errors = Errors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_all_messages() {
        let mut errors = Errors::new();
        errors.add("name", "is required");
        errors.add("email", "is invalid");
        errors.add("email", "is already taken");

        let all: Vec<_> = errors.all().collect();
        assert_eq!(all[0], ("name", &["is required".to_string()][..]));
        assert_eq!(
            errors.on("email"),
            &["is invalid".to_string(), "is already taken".to_string()]
        );
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.field_count(), 2);
    }

    #[test]
    fn test_clean() {
        let mut errors = Errors::new();
        errors.add("name", "is required");
        errors.clean();

        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_missing_field_is_empty_slice() {
        let errors = Errors::new();
        assert!(errors.on("name").is_empty());
        assert!(!errors.has("name"));
    }

    #[test]
    fn test_last_messages_keep_field_order() {
        let mut errors = Errors::new();
        errors.add("password", "too short");
        errors.add("email", "is required");
        errors.add("email", "is invalid");

        assert_eq!(errors.last_messages(), vec!["too short", "is invalid"]);
    }

    #[test]
    fn test_remove_field() {
        let mut errors = Errors::new();
        errors.add("name", "is required");
        errors.add("email", "is invalid");

        assert_eq!(errors.remove("name"), Some(vec!["is required".to_string()]));
        assert_eq!(errors.remove("name"), None);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut errors = Errors::new();
        errors.add("name", "is required");
        errors.add("email", "is required");

        errors.replace("name", vec!["is too short".to_string()]);
        assert_eq!(errors.last_messages(), vec!["is too short", "is required"]);

        errors.replace("name", Vec::new());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email"]);

        errors.replace("phone", vec!["is invalid".to_string()]);
        errors.replace("fax", Vec::new());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["email", "phone"]);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut errors = Errors::new();
        errors.add("name", "is required");
        errors.add("email", "is invalid");

        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"name":["is required"],"email":["is invalid"]}"#);
    }

    #[test]
    fn test_into_result() {
        assert!(Errors::new().into_result().is_ok());

        let mut errors = Errors::new();
        errors.add("name", "is required");
        let err = errors.into_result().unwrap_err();
        assert_eq!(err.into_map()["name"], vec!["is required"]);
    }
}
