// File: src/record.rs
// Purpose: Attribute lookup over anything that can be validated

use rusty_validator_dom::HtmlForm;
use serde_json::{Map, Value as JsonValue};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// A validated object: attributes looked up by name
///
/// `None` means the attribute is missing (absent, `null`, an unchecked
/// checkbox).
pub trait Record {
    fn get(&self, attribute: &str) -> Option<Cow<'_, str>>;
}

impl Record for HashMap<String, String> {
    fn get(&self, attribute: &str) -> Option<Cow<'_, str>> {
        HashMap::get(self, attribute).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Record for BTreeMap<String, String> {
    fn get(&self, attribute: &str) -> Option<Cow<'_, str>> {
        BTreeMap::get(self, attribute).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Record for Map<String, JsonValue> {
    fn get(&self, attribute: &str) -> Option<Cow<'_, str>> {
        Map::get(self, attribute).and_then(json_to_str)
    }
}

impl Record for JsonValue {
    fn get(&self, attribute: &str) -> Option<Cow<'_, str>> {
        match self {
            JsonValue::Object(map) => Record::get(map, attribute),
            _ => None,
        }
    }
}

impl Record for HtmlForm {
    /// Submitted value of the named field; for radio groups and checkbox
    /// lists the first checked one
    fn get(&self, attribute: &str) -> Option<Cow<'_, str>> {
        self.fields_named(attribute)
            .find_map(|field| field.submitted_value())
            .map(Cow::Borrowed)
    }
}

fn json_to_str(value: &JsonValue) -> Option<Cow<'_, str>> {
    match value {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(Cow::Borrowed(s.as_str())),
        JsonValue::Number(n) => Some(Cow::Owned(n.to_string())),
        JsonValue::Bool(b) => Some(Cow::Owned(b.to_string())),
        other => Some(Cow::Owned(other.to_string())),
    }
}
