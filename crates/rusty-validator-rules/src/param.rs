// File: src/param.rs
// Purpose: Rule parameters and the ordered rule list of a field

use rusty_validator_core::join_params;
use rusty_validator_dom::Field;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Custom predicate usable as a `required` parameter
pub type Predicate = Arc<dyn Fn(&Field, &str) -> bool + Send + Sync>;

/// Parameter attached to a rule (`required = true`, `min = 8`, ...)
#[derive(Clone)]
pub enum RuleParam {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<RuleParam>),
    Predicate(Predicate),
}

impl RuleParam {
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&Field, &str) -> bool + Send + Sync + 'static,
    {
        RuleParam::Predicate(Arc::new(f))
    }

    /// Everything except `false` switches a rule on
    pub fn is_truthy(&self) -> bool {
        !matches!(self, RuleParam::Bool(false))
    }

    /// Parameter as a character count, for length rules
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            RuleParam::Number(n) if *n >= 0.0 && n.fract() == 0.0 => Some(*n as usize),
            RuleParam::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RuleParam::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for RuleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleParam::Bool(b) => write!(f, "{}", b),
            // f64 Display never uses exponents and drops a zero fraction
            RuleParam::Number(n) => write!(f, "{}", n),
            RuleParam::Text(s) => f.write_str(s),
            RuleParam::List(items) => f.write_str(&join_params(items)),
            RuleParam::Predicate(_) => Ok(()),
        }
    }
}

impl fmt::Debug for RuleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleParam::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            RuleParam::Number(n) => f.debug_tuple("Number").field(n).finish(),
            RuleParam::Text(s) => f.debug_tuple("Text").field(s).finish(),
            RuleParam::List(items) => f.debug_tuple("List").field(items).finish(),
            RuleParam::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<bool> for RuleParam {
    fn from(b: bool) -> Self {
        RuleParam::Bool(b)
    }
}

impl From<f64> for RuleParam {
    fn from(n: f64) -> Self {
        RuleParam::Number(n)
    }
}

impl From<i32> for RuleParam {
    fn from(n: i32) -> Self {
        RuleParam::Number(n as f64)
    }
}

impl From<usize> for RuleParam {
    fn from(n: usize) -> Self {
        RuleParam::Number(n as f64)
    }
}

impl From<&str> for RuleParam {
    fn from(s: &str) -> Self {
        RuleParam::Text(s.to_string())
    }
}

impl From<String> for RuleParam {
    fn from(s: String) -> Self {
        RuleParam::Text(s)
    }
}

impl From<Vec<RuleParam>> for RuleParam {
    fn from(items: Vec<RuleParam>) -> Self {
        RuleParam::List(items)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawParam {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<RawParam>),
}

impl From<RawParam> for RuleParam {
    fn from(raw: RawParam) -> Self {
        match raw {
            RawParam::Bool(b) => RuleParam::Bool(b),
            RawParam::Number(n) => RuleParam::Number(n),
            RawParam::Text(s) => RuleParam::Text(s),
            RawParam::List(items) => RuleParam::List(items.into_iter().map(Into::into).collect()),
        }
    }
}

impl<'de> Deserialize<'de> for RuleParam {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawParam::deserialize(deserializer).map(Into::into)
    }
}

/// Rules of one field, in declaration order
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    entries: Vec<(String, RuleParam)>,
}

impl FieldRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing an existing rule with the same name
    pub fn set(&mut self, rule: impl Into<String>, param: impl Into<RuleParam>) {
        let rule = rule.into();
        let param = param.into();
        match self.entries.iter_mut().find(|(name, _)| *name == rule) {
            Some((_, existing)) => *existing = param,
            None => self.entries.push((rule, param)),
        }
    }

    pub fn get(&self, rule: &str) -> Option<&RuleParam> {
        self.entries
            .iter()
            .find(|(name, _)| name == rule)
            .map(|(_, param)| param)
    }

    /// All declared rules, including switched-off ones
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleParam)> {
        self.entries.iter().map(|(name, param)| (name.as_str(), param))
    }

    /// Declared rules without the `rule = false` entries
    pub fn normalized(&self) -> impl Iterator<Item = (&str, &RuleParam)> {
        self.iter().filter(|(_, param)| param.is_truthy())
    }

    /// `required = true` is declared
    pub fn is_required(&self) -> bool {
        matches!(self.get("required"), Some(RuleParam::Bool(true)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K, P> FromIterator<(K, P)> for FieldRules
where
    K: Into<String>,
    P: Into<RuleParam>,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut rules = FieldRules::new();
        for (rule, param) in iter {
            rules.set(rule, param);
        }
        rules
    }
}

impl<'de> Deserialize<'de> for FieldRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RulesVisitor;

        impl<'de> Visitor<'de> for RulesVisitor {
            type Value = FieldRules;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of rule names to parameters")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FieldRules, A::Error> {
                let mut rules = FieldRules::new();
                while let Some((rule, param)) = map.next_entry::<String, RuleParam>()? {
                    rules.set(rule, param);
                }
                Ok(rules)
            }
        }

        deserializer.deserialize_map(RulesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(RuleParam::Bool(true), "true")]
    #[case(RuleParam::Number(8.0), "8")]
    #[case(RuleParam::Number(2.5), "2.5")]
    #[case(RuleParam::Number(1e20), "100000000000000000000")]
    #[case(RuleParam::Text("input[name='password']".into()), "input[name='password']")]
    #[case(RuleParam::List(vec![2.into(), 4.into()]), "24")]
    fn test_display(#[case] param: RuleParam, #[case] expected: &str) {
        assert_eq!(param.to_string(), expected);
    }

    #[rstest]
    #[case(RuleParam::Number(8.0), Some(8))]
    #[case(RuleParam::Text(" 8 ".into()), Some(8))]
    #[case(RuleParam::Number(-1.0), None)]
    #[case(RuleParam::Number(2.5), None)]
    #[case(RuleParam::Bool(true), None)]
    fn test_as_usize(#[case] param: RuleParam, #[case] expected: Option<usize>) {
        assert_eq!(param.as_usize(), expected);
    }

    #[test]
    fn test_truthiness() {
        assert!(RuleParam::Bool(true).is_truthy());
        assert!(RuleParam::Number(0.0).is_truthy());
        assert!(!RuleParam::Bool(false).is_truthy());
    }

    #[test]
    fn test_normalized_drops_false_rules() {
        let rules: FieldRules = [("required", RuleParam::Bool(false)), ("email", true.into())]
            .into_iter()
            .collect();

        let names: Vec<_> = rules.normalized().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["email"]);
        assert_eq!(rules.len(), 2);
        assert!(!rules.is_required());
    }

    #[test]
    fn test_set_replaces_existing_rule() {
        let mut rules = FieldRules::new();
        rules.set("min", 4);
        rules.set("required", true);
        rules.set("min", 8);

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.get("min").and_then(RuleParam::as_usize), Some(8));
    }

    #[test]
    fn test_deserialize_keeps_declaration_order() {
        let rules: FieldRules =
            serde_json::from_str(r##"{"required": true, "min": 8, "equalTo": "#password", "max": [1, 6]}"##)
                .unwrap();

        let names: Vec<_> = rules.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["required", "min", "equalTo", "max"]);
        assert!(rules.is_required());
        assert_eq!(rules.get("max").unwrap().to_string(), "16");
    }
}
