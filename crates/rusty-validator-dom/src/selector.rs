// File: src/selector.rs
// Purpose: Minimal CSS-like selectors for picking form fields

use crate::field::{Field, FieldKind};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while parsing a selector
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,

    #[error("unsupported pseudo-class ':{0}'")]
    UnknownPseudo(String),

    #[error("malformed attribute selector '{0}'")]
    MalformedAttribute(String),

    #[error("unsupported selector '{0}'")]
    Unsupported(String),
}

/// Element tag a selector may be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Input,
    Select,
    Textarea,
}

impl Tag {
    fn parse(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "input" => Some(Tag::Input),
            "select" => Some(Tag::Select),
            "textarea" => Some(Tag::Textarea),
            _ => None,
        }
    }

    fn matches(&self, kind: &FieldKind) -> bool {
        match self {
            Tag::Select => *kind == FieldKind::Select,
            Tag::Textarea => *kind == FieldKind::Textarea,
            Tag::Input => !matches!(kind, FieldKind::Select | FieldKind::Textarea),
        }
    }
}

/// Parsed field selector
///
/// Supported forms: `#id`, `:text` style pseudo-classes, `input`/`select`/
/// `textarea`, `[name='x']` optionally prefixed by a tag, a bare field
/// name, and comma separated lists of those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Kind(FieldKind),
    Tag(Tag),
    Name { tag: Option<Tag>, name: String },
    Any(Vec<Selector>),
}

impl Selector {
    /// Parse a selector string
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SelectorError::Empty);
        }

        if input.contains(',') {
            let parts = input
                .split(',')
                .map(Selector::parse)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(Selector::Any(parts));
        }

        if let Some(id) = input.strip_prefix('#') {
            if id.is_empty() || !is_identifier(id) {
                return Err(SelectorError::Unsupported(input.to_string()));
            }
            return Ok(Selector::Id(id.to_string()));
        }

        if let Some(pseudo) = input.strip_prefix(':') {
            return match pseudo.to_ascii_lowercase().as_str() {
                "text" => Ok(Selector::Kind(FieldKind::Text)),
                "password" => Ok(Selector::Kind(FieldKind::Password)),
                "email" => Ok(Selector::Kind(FieldKind::Email)),
                "hidden" => Ok(Selector::Kind(FieldKind::Hidden)),
                "checkbox" => Ok(Selector::Kind(FieldKind::Checkbox)),
                "radio" => Ok(Selector::Kind(FieldKind::Radio)),
                other => Err(SelectorError::UnknownPseudo(other.to_string())),
            };
        }

        if let Some(open) = input.find('[') {
            let tag = match &input[..open] {
                "" => None,
                prefix => Some(
                    Tag::parse(prefix)
                        .ok_or_else(|| SelectorError::Unsupported(input.to_string()))?,
                ),
            };
            let name = parse_name_attribute(&input[open..])
                .ok_or_else(|| SelectorError::MalformedAttribute(input.to_string()))?;
            return Ok(Selector::Name { tag, name });
        }

        if let Some(tag) = Tag::parse(input) {
            return Ok(Selector::Tag(tag));
        }

        if is_identifier(input) {
            return Ok(Selector::Name {
                tag: None,
                name: input.to_string(),
            });
        }

        Err(SelectorError::Unsupported(input.to_string()))
    }

    /// Whether a field matches this selector
    pub fn matches(&self, field: &Field) -> bool {
        match self {
            Selector::Id(id) => field.id.as_deref() == Some(id.as_str()),
            Selector::Kind(kind) => field.kind == *kind,
            Selector::Tag(tag) => tag.matches(&field.kind),
            Selector::Name { tag, name } => {
                field.name == *name && tag.map(|t| t.matches(&field.kind)).unwrap_or(true)
            }
            Selector::Any(selectors) => selectors.iter().any(|s| s.matches(field)),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Selector::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Kind(kind) => write!(f, ":{}", kind.type_attr()),
            Selector::Tag(tag) => write!(f, "{}", tag_name(*tag)),
            Selector::Name { tag, name } => {
                if let Some(tag) = tag {
                    write!(f, "{}", tag_name(*tag))?;
                }
                write!(f, "[name='{}']", name)
            }
            Selector::Any(selectors) => {
                let parts: Vec<String> = selectors.iter().map(|s| s.to_string()).collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

fn tag_name(tag: Tag) -> &'static str {
    match tag {
        Tag::Input => "input",
        Tag::Select => "select",
        Tag::Textarea => "textarea",
    }
}

fn is_identifier(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
}

// `[name='x']`, `[name="x"]` or `[name=x]`
fn parse_name_attribute(attr: &str) -> Option<String> {
    let inner = attr.strip_prefix('[')?.strip_suffix(']')?;
    let (key, value) = inner.split_once('=')?;
    if key.trim() != "name" {
        return None;
    }

    let value = value.trim();
    let unquoted = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| value.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
        .unwrap_or(value);

    if unquoted.is_empty() {
        None
    } else {
        Some(unquoted.to_string())
    }
}
