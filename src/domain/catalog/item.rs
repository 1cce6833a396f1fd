//! Item - one immutable catalog record.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::domain::foundation::ItemId;

/// The value an item holds for one named attribute.
///
/// Catalog files are free-form, so anything that is not a flag, a string or
/// a list of strings is kept as [`AttributeValue::Other`]. Predicates never
/// match `Other`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Flag(bool),
    Text(String),
    List(Vec<String>),
    Other(serde_json::Value),
}

impl AttributeValue {
    /// Builds a list value from anything string-like.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AttributeValue::List(values.into_iter().map(Into::into).collect())
    }

    /// Every discrete value held, in order. Flags render as `true`/`false`.
    pub fn observed_values(&self) -> Vec<Cow<'_, str>> {
        match self {
            AttributeValue::Flag(flag) => vec![Cow::Borrowed(flag_str(*flag))],
            AttributeValue::Text(text) => vec![Cow::Borrowed(text.as_str())],
            AttributeValue::List(values) => {
                values.iter().map(|v| Cow::Borrowed(v.as_str())).collect()
            }
            AttributeValue::Other(_) => Vec::new(),
        }
    }

    /// True when `value` is one of the discrete values held.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            AttributeValue::Flag(flag) => flag_str(*flag) == value,
            AttributeValue::Text(text) => text == value,
            AttributeValue::List(values) => values.iter().any(|v| v == value),
            AttributeValue::Other(_) => false,
        }
    }

    /// String coercion used when the value is bucketed as a scalar.
    pub fn scalar_form(&self) -> String {
        match self {
            AttributeValue::Flag(flag) => flag_str(*flag).to_string(),
            AttributeValue::Text(text) => text.clone(),
            AttributeValue::List(values) => values.join(","),
            AttributeValue::Other(value) => value.to_string(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, AttributeValue::List(_))
    }
}

fn flag_str(flag: bool) -> &'static str {
    if flag {
        "true"
    } else {
        "false"
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Flag(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        AttributeValue::List(values)
    }
}

/// A catalog record: numeric id plus named attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Item {
    /// Creates an item with no attributes.
    pub fn new(id: impl Into<ItemId>) -> Self {
        Self {
            id: id.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Returns the value for `name`, if the item defines it.
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Display label: the `name` attribute when present, otherwise the id.
    pub fn label(&self) -> String {
        match self.attribute("name") {
            Some(AttributeValue::Text(name)) => name.clone(),
            _ => format!("#{}", self.id),
        }
    }
}
