use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

pub const NAME_COLUMN: &str = "Name";
pub const SYMBOL_COLUMN: &str = "Symbol";
pub const GROUP_COLUMN: &str = "Group";
pub const PERIOD_COLUMN: &str = "Period";

/// The columns every element table must provide.
pub const REQUIRED_COLUMNS: [&str; 4] = [NAME_COLUMN, SYMBOL_COLUMN, GROUP_COLUMN, PERIOD_COLUMN];

/// A single cell of metadata attached to an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Missing,
}

impl FieldValue {
    /// Interprets a raw text cell, treating blank input as [`FieldValue::Missing`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return FieldValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(value) => FieldValue::Number(value),
            Err(_) => FieldValue::Text(trimmed.to_string()),
        }
    }

    /// Returns the value as an attenuation coefficient.
    ///
    /// Anything that is not a finite number counts as "no data" and is coerced to `0.0`.
    pub fn as_coefficient(&self) -> f64 {
        match self {
            FieldValue::Number(value) if value.is_finite() => *value,
            _ => 0.0,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => write!(f, "{}", value),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Missing => Ok(()),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// One row of the element table.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    pub name: String,
    pub symbol: String,
    pub group: i32,
    pub period: i32,
    pub fields: HashMap<String, FieldValue>,
}

impl ElementRecord {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, group: i32, period: i32) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            group,
            period,
            fields: HashMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Resolves a column by name.
    ///
    /// The intrinsic columns (`Name`, `Symbol`, `Group`, `Period`) come from the typed members;
    /// everything else is looked up in [`ElementRecord::fields`].
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            NAME_COLUMN => Some(FieldValue::Text(self.name.clone())),
            SYMBOL_COLUMN => Some(FieldValue::Text(self.symbol.clone())),
            GROUP_COLUMN => Some(FieldValue::Number(self.group as f64)),
            PERIOD_COLUMN => Some(FieldValue::Number(self.period as f64)),
            _ => self.fields.get(name).cloned(),
        }
    }
}
