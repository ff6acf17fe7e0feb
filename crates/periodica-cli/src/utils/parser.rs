use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidFormat(String),

    #[error("Unsupported configuration key for --set: '{0}'")]
    UnsupportedKey(String),

    #[error("Value for '{key}' cannot be empty in '{pair}'.")]
    EmptyValue { key: &'static str, pair: String },
}

/// Configuration keys that may be overridden with `--set KEY=VALUE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetKey {
    ColorRangeVmin,
    ColorRangeVmax,
    ColumnsNeutrons,
    ColumnsXRay,
    TableSheet,
    TableSkipRows,
    LabelPrecision,
}

impl SetKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetKey::ColorRangeVmin => "color-range.vmin",
            SetKey::ColorRangeVmax => "color-range.vmax",
            SetKey::ColumnsNeutrons => "columns.neutrons",
            SetKey::ColumnsXRay => "columns.x-ray",
            SetKey::TableSheet => "table.sheet",
            SetKey::TableSkipRows => "table.skip-rows",
            SetKey::LabelPrecision => "label-precision",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        [
            SetKey::ColorRangeVmin,
            SetKey::ColorRangeVmax,
            SetKey::ColumnsNeutrons,
            SetKey::ColumnsXRay,
            SetKey::TableSheet,
            SetKey::TableSkipRows,
            SetKey::LabelPrecision,
        ]
        .into_iter()
        .find(|k| k.as_str() == key)
    }
}

/// Splits a `KEY=VALUE` override. Only the first `=` separates, so values may contain `=`.
pub fn parse_set_value(pair: &str) -> Result<(SetKey, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidFormat(pair.to_string()))?;
    let key = SetKey::from_key(key.trim())
        .ok_or_else(|| ParseError::UnsupportedKey(key.trim().to_string()))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ParseError::EmptyValue {
            key: key.as_str(),
            pair: pair.to_string(),
        });
    }
    Ok((key, value))
}
