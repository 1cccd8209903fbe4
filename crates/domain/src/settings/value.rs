//! Scalar setting values.

use serde_json::{Number, Value};

/// A single scalar setting as stored by the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl SettingValue {
    /// Convert a JSON value, returning `None` for non-scalars.
    #[must_use]
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Self::Bool(b)),
            Value::Number(n) => Some(Self::Number(n)),
            Value::String(s) => Some(Self::Text(s)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// The value as it appears in a text input.
    ///
    /// Whole floating-point numbers lose their fractional part (`10.0` → `"10"`).
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else if let Some(u) = n.as_u64() {
                    u.to_string()
                } else {
                    n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
                }
            }
            Self::Text(s) => s.clone(),
        }
    }

    /// The value read as an on/off flag.
    ///
    /// Text is on unless it is empty, `"false"` or `"0"`, so values echoed
    /// back from a form submission keep their meaning.
    #[must_use]
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Self::Text(s) => !matches!(s.trim(), "" | "false" | "0"),
        }
    }

    /// Leading integer of the value, if it has one.
    ///
    /// Numbers are truncated towards zero; text is read from its first
    /// non-blank character with an optional sign.
    #[must_use]
    pub fn leading_integer(&self) -> Option<i64> {
        match self {
            Self::Bool(_) => None,
            Self::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
            Self::Text(s) => parse_leading_integer(s),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn truncate(value: f64) -> Option<i64> {
    let truncated = value.trunc();
    if truncated.is_finite() && truncated.abs() < i64::MAX as f64 {
        Some(truncated as i64)
    } else {
        None
    }
}

fn parse_leading_integer(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
