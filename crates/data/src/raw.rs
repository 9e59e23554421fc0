//! The raw shape of the GDP document as served by the remote endpoint.

use std::fmt::Display;

use serde::Deserialize;
use serde::Serialize;

/// The JSON document holding the GDP series.
///
/// Only `data` is required. The remaining descriptive fields of the
/// document are kept when present and everything else is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPayload {
    pub data: Vec<RawRecord>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A `[date, value]` pair exactly as it appears in the payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawRecord(pub String, pub RawValue);

impl RawRecord {
    pub fn new(date: impl Into<String>, value: impl Into<RawValue>) -> RawRecord {
        Self(date.into(), value.into())
    }
}

/// The value of a raw record. Sources emit either JSON numbers or numeric strings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Number(n) => Display::fmt(n, f),
            RawValue::Text(s) => Display::fmt(s, f),
        }
    }
}
