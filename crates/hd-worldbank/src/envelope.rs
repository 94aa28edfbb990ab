//! Decoding of the World Bank `[metadata, records]` response envelope.
//!
//! Every v2 endpoint answers with a two-element array: page metadata first,
//! the records second. Variations seen in practice:
//! - `[meta, null]` when the query matched nothing;
//! - `[meta]` or `[]` with no records element at all;
//! - `[{"message": [{"id", "key", "value"}]}]` when a parameter is invalid.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::WorldBankError;

/// Paging metadata from the first envelope element.
///
/// `per_page` arrives as a string on some endpoints and a number on others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u64,
    pub pages: u64,
    pub per_page: u64,
    pub total: u64,
}

impl PageMeta {
    fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(lenient_u64).unwrap_or(0);
        Self {
            page: field("page"),
            pages: field("pages"),
            per_page: field("per_page"),
            total: field("total"),
        }
    }

    /// Whether records beyond the first page were left unfetched.
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        self.pages > 1
    }
}

/// One decoded page of records.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub meta: Option<PageMeta>,
    pub records: Vec<T>,
}

/// Decode a response body into metadata and records.
///
/// # Errors
///
/// - [`WorldBankError::UnexpectedShape`] if `body` is not an array.
/// - [`WorldBankError::Rejected`] if the API returned its error message form.
/// - [`WorldBankError::Parse`] if the records cannot be decoded as `T`.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<Page<T>, WorldBankError> {
    let Value::Array(parts) = body else {
        return Err(WorldBankError::UnexpectedShape(format!(
            "expected a JSON array, got {}",
            kind_of(&body)
        )));
    };

    let mut parts = parts.into_iter();
    let first = parts.next();

    if let Some(message) = first.as_ref().and_then(api_message) {
        return Err(WorldBankError::Rejected(message));
    }

    let meta = first.as_ref().map(PageMeta::from_value);
    let records = match parts.next() {
        None | Some(Value::Null) => Vec::new(),
        Some(records) => {
            serde_json::from_value(records).map_err(|e| WorldBankError::Parse(e.to_string()))?
        }
    };

    Ok(Page { meta, records })
}

fn api_message(first: &Value) -> Option<String> {
    let messages = first.get("message")?.as_array()?;
    let text = messages
        .iter()
        .map(|m| {
            let key = m.get("key").and_then(Value::as_str).unwrap_or_default();
            let value = m.get("value").and_then(Value::as_str).unwrap_or_default();
            match (key.is_empty(), value.is_empty()) {
                (false, false) => format!("{key}: {value}"),
                (false, true) => key.to_string(),
                _ => value.to_string(),
            }
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("; ");
    Some(if text.is_empty() {
        String::from("unspecified error")
    } else {
        text
    })
}

fn lenient_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
