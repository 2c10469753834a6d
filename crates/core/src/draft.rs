//! Sales-order draft payload rules.
//!
//! A draft stores an in-progress order form as two JSON text columns plus a
//! step counter. Every write goes through [`DraftPayload::normalized`], so
//! create and update share the same defaults, and every read decodes the
//! text columns leniently with [`decode_json_or`] into a [`SalesOrderDraft`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{DbId, Timestamp};

/// Step a draft starts on when the client does not say otherwise.
pub const DEFAULT_CURRENT_STEP: i32 = 1;

/// Client-supplied draft contents for create and update.
///
/// Update is a full overwrite: omitted fields take their defaults rather
/// than keeping the stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPayload {
    #[serde(default)]
    pub form_data: Option<Value>,
    #[serde(default)]
    pub current_step: Option<i32>,
    #[serde(default)]
    pub po_documents: Option<Value>,
}

/// A stored draft with its JSON columns decoded, as served over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrderDraft {
    pub id: DbId,
    pub user_id: DbId,
    pub form_data: Value,
    pub current_step: i32,
    pub po_documents: Value,
    pub last_saved: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A [`DraftPayload`] with defaults applied, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedDraft {
    pub form_data: Value,
    pub current_step: i32,
    pub po_documents: Value,
}

impl DraftPayload {
    /// Apply defaults: `{}` form data, step 1, `[]` documents.
    ///
    /// `null` counts as omitted, and so does a step of `0`. Any other step,
    /// negative ones included, is stored as given.
    pub fn normalized(&self) -> NormalizedDraft {
        NormalizedDraft {
            form_data: non_null_or(self.form_data.as_ref(), empty_form_data),
            current_step: self
                .current_step
                .filter(|step| *step != 0)
                .unwrap_or(DEFAULT_CURRENT_STEP),
            po_documents: non_null_or(self.po_documents.as_ref(), empty_documents),
        }
    }
}

impl NormalizedDraft {
    pub fn form_data_text(&self) -> String {
        encode_json(&self.form_data)
    }

    pub fn po_documents_text(&self) -> String {
        encode_json(&self.po_documents)
    }
}

pub fn empty_form_data() -> Value {
    Value::Object(serde_json::Map::new())
}

pub fn empty_documents() -> Value {
    Value::Array(Vec::new())
}

fn non_null_or(value: Option<&Value>, fallback: fn() -> Value) -> Value {
    match value {
        Some(Value::Null) | None => fallback(),
        Some(v) => v.clone(),
    }
}

/// Serialize a JSON value to compact text for a text column.
pub fn encode_json(value: &Value) -> String {
    value.to_string()
}

/// Outcome of decoding a stored JSON text column.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// The column held valid JSON.
    Parsed(Value),
    /// The column was `NULL` or empty.
    Absent,
    /// The column held text that is not JSON.
    Malformed(String),
}

/// Decode a stored JSON text column, reporting what was found.
pub fn decode_json(text: Option<&str>) -> Decoded {
    match text {
        None => Decoded::Absent,
        Some(t) if t.trim().is_empty() => Decoded::Absent,
        Some(t) => match serde_json::from_str(t) {
            Ok(value) => Decoded::Parsed(value),
            Err(err) => Decoded::Malformed(err.to_string()),
        },
    }
}

/// Decode a stored JSON text column, substituting `fallback()` when it is
/// empty or malformed. Corruption is never surfaced as an error.
pub fn decode_json_or(text: Option<&str>, fallback: fn() -> Value) -> Value {
    match decode_json(text) {
        Decoded::Parsed(value) => value,
        Decoded::Absent | Decoded::Malformed(_) => fallback(),
    }
}
