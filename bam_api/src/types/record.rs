//! Untyped response records, returned as the server sent them.

use std::fmt;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A scalar field of a response record.
///
/// Variant order matters for untagged deserialization: whole numbers become
/// [`FieldValue::Integer`], or [`FieldValue::UInt`] past `i64::MAX`; anything
/// else numeric becomes [`FieldValue::Float`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Null,
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::UInt(u) => Some(*u as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(x) => write!(f, "{}", x),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Null => Ok(()),
        }
    }
}

/// One flat JSON object from a response array, fields in the order received.
pub type Record = IndexMap<String, FieldValue>;

/// Decodes raw records into a typed view such as [`super::BanknoteRate`].
pub fn decode_records<T: DeserializeOwned>(records: &[Record]) -> Result<Vec<T>, serde_json::Error> {
    serde_json::to_value(records).and_then(serde_json::from_value)
}
