// rdsq-core/src/domain/envelope.rs
//
// The JSON document printed by `execute-statement`:
//
//   {
//     "records": [[{"longValue": 1}, {"stringValue": "Alice"}], ...],
//     "columnMetadata": [{"name": "id", "typeName": "int4"}, ...],
//     "numberOfRecordsUpdated": 0
//   }

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("record {index} is not an array of fields")]
    RecordNotArray { index: usize },

    #[error("invalid columnMetadata: {0}")]
    ColumnMetadata(#[from] serde_json::Error),
}

/// One column descriptor. Only `name` is rendered; the rest is kept for callers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
}

impl ColumnMetadata {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// A single field of a record.
///
/// The external format wraps every value in an object with one populated key
/// per SQL type (`longValue`, `stringValue`, ...) and flags SQL NULL with
/// `isNull`. Keys are matched by name, never by position.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Long(i64),
    Double(f64),
    String(String),
    /// Base64 payload exactly as printed by the command.
    Blob(String),
    /// The raw `arrayValue` object.
    Array(Value),
    /// A single-key object whose key is not a known type tag.
    Other(Value),
}

impl CellValue {
    pub fn from_json(value: &Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return CellValue::Null,
            other => return CellValue::Other(other.clone()),
        };

        if map.get("isNull").and_then(Value::as_bool) == Some(true) {
            return CellValue::Null;
        }
        if let Some(b) = map.get("booleanValue").and_then(Value::as_bool) {
            return CellValue::Bool(b);
        }
        if let Some(n) = map.get("longValue").and_then(Value::as_i64) {
            return CellValue::Long(n);
        }
        if let Some(f) = map.get("doubleValue").and_then(Value::as_f64) {
            return CellValue::Double(f);
        }
        if let Some(s) = map.get("stringValue").and_then(Value::as_str) {
            return CellValue::String(s.to_string());
        }
        if let Some(s) = map.get("blobValue").and_then(Value::as_str) {
            return CellValue::Blob(s.to_string());
        }
        if let Some(array) = map.get("arrayValue") {
            return CellValue::Array(array.clone());
        }

        // Unknown tag: only trust an object that carries exactly one value
        match map.values().next() {
            Some(Value::Null) | None => CellValue::Null,
            Some(only) if map.len() == 1 => CellValue::Other(only.clone()),
            Some(_) => CellValue::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Long(n) => write!(f, "{}", n),
            CellValue::Double(x) => write!(f, "{}", x),
            CellValue::String(s) | CellValue::Blob(s) => f.write_str(s),
            CellValue::Array(array) => {
                // {"longValues": [1, 2]} reads better as [1,2]
                let inner = match array {
                    Value::Object(map) if map.len() == 1 => map.values().next().unwrap_or(array),
                    _ => array,
                };
                write!(f, "{}", inner)
            }
            CellValue::Other(Value::String(s)) => f.write_str(s),
            CellValue::Other(v) => write!(f, "{}", v),
        }
    }
}

/// Parsed result of a statement that returned a `records` array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultEnvelope {
    pub records: Vec<Vec<CellValue>>,
    pub column_metadata: Vec<ColumnMetadata>,
}

impl ResultEnvelope {
    /// Reads the envelope out of a parsed document.
    ///
    /// Returns `Ok(None)` when the document has no array-valued `records`
    /// (DML statements, DDL, or any non-object JSON).
    pub fn from_json(document: &Value) -> Result<Option<Self>, ShapeError> {
        let Some(records) = document.get("records").and_then(Value::as_array) else {
            return Ok(None);
        };

        let records = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .as_array()
                    .map(|fields| fields.iter().map(CellValue::from_json).collect())
                    .ok_or(ShapeError::RecordNotArray { index })
            })
            .collect::<Result<Vec<Vec<CellValue>>, _>>()?;

        let column_metadata = match document.get("columnMetadata") {
            None | Some(Value::Null) => Vec::new(),
            Some(meta) => Vec::<ColumnMetadata>::deserialize(meta)?,
        };

        Ok(Some(Self {
            records,
            column_metadata,
        }))
    }

    /// Column names in metadata order; empty when the command sent none.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_metadata.iter().map(ColumnMetadata::name).collect()
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result};
    use serde_json::json;

    #[test]
    fn test_typed_cells_are_decoded_by_key() {
        assert_eq!(CellValue::from_json(&json!({"longValue": 42})), CellValue::Long(42));
        assert_eq!(
            CellValue::from_json(&json!({"stringValue": "Alice"})),
            CellValue::String("Alice".into())
        );
        assert_eq!(
            CellValue::from_json(&json!({"booleanValue": false})),
            CellValue::Bool(false)
        );
        assert_eq!(
            CellValue::from_json(&json!({"doubleValue": 1.5})),
            CellValue::Double(1.5)
        );
        assert_eq!(
            CellValue::from_json(&json!({"blobValue": "AAEC"})),
            CellValue::Blob("AAEC".into())
        );
    }

    #[test]
    fn test_null_representations() {
        assert!(CellValue::from_json(&json!({"isNull": true})).is_null());
        assert!(CellValue::from_json(&json!({"customValue": null})).is_null());
        assert!(CellValue::from_json(&json!({})).is_null());
        assert!(CellValue::from_json(&Value::Null).is_null());
        assert_eq!(CellValue::Null.to_string(), "");
    }

    #[test]
    fn test_unknown_single_key_falls_back_to_its_value() {
        let cell = CellValue::from_json(&json!({"customValue": "x"}));
        assert_eq!(cell, CellValue::Other(json!("x")));
        assert_eq!(cell.to_string(), "x");
    }

    #[test]
    fn test_array_value_renders_inner_list() {
        let cell = CellValue::from_json(&json!({"arrayValue": {"longValues": [1, 2]}}));
        assert_eq!(cell.to_string(), "[1,2]");
    }

    #[test]
    fn test_envelope_with_records() -> Result<()> {
        let doc = json!({
            "records": [[{"longValue": 1}, {"stringValue": "Alice"}]],
            "columnMetadata": [{"name": "id", "typeName": "int4"}, {"name": "name"}]
        });
        let envelope = ResultEnvelope::from_json(&doc)?.context("records expected")?;
        assert_eq!(envelope.row_count(), 1);
        assert_eq!(envelope.column_names(), vec!["id", "name"]);
        assert_eq!(envelope.column_metadata[0].type_name.as_deref(), Some("int4"));
        Ok(())
    }

    #[test]
    fn test_envelope_without_records_array() -> Result<()> {
        assert!(ResultEnvelope::from_json(&json!({"numberOfRecordsUpdated": 1}))?.is_none());
        assert!(ResultEnvelope::from_json(&json!({"records": "nope"}))?.is_none());
        assert!(ResultEnvelope::from_json(&json!([1, 2, 3]))?.is_none());
        Ok(())
    }

    #[test]
    fn test_empty_records_without_metadata() -> Result<()> {
        let envelope = ResultEnvelope::from_json(&json!({"records": []}))?
            .context("empty records is still tabular")?;
        assert_eq!(envelope.row_count(), 0);
        assert!(envelope.column_names().is_empty());
        Ok(())
    }

    #[test]
    fn test_record_that_is_not_an_array() {
        let result = ResultEnvelope::from_json(&json!({"records": [[], {"a": 1}]}));
        assert!(matches!(result, Err(ShapeError::RecordNotArray { index: 1 })));
    }

    #[test]
    fn test_invalid_column_metadata() {
        let result = ResultEnvelope::from_json(&json!({"records": [], "columnMetadata": 3}));
        assert!(matches!(result, Err(ShapeError::ColumnMetadata(_))));
    }
}
