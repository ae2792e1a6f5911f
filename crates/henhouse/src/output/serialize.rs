//! Structured serialization: JSON, YAML, XML and CSV.
//!
//! These modes bypass templates entirely.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;

use crate::error::OutputError;
use crate::output::DataFormat;

const XML_ROOT: &str = "henhouse";

/// Serializes `data` as `format`.
pub fn serialize_data<T: Serialize>(data: &T, format: DataFormat) -> Result<String, OutputError> {
    match format {
        DataFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        DataFormat::Yaml => Ok(serde_yaml::to_string(data)?),
        DataFormat::Xml => serialize_xml(data),
        DataFormat::Csv => serialize_csv(data),
    }
}

/// Serializes to XML under a `<henhouse>` root.
///
/// Keys are sanitized into element names; a top-level array becomes
/// repeated `<item>` elements and a scalar a single `<value>`.
fn serialize_xml<T: Serialize>(data: &T) -> Result<String, OutputError> {
    let value = sanitize_xml_keys(&serde_json::to_value(data)?);
    let root = match value {
        Value::Object(_) => value,
        Value::Null => Value::Object(serde_json::Map::new()),
        Value::Array(items) => wrap("item", Value::Array(items)),
        scalar => wrap("value", scalar),
    };
    Ok(quick_xml::se::to_string_with_root(XML_ROOT, &root)?)
}

fn wrap(key: &str, value: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

fn sanitize_xml_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, val)| (sanitize_xml_name(key), sanitize_xml_keys(val)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(sanitize_xml_keys).collect()),
        other => other.clone(),
    }
}

/// Replaces characters not allowed in XML element names with `_`.
fn sanitize_xml_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 1);
    for (i, c) in name.chars().enumerate() {
        let allowed = if i == 0 {
            c.is_ascii_alphabetic() || c == '_'
        } else {
            c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
        };
        if allowed {
            result.push(c);
        } else {
            result.push('_');
            if i == 0 && c.is_ascii_digit() {
                result.push(c);
            }
        }
    }
    if result.is_empty() {
        result.push('_');
    }
    result
}

/// Serializes to CSV.
///
/// An array becomes one row per element; anything else is a single row.
/// Nested objects flatten with dotted keys, nested arrays are written as
/// JSON text. Headers are the sorted union of all keys.
pub fn serialize_csv<T: Serialize>(data: &T) -> Result<String, OutputError> {
    let value = serde_json::to_value(data)?;
    let (headers, rows) = flatten_for_csv(&value);

    let csv_err = |e: csv::Error| OutputError::Csv(e.to_string());
    let mut writer = csv::Writer::from_writer(vec![]);
    if !headers.is_empty() {
        writer.write_record(&headers).map_err(csv_err)?;
    }
    for row in rows {
        writer.write_record(&row).map_err(csv_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| OutputError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::Csv(e.to_string()))
}

fn flatten_for_csv(value: &Value) -> (Vec<String>, Vec<Vec<String>>) {
    let rows: Vec<BTreeMap<String, String>> = match value {
        Value::Array(items) => items.iter().map(flatten_item).collect(),
        other => vec![flatten_item(other)],
    };

    let headers: Vec<String> = rows
        .iter()
        .flat_map(|row| row.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let data = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .map(|h| row.get(h).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    (headers, data)
}

fn flatten_item(value: &Value) -> BTreeMap<String, String> {
    let mut acc = BTreeMap::new();
    flatten_into(value, "", &mut acc);
    acc
}

fn flatten_into(value: &Value, prefix: &str, acc: &mut BTreeMap<String, String>) {
    let key = if prefix.is_empty() { "value" } else { prefix };
    match value {
        Value::Null => {}
        Value::String(s) => {
            acc.insert(key.to_string(), s.clone());
        }
        Value::Object(map) if !map.is_empty() => {
            for (k, v) in map {
                let nested = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{}.{}", prefix, k)
                };
                flatten_into(v, &nested, acc);
            }
        }
        other => {
            acc.insert(key.to_string(), other.to_string());
        }
    }
}
