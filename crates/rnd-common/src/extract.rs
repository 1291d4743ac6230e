//! Typed reads from `serde_json` object maps
//!
//! Every accessor returns the type's zero value when the key is missing or
//! holds a value of another type, so handlers can read optional request
//! fields without matching on `Value`.

use std::collections::HashMap;
use std::time::Duration;

use jiff::Timestamp;
use serde_json::{Map, Value};

/// Typed accessors over a JSON object
pub trait MapExt {
    fn get_int(&self, key: &str) -> i32;
    fn get_int64(&self, key: &str) -> i64;
    fn get_float64(&self, key: &str) -> f64;
    fn get_bool(&self, key: &str) -> bool;
    fn get_str(&self, key: &str) -> &str;
    /// RFC 3339 timestamp; the Unix epoch when absent or unparsable
    fn get_time(&self, key: &str) -> Timestamp;
    /// Integer nanoseconds or a humanized string such as `"2m"`
    fn get_duration(&self, key: &str) -> Duration;
    /// Array of strings; empty if any element is not a string
    fn get_string_slice(&self, key: &str) -> Vec<String>;
    fn get_string_map(&self, key: &str) -> Map<String, Value>;
    /// Object of strings; empty if any value is not a string
    fn get_string_map_string(&self, key: &str) -> HashMap<String, String>;
    /// Object of string arrays; empty if any value is not one
    fn get_string_map_string_slice(&self, key: &str) -> HashMap<String, Vec<String>>;
}

impl MapExt for Map<String, Value> {
    fn get_int(&self, key: &str) -> i32 {
        self.get(key)
            .and_then(Value::as_i64)
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or_default()
    }

    fn get_int64(&self, key: &str) -> i64 {
        self.get(key).and_then(Value::as_i64).unwrap_or_default()
    }

    fn get_float64(&self, key: &str) -> f64 {
        self.get(key).and_then(Value::as_f64).unwrap_or_default()
    }

    fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or_default()
    }

    fn get_str(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    fn get_time(&self, key: &str) -> Timestamp {
        self.get(key)
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    fn get_duration(&self, key: &str) -> Duration {
        match self.get(key) {
            Some(Value::Number(n)) => n.as_u64().map(Duration::from_nanos).unwrap_or_default(),
            Some(Value::String(s)) => duration_str::parse(s).unwrap_or_default(),
            _ => Duration::ZERO,
        }
    }

    fn get_string_slice(&self, key: &str) -> Vec<String> {
        self.get(key)
            .and_then(Value::as_array)
            .and_then(|items| strings(items))
            .unwrap_or_default()
    }

    fn get_string_map(&self, key: &str) -> Map<String, Value> {
        self.get(key).and_then(Value::as_object).cloned().unwrap_or_default()
    }

    fn get_string_map_string(&self, key: &str) -> HashMap<String, String> {
        self.get(key)
            .and_then(Value::as_object)
            .and_then(|object| {
                object
                    .iter()
                    .map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_owned())))
                    .collect()
            })
            .unwrap_or_default()
    }

    fn get_string_map_string_slice(&self, key: &str) -> HashMap<String, Vec<String>> {
        self.get(key)
            .and_then(Value::as_object)
            .and_then(|object| {
                object
                    .iter()
                    .map(|(k, v)| v.as_array().and_then(|items| strings(items)).map(|list| (k.clone(), list)))
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn strings(items: &[Value]) -> Option<Vec<String>> {
    items.iter().map(|item| item.as_str().map(str::to_owned)).collect()
}
