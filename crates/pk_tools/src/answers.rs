//! Answers to the starter kit's install prompts.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::ToolError;

/// A JSON object of prompt name to answer.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Answers {
    values: Map<String, Value>,
}

impl Answers {
    pub fn load(path: &Path) -> Result<Answers, ToolError> {
        let text = fs::read_to_string(path).map_err(|err| ToolError::io(path, err))?;
        serde_json::from_str(&text).map_err(|source| ToolError::Json {
            path: path.to_owned(),
            source,
        })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Whether the multi-select answer `key` includes `value`.
    pub fn selected(&self, key: &str, value: &str) -> bool {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().any(|item| loosely_equals(item, value)),
            _ => false,
        }
    }

    /// Whether `key` was answered with a truthy value. Missing answers are
    /// not confirmed.
    pub fn confirmed(&self, key: &str) -> bool {
        self.get(key).is_some_and(truthy)
    }

    /// Whether `key` was answered with exactly `value`.
    pub fn answered(&self, key: &str, value: &Value) -> bool {
        self.get(key) == Some(value)
    }
}

impl FromIterator<(String, Value)> for Answers {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Answers {
            values: iter.into_iter().collect(),
        }
    }
}

/// Truthiness of a decoded answer: `false`, `0`, `""`, `"0"`, `[]`, `{}`
/// and `null` are false.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Multi-select entries are usually strings; numbers match their decimal
/// spelling.
fn loosely_equals(item: &Value, value: &str) -> bool {
    match item {
        Value::String(s) => s == value,
        Value::Number(n) => n.to_string() == value,
        _ => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn answers(value: Value) -> Answers {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn selected_looks_inside_lists() {
        let answers = answers(json!({ "features": ["2fa", "passkeys", 2], "stack": "react" }));
        assert!(answers.selected("features", "2fa"));
        assert!(answers.selected("features", "2"));
        assert!(!answers.selected("features", "teams"));
        assert!(!answers.selected("stack", "react"));
        assert!(!answers.selected("missing", "2fa"));
    }

    #[test]
    fn confirmed_follows_truthiness() {
        let answers = answers(json!({
            "yes": true, "no": false, "one": 1, "zero": 0,
            "word": "y", "empty": "", "zero_text": "0", "null": null, "list": [],
        }));
        for key in ["yes", "one", "word"] {
            assert!(answers.confirmed(key), "{key}");
        }
        for key in ["no", "zero", "empty", "zero_text", "null", "list", "missing"] {
            assert!(!answers.confirmed(key), "{key}");
        }
    }

    #[test]
    fn answered_is_exact() {
        let answers = answers(json!({ "stack": "react", "port": 8000 }));
        assert!(answers.answered("stack", &json!("react")));
        assert!(!answers.answered("stack", &json!("vue")));
        assert!(!answers.answered("port", &json!("8000")));
        assert!(answers.answered("port", &json!(8000)));
    }

    #[test]
    fn answers_must_be_an_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answers.json");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(Answers::load(&path), Err(ToolError::Json { .. })));
    }
}
