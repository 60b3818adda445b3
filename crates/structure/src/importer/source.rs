//! Raw string sources addressed by path.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::str::FromStr;

use serde_json::Value;

/// Supplies the raw string stored at a path.
pub trait DataSource {
    /// The raw string at `path`, or `None` when nothing is stored there.
    fn lookup(&self, path: &str) -> Option<String>;

    /// Whether a value exists at `path` or anywhere below it.
    fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }
}

impl<F> DataSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, path: &str) -> Option<String> {
        self(path)
    }
}

/// An in-memory source keyed by full path.
///
/// ```
/// use structure::importer::{DataSource, MapSource};
///
/// let mut source = MapSource::new();
/// source.insert("/root/list/0", "7");
/// assert_eq!(source.lookup("/root/list/0").as_deref(), Some("7"));
/// assert!(source.contains("/root/list"));
/// assert!(!source.contains("/root/li"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSource {
    values: BTreeMap<String, String>,
}

impl MapSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` at `path`, returning the value it replaced.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(path.into(), value.into())
    }

    /// Number of stored paths.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(path, value)| (path.into(), value.into()))
                .collect(),
        }
    }
}

impl DataSource for MapSource {
    fn lookup(&self, path: &str) -> Option<String> {
        self.values.get(path).cloned()
    }

    fn contains(&self, path: &str) -> bool {
        if self.values.contains_key(path) {
            return true;
        }
        let prefix = format!("{path}/");
        self.values
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .next()
            .is_some_and(|(key, _)| key.starts_with(&prefix))
    }
}

/// A JSON document addressed with JSON Pointers.
///
/// Strings resolve to themselves, numbers and booleans to their JSON text.
/// `null`, objects and arrays hold no leaf value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonSource {
    document: Value,
}

impl JsonSource {
    /// Wraps a parsed document.
    pub fn new(document: Value) -> Self {
        Self { document }
    }

    /// Parses a JSON document.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text).map(Self::new)
    }

    /// The underlying document.
    pub fn document(&self) -> &Value {
        &self.document
    }
}

impl From<Value> for JsonSource {
    fn from(document: Value) -> Self {
        Self::new(document)
    }
}

impl FromStr for JsonSource {
    type Err = serde_json::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl DataSource for JsonSource {
    fn lookup(&self, path: &str) -> Option<String> {
        match self.document.pointer(path)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn contains(&self, path: &str) -> bool {
        self.document
            .pointer(path)
            .is_some_and(|value| !value.is_null())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn document() -> JsonSource {
        JsonSource::from(json!({
            "root": {
                "a": 42,
                "b": "3.14",
                "flag": true,
                "gone": null,
                "list": [1, 2],
                "a/b": "slash",
                "t~x": "tilde"
            }
        }))
    }

    #[rstest]
    #[case("/root/a", Some("42"))]
    #[case("/root/b", Some("3.14"))]
    #[case("/root/flag", Some("true"))]
    #[case("/root/list/1", Some("2"))]
    #[case("/root/a~1b", Some("slash"))]
    #[case("/root/t~0x", Some("tilde"))]
    #[case("/root/gone", None)]
    #[case("/root/list", None)]
    #[case("/root/missing", None)]
    fn json_lookup(#[case] path: &str, #[case] expected: Option<&str>) {
        assert_eq!(document().lookup(path).as_deref(), expected);
    }

    #[test]
    fn json_contains_sees_aggregates() {
        let source = document();
        assert!(source.contains("/root/list"));
        assert!(source.contains("/root/list/0"));
        assert!(!source.contains("/root/list/2"));
        assert!(!source.contains("/root/gone"));
    }

    #[test]
    fn json_parse() {
        let source: JsonSource = r#"{"x": 1}"#.parse().unwrap();
        assert_eq!(source.lookup("/x").as_deref(), Some("1"));
        assert!(JsonSource::parse("{").is_err());
    }

    #[test]
    fn map_contains_checks_whole_segments() {
        let source: MapSource = [("/root/list/0/x", "1"), ("/root/listing", "2")]
            .into_iter()
            .collect();
        assert!(source.contains("/root/list"));
        assert!(source.contains("/root/list/0"));
        assert!(!source.contains("/root/list/1"));
        assert!(source.contains("/root/listing"));
        assert!(!source.contains("/root/lis"));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn closures_are_sources() {
        let source = |path: &str| (path == "/env/home").then(|| "/home/me".to_owned());
        assert_eq!(source.lookup("/env/home").as_deref(), Some("/home/me"));
        assert!(!source.contains("/env/user"));
    }
}
