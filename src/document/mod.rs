//! Structured documents and the batch re-translation pipeline pieces.
//!
//! A [`Document`] is an ordered mapping of keys to [`Node`]s, parsed from JSON.
//! Translation works on its leaves: [`extract`] flattens them into ordered
//! [`LeafRecord`]s, [`encode`] packs the texts into a single batch string,
//! [`decode`] splits the translated batch back into indexed values and
//! [`rebuild`] puts those values back at their original paths.

mod codec;
mod extract;
mod rebuild;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

pub use codec::{BATCH_SEPARATOR, DecodedEntry, RECORD_SEPARATOR, decode, encode};
pub use extract::extract;
pub use rebuild::rebuild;

/// A value inside a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A translatable string. Only rebuilt documents may hold an empty one.
    Text(String),
    /// A list of translatable strings. Only rebuilt documents may hold an
    /// empty one.
    List(Vec<String>),
    /// A nested mapping.
    Branch(Document),
    /// Anything that is not translated: empty strings and lists, numbers,
    /// booleans, null and lists holding non-string items.
    Empty,
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) if !text.is_empty() => Self::Text(text),
            Value::Array(items) if !items.is_empty() => items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map_or(Self::Empty, Self::List),
            Value::Object(map) => Self::Branch(Document::from_map(map)),
            _ => Self::Empty,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::List(items) => items.serialize(serializer),
            Self::Branch(document) => document.serialize(serializer),
            Self::Empty => serializer.serialize_unit(),
        }
    }
}

/// An ordered mapping from string keys to [`Node`]s.
///
/// Keys keep their insertion order, which is also the order they appeared in
/// the source file. Extraction and rebuilding both rely on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    entries: Vec<(String, Node)>,
}

impl Document {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn from_map(map: serde_json::Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(key, value)| (key, Node::from(value)))
                .collect(),
        }
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.entries.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.position(key).map(|index| &self.entries[index].1)
    }

    /// Sets `key` to `node`, replacing an existing value in place.
    pub fn insert(&mut self, key: impl Into<String>, node: Node) {
        let key = key.into();
        match self.position(&key) {
            Some(index) => self.entries[index].1 = node,
            None => self.entries.push((key, node)),
        }
    }

    /// Sets the value at `path`, creating intermediate branches as needed.
    ///
    /// An intermediate key that currently holds a non-branch value is turned
    /// into a branch. An empty path leaves the document untouched.
    pub fn set_path(&mut self, path: &KeyPath, node: Node) {
        let Some((last, parents)) = path.segments().split_last() else {
            return;
        };

        let mut current = self;
        for key in parents {
            current = current.branch_mut(key);
        }
        current.insert(last.clone(), node);
    }

    fn branch_mut(&mut self, key: &str) -> &mut Self {
        let index = self.position(key).unwrap_or_else(|| {
            self.entries.push((key.to_owned(), Node::Empty));
            self.entries.len() - 1
        });

        let slot = &mut self.entries[index].1;
        if !matches!(slot, Node::Branch(_)) {
            *slot = Node::Branch(Self::new());
        }
        let Node::Branch(branch) = slot else {
            unreachable!("slot was just made a branch");
        };
        branch
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Serializes the document as JSON indented with four spaces, followed by
    /// a trailing newline.
    pub fn to_pretty_bytes(&self) -> serde_json::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        self.serialize(&mut serializer)?;
        buffer.push(b'\n');
        Ok(buffer)
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, node) in &self.entries {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => Err(D::Error::custom("expected a JSON object at the top level")),
        }
    }
}

/// The chain of keys leading from the document root to a leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns a new path with `key` appended.
    #[must_use]
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_owned());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// The text of a leaf, kept in the shape it had in the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LeafText {
    Single(String),
    Many(Vec<String>),
}

/// A translatable leaf and where it lives in its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafRecord {
    pub path: KeyPath,
    pub text: LeafText,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Document {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_keeps_key_order() {
        let doc = parse(r#"{"zeta": "z", "alpha": "a", "mid": "m"}"#);
        let keys: Vec<_> = doc.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_parse_classifies_nodes() {
        let doc = parse(
            r#"{"text": "hi", "list": ["a", "b"], "nested": {"x": "y"},
                "blank": "", "none": [], "num": 3, "flag": true, "null": null,
                "mixed": ["a", 1]}"#,
        );

        assert_eq!(doc.get("text"), Some(&Node::Text("hi".to_string())));
        assert_eq!(
            doc.get("list"),
            Some(&Node::List(vec!["a".to_string(), "b".to_string()]))
        );
        assert!(matches!(doc.get("nested"), Some(Node::Branch(_))));
        for key in ["blank", "none", "num", "flag", "null", "mixed"] {
            assert_eq!(doc.get(key), Some(&Node::Empty), "key {key}");
        }
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let result = serde_json::from_str::<Document>(r#"["a", "b"]"#);
        assert!(result.unwrap_err().to_string().contains("JSON object"));
    }

    #[test]
    fn test_set_path_creates_intermediate_branches() {
        let mut doc = Document::new();
        let path: KeyPath = ["a", "b", "c"].into_iter().collect();
        doc.set_path(&path, Node::Text("deep".to_string()));

        let expected = parse(r#"{"a": {"b": {"c": "deep"}}}"#);
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_set_path_reuses_existing_branch() {
        let mut doc = Document::new();
        doc.set_path(
            &["a", "x"].into_iter().collect(),
            Node::Text("1".to_string()),
        );
        doc.set_path(
            &["a", "y"].into_iter().collect(),
            Node::Text("2".to_string()),
        );

        assert_eq!(doc, parse(r#"{"a": {"x": "1", "y": "2"}}"#));
    }

    #[test]
    fn test_set_path_replaces_leaf_with_branch() {
        let mut doc = parse(r#"{"a": "leaf"}"#);
        doc.set_path(
            &["a", "b"].into_iter().collect(),
            Node::Text("v".to_string()),
        );
        assert_eq!(doc, parse(r#"{"a": {"b": "v"}}"#));
    }

    #[test]
    fn test_set_path_empty_path_is_noop() {
        let mut doc = Document::new();
        doc.set_path(&KeyPath::root(), Node::Text("ignored".to_string()));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_key_path_display_joins_with_slash() {
        let path = KeyPath::root().child("menu").child("file");
        assert_eq!(path.to_string(), "menu/file");
    }

    #[test]
    fn test_key_path_keeps_slash_inside_key() {
        let path = KeyPath::root().child("a/b");
        assert_eq!(path.segments(), ["a/b"]);
    }

    #[test]
    fn test_to_pretty_bytes_uses_four_spaces() {
        let doc = parse(r#"{"greeting": "hola", "nested": {"farewell": "adiós"}}"#);
        let output = String::from_utf8(doc.to_pretty_bytes().unwrap()).unwrap();
        assert_eq!(
            output,
            "{\n    \"greeting\": \"hola\",\n    \"nested\": {\n        \"farewell\": \"adiós\"\n    }\n}\n"
        );
    }
}
