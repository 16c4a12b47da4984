use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::path::{join_path, split_path};
use crate::error::{MapperError, MapperResult};

/// Flat CGCore record: field name to scalar value.
///
/// Values are JSON values other than objects. Equality ignores field order.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct FlatRecord {
    fields: IndexMap<String, Value>,
}

impl FlatRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field`, returning the previous value. An existing field keeps its
    /// position.
    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(field.into(), value)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Interpret a boundary payload as a flat record.
    ///
    /// # Errors
    ///
    /// Returns `MapperError::BoundaryParse` if `value` is not a JSON object or
    /// if any of its values is itself an object.
    pub fn from_json(value: Value) -> MapperResult<Self> {
        Self::from_json_keeping(value, |_| true)
    }

    /// Like [`FlatRecord::from_json`], but fields for which `keep` returns
    /// `false` are dropped before their values are looked at.
    ///
    /// # Errors
    ///
    /// Returns `MapperError::BoundaryParse` if `value` is not a JSON object or
    /// if a kept field holds an object.
    pub fn from_json_keeping<F>(value: Value, mut keep: F) -> MapperResult<Self>
    where
        F: FnMut(&str) -> bool,
    {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(MapperError::BoundaryParse(format!(
                    "expected a flat CGCore object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut record = Self::new();
        for (field, value) in map {
            if !keep(&field) {
                continue;
            }
            if value.is_object() {
                return Err(MapperError::BoundaryParse(format!(
                    "CGCore field '{}' must hold a scalar value, found an object",
                    field
                )));
            }
            record.insert(field, value);
        }
        Ok(record)
    }

    pub fn into_json(self) -> Value {
        Value::Object(self.fields.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'de> Deserialize<'de> for FlatRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(serde::de::Error::custom)
    }
}

/// A node of an ISO 19115 tree.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum IsoNode {
    /// Any non-object JSON value.
    Leaf(Value),
    /// Child nodes keyed by path segment.
    Branch(HierarchicalTree),
}

impl IsoNode {
    fn from_json(value: Value) -> Self {
        match value {
            Value::Object(map) => IsoNode::Branch(HierarchicalTree::from_map(map)),
            other => IsoNode::Leaf(other),
        }
    }

    fn into_json(self) -> Value {
        match self {
            IsoNode::Leaf(value) => value,
            IsoNode::Branch(tree) => tree.into_json(),
        }
    }

    /// Turn this node into a branch, discarding a leaf value if present.
    fn make_branch(&mut self) -> &mut HierarchicalTree {
        match self {
            IsoNode::Branch(tree) => tree,
            IsoNode::Leaf(_) => {
                *self = IsoNode::Branch(HierarchicalTree::default());
                self.make_branch()
            }
        }
    }
}

/// Hierarchical ISO 19115 tree whose leaves are addressed by slash-joined
/// paths. Child order follows insertion; equality ignores it.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct HierarchicalTree {
    children: IndexMap<String, IsoNode>,
}

impl HierarchicalTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret a boundary payload as a tree.
    ///
    /// # Errors
    ///
    /// Returns `MapperError::BoundaryParse` if `value` is not a JSON object.
    pub fn from_json(value: Value) -> MapperResult<Self> {
        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(MapperError::BoundaryParse(format!(
                "expected an ISO 19115 object, found {}",
                json_kind(&other)
            ))),
        }
    }

    fn from_map(map: Map<String, Value>) -> Self {
        Self {
            children: map
                .into_iter()
                .map(|(key, value)| (key, IsoNode::from_json(value)))
                .collect(),
        }
    }

    pub fn into_json(self) -> Value {
        Value::Object(
            self.children
                .into_iter()
                .map(|(key, node)| (key, node.into_json()))
                .collect(),
        )
    }

    pub fn get(&self, segment: &str) -> Option<&IsoNode> {
        self.children.get(segment)
    }

    /// Node at a slash-delimited path. The empty path has no node.
    pub fn get_path(&self, path: &str) -> Option<&IsoNode> {
        let segments = split_path(path);
        let (last, parents) = segments.split_last()?;
        let mut current = self;
        for segment in parents {
            match current.children.get(*segment)? {
                IsoNode::Branch(tree) => current = tree,
                IsoNode::Leaf(_) => return None,
            }
        }
        current.children.get(*last)
    }

    /// Leaf value at a slash-delimited path.
    pub fn leaf_at(&self, path: &str) -> Option<&Value> {
        match self.get_path(path)? {
            IsoNode::Leaf(value) => Some(value),
            IsoNode::Branch(_) => None,
        }
    }

    /// Write `value` at the location named by `segments`, creating branches on
    /// the way down. Whatever already sits at a segment in the way is replaced:
    /// a leaf blocking descent becomes an empty branch, and the final segment
    /// is overwritten even if it held a branch.
    ///
    /// Returns `false` without touching the tree when `segments` is empty.
    pub fn insert_at(&mut self, segments: &[&str], value: Value) -> bool {
        let Some((last, parents)) = segments.split_last() else {
            return false;
        };
        let mut current = self;
        for segment in parents {
            current = current
                .children
                .entry((*segment).to_string())
                .or_insert_with(|| IsoNode::Branch(HierarchicalTree::default()))
                .make_branch();
        }
        current
            .children
            .insert((*last).to_string(), IsoNode::Leaf(value));
        true
    }

    /// Every leaf with its full slash-joined path, depth-first in child order.
    pub fn leaves(&self) -> Vec<(String, &Value)> {
        let mut out = Vec::new();
        self.collect_leaves("", &mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Value)>) {
        for (key, node) in &self.children {
            let path = join_path(prefix, key);
            match node {
                IsoNode::Branch(tree) => tree.collect_leaves(&path, out),
                IsoNode::Leaf(value) => out.push((path, value)),
            }
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<'de> Deserialize<'de> for HierarchicalTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json(value).map_err(serde::de::Error::custom)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
