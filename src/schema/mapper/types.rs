use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::path::normalize_path;
use super::table::CGCORE_ISO19115_FIELDS;

/// Immutable mapping from CGCore field name to ISO 19115 path.
///
/// Entries keep the order they were supplied in. That order decides which
/// field survives in the [`ReverseMapping`] when two fields share a path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct FieldMapping {
    entries: IndexMap<String, String>,
}

impl FieldMapping {
    /// The compiled-in CGCore v2 to ISO 19115 table.
    pub fn cgcore_iso19115() -> Self {
        Self::from_pairs(CGCORE_ISO19115_FIELDS.iter().copied())
    }

    /// Build a mapping from `(field, path)` pairs. A repeated field keeps its
    /// first position and takes the last path given for it.
    pub fn from_pairs<I, F, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (F, P)>,
        F: Into<String>,
        P: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(field, path)| (field.into(), path.into()))
                .collect(),
        }
    }

    /// Path mapped to `field`, if the field is known.
    pub fn path_for(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Iterate `(field, path)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(field, path)| (field.as_str(), path.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive the reverse mapping along with the ambiguities the inversion hides.
    ///
    /// Fields sharing a normalized path collapse to the last one in table
    /// order. Paths without any non-empty segment are left out entirely.
    pub fn invert(&self) -> (ReverseMapping, MappingDiagnostics) {
        let mut by_path: IndexMap<String, Vec<&str>> = IndexMap::new();
        let mut empty_paths = Vec::new();

        for (field, path) in self.iter() {
            let normalized = normalize_path(path);
            if normalized.is_empty() {
                empty_paths.push(field.to_string());
                continue;
            }
            by_path.entry(normalized).or_default().push(field);
        }

        let mut reverse = ReverseMapping::default();
        let mut collisions = Vec::new();
        for (path, fields) in &by_path {
            // Non-empty by construction.
            let Some((kept, shadowed)) = fields.split_last() else {
                continue;
            };
            reverse.entries.insert(path.clone(), kept.to_string());
            if !shadowed.is_empty() {
                collisions.push(MappingCollision {
                    path: path.clone(),
                    kept: kept.to_string(),
                    shadowed: shadowed.iter().map(|f| f.to_string()).collect(),
                });
            }
        }

        let mut prefix_conflicts = Vec::new();
        for (outer_field, outer_path) in self.iter() {
            let outer = normalize_path(outer_path);
            if outer.is_empty() {
                continue;
            }
            let outer_prefix = format!("{}/", outer);
            for (inner_field, inner_path) in self.iter() {
                let inner = normalize_path(inner_path);
                if inner.starts_with(&outer_prefix) {
                    prefix_conflicts.push(PrefixConflict {
                        leaf_field: outer_field.to_string(),
                        leaf_path: outer.clone(),
                        nested_field: inner_field.to_string(),
                        nested_path: inner,
                    });
                }
            }
        }

        let diagnostics = MappingDiagnostics {
            collisions,
            prefix_conflicts,
            empty_paths,
        };
        (reverse, diagnostics)
    }
}

/// Mapping from normalized ISO 19115 path back to CGCore field name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct ReverseMapping {
    entries: IndexMap<String, String>,
}

impl ReverseMapping {
    /// Field for an exact, slash-joined path.
    pub fn field_for(&self, path: &str) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(path, field)| (path.as_str(), field.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Several fields mapped to one path; only `kept` is reachable in reverse.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MappingCollision {
    pub path: String,
    pub kept: String,
    pub shadowed: Vec<String>,
}

/// One mapped path is a strict prefix of another, so the two fields cannot
/// both be present in the same tree.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PrefixConflict {
    pub leaf_field: String,
    pub leaf_path: String,
    pub nested_field: String,
    pub nested_path: String,
}

/// Ambiguities found while inverting a [`FieldMapping`]. Informational only:
/// none of them change how the mapper behaves.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct MappingDiagnostics {
    pub collisions: Vec<MappingCollision>,
    pub prefix_conflicts: Vec<PrefixConflict>,
    /// Fields whose path has no non-empty segment.
    pub empty_paths: Vec<String>,
}

impl MappingDiagnostics {
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty() && self.prefix_conflicts.is_empty() && self.empty_paths.is_empty()
    }
}
