use serde_json::Value;

use super::path::split_path;
use super::request::Direction;
use super::tree::{FlatRecord, HierarchicalTree};
use super::types::{FieldMapping, MappingDiagnostics, ReverseMapping};
use crate::error::MapperResult;
use crate::{log_mapper_debug, log_mapper_warn};

/// SchemaMapper translates metadata between the flat CGCore vocabulary and
/// the ISO 19115 tree.
///
/// The field table and its inverse are fixed at construction and only read
/// afterwards, so one instance can be shared by any number of callers. Both
/// directions drop entries the table does not know about instead of failing.
#[derive(Debug, Clone)]
pub struct SchemaMapper {
    /// CGCore field to ISO 19115 path
    mapping: FieldMapping,
    /// ISO 19115 path to CGCore field
    reverse: ReverseMapping,
    /// Ambiguities found while inverting `mapping`
    diagnostics: MappingDiagnostics,
}

impl Default for SchemaMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaMapper {
    /// Create a mapper over the compiled-in CGCore v2 to ISO 19115 table
    pub fn new() -> Self {
        Self::with_mapping(FieldMapping::cgcore_iso19115())
    }

    /// Create a mapper over an arbitrary table.
    ///
    /// Never fails. Shared paths, prefix overlaps and empty paths are logged
    /// and kept in [`SchemaMapper::diagnostics`].
    pub fn with_mapping(mapping: FieldMapping) -> Self {
        let (reverse, diagnostics) = mapping.invert();

        for collision in &diagnostics.collisions {
            log_mapper_warn!(
                "Fields {:?} share path '{}'; reverse mapping resolves it to '{}'",
                collision.shadowed,
                collision.path,
                collision.kept
            );
        }
        for conflict in &diagnostics.prefix_conflicts {
            log_mapper_warn!(
                "Path '{}' of field '{}' is a prefix of path '{}' of field '{}'",
                conflict.leaf_path,
                conflict.leaf_field,
                conflict.nested_path,
                conflict.nested_field
            );
        }
        for field in &diagnostics.empty_paths {
            log_mapper_warn!("Field '{}' maps to an empty path and will be ignored", field);
        }

        Self {
            mapping,
            reverse,
            diagnostics,
        }
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    pub fn reverse_mapping(&self) -> &ReverseMapping {
        &self.reverse
    }

    pub fn diagnostics(&self) -> &MappingDiagnostics {
        &self.diagnostics
    }

    /// Convert a flat CGCore record into an ISO 19115 tree.
    ///
    /// Fields are applied in record order. Unknown fields are skipped, and when
    /// two fields land on the same path the later one wins.
    pub fn flat_to_hierarchical(&self, record: &FlatRecord) -> HierarchicalTree {
        let mut tree = HierarchicalTree::new();

        for (field, value) in record.iter() {
            let Some(path) = self.mapping.path_for(field) else {
                log_mapper_debug!("Dropping unmapped CGCore field '{}'", field);
                continue;
            };
            let segments = split_path(path);
            if !tree.insert_at(&segments, value.clone()) {
                log_mapper_debug!("Dropping CGCore field '{}' with empty path", field);
            }
        }

        tree
    }

    /// Convert an ISO 19115 tree into a flat CGCore record.
    ///
    /// Leaves are visited depth-first; a leaf whose full path has no CGCore
    /// counterpart is skipped. If two leaves resolve to the same field, the
    /// one visited later wins.
    pub fn hierarchical_to_flat(&self, tree: &HierarchicalTree) -> FlatRecord {
        let mut record = FlatRecord::new();

        for (path, value) in tree.leaves() {
            match self.reverse.field_for(&path) {
                Some(field) => {
                    record.insert(field, value.clone());
                }
                None => log_mapper_debug!("Dropping unmapped ISO 19115 path '{}'", path),
            }
        }

        record
    }

    /// Translate a boundary payload in the given direction.
    ///
    /// # Errors
    ///
    /// Returns `MapperError::BoundaryParse` if `metadata` does not have the
    /// shape `direction` expects. For [`Direction::CgcoreToIso`] that is an
    /// object whose mapped fields hold non-object values; unmapped fields are
    /// dropped whatever they hold. For [`Direction::IsoToCgcore`] any object
    /// is accepted.
    pub fn translate(&self, direction: Direction, metadata: Value) -> MapperResult<Value> {
        match direction {
            Direction::CgcoreToIso => {
                let record = FlatRecord::from_json_keeping(metadata, |field| {
                    let mapped = self.mapping.contains_field(field);
                    if !mapped {
                        log_mapper_debug!("Dropping unmapped CGCore field '{}'", field);
                    }
                    mapped
                })?;
                Ok(self.flat_to_hierarchical(&record).into_json())
            }
            Direction::IsoToCgcore => {
                let tree = HierarchicalTree::from_json(metadata)?;
                Ok(self.hierarchical_to_flat(&tree).into_json())
            }
        }
    }
}
