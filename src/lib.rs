//! # CGCore / ISO 19115 Metadata Mapper
//!
//! This library translates metadata records between two vocabularies: the flat
//! CGCore field set and the hierarchical, path-addressed ISO 19115 tree.
//!
//! ## Core Components
//!
//! * `schema` - The field-to-path mapping table and the bidirectional mapper
//! * `error` - Error types and handling
//! * `logging` - Logger setup and feature-specific logging macros
//! * `config` - Service configuration loading
//! * `server` - HTTP surface exposing the mapper's request/response contract
//!
//! ## Architecture
//!
//! The mapper is a pure, stateless transform. A `SchemaMapper` holds an
//! immutable `FieldMapping` and its derived `ReverseMapping`, built once at
//! startup and shared by reference with whichever component needs translation.
//! Fields and paths with no counterpart in the table are dropped silently in
//! both directions.

pub mod logging;

pub mod config;
pub mod error;
pub mod schema;
pub mod server;

pub use config::{load_mapper_config, MapperConfig};
pub use error::{MapperError, MapperResult};
pub use schema::mapper::{
    Direction, FieldMapping, FlatRecord, HierarchicalTree, IsoNode, MapRequest, MapResponse,
    MappingDiagnostics, ReverseMapping, SchemaMapper,
};
pub use server::MapperHttpServer;
