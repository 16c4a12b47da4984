//! Metadata schema vocabularies and the translation between them.

pub mod mapper;

pub use mapper::{FieldMapping, ReverseMapping, SchemaMapper};
