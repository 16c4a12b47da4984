pub mod path;
mod request;
mod schema_mapper;
pub mod table;
mod tree;
pub mod types;


pub use request::{handle_request, Direction, MapRequest, MapResponse};
pub use schema_mapper::SchemaMapper;
pub use tree::{FlatRecord, HierarchicalTree, IsoNode};
pub use types::{FieldMapping, MappingCollision, MappingDiagnostics, PrefixConflict, ReverseMapping};
