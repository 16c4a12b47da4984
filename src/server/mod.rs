//! HTTP surface for the mapper's request/response contract.
//!
//! Authentication, sessions and page rendering belong to whatever sits in
//! front of this server; every route here assumes the caller is already
//! authorised.

pub mod http_server;
pub mod mapper_routes;
pub mod system_routes;

pub use http_server::{configure_routes, AppState, MapperHttpServer};
