//! Request/response contract for callers that hold raw JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::schema_mapper::SchemaMapper;
use crate::error::{MapperError, MapperResult};

/// Translation direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Flat CGCore record to ISO 19115 tree
    CgcoreToIso,
    /// ISO 19115 tree to flat CGCore record. Used when a request names no direction.
    #[default]
    IsoToCgcore,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::CgcoreToIso => "cgcore_to_iso",
            Direction::IsoToCgcore => "iso_to_cgcore",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cgcore_to_iso" => Ok(Direction::CgcoreToIso),
            "iso_to_cgcore" => Ok(Direction::IsoToCgcore),
            other => Err(MapperError::BoundaryParse(format!(
                "unknown direction '{}', expected 'cgcore_to_iso' or 'iso_to_cgcore'",
                other
            ))),
        }
    }
}

/// A translation request as received at the boundary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MapRequest {
    /// Missing and `null` both fall back to [`Direction::default`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    pub metadata: Value,
}

/// Either `{"result": ...}` or `{"error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum MapResponse {
    Success { result: Value },
    Failure { error: String },
}

impl MapResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, MapResponse::Success { .. })
    }
}

impl From<MapperResult<Value>> for MapResponse {
    fn from(result: MapperResult<Value>) -> Self {
        match result {
            Ok(result) => MapResponse::Success { result },
            Err(e) => MapResponse::Failure {
                error: e.to_string(),
            },
        }
    }
}

impl MapRequest {
    /// Direction to translate in, after applying the default.
    pub fn direction(&self) -> Direction {
        self.direction.unwrap_or_default()
    }

    /// Parse a raw request body.
    ///
    /// # Errors
    ///
    /// Returns `MapperError::BoundaryParse` if `metadata` is missing or
    /// `direction` is not one of the two known values.
    pub fn from_json(body: Value) -> MapperResult<Self> {
        serde_json::from_value(body).map_err(|e| MapperError::BoundaryParse(e.to_string()))
    }
}

/// Run a raw request body through `mapper`. Never panics; every failure is
/// reported as [`MapResponse::Failure`].
pub fn handle_request(mapper: &SchemaMapper, body: Value) -> MapResponse {
    MapRequest::from_json(body)
        .and_then(|request| mapper.translate(request.direction(), request.metadata))
        .into()
}
