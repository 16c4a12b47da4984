use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::Value;

use super::http_server::AppState;
use crate::schema::mapper::{handle_request, MapResponse};
use crate::{log_http_info, log_http_warn};

/// One row of the field table.
#[derive(Serialize)]
pub struct FieldEntry<'a> {
    pub field: &'a str,
    pub path: &'a str,
}

/// Translate metadata.
///
/// Body: `{"direction": "cgcore_to_iso" | "iso_to_cgcore", "metadata": {...}}`.
/// Answers 200 with `{"result": ...}` or 400 with `{"error": "..."}`.
pub async fn map_metadata(body: web::Bytes, state: web::Data<AppState>) -> impl Responder {
    let request: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            log_http_warn!("Rejected mapper request with invalid JSON: {}", e);
            return HttpResponse::BadRequest().json(MapResponse::Failure {
                error: format!("Request body is not valid JSON: {}", e),
            });
        }
    };

    log_http_info!(
        "Received mapper request, direction {}",
        request
            .get("direction")
            .and_then(Value::as_str)
            .unwrap_or("(default)")
    );

    let response = handle_request(&state.mapper, request);
    match &response {
        MapResponse::Success { .. } => HttpResponse::Ok().json(response),
        MapResponse::Failure { error } => {
            log_http_warn!("Mapper request failed: {}", error);
            HttpResponse::BadRequest().json(response)
        }
    }
}

/// List the field table in order.
pub async fn list_fields(state: web::Data<AppState>) -> impl Responder {
    let fields: Vec<FieldEntry> = state
        .mapper
        .mapping()
        .iter()
        .map(|(field, path)| FieldEntry { field, path })
        .collect();
    HttpResponse::Ok().json(fields)
}

/// Report ambiguities found when the mapper was built.
pub async fn get_diagnostics(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.mapper.diagnostics())
}
