use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::http_server::AppState;

/// Get system status information
pub async fn get_system_status(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "running",
        "fields": state.mapper.mapping().len(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaMapper;
    use actix_web::test;
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_system_status() {
        let state = web::Data::new(AppState::new(Arc::new(SchemaMapper::new())));

        let req = test::TestRequest::get().to_http_request();
        let resp = get_system_status(state).await.respond_to(&req);
        assert_eq!(resp.status(), 200);
    }
}
