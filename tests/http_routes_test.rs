//! HTTP route tests against an in-process service.

use actix_web::{test, web, App};
use cgcore_iso::server::{configure_routes, AppState};
use cgcore_iso::SchemaMapper;
use serde_json::{json, Value};
use std::sync::Arc;

macro_rules! mapper_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState::new(Arc::new(SchemaMapper::new()))))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn post_mapper_returns_result() {
    let app = mapper_app!();

    let req = test::TestRequest::post()
        .uri("/api/mapper")
        .set_json(json!({
            "direction": "cgcore_to_iso",
            "metadata": {"title": "Sample Dataset", "rights": "dropped"}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "result": {
                "identificationInfo": {
                    "MD_DataIdentification": {
                        "citation": {"CI_Citation": {"title": "Sample Dataset"}}
                    }
                }
            }
        })
    );
}

#[actix_web::test]
async fn post_mapper_defaults_to_iso_to_cgcore() {
    let app = mapper_app!();

    let req = test::TestRequest::post()
        .uri("/api/mapper")
        .set_json(json!({
            "metadata": {
                "identificationInfo": {"MD_DataIdentification": {"abstract": "About"}}
            }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"result": {"description": "About"}}));
}

#[actix_web::test]
async fn post_mapper_null_direction_is_iso_to_cgcore() {
    let app = mapper_app!();

    let req = test::TestRequest::post()
        .uri("/api/mapper")
        .set_json(json!({
            "direction": null,
            "metadata": {
                "identificationInfo": {"MD_DataIdentification": {"abstract": "About"}}
            }
        }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"result": {"description": "About"}}));
}

#[actix_web::test]
async fn post_mapper_ignores_unmapped_object_fields() {
    let app = mapper_app!();

    let req = test::TestRequest::post()
        .uri("/api/mapper")
        .set_json(json!({
            "direction": "cgcore_to_iso",
            "metadata": {"language": "eng", "keywords": {"theme": "env"}}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"result": {"identificationInfo": {"MD_DataIdentification": {"language": "eng"}}}})
    );
}

#[actix_web::test]
async fn post_mapper_rejects_bad_payloads() {
    let app = mapper_app!();

    let req = test::TestRequest::post()
        .uri("/api/mapper")
        .insert_header(("content-type", "application/json"))
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());

    let req = test::TestRequest::post()
        .uri("/api/mapper")
        .set_json(json!({"direction": "iso_to_cgcore", "metadata": ["a"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body.get("result").is_none());
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn get_fields_lists_table_in_order() {
    let app = mapper_app!();

    let req = test::TestRequest::get().uri("/api/mapper/fields").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["field"], json!("title"));
    assert_eq!(rows[11]["field"], json!("temporal_extent"));
}

#[actix_web::test]
async fn get_diagnostics_is_clean() {
    let app = mapper_app!();

    let req = test::TestRequest::get()
        .uri("/api/mapper/diagnostics")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({"collisions": [], "prefix_conflicts": [], "empty_paths": []})
    );
}

#[actix_web::test]
async fn get_system_status() {
    let app = mapper_app!();

    let req = test::TestRequest::get().uri("/api/system/status").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], json!("running"));
    assert_eq!(body["fields"], json!(12));
}
