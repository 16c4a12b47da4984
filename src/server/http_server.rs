use super::{mapper_routes, system_routes};
use crate::config::MapperConfig;
use crate::error::{MapperError, MapperResult};
use crate::log_http_info;
use crate::schema::SchemaMapper;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer as ActixHttpServer};
use std::sync::Arc;

/// HTTP server hosting a shared [`SchemaMapper`].
///
/// The mapper is read-only after construction, so request handlers share it
/// through an `Arc` without any locking.
pub struct MapperHttpServer {
    /// The mapper shared by all workers
    mapper: Arc<SchemaMapper>,
    /// The HTTP server bind address
    bind_address: String,
}

/// Shared application state for the HTTP server.
pub struct AppState {
    pub mapper: Arc<SchemaMapper>,
}

impl AppState {
    pub fn new(mapper: Arc<SchemaMapper>) -> Self {
        Self { mapper }
    }
}

/// Register every API route under `/api`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/mapper")
                    .route("", web::post().to(mapper_routes::map_metadata))
                    .route("/fields", web::get().to(mapper_routes::list_fields))
                    .route(
                        "/diagnostics",
                        web::get().to(mapper_routes::get_diagnostics),
                    ),
            )
            .service(
                web::scope("/system")
                    .route("/status", web::get().to(system_routes::get_system_status)),
            ),
    );
}

impl MapperHttpServer {
    /// Create a new HTTP server around `mapper`.
    ///
    /// # Arguments
    ///
    /// * `mapper` - The mapper used to serve translation requests
    /// * `bind_address` - The address to bind to (e.g., "127.0.0.1:9001")
    pub fn new(mapper: SchemaMapper, bind_address: &str) -> Self {
        Self {
            mapper: Arc::new(mapper),
            bind_address: bind_address.to_string(),
        }
    }

    /// Create a server for the compiled-in table, bound where `config` says.
    pub fn from_config(config: &MapperConfig) -> Self {
        Self::new(SchemaMapper::new(), &config.http.bind_address())
    }

    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// Run the HTTP server until it is shut down.
    ///
    /// # Errors
    ///
    /// Returns a `MapperError` if:
    /// * There is an error binding to the specified address
    /// * The server stops with an IO error
    pub async fn run(&self) -> MapperResult<()> {
        log_http_info!("HTTP server running on {}", self.bind_address);

        let app_state = web::Data::new(AppState::new(Arc::clone(&self.mapper)));

        let server = ActixHttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(app_state.clone())
                .configure(configure_routes)
        })
        .bind(&self.bind_address)
        .map_err(|e| MapperError::Server(format!("Failed to bind HTTP server: {}", e)))?
        .run();

        server
            .await
            .map_err(|e| MapperError::Server(format!("HTTP server error: {}", e)))?;

        Ok(())
    }
}
