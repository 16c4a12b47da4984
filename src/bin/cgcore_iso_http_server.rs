use cgcore_iso::logging::LoggingSystem;
use cgcore_iso::{load_mapper_config, MapperHttpServer};
use clap::Parser;
use log::info;

/// Command line options for the HTTP server binary.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Port for the HTTP server (overrides the configuration file)
    #[arg(long)]
    port: Option<u16>,

    /// Path to the service configuration file
    #[arg(long)]
    config: Option<String>,
}

/// Main entry point for the mapper HTTP server.
///
/// # Environment Variables
///
/// * `CGCORE_ISO_CONFIG` - Path to the configuration file (default: config/mapper_config.json)
/// * `RUST_LOG` - Log filter applied on top of the configured levels
///
/// # Errors
///
/// Returns an error if:
/// * The configuration file cannot be parsed or fails validation
/// * The HTTP server cannot be started
#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_mapper_config(cli.config.as_deref(), cli.port)?;
    LoggingSystem::init_with_config(config.logging.clone())?;
    info!("Starting CGCore / ISO 19115 mapper HTTP server...");

    let http_server = MapperHttpServer::from_config(&config);
    info!("Listening on {}", http_server.bind_address());
    http_server.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["test"]);
        assert_eq!(cli.port, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn custom_port() {
        let cli = Cli::parse_from(["test", "--port", "8000"]);
        assert_eq!(cli.port, Some(8000));
    }
}
