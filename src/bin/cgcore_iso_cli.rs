use cgcore_iso::logging::LoggingSystem;
use cgcore_iso::schema::mapper::handle_request;
use cgcore_iso::{Direction, FlatRecord, MapRequest, MapResponse, MapperError, SchemaMapper};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate metadata read from a file or stdin
    Map {
        /// cgcore_to_iso or iso_to_cgcore
        #[arg(long, short)]
        direction: Direction,
        /// JSON file holding the metadata (stdin when omitted)
        #[arg(long, short)]
        input: Option<PathBuf>,
    },
    /// Print the CGCore to ISO 19115 field table
    Fields {},
    /// Print ambiguities in the field table
    Diagnostics {},
    /// Translate a sample record to ISO 19115 and back
    Sample {},
}

fn read_metadata(input: Option<&PathBuf>) -> Result<Value, MapperError> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    serde_json::from_str(&raw).map_err(|e| MapperError::BoundaryParse(e.to_string()))
}

fn sample_record() -> Value {
    json!({
        "title": "Sample Dataset",
        "creator": "John Doe",
        "subject": "Environment",
        "description": "A sample geospatial dataset",
        "publisher": "Example Org",
        "date": "2023-01-01",
        "identifier": "dataset-001",
        "language": "eng",
        "spatial_extent": "-180,-90,180,90"
    })
}

fn print_json(value: &impl serde::Serialize) -> Result<(), MapperError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(cli: Cli) -> Result<bool, MapperError> {
    let mapper = SchemaMapper::new();

    match cli.command {
        Commands::Map { direction, input } => {
            let response = match read_metadata(input.as_ref()) {
                Ok(metadata) => handle_request(
                    &mapper,
                    serde_json::to_value(MapRequest {
                        direction: Some(direction),
                        metadata,
                    })?,
                ),
                Err(e) => MapResponse::Failure {
                    error: e.to_string(),
                },
            };
            print_json(&response)?;
            Ok(response.is_success())
        }
        Commands::Fields {} => {
            for (field, path) in mapper.mapping().iter() {
                println!("{:<16} {}", field, path);
            }
            Ok(true)
        }
        Commands::Diagnostics {} => {
            print_json(mapper.diagnostics())?;
            Ok(mapper.diagnostics().is_clean())
        }
        Commands::Sample {} => {
            let record = FlatRecord::from_json(sample_record())?;
            let iso = mapper.flat_to_hierarchical(&record);
            println!("CGCore to ISO 19115:");
            print_json(&iso)?;

            let back = mapper.hierarchical_to_flat(&iso);
            println!("\nISO 19115 back to CGCore:");
            print_json(&back)?;
            Ok(back == record)
        }
    }
}

fn main() -> ExitCode {
    if let Err(e) = LoggingSystem::init_default() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match run(Cli::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_map_command() {
        let cli = Cli::parse_from(["test", "map", "--direction", "cgcore_to_iso"]);
        match cli.command {
            Commands::Map { direction, input } => {
                assert_eq!(direction, Direction::CgcoreToIso);
                assert!(input.is_none());
            }
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn rejects_unknown_direction() {
        assert!(Cli::try_parse_from(["test", "map", "--direction", "sideways"]).is_err());
    }

    #[test]
    fn map_reads_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.json");
        fs::write(&path, r#"{"title": "From file"}"#).unwrap();

        let cli = Cli::parse_from([
            "test",
            "map",
            "--direction",
            "cgcore_to_iso",
            "--input",
            path.to_str().unwrap(),
        ]);
        assert!(run(cli).unwrap());
    }

    #[test]
    fn sample_round_trips() {
        let cli = Cli::parse_from(["test", "sample"]);
        assert!(run(cli).unwrap());
    }
}
