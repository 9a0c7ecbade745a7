//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use reqwest::Url;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    pub registry_path: Option<PathBuf>,
    pub group_by_unit: bool,
    pub base_url: Option<String>,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Taller TUI - Terminal catalog for academic workshop PDFs");
    eprintln!();
    eprintln!("Usage: taller-tui [registry.json] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [registry.json]  Path to the workshop registry file");
    eprintln!("                   If omitted, ./talleres.json is tried, then the");
    eprintln!("                   embedded default registry");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --flat                 Show one flat list instead of grouping by unit");
    eprintln!("  --base-url <URL>       Base URL for resolving relative resource paths");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  taller-tui                                      # Embedded registry");
    eprintln!("  taller-tui talleres.json --flat                 # Flat list");
    eprintln!("  taller-tui --base-url https://talleres.example  # Remote PDFs");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut registry_path: Option<PathBuf> = None;
    let mut group_by_unit = true;
    let mut base_url: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("taller-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--flat" {
            group_by_unit = false;
            i += 1;
        } else if arg == "--base-url" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --base-url",
                ));
            }
            Url::parse(&args[i]).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid base URL: {}", args[i]),
                )
            })?;
            base_url = Some(args[i].clone());
            i += 1;
        } else if !arg.starts_with('-') {
            registry_path = Some(PathBuf::from(arg));
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig {
        registry_path,
        group_by_unit,
        base_url,
    })
}
