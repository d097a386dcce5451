//! Platefix - run the column A edit trigger by hand.

mod config_path;

use std::env;
use std::path::PathBuf;

use platefix_core::trigger::{SAMPLE_CELL, SAMPLE_VALUE};
use platefix_core::{CellRef, EditTrigger, MemorySheet, PlatefixError};
use tracing_subscriber::{EnvFilter, fmt};

fn print_usage() {
    eprintln!("Usage: platefix [OPTIONS]");
    eprintln!();
    eprintln!("Simulates one cell edit and prints the value the trigger writes back.");
    eprintln!("With no --value, types \"АВС 123\" into A2.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --cell <REF>              Edited cell in A1 notation (default: A2)");
    eprintln!("  -v, --value <TEXT>        Text typed into the cell");
    eprintln!("  -c, --config <FILE>       Trigger config (TOML)");
    eprintln!("  -h, --help                Print help");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    let mut cell_arg: Option<String> = None;
    let mut value: Option<String> = None;
    let mut config_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--cell" => {
                i += 1;
                if i >= args.len() {
                    fail("--cell requires a cell reference");
                }
                cell_arg = Some(args[i].to_string());
            }
            "-v" | "--value" => {
                i += 1;
                if i >= args.len() {
                    fail("--value requires a value");
                }
                value = Some(args[i].to_string());
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    fail("--config requires a file path");
                }
                config_file = Some(PathBuf::from(&args[i]));
            }
            arg => {
                eprintln!("Error: Unknown argument: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path::load_trigger_config(config_file.as_ref()) {
        Ok(config) => config,
        Err(e) => fail(e),
    };

    let cell = match cell_arg.as_deref() {
        Some(name) => match CellRef::parse_a1(name) {
            Some(cell) => Some(cell),
            None => fail(PlatefixError::InvalidCell(name.to_string())),
        },
        None => None,
    };

    let trigger = EditTrigger::new(config);
    tracing::debug!(
        target_column = trigger.config().target_column,
        header_rows = trigger.config().header_rows,
        "trigger ready"
    );
    let mut sheet = MemorySheet::new();
    let result = match (cell, value) {
        (None, None) => trigger.simulate(&mut sheet),
        (cell, value) => trigger.simulate_edit(
            &mut sheet,
            cell.unwrap_or(SAMPLE_CELL),
            value.as_deref().unwrap_or(SAMPLE_VALUE),
        ),
    };

    match result {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => fail(e),
    }
}
