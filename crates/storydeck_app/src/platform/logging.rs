//! Platform logging initialization for storydeck_app.
//!
//! Writes logs to `./storydeck.log` in the current working directory. The
//! terminal belongs to the UI while the app runs, so there is no terminal
//! logger.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{Config, ConfigBuilder, WriteLogger};

/// Initialize the file logger. Must run before the terminal enters raw mode.
pub fn initialize() {
    let level = LevelFilter::Info;
    let config = build_config();

    let log_path = PathBuf::from("./storydeck.log");
    match File::create(&log_path) {
        Ok(file) => {
            let _ = WriteLogger::init(level, config, file);
        }
        Err(err) => {
            eprintln!(
                "Warning: Could not create log file at {:?}: {}",
                log_path, err
            );
        }
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
