// src/main.rs
//
// Line-oriented front end: one JSON command per stdin line,
// one JSON response per stdout line.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use sportsmate::application::{AppState, Command, ErrorResponse, SuccessResponse};
use sportsmate::config::{AppConfig, DEFAULT_CONFIG_PATH};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. CONFIGURATION
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load_or_default(Path::new(&config_path))
        .with_context(|| format!("reading config {}", config_path))?;

    // 2. APPLICATION STATE
    let mut state = AppState::load(config).context("loading application data")?;
    info!("Ready; reading commands from stdin");

    // 3. COMMAND LOOP
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Command>(&line) {
            Ok(command) => match state.execute(command) {
                Ok(result) => serde_json::to_string(&SuccessResponse::new(result))?,
                Err(e) => serde_json::to_string(&ErrorResponse::from_app_error(e))?,
            },
            Err(e) => {
                warn!("Unparseable command: {}", e);
                serde_json::to_string(&ErrorResponse::validation(format!(
                    "Invalid command: {}",
                    e
                )))?
            }
        };
        writeln!(stdout, "{}", response)?;
        stdout.flush()?;
    }

    state.save().context("saving on exit")?;
    Ok(())
}
