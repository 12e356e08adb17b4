//! Microwave oven console simulator.
//!
//! ```text
//!   stdin ──▶ OvenRuntime ──▶ InputQueue ──▶ Oven (UI · CookController · Safety)
//!                                              │
//!              stdout ◀── TextOutput ◀── HardwareAdapter
//!              stderr ◀── LogEventSink ◀─────┘
//! ```
//!
//! Usage: `microwave [config.json]`, then one command per line:
//! `power`, `time`, `start`, `open`, `close`, `status`, `quit`.
#![deny(unused_must_use)]

use std::io::BufRead;

use anyhow::{Context, Result};
use log::{info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use microwave::adapters::text_output::TextOutput;
use microwave::app::commands::ButtonId;
use microwave::config::OvenConfig;
use microwave::runtime::OvenRuntime;

fn main() -> Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("logger init")?;

    info!("=== Microwave simulator v{} ===", env!("CARGO_PKG_VERSION"));

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => OvenConfig::default(),
    };

    let runtime =
        OvenRuntime::spawn(config, TextOutput::stdout()).context("starting oven runtime")?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "" => {}
            "power" | "p" => {
                runtime.press(ButtonId::Power);
            }
            "time" | "t" => {
                runtime.press(ButtonId::Time);
            }
            "start" | "cancel" | "s" => {
                runtime.press(ButtonId::StartCancel);
            }
            "open" | "o" => {
                runtime.open_door();
            }
            "close" | "c" => {
                runtime.close_door();
            }
            "status" => {
                let st = runtime.status();
                println!(
                    "state={} power={:?} minutes={} remaining={:?}",
                    st.state, st.power_w, st.minutes, st.remaining_secs
                );
            }
            "quit" | "q" => break,
            other => warn!("Unknown command: {:?}", other),
        }
    }

    runtime.shutdown();
    info!("Simulator stopped");
    Ok(())
}

fn load_config(path: &str) -> Result<OvenConfig> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("reading config {}", path))?;
    let config = OvenConfig::from_json(&json).with_context(|| format!("parsing config {}", path))?;
    info!("Loaded config from {}", path);
    Ok(config)
}
