//! CLI entry point.
//!
//! # Responsibility
//! - Start stderr logging and print the demonstration transcript on stdout.
//! - Exit non-zero only when logging cannot start or stdout cannot be written.

use log::error;
use record_demo_core::{init_logging, run_demo, DemoConfig, DemoResult};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=demo_failed module=cli status=error error={err}");
            eprintln!("record_demo: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> DemoResult<()> {
    let config = DemoConfig::default();
    init_logging(config.log_level, config.log_target)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out)?;
    Ok(())
}
