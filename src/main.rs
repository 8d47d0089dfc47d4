//! One-shot toast notifier for Drive Backup jobs

mod cli;
mod delivery;
mod facility;
mod handler;
mod outcome;
mod request;
mod template;
#[cfg(windows)]
mod winrt;

use std::ffi::OsString;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

fn main() -> ExitCode {
    init_tracing();

    // Arguments stay OS-native; parsing decides what must be Unicode
    let argv: Vec<OsString> = std::env::args_os().collect();
    let mut facility = facility::native();
    let outcome = delivery::run(&argv, &mut facility, delivery::COMPLETION_WAIT);

    debug!(?outcome, code = outcome.exit_code(), "exiting");
    ExitCode::from(outcome.exit_code())
}

/// Log to stderr at WARN and above; RUST_LOG overrides the level
fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
