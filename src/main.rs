use std::process::ExitCode;
use ticklist::commands::Cli;
use ticklist::libs::messages::{macros::is_debug_mode, Message};
use ticklist::msg_error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr so they never interleave with the menu.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ticklist=debug")))
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(Message::OperationFailed(format!("{:#}", err)));
            ExitCode::FAILURE
        }
    }
}
