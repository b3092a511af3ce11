//! WebView test shell — process entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Init logger
//!   3. Run the bootstrap sequence with production collaborators
//!   4. Hand control to the engine

use tracing::info;

use webview_shell::{bootstrap, error::AppError, switches};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    webview_shell::logger::init("info")?;

    let command_line_file = switches::command_line_file();
    info!(path = %command_line_file.display(), "starting bootstrap");

    // Control belongs to the engine after this; the returned command-line
    // state goes with whoever drives it next.
    let _ready = bootstrap::production(&command_line_file).run()?;
    Ok(())
}
