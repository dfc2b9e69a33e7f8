//! Command-line interface: argument types, command implementations and
//! output formatting.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use crate::infrastructure::logging::SecretScrubber;

/// Report a failed command and exit with status 1.
///
/// Credentials are scrubbed from the message first: HTTP errors can echo
/// request details back.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    let message = SecretScrubber::new().scrub_message(&format!("{err:#}"));
    if json_mode {
        let body = serde_json::json!({ "success": false, "error": message });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {message}", console::style("Error:").red().bold());
    }
    std::process::exit(1)
}
