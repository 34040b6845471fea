use std::process::ExitCode;

use argh::FromArgs;
use assetgen_core::keymap::Keymap;
use log::info;

use crate::cli::ToolError;

mod cli;

#[derive(FromArgs)]
/// Generate the UK keyboard scancode table
struct Args {}

fn main() -> ExitCode {
    cli::init_logging();

    let _args: Args = argh::from_env();
    cli::finish(env!("CARGO_BIN_NAME"), generate())
}

fn generate() -> Result<String, ToolError> {
    let keymap = Keymap::uk().map_err(|err| ToolError::new(1, format!("built-in keymap: {err}")))?;
    info!(
        "{} scancodes, max 0x{:02x}",
        keymap.len(),
        keymap.max_scancode()
    );
    Ok(keymap.render())
}
