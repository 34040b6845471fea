use std::process::ExitCode;

use argh::FromArgs;
use assetgen_core::blob::ByteArray;
use log::info;

use crate::cli::ToolError;

mod cli;

const EXIT_IO: u8 = 1;

#[derive(FromArgs)]
/// Bin to H converter
#[argh(note = "bin2h 1.0, Copyright (C) 2014 Juan J Martinez <jjm@usebox.net>")]
struct Args {
    /// file to convert
    #[argh(positional)]
    file: String,

    /// variable to use
    #[argh(positional)]
    id: String,
}

fn main() -> ExitCode {
    cli::init_logging();

    let args: Args = argh::from_env();
    cli::finish(env!("CARGO_BIN_NAME"), convert(&args.file, &args.id))
}

fn convert(file: &str, id: &str) -> Result<String, ToolError> {
    let data = std::fs::read(file).map_err(|err| ToolError::new(EXIT_IO, format!("{file}: {err}")))?;
    info!("Read {} bytes from {file}", data.len());
    Ok(ByteArray::new(file, id, data).render())
}
