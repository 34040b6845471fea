use std::{
    fmt,
    io::{self, Write},
    process::ExitCode,
};

use log::debug;

/// A failure that ends the tool with `code` and nothing on stdout.
#[derive(Debug)]
pub struct ToolError {
    code: u8,
    message: String,
}

impl ToolError {
    pub fn new(code: u8, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Write the generated text in one go.
pub fn emit(out: &mut impl Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}

/// Print the result to stdout, or report the error and pick the exit code.
pub fn finish(tool: &str, result: Result<String, ToolError>) -> ExitCode {
    ExitCode::from(deliver(
        tool,
        result,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    ))
}

/// The diagnostic goes to `diag` directly so a log filter cannot swallow it.
fn deliver(
    tool: &str,
    result: Result<String, ToolError>,
    out: &mut impl Write,
    diag: &mut impl Write,
) -> u8 {
    let text = match result {
        Ok(text) => text,
        Err(err) => {
            let _ = writeln!(diag, "{tool}: error: {err}");
            debug!("Exiting with status {}", err.code);
            return err.code;
        }
    };
    match emit(out, &text) {
        Ok(()) => {
            debug!("Wrote {} bytes", text.len());
            0
        }
        Err(err) => {
            let _ = writeln!(diag, "{tool}: error: failed to write output: {err}");
            1
        }
    }
}
