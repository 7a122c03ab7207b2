use crate::api::pretty_body;
use crate::error::Result;
use colored::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// The body as it should be shown. Unless `pretty` is set, the bytes are
/// passed through untouched.
pub fn render_body(body: &[u8], pretty: bool) -> Vec<u8> {
    if pretty {
        match std::str::from_utf8(body) {
            Ok(text) => pretty_body(text).into_bytes(),
            Err(_) => body.to_vec(),
        }
    } else {
        body.to_vec()
    }
}

/// Print the response body to stdout
pub fn display_body(body: &[u8], pretty: bool) -> Result<()> {
    let rendered = render_body(body, pretty);
    let mut stdout = io::stdout().lock();
    stdout.write_all(&rendered)?;
    if !rendered.ends_with(b"\n") {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

/// Save the response body. JSON bodies are written indented, anything else
/// byte for byte.
pub fn write_body(path: &Path, body: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_body(body, true))?;
    Ok(())
}

pub fn log_verbose(verbose: bool, message: &str) {
    if verbose {
        eprintln!("{}", format!("[oxyshop] {}", message).dimmed());
    }
}

pub fn display_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}
