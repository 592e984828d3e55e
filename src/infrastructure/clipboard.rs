use std::io::Write;
use std::process::{Command, Stdio};

use crate::log;

type Tool = (&'static str, &'static [&'static str]);

const NO_ARGS: &[&str] = &[];

/// Clipboard commands to try in order for the current platform.
#[cfg(target_os = "macos")]
fn candidates() -> Vec<Tool> {
    vec![("pbcopy", NO_ARGS)]
}

#[cfg(target_os = "windows")]
fn candidates() -> Vec<Tool> {
    vec![("clip", NO_ARGS)]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn candidates() -> Vec<Tool> {
    let mut tools: Vec<Tool> = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        tools.push(("wl-copy", NO_ARGS));
    }
    tools.push(("xclip", &["-selection", "clipboard"]));
    tools.push(("xsel", &["--clipboard", "--input"]));
    tools
}

/// Pipes `text` into the first clipboard tool that accepts it and returns its
/// name.
pub fn copy_to_clipboard(text: &str) -> Result<&'static str, String> {
    let mut last_error = String::from("no clipboard tool available");
    for (program, args) in candidates() {
        match pipe_into(program, args, text) {
            Ok(()) => {
                log!("Report copied with {}", program);
                return Ok(program);
            }
            Err(error) => {
                log!("Clipboard tool {} failed: {}", program, error);
                last_error = format!("{program}: {error}");
            }
        }
    }
    Err(last_error)
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<(), String> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| e.to_string())?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(|e| e.to_string())?;
    }

    let status = child.wait().map_err(|e| e.to_string())?;
    if status.success() {
        Ok(())
    } else {
        Err(format!("exited with {status}"))
    }
}
