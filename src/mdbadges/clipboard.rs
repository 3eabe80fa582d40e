use crate::error::{BadgeError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard by piping it into the platform tool.
/// - macOS: pbcopy
/// - Linux: wl-copy, then xclip, then xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let tools = clipboard_tools();
    if tools.is_empty() {
        return Err(BadgeError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ));
    }

    let mut last_error = None;
    for &(program, args) in tools {
        match pipe_to(program, args, text) {
            Ok(()) => {
                tracing::debug!(program, "copied to clipboard");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!(program, error = %e, "clipboard tool failed");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| BadgeError::Clipboard("no clipboard tool".to_string())))
}

type Tool = (&'static str, &'static [&'static str]);

const MACOS_TOOLS: &[Tool] = &[("pbcopy", &[])];
const WINDOWS_TOOLS: &[Tool] = &[("clip", &[])];
const LINUX_TOOLS: &[Tool] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

fn clipboard_tools() -> &'static [Tool] {
    if cfg!(target_os = "macos") {
        MACOS_TOOLS
    } else if cfg!(target_os = "windows") {
        WINDOWS_TOOLS
    } else if cfg!(target_os = "linux") {
        LINUX_TOOLS
    } else {
        &[]
    }
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| BadgeError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| BadgeError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| BadgeError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(BadgeError::Clipboard(format!("{} exited with error", program)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_a_clipboard_error() {
        let err = pipe_to("mdbadges-no-such-clipboard-tool", &[], "text").unwrap_err();
        assert!(matches!(err, BadgeError::Clipboard(msg) if msg.contains("Failed to spawn")));
    }

    #[test]
    fn supported_platforms_have_tools() {
        if cfg!(any(target_os = "macos", target_os = "linux", target_os = "windows")) {
            assert!(!clipboard_tools().is_empty());
        }
    }
}
