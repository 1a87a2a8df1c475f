use crate::error::{AppError, Result};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Destination for copied text.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard backed by the platform's command-line utility.
///
/// The text is piped to the program's stdin: `pbcopy` on macOS, `clip` on
/// Windows and `wl-copy` or `xclip` elsewhere depending on the session.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    program: String,
    args: Vec<String>,
}

impl SystemClipboard {
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command(["pbcopy"])
        } else if cfg!(windows) {
            Self::with_command(["clip"])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::with_command(["wl-copy"])
        } else {
            Self::with_command(["xclip", "-selection", "clipboard"])
        }
    }

    /// Uses an explicit program and arguments, e.g. `["xsel", "-ib"]`.
    ///
    /// An empty command falls back to [`detect`](SystemClipboard::detect).
    pub fn with_command<I, S>(command: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parts = command.into_iter().map(Into::into);
        match parts.next() {
            Some(program) => Self {
                program,
                args: parts.collect(),
            },
            None => Self::detect(),
        }
    }
}

impl Clipboard for SystemClipboard {
    #[instrument(skip(self, text), fields(program = %self.program, bytes = text.len()))]
    async fn write_text(&self, text: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AppError::Clipboard(format!("failed to run {}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            let written: std::io::Result<()> = async {
                stdin.write_all(text.as_bytes()).await?;
                stdin.shutdown().await
            }
            .await;
            drop(stdin);

            if let Err(e) = written {
                // Reap the child before returning.
                if child.kill().await.is_err() {
                    let _ = child.wait().await;
                }
                return Err(AppError::Clipboard(format!(
                    "failed to write to {}: {}",
                    self.program, e
                )));
            }
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(AppError::Clipboard(format!(
                "{} exited with {}",
                self.program, status
            )));
        }

        debug!("Copied {} bytes to clipboard", text.len());
        Ok(())
    }
}
