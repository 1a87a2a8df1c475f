use crate::clipboard::SystemClipboard;
use crate::copy_button::DEFAULT_CONFIRMATION;
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for the builder itself.
///
/// These control which directory the generated file is written to and how
/// copying behaves. The file name is always
/// [`CONFIG_FILE_NAME`](crate::model::CONFIG_FILE_NAME). None of this is
/// part of the [`Configuration`](crate::Configuration) the builder produces
/// for the automation tool.
///
/// # Examples
///
/// ```
/// use shorts_config::Config;
///
/// let config = Config::default();
/// assert!(config.clipboard_command.is_none());
/// assert_eq!(config.copy_confirmation_ms, 1600);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub download_dir: PathBuf,
    pub copy_confirmation_ms: u64,
    pub clipboard_command: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("."),
            copy_confirmation_ms: DEFAULT_CONFIRMATION.as_millis() as u64,
            clipboard_command: None,
        }
    }
}

impl Config {
    /// Reads settings from a JSON file; absent keys keep their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn copy_confirmation(&self) -> Duration {
        Duration::from_millis(self.copy_confirmation_ms)
    }

    pub fn clipboard(&self) -> SystemClipboard {
        match &self.clipboard_command {
            Some(command) => SystemClipboard::with_command(command.iter().cloned()),
            None => SystemClipboard::detect(),
        }
    }
}
