use crate::clipboard::Clipboard;
use crate::commands::{format_commands, CommandKind, CommandSet};
use crate::config::Config;
use crate::copy_button::CopyButton;
use crate::dashboard::{present, DashboardView};
use crate::error::{AppError, Result};
use crate::form::{Field, FormFields};
use crate::generator::generate;
use crate::model::{Configuration, CONFIG_FILE_NAME};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;
use tracing::{debug, error, info, instrument};

/// Something the user can copy to the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Config,
    Command(CommandKind),
}

impl CopyTarget {
    pub const ALL: [CopyTarget; 4] = [
        CopyTarget::Config,
        CopyTarget::Command(CommandKind::Primary),
        CopyTarget::Command(CommandKind::DryRun),
        CopyTarget::Command(CommandKind::TopicExample),
    ];

    /// Label of the button bound to this target.
    pub fn label(&self) -> &'static str {
        match self {
            CopyTarget::Config => "Copy JSON",
            CopyTarget::Command(CommandKind::Primary) => "Copy command",
            CopyTarget::Command(CommandKind::DryRun) => "Copy dry run",
            CopyTarget::Command(CommandKind::TopicExample) => "Copy topic example",
        }
    }
}

impl std::fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CopyTarget::Config => write!(f, "config"),
            CopyTarget::Command(kind) => write!(f, "{}", kind),
        }
    }
}

impl std::str::FromStr for CopyTarget {
    type Err = AppError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "config" | "json" => Ok(CopyTarget::Config),
            _ => s.parse::<CommandKind>().map(CopyTarget::Command),
        }
    }
}

/// Keeps every view of the form in sync with its current input.
///
/// Each change regenerates the [`Configuration`] snapshot and rebuilds the
/// JSON preview, dashboard, command lines and "last updated" label from it.
/// The controller also owns the side effects: writing `config.json` and
/// copying text with per-button confirmation.
pub struct ViewController {
    form: FormFields,
    snapshot: Configuration,
    preview: String,
    dashboard: DashboardView,
    commands: CommandSet,
    last_updated: String,
    buttons: HashMap<CopyTarget, CopyButton>,
}

impl ViewController {
    /// Creates a controller over `form` and renders the first snapshot.
    ///
    /// # Errors
    /// * If the snapshot cannot be rendered as JSON
    pub fn new(form: FormFields, config: &Config) -> Result<Self> {
        let snapshot = Configuration::default();
        let buttons = CopyTarget::ALL
            .into_iter()
            .map(|target| {
                let button = CopyButton::with_interval(target.label(), config.copy_confirmation());
                (target, button)
            })
            .collect();

        let mut controller = Self {
            form,
            dashboard: present(&snapshot),
            commands: format_commands(&snapshot),
            snapshot,
            preview: String::new(),
            last_updated: String::new(),
            buttons,
        };
        controller.refresh()?;
        Ok(controller)
    }

    /// Regenerates the snapshot and every derived view.
    fn refresh(&mut self) -> Result<()> {
        let snapshot = generate(&self.form);
        self.preview = snapshot.to_pretty_json()?;
        self.dashboard = present(&snapshot);
        self.commands = format_commands(&snapshot);
        self.snapshot = snapshot;
        self.last_updated = format!("Updated {}", chrono::Local::now().format("%H:%M:%S"));
        debug!("Preview refreshed ({} bytes)", self.preview.len());
        Ok(())
    }

    /// Handles a field edit.
    pub fn input(&mut self, field: Field, value: impl Into<String>) -> Result<()> {
        self.form.set(field, value);
        self.refresh()
    }

    /// Handles an explicit submit of the current form.
    pub fn submit(&mut self) -> Result<()> {
        self.refresh()
    }

    /// Restores every field to its default text.
    pub fn reset(&mut self) -> Result<()> {
        info!("Resetting form to defaults");
        self.form = FormFields::default();
        self.refresh()
    }

    /// Writes the current snapshot to `<dir>/config.json`.
    ///
    /// The content goes to a temporary file in `dir` that is renamed into
    /// place, so the handle is released before this returns and a failed
    /// write never leaves a truncated `config.json` behind.
    ///
    /// # Errors
    /// * If `dir` cannot be created
    /// * If the file cannot be written or moved into place
    #[instrument(skip(self))]
    pub fn download(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let target = dir.join(CONFIG_FILE_NAME);

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(self.snapshot.to_pretty_json()?.as_bytes())?;
        file.flush()?;
        file.persist(&target)?;

        info!("Configuration written to {}", target.display());
        Ok(target)
    }

    /// Copies the text behind `target` to the clipboard.
    ///
    /// On success the target's button starts its confirmation. A failed copy
    /// is only logged; the button stays as it was. Returns whether the copy
    /// went through.
    pub async fn copy(&mut self, target: CopyTarget, clipboard: &impl Clipboard, now: Instant) -> bool {
        let text = self.text_for(target).to_string();
        match clipboard.write_text(&text).await {
            Ok(()) => {
                if let Some(button) = self.buttons.get_mut(&target) {
                    button.confirm(now);
                }
                true
            }
            Err(e) => {
                error!("Clipboard copy failed: {}", e);
                false
            }
        }
    }

    /// Advances every button's confirmation timer.
    pub fn tick(&mut self, now: Instant) {
        for button in self.buttons.values_mut() {
            button.tick(now);
        }
    }

    pub fn text_for(&self, target: CopyTarget) -> &str {
        match target {
            CopyTarget::Config => &self.preview,
            CopyTarget::Command(kind) => self.commands.get(kind),
        }
    }

    pub fn button(&self, target: CopyTarget) -> Option<&CopyButton> {
        self.buttons.get(&target)
    }

    pub fn form(&self) -> &FormFields {
        &self.form
    }

    pub fn snapshot(&self) -> &Configuration {
        &self.snapshot
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn dashboard(&self) -> &DashboardView {
        &self.dashboard
    }

    pub fn commands(&self) -> &CommandSet {
        &self.commands
    }

    pub fn last_updated(&self) -> &str {
        &self.last_updated
    }
}
