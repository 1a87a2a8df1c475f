use crate::error::AppError;
use crate::model::{Configuration, CONFIG_FILE_NAME, DEFAULTS};
use serde::Serialize;

const TOOL_INVOCATION: &str = "python -m automation.main";

const DRY_RUN_FLAG: &str = "--dry-run";
const EXAMPLE_TOPIC_FLAG: &str = "--topic \"Space Tourism\"";

/// Ready-to-paste command lines for the automation tool.
///
/// These are display strings only; nothing here runs the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandSet {
    pub primary: String,
    pub dry_run: String,
    pub topic_example: String,
}

impl CommandSet {
    pub fn get(&self, kind: CommandKind) -> &str {
        match kind {
            CommandKind::Primary => &self.primary,
            CommandKind::DryRun => &self.dry_run,
            CommandKind::TopicExample => &self.topic_example,
        }
    }
}

/// Which of the three commands to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Primary,
    DryRun,
    TopicExample,
}

impl CommandKind {
    pub const ALL: [CommandKind; 3] = [
        CommandKind::Primary,
        CommandKind::DryRun,
        CommandKind::TopicExample,
    ];
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandKind::Primary => write!(f, "primary"),
            CommandKind::DryRun => write!(f, "dry-run"),
            CommandKind::TopicExample => write!(f, "topic"),
        }
    }
}

impl std::str::FromStr for CommandKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "primary" => Ok(CommandKind::Primary),
            "dry-run" | "dry_run" => Ok(CommandKind::DryRun),
            "topic" | "topic-example" | "topic_example" => Ok(CommandKind::TopicExample),
            _ => Err(AppError::UnknownTarget(s.to_string())),
        }
    }
}

/// Derives the command lines for a snapshot.
///
/// The primary command only carries `--count` when the daily count differs
/// from the default, since the tool reads the count from the file anyway.
///
/// # Examples
///
/// ```
/// use shorts_config::{format_commands, Configuration};
///
/// let mut config = Configuration::default();
/// config.videos_per_day = 6;
/// assert!(format_commands(&config).primary.ends_with("--count 6"));
/// ```
pub fn format_commands(config: &Configuration) -> CommandSet {
    let base = base_command();
    let primary = if config.videos_per_day != DEFAULTS.videos_per_day {
        format!("{} --count {}", base, config.videos_per_day)
    } else {
        base.clone()
    };

    CommandSet {
        primary,
        dry_run: format!("{} {}", base, DRY_RUN_FLAG),
        topic_example: format!("{} {}", base, EXAMPLE_TOPIC_FLAG),
    }
}

/// Invocation of the automation tool against the written config file.
pub fn base_command() -> String {
    format!("{} --config {}", TOOL_INVOCATION, CONFIG_FILE_NAME)
}
