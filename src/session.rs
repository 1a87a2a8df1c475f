use crate::clipboard::Clipboard;
use crate::controller::{CopyTarget, ViewController};
use crate::error::{AppError, Result};
use crate::form::Field;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

const HELP: &str = "\
Commands:
  set <field> <value>   change a field (value may contain spaces)
  clear <field>         empty a field so it falls back to its default
  reset                 restore every field to its default
  show                  print the JSON preview and dashboard
  commands              print the automation commands
  download [dir]        write config.json
  copy <target>         copy config, primary, dry-run or topic
  fields                list field names
  help                  show this message
  quit                  leave the session";

/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set(Field, String),
    Clear(Field),
    Reset,
    Show,
    Commands,
    Download(Option<PathBuf>),
    Copy(CopyTarget),
    Fields,
    Help,
    Quit,
}

impl std::str::FromStr for SessionCommand {
    type Err = AppError;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb.to_lowercase().as_str() {
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(SessionCommand::Set(field.parse()?, value.trim().to_string()))
            }
            "clear" => Ok(SessionCommand::Clear(rest.parse()?)),
            "reset" => Ok(SessionCommand::Reset),
            "show" | "preview" => Ok(SessionCommand::Show),
            "commands" => Ok(SessionCommand::Commands),
            "download" | "write" => Ok(SessionCommand::Download(
                (!rest.is_empty()).then(|| PathBuf::from(rest)),
            )),
            "copy" => Ok(SessionCommand::Copy(rest.parse()?)),
            "fields" => Ok(SessionCommand::Fields),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            _ => Err(AppError::Custom(format!(
                "Unknown command: {}. Type 'help' for a list",
                verb
            ))),
        }
    }
}

/// Runs a line-oriented editing session until `quit` or end of input.
///
/// Each line is one form event. Confirmation timers are advanced before
/// every command, so a copy button reverts once its interval has passed by
/// the time the next line arrives. Mistyped commands are reported to
/// `output` and the session carries on.
pub async fn run_session<R, W, C>(
    controller: &mut ViewController,
    clipboard: &C,
    download_dir: &Path,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: Clipboard,
{
    let mut lines = input.lines();
    output.write_all(b"Type 'help' for commands.\n").await?;

    while let Some(line) = lines.next_line().await? {
        controller.tick(Instant::now());
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<SessionCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!("Rejected session input: {}", e);
                output.write_all(format!("error: {}\n", e).as_bytes()).await?;
                continue;
            }
        };
        debug!("Session command: {:?}", command);

        let reply = match command {
            SessionCommand::Set(field, value) => {
                controller.input(field, value)?;
                format!("{} = {}\n{}\n", field, controller.form().get(field), controller.last_updated())
            }
            SessionCommand::Clear(field) => {
                controller.input(field, "")?;
                format!("{} cleared\n{}\n", field, controller.last_updated())
            }
            SessionCommand::Reset => {
                controller.reset()?;
                format!("Form reset\n{}\n", controller.last_updated())
            }
            SessionCommand::Show => format!(
                "{}\n\n{}\n{}\n",
                controller.preview(),
                controller.dashboard(),
                controller.last_updated()
            ),
            SessionCommand::Commands => {
                let commands = controller.commands();
                format!(
                    "primary: {}\ndry-run: {}\ntopic:   {}\n",
                    commands.primary, commands.dry_run, commands.topic_example
                )
            }
            SessionCommand::Download(dir) => {
                let dir = dir.as_deref().unwrap_or(download_dir);
                match controller.download(dir) {
                    Ok(path) => format!("Wrote {}\n", path.display()),
                    Err(e) => format!("error: {}\n", e),
                }
            }
            SessionCommand::Copy(target) => {
                controller.copy(target, clipboard, Instant::now()).await;
                let label = controller.button(target).map(|b| b.label()).unwrap_or_default();
                format!("[{}]\n", label)
            }
            SessionCommand::Fields => {
                let names: Vec<&str> = Field::ALL.iter().map(|f| f.key()).collect();
                format!("{}\n", names.join("\n"))
            }
            SessionCommand::Help => format!("{}\n", HELP),
            SessionCommand::Quit => break,
        };

        output.write_all(reply.as_bytes()).await?;
    }

    output.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::form::FormFields;
    use crate::model::{Configuration, PrivacyStatus};
    use tempfile::TempDir;

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        async fn write_text(&self, _text: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn parses_set_with_spaces_in_value() {
        let command: SessionCommand = "set video_title_template  {topic} - Late Show ".parse().unwrap();
        assert_eq!(
            command,
            SessionCommand::Set(Field::VideoTitleTemplate, "{topic} - Late Show".to_string())
        );
    }

    #[test]
    fn parses_remaining_commands() {
        assert_eq!("clear tags".parse::<SessionCommand>().unwrap(), SessionCommand::Clear(Field::Tags));
        assert_eq!("download".parse::<SessionCommand>().unwrap(), SessionCommand::Download(None));
        assert_eq!(
            "download out/cfg".parse::<SessionCommand>().unwrap(),
            SessionCommand::Download(Some(PathBuf::from("out/cfg")))
        );
        assert_eq!(
            "copy json".parse::<SessionCommand>().unwrap(),
            SessionCommand::Copy(CopyTarget::Config)
        );
        assert_eq!("QUIT".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
        assert!("set colour red".parse::<SessionCommand>().is_err());
        assert!("dance".parse::<SessionCommand>().is_err());
    }

    #[tokio::test]
    async fn session_edits_and_downloads() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let mut controller = ViewController::new(FormFields::default(), &Config::default())?;
        let script = "set videos_per_day 6\nset youtube_privacy_status public\nbogus\ncopy primary\ndownload\nquit\nset videos_per_day 9\n";
        let mut output = Vec::new();

        run_session(&mut controller, &NullClipboard, temp_dir.path(), script.as_bytes(), &mut output).await?;

        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("videos_per_day = 6"));
        assert!(transcript.contains("error: Unknown command: bogus"));
        assert!(transcript.contains("[Copied!]"));
        assert!(transcript.contains("Wrote "));
        assert_eq!(controller.snapshot().videos_per_day, 6);
        assert_eq!(controller.snapshot().youtube_privacy_status, PrivacyStatus::Public);

        let written = Configuration::load(&temp_dir.path().join("config.json"))?;
        assert_eq!(&written, controller.snapshot());
        Ok(())
    }
}
