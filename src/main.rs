use clap::{Args, Parser, Subcommand};
use shorts_config::error::Result;
use shorts_config::{
    run_session, AppError, Config, Configuration, CopyTarget, Field, FormFields, ViewController,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "shorts-config")]
#[command(about = "Build config.json for the cartoon-shorts automation tool")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON file with builder settings (download dir, clipboard command, ...)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the JSON preview, dashboard and commands
    Preview {
        #[command(flatten)]
        form: FormArgs,
    },

    /// Write config.json
    Write {
        #[command(flatten)]
        form: FormArgs,

        /// Directory to write into (defaults to the configured download dir)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Copy the JSON or a command to the clipboard: config, primary, dry-run or topic
    Copy {
        target: String,

        #[command(flatten)]
        form: FormArgs,
    },

    /// Edit the form line by line
    Interactive {
        /// Start from an existing config.json
        #[arg(long)]
        from: Option<PathBuf>,
    },
}

/// Form field values. Omitted fields keep their default (or `--from`) text;
/// fields given as empty strings fall back to the default value.
#[derive(Args)]
struct FormArgs {
    /// Start from an existing config.json
    #[arg(long)]
    from: Option<PathBuf>,

    #[arg(long)]
    trending_region: Option<String>,

    #[arg(long)]
    videos_per_day: Option<String>,

    #[arg(long)]
    output_dir: Option<String>,

    #[arg(long)]
    assets_dir: Option<String>,

    #[arg(long)]
    youtube_category_id: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    tags: Option<String>,

    /// Title template; {topic} is filled in by the automation tool
    #[arg(long)]
    video_title_template: Option<String>,

    /// Description template; {topic} and {script} are filled in by the automation tool
    #[arg(long)]
    video_description_template: Option<String>,

    /// private, unlisted or public
    #[arg(long)]
    youtube_privacy_status: Option<String>,

    #[arg(long)]
    youtube_client_secrets_file: Option<String>,

    #[arg(long)]
    youtube_token_file: Option<String>,

    #[arg(long)]
    background_music_file: Option<String>,
}

impl FormArgs {
    fn into_form(self) -> Result<FormFields> {
        let mut form = initial_form(self.from.as_ref())?;
        let overrides = [
            (Field::TrendingRegion, self.trending_region),
            (Field::VideosPerDay, self.videos_per_day),
            (Field::OutputDir, self.output_dir),
            (Field::AssetsDir, self.assets_dir),
            (Field::YoutubeCategoryId, self.youtube_category_id),
            (Field::Tags, self.tags),
            (Field::VideoTitleTemplate, self.video_title_template),
            (Field::VideoDescriptionTemplate, self.video_description_template),
            (Field::YoutubePrivacyStatus, self.youtube_privacy_status),
            (Field::YoutubeClientSecretsFile, self.youtube_client_secrets_file),
            (Field::YoutubeTokenFile, self.youtube_token_file),
            (Field::BackgroundMusicFile, self.background_music_file),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                form.set(field, value);
            }
        }
        Ok(form)
    }
}

fn initial_form(from: Option<&PathBuf>) -> Result<FormFields> {
    match from {
        Some(path) => {
            info!("Starting from {}", path.display());
            Ok(FormFields::from_config(&Configuration::load(path)?))
        }
        None => Ok(FormFields::default()),
    }
}

/// Main entry point for the application.
///
/// # Steps
/// 1. Parses the command line
/// 2. Initializes logging on stderr so stdout only carries output
/// 3. Loads builder settings
/// 4. Runs the selected command
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Custom(e.to_string()))?;

    if let Err(e) = run(cli).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.settings {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Preview { form } => {
            let controller = ViewController::new(form.into_form()?, &config)?;
            let commands = controller.commands();
            println!("{}\n", controller.preview());
            println!("{}\n", controller.dashboard());
            println!("primary: {}", commands.primary);
            println!("dry-run: {}", commands.dry_run);
            println!("topic:   {}", commands.topic_example);
            println!("\n{}", controller.last_updated());
        }
        Commands::Write { form, dir } => {
            let controller = ViewController::new(form.into_form()?, &config)?;
            let dir = dir.unwrap_or_else(|| config.download_dir.clone());
            let path = controller.download(&dir)?;
            println!("Wrote {}", path.display());
            println!("Run: {}", controller.commands().primary);
        }
        Commands::Copy { target, form } => {
            let target: CopyTarget = target.parse()?;
            let mut controller = ViewController::new(form.into_form()?, &config)?;
            let clipboard = config.clipboard();
            controller.copy(target, &clipboard, Instant::now()).await;
            if let Some(button) = controller.button(target) {
                println!("[{}]", button.label());
            }
        }
        Commands::Interactive { from } => {
            let mut controller = ViewController::new(initial_form(from.as_ref())?, &config)?;
            let clipboard = config.clipboard();
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            let mut output = tokio::io::stdout();
            run_session(&mut controller, &clipboard, &config.download_dir, input, &mut output)
                .await?;
        }
    }

    Ok(())
}
