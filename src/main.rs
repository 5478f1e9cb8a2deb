// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::PathBuf;

use signflow::app_config::{self, Config, TranslationProvider};
use signflow::app_controller::{Controller, OutputFormat};
use signflow::file_utils::FileManager;

/// CLI Wrapper for TranslationProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliTranslationProvider {
    None,
    Libre,
    Anthropic,
}

impl From<CliTranslationProvider> for TranslationProvider {
    fn from(cli_provider: CliTranslationProvider) -> Self {
        match cli_provider {
            CliTranslationProvider::None => TranslationProvider::None,
            CliTranslationProvider::Libre => TranslationProvider::LibreTranslate,
            CliTranslationProvider::Anthropic => TranslationProvider::Anthropic,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Options shared by every command that needs a catalog
#[derive(clap::Args, Debug)]
struct CatalogArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Catalog directory (overrides the config file)
    #[arg(short = 'd', long)]
    catalog_dir: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text into a sign video sequence
    Translate {
        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: String,

        /// Language the text is written in (defaults to the working language)
        #[arg(short, long)]
        language: Option<String>,

        /// Translation provider to use
        #[arg(short, long, value_enum)]
        provider: Option<CliTranslationProvider>,

        /// Print the full result as JSON instead of the playlist
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Show catalog categories and entry counts
    Catalog {
        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// Generate shell completions for signflow
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// signflow - text to sign-language video sequences
///
/// Turns free-form text into an ordered playlist of sign-language video
/// clips, fingerspelling names and synthesizing references for words the
/// catalog does not hold.
#[derive(Parser, Debug)]
#[command(name = "signflow")]
#[command(version)]
#[command(about = "Text to sign-language video sequences")]
#[command(long_about = "signflow resolves text against a sign catalog and prints a playable video sequence.

EXAMPLES:
    signflow translate \"hello world\"                 # Playlist, one URL per line
    signflow translate \"my name is Ana\" --json       # Full result as JSON
    signflow translate \"hola amigo\" -l es -p libre   # Translate from Spanish first
    signflow catalog -d ./catalog                    # List catalog categories
    signflow completions bash > signflow.bash        # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(LevelFilter::Trace)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {:<5} {}\x1B[0m", color, now, record.level(), record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Info until the config says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "signflow", &mut std::io::stdout());
            Ok(())
        }
        Commands::Translate {
            text,
            language,
            provider,
            json,
            catalog,
        } => {
            let mut config = load_config(&catalog)?;
            if let Some(provider) = provider {
                config.translation.provider = provider.into();
            }
            config.validate().context("Configuration validation failed")?;

            let controller = Controller::with_config(config)?;
            let result = controller.translate(&text, language.as_deref()).await;

            let format = if json { OutputFormat::Json } else { OutputFormat::Playlist };
            println!("{}", Controller::render(&result, format)?);
            info!(
                "{} sign(s), {} playable, {} missing",
                result.signs.len(),
                result.playlist.len(),
                result.missing_words.len()
            );
            Ok(())
        }
        Commands::Catalog { catalog } => {
            let config = load_config(&catalog)?;
            config.validate().context("Configuration validation failed")?;

            let controller = Controller::with_config(config)?;
            let counts = controller.category_counts();
            if counts.is_empty() {
                return Err(anyhow!("Catalog is empty"));
            }
            for (category, count) in counts {
                let name = if category.is_empty() { "(uncategorized)" } else { category.as_str() };
                println!("{:<24} {}", name, count);
            }
            Ok(())
        }
    }
}

/// Load the config file, creating a default one when missing, then apply CLI overrides
fn load_config(options: &CatalogArgs) -> Result<Config> {
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let config_path = &options.config_path;
    let mut config = if FileManager::file_exists(config_path) {
        let json = FileManager::read_to_string(config_path)?;
        serde_json::from_str(&json).context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        let config_json =
            serde_json::to_string_pretty(&config).context("Failed to serialize default config to JSON")?;
        FileManager::write_to_file(config_path, &config_json)?;
        config
    };

    if let Some(dir) = &options.catalog_dir {
        config.catalog.data_dir = Some(dir.clone());
    }

    match &options.log_level {
        Some(log_level) => config.log_level = log_level.clone().into(),
        None => log::set_max_level(level_filter(&config.log_level)),
    }

    Ok(config)
}
