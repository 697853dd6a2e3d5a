// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use chrono::NaiveDate;
use log::{debug, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use mdsplit::app_config::{self, Config};
use mdsplit::app_controller::{Controller, SplitOptions};
use mdsplit::splitter::assembler::DATE_FORMAT;

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_PATH: &str = "mdsplit.json";

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a bilingual document into primary and secondary editions
    Split {
        /// Bilingual markdown document
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path of the English edition
        #[arg(value_name = "PRIMARY_OUT")]
        primary_output: PathBuf,

        /// Output path of the secondary-language edition
        #[arg(value_name = "SECONDARY_OUT")]
        secondary_output: PathBuf,

        /// Link to the secondary edition written into the English edition
        #[arg(long)]
        secondary_link: Option<String>,

        /// Link to the English edition written into the secondary edition
        #[arg(long)]
        primary_link: Option<String>,

        /// Date recorded as last_synced (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Report version and language line counts of a document
    Inspect {
        /// Bilingual markdown document
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Split every markdown file of a directory into a locales tree
    Batch {
        /// Directory with bilingual documents
        #[arg(value_name = "SOURCE_DIR")]
        source_dir: PathBuf,

        /// Root directory receiving both editions
        #[arg(value_name = "OUTPUT_ROOT")]
        output_root: PathBuf,

        /// Force overwrite of existing output files
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for mdsplit
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// mdsplit - bilingual markdown splitter
///
/// Splits documents written in mixed English / Traditional Chinese markdown
/// into one English and one Chinese edition with cross-links and
/// synchronization metadata.
#[derive(Parser, Debug)]
#[command(name = "mdsplit")]
#[command(version)]
#[command(about = "Split bilingual markdown into monolingual editions")]
#[command(long_about = "mdsplit splits a bilingual markdown document into an English edition and a
secondary-language edition, keeping code blocks, tables and lists intact.

EXAMPLES:
    mdsplit split core/guide.md core/guide.md locales/zh-TW/core/guide.md
    mdsplit inspect core/guide.md
    mdsplit inspect --json core/guide.md
    mdsplit batch bilingual/ docs/          # docs/... and docs/locales/zh-TW/...
    mdsplit completions bash > mdsplit.bash

CONFIGURATION:
    Configuration is read from mdsplit.json in the working directory when
    present, or from the file given with --config.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long = "config", global = true)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
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
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let emoji = Self::get_emoji_for_level(record.level());
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the configuration says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "mdsplit", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(level) = &cli.log_level {
        let level: app_config::LogLevel = level.clone().into();
        log::set_max_level(level_filter(&level));
    }

    let mut config = load_config(cli.config_path.as_deref())?;
    match &cli.log_level {
        Some(level) => config.log_level = level.clone().into(),
        None => log::set_max_level(level_filter(&config.log_level)),
    }

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Split { input, primary_output, secondary_output, secondary_link, primary_link, date } => {
            let last_synced = date
                .as_deref()
                .map(|d| NaiveDate::parse_from_str(d, DATE_FORMAT))
                .transpose()
                .context("Invalid --date, expected YYYY-MM-DD")?;

            let options = SplitOptions { secondary_link, primary_link, last_synced };
            let report = controller.split_file(&input, &primary_output, &secondary_output, &options)?;

            println!("Created: {} ({} chars)", report.primary_path.display(), report.primary_chars);
            println!("Created: {} ({} chars)", report.secondary_path.display(), report.secondary_chars);
        }
        Commands::Inspect { input, json } => {
            let stats = controller.inspect_file(&input)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Version found: {}", stats.version);
                println!("Total lines: {}", stats.total_lines);
                println!("Chinese lines: {}", stats.secondary_lines);
                println!("English lines: {}", stats.primary_lines);
            }
        }
        Commands::Batch { source_dir, output_root, force } => {
            let summary = controller.run_batch(&source_dir, &output_root, force)?;
            if summary.failed > 0 {
                return Err(anyhow!(
                    "{} of {} files failed",
                    summary.failed,
                    summary.processed + summary.skipped + summary.failed
                ));
            }
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

// @loads: Configuration from an explicit path, the default file, or defaults
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        // The parse error already names the file
        Some(path) => Ok(Config::from_file(path)?),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Ok(Config::from_file(DEFAULT_CONFIG_PATH)?),
        None => {
            debug!("No config file, using defaults");
            Ok(Config::default())
        }
    }
}
