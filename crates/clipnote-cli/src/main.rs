use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use clipnote_cli::{OutputFormat, commands};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clipnote")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Clip video playback positions and chapters into Obsidian notes",
    long_about = "Clipnote snapshots a video watch page (playback position, title, description, \
                  chapter markers), extracts a chapter list, renders a Markdown note from your \
                  template, and builds the obsidian://new handoff URL."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to ~/.clipnote/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Snapshot a watch page into a capture file via Chrome
    Capture {
        /// Watch page URL to open
        #[arg(value_name = "URL")]
        url: String,

        /// Write the capture JSON to this file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to the Chrome binary
        #[arg(long)]
        chrome_path: Option<PathBuf>,

        /// Named persistent Chrome profile (temporary when omitted)
        #[arg(long)]
        profile: Option<String>,

        /// Settle delay after expanding the description, in milliseconds
        #[arg(long, default_value_t = clipnote_browser::DEFAULT_SETTLE.as_millis() as u64)]
        settle_ms: u64,
    },

    /// Extract the chapter list from a capture file
    Chapters {
        /// Path to the capture file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
        format: OutputFormat,

        /// Drop entries with malformed timecodes instead of defaulting them to 0:00
        #[arg(long)]
        drop_malformed: bool,

        /// Write the chapter list to this file, always as JSON
        /// (--format shapes terminal output only)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the note body for a capture file
    Render {
        /// Path to the capture file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Template override (otherwise from settings)
        #[arg(long)]
        template: Option<String>,

        /// Tags override (otherwise from settings)
        #[arg(long)]
        tags: Option<String>,

        /// Title prefix override for the derived filename (otherwise from settings)
        #[arg(long)]
        title_prefix: Option<String>,

        /// Drop entries with malformed timecodes instead of defaulting them to 0:00
        #[arg(long)]
        drop_malformed: bool,

        /// Write the note body to this file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build the obsidian:// handoff URL for a capture file
    Clip {
        /// Path to the capture file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Vault to target, by position in the settings file
        #[arg(long)]
        vault_index: Option<usize>,

        /// Drop entries with malformed timecodes instead of defaulting them to 0:00
        #[arg(long)]
        drop_malformed: bool,

        /// Also print the rendered note body
        #[arg(long)]
        show_content: bool,

        /// Write the note body to this file as well
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or initialize the settings file
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Capture {
            url,
            output,
            chrome_path,
            profile,
            settle_ms,
        } => commands::capture::execute(&url, output, chrome_path, profile, settle_ms),
        Commands::Chapters {
            file,
            format,
            drop_malformed,
            output,
        } => commands::chapters::execute(&file, format, drop_malformed, output),
        Commands::Render {
            file,
            template,
            tags,
            title_prefix,
            drop_malformed,
            output,
        } => commands::render::execute(
            &file,
            cli.config,
            template,
            tags,
            title_prefix,
            drop_malformed,
            output,
        ),
        Commands::Clip {
            file,
            vault_index,
            drop_malformed,
            show_content,
            output,
        } => commands::clip::execute(
            &file,
            cli.config,
            vault_index,
            drop_malformed,
            show_content,
            output,
        ),
        Commands::Config { action } => commands::config::execute(action, cli.config),
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("clipnote_cli=debug,clipnote_core=debug,clipnote_browser=debug")
    } else {
        EnvFilter::new("clipnote_cli=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
