use anyext::{
    ConfigLoader, ExtensionRegistry, FileConfigStore, JournalRegistrar, Plugin, SettingsSurface,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

type Surface = SettingsSurface<FileConfigStore, JournalRegistrar<tokio::io::Stdout>>;

/// Register arbitrary file extensions as Markdown
///
/// Registration records are written to stdout as JSON lines, one per batch.
#[derive(Parser, Debug)]
#[command(name = "anyext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Application config file (TOML)
    ///
    /// If not specified, looks for:
    /// 1. ./.anyext.toml
    /// 2. $ANYEXT_CONFIG
    /// 3. ~/.config/anyext/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File holding the persisted extension list
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// View type extensions are registered as
    #[arg(short, long)]
    kind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the persisted list and the registered extensions
    Show,

    /// Save a new extension list and register what it adds
    Set {
        /// Comma-delimited extensions without dots (e.g. "txt,mdx,rmd")
        raw: String,
    },

    /// Edit and save repeatedly in one process, reading commands from stdin
    ///
    /// Commands: `edit <list>`, `save`, `show`, `quit`
    Session,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        // Escape codes would end up as literal noise in the log file
        subscriber.with_ansi(false).with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

async fn run_session(surface: &mut Surface) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let (command, rest) = line
            .trim_start()
            .split_once(' ')
            .unwrap_or((line.trim(), ""));

        match command {
            "" => continue,
            "edit" => surface.edit(rest),
            "save" => match surface.save().await {
                Ok((delta, view)) => {
                    println!("Registered: [{}]", delta.join(", "));
                    println!("{}", view);
                }
                // Reported, the session keeps going
                Err(e) => eprintln!("Save failed: {}", e),
            },
            "show" => println!("{}", surface.render()),
            "quit" | "exit" => break,
            other => eprintln!("Unknown command: {}", other),
        }
    }

    info!("Session ended");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let loader = match &args.config {
        Some(path) => ConfigLoader::from_file(path),
        None => ConfigLoader::new(),
    };
    let loader = match loader {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let log_level = args.log_level.clone().unwrap_or_else(|| loader.log_level());
    setup_logging(&log_level, args.log_file)?;

    info!("Starting AnyExt v{}", env!("CARGO_PKG_VERSION"));
    if let Some(source) = loader.source() {
        info!("Using config file: {}", source.display());
    }

    let data_file = args.data_file.unwrap_or_else(|| loader.data_file());
    let kind = args.kind.unwrap_or_else(|| loader.kind());
    info!("Settings file: {}", data_file.display());

    let registry = ExtensionRegistry::with_kind(JournalRegistrar::stdout(), kind);
    let mut plugin = Plugin::new(FileConfigStore::new(data_file), registry);
    plugin.on_load().await?;

    let mut surface = SettingsSurface::new(plugin);

    match args.command {
        Command::Show => {
            println!("{}", surface.render());
        }
        Command::Set { raw } => {
            surface.edit(raw);
            let (delta, view) = surface.save().await?;
            println!("Registered: [{}]", delta.join(", "));
            println!("{}", view);
        }
        Command::Session => run_session(&mut surface).await?,
    }

    Ok(())
}
