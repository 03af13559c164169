//! Command-line interface for refinery.

mod render;

use std::{
    env, fs,
    io::{self, IsTerminal},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Error, Result, bail};
use clap::{Parser, Subcommand};
use refinery_config::{
    CONFIG_FILENAME, ChunkStrategy, Config, config_template, discover_config_files,
    is_global_config,
};
use refinery_document::infer_depth;
use refinery_highlight::{Highlighter, dim, heading, rule};
use refinery_pipeline::{FileType, IngestionJob, ParserRegistry, RefineryPipeline};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::render::{ChunkView, depth_table};

#[derive(Parser)]
#[command(name = "refinery")]
#[command(about = "Split parsed documents into context-carrying chunks")]
/// Top-level CLI options.
struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `refinery` subcommands.
enum Commands {
    /// Parse a file and print its chunks
    Chunk {
        /// File to ingest
        file: PathBuf,

        /// File type: auto, pdf, xlsx, xls, csv, json
        #[arg(short = 't', long = "type", default_value = "auto")]
        file_type: String,

        /// Print chunks as a JSON array
        #[arg(long)]
        json: bool,

        /// Override the split strategy
        #[arg(long)]
        strategy: Option<String>,

        /// Override the advisory segment length
        #[arg(long)]
        segment_len: Option<usize>,
    },

    /// Show the inferred depth of header texts
    Depth {
        /// Header texts
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Create a .refinery.toml in the current directory
    Init {
        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Show config files and effective settings
    Config,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Chunk {
            file,
            file_type,
            json,
            strategy,
            segment_len,
        } => cmd_chunk(file, &file_type, json, strategy.as_deref(), segment_len),
        Commands::Depth { texts } => {
            cmd_depth(&texts);
            Ok(())
        }
        Commands::Init { force } => cmd_init(force),
        Commands::Config => cmd_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", report(&e));
            ExitCode::FAILURE
        }
    }
}

/// Joins an error chain with `: `, skipping causes already quoted by their parent.
fn report(err: &Error) -> String {
    let mut out = String::new();
    for cause in err.chain() {
        let msg = cause.to_string();
        if out.ends_with(&msg) {
            continue;
        }
        if !out.is_empty() {
            out.push_str(": ");
        }
        out.push_str(&msg);
    }
    out
}

/// Loads the merged configuration for the working directory.
fn load_config() -> Result<Config> {
    let cwd = env::current_dir().context("could not determine current directory")?;
    let config = Config::load(&cwd).context("failed to load configuration")?;
    Ok(config)
}

/// Implements `refinery chunk`.
fn cmd_chunk(
    file: PathBuf,
    file_type: &str,
    json: bool,
    strategy: Option<&str>,
    segment_len: Option<usize>,
) -> Result<()> {
    let config = load_config()?;
    let file_type: FileType = file_type.parse()?;

    let mut ingest = config.ingest.clone();
    if let Some(strategy) = strategy {
        ingest.split_strategy = strategy.parse::<ChunkStrategy>()?;
    }
    if let Some(len) = segment_len {
        ingest.segment_len = len;
    }

    if !file.exists() {
        bail!("file not found: {}", file.display());
    }

    let pipeline = RefineryPipeline::new(ParserRegistry::with_defaults(&config.csv));
    let mut job = IngestionJob::new(file, ingest).with_file_type(file_type);
    debug!(job_id = %job.id, "created job");

    let chunks = pipeline.process_blocking(&mut job)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&chunks)?);
        return Ok(());
    }

    let color = io::stdout().is_terminal();
    let highlighter = color.then(Highlighter::new);
    let total = chunks.len();
    for (i, chunk) in chunks.iter().enumerate() {
        let view = ChunkView::new(chunk, i, total);
        print!("{}", view.render(highlighter.as_ref()));
    }
    if total == 0 {
        println!("No chunks produced.");
    }

    Ok(())
}

/// Implements `refinery depth`.
fn cmd_depth(texts: &[String]) {
    let rows: Vec<(u32, &str)> = texts
        .iter()
        .map(|text| (infer_depth(text), text.as_str()))
        .collect();
    println!("{}", depth_table(&rows));
}

/// Implements `refinery init`.
fn cmd_init(force: bool) -> Result<()> {
    let cwd = env::current_dir().context("could not determine current directory")?;
    let config_path = cwd.join(CONFIG_FILENAME);

    if config_path.exists() && !force {
        bail!(
            "configuration file already exists: {}\nuse --force to overwrite",
            config_path.display()
        );
    }

    fs::write(&config_path, config_template())
        .with_context(|| format!("failed to write {}", config_path.display()))?;
    println!("Created {}", config_path.display());

    Ok(())
}

/// Implements `refinery config`.
fn cmd_config() -> Result<()> {
    let cwd = env::current_dir().context("could not determine current directory")?;
    let files = discover_config_files(&cwd);
    let config = Config::load(&cwd).context("failed to load configuration")?;
    let color = io::stdout().is_terminal();

    let title = "Config files (highest precedence first):";
    println!("{}", if color { heading(title) } else { title.to_string() });
    if files.is_empty() {
        let none = "(none found, using defaults)";
        println!("  {}", if color { dim(none) } else { none.to_string() });
    }
    for path in &files {
        let scope = if is_global_config(path) { "global" } else { "local" };
        let note = format!("({scope})");
        println!(
            "  {} {}",
            path.display(),
            if color { dim(&note) } else { note }
        );
    }
    if let Some(root) = &config.config_root {
        println!("Config root: {}", root.display());
    }
    println!();

    let settings = config.settings_to_toml()?;
    if color {
        println!("{}", heading("Effective settings:"));
        println!("{}", rule(40));
        print!("{}", Highlighter::new().toml(&settings));
        println!("{}", rule(40));
    } else {
        println!("Effective settings:");
        print!("{settings}");
    }

    Ok(())
}
