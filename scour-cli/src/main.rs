use clap::{Parser, Subcommand};
use colored::Colorize;
use scour::{
    scan, scan_file, ConfigFile, PatternSpec, ScanConfig, ScanError, ScanMode, ScanSummary,
    DEFAULT_WORKER_COUNT,
};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Scan files and directories for content or name patterns")]
struct Cli {
    /// Verbose debug tracing
    #[arg(short, long, global = true)]
    debug: bool,

    /// Suppress non-fatal error messages
    #[arg(short = 'e', long, global = true)]
    suppress_errors: bool,

    /// Number of scan workers (default 10)
    #[arg(short = 't', long, global = true)]
    workers: Option<usize>,

    /// Optional YAML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a single file for pattern matches
    File {
        /// File to scan
        #[arg(short, long)]
        path: PathBuf,

        /// Regular expression to match
        #[arg(short, long)]
        regex: Option<String>,

        /// Literal substring to match (shorthand for a wrapped pattern)
        #[arg(short, long)]
        contains: Option<String>,
    },
    /// Scan a directory for content or filename matches
    Dir {
        /// Directory to scan
        #[arg(short, long)]
        path: PathBuf,

        /// Regular expression to match
        #[arg(short, long)]
        regex: Option<String>,

        /// Literal substring to match (shorthand for a wrapped pattern)
        #[arg(short, long)]
        contains: Option<String>,

        /// Descend into subdirectories
        #[arg(short = 'R', long)]
        recursive: bool,

        /// Read file contents and match against them
        #[arg(short = 'o', long)]
        contents: bool,

        /// Match against file names instead of contents
        #[arg(short = 'n', long)]
        names: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        let code = if e.is_fatal() { 2 } else { 1 };
        std::process::exit(code);
    }
}

fn init_tracing(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.suppress_errors {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();
}

fn run(cli: Cli) -> Result<(), ScanError> {
    let file_config = ConfigFile::load(cli.config.as_deref())?;
    let worker_count = cli
        .workers
        .or(file_config.workers)
        .unwrap_or(DEFAULT_WORKER_COUNT);
    debug!("worker count resolved to {worker_count}");

    match cli.command {
        Commands::File {
            path,
            regex,
            contains,
        } => {
            let pattern = resolve_pattern(regex, contains, &file_config)?;
            let config = ScanConfig {
                root_path: path,
                mode: ScanMode::Contents,
                recursive: false,
                worker_count: 1,
                pattern,
                debug: cli.debug,
                suppress_errors: cli.suppress_errors,
            };
            let result = scan_file(&config)?;
            for m in &result.matches {
                println!("{{{}}}", m.trim());
            }
        }
        Commands::Dir {
            path,
            regex,
            contains,
            recursive,
            contents,
            names,
        } => {
            let mode = ScanMode::from_flags(contents, names)?;
            let pattern = resolve_pattern(regex, contains, &file_config)?;
            let config = ScanConfig {
                root_path: path,
                mode,
                recursive: recursive || file_config.recursive.unwrap_or(false),
                worker_count,
                pattern,
                debug: cli.debug,
                suppress_errors: cli.suppress_errors,
            };
            let summary = scan(&config)?;
            render(mode, &summary);
        }
    }

    Ok(())
}

/// CLI pattern flags win; the config file only fills a gap where neither
/// flag was given.
fn resolve_pattern(
    regex: Option<String>,
    contains: Option<String>,
    file_config: &ConfigFile,
) -> Result<PatternSpec, ScanError> {
    if regex.is_none() && contains.is_none() {
        PatternSpec::from_flags(file_config.regex.clone(), file_config.contains.clone())
    } else {
        PatternSpec::from_flags(regex, contains)
    }
}

fn render(mode: ScanMode, summary: &ScanSummary) {
    for result in &summary.file_results {
        if result.matches.is_empty() {
            continue;
        }
        match mode {
            ScanMode::Contents => {
                println!();
                println!("{}", result.path.display());
                for m in &result.matches {
                    println!("{m}");
                }
            }
            ScanMode::Names => {
                for m in &result.matches {
                    println!("{m}");
                }
            }
        }
    }
}
