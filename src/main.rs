//! rawline demo REPL
//!
//! Reads lines with editing, history, completion and hints, echoing each
//! committed line back. Also hosts a key code inspection mode.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use tracing_subscriber::EnvFilter;

use rawline::terminal::keycodes;
use rawline::{Config, Hint, LineReader, ReadResult};

const PROMPT: &str = "hello> ";

#[derive(Parser, Debug)]
#[command(name = "rawline", version, about = "Line editing demo: edit, complete and echo lines")]
struct Cli {
    /// Wrap long lines over several rows
    #[arg(long)]
    multiline: bool,

    /// Echo '*' instead of the typed text
    #[arg(long)]
    mask: bool,

    /// Maximum number of history entries
    #[arg(long, value_name = "N")]
    history_max_len: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to this file (filter with RAWLINE_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the bytes each key press produces, then exit
    #[arg(long)]
    keycodes: bool,
}

/// Version shown by `--version`: `0.1.0 (abc1234 2026-01-01)` for dev
/// builds, `0.1.0 (2026-01-01)` when built without git information.
fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let version = env!("CARGO_PKG_VERSION");
        let date = env!("RAWLINE_BUILD_DATE");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if sha != "unknown" => {
                format!("{} ({} {})", version, sha.get(..7).unwrap_or(sha), date)
            }
            _ => format!("{} ({})", version, date),
        }
    })
}

/// Install a file-backed subscriber. The terminal is in raw mode while
/// reading, so logs never go to stdout or stderr.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env("RAWLINE_LOG").unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        build_date = env!("RAWLINE_BUILD_DATE"),
        "rawline starting"
    );
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.editor.multiline |= cli.multiline;
    config.editor.mask |= cli.mask;
    if let Some(max_len) = cli.history_max_len {
        config.editor.history_max_len = max_len;
    }
    Ok(config)
}

fn hint(line: &str) -> Option<Hint> {
    line.eq_ignore_ascii_case("hello")
        .then(|| Hint::new(" World").color(35).bold())
}

fn complete(line: &str) -> Vec<String> {
    if line.starts_with('h') {
        vec!["hello".to_string(), "hello there".to_string()]
    } else {
        Vec::new()
    }
}

/// Handle a `/command` line. Returns false when the line is not a command.
fn run_command(reader: &mut LineReader, line: &str) -> bool {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("/historylen") => {
            match words.next().and_then(|n| n.parse::<usize>().ok()) {
                Some(len) => reader.set_history_max_len(len),
                None => println!("usage: /historylen <N>"),
            }
            true
        }
        Some("/mask") => {
            reader.set_mask(true);
            true
        }
        Some("/unmask") => {
            reader.set_mask(false);
            true
        }
        Some(other) if other.starts_with('/') => {
            println!("Unrecognized command: {}", other);
            true
        }
        _ => false,
    }
}

fn main() -> Result<()> {
    let matches = Cli::command().long_version(long_version()).get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    if cli.keycodes {
        keycodes::print_key_codes().context("Key code mode failed")?;
        return Ok(());
    }

    let config = load_config(&cli)?;
    let mut reader = LineReader::with_config(&config);
    reader.set_hinter(hint);
    reader.set_completer(complete);

    loop {
        let line = match reader.read_line(PROMPT).context("Failed to read line")? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted | ReadResult::EndOfInput => break,
        };

        if run_command(&mut reader, &line) {
            continue;
        }
        println!("echo: '{}'", line);
        reader.add_history(&line).context("Failed to record history")?;
    }

    Ok(())
}
