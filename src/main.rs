use std::fs;
use std::io::{self, Read as _, Write as _};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Parser;
use ini_writer::{DEFAULT_STARTING_SECTION, Input, Writer, WriterOptions};
use tracing_subscriber::EnvFilter;

/// Convert a JSON document into an INI file.
#[derive(Parser, Debug)]
#[command(name = "ini-writer", version)]
struct Cli {
    /// JSON document to convert; reads standard input when omitted or `-`
    input: Option<PathBuf>,

    /// Write to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Section whose properties are written before any header
    #[arg(long, default_value = DEFAULT_STARTING_SECTION, conflicts_with = "no_starting_section")]
    starting_section: String,

    /// Give every section a header
    #[arg(long)]
    no_starting_section: bool,

    /// Write the starting section's header even when it comes first
    #[arg(long)]
    explicit_starting_header: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose);

    let text = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            text
        }
    };

    let document = serde_json::from_str::<serde_json::Value>(&text)
        .context("input is not valid JSON")?;
    let input = Input::try_from(document)?;

    let options = WriterOptions::default()
        .with_starting_section((!args.no_starting_section).then_some(args.starting_section))
        .with_explicit_starting_header(args.explicit_starting_header);
    let mut writer = Writer::with_options(options);

    match args.output {
        Some(path) => writer
            .write_file(input, &path)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writer.write_handle(input, &mut stdout)?;
            stdout.flush().context("failed to flush standard output")?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
