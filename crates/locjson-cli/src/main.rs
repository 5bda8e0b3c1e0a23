//! `locjson` CLI — scaffold, flatten, and check localization JSON files.
//!
//! ## Usage
//!
//! ```sh
//! # Blank translation template (stdin → stdout)
//! cat ja.json | locjson template
//!
//! # Write the template straight to en.json in a locale directory
//! locjson template -i locales/ja.json --lang en --out-dir locales
//!
//! # Every leaf value, one per line
//! locjson leaves -i ja.json
//!
//! # Do the source and translation have the same keys and nesting?
//! locjson check --source ja.json --translation en.json
//!
//! # Report syntax errors with line/column
//! locjson validate -i en.json --translation
//! ```

mod logging;

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use locjson_core::{JsonKind, Side};
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "locjson",
    version,
    about = "Scaffold, flatten, and check paired localization JSON files"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a blank translation template of a source document
    Template {
        /// Source JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long, conflicts_with = "lang")]
        output: Option<String>,
        /// Translation language; writes `<lang>.json` instead of stdout
        #[arg(long)]
        lang: Option<String>,
        /// Directory for the `<lang>.json` file (defaults to the current directory)
        #[arg(long, requires = "lang")]
        out_dir: Option<PathBuf>,
    },
    /// Print every leaf value of a document, one per line
    Leaves {
        /// Source JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Check that a translation has the same structure as its source
    Check {
        /// Source JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        source: Option<String>,
        /// Translation JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        translation: Option<String>,
    },
    /// Check that a file is valid JSON
    Validate {
        /// JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Label errors as coming from the translation document
        #[arg(long)]
        translation: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    match cli.command {
        Commands::Template {
            input,
            output,
            lang,
            out_dir,
        } => {
            let json = read_input(input.as_deref())?;
            let template = locjson_core::template_from_str(&json)
                .context("Failed to build translation template")?;

            match lang {
                Some(lang) => {
                    let name = locjson_core::translation_file_name(&lang)?;
                    let path = out_dir.unwrap_or_else(|| PathBuf::from(".")).join(name);
                    write_output(Some(&path), &template)?;
                    println!("Wrote {}", path.display());
                }
                None => write_output(output.as_deref().map(Path::new), &template)?,
            }
        }
        Commands::Leaves { input, output } => {
            let json = read_input(input.as_deref())?;
            let leaves =
                locjson_core::leaves_from_str(&json).context("Failed to extract leaf values")?;
            write_output(output.as_deref().map(Path::new), &leaves)?;
        }
        Commands::Check {
            source,
            translation,
        } => {
            if source.is_none() && translation.is_none() {
                anyhow::bail!("Only one of --source and --translation can be read from stdin");
            }
            let source_json = read_input(source.as_deref())?;
            let translation_json = read_input(translation.as_deref())?;

            match locjson_core::check_structure_str(&source_json, &translation_json)
                .context("Cannot check structure")?
            {
                None => println!("Structure matches."),
                Some(mismatch) => {
                    info!(pointer = %mismatch.pointer(), "structure mismatch");
                    println!("Structure does not match {}", mismatch);
                    process::exit(1);
                }
            }
        }
        Commands::Validate { input, translation } => {
            let side = if translation {
                Side::Translation
            } else {
                Side::Source
            };
            let json = read_input(input.as_deref())?;
            let value = locjson_core::parse_document(&json, side)?;
            println!("Valid JSON ({} at root)", JsonKind::of(&value));
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            debug!(path, "reading input file");
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), bytes = content.len(), "writing output file");
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
