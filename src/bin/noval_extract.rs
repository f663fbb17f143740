//! noval-extract - run one extractor over an HTML page and print JSON.
//!
//! Reads the page from a file or stdin, decodes it using the declared
//! charset, and writes the result to stdout. Logs go to stderr, filtered by
//! `RUST_LOG` (default `warn`).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use noval::{Extractor, Options, SearchHit};

#[derive(Parser)]
#[command(name = "noval-extract")]
#[command(version, about = "Rule-free extraction for web fiction pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    noval-extract search --name 大主宰 --url https://a.com/s?q=x page.html
    curl -s https://a.com/book/1/ | noval-extract chapters --url https://a.com/book/1/
    noval-extract content chapter.html")]
struct Cli {
    /// Options file (JSON); missing fields keep their defaults
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find rows for a book title on a search result page
    Search {
        /// Book title to look for
        #[arg(short, long)]
        name: String,

        /// URL the page was fetched from
        #[arg(short, long)]
        url: Option<String>,

        /// HTML file, stdin when omitted
        input: Option<PathBuf>,
    },

    /// Find the table of contents link on a book page
    Detail {
        /// URL the page was fetched from
        #[arg(short, long)]
        url: Option<String>,

        /// HTML file, stdin when omitted
        input: Option<PathBuf>,
    },

    /// List the chapters of a catalogue page
    Chapters {
        #[arg(short, long)]
        url: Option<String>,

        input: Option<PathBuf>,
    },

    /// Extract the text of a chapter page
    Content { input: Option<PathBuf> },
}

/// A search hit with its columns spelled out.
#[derive(Serialize)]
struct SearchRow {
    text: String,
    url: String,
    name: String,
    date: String,
    other: String,
}

impl From<SearchHit> for SearchRow {
    fn from(hit: SearchHit) -> Self {
        let fields = hit.fields();
        Self {
            text: hit.text,
            url: hit.url,
            name: fields.name,
            date: fields.date,
            other: fields.other,
        }
    }
}

#[derive(Serialize)]
struct DetailOutput {
    url: Option<String>,
}

#[derive(Serialize)]
struct ContentOutput {
    content: String,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn load_options(path: Option<&PathBuf>) -> Result<Options, String> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    let json = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    Options::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>, String> {
    match path {
        Some(path) => fs::read(path).map_err(|e| format!("{}: {e}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| format!("stdin: {e}"))?;
            Ok(buf)
        }
    }
}

fn run(cli: Cli) -> Result<String, String> {
    let extractor = Extractor::new(load_options(cli.config.as_ref())?);
    let to_json = |r: serde_json::Result<String>| r.map_err(|e| e.to_string());

    match cli.command {
        Command::Search { name, url, input } => {
            let html = extractor.decode(&read_input(input.as_ref())?);
            let hits = extractor
                .search(&html, &name, url.as_deref())
                .map_err(|e| e.to_string())?;
            tracing::info!(hits = hits.len(), "search done");
            let rows: Vec<SearchRow> = hits.into_iter().map(SearchRow::from).collect();
            to_json(serde_json::to_string_pretty(&rows))
        }
        Command::Detail { url, input } => {
            let html = extractor.decode(&read_input(input.as_ref())?);
            let url = extractor.detail(&html, url.as_deref()).map_err(|e| e.to_string())?;
            to_json(serde_json::to_string_pretty(&DetailOutput { url }))
        }
        Command::Chapters { url, input } => {
            let html = extractor.decode(&read_input(input.as_ref())?);
            let chapters = extractor.chapters(&html, url.as_deref()).map_err(|e| e.to_string())?;
            tracing::info!(chapters = chapters.len(), "chapter list done");
            to_json(serde_json::to_string_pretty(&chapters))
        }
        Command::Content { input } => {
            let html = extractor.decode(&read_input(input.as_ref())?);
            let content = extractor.content(&html);
            to_json(serde_json::to_string_pretty(&ContentOutput { content }))
        }
    }
}

fn main() -> ExitCode {
    setup_logging();

    match run(Cli::parse()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
