//! # `wikirand` CLI Library
//!
//! Argument parsing, configuration and presentation for the `wikirand`
//! binary. Fetching and decoding live in the `wikirand` crate.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use textwrap::Options;
use tracing::{debug, warn};
use wikirand::constants::{API_URL_TEMPLATE, DEFAULT_LANGUAGE};
use wikirand::{Page, WikipediaClient};

/// Process exit code on success.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code for any fetch or validation failure.
pub const EXIT_FAILURE: u8 = 1;

/// Column at which the extract is wrapped.
pub const WRAP_WIDTH: usize = 70;

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "Print the title and summary of a random Wikipedia article")]
pub struct Cli {
    /// Language edition of Wikipedia (e.g. en, de, pl)
    #[arg(short, long, value_name = "LANG", default_value = DEFAULT_LANGUAGE)]
    pub language: String,
    /// Log request details to stderr
    #[arg(short, long)]
    pub verbose: bool,
    /// Endpoint template containing a `{language}` placeholder
    #[arg(long, hide = true, default_value = API_URL_TEMPLATE)]
    pub api_url_template: String,
}

// --- Configuration ---

/// Settings for one invocation, resolved once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub language: String,
    pub url_template: String,
    pub color: bool,
    pub verbose: bool,
}

impl Config {
    /// Resolves the configuration. `color` is decided by the caller, usually
    /// from whether stdout is a terminal.
    pub fn from_cli(cli: Cli, color: bool) -> Self {
        Self {
            language: cli.language,
            url_template: cli.api_url_template,
            color,
            verbose: cli.verbose,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            url_template: API_URL_TEMPLATE.to_string(),
            color: false,
            verbose: false,
        }
    }
}

// --- Public Entrypoint ---

/// Fetches a random page and prints it to `out`.
///
/// Returns [`EXIT_SUCCESS`] when the page was printed. Any failure is written
/// to `err` as `Error: <description>` and yields [`EXIT_FAILURE`].
pub async fn run<O: Write, E: Write>(config: &Config, out: &mut O, err: &mut E) -> u8 {
    match present(config, out).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            warn!("Could not show a random page: {e}");
            let _ = writeln!(err, "Error: {e}");
            let _ = err.flush();
            EXIT_FAILURE
        }
    }
}

async fn present<O: Write>(config: &Config, out: &mut O) -> Result<()> {
    debug!("Resolved configuration: {config:?}");
    let client = WikipediaClient::with_url_template(config.url_template.as_str())?;
    debug!("Using endpoint template {}", client.url_template());
    let page = client.fetch_random_page(&config.language).await?;
    render_page(&page, out, config.color)?;
    Ok(())
}

// --- Rendering ---

/// Writes the title, a blank line, then the extract wrapped at [`WRAP_WIDTH`].
pub fn render_page<W: Write>(page: &Page, out: &mut W, color: bool) -> std::io::Result<()> {
    if color {
        writeln!(out, "{}", page.title().green().bold())?;
    } else {
        writeln!(out, "{}", page.title())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", wrap_text(page.extract(), WRAP_WIDTH))?;
    out.flush()
}

/// Fills `text` to `width` columns. Existing line breaks are kept and words
/// longer than `width` are left whole on their own line.
pub fn wrap_text(text: &str, width: usize) -> String {
    textwrap::fill(text, Options::new(width).break_words(false))
}
