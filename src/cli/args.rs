//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Import, manage and publish lexicons
#[derive(Parser, Debug)]
#[command(name = "llex")]
#[command(about = "Import, manage and publish lexicons")]
#[command(version)]
pub struct Args {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import a lexicon from another format
    #[command(visible_alias = "i")]
    Import {
        /// Format of the file to import from (lp for Lexique Pro .db files)
        #[arg(short = 't', long)]
        format: String,

        /// File to import from
        #[arg(short, long)]
        file: PathBuf,

        /// File to write the lexicon JSON to (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the language the lexicon describes
        #[arg(short, long)]
        language_name: Option<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export a lexicon
    #[command(visible_alias = "e")]
    Export {
        /// Format to export into (html, website)
        #[arg(short, long)]
        format: String,

        /// Lexicon JSON file to export
        #[arg(short, long)]
        input: PathBuf,

        /// Output file, or directory for a website (stdout for html when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File holding the copyright notice
        #[arg(long)]
        copyright: Option<PathBuf>,

        /// File holding an author's note shown above the entries
        #[arg(long)]
        authors_note: Option<PathBuf>,

        /// Insert copyright and author's note as HTML instead of plain text
        #[arg(long)]
        treat_as_html: bool,

        /// Keep letter case when splitting a website into pages
        #[arg(long)]
        case_sensitive: bool,

        /// Stylesheet replacing the built-in one
        #[arg(long)]
        css: Option<PathBuf>,

        /// Author shown in page metadata
        #[arg(long)]
        author: Option<String>,

        /// Language name shown in page titles, replacing the lexicon's own
        #[arg(short, long)]
        language_name: Option<String>,

        /// Config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List supported import and export formats
    ListFormats {
        /// Print the formats as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}
