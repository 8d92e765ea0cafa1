//! llex - lexicon manager
//!
//! Imports Lexique Pro databases into a JSON lexicon and publishes lexicons
//! as a single HTML page or a static website split by initial letter.

pub mod cli;
pub mod config;
pub mod error;
pub mod import;
pub mod logging;
pub mod model;
pub mod output;

// Re-export main types
pub use config::Config;
pub use error::{Error, Result};
pub use import::{import_file, ImportFormat, Importer, LexiqueProImporter};
pub use model::{Definition, Dictionary, Entry, Pronunciation, QualifiedString};
pub use output::{ExportParams, HtmlExporter, SiteReport, TemplateEngine, Templates};
