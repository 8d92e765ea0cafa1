// Export parameters threaded through page templating

use crate::error::Result;
use crate::model::Dictionary;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shown in the footer when no copyright text was supplied
pub const DEFAULT_COPYRIGHT: &str = "No copyright information provided.";

/// Built-in stylesheet
pub const DEFAULT_CSS: &str = include_str!("../../assets/style.css");

/// Name of the page listing every word in a multi-page export
pub const ALL_WORDS_FILE: &str = "all-words.html";

/// Configuration for one export run.
///
/// Rebuilt for every invocation and updated by the exporter as it moves
/// from page to page; never persisted.
#[derive(Debug, Clone)]
pub struct ExportParams<'a> {
    pub dictionary: &'a Dictionary,
    pub language_name: String,
    /// Copyright notice, already HTML
    pub copyright: String,
    /// Author's note, already HTML
    pub authors_note: String,
    /// Output file (single page) or directory (website)
    pub output_path: PathBuf,
    pub use_embedded_css: bool,
    pub css: String,
    /// Stylesheet linked instead of embedded
    pub css_file: String,
    pub multipage: bool,
    pub show_navbar: bool,
    pub index_page: bool,
    /// Rendered entry fragments for the current page
    pub entries: Vec<String>,
    pub navbar_html: String,
    pub timestamp: DateTime<Utc>,
    pub generation_time: Duration,
    pub num_words: usize,
    pub author: String,
}

impl<'a> ExportParams<'a> {
    /// Default parameters for a dictionary
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            language_name: dictionary.language_name.clone(),
            copyright: DEFAULT_COPYRIGHT.to_string(),
            authors_note: String::new(),
            output_path: PathBuf::new(),
            use_embedded_css: true,
            css: DEFAULT_CSS.to_string(),
            css_file: String::new(),
            multipage: false,
            show_navbar: false,
            index_page: false,
            entries: Vec::new(),
            navbar_html: String::new(),
            timestamp: Utc::now(),
            generation_time: Duration::ZERO,
            num_words: dictionary.word_count(),
            author: String::new(),
        }
    }

    /// Replace the copyright notice. Empty text keeps the default notice so
    /// a missing copyright stays visible.
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        let copyright = copyright.into();
        if !copyright.is_empty() {
            self.copyright = copyright;
        }
        self
    }

    pub fn with_authors_note(mut self, note: impl Into<String>) -> Self {
        self.authors_note = note.into();
        self
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Replace the language name taken from the dictionary
    pub fn with_language_name(mut self, name: impl Into<String>) -> Self {
        self.language_name = name.into();
        self
    }

    /// Values handed to the page template
    pub fn to_template_params(&self) -> PageContext<'_> {
        PageContext {
            language_name: &self.language_name,
            copyright: &self.copyright,
            authors_note: &self.authors_note,
            use_embedded_css: self.use_embedded_css,
            css: &self.css,
            css_file: &self.css_file,
            multipage: self.multipage,
            show_navbar: self.show_navbar,
            navbar_html: &self.navbar_html,
            index_page: self.index_page,
            entries: &self.entries,
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            generation_time: format_duration(self.generation_time),
            num_words: self.num_words,
            author: &self.author,
            all_words_file: ALL_WORDS_FILE,
        }
    }
}

/// Serializable view of [`ExportParams`] for the page template
#[derive(Debug, Serialize)]
pub struct PageContext<'p> {
    pub language_name: &'p str,
    pub copyright: &'p str,
    pub authors_note: &'p str,
    pub use_embedded_css: bool,
    pub css: &'p str,
    pub css_file: &'p str,
    pub multipage: bool,
    pub show_navbar: bool,
    pub navbar_html: &'p str,
    pub index_page: bool,
    pub entries: &'p [String],
    pub timestamp: String,
    pub generation_time: String,
    pub num_words: usize,
    pub author: &'p str,
    pub all_words_file: &'p str,
}

/// Human-readable duration such as `850µs`, `12.4ms` or `1.20s`
pub fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1_000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.1}ms", micros as f64 / 1_000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}

/// Prepare copyright or author's note text for insertion into a page.
///
/// Plain text is HTML-escaped; text flagged as HTML is kept verbatim.
pub fn prepare_aux_text(raw: &str, treat_as_html: bool) -> String {
    if treat_as_html {
        raw.to_string()
    } else {
        tera::escape_html(raw)
    }
}

/// Read an optional text input. No path means empty text.
pub fn read_optional_file(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dictionary() -> Dictionary {
        Dictionary {
            language_name: "Kenahari".to_string(),
            entries: vec![Entry::new("ka"), Entry::new(""), Entry::new("mi")],
        }
    }

    #[test]
    fn test_defaults() {
        let dict = dictionary();
        let params = ExportParams::new(&dict);

        assert_eq!(params.language_name, "Kenahari");
        assert_eq!(params.copyright, DEFAULT_COPYRIGHT);
        assert_eq!(params.authors_note, "");
        assert!(params.use_embedded_css);
        assert_eq!(params.css, DEFAULT_CSS);
        assert!(!params.multipage);
        assert!(!params.show_navbar);
        assert!(!params.index_page);
        assert_eq!(params.num_words, 2);
    }

    #[test]
    fn test_empty_copyright_keeps_notice() {
        let dict = dictionary();
        let params = ExportParams::new(&dict).with_copyright("");
        assert_eq!(params.copyright, DEFAULT_COPYRIGHT);

        let params = params.with_copyright("© 2024 A. Lemur");
        assert_eq!(params.copyright, "© 2024 A. Lemur");
    }

    #[test]
    fn test_builder_methods() {
        let dict = dictionary();
        let params = ExportParams::new(&dict)
            .with_authors_note("<p>Hi</p>")
            .with_css("body {}")
            .with_author("Someone")
            .with_output_path("/tmp/out")
            .with_language_name("Other");

        assert_eq!(params.authors_note, "<p>Hi</p>");
        assert_eq!(params.css, "body {}");
        assert_eq!(params.author, "Someone");
        assert_eq!(params.output_path, PathBuf::from("/tmp/out"));
        assert_eq!(params.language_name, "Other");
    }

    #[test]
    fn test_template_params() {
        let dict = dictionary();
        let mut params = ExportParams::new(&dict);
        params.entries = vec!["<div>ka</div>".to_string()];
        params.generation_time = Duration::from_millis(3);

        let ctx = params.to_template_params();
        assert_eq!(ctx.language_name, "Kenahari");
        assert_eq!(ctx.entries.len(), 1);
        assert_eq!(ctx.generation_time, "3.0ms");
        assert_eq!(ctx.all_words_file, ALL_WORDS_FILE);
        assert!(ctx.timestamp.ends_with('Z'));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_micros(850)), "850µs");
        assert_eq!(format_duration(Duration::from_micros(12_400)), "12.4ms");
        assert_eq!(format_duration(Duration::from_millis(1_200)), "1.20s");
    }

    #[test]
    fn test_prepare_aux_text() {
        assert_eq!(prepare_aux_text("<b>A & B</b>", true), "<b>A & B</b>");
        let escaped = prepare_aux_text("<b>A & B</b>", false);
        assert!(escaped.contains("&lt;b&gt;"));
        assert!(escaped.contains("&amp;"));
    }

    #[test]
    fn test_read_optional_file() {
        assert_eq!(read_optional_file(None).unwrap(), "");

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "All rights reserved.").unwrap();
        assert_eq!(
            read_optional_file(Some(file.path())).unwrap(),
            "All rights reserved."
        );

        assert!(read_optional_file(Some(Path::new("/nonexistent/c.txt"))).is_err());
    }
}
