// HTML exporters
//
// Single-page export renders every entry into one document with embedded
// CSS. Website export writes index.html, one page per initial letter, a
// shared stylesheet and all-words.html.

use crate::error::Result;
use crate::output::params::{ExportParams, ALL_WORDS_FILE};
use crate::output::partition::{page_file_name, partition_sorted};
use crate::output::templates::TemplateEngine;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Stylesheet name used when the parameters do not name one
pub const DEFAULT_CSS_FILE: &str = "index.css";

/// HTML exporter for single pages and static websites
pub struct HtmlExporter {
    engine: TemplateEngine,
    case_sensitive: bool,
    verbose: bool,
}

impl HtmlExporter {
    /// Create an exporter around a template engine
    pub fn new(engine: TemplateEngine) -> Self {
        Self {
            engine,
            case_sensitive: false,
            verbose: false,
        }
    }

    /// Keep letter case when grouping words into pages
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Show a progress bar while writing pages
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn engine(&self) -> &TemplateEngine {
        &self.engine
    }

    /// Render every headword of the dictionary into one HTML document
    pub fn export_single_page(&self, params: &mut ExportParams) -> Result<String> {
        let start = Instant::now();
        let dictionary = params.dictionary;

        let sorted = dictionary.sorted_headwords();
        params.entries = self.engine.render_entries(&sorted)?;
        params.num_words = params.entries.len();
        params.index_page = false;
        params.timestamp = Utc::now();
        params.generation_time = start.elapsed();

        self.engine.render_page(params)
    }

    /// Write a static website into `params.output_path`.
    ///
    /// Stops at the first failed write; pages already written are left in
    /// place.
    pub fn export_site(&self, params: &mut ExportParams) -> Result<SiteReport> {
        let start = Instant::now();
        let dictionary = params.dictionary;
        let out_dir = params.output_path.clone();
        let mut report = SiteReport::default();

        fs::create_dir_all(&out_dir)?;

        // Split into letter groups and render each group's fragments
        let groups = partition_sorted(dictionary.headwords(), self.case_sensitive);
        let mut rendered: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (letter, entries) in &groups {
            rendered.insert(letter.clone(), self.engine.render_entries(entries)?);
        }

        let navbar_html = self
            .engine
            .render_navbar(rendered.keys().map(String::as_str))?;

        if params.css_file.is_empty() {
            params.css_file = DEFAULT_CSS_FILE.to_string();
        }
        params.navbar_html = navbar_html;
        params.show_navbar = true;
        params.multipage = true;
        params.use_embedded_css = false;
        params.index_page = true;
        params.entries = Vec::new();
        params.num_words = dictionary.word_count();
        params.timestamp = Utc::now();
        params.generation_time = start.elapsed();

        let index_html = self.engine.render_page(params)?;
        write_page(&out_dir, "index.html", &index_html)?;
        report.pages_written += 1;

        params.index_page = false;

        let progress = if self.verbose {
            let pb = ProgressBar::new(rendered.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        for (letter, fragments) in rendered {
            if let Some(ref pb) = progress {
                pb.set_message(letter.clone());
                pb.inc(1);
            }

            params.num_words = fragments.len();
            params.entries = fragments;
            let html = self.engine.render_page(params)?;
            write_page(&out_dir, &page_file_name(&letter), &html)?;

            report.pages_written += 1;
            report.letters.push(letter);
        }

        if let Some(pb) = progress {
            pb.finish_with_message("Letter pages written");
        }

        write_page(&out_dir, &params.css_file, &params.css)?;

        let all_html = self.export_single_page(params)?;
        write_page(&out_dir, ALL_WORDS_FILE, &all_html)?;
        report.pages_written += 1;
        report.words = params.num_words;

        tracing::info!(
            dir = %out_dir.display(),
            pages = report.pages_written,
            words = report.words,
            "website exported"
        );

        Ok(report)
    }
}

/// Write one file of the site
fn write_page(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, contents)?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(())
}

/// Report of what a website export wrote
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SiteReport {
    /// HTML pages written, including index and all-words pages
    pub pages_written: usize,
    /// Group keys that received a page, in order
    pub letters: Vec<String>,
    pub words: usize,
}

impl SiteReport {
    pub fn summary(&self) -> String {
        format!(
            "Generated {} pages ({} letters), {} words",
            self.pages_written,
            self.letters.len(),
            self.words
        )
    }
}
