use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "llex.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub export: ExportConfig,
    pub site: SiteConfig,
}

/// Export settings shared by every HTML output.
///
/// Relative paths read from a config file are resolved against the
/// directory holding that file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// File holding the copyright notice
    pub copyright: Option<PathBuf>,
    /// File holding the author's note
    pub authors_note: Option<PathBuf>,
    /// Insert copyright and author's note as HTML instead of escaping them
    pub treat_as_html: bool,
    /// Keep letter case when grouping words into pages
    pub case_sensitive: bool,
    pub author: Option<String>,
    /// Stylesheet replacing the built-in one
    pub css: Option<PathBuf>,
    /// Directory with page/entry/navbar templates
    pub templates_dir: Option<PathBuf>,
}

/// Multi-page website settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Name of the stylesheet written next to the pages
    pub css_file: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            css_file: "index.css".to_string(),
        }
    }
}

/// Command-line values that override the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub copyright: Option<PathBuf>,
    pub authors_note: Option<PathBuf>,
    pub treat_as_html: bool,
    pub case_sensitive: bool,
    pub css: Option<PathBuf>,
    pub author: Option<String>,
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&contents)?;
        config.validate()?;

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    /// Make relative file paths relative to `base`
    fn resolve_paths(&mut self, base: &Path) {
        let export = &mut self.export;
        for path in [
            &mut export.copyright,
            &mut export.authors_note,
            &mut export.css,
            &mut export.templates_dir,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
            Self::default()
        })
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(&mut self, cli: CliOverrides) {
        if cli.copyright.is_some() {
            self.export.copyright = cli.copyright;
        }

        if cli.authors_note.is_some() {
            self.export.authors_note = cli.authors_note;
        }

        if cli.treat_as_html {
            self.export.treat_as_html = true;
        }

        if cli.case_sensitive {
            self.export.case_sensitive = true;
        }

        if cli.css.is_some() {
            self.export.css = cli.css;
        }

        if cli.author.is_some() {
            self.export.author = cli.author;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let css_file = &self.site.css_file;

        if css_file.is_empty() {
            return Err(Error::config_validation("site.css_file must not be empty"));
        }

        if css_file.contains('/') || css_file.contains('\\') {
            return Err(Error::config_validation(
                "site.css_file must be a file name, not a path",
            ));
        }

        if !css_file.ends_with(".css") {
            return Err(Error::config_validation("site.css_file must end in .css"));
        }

        if self
            .export
            .templates_dir
            .as_ref()
            .is_some_and(|dir| dir.as_os_str().is_empty())
        {
            return Err(Error::config_validation(
                "export.templates_dir must not be empty",
            ));
        }

        Ok(())
    }
}
