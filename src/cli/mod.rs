//! CLI module for llex

mod args;

pub use args::{Args, Command};

use crate::config::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::import::{self, ImportFormat, SUPPORTED_IMPORT_FORMATS};
use crate::logging;
use crate::model::Dictionary;
use crate::output::{
    prepare_aux_text, read_optional_file, ExportParams, HtmlExporter, TemplateEngine,
};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;

/// Names of all formats accepted by `llex export`
pub const SUPPORTED_EXPORT_FORMATS: &[&str] = &["html", "website"];

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// One self-contained HTML file
    Html,
    /// Directory of linked HTML pages
    Website,
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "html" => Ok(ExportFormat::Html),
            "website" => Ok(ExportFormat::Website),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Html => f.write_str("html"),
            ExportFormat::Website => f.write_str("website"),
        }
    }
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let args = Args::parse_args();
    logging::init(args.verbose);

    match execute(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn execute(args: Args) -> Result<()> {
    let verbose = args.verbose;

    match args.command {
        Command::Import {
            format,
            file,
            output,
            language_name,
            pretty,
        } => {
            let format: ImportFormat = format.parse()?;

            let mut dictionary = import::import_file(&file, format)?;
            if let Some(name) = language_name {
                dictionary.language_name = name;
            }

            let json = dictionary.to_json(pretty)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)?;
                    if verbose {
                        println!(
                            "Imported {} entries to {}",
                            dictionary.entries.len(),
                            path.display()
                        );
                    }
                }
                None => println!("{}", json),
            }

            Ok(())
        }

        Command::Export {
            format,
            input,
            output,
            copyright,
            authors_note,
            treat_as_html,
            case_sensitive,
            css,
            author,
            language_name,
            config,
        } => {
            let format: ExportFormat = format.parse()?;

            let mut cfg = match &config {
                Some(path) => Config::load(path)?,
                None => Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
            };

            cfg.merge_cli(CliOverrides {
                copyright,
                authors_note,
                treat_as_html,
                case_sensitive,
                css,
                author,
            });
            cfg.validate()?;

            if format == ExportFormat::Website && output.is_none() {
                return Err(Error::other("website export requires --output <directory>"));
            }

            let dictionary = Dictionary::read(&input)?;
            tracing::info!(
                path = %input.display(),
                entries = dictionary.entries.len(),
                "loaded lexicon"
            );

            let mut params = build_params(&dictionary, &cfg)?;
            if let Some(name) = language_name {
                params = params.with_language_name(name);
            }
            let exporter = build_exporter(&cfg, verbose)?;

            match format {
                ExportFormat::Html => {
                    let html = exporter.export_single_page(&mut params)?;
                    match output {
                        Some(path) => {
                            std::fs::write(&path, html)?;
                            if verbose {
                                println!("HTML written to: {}", path.display());
                            }
                        }
                        None => print!("{}", html),
                    }
                }
                ExportFormat::Website => {
                    let dir: PathBuf = output.unwrap_or_default();
                    params.output_path = dir.clone();
                    params.css_file = cfg.site.css_file.clone();
                    let report = exporter.export_site(&mut params)?;

                    println!("{}", report.summary());
                    println!("Website written to: {}", dir.display());
                }
            }

            Ok(())
        }

        Command::ListFormats { json } => {
            println!("{}", list_formats(json)?);
            Ok(())
        }

        Command::Version => {
            println!("llex {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Assemble export parameters from the dictionary and config
fn build_params<'a>(dictionary: &'a Dictionary, cfg: &Config) -> Result<ExportParams<'a>> {
    let export = &cfg.export;

    let copyright = read_optional_file(export.copyright.as_deref())?;
    let authors_note = read_optional_file(export.authors_note.as_deref())?;

    let mut params = ExportParams::new(dictionary)
        .with_copyright(prepare_aux_text(&copyright, export.treat_as_html))
        .with_authors_note(prepare_aux_text(&authors_note, export.treat_as_html));

    if let Some(author) = &export.author {
        params = params.with_author(author.clone());
    }

    if let Some(css_path) = &export.css {
        params = params.with_css(std::fs::read_to_string(css_path)?);
    }

    Ok(params)
}

/// Build the exporter, using theme templates when configured
fn build_exporter(cfg: &Config, verbose: bool) -> Result<HtmlExporter> {
    let engine = match &cfg.export.templates_dir {
        Some(dir) => TemplateEngine::from_dir(dir)?,
        None => TemplateEngine::new()?,
    };

    Ok(HtmlExporter::new(engine)
        .with_case_sensitive(cfg.export.case_sensitive)
        .with_verbose(verbose))
}

#[derive(Serialize)]
struct FormatList {
    export: &'static [&'static str],
    import: &'static [&'static str],
}

/// Describe the supported formats, as text or JSON
fn list_formats(json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(&FormatList {
            export: SUPPORTED_EXPORT_FORMATS,
            import: SUPPORTED_IMPORT_FORMATS,
        })?);
    }

    Ok(format!(
        "Supported import formats: {}\nSupported export formats: {}",
        SUPPORTED_IMPORT_FORMATS.join(", "),
        SUPPORTED_EXPORT_FORMATS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use tempfile::TempDir;

    #[test]
    fn test_export_format_parse() {
        assert_eq!("html".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("website".parse::<ExportFormat>().unwrap(), ExportFormat::Website);
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported format 'pdf'");
    }

    #[test]
    fn test_supported_export_formats_parse() {
        for name in SUPPORTED_EXPORT_FORMATS {
            let format: ExportFormat = name.parse().unwrap();
            assert_eq!(&format.to_string(), name);
        }
    }

    #[test]
    fn test_list_formats_text() {
        let text = list_formats(false).unwrap();
        assert_eq!(
            text,
            "Supported import formats: lp\nSupported export formats: html, website"
        );
    }

    #[test]
    fn test_list_formats_json() {
        let json = list_formats(true).unwrap();
        assert_eq!(json, r#"{"export":["html","website"],"import":["lp"]}"#);
    }

    #[test]
    fn test_build_params_escapes_plain_text() {
        let dir = TempDir::new().unwrap();
        let note = dir.path().join("note.txt");
        std::fs::write(&note, "Tom & Jerry <3").unwrap();

        let mut cfg = Config::default();
        cfg.export.authors_note = Some(note.clone());
        let dict = Dictionary::new("Test");

        let params = build_params(&dict, &cfg).unwrap();
        assert_eq!(params.authors_note, "Tom &amp; Jerry &lt;3");

        cfg.export.treat_as_html = true;
        let params = build_params(&dict, &cfg).unwrap();
        assert_eq!(params.authors_note, "Tom & Jerry <3");
    }

    #[test]
    fn test_build_params_empty_copyright_keeps_notice() {
        let dir = TempDir::new().unwrap();
        let copyright = dir.path().join("COPYRIGHT");
        std::fs::write(&copyright, "").unwrap();

        let mut cfg = Config::default();
        cfg.export.copyright = Some(copyright);
        let dict = Dictionary::new("Test");

        let params = build_params(&dict, &cfg).unwrap();
        assert_eq!(params.copyright, crate::output::DEFAULT_COPYRIGHT);
    }

    #[test]
    fn test_build_params_missing_copyright_file() {
        let mut cfg = Config::default();
        cfg.export.copyright = Some(PathBuf::from("/nonexistent/COPYRIGHT"));
        let dict = Dictionary::new("Test");

        assert!(matches!(build_params(&dict, &cfg), Err(Error::Io(_))));
    }

    #[test]
    fn test_build_params_custom_css_and_author() {
        let dir = TempDir::new().unwrap();
        let css = dir.path().join("dark.css");
        std::fs::write(&css, "body { background: #111; }").unwrap();

        let mut cfg = Config::default();
        cfg.export.css = Some(css);
        cfg.export.author = Some("A. Lemur".to_string());
        let dict = Dictionary {
            language_name: "Test".to_string(),
            entries: vec![Entry::new("ka")],
        };

        let params = build_params(&dict, &cfg).unwrap();
        assert_eq!(params.css, "body { background: #111; }");
        assert_eq!(params.author, "A. Lemur");
        assert_eq!(params.num_words, 1);
    }

    #[test]
    fn test_build_exporter_with_theme() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("entry.html.tera"), "<p>{{ entry.word }}</p>").unwrap();

        let mut cfg = Config::default();
        cfg.export.templates_dir = Some(dir.path().to_path_buf());

        let exporter = build_exporter(&cfg, false).unwrap();
        let html = exporter.engine().render_entry(&Entry::new("ka")).unwrap();
        assert_eq!(html, "<p>ka</p>");
    }
}
