// Importers that build a Dictionary from foreign lexicon formats

mod lexique_pro;

pub use lexique_pro::{LexiqueProImporter, LexiqueProParser, Tag};

use crate::error::{Error, Result};
use crate::model::Dictionary;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Names of all formats accepted by `llex import`
pub const SUPPORTED_IMPORT_FORMATS: &[&str] = &["lp"];

/// A source format that can be converted into a Dictionary
pub trait Importer {
    /// Import a lexicon from its full source text
    fn import_str(&self, source: &str) -> Result<Dictionary>;

    /// Import a lexicon from a file on disk
    fn import_file(&self, path: &Path) -> Result<Dictionary> {
        if !path.exists() {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }
        let source = std::fs::read_to_string(path)?;
        self.import_str(&source)
    }
}

/// Supported import formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Lexique Pro `.db` database (MDF-style backslash tags)
    LexiquePro,
}

impl ImportFormat {
    /// The importer implementing this format
    pub fn importer(&self) -> Box<dyn Importer> {
        match self {
            ImportFormat::LexiquePro => Box::new(LexiqueProImporter::new()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ImportFormat::LexiquePro => "lp",
        }
    }
}

impl FromStr for ImportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lp" => Ok(ImportFormat::LexiquePro),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Import a file in the named format
pub fn import_file(path: &Path, format: ImportFormat) -> Result<Dictionary> {
    let dictionary = format.importer().import_file(path)?;
    tracing::info!(
        path = %path.display(),
        format = %format,
        entries = dictionary.entries.len(),
        "imported lexicon"
    );
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_known_format() {
        assert_eq!("lp".parse::<ImportFormat>().unwrap(), ImportFormat::LexiquePro);
        assert_eq!(ImportFormat::LexiquePro.to_string(), "lp");
    }

    #[test]
    fn test_parse_unknown_format() {
        let err = "toolbox".parse::<ImportFormat>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(ref f) if f == "toolbox"));
        assert_eq!(err.to_string(), "unsupported format 'toolbox'");
    }

    #[test]
    fn test_supported_formats_all_parse() {
        for name in SUPPORTED_IMPORT_FORMATS {
            assert!(name.parse::<ImportFormat>().is_ok());
        }
    }

    #[test]
    fn test_import_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "\\lx cat\n\\ps n\n\\de feline").unwrap();

        let dict = import_file(file.path(), ImportFormat::LexiquePro).unwrap();
        assert_eq!(dict.entries.len(), 1);
        assert_eq!(dict.entries[0].word, "cat");
    }

    #[test]
    fn test_import_missing_file() {
        let result = import_file(Path::new("/nonexistent/lexicon.db"), ImportFormat::LexiquePro);
        assert!(matches!(result, Err(Error::PathNotFound(_))));
    }
}
