// Lexicon data model
//
// These types are the canonical interchange format between import and
// export. They serialize to the camelCase JSON document that `llex import`
// writes and `llex export` reads.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Decode a sequence that may be written as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A text value optionally tagged with dialect or register qualifiers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualifiedString {
    /// Qualifiers such as "archaic" or "northern dialect"
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub qualifiers: Vec<String>,
    /// The value itself
    #[serde(default)]
    pub text: String,
}

impl QualifiedString {
    /// Create an unqualified value
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            qualifiers: Vec::new(),
            text: text.into(),
        }
    }

    /// Create a value carrying qualifiers
    pub fn qualified(qualifiers: Vec<String>, text: impl Into<String>) -> Self {
        Self {
            qualifiers,
            text: text.into(),
        }
    }
}

/// A sense gloss
pub type Definition = QualifiedString;

/// A phonemic or phonetic transcription
pub type Pronunciation = QualifiedString;

/// One headword of the lexicon
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// The headword; empty marks an invalid entry that is never exported
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub pronunciations: Vec<Pronunciation>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub definitions: Vec<Definition>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub usage_notes: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub etymology: String,
    /// Source-language origin when the word is a loan
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub borrowed_word: String,
}

impl Entry {
    /// Create an entry with only a headword
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Whether the entry has a headword and may be rendered or counted
    pub fn is_headword(&self) -> bool {
        !self.word.is_empty()
    }
}

/// A whole lexicon document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dictionary {
    #[serde(default)]
    pub language_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub entries: Vec<Entry>,
}

impl Dictionary {
    /// Create an empty dictionary for a language
    pub fn new(language_name: impl Into<String>) -> Self {
        Self {
            language_name: language_name.into(),
            entries: Vec::new(),
        }
    }

    /// Decode a dictionary from its JSON interchange form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the dictionary to JSON
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Read a dictionary JSON document from disk
    pub fn read(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::PathNotFound(path.to_path_buf()));
        }
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Entries that have a headword.
    ///
    /// Every export path goes through this filter, so an entry with an empty
    /// word is never rendered or counted while still surviving a JSON
    /// round-trip untouched.
    pub fn headwords(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_headword())
    }

    /// Headwords sorted by word
    pub fn sorted_headwords(&self) -> Vec<&Entry> {
        let mut entries: Vec<&Entry> = self.headwords().collect();
        sort_entries(&mut entries);
        entries
    }

    /// Number of entries with a headword
    pub fn word_count(&self) -> usize {
        self.headwords().count()
    }
}

/// Sort entries by word using ordinal comparison.
///
/// `str` ordering compares UTF-8 bytes, which matches code point order. The
/// sort is stable: duplicate headwords keep their dictionary order.
pub fn sort_entries(entries: &mut [&Entry]) {
    entries.sort_by(|a, b| a.word.cmp(&b.word));
}
