// Lexique Pro database importer
//
// A Lexique Pro `.db` file is a stream of `\tag value` lines. A `\lx` line
// opens a new record and every following line belongs to it until the next
// `\lx` or the end of input. Unknown tags are skipped so newer databases
// still import.

use super::Importer;
use crate::error::Result;
use crate::model::{Definition, Dictionary, Entry};

/// Field markers understood by the importer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// `\lx` starts a new entry
    Lexeme,
    /// `\ps`
    PartOfSpeech,
    /// `\de` or `\ge`
    Gloss,
    /// `\et`
    Etymology,
    Unknown,
}

impl Tag {
    pub fn parse(token: &str) -> Self {
        match token {
            "\\lx" => Tag::Lexeme,
            "\\ps" => Tag::PartOfSpeech,
            "\\de" | "\\ge" => Tag::Gloss,
            "\\et" => Tag::Etymology,
            _ => Tag::Unknown,
        }
    }
}

/// Parser state: either between records or filling one in
#[derive(Debug)]
enum State {
    NoCurrentEntry,
    BuildingEntry(Entry),
}

/// Stateful line parser that assembles entries
#[derive(Debug)]
pub struct LexiqueProParser {
    state: State,
    dictionary: Dictionary,
}

impl Default for LexiqueProParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiqueProParser {
    pub fn new() -> Self {
        Self {
            state: State::NoCurrentEntry,
            dictionary: Dictionary::default(),
        }
    }

    /// Feed one line of the database
    pub fn feed_line(&mut self, line: &str) {
        let mut tokens = line.split_whitespace();
        let Some(tag_token) = tokens.next() else {
            return;
        };
        let rest = tokens.collect::<Vec<_>>().join(" ");
        let tag = Tag::parse(tag_token);

        match tag {
            Tag::Lexeme => {
                self.emit();
                self.state = State::BuildingEntry(Entry::new(rest));
                return;
            }
            Tag::Unknown => {
                tracing::debug!(tag = tag_token, "skipping unrecognized tag");
                return;
            }
            _ => {}
        }

        let State::BuildingEntry(entry) = &mut self.state else {
            tracing::debug!(tag = tag_token, "skipping field outside of an entry");
            return;
        };

        match tag {
            Tag::PartOfSpeech => entry.part_of_speech = rest,
            Tag::Gloss => entry.definitions.extend(split_glosses(&rest)),
            Tag::Etymology => entry.etymology = rest,
            Tag::Lexeme | Tag::Unknown => {}
        }
    }

    /// Move the entry under construction, if any, into the dictionary
    pub fn emit(&mut self) {
        if let State::BuildingEntry(entry) =
            std::mem::replace(&mut self.state, State::NoCurrentEntry)
        {
            self.dictionary.entries.push(entry);
        }
    }

    /// Emit the last entry and return the finished dictionary
    pub fn finish(mut self) -> Dictionary {
        self.emit();
        if self.dictionary.entries.is_empty() {
            tracing::warn!("no \\lx lines found, dictionary is empty");
        }
        self.dictionary
    }
}

/// Split a gloss line on `;`, trimming each sense and dropping empty ones
fn split_glosses(rest: &str) -> impl Iterator<Item = Definition> + '_ {
    rest.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Definition::new)
}

/// Importer for Lexique Pro databases
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiqueProImporter;

impl LexiqueProImporter {
    pub fn new() -> Self {
        Self
    }
}

impl Importer for LexiqueProImporter {
    fn import_str(&self, source: &str) -> Result<Dictionary> {
        let source = source.strip_prefix('\u{feff}').unwrap_or(source);
        let mut parser = LexiqueProParser::new();
        for line in source.lines() {
            parser.feed_line(line);
        }
        Ok(parser.finish())
    }
}
