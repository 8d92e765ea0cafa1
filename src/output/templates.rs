// Template engine for entry fragments, navigation bars and whole pages

use crate::error::Result;
use crate::model::{Entry, QualifiedString};
use crate::output::params::{ExportParams, ALL_WORDS_FILE};
use crate::output::partition::{page_file_name, page_stem};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;
use tera::{Context, Tera, Value};

const PAGE_TEMPLATE: &str = "page.html";
const ENTRY_TEMPLATE: &str = "entry.html";
const NAVBAR_TEMPLATE: &str = "navbar.html";

/// Template sources used to build a [`TemplateEngine`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub page: String,
    pub entry: String,
    pub navbar: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            page: include_str!("../../templates/page.html.tera").to_string(),
            entry: include_str!("../../templates/entry.html.tera").to_string(),
            navbar: include_str!("../../templates/navbar.html.tera").to_string(),
        }
    }
}

impl Templates {
    /// Load `page.html.tera`, `entry.html.tera` and `navbar.html.tera` from a
    /// theme directory. Files the theme does not provide keep the built-in
    /// template.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut templates = Self::default();
        let slots = [
            ("page.html.tera", &mut templates.page),
            ("entry.html.tera", &mut templates.entry),
            ("navbar.html.tera", &mut templates.navbar),
        ];
        for (name, slot) in slots {
            let path = dir.join(name);
            if path.exists() {
                *slot = std::fs::read_to_string(&path)?;
                tracing::debug!(template = %path.display(), "loaded theme template");
            }
        }
        Ok(templates)
    }
}

/// Template engine wrapping Tera with the lexicon templates.
///
/// Templates are fixed at construction; rendering never mutates the engine.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Create a template engine with the built-in templates
    pub fn new() -> Result<Self> {
        Self::with_templates(&Templates::default())
    }

    /// Create a template engine from explicit template sources
    pub fn with_templates(templates: &Templates) -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            (PAGE_TEMPLATE, templates.page.as_str()),
            (ENTRY_TEMPLATE, templates.entry.as_str()),
            (NAVBAR_TEMPLATE, templates.navbar.as_str()),
        ])?;

        tera.register_filter("pluralize", pluralize);

        Ok(Self { tera })
    }

    /// Create a template engine from a theme directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::with_templates(&Templates::from_dir(dir)?)
    }

    /// Render one entry as an HTML fragment
    pub fn render_entry(&self, entry: &Entry) -> Result<String> {
        let mut context = Context::new();
        context.insert("entry", &EntryContext::from(entry));

        Ok(self.tera.render(ENTRY_TEMPLATE, &context)?)
    }

    /// Render a list of entries, keeping their order
    pub fn render_entries(&self, entries: &[&Entry]) -> Result<Vec<String>> {
        entries.iter().map(|e| self.render_entry(e)).collect()
    }

    /// Render the navigation bar linking every group key
    pub fn render_navbar<'k, I>(&self, keys: I) -> Result<String>
    where
        I: IntoIterator<Item = &'k str>,
    {
        let letters: Vec<NavLetter> = keys
            .into_iter()
            .map(|key| NavLetter {
                key,
                stem: page_stem(key),
                file: page_file_name(key),
            })
            .collect();

        let mut context = Context::new();
        context.insert("letters", &letters);
        context.insert("all_words_file", ALL_WORDS_FILE);

        Ok(self.tera.render(NAVBAR_TEMPLATE, &context)?)
    }

    /// Render a complete HTML document from export parameters
    pub fn render_page(&self, params: &ExportParams) -> Result<String> {
        let context = Context::from_serialize(params.to_template_params())?;
        Ok(self.tera.render(PAGE_TEMPLATE, &context)?)
    }
}

/// Template view of an entry with every field present
#[derive(Debug, Serialize)]
struct EntryContext<'e> {
    word: &'e str,
    part_of_speech: &'e str,
    pronunciations: Vec<QualifiedContext<'e>>,
    definitions: Vec<QualifiedContext<'e>>,
    usage_notes: &'e [String],
    etymology: &'e str,
    borrowed_word: &'e str,
}

impl<'e> From<&'e Entry> for EntryContext<'e> {
    fn from(entry: &'e Entry) -> Self {
        Self {
            word: &entry.word,
            part_of_speech: &entry.part_of_speech,
            pronunciations: entry.pronunciations.iter().map(QualifiedContext::from).collect(),
            definitions: entry.definitions.iter().map(QualifiedContext::from).collect(),
            usage_notes: &entry.usage_notes,
            etymology: &entry.etymology,
            borrowed_word: &entry.borrowed_word,
        }
    }
}

/// Qualified value with the qualifier list always present
#[derive(Debug, Serialize)]
struct QualifiedContext<'e> {
    qualifiers: &'e [String],
    text: &'e str,
}

impl<'e> From<&'e QualifiedString> for QualifiedContext<'e> {
    fn from(value: &'e QualifiedString) -> Self {
        Self {
            qualifiers: &value.qualifiers,
            text: &value.text,
        }
    }
}

/// One navbar link
#[derive(Debug, Serialize)]
struct NavLetter<'k> {
    key: &'k str,
    stem: String,
    file: String,
}

/// Pluralize a word based on count
fn pluralize(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let count = value.as_u64().unwrap_or(0);
    let singular = args
        .get("singular")
        .and_then(|v| v.as_str())
        .unwrap_or("item");
    let default_plural = format!("{}s", singular);
    let plural = args
        .get("plural")
        .and_then(|v| v.as_str())
        .unwrap_or(&default_plural);

    if count == 1 {
        Ok(Value::String(format!("{} {}", count, singular)))
    } else {
        Ok(Value::String(format!("{} {}", count, plural)))
    }
}
