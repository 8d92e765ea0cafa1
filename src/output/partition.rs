// Alphabetical partitioning of entries for paginated export

use crate::model::{sort_entries, Entry};
use std::collections::BTreeMap;

/// Entries grouped by first letter, iterated in key order
pub type Partition<'a> = BTreeMap<String, Vec<&'a Entry>>;

/// Grouping key for a word: its first character, lower-cased unless
/// `case_sensitive`. Returns `None` for an empty word.
pub fn group_key(word: &str, case_sensitive: bool) -> Option<String> {
    let first = word.chars().next()?;
    if case_sensitive {
        Some(first.to_string())
    } else {
        Some(first.to_lowercase().collect())
    }
}

/// Group entries by the first letter of their word.
///
/// Entries without a headword are left out of every group. Groups keep the
/// order entries were given in; see [`partition_sorted`].
pub fn partition<'a, I>(entries: I, case_sensitive: bool) -> Partition<'a>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut groups = Partition::new();
    for entry in entries {
        if let Some(key) = group_key(&entry.word, case_sensitive) {
            groups.entry(key).or_default().push(entry);
        }
    }
    groups
}

/// Group entries by first letter and sort every group by word
pub fn partition_sorted<'a, I>(entries: I, case_sensitive: bool) -> Partition<'a>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut groups = partition(entries, case_sensitive);
    for group in groups.values_mut() {
        sort_entries(group);
    }
    groups
}

/// File stem of the page holding a group.
///
/// Alphanumeric keys are used as-is. Anything else (punctuation, path
/// separators, dots) is spelled out as code points, so `-` becomes `u2d`.
pub fn page_stem(key: &str) -> String {
    if !key.is_empty() && key.chars().all(char::is_alphanumeric) {
        return key.to_string();
    }
    let codes: Vec<String> = key.chars().map(|c| format!("{:x}", c as u32)).collect();
    format!("u{}", codes.join("-"))
}

/// File name of the page holding a group
pub fn page_file_name(key: &str) -> String {
    format!("{}.html", page_stem(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dictionary;

    fn entries(words: &[&str]) -> Vec<Entry> {
        words.iter().map(|w| Entry::new(*w)).collect()
    }

    fn words<'a>(group: &[&'a Entry]) -> Vec<&'a str> {
        group.iter().map(|e| e.word.as_str()).collect()
    }

    #[test]
    fn test_group_key() {
        assert_eq!(group_key("Bear", false).as_deref(), Some("b"));
        assert_eq!(group_key("Bear", true).as_deref(), Some("B"));
        assert_eq!(group_key("káa", false).as_deref(), Some("k"));
        assert_eq!(group_key("Ähre", false).as_deref(), Some("ä"));
        assert_eq!(group_key("", false), None);
    }

    #[test]
    fn test_case_insensitive_groups() {
        let list = entries(&["Bear", "apple"]);
        let groups = partition(&list, false);

        assert_eq!(groups.len(), 2);
        assert_eq!(words(&groups["a"]), vec!["apple"]);
        assert_eq!(words(&groups["b"]), vec!["Bear"]);
    }

    #[test]
    fn test_case_sensitive_groups() {
        let list = entries(&["Bear", "bee", "apple"]);
        let groups = partition(&list, true);

        assert_eq!(groups.len(), 3);
        assert_eq!(words(&groups["B"]), vec!["Bear"]);
        assert_eq!(words(&groups["b"]), vec!["bee"]);
    }

    #[test]
    fn test_empty_words_excluded() {
        let list = entries(&["", "ka", ""]);
        let groups = partition(&list, false);

        assert_eq!(groups.len(), 1);
        assert_eq!(words(&groups["k"]), vec!["ka"]);
    }

    #[test]
    fn test_partition_is_complete() {
        let list = entries(&["zo", "", "Ka", "ab", "ki", "Zu", "aa", "ab"]);
        let groups = partition(&list, false);

        let mut grouped: Vec<&str> = groups.values().flat_map(|g| words(g)).collect();
        let mut expected: Vec<&str> = list
            .iter()
            .filter(|e| e.is_headword())
            .map(|e| e.word.as_str())
            .collect();
        grouped.sort();
        expected.sort();
        assert_eq!(grouped, expected);

        for (key, group) in &groups {
            for entry in group {
                assert_eq!(&group_key(&entry.word, false).unwrap(), key);
            }
        }
    }

    #[test]
    fn test_multibyte_initials_group_together() {
        let list = entries(&["élan", "écu", "eau"]);
        let groups = partition(&list, false);

        assert_eq!(words(&groups["é"]), vec!["élan", "écu"]);
        assert_eq!(words(&groups["e"]), vec!["eau"]);
    }

    #[test]
    fn test_partition_sorted() {
        let dict = Dictionary {
            language_name: String::new(),
            entries: entries(&["kz", "Ka", "ka", "ab"]),
        };
        let groups = partition_sorted(dict.headwords(), false);

        assert_eq!(words(&groups["k"]), vec!["Ka", "ka", "kz"]);
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, vec!["a", "k"]);
    }

    #[test]
    fn test_page_stem() {
        assert_eq!(page_stem("a"), "a");
        assert_eq!(page_stem("é"), "é");
        assert_eq!(page_stem("-"), "u2d");
        assert_eq!(page_stem("/"), "u2f");
        assert_eq!(page_stem("."), "u2e");
        assert_eq!(page_file_name("k"), "k.html");
        assert_eq!(page_file_name("'"), "u27.html");
    }
}
