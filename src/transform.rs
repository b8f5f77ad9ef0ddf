//! Pivot transformations - sheets → LocaleTable (JSON) / LocaleTree (XML)

use crate::reader::Sheet;
use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// A single spreadsheet cell value.
///
/// Spreadsheets are loosely typed, so every cell is one of a closed set of
/// variants. `Int` and `Float` are kept separate so integer cells serialize
/// as JSON integers and stringify without a decimal point.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Canonical text form of the cell. Missing cells render as "".
    pub fn stringify(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => f.to_string(),
            Cell::Missing => String::new(),
        }
    }
}

// JSON rendering: numbers stay numbers, strings stay strings, missing → null.
impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Cell::Text(s) => serializer.serialize_str(s),
            Cell::Int(i) => serializer.serialize_i64(*i),
            Cell::Float(f) => serializer.serialize_f64(*f),
            Cell::Missing => serializer.serialize_unit(),
        }
    }
}

/// Make a raw header or key usable as an XML tag: every character outside
/// `[A-Za-z0-9_]` becomes an underscore, and a leading digit gets an
/// underscore prefix. No collision detection - two raw tags may sanitize to
/// the same result.
pub fn sanitize_tag(raw: &str) -> String {
    let mut tag: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if tag.is_empty() {
        // Only reachable via a pathological header; keys are skipped earlier.
        return "_".to_string();
    }
    if tag.as_bytes()[0].is_ascii_digit() {
        tag.insert(0, '_');
    }
    tag
}

/// JSON-mode accumulator: language → translation key → value.
///
/// Both map levels preserve encounter order. Re-seen (language, key) pairs
/// are overwritten, so the last row processed wins - within a sheet and
/// across sheets, in command-line order.
#[derive(Debug, Default, serde::Serialize)]
#[serde(transparent)]
pub struct LocaleTable {
    languages: IndexMap<String, IndexMap<String, Cell>>,
}

impl LocaleTable {
    pub fn from_sheets(sheets: &[Sheet]) -> Self {
        let mut table = LocaleTable::default();

        for sheet in sheets {
            let Some((_key_column, languages)) = sheet.columns.split_first() else {
                continue; // sheet with no columns at all
            };

            for row in &sheet.rows {
                let Some(key) = row_key(row) else {
                    continue;
                };

                for (idx, language) in languages.iter().enumerate() {
                    let cell = row.get(idx + 1).cloned().unwrap_or(Cell::Missing);
                    table
                        .languages
                        .entry(language.clone())
                        .or_default()
                        .insert(key.clone(), cell);
                }
            }
        }

        table
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    pub fn get(&self, language: &str, key: &str) -> Option<&Cell> {
        self.languages.get(language)?.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// One translated value inside a [`LocaleEntry`].
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleNode {
    pub tag: String,
    pub text: String,
}

/// One per-key element of the XML output.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleEntry {
    pub tag: String,
    pub nodes: Vec<LocaleNode>,
}

/// XML-mode accumulator: an ordered list of per-key entries.
///
/// Unlike [`LocaleTable`], duplicate keys are NOT merged: every qualifying
/// row appends a sibling entry, even when its sanitized tag collides with an
/// earlier one. XML consumers see document order, JSON consumers see object
/// semantics, and the two modes diverge here on purpose.
#[derive(Debug, Default)]
pub struct LocaleTree {
    pub entries: Vec<LocaleEntry>,
}

impl LocaleTree {
    pub fn from_sheets(sheets: &[Sheet]) -> Self {
        let mut tree = LocaleTree::default();

        for sheet in sheets {
            let Some((_key_column, languages)) = sheet.columns.split_first() else {
                continue;
            };

            for row in &sheet.rows {
                let Some(key) = row_key(row) else {
                    continue;
                };

                let nodes = languages
                    .iter()
                    .enumerate()
                    .map(|(idx, language)| LocaleNode {
                        tag: sanitize_tag(language),
                        text: row.get(idx + 1).map(Cell::stringify).unwrap_or_default(),
                    })
                    .collect();

                tree.entries.push(LocaleEntry {
                    tag: sanitize_tag(&key),
                    nodes,
                });
            }
        }

        tree
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key cell of a row, or `None` when the row must be skipped entirely
/// (missing key cell, or a key that stringifies to empty).
fn row_key(row: &[Cell]) -> Option<String> {
    let key = row.first()?;
    if key.is_missing() {
        return None;
    }
    let key = key.stringify();
    if key.is_empty() {
        return None;
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(columns: &[&str], rows: Vec<Vec<Cell>>) -> Sheet {
        Sheet {
            name: "Sheet1".to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    #[test]
    fn test_sanitize_leading_digit() {
        assert_eq!(sanitize_tag("3abc"), "_3abc");
    }

    #[test]
    fn test_sanitize_punctuation() {
        assert_eq!(sanitize_tag("a-b.c"), "a_b_c");
    }

    #[test]
    fn test_sanitize_already_valid() {
        assert_eq!(sanitize_tag("valid_Tag1"), "valid_Tag1");
    }

    #[test]
    fn test_sanitize_non_ascii_and_empty() {
        assert_eq!(sanitize_tag("pt-BR"), "pt_BR");
        assert_eq!(sanitize_tag("français"), "fran_ais");
        assert_eq!(sanitize_tag(""), "_");
    }

    #[test]
    fn test_stringify_variants() {
        assert_eq!(text("Hello").stringify(), "Hello");
        assert_eq!(Cell::Int(42).stringify(), "42");
        assert_eq!(Cell::Float(3.5).stringify(), "3.5");
        assert_eq!(Cell::Missing.stringify(), "");
    }

    #[test]
    fn test_table_basic_pivot() {
        let sheets = vec![sheet(
            &["key", "en", "fr"],
            vec![
                vec![text("greeting"), text("Hello"), text("Bonjour")],
                vec![text("farewell"), text("Bye"), text("Au revoir")],
            ],
        )];

        let table = LocaleTable::from_sheets(&sheets);

        assert_eq!(table.languages().collect::<Vec<_>>(), vec!["en", "fr"]);
        assert_eq!(table.get("en", "greeting"), Some(&text("Hello")));
        assert_eq!(table.get("fr", "farewell"), Some(&text("Au revoir")));
    }

    #[test]
    fn test_table_skips_missing_and_empty_keys() {
        let sheets = vec![sheet(
            &["key", "en"],
            vec![
                vec![Cell::Missing, text("orphan")],
                vec![text(""), text("also orphan")],
                vec![text("kept"), text("value")],
            ],
        )];

        let table = LocaleTable::from_sheets(&sheets);

        assert_eq!(table.get("en", "kept"), Some(&text("value")));
        assert_eq!(table.get("en", ""), None);
        assert!(table.get("en", "orphan").is_none());
    }

    #[test]
    fn test_table_last_write_wins_within_sheet() {
        let sheets = vec![sheet(
            &["key", "en"],
            vec![
                vec![text("greeting"), text("Hi")],
                vec![text("greeting"), text("Hello")],
            ],
        )];

        let table = LocaleTable::from_sheets(&sheets);
        assert_eq!(table.get("en", "greeting"), Some(&text("Hello")));
    }

    #[test]
    fn test_table_last_write_wins_across_sheets() {
        let sheets = vec![
            sheet(&["key", "en"], vec![vec![text("greeting"), text("Hi")]]),
            sheet(&["key", "en"], vec![vec![text("greeting"), text("Hello")]]),
        ];

        let table = LocaleTable::from_sheets(&sheets);
        assert_eq!(table.get("en", "greeting"), Some(&text("Hello")));
    }

    #[test]
    fn test_table_missing_value_stays_missing() {
        let sheets = vec![sheet(
            &["key", "en", "fr"],
            vec![vec![text("greeting"), text("Hello"), Cell::Missing]],
        )];

        let table = LocaleTable::from_sheets(&sheets);
        assert_eq!(table.get("fr", "greeting"), Some(&Cell::Missing));
    }

    #[test]
    fn test_table_short_row_padded_with_missing() {
        let sheets = vec![sheet(
            &["key", "en", "fr"],
            vec![vec![text("greeting"), text("Hello")]],
        )];

        let table = LocaleTable::from_sheets(&sheets);
        assert_eq!(table.get("fr", "greeting"), Some(&Cell::Missing));
    }

    #[test]
    fn test_tree_one_entry_per_row_no_merge() {
        let sheets = vec![sheet(
            &["key", "en"],
            vec![
                vec![text("greeting"), text("Hi")],
                vec![text("greeting"), text("Hello")],
            ],
        )];

        let tree = LocaleTree::from_sheets(&sheets);

        assert_eq!(tree.entries.len(), 2);
        assert_eq!(tree.entries[0].tag, "greeting");
        assert_eq!(tree.entries[1].tag, "greeting");
        assert_eq!(tree.entries[0].nodes[0].text, "Hi");
        assert_eq!(tree.entries[1].nodes[0].text, "Hello");
    }

    #[test]
    fn test_tree_sanitizes_tags_and_blanks_missing() {
        let sheets = vec![sheet(
            &["key", "pt-BR"],
            vec![
                vec![Cell::Int(3), Cell::Missing],
                vec![text("a-b.c"), text("x")],
            ],
        )];

        let tree = LocaleTree::from_sheets(&sheets);

        assert_eq!(tree.entries[0].tag, "_3");
        assert_eq!(tree.entries[0].nodes[0].tag, "pt_BR");
        assert_eq!(tree.entries[0].nodes[0].text, "");
        assert_eq!(tree.entries[1].tag, "a_b_c");
    }

    #[test]
    fn test_tree_skips_missing_keys() {
        let sheets = vec![sheet(
            &["key", "en"],
            vec![
                vec![Cell::Missing, text("dropped")],
                vec![text("kept"), text("value")],
            ],
        )];

        let tree = LocaleTree::from_sheets(&sheets);
        assert_eq!(tree.entries.len(), 1);
        assert_eq!(tree.entries[0].tag, "kept");
    }

    #[test]
    fn test_empty_sheets_produce_empty_accumulators() {
        let sheets = vec![sheet(&[], vec![])];
        assert!(LocaleTable::from_sheets(&sheets).is_empty());
        assert!(LocaleTree::from_sheets(&sheets).is_empty());
    }
}
