//! Per-function annotation records and the merged output mapping.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One tag list per parameter slot, in slot order, as read from the source
/// analyzer.
pub type RawAnnotation = Vec<Vec<String>>;

/// Same shape as [`RawAnnotation`], tags rewritten to the target vocabulary.
pub type NormalizedAnnotation = Vec<Vec<String>>;

/// One decoded source-analyzer annotation file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: PathBuf,
    /// Combined `display(mangled)` keys with their annotations, in document
    /// order.
    pub entries: Vec<(String, RawAnnotation)>,
}

impl SourceDocument {
    pub fn new(path: impl Into<PathBuf>, entries: Vec<(String, RawAnnotation)>) -> Self {
        Self {
            path: path.into(),
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A function key split into its display and mangled parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionName {
    pub display: String,
    pub mangled: String,
    /// False when the key had no trailing `(mangled)` group and both parts
    /// fell back to the whole key.
    pub matched: bool,
}

impl FunctionName {
    /// Fallback used when a key carries no mangled segment.
    pub fn unsplit(key: &str) -> Self {
        Self {
            display: key.to_string(),
            mangled: key.to_string(),
            matched: false,
        }
    }
}

/// An entry of the target annotation document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputEntry {
    /// Human-readable function name.
    pub name: String,
    pub annotation: NormalizedAnnotation,
    /// Function properties; never populated by conversion.
    pub properties: Vec<String>,
}

impl OutputEntry {
    pub fn new(name: impl Into<String>, annotation: NormalizedAnnotation) -> Self {
        Self {
            name: name.into(),
            annotation,
            properties: Vec::new(),
        }
    }
}

/// Mangled name to entry, in first-insertion order.
///
/// Re-inserting an existing key replaces the whole entry in place, so the
/// key keeps the position of its first appearance. Decoding a document with
/// a repeated key follows the same rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OutputMapping {
    entries: IndexMap<String, OutputEntry>,
}

impl OutputMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `mangled`, returning the replaced one.
    pub fn upsert(&mut self, mangled: impl Into<String>, entry: OutputEntry) -> Option<OutputEntry> {
        self.entries.insert(mangled.into(), entry)
    }

    pub fn get(&self, mangled: &str) -> Option<&OutputEntry> {
        self.entries.get(mangled)
    }

    pub fn contains(&self, mangled: &str) -> bool {
        self.entries.contains_key(mangled)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OutputEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }
}
