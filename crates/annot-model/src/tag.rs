//! Taint tag vocabularies.
//!
//! Source tags are loosely structured `Kind[:offset[:data]]` strings written
//! by the static analyzer. Target tags are drawn from the closed
//! `Category::Subcategory[:Data]` vocabulary the symbolic-execution engine
//! understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Separator between the parts of a raw tag.
pub const TAG_SEPARATOR: char = ':';

/// Maximum number of colon-separated parts in a raw tag.
pub const MAX_TAG_PARTS: usize = 3;

/// Source statement kinds that carry taint meaning.
///
/// Any other kind is outside the rewrite table and passes through verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    TaintOutput,
    TaintPropagation,
    SensitiveDataSource,
    Execute,
    FormatString,
    SensitiveDataLeak,
}

impl SourceKind {
    /// Every kind in rewrite-table order.
    pub const ALL: [SourceKind; 6] = [
        SourceKind::TaintOutput,
        SourceKind::TaintPropagation,
        SourceKind::SensitiveDataSource,
        SourceKind::Execute,
        SourceKind::FormatString,
        SourceKind::SensitiveDataLeak,
    ];

    /// Returns the kind token as written by the source analyzer.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::TaintOutput => "TaintOutput",
            SourceKind::TaintPropagation => "TaintPropagation",
            SourceKind::SensitiveDataSource => "SensitiveDataSource",
            SourceKind::Execute => "Execute",
            SourceKind::FormatString => "FormatString",
            SourceKind::SensitiveDataLeak => "SensitiveDataLeak",
        }
    }

    /// Exact, case-sensitive lookup of a kind token.
    pub fn parse(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == token)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A raw source tag split into its colon-separated parts.
///
/// Splitting follows `str::split` semantics: `"Kind::42"` has three parts
/// with an empty offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTag<'a> {
    pub raw: &'a str,
    pub kind: &'a str,
    pub offset: Option<&'a str>,
    pub data: Option<&'a str>,
}

impl<'a> RawTag<'a> {
    /// Split a raw tag, rejecting tags with more than [`MAX_TAG_PARTS`] parts.
    pub fn parse(raw: &'a str) -> Result<Self> {
        let parts: Vec<&str> = raw.split(TAG_SEPARATOR).collect();
        if parts.len() > MAX_TAG_PARTS {
            return Err(ModelError::TooManyTagParts {
                tag: raw.to_string(),
                parts: parts.len(),
            });
        }
        let kind = parts[0];
        let offset = parts.get(1).copied();
        let data = parts.get(2).copied();
        Ok(Self {
            raw,
            kind,
            offset,
            data,
        })
    }

    /// Number of colon-separated parts, kind included (1 to 3).
    pub fn part_count(&self) -> usize {
        1 + usize::from(self.offset.is_some()) + usize::from(self.data.is_some())
    }

    /// The kind token if it belongs to the rewrite table.
    pub fn source_kind(&self) -> Option<SourceKind> {
        SourceKind::parse(self.kind)
    }
}

/// Target tag categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaintCategory {
    TaintOutput,
    TaintPropagation,
    TaintSink,
}

impl TaintCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaintCategory::TaintOutput => "TaintOutput",
            TaintCategory::TaintPropagation => "TaintPropagation",
            TaintCategory::TaintSink => "TaintSink",
        }
    }
}

impl fmt::Display for TaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const UNTRUSTED_SOURCE: &str = "UntrustedSource";
const SENSITIVE_DATA_SOURCE: &str = "SensitiveDataSource";
const EXECUTE: &str = "Execute";
const FORMAT_STRING: &str = "FormatString";
const SENSITIVE_DATA_LEAK: &str = "SensitiveDataLeak";

/// A tag in the target vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NormalizedTag {
    /// `TaintOutput::UntrustedSource`
    UntrustedOutput,
    /// `TaintOutput::SensitiveDataSource`
    SensitiveOutput,
    /// `TaintPropagation::UntrustedSource:<data>`
    UntrustedPropagation(String),
    /// `TaintSink::Execute`
    ExecuteSink,
    /// `TaintSink::FormatString`
    FormatStringSink,
    /// `TaintSink::SensitiveDataLeak`
    SensitiveDataLeakSink,
}

impl NormalizedTag {
    pub fn category(&self) -> TaintCategory {
        match self {
            NormalizedTag::UntrustedOutput | NormalizedTag::SensitiveOutput => {
                TaintCategory::TaintOutput
            }
            NormalizedTag::UntrustedPropagation(_) => TaintCategory::TaintPropagation,
            NormalizedTag::ExecuteSink
            | NormalizedTag::FormatStringSink
            | NormalizedTag::SensitiveDataLeakSink => TaintCategory::TaintSink,
        }
    }

    /// The taint type written after the empty offset.
    pub fn subcategory(&self) -> &'static str {
        match self {
            NormalizedTag::UntrustedOutput | NormalizedTag::UntrustedPropagation(_) => {
                UNTRUSTED_SOURCE
            }
            NormalizedTag::SensitiveOutput => SENSITIVE_DATA_SOURCE,
            NormalizedTag::ExecuteSink => EXECUTE,
            NormalizedTag::FormatStringSink => FORMAT_STRING,
            NormalizedTag::SensitiveDataLeakSink => SENSITIVE_DATA_LEAK,
        }
    }

    pub fn data(&self) -> Option<&str> {
        match self {
            NormalizedTag::UntrustedPropagation(data) => Some(data),
            _ => None,
        }
    }
}

impl fmt::Display for NormalizedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.category(), self.subcategory())?;
        if let Some(data) = self.data() {
            write!(f, ":{data}")?;
        }
        Ok(())
    }
}

impl FromStr for NormalizedTag {
    type Err = String;

    /// Recognise a string that already spells a target tag.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let propagation_prefix = format!(
            "{}::{UNTRUSTED_SOURCE}{TAG_SEPARATOR}",
            TaintCategory::TaintPropagation
        );
        if let Some(data) = s.strip_prefix(propagation_prefix.as_str()) {
            return Ok(NormalizedTag::UntrustedPropagation(data.to_string()));
        }
        match s {
            "TaintOutput::UntrustedSource" => Ok(NormalizedTag::UntrustedOutput),
            "TaintOutput::SensitiveDataSource" => Ok(NormalizedTag::SensitiveOutput),
            "TaintSink::Execute" => Ok(NormalizedTag::ExecuteSink),
            "TaintSink::FormatString" => Ok(NormalizedTag::FormatStringSink),
            "TaintSink::SensitiveDataLeak" => Ok(NormalizedTag::SensitiveDataLeakSink),
            _ => Err(format!("Not a normalized taint tag: {s}")),
        }
    }
}
