//! Check issue types.
//!
//! Each variant carries only the data its message needs. Slot indices are
//! zero-based; slot 0 is the return value.

use serde::{Deserialize, Serialize};

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The engine refuses to load the document.
    Error,
    /// The engine loads the document but ignores or misreads part of it.
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Annotation check issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    // Shape checks
    /// Entry value is not a JSON object.
    NotAnObject,
    /// Entry lacks a field the engine requires.
    MissingField { field: String },
    /// Field present with the wrong JSON shape.
    MalformedField { field: String, expected: String },
    /// `annotation` has no return slot.
    MissingReturnSlot,

    // Statement checks
    /// `MaybeInitNull` may annotate only the return value.
    MaybeInitNullOnParameter { slot: usize },
    /// Offset opens `[` without a closing `]`.
    UnclosedOffsetBracket { slot: usize, statement: String },
    /// Offset contains a character other than `*`, `&` or `[..]`.
    UnexpectedOffsetChar {
        slot: usize,
        statement: String,
        found: char,
    },
    /// Allocation or free value is not a number.
    NonNumericValue { slot: usize, statement: String },
    /// Taint statement without a taint type.
    MissingTaintType { slot: usize, statement: String },
    /// Propagation data is not a parameter number starting at 1.
    InvalidPropagationIndex { slot: usize, statement: String },

    // Property checks
    /// Property the engine does not recognise.
    UnknownProperty { property: String },
}

impl Issue {
    /// Stable issue code.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::NotAnObject | Issue::MissingField { .. } => "A001",
            Issue::MissingReturnSlot => "A002",
            Issue::MaybeInitNullOnParameter { .. } => "A003",
            Issue::UnknownProperty { .. } => "A004",
            Issue::UnclosedOffsetBracket { .. } => "A005",
            Issue::UnexpectedOffsetChar { .. } => "A006",
            Issue::NonNumericValue { .. } => "A007",
            Issue::MissingTaintType { .. } => "A008",
            Issue::InvalidPropagationIndex { .. } => "A009",
            Issue::MalformedField { .. } => "A010",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnknownProperty { .. } | Issue::UnexpectedOffsetChar { .. } => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// Parameter slot the issue points at, if any.
    pub fn slot(&self) -> Option<usize> {
        match self {
            Issue::MaybeInitNullOnParameter { slot }
            | Issue::UnclosedOffsetBracket { slot, .. }
            | Issue::UnexpectedOffsetChar { slot, .. }
            | Issue::NonNumericValue { slot, .. }
            | Issue::MissingTaintType { slot, .. }
            | Issue::InvalidPropagationIndex { slot, .. } => Some(*slot),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::NotAnObject => "entry is not a JSON object".to_string(),
            Issue::MissingField { field } => format!("entry has no '{field}' field"),
            Issue::MalformedField { field, expected } => {
                format!("'{field}' must be {expected}")
            }
            Issue::MissingReturnSlot => {
                "annotation is empty; the first slot must describe the return value".to_string()
            }
            Issue::MaybeInitNullOnParameter { slot } => {
                format!("MaybeInitNull on parameter slot #{slot}; it may annotate only the return value")
            }
            Issue::UnclosedOffsetBracket { statement, .. } => {
                format!("offset in '{statement}' opens '[' without closing ']'")
            }
            Issue::UnexpectedOffsetChar {
                statement, found, ..
            } => format!("offset in '{statement}' contains unexpected character '{found}'"),
            Issue::NonNumericValue { statement, .. } => {
                format!("value in '{statement}' must be a number")
            }
            Issue::MissingTaintType { statement, .. } => {
                format!("'{statement}' has no taint type")
            }
            Issue::InvalidPropagationIndex { statement, .. } => {
                format!("'{statement}' must end in <type>:<index> with index >= 1")
            }
            Issue::UnknownProperty { property } => {
                format!("property '{property}' is not recognised and will be ignored")
            }
        }
    }
}
