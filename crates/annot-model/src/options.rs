//! Configuration options for conversion.

use serde::{Deserialize, Serialize};

/// Whether taint tags are rewritten into the target vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaintMode {
    /// Copy annotation arrays unchanged; only keys are split.
    #[default]
    Passthrough,
    /// Rewrite every tag through the taint rule table.
    Normalize,
}

impl TaintMode {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            TaintMode::Normalize
        } else {
            TaintMode::Passthrough
        }
    }

    pub fn is_normalize(&self) -> bool {
        matches!(self, TaintMode::Normalize)
    }
}

/// Options controlling conversion behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    pub taint: TaintMode,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_taint(mut self, taint: TaintMode) -> Self {
        self.taint = taint;
        self
    }
}
