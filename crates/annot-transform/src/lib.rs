//! Annotation transformation.
//!
//! This crate holds the conversion logic:
//!
//! - **split**: `display(mangled)` key parsing
//! - **rewrite**: taint tag rewriting into the target vocabulary
//! - **merge**: folding source documents into one mapping, last file wins

pub mod error;
pub mod merge;
pub mod rewrite;
pub mod split;

pub use error::{Result, TransformError};
pub use merge::{Conversion, SourceSummary, convert, merge_document};
pub use rewrite::{RewriteOutcome, TagRewrite, rewrite_annotation, rewrite_tag, target_tag};
pub use split::split_function_key;
