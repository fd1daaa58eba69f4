//! Target annotation document output.
//!
//! Documents are written as UTF-8 JSON indented with two spaces, one
//! top-level key per mangled function name in merge order.

mod error;
mod writer;

pub use error::{OutputError, Result};
pub use writer::{encode_json, encode_mapping, write_mapping};
