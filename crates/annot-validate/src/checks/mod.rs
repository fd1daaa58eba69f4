pub mod annotation;
pub mod entry;
pub mod properties;
pub mod statement;
