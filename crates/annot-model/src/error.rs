use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("tag '{tag}' has {parts} colon-separated parts (at most 3 allowed)")]
    TooManyTagParts { tag: String, parts: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
