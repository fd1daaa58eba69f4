use annot_model::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransformError {
    /// A tag outside the `Kind[:offset[:data]]` shape reached the rewriter.
    #[error("malformed tag in {function} annotation elem #{param_index}: {source}")]
    MalformedTag {
        function: String,
        param_index: usize,
        #[source]
        source: ModelError,
    },
}

pub type Result<T> = std::result::Result<T, TransformError>;
