use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors produced while converting or flattening value trees.
#[derive(Debug, Error)]
pub enum TreeError {
	/// Flatten input was not a mapping.
	#[error("expected a mapping at the top level, found {found}")]
	NotAMapping {
		/// Kind label of the rejected value.
		found: &'static str,
	},
	/// Nesting went deeper than the configured flatten limit.
	#[error("nesting depth exceeded limit {limit} at key {key:?}")]
	DepthLimitExceeded {
		/// Configured maximum depth.
		limit: usize,
		/// Composite key being built when the limit was hit.
		key: String,
	},
	/// JSON text could not be parsed into a value tree.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}
