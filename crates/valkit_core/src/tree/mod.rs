mod contains;
mod error;
mod flatten;
mod matcher;
mod value;

/// Recursive containment check.
pub use contains::value_contains;
/// Error and result aliases.
pub use error::{Result, TreeError};
/// Mapping flattening entry points and options.
pub use flatten::{FlattenOptions, flatten_dict, flatten_value, flatten_with};
/// Case-insensitive structural match.
pub use matcher::value_match;
/// Generic value types.
pub use value::{Mapping, Value};
