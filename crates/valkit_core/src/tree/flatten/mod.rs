use std::convert::Infallible;

use crate::tree::{Mapping, Result, TreeError, Value};

/// Options controlling mapping flattening.
#[derive(Debug, Clone)]
pub struct FlattenOptions {
	/// Separator placed between a parent key and a nested mapping key.
	pub separator: String,
	/// Prefix applied to every top-level key; empty means no prefix.
	pub parent_key: String,
	/// Maximum container nesting below the top-level mapping, or `None` for no limit.
	pub max_depth: Option<usize>,
}

impl Default for FlattenOptions {
	fn default() -> Self {
		Self {
			separator: "_".to_owned(),
			parent_key: String::new(),
			max_depth: None,
		}
	}
}

impl FlattenOptions {
	/// Default options with a custom separator.
	pub fn with_separator(separator: impl Into<String>) -> Self {
		Self {
			separator: separator.into(),
			..Self::default()
		}
	}
}

/// Flatten `data` into a single-level mapping keyed by joined paths.
///
/// Nested mapping keys are joined with `sep`; sequence elements get a `_<index>` suffix.
/// When two paths produce the same key, the later one wins.
pub fn flatten_dict(data: &Mapping, parent_key: &str, sep: &str) -> Mapping {
	let walker = Walker {
		separator: sep,
		guard: Unbounded,
	};
	let mut out = Mapping::with_capacity(data.len());
	match walker.walk_mapping(&mut out, data, parent_key, 0) {
		Ok(()) => out,
		Err(never) => match never {},
	}
}

/// Flatten `data` using explicit options.
pub fn flatten_with(data: &Mapping, options: &FlattenOptions) -> Result<Mapping> {
	let walker = Walker {
		separator: &options.separator,
		guard: DepthLimit(options.max_depth),
	};
	let mut out = Mapping::with_capacity(data.len());
	walker.walk_mapping(&mut out, data, &options.parent_key, 0)?;
	Ok(out)
}

/// Flatten a generic value whose top level must be a mapping.
pub fn flatten_value(value: &Value, options: &FlattenOptions) -> Result<Mapping> {
	match value {
		Value::Map(map) => flatten_with(map, options),
		other => Err(TreeError::NotAMapping { found: other.kind() }),
	}
}

/// Decides whether the walk may enter one more container level.
trait DepthGuard {
	type Error;

	fn descend(&self, key: &str, depth: usize) -> std::result::Result<usize, Self::Error>;
}

struct Unbounded;

impl DepthGuard for Unbounded {
	type Error = Infallible;

	fn descend(&self, _key: &str, depth: usize) -> std::result::Result<usize, Infallible> {
		Ok(depth + 1)
	}
}

struct DepthLimit(Option<usize>);

impl DepthGuard for DepthLimit {
	type Error = TreeError;

	fn descend(&self, key: &str, depth: usize) -> Result<usize> {
		let depth = depth + 1;
		match self.0 {
			Some(limit) if depth > limit => {
				tracing::debug!(key, limit, "flatten depth limit reached");
				Err(TreeError::DepthLimitExceeded { limit, key: key.to_owned() })
			}
			_ => Ok(depth),
		}
	}
}

struct Walker<'a, G> {
	separator: &'a str,
	guard: G,
}

impl<G: DepthGuard> Walker<'_, G> {
	fn walk_mapping(&self, out: &mut Mapping, data: &Mapping, parent_key: &str, depth: usize) -> std::result::Result<(), G::Error> {
		for (key, value) in data {
			let key = if parent_key.is_empty() {
				key.to_owned()
			} else {
				format!("{parent_key}{}{key}", self.separator)
			};
			self.walk_entry(out, key, value, depth)?;
		}
		Ok(())
	}

	fn walk_entry(&self, out: &mut Mapping, key: String, value: &Value, depth: usize) -> std::result::Result<(), G::Error> {
		match value {
			Value::Map(map) => {
				let depth = self.guard.descend(&key, depth)?;
				self.walk_mapping(out, map, &key, depth)
			}
			Value::Array(items) => {
				let depth = self.guard.descend(&key, depth)?;
				for (idx, item) in items.iter().enumerate() {
					self.walk_entry(out, format!("{key}_{idx}"), item, depth)?;
				}
				Ok(())
			}
			scalar => {
				if out.contains_key(&key) {
					tracing::trace!(key = key.as_str(), "flattened key collision, later value wins");
				}
				out.insert(key, scalar.clone());
				Ok(())
			}
		}
	}
}
