use crate::tree::Value;
use crate::tree::matcher::{fold_case, value_match};

/// Check whether `needle` is contained in `haystack`.
///
/// Strings are compared as case-folded substrings with all whitespace removed. Every element of a
/// sequence needle must be contained in some element of the haystack sequence, in any position.
/// Mapping needles require each key in the haystack with a contained value. Other values defer to
/// [`value_match`].
pub fn value_contains(needle: &Value, haystack: &Value) -> bool {
	match (needle, haystack) {
		(Value::String(a), Value::String(b)) => squash(b).contains(&squash(a)),
		(Value::Array(a), Value::Array(b)) => a.iter().all(|v| b.iter().any(|c| value_contains(v, c))),
		(Value::Map(a), Value::Map(b)) => a.iter().all(|(key, v)| b.get(key).is_some_and(|c| value_contains(v, c))),
		_ => value_match(needle, haystack),
	}
}

fn squash(text: &str) -> String {
	let stripped: String = text.chars().filter(|ch| !ch.is_whitespace()).collect();
	fold_case(&stripped)
}

#[cfg(test)]
mod tests;
