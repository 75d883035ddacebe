use crate::tree::Value;

/// Check whether `pattern` matches `candidate`.
///
/// Strings compare case-insensitively. Sequences compare pairwise over the shorter length, so
/// trailing elements of the longer side are ignored. Mappings require every key of `pattern` to
/// exist in `candidate` with a matching value; extra candidate keys are ignored. Anything else
/// falls back to native equality.
///
/// Booleans never equal numbers, so `true` does not match `1` (unlike Python, where `True == 1`).
pub fn value_match(pattern: &Value, candidate: &Value) -> bool {
	match (pattern, candidate) {
		(Value::String(a), Value::String(b)) => fold_case(a) == fold_case(b),
		(Value::Array(a), Value::Array(b)) => a.iter().zip(b).all(|(v, c)| value_match(v, c)),
		(Value::Map(a), Value::Map(b)) => a.iter().all(|(key, v)| b.get(key).is_some_and(|c| value_match(v, c))),
		_ => pattern == candidate,
	}
}

pub(crate) fn fold_case(text: &str) -> String {
	text.to_lowercase()
}
