mod json;

use indexmap::IndexMap;

/// Generic structured value: a scalar, an ordered sequence, or a string-keyed mapping.
#[derive(Debug, Clone)]
pub enum Value {
	/// Absent value.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar (values above `i64::MAX`).
	U64(u64),
	/// Floating point scalar.
	F64(f64),
	/// String scalar.
	String(String),
	/// Ordered sequence of values.
	Array(Vec<Value>),
	/// String-keyed mapping.
	Map(Mapping),
}

impl Value {
	/// Stable lowercase label for the value kind.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::I64(_) | Self::U64(_) => "int",
			Self::F64(_) => "float",
			Self::String(_) => "string",
			Self::Array(_) => "array",
			Self::Map(_) => "map",
		}
	}

	/// Whether this value is neither an array nor a mapping.
	pub fn is_scalar(&self) -> bool {
		!matches!(self, Self::Array(_) | Self::Map(_))
	}

	/// Borrow the string payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Borrow the sequence payload, if any.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow the mapping payload, if any.
	pub fn as_map(&self) -> Option<&Mapping> {
		match self {
			Self::Map(map) => Some(map),
			_ => None,
		}
	}

	fn as_number(&self) -> Option<Number> {
		match self {
			Self::I64(value) => Some(Number::Int(i128::from(*value))),
			Self::U64(value) => Some(Number::Int(i128::from(*value))),
			Self::F64(value) => Some(Number::Float(*value)),
			_ => None,
		}
	}
}

/// Deep structural equality. Numbers compare by value across integer and float variants.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Null, Self::Null) => true,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::String(a), Self::String(b)) => a == b,
			(Self::Array(a), Self::Array(b)) => a == b,
			(Self::Map(a), Self::Map(b)) => a == b,
			_ => match (self.as_number(), other.as_number()) {
				(Some(a), Some(b)) => a == b,
				_ => false,
			},
		}
	}
}

#[derive(Clone, Copy)]
enum Number {
	Int(i128),
	Float(f64),
}

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool {
		match (*self, *other) {
			(Self::Int(a), Self::Int(b)) => a == b,
			(Self::Float(a), Self::Float(b)) => a == b,
			(Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => f.is_finite() && f.trunc() == f && f as i128 == i,
		}
	}
}

/// Insertion-ordered mapping with unique string keys.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
	entries: IndexMap<String, Value>,
}

impl Mapping {
	/// Create an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Create an empty mapping with room for `capacity` entries.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: IndexMap::with_capacity(capacity),
		}
	}

	/// Number of entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Look up a value by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.entries.get(key)
	}

	/// Whether `key` is present.
	pub fn contains_key(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	/// Insert a value, replacing an existing entry in place.
	///
	/// A replaced entry keeps its original position; the previous value is returned.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
		self.entries.insert(key.into(), value)
	}

	/// Iterate entries in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
		self.entries.iter().map(|(key, value)| (key.as_str(), value))
	}

	/// Iterate keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries.keys().map(String::as_str)
	}

	/// Iterate values in insertion order.
	pub fn values(&self) -> impl Iterator<Item = &Value> + '_ {
		self.entries.values()
	}
}

/// Order-insensitive: same key set, equal values per key.
impl PartialEq for Mapping {
	fn eq(&self, other: &Self) -> bool {
		self.entries == other.entries
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		let mut map = Self::new();
		map.extend(iter);
		map
	}
}

impl<K: Into<String>> Extend<(K, Value)> for Mapping {
	fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
		self.entries.extend(iter.into_iter().map(|(key, value)| (key.into(), value)));
	}
}

impl IntoIterator for Mapping {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

impl<'a> IntoIterator for &'a Mapping {
	type Item = (&'a str, &'a Value);
	type IntoIter = std::iter::Map<indexmap::map::Iter<'a, String, Value>, fn((&'a String, &'a Value)) -> (&'a str, &'a Value)>;

	fn into_iter(self) -> Self::IntoIter {
		fn split<'e>((key, value): (&'e String, &'e Value)) -> (&'e str, &'e Value) {
			(key.as_str(), value)
		}
		self.entries.iter().map(split as fn((&'a String, &'a Value)) -> (&'a str, &'a Value))
	}
}

macro_rules! value_from {
	($type:ty, $variant:ident) => {
		impl From<$type> for Value {
			fn from(value: $type) -> Self {
				Self::$variant(value.into())
			}
		}
	};
}

value_from!(bool, Bool);
value_from!(i32, I64);
value_from!(i64, I64);
value_from!(u32, I64);
value_from!(f64, F64);
value_from!(&str, String);
value_from!(String, String);
value_from!(Vec<Value>, Array);
value_from!(Mapping, Map);

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(value) => Self::I64(value),
			Err(_) => Self::U64(value),
		}
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}
