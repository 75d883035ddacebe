use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value as Json};

use crate::tree::{Mapping, Result, Value};

impl Value {
	/// Parse JSON text into a value tree, keeping object key order.
	pub fn from_json_str(text: &str) -> Result<Self> {
		let json: Json = serde_json::from_str(text)?;
		Ok(json.into())
	}
}

impl From<Json> for Value {
	fn from(value: Json) -> Self {
		match value {
			Json::Null => Self::Null,
			Json::Bool(value) => Self::Bool(value),
			Json::Number(number) => from_number(&number),
			Json::String(value) => Self::String(value),
			Json::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			Json::Object(object) => Self::Map(object.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

fn from_number(number: &Number) -> Value {
	if let Some(value) = number.as_i64() {
		Value::I64(value)
	} else if let Some(value) = number.as_u64() {
		Value::U64(value)
	} else {
		number.as_f64().map_or(Value::Null, Value::F64)
	}
}

/// Non-finite floats have no JSON form and become `null`.
impl From<Value> for Json {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(value) => Self::Bool(value),
			Value::I64(value) => Self::Number(value.into()),
			Value::U64(value) => Self::Number(value.into()),
			Value::F64(value) => Number::from_f64(value).map_or(Self::Null, Self::Number),
			Value::String(value) => Self::String(value),
			Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			Value::Map(map) => Self::Object(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(value) => serializer.serialize_bool(*value),
			Self::I64(value) => serializer.serialize_i64(*value),
			Self::U64(value) => serializer.serialize_u64(*value),
			Self::F64(value) if value.is_finite() => serializer.serialize_f64(*value),
			Self::F64(_) => serializer.serialize_unit(),
			Self::String(value) => serializer.serialize_str(value),
			Self::Array(items) => serializer.collect_seq(items),
			Self::Map(map) => map.serialize(serializer),
		}
	}
}

impl Serialize for Mapping {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		serializer.collect_map(self.iter())
	}
}

impl<'de> Deserialize<'de> for Value {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		Json::deserialize(deserializer).map(Self::from)
	}
}

impl<'de> Deserialize<'de> for Mapping {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let object = serde_json::Map::<String, Json>::deserialize(deserializer)?;
		Ok(object.into_iter().map(|(key, value)| (key, Value::from(value))).collect())
	}
}
