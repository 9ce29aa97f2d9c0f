//! Object <-> wire JSON mapping.
//!
//! Model and query types carry serde derives; the adapters here implement the
//! nonstandard encodings of the wire contract: booleans as the string
//! literals `"true"`/`"false"` (decoding also tolerates native booleans), and
//! `NaN` as the deleted-sample sentinel, distinct from JSON `null`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::ClientError;

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

pub fn to_wire<T: Serialize>(value: &T) -> Result<Value, ClientError> {
    serde_json::to_value(value)
        .map_err(|err| ClientError::encode(short_type_name::<T>(), &err.to_string()))
}

/// One array element per item; the batched request body shape.
pub fn to_wire_array<T: Serialize>(items: &[T]) -> Result<Value, ClientError> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(to_wire(item)?);
    }
    Ok(Value::Array(out))
}

pub fn from_wire<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    serde_json::from_value(value)
        .map_err(|err| ClientError::decode(short_type_name::<T>(), &err.to_string()))
}

/// Array input decodes elementwise, preserving order; a bare object decodes
/// as a single-element result.
pub fn from_wire_array<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, ClientError> {
    match value {
        Value::Array(items) => items.into_iter().map(from_wire).collect(),
        other => Ok(vec![from_wire(other)?]),
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Boolish {
    Flag(bool),
    Text(String),
}

impl Boolish {
    fn into_bool(self) -> Result<bool, String> {
        match self {
            Boolish::Flag(b) => Ok(b),
            Boolish::Text(t) => match t.to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(format!("not a boolean literal: {other:?}")),
            },
        }
    }
}

pub mod bool_str {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(if *value { "true" } else { "false" })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        super::Boolish::deserialize(deserializer)?
            .into_bool()
            .map_err(D::Error::custom)
    }
}

pub mod bool_str_opt {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<bool>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(b) => super::bool_str::serialize(b, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<bool>, D::Error> {
        Option::<super::Boolish>::deserialize(deserializer)?
            .map(|b| b.into_bool().map_err(D::Error::custom))
            .transpose()
    }
}

pub mod sample_value {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            None => serializer.serialize_none(),
            Some(v) if v.is_nan() => serializer.serialize_str("NaN"),
            Some(v) => serializer.serialize_f64(*v),
        }
    }

    struct ValueVisitor;

    impl Visitor<'_> for ValueVisitor {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, null, or the literal \"NaN\"")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            if v.eq_ignore_ascii_case("nan") {
                return Ok(Some(f64::NAN));
            }
            v.parse::<f64>()
                .map(Some)
                .map_err(|_| E::custom(format!("not a sample value: {v:?}")))
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}
