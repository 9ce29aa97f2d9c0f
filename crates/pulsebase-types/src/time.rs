use std::fmt;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::errors::TypesError;

/// ms since epoch, UTC
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.timestamp_millis())
    }

    pub fn to_utc(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or_default()
    }

    /// ISO-8601 text, seconds precision, UTC with a trailing `Z`.
    /// Sub-second millis are truncated from the output.
    pub fn to_iso(self) -> String {
        self.to_utc().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl From<i64> for Timestamp {
    fn from(ms: i64) -> Self {
        Self(ms)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_utc(dt)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch millis or an ISO-8601 string with a timezone")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Timestamp, E> {
        Ok(Timestamp(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Timestamp, E> {
        Ok(Timestamp(v as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Timestamp, E> {
        Ok(Timestamp(v as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Timestamp, E> {
        parse_iso(v)
            .map(Timestamp::from_utc)
            .ok_or_else(|| E::custom(format!("not an ISO-8601 instant: {v}")))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

fn parse_iso(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt: DateTime<FixedOffset>| dt.with_timezone(&Utc))
}

/// Heterogeneous time input for query bounds and time-valued fields.
///
/// Instants are stored canonically as epoch millis. Strings that do not
/// parse as ISO-8601 pass through verbatim as server-side expressions
/// (`"now"`, `"current_day"`) and are never rejected client-side.
#[derive(Clone, Debug, PartialEq)]
pub enum TimeSpec {
    Millis(i64),
    Expr(String),
}

impl TimeSpec {
    /// Normalize an optional input; absent means the current time.
    pub fn normalize(input: Option<TimeSpec>) -> TimeSpec {
        input.unwrap_or_else(|| TimeSpec::Millis(Timestamp::now().0))
    }

    /// Fallible conversion from raw JSON, used when decoding wire payloads.
    pub fn from_value(value: &Value) -> Result<TimeSpec, TypesError> {
        match value {
            Value::Null => Ok(TimeSpec::Millis(Timestamp::now().0)),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .map(TimeSpec::Millis)
                .ok_or_else(|| TypesError::time_invalid(&format!("numeric overflow: {n}"))),
            Value::String(s) => Ok(TimeSpec::from(s.as_str())),
            other => Err(TypesError::time_invalid(&format!(
                "unsupported time input shape: {other}"
            ))),
        }
    }

    pub fn instant(&self) -> Option<Timestamp> {
        match self {
            TimeSpec::Millis(ms) => Some(Timestamp(*ms)),
            TimeSpec::Expr(_) => None,
        }
    }

    /// Lazy view of the stored millis as a structured datetime.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.instant().map(Timestamp::to_utc)
    }

    pub fn as_expr(&self) -> Option<&str> {
        match self {
            TimeSpec::Expr(e) => Some(e),
            TimeSpec::Millis(_) => None,
        }
    }
}

impl From<i64> for TimeSpec {
    fn from(ms: i64) -> Self {
        TimeSpec::Millis(ms)
    }
}

impl From<Timestamp> for TimeSpec {
    fn from(ts: Timestamp) -> Self {
        TimeSpec::Millis(ts.0)
    }
}

impl From<DateTime<Utc>> for TimeSpec {
    fn from(dt: DateTime<Utc>) -> Self {
        TimeSpec::Millis(dt.timestamp_millis())
    }
}

impl From<DateTime<FixedOffset>> for TimeSpec {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        TimeSpec::Millis(dt.timestamp_millis())
    }
}

impl From<NaiveDateTime> for TimeSpec {
    // Zone-less datetimes are taken to be in the local zone.
    fn from(naive: NaiveDateTime) -> Self {
        let dt = Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive));
        TimeSpec::Millis(dt.timestamp_millis())
    }
}

impl From<&str> for TimeSpec {
    fn from(text: &str) -> Self {
        match parse_iso(text) {
            Some(dt) => TimeSpec::Millis(dt.timestamp_millis()),
            None => TimeSpec::Expr(text.to_string()),
        }
    }
}

impl From<String> for TimeSpec {
    fn from(text: String) -> Self {
        TimeSpec::from(text.as_str())
    }
}

impl Serialize for TimeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TimeSpec::Millis(ms) => serializer.serialize_i64(*ms),
            TimeSpec::Expr(e) => serializer.serialize_str(e),
        }
    }
}

struct TimeSpecVisitor;

impl Visitor<'_> for TimeSpecVisitor {
    type Value = TimeSpec;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch millis, an ISO-8601 string, or a server-side time expression")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<TimeSpec, E> {
        Ok(TimeSpec::Millis(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<TimeSpec, E> {
        Ok(TimeSpec::Millis(v as i64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<TimeSpec, E> {
        Ok(TimeSpec::Millis(v as i64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<TimeSpec, E> {
        Ok(TimeSpec::from(v))
    }
}

impl<'de> Deserialize<'de> for TimeSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimeSpecVisitor)
    }
}
