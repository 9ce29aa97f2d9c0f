use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::TypesError;

/// Alert/message severity, wire form is the numeric code 0..=7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Undefined = 0,
    Unknown = 1,
    Normal = 2,
    Warning = 3,
    Minor = 4,
    Major = 5,
    Critical = 6,
    Fatal = 7,
}

impl Severity {
    pub const ALL: [Severity; 8] = [
        Severity::Undefined,
        Severity::Unknown,
        Severity::Normal,
        Severity::Warning,
        Severity::Minor,
        Severity::Major,
        Severity::Critical,
        Severity::Fatal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Undefined => "UNDEFINED",
            Severity::Unknown => "UNKNOWN",
            Severity::Normal => "NORMAL",
            Severity::Warning => "WARNING",
            Severity::Minor => "MINOR",
            Severity::Major => "MAJOR",
            Severity::Critical => "CRITICAL",
            Severity::Fatal => "FATAL",
        }
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Result<Self, TypesError> {
        Self::ALL
            .into_iter()
            .find(|s| s.code() as i64 == code)
            .ok_or_else(|| TypesError::validation(&format!("severity code out of range: {code}")))
    }

    /// Parse a severity name or numeric string.
    pub fn parse(text: &str) -> Result<Self, TypesError> {
        if let Ok(code) = text.trim().parse::<i64>() {
            return Self::from_code(code);
        }
        let upper = text.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == upper)
            .ok_or_else(|| TypesError::validation(&format!("unknown severity: {text}")))
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Severity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.code() as u64)
    }
}

struct SeverityVisitor;

impl Visitor<'_> for SeverityVisitor {
    type Value = Severity;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a severity code 0..=7 or a severity name")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Severity, E> {
        Severity::from_code(v).map_err(|err| E::custom(err.into_inner()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Severity, E> {
        self.visit_i64(v as i64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Severity, E> {
        Severity::parse(v).map_err(|err| E::custom(err.into_inner()))
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}
