//! Value classes: the in-memory representation chosen for a bound value.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use super::value::HiveValue;
use crate::error::{Error, Result};

static DECIMAL_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)$").expect("valid decimal regex"));

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Representation used to hold a value of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    Text,
    Decimal,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    Date,
    Timestamp,
    Time,
    Boolean,
    /// Row-set / cursor handle.
    RowSet,
    Array,
}

impl ValueClass {
    /// Instantiate a value of this class from fixture text.
    ///
    /// Surrounding whitespace is ignored for everything except `Text`.
    /// Cursor and array classes have no textual form and fail with
    /// [`Error::TypeConversion`].
    ///
    /// ```
    /// use hive_env_rs::{HiveValue, ValueClass};
    ///
    /// assert_eq!(ValueClass::Integer.parse(" 42 ").unwrap(), HiveValue::Int(42));
    /// assert!(ValueClass::Integer.parse("forty-two").is_err());
    /// ```
    pub fn parse(&self, text: &str) -> Result<HiveValue> {
        let trimmed = text.trim();
        let invalid = || Error::type_conversion(format!("cannot parse '{}' as {}", text, self));

        match self {
            ValueClass::Text => Ok(HiveValue::String(text.to_string())),
            ValueClass::Decimal => {
                if DECIMAL_TEXT.is_match(trimmed) {
                    Ok(HiveValue::Decimal(trimmed.to_string()))
                } else {
                    Err(invalid())
                }
            }
            ValueClass::Integer => trimmed.parse().map(HiveValue::Int).map_err(|_| invalid()),
            ValueClass::Long => trimmed.parse().map(HiveValue::BigInt).map_err(|_| invalid()),
            ValueClass::Float => trimmed.parse().map(HiveValue::Float).map_err(|_| invalid()),
            ValueClass::Double => trimmed.parse().map(HiveValue::Double).map_err(|_| invalid()),
            ValueClass::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" => Ok(HiveValue::Boolean(true)),
                "false" => Ok(HiveValue::Boolean(false)),
                _ => Err(invalid()),
            },
            ValueClass::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(HiveValue::Date)
                .map_err(|_| invalid()),
            ValueClass::Time => NaiveTime::parse_from_str(trimmed, "%H:%M:%S%.f")
                .map(HiveValue::Time)
                .map_err(|_| invalid()),
            ValueClass::Timestamp => parse_timestamp(trimmed)
                .map(HiveValue::Timestamp)
                .ok_or_else(invalid),
            ValueClass::RowSet | ValueClass::Array => Err(Error::type_conversion(format!(
                "{} values cannot be bound from text",
                self
            ))),
        }
    }
}

fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            // Date-only input means midnight.
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl std::fmt::Display for ValueClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValueClass::Text => "text",
            ValueClass::Decimal => "decimal",
            ValueClass::Integer => "integer",
            ValueClass::Long => "long",
            ValueClass::Float => "float",
            ValueClass::Double => "double",
            ValueClass::Date => "date",
            ValueClass::Timestamp => "timestamp",
            ValueClass::Time => "time",
            ValueClass::Boolean => "boolean",
            ValueClass::RowSet => "row set",
            ValueClass::Array => "array",
        };
        f.write_str(name)
    }
}
