//! Hive value types for query results and bind parameters.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// A single Hive value.
#[derive(Debug, Clone, PartialEq)]
pub enum HiveValue {
    /// NULL value.
    Null,
    /// String value (STRING, VARCHAR, CHAR).
    String(String),
    /// Decimal value as string (preserves precision).
    Decimal(String),
    /// 32-bit integer (TINYINT, SMALLINT, INT).
    Int(i32),
    /// 64-bit integer (BIGINT).
    BigInt(i64),
    Float(f32),
    Double(f64),
    Boolean(bool),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Time(NaiveTime),
    /// ARRAY value.
    Array(Vec<HiveValue>),
}

impl HiveValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, HiveValue::Null)
    }

    /// Textual form of the value, `None` for NULL.
    pub fn to_text(&self) -> Option<String> {
        if self.is_null() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl From<&str> for HiveValue {
    fn from(s: &str) -> Self {
        HiveValue::String(s.to_string())
    }
}

impl From<String> for HiveValue {
    fn from(s: String) -> Self {
        HiveValue::String(s)
    }
}

impl<T: Into<HiveValue>> From<Option<T>> for HiveValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(HiveValue::Null, Into::into)
    }
}

impl fmt::Display for HiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HiveValue::Null => write!(f, "NULL"),
            HiveValue::String(s) => write!(f, "{}", s),
            HiveValue::Decimal(n) => write!(f, "{}", n),
            HiveValue::Int(v) => write!(f, "{}", v),
            HiveValue::BigInt(v) => write!(f, "{}", v),
            HiveValue::Float(v) => write!(f, "{}", v),
            HiveValue::Double(v) => write!(f, "{}", v),
            HiveValue::Boolean(v) => write!(f, "{}", v),
            HiveValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            HiveValue::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.f")),
            HiveValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S%.f")),
            HiveValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
