//! Normalised relational type codes.
//!
//! Codes are independent of any driver, but `code()` keeps the integer
//! values JDBC assigns so descriptors can be handed to JDBC-minded tooling.

/// Normalised relational type of a column or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalType {
    Varchar,
    Numeric,
    Integer,
    Float,
    Double,
    BigInt,
    Timestamp,
    Date,
    Time,
    /// Reference cursor.
    Ref,
    Boolean,
    Binary,
    Array,
    Struct,
    /// Catch-all for types without a dedicated code (Hive MAP and UNIONTYPE).
    Other,
    /// Absent type name.
    Null,
}

impl RelationalType {
    /// Every relational type, in declaration order.
    pub const ALL: [RelationalType; 16] = [
        RelationalType::Varchar,
        RelationalType::Numeric,
        RelationalType::Integer,
        RelationalType::Float,
        RelationalType::Double,
        RelationalType::BigInt,
        RelationalType::Timestamp,
        RelationalType::Date,
        RelationalType::Time,
        RelationalType::Ref,
        RelationalType::Boolean,
        RelationalType::Binary,
        RelationalType::Array,
        RelationalType::Struct,
        RelationalType::Other,
        RelationalType::Null,
    ];

    /// JDBC type code.
    pub fn code(&self) -> i32 {
        match self {
            RelationalType::Varchar => 12,
            RelationalType::Numeric => 2,
            RelationalType::Integer => 4,
            RelationalType::Float => 6,
            RelationalType::Double => 8,
            RelationalType::BigInt => -5,
            RelationalType::Timestamp => 93,
            RelationalType::Date => 91,
            RelationalType::Time => 92,
            RelationalType::Ref => 2006,
            RelationalType::Boolean => 16,
            RelationalType::Binary => -2,
            RelationalType::Array => 2003,
            RelationalType::Struct => 2002,
            RelationalType::Other => 1111,
            RelationalType::Null => 0,
        }
    }

    /// Reverse of [`RelationalType::code`].
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl std::fmt::Display for RelationalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RelationalType::Varchar => "VARCHAR",
            RelationalType::Numeric => "NUMERIC",
            RelationalType::Integer => "INTEGER",
            RelationalType::Float => "FLOAT",
            RelationalType::Double => "DOUBLE",
            RelationalType::BigInt => "BIGINT",
            RelationalType::Timestamp => "TIMESTAMP",
            RelationalType::Date => "DATE",
            RelationalType::Time => "TIME",
            RelationalType::Ref => "REF",
            RelationalType::Boolean => "BOOLEAN",
            RelationalType::Binary => "BINARY",
            RelationalType::Array => "ARRAY",
            RelationalType::Struct => "STRUCT",
            RelationalType::Other => "OTHER",
            RelationalType::Null => "NULL",
        };
        f.write_str(name)
    }
}
