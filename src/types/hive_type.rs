//! Hive type-name classification.
//!
//! Hive reports column types as text (`int`, `decimal(10,2)`,
//! `array<string>`). Each name belongs to exactly one [`TypeFamily`], which
//! fixes its relational type and, for bindable families, its value class.
//! Family names follow the Hive language manual type overview.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::relational::RelationalType;
use super::value_class::ValueClass;
use crate::error::{Error, Result};

/// A family of Hive type names sharing one classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    String,
    Decimal,
    Integer,
    Float,
    Double,
    Long,
    Timestamp,
    Date,
    Time,
    RefCursor,
    Boolean,
    Binary,
    Array,
    Map,
    Struct,
    Union,
}

impl TypeFamily {
    /// Families in lookup order.
    pub const ALL: [TypeFamily; 16] = [
        TypeFamily::String,
        TypeFamily::Decimal,
        TypeFamily::Integer,
        TypeFamily::Float,
        TypeFamily::Double,
        TypeFamily::Long,
        TypeFamily::Timestamp,
        TypeFamily::Date,
        TypeFamily::Time,
        TypeFamily::RefCursor,
        TypeFamily::Boolean,
        TypeFamily::Binary,
        TypeFamily::Array,
        TypeFamily::Map,
        TypeFamily::Struct,
        TypeFamily::Union,
    ];

    /// Normalised Hive type names in this family.
    pub fn type_names(&self) -> &'static [&'static str] {
        match self {
            TypeFamily::String => &["STRING", "VARCHAR", "CHAR"],
            TypeFamily::Decimal => &["DECIMAL"],
            TypeFamily::Integer => &["TINYINT", "SMALLINT", "INT", "INTEGER"],
            TypeFamily::Float => &["FLOAT"],
            TypeFamily::Double => &["DOUBLE"],
            TypeFamily::Long => &["BIGINT"],
            TypeFamily::Timestamp => &["TIMESTAMP"],
            TypeFamily::Date => &["DATE"],
            // Hive has no TIME or cursor types.
            TypeFamily::Time => &[],
            TypeFamily::RefCursor => &[],
            TypeFamily::Boolean => &["BOOLEAN"],
            TypeFamily::Binary => &["BINARY"],
            TypeFamily::Array => &["ARRAY"],
            TypeFamily::Map => &["MAP"],
            TypeFamily::Struct => &["STRUCT"],
            TypeFamily::Union => &["UNIONTYPE"],
        }
    }

    pub fn relational_type(&self) -> RelationalType {
        match self {
            TypeFamily::String => RelationalType::Varchar,
            TypeFamily::Decimal => RelationalType::Numeric,
            TypeFamily::Integer => RelationalType::Integer,
            TypeFamily::Float => RelationalType::Float,
            TypeFamily::Double => RelationalType::Double,
            TypeFamily::Long => RelationalType::BigInt,
            TypeFamily::Timestamp => RelationalType::Timestamp,
            TypeFamily::Date => RelationalType::Date,
            TypeFamily::Time => RelationalType::Time,
            TypeFamily::RefCursor => RelationalType::Ref,
            TypeFamily::Boolean => RelationalType::Boolean,
            TypeFamily::Binary => RelationalType::Binary,
            TypeFamily::Array => RelationalType::Array,
            TypeFamily::Map | TypeFamily::Union => RelationalType::Other,
            TypeFamily::Struct => RelationalType::Struct,
        }
    }

    /// Value class for bound values, `None` for families that cannot be
    /// bound as parameters yet.
    pub fn value_class(&self) -> Option<ValueClass> {
        match self {
            TypeFamily::String => Some(ValueClass::Text),
            TypeFamily::Decimal => Some(ValueClass::Decimal),
            TypeFamily::Integer => Some(ValueClass::Integer),
            TypeFamily::Float => Some(ValueClass::Float),
            TypeFamily::Date => Some(ValueClass::Date),
            TypeFamily::RefCursor => Some(ValueClass::RowSet),
            TypeFamily::Double => Some(ValueClass::Double),
            TypeFamily::Long => Some(ValueClass::Long),
            TypeFamily::Timestamp => Some(ValueClass::Timestamp),
            TypeFamily::Time => Some(ValueClass::Time),
            TypeFamily::Boolean => Some(ValueClass::Boolean),
            TypeFamily::Array => Some(ValueClass::Array),
            TypeFamily::Binary | TypeFamily::Map | TypeFamily::Struct | TypeFamily::Union => None,
        }
    }
}

static FAMILY_BY_NAME: Lazy<HashMap<&'static str, TypeFamily>> = Lazy::new(|| {
    let mut families = HashMap::new();
    for family in TypeFamily::ALL {
        for name in family.type_names() {
            families.entry(*name).or_insert(family);
        }
    }
    families
});

/// Upper-case and trim a raw type name.
pub fn normalise_type_name(data_type: &str) -> String {
    data_type.trim().to_uppercase()
}

/// Base name of a normalised type, without its trailing parameter list.
///
/// `None` when the list is unbalanced or followed by more text.
fn base_type_name(normalised: &str) -> Option<&str> {
    let Some(start) = normalised.find(['(', '<']) else {
        return Some(normalised);
    };

    let mut open = Vec::new();
    for (i, c) in normalised[start..].char_indices() {
        let opener = match c {
            '(' | '<' => {
                open.push(c);
                continue;
            }
            ')' => '(',
            '>' => '<',
            _ => continue,
        };
        if open.pop() != Some(opener) {
            return None;
        }
        if open.is_empty() && start + i + c.len_utf8() != normalised.len() {
            return None;
        }
    }

    if open.is_empty() {
        Some(normalised[..start].trim_end())
    } else {
        None
    }
}

/// Find the family of a raw type name.
pub fn classify(data_type: &str) -> Option<TypeFamily> {
    let normalised = normalise_type_name(data_type);
    FAMILY_BY_NAME.get(base_type_name(&normalised)?).copied()
}

fn family_of(data_type: &str) -> Result<TypeFamily> {
    classify(data_type).ok_or_else(|| Error::unsupported_type(normalise_type_name(data_type)))
}

/// Relational type of a Hive type name.
///
/// An absent name maps to [`RelationalType::Null`].
///
/// ```
/// use hive_env_rs::{relational_type_of, RelationalType};
///
/// assert_eq!(relational_type_of(Some(" varchar ")).unwrap(), RelationalType::Varchar);
/// assert_eq!(relational_type_of(None).unwrap(), RelationalType::Null);
/// ```
pub fn relational_type_of(data_type: Option<&str>) -> Result<RelationalType> {
    match data_type {
        None => Ok(RelationalType::Null),
        Some(name) => family_of(name).map(|f| f.relational_type()),
    }
}

/// Value class of a Hive type name.
///
/// Unlike [`relational_type_of`], an absent name is an error, and the
/// binary, map, struct and union families have no value class.
pub fn value_class_of(data_type: Option<&str>) -> Result<ValueClass> {
    let name = data_type.ok_or(Error::NullType)?;
    family_of(name)?
        .value_class()
        .ok_or_else(|| Error::unsupported_type(normalise_type_name(name)))
}
