//! Hive type system: relational codes, value classes and classification.

mod descriptor;
mod hive_type;
mod relational;
mod row;
mod value;
mod value_class;

pub use descriptor::{ColumnDescriptor, Direction};
pub use hive_type::{classify, normalise_type_name, relational_type_of, value_class_of, TypeFamily};
pub use relational::RelationalType;
pub use row::Row;
pub use value::HiveValue;
pub use value_class::ValueClass;
