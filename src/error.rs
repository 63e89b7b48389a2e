//! Error types for the Hive environment adapter.

use thiserror::Error;

/// Result type alias for Hive environment operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed driver error carried as the source of a database-access failure.
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for Hive environment operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Type name with no classification entry.
    #[error("Type {type_name} is not supported")]
    UnsupportedType { type_name: String },

    /// Absent type name reached the value-class lookup.
    #[error("Null type is not supported")]
    NullType,

    /// Failure preparing, executing or iterating a query.
    #[error("Database access error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<DriverError>,
    },

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },

    /// Type conversion error.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },
}

impl Error {
    /// Create a database-access error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an error raised by the underlying driver.
    pub fn driver(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unsupported-type error.
    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }
}
