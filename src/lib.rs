//! Hive environment for SQL test fixtures.
//!
//! Adapts Apache Hive (HiveServer2) to a fixture-execution framework:
//! builds connection strings, rewrites `@name` bind parameters into the
//! positional placeholders the driver accepts, and describes table columns
//! with Hive type names mapped onto relational types and value classes.
//!
//! The connection itself is consumed through [`DbConnection`]; this crate
//! never opens, pools or retries connections.
//!
//! # Example
//!
//! ```no_run
//! use hive_env_rs::{DbConnection, DbEnvironment, HiveEnvironment, Result};
//!
//! async fn show_columns<C: DbConnection>(conn: &mut C) -> Result<()> {
//!     let env = HiveEnvironment::new();
//!
//!     let columns = env.describe_columns(conn, "orders").await?;
//!     for (key, column) in &columns {
//!         println!(
//!             "{} #{}: {} as {}",
//!             key,
//!             column.position(),
//!             column.relational_type(),
//!             column.value_class()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod connection;
pub mod cursor;
pub mod environment;
pub mod error;
pub mod normalise;
pub mod types;

// Re-export main types
pub use connection::{ConnectParams, DbConnection, HIVE_URL_SCHEME};
pub use cursor::Cursor;
pub use environment::{ColumnMap, DbEnvironment, HiveEnvironment};
pub use error::{Error, Result};
pub use normalise::{CaseFoldingNormaliser, NameNormaliser};
pub use types::{
    classify, normalise_type_name, relational_type_of, value_class_of, ColumnDescriptor,
    Direction, HiveValue, RelationalType, Row, TypeFamily, ValueClass,
};
