//! Connection parameters and the driver connection consumed by environments.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::types::Row;
use std::future::Future;

/// URL scheme of the HiveServer2 driver.
pub const HIVE_URL_SCHEME: &str = "jdbc:hive2://";

/// Connection parameters.
///
/// The host is passed through untouched; it may carry a port
/// (`host:10000`) and the driver is the one to reject malformed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectParams {
    /// Data source host.
    pub host: String,
    /// Database (schema) to open.
    pub database: Option<String>,
}

impl ConnectParams {
    /// Create new connection parameters.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            database: None,
        }
    }

    /// Set the database.
    ///
    /// ```
    /// use hive_env_rs::ConnectParams;
    ///
    /// let params = ConnectParams::new("host1").with_database("db1");
    /// assert_eq!(params.connection_string(), "jdbc:hive2://host1/db1");
    /// ```
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Parse a data source like "host" or "host/database".
    ///
    /// Splits on the first `/`; an empty database counts as absent.
    pub fn parse(data_source: &str) -> Self {
        match data_source.split_once('/') {
            Some((host, "")) => Self::new(host),
            Some((host, database)) => Self::new(host).with_database(database),
            None => Self::new(data_source),
        }
    }

    /// Build the driver connection string.
    pub fn connection_string(&self) -> String {
        match &self.database {
            Some(database) => format!("{}{}/{}", HIVE_URL_SCHEME, self.host, database),
            None => format!("{}{}", HIVE_URL_SCHEME, self.host),
        }
    }
}

/// An open driver connection, owned and managed by the caller.
///
/// Opening a cursor prepares and executes `sql` as-is.
pub trait DbConnection: Send {
    /// Cursor type borrowing this connection.
    type Cursor<'c>: Cursor<Item = Row> + Send
    where
        Self: 'c;

    /// Prepare and execute a query, returning a cursor over its rows.
    fn open_cursor(&mut self, sql: &str) -> impl Future<Output = Result<Self::Cursor<'_>>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_string_host_only() {
        assert_eq!(ConnectParams::new("host1").connection_string(), "jdbc:hive2://host1");
    }

    #[test]
    fn test_connection_string_with_database() {
        let params = ConnectParams::new("host1").with_database("db1");
        assert_eq!(params.connection_string(), "jdbc:hive2://host1/db1");
    }

    #[test]
    fn test_parse_data_source() {
        assert_eq!(ConnectParams::parse("host1:10000"), ConnectParams::new("host1:10000"));
        assert_eq!(
            ConnectParams::parse("host1/db1"),
            ConnectParams::new("host1").with_database("db1")
        );
        assert_eq!(ConnectParams::parse("host1/"), ConnectParams::new("host1"));
    }

    #[test]
    fn test_malformed_host_passes_through() {
        let params = ConnectParams::new("not a host;;");
        assert_eq!(params.connection_string(), "jdbc:hive2://not a host;;");
    }
}
