//! Database environments: the adapter between fixture execution and a
//! specific engine.
//!
//! The surrounding framework owns connections and parameter binding. An
//! environment only knows how to reach its engine, how to rewrite fixture
//! command text for the driver, and how to describe a table's columns.

use indexmap::IndexMap;
use regex::Regex;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::command::{self, CommandTextProcessor};
use crate::connection::{ConnectParams, DbConnection};
use crate::cursor::Cursor;
use crate::error::Result;
use crate::normalise::{CaseFoldingNormaliser, NameNormaliser};
use crate::types::{relational_type_of, value_class_of, ColumnDescriptor, Direction, Row};

/// Column descriptors keyed by normalised name, in result order.
pub type ColumnMap = IndexMap<String, ColumnDescriptor>;

/// Capabilities an engine adapter provides to the fixture framework.
///
/// Every operation runs against a connection the caller opened and keeps
/// owning. Environments hold no per-connection state, so one instance can
/// serve many callers as long as each brings its own connection.
pub trait DbEnvironment: Send + Sync {
    /// Registry name of the environment.
    fn name(&self) -> &'static str;

    /// Driver connection string for the given parameters.
    fn connection_string(&self, params: &ConnectParams) -> String;

    /// Pattern matching bind-parameter tokens in fixture command text.
    fn parameter_pattern(&self) -> &Regex;

    /// Rewrite fixture command text into text the driver accepts.
    fn parse_command_text(&self, command_text: &str) -> String;

    /// Whether inserts can hand generated values back through output
    /// parameters.
    fn supports_output_on_insert(&self) -> bool;

    /// Describe the columns of a table or view.
    fn describe_columns<C: DbConnection>(
        &self,
        conn: &mut C,
        table_or_view: &str,
    ) -> impl Future<Output = Result<ColumnMap>> + Send;

    /// Describe the parameters of a stored procedure.
    ///
    /// `Ok(None)` means the engine cannot introspect procedures, which is
    /// different from `Ok(Some(empty))` for a procedure without parameters.
    fn describe_procedure_parameters<C: DbConnection>(
        &self,
        conn: &mut C,
        proc_name: &str,
    ) -> impl Future<Output = Result<Option<ColumnMap>>> + Send;
}

/// Apache Hive through the HiveServer2 driver.
///
/// # Example
///
/// ```
/// use hive_env_rs::{ConnectParams, DbEnvironment, HiveEnvironment};
///
/// let env = HiveEnvironment::new();
/// assert_eq!(
///     env.connection_string(&ConnectParams::parse("host1/db1")),
///     "jdbc:hive2://host1/db1"
/// );
/// assert_eq!(
///     env.parse_command_text("select * from t\nwhere id = @id"),
///     "select * from t where id = ?"
/// );
/// ```
#[derive(Clone)]
pub struct HiveEnvironment {
    normaliser: Arc<dyn NameNormaliser>,
    command_processor: CommandTextProcessor,
}

impl HiveEnvironment {
    /// Registry name.
    pub const NAME: &'static str = "Hive";

    /// Create an environment with the default normaliser and command-text
    /// post-processing.
    pub fn new() -> Self {
        Self {
            normaliser: Arc::new(CaseFoldingNormaliser),
            command_processor: command::flatten_line_breaks,
        }
    }

    /// Use a different column-name normaliser.
    pub fn with_normaliser(mut self, normaliser: impl NameNormaliser + 'static) -> Self {
        self.normaliser = Arc::new(normaliser);
        self
    }

    /// Use a different post-processing step after parameter rewriting.
    pub fn with_command_processor(mut self, processor: CommandTextProcessor) -> Self {
        self.command_processor = processor;
        self
    }

    /// Bind-parameter names of `command_text`, one per placeholder that
    /// [`DbEnvironment::parse_command_text`] produces.
    pub fn parameter_names(&self, command_text: &str) -> Vec<String> {
        command::parameter_names(command_text)
    }

    fn describe_query(table_or_view: &str) -> String {
        format!("describe {}", table_or_view)
    }

    /// Build a descriptor from one `describe` row: column name, then type.
    fn column_from_row(&self, row: &Row, position: usize) -> Result<(String, ColumnDescriptor)> {
        let name = row.get_string(0)?.unwrap_or_default();
        let data_type = row.get_string(1)?;

        let relational_type = relational_type_of(data_type.as_deref())?;
        let value_class = value_class_of(data_type.as_deref())?;
        trace!(
            column = %name,
            data_type = ?data_type,
            %relational_type,
            %value_class,
            position,
            "Classified column"
        );

        let key = self.normaliser.normalise(&name);
        let descriptor =
            ColumnDescriptor::new(name, Direction::Input, relational_type, value_class, position);
        Ok((key, descriptor))
    }

    async fn read_columns<K: Cursor<Item = Row>>(&self, cursor: &mut K) -> Result<ColumnMap> {
        let mut columns = ColumnMap::new();
        let mut position = 0;
        while let Some(row) = cursor.next().await? {
            let (key, descriptor) = self.column_from_row(&row, position)?;
            columns.insert(key, descriptor);
            position += 1;
        }
        Ok(columns)
    }
}

impl Default for HiveEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HiveEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HiveEnvironment").finish_non_exhaustive()
    }
}

impl DbEnvironment for HiveEnvironment {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn connection_string(&self, params: &ConnectParams) -> String {
        params.connection_string()
    }

    fn parameter_pattern(&self) -> &Regex {
        command::parameter_regex()
    }

    fn parse_command_text(&self, command_text: &str) -> String {
        (self.command_processor)(&command::replace_named_parameters(command_text))
    }

    fn supports_output_on_insert(&self) -> bool {
        false
    }

    async fn describe_columns<C: DbConnection>(
        &self,
        conn: &mut C,
        table_or_view: &str,
    ) -> Result<ColumnMap> {
        let query = Self::describe_query(table_or_view);
        debug!(query = %query, "Describing columns");

        let mut cursor = conn.open_cursor(&query).await?;
        let columns = self.read_columns(&mut cursor).await;
        // The cursor is released even when reading failed; a read error
        // takes precedence over a close error.
        let closed = cursor.close().await;
        let columns = columns?;
        closed?;

        debug!(table = %table_or_view, columns = columns.len(), "Described columns");
        Ok(columns)
    }

    async fn describe_procedure_parameters<C: DbConnection>(
        &self,
        _conn: &mut C,
        _proc_name: &str,
    ) -> Result<Option<ColumnMap>> {
        Ok(None)
    }
}
