//! Cursor over the rows of an executed statement.
//!
//! A cursor stands for the prepared statement and its result set together.
//! Drivers implement [`Cursor`]; the environment consumes it.

use crate::error::Result;
use std::future::Future;

/// Row-oriented result of an executed query.
///
/// The cursor borrows its connection mutably, so a connection has at most
/// one open cursor at a time. Callers close it on every exit path.
///
/// # Example
///
/// ```no_run
/// use hive_env_rs::{Cursor, Row};
///
/// async fn count_rows<C: Cursor<Item = Row>>(cursor: &mut C) -> hive_env_rs::Result<u64> {
///     let mut count = 0;
///     while cursor.next().await?.is_some() {
///         count += 1;
///     }
///     cursor.close().await?;
///     Ok(count)
/// }
/// ```
pub trait Cursor {
    /// The type of item this cursor yields.
    type Item;

    /// Close the cursor and release its statement and result set.
    ///
    /// Closing an already closed cursor is a no-op.
    fn close(&mut self) -> impl Future<Output = Result<()>> + Send;

    /// Get the next item.
    ///
    /// Returns `Ok(None)` when exhausted.
    fn next(&mut self) -> impl Future<Output = Result<Option<Self::Item>>> + Send;
}
