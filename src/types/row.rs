//! Row type for query results.

use super::value::HiveValue;
use crate::error::{Error, Result};

/// A row of query results, addressed by zero-based position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<HiveValue>,
}

impl Row {
    /// Create a new row from its values.
    pub fn new(values: Vec<HiveValue>) -> Self {
        Self { values }
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&HiveValue> {
        self.values.get(index)
    }

    /// Get the value at `index` converted to text.
    ///
    /// Returns `Ok(None)` for NULL and
    /// [`Error::ColumnIndexOutOfBounds`] past the last column.
    pub fn get_string(&self, index: usize) -> Result<Option<String>> {
        self.values
            .get(index)
            .map(HiveValue::to_text)
            .ok_or(Error::ColumnIndexOutOfBounds {
                index,
                count: self.values.len(),
            })
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: Into<HiveValue>> FromIterator<V> for Row {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
