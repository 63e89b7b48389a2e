//! Column descriptors produced by metadata introspection.

use super::relational::RelationalType;
use super::value_class::ValueClass;

/// Parameter direction.
///
/// Hive has no output or in/out parameters, so every descriptor is an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Input,
}

/// Metadata for one column or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    name: String,
    direction: Direction,
    relational_type: RelationalType,
    value_class: ValueClass,
    position: usize,
}

impl ColumnDescriptor {
    pub fn new(
        name: impl Into<String>,
        direction: Direction,
        relational_type: RelationalType,
        value_class: ValueClass,
        position: usize,
    ) -> Self {
        Self {
            name: name.into(),
            direction,
            relational_type,
            value_class,
            position,
        }
    }

    /// Column name as reported by the engine.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn relational_type(&self) -> RelationalType {
        self.relational_type
    }

    pub fn value_class(&self) -> ValueClass {
        self.value_class
    }

    /// Zero-based ordinal in the metadata result.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_input(&self) -> bool {
        self.direction == Direction::Input
    }
}
