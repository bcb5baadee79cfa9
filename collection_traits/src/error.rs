use miette::Diagnostic;
use thiserror::Error;

/// Positional operation that rejected an index
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    Get,
    Set,
    InsertAt,
    RemoveAt,
    Exchange,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error, Diagnostic)]
#[error("index {} is out of range for `{}` (count is {})", .index, .operation, .count)]
pub struct IndexOutOfRange {
    pub operation: Operation,
    pub index: usize,
    pub count: usize,
}

impl IndexOutOfRange {
    pub fn new(operation: Operation, index: usize, count: usize) -> Self {
        Self {
            operation,
            index,
            count,
        }
    }

    /// Checks that `index` addresses a live element, `0 <= index < count`
    pub fn check_occupied(operation: Operation, index: usize, count: usize) -> Result<(), Self> {
        if index < count {
            Ok(())
        } else {
            Err(Self::new(operation, index, count))
        }
    }

    /// Checks that `index` is a valid insertion point, `0 <= index <= count`
    pub fn check_insertion(operation: Operation, index: usize, count: usize) -> Result<(), Self> {
        if index <= count {
            Ok(())
        } else {
            Err(Self::new(operation, index, count))
        }
    }
}
