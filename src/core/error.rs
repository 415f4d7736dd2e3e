// Copyright 2025 Rowdex Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for Rowdex
//!
//! Every user-facing failure is a single variant of [`Error`]; the rendered
//! message is part of the public interface and hosts match on it. Validation
//! failures are collected (never short-circuited) and joined with a single
//! comma into one [`Error::Validation`].

use thiserror::Error;

use super::types::RowId;

/// Result type alias for Rowdex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for table and index operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // =========================================================================
    // Row addressing
    // =========================================================================
    /// Row id 0 is reserved and rejected everywhere
    #[error("Invalid id")]
    InvalidId,

    /// No live row occupies the slot for this id
    #[error("Primary key not found: {0}")]
    PrimaryKeyNotFound(RowId),

    /// The addressed row is missing or tombstoned
    #[error("Not found")]
    NotFound,

    // =========================================================================
    // Schema / criteria
    // =========================================================================
    /// The criterion or projection names a column the schema doesn't have
    #[error("Unknown column {0}")]
    UnknownColumn(String),

    /// The operator has no matching index on this column
    #[error("No index found for column {0}")]
    NoIndexFound(String),

    /// The criterion value's branch doesn't fit the column's index
    #[error("Invalid type for column {0}")]
    InvalidType(String),

    /// `between` requires a tuple of bounds
    #[error("Value should be a tuple for column {0}")]
    NotATuple(String),

    /// `_id` supports equality only
    #[error("Unsupported operator for column _id")]
    UnsupportedIdOperator,

    /// `_id` criteria must carry a Nat32 value
    #[error("Type of column _id must be Nat32")]
    IdTypeMismatch,

    // =========================================================================
    // Constraints
    // =========================================================================
    /// Unique index already holds this key (or the null bucket is occupied)
    #[error("Duplicated unique key at column {0}")]
    DuplicatedUniqueKey(String),

    /// Serialized projection carries no value for a non-nullable column
    #[error("Value can't be null on column {0}")]
    NullValueOnColumn(String),

    /// Nil value rejected by the pre-insert check on a non-nullable column
    #[error("Value can not be null at column {0}")]
    NullValueAtColumn(String),

    /// Equality with nil against a unique index is not implemented
    #[error("Isnull not implemented for unique indexes")]
    IsNullOnUnique,

    /// Comma-joined validation messages, e.g. `name must be at least 3 long`
    #[error("{0}")]
    Validation(String),
}

impl Error {
    /// Join collected validation messages into a single error.
    ///
    /// The separator is exactly one comma; callers rely on splitting on it.
    pub fn validation(messages: Vec<String>) -> Self {
        Error::Validation(messages.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(Error::InvalidId.to_string(), "Invalid id");
        assert_eq!(
            Error::PrimaryKeyNotFound(7).to_string(),
            "Primary key not found: 7"
        );
        assert_eq!(Error::NotFound.to_string(), "Not found");
        assert_eq!(
            Error::UnknownColumn("age".into()).to_string(),
            "Unknown column age"
        );
        assert_eq!(
            Error::NoIndexFound("age".into()).to_string(),
            "No index found for column age"
        );
        assert_eq!(
            Error::InvalidType("age".into()).to_string(),
            "Invalid type for column age"
        );
        assert_eq!(
            Error::NotATuple("age".into()).to_string(),
            "Value should be a tuple for column age"
        );
        assert_eq!(
            Error::UnsupportedIdOperator.to_string(),
            "Unsupported operator for column _id"
        );
        assert_eq!(
            Error::IdTypeMismatch.to_string(),
            "Type of column _id must be Nat32"
        );
        assert_eq!(
            Error::DuplicatedUniqueKey("name".into()).to_string(),
            "Duplicated unique key at column name"
        );
        assert_eq!(
            Error::NullValueOnColumn("name".into()).to_string(),
            "Value can't be null on column name"
        );
        assert_eq!(
            Error::NullValueAtColumn("name".into()).to_string(),
            "Value can not be null at column name"
        );
        assert_eq!(
            Error::IsNullOnUnique.to_string(),
            "Isnull not implemented for unique indexes"
        );
    }

    #[test]
    fn test_validation_join() {
        let err = Error::validation(vec![
            "name must be at least 3 long".to_string(),
            "age must be at most 120".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "name must be at least 3 long,age must be at most 120"
        );
    }
}
