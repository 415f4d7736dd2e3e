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

//! Core type definitions for Rowdex
//!
//! This module defines the fundamental tags: DataType, Operator, SortDirection.

use std::fmt;

/// Row identifier: 1-based position in the row vector, stable across deletes.
///
/// Id 0 is reserved and rejected as invalid input everywhere.
pub type RowId = u32;

/// Variant branch tags
///
/// Mirrors the closed set of [`Value`](super::value::Value) branches; used by
/// type checks and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DataType {
    /// Absent value; compares less than every other branch
    Nil = 0,

    /// UTF-8 text string
    Text = 1,

    /// Unsigned integer (64-bit carrier)
    Nat = 2,
    Nat8 = 3,
    Nat16 = 4,
    Nat32 = 5,
    Nat64 = 6,

    /// Signed integer (64-bit carrier)
    Int = 7,
    Int8 = 8,
    Int16 = 9,
    Int32 = 10,
    Int64 = 11,

    /// 64-bit floating point
    Float = 12,

    /// Boolean true/false
    Bool = 13,

    /// Byte string
    Blob = 14,

    /// Ordered sequence of values
    Array = 15,

    /// Ordered sequence of (text, value) entries; equality is by key lookup
    Map = 16,

    /// Pair of values; only used as the argument container for `between`
    Tuple = 17,
}

impl DataType {
    /// Returns true if this branch carries a numeric magnitude
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Nat
                | DataType::Nat8
                | DataType::Nat16
                | DataType::Nat32
                | DataType::Nat64
                | DataType::Int
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::Float
        )
    }

    /// Returns true if values of this branch may be hashed
    ///
    /// Compound branches (array, map, tuple) have no defined hash.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, DataType::Array | DataType::Map | DataType::Tuple)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::Nil => write!(f, "Nil"),
            DataType::Text => write!(f, "Text"),
            DataType::Nat => write!(f, "Nat"),
            DataType::Nat8 => write!(f, "Nat8"),
            DataType::Nat16 => write!(f, "Nat16"),
            DataType::Nat32 => write!(f, "Nat32"),
            DataType::Nat64 => write!(f, "Nat64"),
            DataType::Int => write!(f, "Int"),
            DataType::Int8 => write!(f, "Int8"),
            DataType::Int16 => write!(f, "Int16"),
            DataType::Int32 => write!(f, "Int32"),
            DataType::Int64 => write!(f, "Int64"),
            DataType::Float => write!(f, "Float"),
            DataType::Bool => write!(f, "Bool"),
            DataType::Blob => write!(f, "Blob"),
            DataType::Array => write!(f, "Array"),
            DataType::Map => write!(f, "Map"),
            DataType::Tuple => write!(f, "Tuple"),
        }
    }
}

/// Criterion operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Operator {
    /// Equality against a unique or sortable index (or the null bucket)
    Eq = 0,

    /// Substring match against a partial (suffix tree) index
    Contains = 1,

    /// Prefix match against a prefixed index
    StartsWith = 2,

    /// Inequality over the ordered index
    Neq = 3,

    /// Strictly less than
    Lt = 4,

    /// Less than or equal
    Lte = 5,

    /// Strictly greater than
    Gt = 6,

    /// Greater than or equal
    Gte = 7,

    /// Inclusive range; the criterion value must be a tuple of bounds
    Between = 8,
}

impl Operator {
    /// Returns true if this operator dispatches to the ordered B+tree
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            Operator::Neq
                | Operator::Lt
                | Operator::Lte
                | Operator::Gt
                | Operator::Gte
                | Operator::Between
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Eq => write!(f, "eq"),
            Operator::Contains => write!(f, "contains"),
            Operator::StartsWith => write!(f, "startsWith"),
            Operator::Neq => write!(f, "neq"),
            Operator::Lt => write!(f, "lt"),
            Operator::Lte => write!(f, "lte"),
            Operator::Gt => write!(f, "gt"),
            Operator::Gte => write!(f, "gte"),
            Operator::Between => write!(f, "between"),
        }
    }
}

/// Sort direction for `find` ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}
