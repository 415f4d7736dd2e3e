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

//! Value type for Rowdex - the variant carried by rows and index keys
//!
//! This module provides a closed tagged union over the scalar and composite
//! branches the table engine understands. Ordering is total within a branch;
//! across branches only `Nil` participates (it is least). Comparing two
//! distinct non-nil branches is a programmer error - the table engine only
//! ever compares values of the same column.
//!
//! Note: Text uses Arc<str> for cheap cloning during row operations.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::types::DataType;

/// A runtime value with branch information
///
/// Each branch carries its data directly. `Map` and `Tuple` are composite
/// containers used by callers; no index is ever keyed by them (`Tuple` only
/// appears as the argument of the `between` operator).
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent value; least in every comparison
    Nil,

    /// UTF-8 text string (Arc for cheap cloning)
    Text(Arc<str>),

    /// Unsigned integers
    Nat(u64),
    Nat8(u8),
    Nat16(u16),
    Nat32(u32),
    Nat64(u64),

    /// Signed integers
    Int(i64),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),

    /// 64-bit floating point
    Float(f64),

    /// Boolean value
    Bool(bool),

    /// Byte string
    Blob(Arc<[u8]>),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Ordered sequence of (text, value) entries
    Map(Vec<(String, Value)>),

    /// Pair of values; argument container for `between`
    Tuple(Box<Value>, Box<Value>),
}

impl Value {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a text value
    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(Arc::from(value.into().as_str()))
    }

    /// Create a text value from Arc<str> (zero-copy)
    pub fn text_arc(value: Arc<str>) -> Self {
        Value::Text(value)
    }

    /// Create a Nat32 value (the row-id branch)
    pub fn nat32(value: u32) -> Self {
        Value::Nat32(value)
    }

    /// Create a Nat value
    pub fn nat(value: u64) -> Self {
        Value::Nat(value)
    }

    /// Create an Int value
    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    /// Create a float value
    pub fn float(value: f64) -> Self {
        Value::Float(value)
    }

    /// Create a boolean value
    pub fn boolean(value: bool) -> Self {
        Value::Bool(value)
    }

    /// Create a blob value
    pub fn blob(value: impl Into<Vec<u8>>) -> Self {
        Value::Blob(Arc::from(value.into().into_boxed_slice()))
    }

    /// Create an array value
    pub fn array(values: Vec<Value>) -> Self {
        Value::Array(values)
    }

    /// Create a map value
    pub fn map(entries: Vec<(String, Value)>) -> Self {
        Value::Map(entries)
    }

    /// Create a tuple value
    pub fn tuple(first: Value, second: Value) -> Self {
        Value::Tuple(Box::new(first), Box::new(second))
    }

    // =========================================================================
    // Type accessors
    // =========================================================================

    /// Returns the branch tag of this value
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Nil => DataType::Nil,
            Value::Text(_) => DataType::Text,
            Value::Nat(_) => DataType::Nat,
            Value::Nat8(_) => DataType::Nat8,
            Value::Nat16(_) => DataType::Nat16,
            Value::Nat32(_) => DataType::Nat32,
            Value::Nat64(_) => DataType::Nat64,
            Value::Int(_) => DataType::Int,
            Value::Int8(_) => DataType::Int8,
            Value::Int16(_) => DataType::Int16,
            Value::Int32(_) => DataType::Int32,
            Value::Int64(_) => DataType::Int64,
            Value::Float(_) => DataType::Float,
            Value::Bool(_) => DataType::Bool,
            Value::Blob(_) => DataType::Blob,
            Value::Array(_) => DataType::Array,
            Value::Map(_) => DataType::Map,
            Value::Tuple(_, _) => DataType::Tuple,
        }
    }

    /// Returns true if this value is nil
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    // =========================================================================
    // Extractors
    // =========================================================================

    /// Extract as string reference (Text only)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Extract as Nat32, strictly (no coercion from other branches)
    pub fn as_nat32(&self) -> Option<u32> {
        match self {
            Value::Nat32(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract the array elements
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Extract the tuple fields
    pub fn as_tuple(&self) -> Option<(&Value, &Value)> {
        match self {
            Value::Tuple(a, b) => Some((a, b)),
            _ => None,
        }
    }

    /// Extract the numeric magnitude of any numeric branch as f64
    ///
    /// Used for min/max bound validation; lossless for the bounds the schema
    /// can express.
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Nat(v) | Value::Nat64(v) => Some(*v as f64),
            Value::Nat8(v) => Some(*v as f64),
            Value::Nat16(v) => Some(*v as f64),
            Value::Nat32(v) => Some(*v as f64),
            Value::Int(v) | Value::Int64(v) => Some(*v as f64),
            Value::Int8(v) => Some(*v as f64),
            Value::Int16(v) => Some(*v as f64),
            Value::Int32(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Compare two values for ordering
    ///
    /// Same-branch values compare by their natural order; `Nil` is less than
    /// any non-nil value. Comparing two distinct non-nil branches aborts:
    /// the table engine never originates such a comparison because only
    /// within-column values meet.
    pub fn compare(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Nil, Value::Nil) => Ordering::Equal,
            (Value::Nil, _) => Ordering::Less,
            (_, Value::Nil) => Ordering::Greater,
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Nat(a), Value::Nat(b)) => a.cmp(b),
            (Value::Nat8(a), Value::Nat8(b)) => a.cmp(b),
            (Value::Nat16(a), Value::Nat16(b)) => a.cmp(b),
            (Value::Nat32(a), Value::Nat32(b)) => a.cmp(b),
            (Value::Nat64(a), Value::Nat64(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Int8(a), Value::Int8(b)) => a.cmp(b),
            (Value::Int16(a), Value::Int16(b)) => a.cmp(b),
            (Value::Int32(a), Value::Int32(b)) => a.cmp(b),
            (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Blob(a), Value::Blob(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => {
                // length first, then elementwise
                a.len().cmp(&b.len()).then_with(|| {
                    for (x, y) in a.iter().zip(b.iter()) {
                        match x.compare(y) {
                            Ordering::Equal => continue,
                            other => return other,
                        }
                    }
                    Ordering::Equal
                })
            }
            (Value::Tuple(a1, a2), Value::Tuple(b1, b2)) => {
                a1.compare(b1).then_with(|| a2.compare(b2))
            }
            (a, b) => panic!(
                "bug: incomparable variants {} and {}",
                a.data_type(),
                b.data_type()
            ),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Nat(a), Value::Nat(b)) => a == b,
            (Value::Nat8(a), Value::Nat8(b)) => a == b,
            (Value::Nat16(a), Value::Nat16(b)) => a == b,
            (Value::Nat32(a), Value::Nat32(b)) => a == b,
            (Value::Nat64(a), Value::Nat64(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int8(a), Value::Int8(b)) => a == b,
            (Value::Int16(a), Value::Int16(b)) => a == b,
            (Value::Int32(a), Value::Int32(b)) => a == b,
            (Value::Int64(a), Value::Int64(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b) == Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Blob(a), Value::Blob(b)) => a == b,
            // elementwise over same-length sequences
            (Value::Array(a), Value::Array(b)) => a.len() == b.len() && a.iter().eq(b.iter()),
            // by key lookup, order-insensitive
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, value)| {
                        b.iter().any(|(other_key, other_value)| {
                            key == other_key && value == other_value
                        })
                    })
            }
            (Value::Tuple(a1, a2), Value::Tuple(b1, b2)) => a1 == b1 && a2 == b2,
            _ => false,
        }
    }
}

impl Hash for Value {
    /// Hash is defined only for scalar and nil branches.
    ///
    /// Hashing a compound variant aborts - no index ever hashes one.
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Nil => {}
            Value::Text(s) => s.hash(state),
            Value::Nat(v) | Value::Nat64(v) => v.hash(state),
            Value::Nat8(v) => v.hash(state),
            Value::Nat16(v) => v.hash(state),
            Value::Nat32(v) => v.hash(state),
            Value::Int(v) | Value::Int64(v) => v.hash(state),
            Value::Int8(v) => v.hash(state),
            Value::Int16(v) => v.hash(state),
            Value::Int32(v) => v.hash(state),
            Value::Float(v) => v.to_bits().hash(state),
            Value::Bool(v) => v.hash(state),
            Value::Blob(v) => v.hash(state),
            Value::Array(_) | Value::Map(_) | Value::Tuple(_, _) => {
                panic!("bug: hash of compound variant {}", self.data_type())
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Text(s) => write!(f, "{}", s),
            Value::Nat(v) | Value::Nat64(v) => write!(f, "{}", v),
            Value::Nat8(v) => write!(f, "{}", v),
            Value::Nat16(v) => write!(f, "{}", v),
            Value::Nat32(v) => write!(f, "{}", v),
            Value::Int(v) | Value::Int64(v) => write!(f, "{}", v),
            Value::Int8(v) => write!(f, "{}", v),
            Value::Int16(v) => write!(f, "{}", v),
            Value::Int32(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Blob(v) => {
                write!(f, "0x")?;
                for byte in v.iter() {
                    write!(f, "{:02x}", byte)?;
                }
                Ok(())
            }
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Tuple(a, b) => write!(f, "({}, {})", a, b),
        }
    }
}
