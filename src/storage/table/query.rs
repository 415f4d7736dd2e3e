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

//! Query shapes: criteria, sort keys and paging
//!
//! A query is a list of criteria (each resolved against one index and
//! intersected), an optional sort-key list, and an optional offset/size
//! window. The sort comparator is supplied by the caller and is the sole
//! basis for the post-materialization ordering.

use std::cmp::Ordering;
use std::fmt;

use crate::core::{Operator, SortDirection, Value};

/// One filter: a column, an operator, and the value to match
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub key: String,
    pub op: Operator,
    pub value: Value,
}

impl Criterion {
    pub fn new(key: impl Into<String>, op: Operator, value: Value) -> Self {
        Self {
            key: key.into(),
            op,
            value,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.key, self.op, self.value)
    }
}

/// Caller-supplied row comparator
pub type SortComparator<R> = Box<dyn Fn(&R, &R) -> Ordering>;

/// One sort key
///
/// `cmp` orders materialized rows; `Desc` reverses its verdict. On the
/// no-criteria path `key` and `dir` pick the index leaf chain to walk and
/// its direction.
pub struct SortBy<R> {
    pub key: String,
    pub dir: SortDirection,
    pub cmp: SortComparator<R>,
}

impl<R> SortBy<R> {
    pub fn new(
        key: impl Into<String>,
        dir: SortDirection,
        cmp: impl Fn(&R, &R) -> Ordering + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            dir,
            cmp: Box::new(cmp),
        }
    }
}

impl<R> fmt::Debug for SortBy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortBy")
            .field("key", &self.key)
            .field("dir", &self.dir)
            .finish_non_exhaustive()
    }
}

/// Offset/size window applied after sorting, clamped to available length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    pub offset: usize,
    pub size: usize,
}

impl Limit {
    pub fn new(offset: usize, size: usize) -> Self {
        Self { offset, size }
    }
}
