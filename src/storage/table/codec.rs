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

//! Row serialization seam
//!
//! The table never inspects row values directly: a caller-supplied codec
//! projects each row onto a name -> [`Value`] mapping. The `for_indexing`
//! projection feeds validation, uniqueness checks and index maintenance
//! (callers typically case-fold text there); the canonical projection feeds
//! `backup`.

use rustc_hash::FxHashMap;

use crate::core::Value;

/// Projection of a row onto column values
///
/// A column missing from the map is treated as an absent (nil) value.
pub type ValueMap = FxHashMap<String, Value>;

/// Caller-supplied row adapter, required to construct a table
pub trait RowCodec {
    /// The opaque row type stored in the table
    type Row: Clone;

    /// Project a row onto its column values
    ///
    /// `for_indexing = true` supplies the normalized projection used for
    /// validation, uniqueness checks and index insertion; `false` supplies
    /// the canonical projection used for `backup`. Both projections must
    /// include the `_id` column.
    fn serialize(&self, row: &Self::Row, for_indexing: bool) -> ValueMap;

    /// Rebuild a row from its canonical projection; only `restore` calls this
    fn deserialize(&self, entries: &ValueMap) -> Self::Row;
}
