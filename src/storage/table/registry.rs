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

//! Per-column index registry
//!
//! Up to four index structures plus two null buckets are allocated per
//! column at table construction time:
//!
//! - `unique` and not primary: B+tree mapping value -> single id
//! - `sortable`, not unique, not primary: B+tree mapping value -> id set
//! - `partial`: generalized suffix tree over text values
//! - `prefixed`: prefix map over text values
//!
//! The null buckets track rows whose column value is nil: a single slot for
//! unique columns, an id set for sortable ones.

use rustc_hash::FxHashMap;

use crate::common::IdSet;
use crate::core::{Column, RowId, Schema};
use crate::storage::index::{BpTree, PrefixIndex, SuffixTree};

/// The index structures registered for one column
#[derive(Debug, Default)]
pub(crate) struct ColumnIndexes {
    /// Value -> id, for unique columns
    pub unique: Option<BpTree<RowId>>,

    /// Value -> id set, for sortable non-unique columns
    pub multi: Option<BpTree<IdSet>>,

    /// Substring search over text values
    pub partial: Option<SuffixTree>,

    /// Prefix search over text values
    pub prefixed: Option<PrefixIndex>,

    /// Null bucket for unique columns: at most one nil row
    pub unique_null: Option<RowId>,

    /// Null bucket for sortable columns: every nil row
    pub multi_null: IdSet,
}

impl ColumnIndexes {
    /// Allocate the structures a column's options call for
    pub fn for_column(column: &Column) -> Self {
        Self {
            unique: (column.unique && !column.primary).then(BpTree::new),
            multi: (column.sortable && !column.unique && !column.primary).then(BpTree::new),
            partial: column.partial.then(SuffixTree::new),
            prefixed: column.prefixed.then(PrefixIndex::new),
            unique_null: None,
            multi_null: IdSet::new(),
        }
    }
}

/// Build the registry for every indexed column of a schema
pub(crate) fn build_registry(schema: &Schema) -> FxHashMap<String, ColumnIndexes> {
    let mut registry = FxHashMap::default();
    for column in &schema.columns {
        if column.is_indexed() {
            registry.insert(column.name.clone(), ColumnIndexes::for_column(column));
        }
    }
    registry
}
