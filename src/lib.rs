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

//! # Rowdex - in-memory indexed table library
//!
//! Rowdex is a schema-described row store for long-lived stateful services
//! whose whole dataset fits in memory. Each column can carry up to four
//! secondary indexes - a unique B+tree, a sortable B+tree, a generalized
//! suffix tree for substring search, and a prefix map - and queries are
//! declarative criteria lists resolved through those indexes and intersected.
//! Durability is the host's concern: `backup` exports the row tuples,
//! `restore` rebuilds the table (tombstones included) from them.
//!
//! ## Quick start
//!
//! ```rust
//! use rowdex::{
//!     ColumnOption, Criterion, Operator, RowCodec, SchemaBuilder, Table, Value, ValueMap,
//! };
//!
//! #[derive(Debug, Clone)]
//! struct User { id: u32, name: String }
//!
//! struct UserCodec;
//!
//! impl RowCodec for UserCodec {
//!     type Row = User;
//!
//!     fn serialize(&self, row: &User, for_indexing: bool) -> ValueMap {
//!         let name = if for_indexing { row.name.to_lowercase() } else { row.name.clone() };
//!         let mut map = ValueMap::default();
//!         map.insert("_id".to_string(), Value::nat32(row.id));
//!         map.insert("name".to_string(), Value::text(name));
//!         map
//!     }
//!
//!     fn deserialize(&self, entries: &ValueMap) -> User {
//!         User {
//!             id: entries.get("_id").and_then(|v| v.as_nat32()).unwrap_or(0),
//!             name: entries
//!                 .get("name")
//!                 .and_then(|v| v.as_str())
//!                 .unwrap_or_default()
//!                 .to_string(),
//!         }
//!     }
//! }
//!
//! let schema = SchemaBuilder::new("users", 1)
//!     .column("name", &[ColumnOption::Unique, ColumnOption::Prefixed])
//!     .build();
//! let mut users = Table::new(schema, UserCodec);
//!
//! let id = users.next_id();
//! users.insert(id, User { id, name: "Ada".to_string() }).unwrap();
//!
//! let hits = users
//!     .find(
//!         Some(&[Criterion::new("name", Operator::StartsWith, Value::text("a"))]),
//!         None,
//!         None,
//!     )
//!     .unwrap();
//! assert_eq!(hits.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - fundamental types ([`Value`], [`Schema`], [`Error`])
//! - [`common`] - id sets and the stable merge sort
//! - [`storage`] - the index structures and the [`Table`] engine

pub mod common;
pub mod core;
pub mod storage;

// Re-export main types for convenience
pub use crate::core::{
    Column, ColumnOption, DataType, Error, Operator, Result, RowId, Schema, SchemaBuilder,
    SortDirection, Value, ID_COLUMN,
};

pub use crate::common::IdSet;

pub use crate::storage::{
    BackupEntry, BpTree, Criterion, Cursor, Limit, PrefixIndex, RowCodec, SortBy, SortComparator,
    SuffixTree, Table, ValueMap,
};
