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

//! Schema types for Rowdex - table and column definitions
//!
//! Columns are declared through an options list; the column named `_id` is
//! the implicit primary key and is never materialized as a secondary index.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

/// Name of the implicit primary-key column
pub const ID_COLUMN: &str = "_id";

/// Declarative column attributes
///
/// `Min`/`Max` are interpreted as string length for text values, element
/// count for arrays, and numeric bound for numeric branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnOption {
    /// The `_id` column; skipped by secondary indexing
    Primary,

    /// Membership must be globally distinct
    Unique,

    /// Supports ordered range queries (non-unique ordered index)
    Sortable,

    /// Permits nil
    Nullable,

    /// Text substring searchable (suffix tree index)
    Partial,

    /// Text prefix searchable
    Prefixed,

    /// Value is an array; each element indexed separately
    Multiple,

    /// Lower size or numeric bound
    Min(i64),

    /// Upper size or numeric bound
    Max(i64),
}

/// A column definition in a table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name
    pub name: String,

    /// Whether this is the `_id` column
    pub primary: bool,

    /// Whether membership must be globally distinct
    pub unique: bool,

    /// Whether the column supports ordered range queries
    pub sortable: bool,

    /// Whether the column permits nil
    pub nullable: bool,

    /// Whether the column is substring searchable
    pub partial: bool,

    /// Whether the column is prefix searchable
    pub prefixed: bool,

    /// Whether the value is an array of separately indexed elements
    pub multiple: bool,

    /// Lower size or numeric bound
    pub min: Option<i64>,

    /// Upper size or numeric bound
    pub max: Option<i64>,
}

impl Column {
    /// Create a column from an options list
    pub fn new(name: impl Into<String>, options: &[ColumnOption]) -> Self {
        let mut column = Column {
            name: name.into(),
            primary: false,
            unique: false,
            sortable: false,
            nullable: false,
            partial: false,
            prefixed: false,
            multiple: false,
            min: None,
            max: None,
        };
        for option in options {
            match option {
                ColumnOption::Primary => column.primary = true,
                ColumnOption::Unique => column.unique = true,
                ColumnOption::Sortable => column.sortable = true,
                ColumnOption::Nullable => column.nullable = true,
                ColumnOption::Partial => column.partial = true,
                ColumnOption::Prefixed => column.prefixed = true,
                ColumnOption::Multiple => column.multiple = true,
                ColumnOption::Min(bound) => column.min = Some(*bound),
                ColumnOption::Max(bound) => column.max = Some(*bound),
            }
        }
        column
    }

    /// Create the implicit `_id` primary-key column
    pub fn primary_key() -> Self {
        Column::new(ID_COLUMN, &[ColumnOption::Primary])
    }

    /// Returns true if any secondary index is registered for this column
    pub fn is_indexed(&self) -> bool {
        !self.primary && (self.unique || self.sortable || self.partial || self.prefixed)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.primary {
            write!(f, " primary")?;
        }
        if self.unique {
            write!(f, " unique")?;
        }
        if self.sortable {
            write!(f, " sortable")?;
        }
        if self.nullable {
            write!(f, " nullable")?;
        }
        if self.partial {
            write!(f, " partial")?;
        }
        if self.prefixed {
            write!(f, " prefixed")?;
        }
        if self.multiple {
            write!(f, " multiple")?;
        }
        if let Some(min) = self.min {
            write!(f, " min={}", min)?;
        }
        if let Some(max) = self.max {
            write!(f, " max={}", max)?;
        }
        Ok(())
    }
}

/// Table schema definition
#[derive(Debug)]
pub struct Schema {
    /// Name of the table
    pub name: String,

    /// Schema version number
    pub version: u32,

    /// Column definitions, in declaration order
    pub columns: Vec<Column>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Cached column index map (lowercase name -> index) for O(1) lookup
    column_index_cache: OnceLock<FxHashMap<String, usize>>,
}

impl Clone for Schema {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            version: self.version,
            columns: self.columns.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            column_index_cache: OnceLock::new(), // recomputed lazily
        }
    }
}

impl PartialEq for Schema {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.version == other.version && self.columns == other.columns
    }
}

impl Eq for Schema {}

impl Schema {
    /// Create a new schema with the given table name, version and columns
    pub fn new(name: impl Into<String>, version: u32, columns: Vec<Column>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            version,
            columns,
            created_at: now,
            updated_at: now,
            column_index_cache: OnceLock::new(),
        }
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get a cached map of column names to their indices
    #[inline]
    fn column_index_map(&self) -> &FxHashMap<String, usize> {
        self.column_index_cache.get_or_init(|| {
            self.columns
                .iter()
                .enumerate()
                .map(|(i, c)| (c.name.clone(), i))
                .collect()
        })
    }

    /// Find a column by name
    pub fn find_column(&self, name: &str) -> Option<&Column> {
        self.column_index_map()
            .get(name)
            .map(|&i| &self.columns[i])
    }

    /// Check if a column exists by name
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index_map().contains_key(name)
    }

    /// Get all column names as borrowed strings
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Iterate the non-primary columns
    pub fn secondary_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| !c.primary)
    }

    /// Mark the schema as updated (sets updated_at to now)
    pub fn mark_updated(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "table {} v{} (", self.name, self.version)?;
        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", col)?;
        }
        write!(f, ")")
    }
}

/// Builder for creating schemas more ergonomically
pub struct SchemaBuilder {
    name: String,
    version: u32,
    columns: Vec<Column>,
}

impl SchemaBuilder {
    /// Create a new schema builder; the `_id` primary column is added first
    pub fn new(name: impl Into<String>, version: u32) -> Self {
        Self {
            name: name.into(),
            version,
            columns: vec![Column::primary_key()],
        }
    }

    /// Add a column from an options list
    pub fn column(mut self, name: impl Into<String>, options: &[ColumnOption]) -> Self {
        self.columns.push(Column::new(name, options));
        self
    }

    /// Build the schema
    pub fn build(self) -> Schema {
        Schema::new(self.name, self.version, self.columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people_schema() -> Schema {
        SchemaBuilder::new("people", 1)
            .column(
                "name",
                &[
                    ColumnOption::Unique,
                    ColumnOption::Sortable,
                    ColumnOption::Partial,
                    ColumnOption::Prefixed,
                ],
            )
            .column("age", &[ColumnOption::Sortable])
            .column("tags", &[ColumnOption::Multiple, ColumnOption::Partial])
            .build()
    }

    #[test]
    fn test_column_from_options() {
        let col = Column::new(
            "name",
            &[
                ColumnOption::Unique,
                ColumnOption::Nullable,
                ColumnOption::Min(3),
                ColumnOption::Max(5),
            ],
        );
        assert!(col.unique);
        assert!(col.nullable);
        assert!(!col.sortable);
        assert_eq!(col.min, Some(3));
        assert_eq!(col.max, Some(5));
        assert!(col.is_indexed());
    }

    #[test]
    fn test_primary_column_is_never_indexed() {
        let col = Column::primary_key();
        assert_eq!(col.name, ID_COLUMN);
        assert!(col.primary);
        assert!(!col.is_indexed());
    }

    #[test]
    fn test_schema_builder_adds_id_first() {
        let schema = people_schema();
        assert_eq!(schema.column_count(), 4);
        assert_eq!(schema.columns[0].name, ID_COLUMN);
        assert!(schema.columns[0].primary);
    }

    #[test]
    fn test_find_column() {
        let schema = people_schema();
        let col = schema.find_column("age").unwrap();
        assert!(col.sortable);
        assert!(!col.unique);
        assert!(schema.find_column("missing").is_none());
        assert!(schema.has_column("tags"));
    }

    #[test]
    fn test_secondary_columns_skip_primary() {
        let schema = people_schema();
        let names: Vec<_> = schema.secondary_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["name", "age", "tags"]);
    }

    #[test]
    fn test_schema_display() {
        let schema = SchemaBuilder::new("t", 2)
            .column("name", &[ColumnOption::Unique])
            .build();
        assert_eq!(schema.to_string(), "table t v2 (_id primary, name unique)");
    }

    #[test]
    fn test_schema_equality_ignores_timestamps() {
        let a = people_schema();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = people_schema();
        assert_eq!(a, b);
    }
}
