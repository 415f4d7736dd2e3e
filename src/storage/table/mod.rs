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

//! Table engine
//!
//! Composes the row vector, the per-column index registry and the caller's
//! codec into the public operation surface: insert/replace/delete/get,
//! criteria-driven find/count, and backup/restore.
//!
//! Row ids are 1-based positions in the row vector and are never reused:
//! deletion tombstones the slot, and `next_id` is always derived from the
//! vector length. Every public operation is a bounded synchronous
//! computation; callers serialize concurrent access externally.

pub mod codec;
pub mod query;
mod registry;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::common::{merge_sort_by, IdSet};
use crate::core::{Column, Error, Operator, Result, RowId, Schema, SortDirection, Value, ID_COLUMN};
use crate::storage::index::BpTree;

pub use codec::{RowCodec, ValueMap};
pub use query::{Criterion, Limit, SortBy, SortComparator};

use registry::{build_registry, ColumnIndexes};

/// One backup entry: the canonical projection of a single row
pub type BackupEntry = Vec<(String, Value)>;

/// Schema-described table with secondary indexes
pub struct Table<C: RowCodec> {
    schema: Schema,
    codec: C,
    rows: Vec<Option<C::Row>>,
    indexes: FxHashMap<String, ColumnIndexes>,
}

impl<C: RowCodec> Table<C> {
    /// Create an empty table, allocating the indexes the schema calls for
    pub fn new(schema: Schema, codec: C) -> Self {
        let indexes = build_registry(&schema);
        Self {
            schema,
            codec,
            rows: Vec::new(),
            indexes,
        }
    }

    /// The table's schema
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The id the next insert must use: row vector length + 1
    ///
    /// Derived, never counted, so the never-reuse property survives restore.
    pub fn next_id(&self) -> RowId {
        self.rows.len() as RowId + 1
    }

    /// Number of live (non-tombstoned) rows
    pub fn len(&self) -> usize {
        self.rows.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether the table holds no live rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Row operations
    // =========================================================================

    /// Insert a row under `id`
    ///
    /// The id must come from [`next_id`](Self::next_id); id 0 is rejected.
    /// Validation errors are collected and joined; uniqueness violations
    /// short-circuit. On success the row is appended and fanned out to every
    /// index registered for its columns.
    pub fn insert(&mut self, id: RowId, row: C::Row) -> Result<RowId> {
        if id == 0 {
            return Err(Error::InvalidId);
        }
        let map = self.codec.serialize(&row, true);
        self.validate(&map)?;
        self.can_insert(&map)?;

        debug_assert_eq!(id, self.next_id(), "bug: insert id out of sequence");
        self.rows.push(Some(row));
        self.add_to_indexes(id, &map)?;
        Ok(id)
    }

    /// Replace the row at `id`: a delete plus insert at the same slot
    ///
    /// The old row leaves the indexes before the new one is validated; on
    /// any failure the old entries are fully restored and the table state is
    /// unchanged.
    pub fn replace(&mut self, id: RowId, row: C::Row) -> Result<()> {
        if id == 0 {
            return Err(Error::InvalidId);
        }
        let slot = (id - 1) as usize;
        let current = match self.rows.get(slot) {
            Some(Some(row)) => row.clone(),
            _ => return Err(Error::NotFound),
        };

        let old_map = self.codec.serialize(&current, true);
        self.remove_from_indexes(id, &old_map);

        let new_map = self.codec.serialize(&row, true);
        let admissible = self
            .validate(&new_map)
            .and_then(|_| self.can_insert(&new_map));
        if let Err(err) = admissible {
            if self.add_to_indexes(id, &old_map).is_err() {
                panic!("bug: failed to restore indexes after rejected replace");
            }
            return Err(err);
        }

        self.rows[slot] = Some(row);
        self.add_to_indexes(id, &new_map)
    }

    /// Tombstone the row at `id`
    ///
    /// The slot is kept so downstream ids stay stable; the vector never
    /// shrinks.
    pub fn delete(&mut self, id: RowId) -> Result<()> {
        if id == 0 {
            return Err(Error::InvalidId);
        }
        let slot = (id - 1) as usize;
        let current = match self.rows.get(slot) {
            Some(Some(row)) => row.clone(),
            _ => return Err(Error::PrimaryKeyNotFound(id)),
        };
        let map = self.codec.serialize(&current, true);
        self.remove_from_indexes(id, &map);
        self.rows[slot] = None;
        Ok(())
    }

    /// Fetch the row at `id`; tombstoned and never-issued ids yield None
    pub fn get(&self, id: RowId) -> Result<Option<C::Row>> {
        if id == 0 {
            return Err(Error::InvalidId);
        }
        Ok(self.rows.get((id - 1) as usize).cloned().flatten())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Run a query: filter by criteria, order, and page
    ///
    /// Without criteria the result is the ordered enumeration of all live
    /// rows, driven by the index of the first sort key (default `_id`
    /// ascending) and paged by `limit`; only the first sort key applies on
    /// that path. With criteria, each criterion resolves to a candidate id
    /// set through its index, the sets are intersected, survivors are
    /// materialized, sorted (stable, right-to-left over the sort keys so the
    /// leftmost dominates) and sliced.
    pub fn find(
        &self,
        criterias: Option<&[Criterion]>,
        sort_by: Option<&[SortBy<C::Row>]>,
        limit: Option<Limit>,
    ) -> Result<Vec<C::Row>> {
        let criterias = criterias.filter(|c| !c.is_empty());

        let Some(criterias) = criterias else {
            let (key, dir) = sort_by
                .and_then(|sorts| sorts.first())
                .map(|sort| (sort.key.as_str(), sort.dir))
                .unwrap_or((ID_COLUMN, SortDirection::Asc));
            let ids = self.enumerate_ordered(key, dir, limit)?;
            return Ok(self.materialize(&ids));
        };

        let ids = self.filter_ids(criterias)?;
        let mut rows = self.materialize(&ids);

        if let Some(sorts) = sort_by {
            for sort in sorts.iter().rev() {
                rows = merge_sort_by(rows, &|a: &C::Row, b: &C::Row| {
                    let ord = (sort.cmp)(a, b);
                    match sort.dir {
                        SortDirection::Asc => ord,
                        SortDirection::Desc => ord.reverse(),
                    }
                });
            }
        }

        Ok(apply_limit(rows, limit))
    }

    /// Run the filter pipeline and return the first surviving row
    pub fn find_one(&self, criterias: Option<&[Criterion]>) -> Result<Option<C::Row>> {
        Ok(self.find(criterias, None, None)?.into_iter().next())
    }

    /// Count the live rows surviving the filter pipeline
    pub fn count(&self, criterias: Option<&[Criterion]>) -> Result<usize> {
        let criterias = criterias.filter(|c| !c.is_empty());
        let Some(criterias) = criterias else {
            return Ok(self.len());
        };
        let ids = self.filter_ids(criterias)?;
        Ok(ids
            .iter()
            .filter(|&&id| matches!(self.rows.get((id - 1) as usize), Some(Some(_))))
            .count())
    }

    // =========================================================================
    // Backup / restore
    // =========================================================================

    /// Export every live row as (column name, value) pairs in schema order
    ///
    /// The entries come from the canonical (`for_indexing = false`)
    /// projection and are aligned by `_id`; gaps encode tombstones.
    pub fn backup(&self) -> Vec<BackupEntry> {
        let mut entries = Vec::new();
        for slot in self.rows.iter() {
            let Some(row) = slot else { continue };
            let map = self.codec.serialize(row, false);
            let mut entry = Vec::with_capacity(self.schema.column_count());
            for column in &self.schema.columns {
                if let Some(value) = map.get(&column.name) {
                    entry.push((column.name.clone(), value.clone()));
                }
            }
            entries.push(entry);
        }
        entries
    }

    /// Rebuild the table from a backup
    ///
    /// Ids missing from the entry sequence become tombstones so the id→slot
    /// mapping is preserved. The backup is trusted: rows are re-indexed with
    /// the indexing projection but never re-validated for uniqueness.
    pub fn restore(&mut self, entries: &[BackupEntry]) -> Result<()> {
        self.rows.clear();
        self.indexes = build_registry(&self.schema);

        for entry in entries {
            let id = entry
                .iter()
                .find(|(name, _)| name == ID_COLUMN)
                .and_then(|(_, value)| value.as_nat32())
                .ok_or(Error::IdTypeMismatch)?;
            if id == 0 {
                return Err(Error::InvalidId);
            }
            while self.next_id() < id {
                self.rows.push(None);
            }
            let map: ValueMap = entry.iter().cloned().collect();
            let row = self.codec.deserialize(&map);
            let index_map = self.codec.serialize(&row, true);
            self.rows.push(Some(row));
            self.add_to_indexes(id, &index_map)?;
        }
        Ok(())
    }

    // =========================================================================
    // Validation and uniqueness
    // =========================================================================

    /// Check size and numeric bounds, collecting every violation
    fn validate(&self, map: &ValueMap) -> Result<()> {
        let mut errors = Vec::new();
        for column in self.schema.secondary_columns() {
            let value = map.get(&column.name).unwrap_or(&Value::Nil);
            if value.is_nil() {
                if !column.nullable {
                    errors.push(format!("{} can't be null", column.name));
                }
                continue;
            }
            if let Some(min) = column.min {
                match value {
                    Value::Text(text) => {
                        if (text.chars().count() as i64) < min {
                            errors.push(format!("{} must be at least {} long", column.name, min));
                        }
                    }
                    Value::Array(items) => {
                        if (items.len() as i64) < min {
                            errors.push(format!(
                                "{} must have at least {} elements",
                                column.name, min
                            ));
                        }
                    }
                    other => {
                        if let Some(magnitude) = other.as_numeric() {
                            if magnitude < min as f64 {
                                errors.push(format!("{} must be at least {}", column.name, min));
                            }
                        }
                    }
                }
            }
            if let Some(max) = column.max {
                match value {
                    Value::Text(text) => {
                        if (text.chars().count() as i64) > max {
                            errors.push(format!("{} must be at most {} long", column.name, max));
                        }
                    }
                    Value::Array(items) => {
                        if (items.len() as i64) > max {
                            errors.push(format!(
                                "{} must have at most {} elements",
                                column.name, max
                            ));
                        }
                    }
                    other => {
                        if let Some(magnitude) = other.as_numeric() {
                            if magnitude > max as f64 {
                                errors.push(format!("{} must be at most {}", column.name, max));
                            }
                        }
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::validation(errors))
        }
    }

    /// Check nullability and uniqueness, short-circuiting at the first hit
    fn can_insert(&self, map: &ValueMap) -> Result<()> {
        for column in self.schema.secondary_columns() {
            let value = map.get(&column.name).unwrap_or(&Value::Nil);
            if value.is_nil() {
                if !column.nullable {
                    return Err(Error::NullValueAtColumn(column.name.clone()));
                }
                if column.unique {
                    if let Some(indexes) = self.indexes.get(&column.name) {
                        if indexes.unique_null.is_some() {
                            return Err(Error::DuplicatedUniqueKey(column.name.clone()));
                        }
                    }
                }
                continue;
            }
            if !column.unique {
                continue;
            }
            let Some(unique) = self
                .indexes
                .get(&column.name)
                .and_then(|indexes| indexes.unique.as_ref())
            else {
                continue;
            };
            match value {
                Value::Array(items) => {
                    for item in items {
                        if unique.contains_key(item) {
                            return Err(Error::DuplicatedUniqueKey(column.name.clone()));
                        }
                    }
                }
                single => {
                    if unique.contains_key(single) {
                        return Err(Error::DuplicatedUniqueKey(column.name.clone()));
                    }
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Index fan-out
    // =========================================================================

    /// Register a row in every index of every column it carries a value for
    ///
    /// Array values are expanded: each element becomes a separate key.
    fn add_to_indexes(&mut self, id: RowId, map: &ValueMap) -> Result<()> {
        let Self {
            schema, indexes, ..
        } = self;
        for column in schema.columns.iter().filter(|c| !c.primary) {
            let Some(column_indexes) = indexes.get_mut(&column.name) else {
                continue;
            };
            let value = map.get(&column.name).unwrap_or(&Value::Nil);
            if value.is_nil() {
                if !column.nullable {
                    return Err(Error::NullValueOnColumn(column.name.clone()));
                }
                if column_indexes.unique.is_some() {
                    column_indexes.unique_null = Some(id);
                }
                if column_indexes.multi.is_some() {
                    column_indexes.multi_null.insert(id);
                }
                continue;
            }
            for key in expand_keys(value) {
                if let Some(unique) = &mut column_indexes.unique {
                    unique.put(key.clone(), id);
                }
                if let Some(multi) = &mut column_indexes.multi {
                    match multi.get_mut(key) {
                        Some(bucket) => {
                            bucket.insert(id);
                        }
                        None => {
                            multi.put(key.clone(), IdSet::single(id));
                        }
                    }
                }
                if let Some(text) = key.as_str() {
                    if let Some(partial) = &mut column_indexes.partial {
                        partial.put(text, id);
                    }
                    if let Some(prefixed) = &mut column_indexes.prefixed {
                        prefixed.put(text, id);
                    }
                }
            }
        }
        Ok(())
    }

    /// Withdraw a row from every index it was registered in
    fn remove_from_indexes(&mut self, id: RowId, map: &ValueMap) {
        let Self {
            schema, indexes, ..
        } = self;
        for column in schema.columns.iter().filter(|c| !c.primary) {
            let Some(column_indexes) = indexes.get_mut(&column.name) else {
                continue;
            };
            let value = map.get(&column.name).unwrap_or(&Value::Nil);
            if value.is_nil() {
                if column_indexes.unique_null == Some(id) {
                    column_indexes.unique_null = None;
                }
                column_indexes.multi_null.remove(id);
                continue;
            }
            for key in expand_keys(value) {
                if let Some(unique) = &mut column_indexes.unique {
                    unique.delete(key);
                }
                if let Some(multi) = &mut column_indexes.multi {
                    let emptied = match multi.get_mut(key) {
                        Some(bucket) => {
                            bucket.remove(id);
                            bucket.is_empty()
                        }
                        None => false,
                    };
                    if emptied {
                        multi.delete(key);
                    }
                }
                if let Some(text) = key.as_str() {
                    if let Some(partial) = &mut column_indexes.partial {
                        partial.delete(text, id);
                    }
                    if let Some(prefixed) = &mut column_indexes.prefixed {
                        prefixed.delete(text, id);
                    }
                }
            }
        }
    }

    // =========================================================================
    // Filter pipeline
    // =========================================================================

    /// Intersect the candidate sets of every criterion
    ///
    /// Folds immediately once the running set empties. Survivors come back
    /// sorted ascending for deterministic materialization.
    fn filter_ids(&self, criterias: &[Criterion]) -> Result<Vec<RowId>> {
        let mut running: Option<FxHashSet<RowId>> = None;
        for criterion in criterias {
            let matches = self.eval_criterion(criterion)?;
            running = Some(match running.take() {
                None => matches,
                Some(mut current) => {
                    current.retain(|id| matches.contains(id));
                    current
                }
            });
            if running.as_ref().is_some_and(|set| set.is_empty()) {
                break;
            }
        }
        let mut ids: Vec<RowId> = running.unwrap_or_default().into_iter().collect();
        ids.sort_unstable();
        Ok(ids)
    }

    /// Resolve one criterion to its candidate id set
    fn eval_criterion(&self, criterion: &Criterion) -> Result<FxHashSet<RowId>> {
        if criterion.key == ID_COLUMN {
            if criterion.op != Operator::Eq {
                return Err(Error::UnsupportedIdOperator);
            }
            let Some(id) = criterion.value.as_nat32() else {
                return Err(Error::IdTypeMismatch);
            };
            let live = id != 0 && matches!(self.rows.get((id - 1) as usize), Some(Some(_)));
            let mut set = FxHashSet::default();
            if live {
                set.insert(id);
            }
            return Ok(set);
        }

        let column = self
            .schema
            .find_column(&criterion.key)
            .ok_or_else(|| Error::UnknownColumn(criterion.key.clone()))?;
        let indexes = self
            .indexes
            .get(&criterion.key)
            .ok_or_else(|| Error::NoIndexFound(criterion.key.clone()))?;

        match criterion.op {
            Operator::Eq => self.eval_eq(column, indexes, &criterion.value),
            Operator::Contains => {
                let partial = indexes
                    .partial
                    .as_ref()
                    .ok_or_else(|| Error::NoIndexFound(column.name.clone()))?;
                let text = criterion
                    .value
                    .as_str()
                    .ok_or_else(|| Error::InvalidType(column.name.clone()))?;
                Ok(partial
                    .find(text)
                    .map(|set| set.iter().collect())
                    .unwrap_or_default())
            }
            Operator::StartsWith => {
                let prefixed = indexes
                    .prefixed
                    .as_ref()
                    .ok_or_else(|| Error::NoIndexFound(column.name.clone()))?;
                let text = criterion
                    .value
                    .as_str()
                    .ok_or_else(|| Error::InvalidType(column.name.clone()))?;
                Ok(prefixed
                    .find(text)
                    .map(|set| set.iter().collect())
                    .unwrap_or_default())
            }
            _ => self.eval_range(column, indexes, criterion.op, &criterion.value),
        }
    }

    /// Equality dispatch: unique index, then multi index, then suffix tree
    fn eval_eq(
        &self,
        column: &Column,
        indexes: &ColumnIndexes,
        value: &Value,
    ) -> Result<FxHashSet<RowId>> {
        if value.is_nil() {
            if indexes.unique.is_some() {
                return Err(Error::IsNullOnUnique);
            }
            if indexes.multi.is_some() {
                return Ok(indexes.multi_null.iter().collect());
            }
            return Err(Error::NoIndexFound(column.name.clone()));
        }
        if let Some(unique) = &indexes.unique {
            check_branch(first_key(unique), value, &column.name)?;
            let mut set = FxHashSet::default();
            if let Some(&id) = unique.get(value) {
                set.insert(id);
            }
            return Ok(set);
        }
        if let Some(multi) = &indexes.multi {
            check_branch(first_key(multi), value, &column.name)?;
            return Ok(multi
                .get(value)
                .map(|bucket| bucket.iter().collect())
                .unwrap_or_default());
        }
        if let Some(partial) = &indexes.partial {
            let text = value
                .as_str()
                .ok_or_else(|| Error::InvalidType(column.name.clone()))?;
            return Ok(partial
                .find(text)
                .map(|set| set.iter().collect())
                .unwrap_or_default());
        }
        Err(Error::NoIndexFound(column.name.clone()))
    }

    /// Range dispatch over the ordered B+tree
    fn eval_range(
        &self,
        column: &Column,
        indexes: &ColumnIndexes,
        op: Operator,
        value: &Value,
    ) -> Result<FxHashSet<RowId>> {
        if let Some(unique) = &indexes.unique {
            let ids = self.range_hits(unique, op, value, &column.name)?;
            return Ok(ids.into_iter().collect());
        }
        if let Some(multi) = &indexes.multi {
            let buckets = self.range_hits(multi, op, value, &column.name)?;
            return Ok(buckets
                .iter()
                .flat_map(|bucket| bucket.iter())
                .collect());
        }
        Err(Error::NoIndexFound(column.name.clone()))
    }

    fn range_hits<V: Clone>(
        &self,
        tree: &BpTree<V>,
        op: Operator,
        value: &Value,
        column: &str,
    ) -> Result<Vec<V>> {
        if op == Operator::Between {
            let (low, high) = value
                .as_tuple()
                .ok_or_else(|| Error::NotATuple(column.to_string()))?;
            check_branch(first_key(tree), low, column)?;
            check_branch(first_key(tree), high, column)?;
            return Ok(tree.find_between(low, high));
        }
        check_branch(first_key(tree), value, column)?;
        Ok(match op {
            Operator::Neq => tree.find_neq(value),
            Operator::Lt => tree.find_lt(value),
            Operator::Lte => tree.find_lte(value),
            Operator::Gt => tree.find_gt(value),
            Operator::Gte => tree.find_gte(value),
            _ => panic!("bug: non-range operator reached the range dispatch"),
        })
    }

    // =========================================================================
    // Ordered enumeration (no-criteria path)
    // =========================================================================

    /// Enumerate live ids in index order, paged by `limit`
    fn enumerate_ordered(
        &self,
        key: &str,
        dir: SortDirection,
        limit: Option<Limit>,
    ) -> Result<Vec<RowId>> {
        let mut pager = Pager::new(limit);

        if key == ID_COLUMN {
            match dir {
                SortDirection::Asc => {
                    for slot in 0..self.rows.len() {
                        if self.rows[slot].is_some() && !pager.push(slot as RowId + 1) {
                            break;
                        }
                    }
                }
                SortDirection::Desc => {
                    let total = self.rows.len();
                    for step in 1..=total {
                        let id = (1 + total - step) as RowId;
                        if self.rows[(id - 1) as usize].is_some() && !pager.push(id) {
                            break;
                        }
                    }
                }
            }
            return Ok(pager.into_ids());
        }

        if !self.schema.has_column(key) {
            return Err(Error::UnknownColumn(key.to_string()));
        }
        let indexes = self
            .indexes
            .get(key)
            .ok_or_else(|| Error::NoIndexFound(key.to_string()))?;

        if let Some(unique) = &indexes.unique {
            let ascending = dir == SortDirection::Asc;
            let mut cursor = if ascending {
                unique.first()
            } else {
                unique.last()
            };
            while let Some(c) = cursor {
                if !pager.push(*unique.value(c)) {
                    break;
                }
                cursor = if ascending {
                    unique.next(c)
                } else {
                    unique.prev(c)
                };
            }
            return Ok(pager.into_ids());
        }

        if let Some(multi) = &indexes.multi {
            let ascending = dir == SortDirection::Asc;
            let mut cursor = if ascending { multi.first() } else { multi.last() };
            'outer: while let Some(c) = cursor {
                for id in multi.value(c).sorted(ascending) {
                    if !pager.push(id) {
                        break 'outer;
                    }
                }
                cursor = if ascending { multi.next(c) } else { multi.prev(c) };
            }
            return Ok(pager.into_ids());
        }

        Err(Error::NoIndexFound(key.to_string()))
    }

    /// Clone the live rows behind a sorted id list, skipping tombstones
    fn materialize(&self, ids: &[RowId]) -> Vec<C::Row> {
        ids.iter()
            .filter_map(|&id| self.rows.get((id - 1) as usize).cloned().flatten())
            .collect()
    }
}

/// Array values index every element as its own key
fn expand_keys(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    }
}

/// Reject a criterion value whose branch can't meet the stored keys
fn check_branch(first_key: Option<&Value>, value: &Value, column: &str) -> Result<()> {
    if let Some(key) = first_key {
        if !value.is_nil() && key.data_type() != value.data_type() {
            return Err(Error::InvalidType(column.to_string()));
        }
    }
    Ok(())
}

fn first_key<V>(tree: &BpTree<V>) -> Option<&Value> {
    tree.first().map(|cursor| tree.key(cursor))
}

fn apply_limit<T>(items: Vec<T>, limit: Option<Limit>) -> Vec<T> {
    match limit {
        None => items,
        Some(limit) => items
            .into_iter()
            .skip(limit.offset)
            .take(limit.size)
            .collect(),
    }
}

/// Offset/size accounting for streamed enumeration
struct Pager {
    skip: usize,
    size: usize,
    ids: Vec<RowId>,
}

impl Pager {
    fn new(limit: Option<Limit>) -> Self {
        let (skip, size) = match limit {
            Some(limit) => (limit.offset, limit.size),
            None => (0, usize::MAX),
        };
        Self {
            skip,
            size,
            ids: Vec::new(),
        }
    }

    /// Account one live id; returns false once the window is full
    fn push(&mut self, id: RowId) -> bool {
        if self.skip > 0 {
            self.skip -= 1;
            return true;
        }
        if self.ids.len() >= self.size {
            return false;
        }
        self.ids.push(id);
        self.ids.len() < self.size
    }

    fn into_ids(self) -> Vec<RowId> {
        self.ids
    }
}
