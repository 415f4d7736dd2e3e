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

//! Row-id sets
//!
//! Index payloads are sets of row ids. Most keys map to very few rows, so the
//! backing store is a SmallVec with four inline slots; membership is a linear
//! scan, which beats hashing at these sizes.

use smallvec::SmallVec;

use crate::core::RowId;

/// A small set of row ids with inline storage for the common case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdSet {
    ids: SmallVec<[RowId; 4]>,
}

impl IdSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set holding a single id
    pub fn single(id: RowId) -> Self {
        let mut set = Self::new();
        set.insert(id);
        set
    }

    /// Insert an id; returns false if it was already present
    pub fn insert(&mut self, id: RowId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove an id; returns true if it was present
    pub fn remove(&mut self, id: RowId) -> bool {
        match self.ids.iter().position(|&existing| existing == id) {
            Some(pos) => {
                self.ids.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Membership test
    pub fn contains(&self, id: RowId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of ids in the set
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate the ids in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = RowId> + '_ {
        self.ids.iter().copied()
    }

    /// Collect the ids sorted ascending or descending
    pub fn sorted(&self, ascending: bool) -> Vec<RowId> {
        let mut ids: Vec<RowId> = self.ids.to_vec();
        ids.sort_unstable();
        if !ascending {
            ids.reverse();
        }
        ids
    }
}

impl FromIterator<RowId> for IdSet {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        let mut set = IdSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
