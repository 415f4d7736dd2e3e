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

//! Prefix index for `startsWith` search
//!
//! Every prefix of an indexed text, on char boundaries, maps to the set of
//! row ids whose value carries that prefix. Lookups return the stored set
//! directly; deletions drop a prefix entry once its set empties.

use rustc_hash::FxHashMap;

use crate::common::IdSet;
use crate::core::RowId;

/// Map from each prefix of the indexed texts to the ids carrying it
#[derive(Debug, Default)]
pub struct PrefixIndex {
    prefixes: FxHashMap<String, IdSet>,
}

impl PrefixIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` under every prefix of `text`
    pub fn put(&mut self, text: &str, id: RowId) {
        for (offset, ch) in text.char_indices() {
            let end = offset + ch.len_utf8();
            self.prefixes
                .entry(text[..end].to_string())
                .or_default()
                .insert(id);
        }
    }

    /// Remove `id` from every prefix of `text`, dropping emptied entries
    pub fn delete(&mut self, text: &str, id: RowId) {
        for (offset, ch) in text.char_indices() {
            let end = offset + ch.len_utf8();
            let prefix = &text[..end];
            if let Some(set) = self.prefixes.get_mut(prefix) {
                set.remove(id);
                if set.is_empty() {
                    self.prefixes.remove(prefix);
                }
            }
        }
    }

    /// Ids whose indexed text starts with `prefix`
    pub fn find(&self, prefix: &str) -> Option<&IdSet> {
        self.prefixes.get(prefix)
    }

    /// Number of distinct prefixes held
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Whether no prefix is held
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_registers_every_prefix() {
        let mut index = PrefixIndex::new();
        index.put("abc", 1);
        assert_eq!(index.len(), 3);
        assert!(index.find("a").unwrap().contains(1));
        assert!(index.find("ab").unwrap().contains(1));
        assert!(index.find("abc").unwrap().contains(1));
        assert!(index.find("abcd").is_none());
        assert!(index.find("b").is_none());
    }

    #[test]
    fn test_shared_prefixes_accumulate() {
        let mut index = PrefixIndex::new();
        index.put("alice", 1);
        index.put("alicia", 2);
        let hits = index.find("ali").unwrap();
        assert!(hits.contains(1));
        assert!(hits.contains(2));
        assert_eq!(index.find("alic").unwrap().len(), 2);
        assert_eq!(index.find("alice").unwrap().len(), 1);
    }

    #[test]
    fn test_delete_drops_emptied_entries() {
        let mut index = PrefixIndex::new();
        index.put("alice", 1);
        index.put("alicia", 2);

        index.delete("alice", 1);
        assert!(index.find("alice").is_none());
        assert_eq!(index.find("ali").unwrap().sorted(true), vec![2]);

        index.delete("alicia", 2);
        assert!(index.is_empty());
    }

    #[test]
    fn test_unicode_boundaries() {
        let mut index = PrefixIndex::new();
        index.put("héllo", 7);
        assert!(index.find("h").unwrap().contains(7));
        assert!(index.find("hé").unwrap().contains(7));
        assert!(index.find("hél").unwrap().contains(7));
    }

    #[test]
    fn test_empty_text_has_no_prefixes() {
        let mut index = PrefixIndex::new();
        index.put("", 1);
        assert!(index.is_empty());
    }
}
