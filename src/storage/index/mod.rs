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

//! Index implementations
//!
//! - [`bptree`] - ordered B+tree for unique and sortable columns
//! - [`suffix`] - generalized suffix tree for partial (substring) columns
//! - [`prefix`] - prefix map for prefixed columns

pub mod bptree;
pub mod prefix;
pub mod suffix;

pub use bptree::{BpTree, Cursor};
pub use prefix::PrefixIndex;
pub use suffix::SuffixTree;
