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

//! Backup and restore tests
//!
//! A restored table must answer every query identically to the original:
//! same rows, same tombstone slots, same next id, same index contents.

use rowdex::{
    ColumnOption, Criterion, Operator, RowCodec, SchemaBuilder, Table, Value, ValueMap, ID_COLUMN,
};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    id: u32,
    name: String,
    age: u64,
    tags: Vec<String>,
}

struct PersonCodec;

impl RowCodec for PersonCodec {
    type Row = Person;

    fn serialize(&self, row: &Person, for_indexing: bool) -> ValueMap {
        let name = if for_indexing {
            row.name.to_lowercase()
        } else {
            row.name.clone()
        };
        let mut map = ValueMap::default();
        map.insert(ID_COLUMN.to_string(), Value::nat32(row.id));
        map.insert("name".to_string(), Value::text(name));
        map.insert("age".to_string(), Value::nat(row.age));
        map.insert(
            "tags".to_string(),
            Value::array(row.tags.iter().map(Value::text).collect()),
        );
        map
    }

    fn deserialize(&self, entries: &ValueMap) -> Person {
        Person {
            id: entries
                .get(ID_COLUMN)
                .and_then(|v| v.as_nat32())
                .unwrap_or(0),
            name: entries
                .get("name")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            age: entries
                .get("age")
                .and_then(|v| v.as_numeric())
                .unwrap_or(0.0) as u64,
            tags: entries
                .get("tags")
                .and_then(|v| v.as_array())
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|v| v.as_str())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

fn people_table() -> Table<PersonCodec> {
    let schema = SchemaBuilder::new("people", 1)
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
        .build();
    Table::new(schema, PersonCodec)
}

fn person(id: u32, name: &str, age: u64, tags: &[&str]) -> Person {
    Person {
        id,
        name: name.to_string(),
        age,
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The state after the canonical scenario: insert three, replace one,
/// delete one - leaving live ids 2 and 3 and a tombstone at 1
fn mutated_table() -> Table<PersonCodec> {
    let mut table = people_table();
    table.insert(1, person(1, "alice", 30, &["a", "b"])).unwrap();
    table.insert(2, person(2, "alicia", 25, &["a", "c"])).unwrap();
    table.insert(3, person(3, "bob", 30, &["b"])).unwrap();
    table.replace(2, person(2, "alex", 25, &["a", "c"])).unwrap();
    table.delete(1).unwrap();
    table
}

fn sorted_ids(rows: &[Person]) -> Vec<u32> {
    let mut out: Vec<u32> = rows.iter().map(|r| r.id).collect();
    out.sort_unstable();
    out
}

#[test]
fn test_backup_lists_live_rows_in_id_order() {
    let table = mutated_table();
    let backup = table.backup();
    assert_eq!(backup.len(), 2);

    let ids: Vec<u32> = backup
        .iter()
        .map(|entry| {
            entry
                .iter()
                .find(|(name, _)| name == ID_COLUMN)
                .and_then(|(_, value)| value.as_nat32())
                .expect("every entry carries its _id")
        })
        .collect();
    assert_eq!(ids, vec![2, 3]);
}

#[test]
fn test_backup_uses_canonical_projection() {
    let mut table = people_table();
    table.insert(1, person(1, "Alice", 30, &["a"])).unwrap();

    let backup = table.backup();
    let name = backup[0]
        .iter()
        .find(|(name, _)| name == "name")
        .map(|(_, value)| value.clone())
        .expect("name column present");
    // canonical casing survives even though the index key was folded
    assert_eq!(name, Value::text("Alice"));
}

#[test]
fn test_restore_preserves_tombstones_and_next_id() {
    let table = mutated_table();
    let mut restored = people_table();
    restored.restore(&table.backup()).expect("restore");

    assert_eq!(restored.next_id(), 4);
    assert_eq!(restored.get(1).unwrap(), None);
    assert_eq!(restored.get(2).unwrap().unwrap().name, "alex");
    assert_eq!(restored.get(3).unwrap().unwrap().name, "bob");
    assert_eq!(restored.count(None).unwrap(), 2);
}

#[test]
fn test_restored_table_answers_queries_identically() {
    let table = mutated_table();
    let mut restored = people_table();
    restored.restore(&table.backup()).expect("restore");

    let queries = [
        Criterion::new("name", Operator::Contains, Value::text("le")),
        Criterion::new("name", Operator::StartsWith, Value::text("al")),
        Criterion::new("age", Operator::Eq, Value::nat(30)),
        Criterion::new(
            "age",
            Operator::Between,
            Value::tuple(Value::nat(20), Value::nat(28)),
        ),
        Criterion::new("tags", Operator::Eq, Value::text("c")),
    ];
    for criterion in queries {
        let original = table
            .find(Some(std::slice::from_ref(&criterion)), None, None)
            .unwrap_or_else(|err| panic!("original failed {criterion}: {err}"));
        let mirrored = restored
            .find(Some(std::slice::from_ref(&criterion)), None, None)
            .unwrap_or_else(|err| panic!("restored failed {criterion}: {err}"));
        assert_eq!(
            sorted_ids(&original),
            sorted_ids(&mirrored),
            "diverged on {criterion}"
        );
    }
}

#[test]
fn test_restore_never_validates_uniqueness() {
    // a backup is trusted even where a fresh insert would be rejected;
    // build one by hand with two rows sharing a name
    let entry = |id: u32, name: &str| {
        vec![
            (ID_COLUMN.to_string(), Value::nat32(id)),
            ("name".to_string(), Value::text(name)),
            ("age".to_string(), Value::nat(20)),
            ("tags".to_string(), Value::array(vec![])),
        ]
    };
    let backup = vec![entry(1, "dup"), entry(2, "dup")];

    let mut table = people_table();
    table.restore(&backup).expect("restore trusts the backup");
    assert_eq!(table.count(None).unwrap(), 2);
}

#[test]
fn test_restore_after_leading_gap() {
    let entry = vec![
        (ID_COLUMN.to_string(), Value::nat32(5)),
        ("name".to_string(), Value::text("solo")),
        ("age".to_string(), Value::nat(20)),
        ("tags".to_string(), Value::array(vec![])),
    ];
    let mut table = people_table();
    table.restore(&[entry]).expect("restore");

    assert_eq!(table.next_id(), 6);
    for id in 1..=4 {
        assert_eq!(table.get(id).unwrap(), None, "id {id} must be a tombstone");
    }
    assert_eq!(table.get(5).unwrap().unwrap().name, "solo");
}

#[test]
fn test_restore_round_trips_through_second_backup() {
    let table = mutated_table();
    let first = table.backup();

    let mut restored = people_table();
    restored.restore(&first).expect("restore");
    let second = restored.backup();

    assert_eq!(first, second);
}

#[test]
fn test_mutations_continue_after_restore() {
    let table = mutated_table();
    let mut restored = people_table();
    restored.restore(&table.backup()).expect("restore");

    let id = restored.next_id();
    assert_eq!(id, 4);
    restored
        .insert(id, person(id, "carol", 22, &["d"]))
        .expect("insert after restore");

    let rows = restored
        .find(
            Some(&[Criterion::new("tags", Operator::Eq, Value::text("d"))]),
            None,
            None,
        )
        .expect("query new row");
    assert_eq!(sorted_ids(&rows), vec![4]);

    // uniqueness still holds against restored rows
    let id = restored.next_id();
    let err = restored
        .insert(id, person(id, "bob", 9, &[]))
        .expect_err("restored names stay unique");
    assert_eq!(err.to_string(), "Duplicated unique key at column name");
}
