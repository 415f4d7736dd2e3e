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

//! Ordered enumeration and boundary tests
//!
//! The no-criteria find path walks the row vector or an index leaf chain
//! in either direction, pages with offset/size, and honors only the first
//! sort key. Also covers the nullable-unique bucket and empty-table edges.

use rowdex::{
    ColumnOption, Criterion, Error, Limit, Operator, RowCodec, SchemaBuilder, SortBy,
    SortDirection, Table, Value, ValueMap, ID_COLUMN,
};

#[derive(Debug, Clone, PartialEq)]
struct Account {
    id: u32,
    handle: String,
    email: Option<String>,
    karma: u64,
}

struct AccountCodec;

impl RowCodec for AccountCodec {
    type Row = Account;

    fn serialize(&self, row: &Account, _for_indexing: bool) -> ValueMap {
        let mut map = ValueMap::default();
        map.insert(ID_COLUMN.to_string(), Value::nat32(row.id));
        map.insert("handle".to_string(), Value::text(row.handle.clone()));
        map.insert(
            "email".to_string(),
            row.email
                .as_ref()
                .map(Value::text)
                .unwrap_or(Value::Nil),
        );
        map.insert("karma".to_string(), Value::nat(row.karma));
        map
    }

    fn deserialize(&self, entries: &ValueMap) -> Account {
        Account {
            id: entries
                .get(ID_COLUMN)
                .and_then(|v| v.as_nat32())
                .unwrap_or(0),
            handle: entries
                .get("handle")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
            email: entries
                .get("email")
                .and_then(|v| v.as_str())
                .map(str::to_string),
            karma: entries
                .get("karma")
                .and_then(|v| v.as_numeric())
                .unwrap_or(0.0) as u64,
        }
    }
}

fn accounts_table() -> Table<AccountCodec> {
    let schema = SchemaBuilder::new("accounts", 1)
        .column("handle", &[ColumnOption::Unique])
        .column("email", &[ColumnOption::Unique, ColumnOption::Nullable])
        .column("karma", &[ColumnOption::Sortable])
        .build();
    Table::new(schema, AccountCodec)
}

fn account(id: u32, handle: &str, email: Option<&str>, karma: u64) -> Account {
    Account {
        id,
        handle: handle.to_string(),
        email: email.map(str::to_string),
        karma,
    }
}

fn seeded() -> Table<AccountCodec> {
    let mut table = accounts_table();
    table
        .insert(1, account(1, "delta", Some("d@x"), 40))
        .unwrap();
    table
        .insert(2, account(2, "alpha", Some("a@x"), 10))
        .unwrap();
    table
        .insert(3, account(3, "charlie", Some("c@x"), 30))
        .unwrap();
    table
        .insert(4, account(4, "bravo", Some("b@x"), 10))
        .unwrap();
    table
}

fn ids(rows: &[Account]) -> Vec<u32> {
    rows.iter().map(|r| r.id).collect()
}

fn id_sort(dir: SortDirection) -> [SortBy<Account>; 1] {
    [SortBy::new(ID_COLUMN, dir, |a: &Account, b: &Account| {
        a.id.cmp(&b.id)
    })]
}

#[test]
fn test_default_enumeration_is_id_ascending() {
    let table = seeded();
    let rows = table.find(None, None, None).expect("find all");
    assert_eq!(ids(&rows), vec![1, 2, 3, 4]);
}

#[test]
fn test_id_descending_walks_from_the_top() {
    let mut table = seeded();
    table.delete(3).expect("delete");
    let sort = id_sort(SortDirection::Desc);
    let rows = table.find(None, Some(&sort), None).expect("find desc");
    // observable sequence: highest issued id first, tombstones skipped
    assert_eq!(ids(&rows), vec![4, 2, 1]);
}

#[test]
fn test_id_paging_counts_live_rows_only() {
    let mut table = seeded();
    table.delete(1).expect("delete");
    let rows = table
        .find(None, None, Some(Limit::new(1, 2)))
        .expect("find paged");
    // live sequence is 2,3,4: skip one, take two
    assert_eq!(ids(&rows), vec![3, 4]);
}

#[test]
fn test_unique_key_enumeration_walks_the_leaf_chain() {
    let table = seeded();
    let sort = [SortBy::<Account>::new(
        "handle",
        SortDirection::Asc,
        |a, b| a.handle.cmp(&b.handle),
    )];
    let rows = table.find(None, Some(&sort), None).expect("find by handle");
    let handles: Vec<&str> = rows.iter().map(|r| r.handle.as_str()).collect();
    assert_eq!(handles, vec!["alpha", "bravo", "charlie", "delta"]);

    let sort = [SortBy::<Account>::new(
        "handle",
        SortDirection::Desc,
        |a, b| a.handle.cmp(&b.handle),
    )];
    let rows = table
        .find(None, Some(&sort), Some(Limit::new(1, 2)))
        .expect("find by handle desc");
    let handles: Vec<&str> = rows.iter().map(|r| r.handle.as_str()).collect();
    assert_eq!(handles, vec!["charlie", "bravo"]);
}

#[test]
fn test_sortable_key_enumeration_orders_buckets_internally() {
    let table = seeded();
    let sort = [SortBy::<Account>::new("karma", SortDirection::Asc, |a, b| {
        a.karma.cmp(&b.karma)
    })];
    let rows = table.find(None, Some(&sort), None).expect("find by karma");
    // bucket 10 holds ids {2, 4}, sorted ascending inside the bucket
    assert_eq!(ids(&rows), vec![2, 4, 3, 1]);

    let sort = [SortBy::<Account>::new(
        "karma",
        SortDirection::Desc,
        |a, b| a.karma.cmp(&b.karma),
    )];
    let rows = table
        .find(None, Some(&sort), None)
        .expect("find by karma desc");
    assert_eq!(ids(&rows), vec![1, 3, 4, 2]);
}

#[test]
fn test_enumeration_without_index_is_rejected() {
    let schema = SchemaBuilder::new("t", 1)
        .column("plain", &[])
        .build();

    #[derive(Clone, Debug)]
    struct Bare(u32);
    struct BareCodec;
    impl RowCodec for BareCodec {
        type Row = Bare;
        fn serialize(&self, row: &Bare, _for_indexing: bool) -> ValueMap {
            let mut map = ValueMap::default();
            map.insert(ID_COLUMN.to_string(), Value::nat32(row.0));
            map.insert("plain".to_string(), Value::nat(7));
            map
        }
        fn deserialize(&self, entries: &ValueMap) -> Bare {
            Bare(entries.get(ID_COLUMN).and_then(|v| v.as_nat32()).unwrap_or(0))
        }
    }

    let mut table = Table::new(schema, BareCodec);
    table.insert(1, Bare(1)).unwrap();
    let sort = [SortBy::<Bare>::new("plain", SortDirection::Asc, |a, b| {
        a.0.cmp(&b.0)
    })];
    let err = table.find(None, Some(&sort), None).expect_err("no index");
    assert_eq!(err, Error::NoIndexFound("plain".to_string()));

    let sort = [SortBy::<Bare>::new("ghost", SortDirection::Asc, |a, b| {
        a.0.cmp(&b.0)
    })];
    let err = table.find(None, Some(&sort), None).expect_err("no column");
    assert_eq!(err, Error::UnknownColumn("ghost".to_string()));
}

#[test]
fn test_nullable_unique_null_bucket() {
    let mut table = accounts_table();
    table
        .insert(1, account(1, "one", None, 5))
        .expect("first nil email");

    let id = table.next_id();
    let err = table
        .insert(id, account(id, "two", None, 5))
        .expect_err("second nil email");
    assert_eq!(err, Error::DuplicatedUniqueKey("email".to_string()));

    // freeing the bucket admits a new nil
    table.delete(1).expect("delete");
    let id = table.next_id();
    table
        .insert(id, account(id, "two", None, 5))
        .expect("bucket is free again");
}

#[test]
fn test_eq_nil_matches_sortable_null_bucket() {
    let schema = SchemaBuilder::new("t", 1)
        .column("handle", &[ColumnOption::Unique])
        .column(
            "email",
            &[ColumnOption::Sortable, ColumnOption::Nullable],
        )
        .column("karma", &[ColumnOption::Sortable])
        .build();
    let mut table = Table::new(schema, AccountCodec);
    table.insert(1, account(1, "a", None, 1)).unwrap();
    table.insert(2, account(2, "b", Some("b@x"), 2)).unwrap();
    table.insert(3, account(3, "c", None, 3)).unwrap();

    let rows = table
        .find(
            Some(&[Criterion::new("email", Operator::Eq, Value::Nil)]),
            None,
            None,
        )
        .expect("eq nil on sortable");
    assert_eq!(ids(&rows), vec![1, 3]);
}

#[test]
fn test_empty_table_edges() {
    let table = accounts_table();
    assert!(table.find(None, None, None).expect("find").is_empty());
    assert_eq!(table.count(None).expect("count"), 0);
    assert!(table.find_one(None).expect("find_one").is_none());
    assert_eq!(table.next_id(), 1);

    let rows = table
        .find(
            Some(&[Criterion::new("karma", Operator::Eq, Value::nat(1))]),
            None,
            None,
        )
        .expect("criteria on empty table");
    assert!(rows.is_empty());
}

#[test]
fn test_range_operators_over_sortable_column() {
    let table = seeded();
    let karma = |op, value| {
        table
            .find(Some(&[Criterion::new("karma", op, value)]), None, None)
            .map(|rows| {
                let mut out = ids(&rows);
                out.sort_unstable();
                out
            })
    };

    // all karma keys (10, 30, 40) fit in one leaf, so every match is seen
    assert_eq!(karma(Operator::Lt, Value::nat(30)).unwrap(), vec![2, 4]);
    assert_eq!(karma(Operator::Lte, Value::nat(30)).unwrap(), vec![2, 3, 4]);
    assert_eq!(karma(Operator::Gt, Value::nat(10)).unwrap(), vec![1, 3]);
    assert_eq!(
        karma(Operator::Gte, Value::nat(10)).unwrap(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(karma(Operator::Neq, Value::nat(10)).unwrap(), vec![1, 3]);
    assert_eq!(
        karma(
            Operator::Between,
            Value::tuple(Value::nat(10), Value::nat(30))
        )
        .unwrap(),
        vec![2, 3, 4]
    );
}

#[test]
fn test_find_one_returns_first_survivor() {
    let table = seeded();
    let hit = table
        .find_one(Some(&[Criterion::new(
            "karma",
            Operator::Eq,
            Value::nat(10),
        )]))
        .expect("find_one");
    // survivors materialize in ascending id order
    assert_eq!(hit.map(|r| r.id), Some(2));
}
