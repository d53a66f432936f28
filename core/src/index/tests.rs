use super::*;
use crate::artifact::{RawOverload, RawRecord};
use common::{record, scenario};

mod common {
    use super::*;

    pub(super) fn record(key: &str, urls: &[&str]) -> RawRecord {
        let overloads = urls
            .iter()
            .map(|url| RawOverload::new(*url, format!("label of {url}")))
            .collect();
        RawRecord::new(key, overloads)
    }

    pub(super) fn scenario() -> RawIndex {
        RawIndex::from_iter([
            RawRecord::new(
                "index",
                vec![
                    RawOverload::new("Map.html#a1", "Map::index(Point2d) -> uint8_t"),
                    RawOverload::new("Map.html#a2", "Map::index(int) -> uint8_t"),
                ],
            ),
            RawRecord::new(
                "is_valid",
                vec![RawOverload::new(
                    "Solution.html#b1",
                    "Solution::is_valid() -> bool",
                )],
            ),
        ])
    }
}

mod load {
    use super::*;

    #[test]
    fn test_load_keeps_generation_order() {
        let store = IndexStore::load(scenario()).unwrap();

        let keys: Vec<_> = store.all_entries().iter().map(|e| e.key().as_str()).collect();
        assert_eq!(keys, ["index", "is_valid"]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.overload_count(), 3);
    }

    #[test]
    fn test_load_keeps_overload_order() {
        let store = IndexStore::load(scenario()).unwrap();

        let labels: Vec<_> = store.all_entries()[0]
            .overloads()
            .iter()
            .map(|o| o.qualified_label())
            .collect();
        assert_eq!(
            labels,
            ["Map::index(Point2d) -> uint8_t", "Map::index(int) -> uint8_t"]
        );
    }

    #[test]
    fn test_positional_ids() {
        let store = IndexStore::load(scenario()).unwrap();

        assert_eq!(store.all_entries()[0].id(), SymbolId::new(0));
        assert_eq!(store.all_entries()[1].id(), SymbolId::new(1));
        assert_eq!(store.get(SymbolId::new(1)).unwrap().key().as_str(), "is_valid");
        assert!(store.get(SymbolId::new(2)).is_none());
    }

    #[test]
    fn test_explicit_ids() {
        let raw = RawIndex::from_iter([
            record("b", &["b.html"]).with_id(1695),
            record("a", &["a.html"]).with_id(1686),
        ]);
        let store = IndexStore::load(raw).unwrap();

        assert_eq!(store.get(SymbolId::new(1686)).unwrap().key().as_str(), "a");
        assert_eq!(store.all_entries()[0].id(), SymbolId::new(1695));
    }

    #[test]
    fn test_keys_are_trimmed() {
        let store = IndexStore::load(RawIndex::from_iter([record(" index ", &["a.html"])])).unwrap();
        assert_eq!(store.all_entries()[0].key().as_str(), "index");
    }

    #[test]
    fn test_long_key_loads() {
        let long = "a".repeat(300);
        let src = format!(r#"[["{long}", [["Map.html#a1", "label"]]]]"#);

        let store = IndexStore::from_json(&src).unwrap();

        assert_eq!(store.all_entries()[0].key().as_str(), long);
    }

    #[test]
    fn test_repeated_key_is_merged() {
        let raw = RawIndex::from_iter([
            record("index", &["a.html#1"]),
            record("other", &["b.html"]),
            record("index", &["a.html#2", "a.html#3"]),
        ]);
        let store = IndexStore::load(raw).unwrap();

        assert_eq!(store.len(), 2);
        let index = &store.all_entries()[0];
        let urls: Vec<_> = index
            .overloads()
            .iter()
            .map(|o| o.target_url().as_str())
            .collect();
        assert_eq!(urls, ["a.html#1", "a.html#2", "a.html#3"]);
        assert_eq!(index.id(), SymbolId::new(0));
        // The merged record's id still resolves to the entry it joined.
        assert_eq!(store.get(SymbolId::new(2)).unwrap().key().as_str(), "index");
    }

    #[test]
    fn test_keys_differing_in_case_are_distinct() {
        let raw = RawIndex::from_iter([record("Instance", &["a.html"]), record("instance", &["b.html"])]);
        let store = IndexStore::load(raw).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_empty_artifact() {
        let store = IndexStore::load(RawIndex::new()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store, IndexStore::empty());
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_rejects_empty_key() {
        let raw = RawIndex::from_iter([record("ok", &["a.html"]), record("  ", &["b.html"])]);
        match IndexStore::load(raw) {
            Err(IndexError::InvalidKey { record, .. }) => assert_eq!(record, 1),
            other => panic!("expected InvalidKey, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_no_overloads() {
        let raw = RawIndex::from_iter([record("ok", &["a.html"]), record("lonely", &[])]);
        match IndexStore::load(raw) {
            Err(IndexError::NoOverloads { key }) => assert_eq!(key, "lonely"),
            other => panic!("expected NoOverloads, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_url() {
        let raw = RawIndex::from_iter([record("index", &["Map.html#a1", " "])]);
        match IndexStore::load(raw) {
            Err(IndexError::EmptyTargetUrl { key, overload }) => {
                assert_eq!(key, "index");
                assert_eq!(overload, 1);
            }
            other => panic!("expected EmptyTargetUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let raw = RawIndex::from_iter([
            record("a", &["a.html"]).with_id(3),
            record("b", &["b.html"]).with_id(3),
        ]);
        match IndexStore::load(raw) {
            Err(IndexError::DuplicateId { id }) => assert_eq!(id, SymbolId::new(3)),
            other => panic!("expected DuplicateId, got {other:?}"),
        }
    }

    #[test]
    fn test_positional_id_can_collide_with_explicit_id() {
        let raw = RawIndex::from_iter([record("a", &["a.html"]).with_id(1), record("b", &["b.html"])]);
        assert!(matches!(
            IndexStore::load(raw),
            Err(IndexError::DuplicateId { .. })
        ));
    }
}

mod buckets {
    use super::*;

    fn keys<'a>(entries: impl Iterator<Item = &'a SymbolEntry>) -> Vec<&'a str> {
        entries.map(|e| e.key().as_str()).collect()
    }

    fn store() -> IndexStore {
        IndexStore::load(RawIndex::from_iter([
            record("index", &["1.html"]),
            record("Instance", &["2.html"]),
            record("is_valid", &["3.html"]),
            record("reindex", &["4.html"]),
        ]))
        .unwrap()
    }

    #[test]
    fn test_first_char_bucket() {
        let store = store();

        assert_eq!(keys(store.entries_by_first_char('i')), ["index", "Instance", "is_valid"]);
        assert_eq!(keys(store.entries_by_first_char('I')), ["index", "Instance", "is_valid"]);
        assert_eq!(keys(store.entries_by_first_char('r')), ["reindex"]);
        assert!(store.entries_by_first_char('z').next().is_none());
    }

    #[test]
    fn test_containing_char_bucket() {
        let store = store();

        assert_eq!(keys(store.entries_containing_char('x')), ["index", "reindex"]);
        assert_eq!(keys(store.entries_containing_char('V')), ["is_valid"]);
        assert_eq!(
            keys(store.entries_containing_char('n')),
            ["index", "Instance", "reindex"]
        );
    }

    #[test]
    fn test_buckets_hold_each_entry_once() {
        let store = IndexStore::load(RawIndex::from_iter([record("aaa", &["a.html"])])).unwrap();
        assert_eq!(store.entries_containing_char('a').count(), 1);
    }
}
