//! Tests for the append-or-create MultiMap

use cohort_criteria::MultiMap;

#[test]
fn test_insert_appends_under_existing_key() {
    let mut map: MultiMap<String, i32> = MultiMap::new();
    map.insert("a".to_string(), 1);
    map.insert("a".to_string(), 2);
    map.insert("b".to_string(), 3);

    assert_eq!(map.get(&"a".to_string()), Some(&[1, 2][..]));
    assert_eq!(map.get(&"b".to_string()), Some(&[3][..]));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_get_or_empty_on_missing_key() {
    let map: MultiMap<String, i32> = MultiMap::new();
    assert!(map.is_empty());
    assert_eq!(map.get(&"missing".to_string()), None);
    assert!(map.get_or_empty(&"missing".to_string()).is_empty());
}

#[test]
fn test_remove_takes_whole_list() {
    let mut map: MultiMap<&str, &str> = MultiMap::new();
    map.insert("parent", "child-1");
    map.insert("parent", "child-2");

    let taken = map.remove(&"parent");
    assert_eq!(taken, Some(vec!["child-1", "child-2"]));
    assert!(!map.contains_key(&"parent"));
    assert_eq!(map.remove(&"parent"), None);
}

#[test]
fn test_from_iterator_groups_pairs() {
    let map: MultiMap<&str, i32> = [("x", 1), ("y", 2), ("x", 3)].into_iter().collect();
    assert_eq!(map.get(&"x"), Some(&[1, 3][..]));
    assert_eq!(map.get(&"y"), Some(&[2][..]));

    let mut keys: Vec<&&str> = map.keys().collect();
    keys.sort();
    assert_eq!(keys, vec![&"x", &"y"]);
}
