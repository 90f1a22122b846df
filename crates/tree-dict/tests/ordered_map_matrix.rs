use tree_dict::{less_comparator, DictError, OrderedMap};

#[test]
fn push_get_drop_matrix() {
    let mut map = OrderedMap::new();
    assert_eq!(map.push("x".to_string(), 1), None);
    assert_eq!(map.push("x".to_string(), 2), Some(1));
    assert_eq!(map.get(&"x".to_string()), Ok(&2));
    assert_eq!(map.len(), 1);

    assert_eq!(map.get(&"y".to_string()), Err(DictError::KeyNotFound));
    assert_eq!(map.drop(&"y".to_string()), None);
    assert_eq!(map.len(), 1);

    *map.get_mut(&"x".to_string()).unwrap() *= 10;
    assert_eq!(map.drop(&"x".to_string()), Some(20));
    assert!(map.is_empty());
    map.assert_valid().unwrap();
}

#[test]
fn drop_on_empty_map_matrix() {
    let mut map: OrderedMap<&str, i32> = OrderedMap::default();
    assert_eq!(map.drop(&"y"), None);
    assert!(map.is_empty());
    assert_eq!(map.begin(), map.end());
}

#[test]
fn from_pairs_later_duplicate_wins_matrix() {
    let map = OrderedMap::from_pairs([("b", 1), ("a", 2), ("b", 3), ("c", 4), ("a", 5)]);
    assert_eq!(map.len(), 3);
    let pairs: Vec<(&str, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
    assert_eq!(pairs, vec![("a", 5), ("b", 3), ("c", 4)]);

    let collected: OrderedMap<i32, char> = [(2, 'x'), (1, 'y'), (2, 'z')].into_iter().collect();
    assert_eq!(collected.get(&2), Ok(&'z'));
    assert_eq!(format!("{collected:?}"), "{1: 'y', 2: 'z'}");
}

#[test]
fn cursor_walk_matrix() {
    let map: OrderedMap<u32, &str> =
        [(3, "three"), (1, "one"), (4, "four"), (5, "five"), (9, "nine")]
            .into_iter()
            .collect();

    let mut at = map.lower_bound(&2);
    let mut names = Vec::new();
    while at != map.end() {
        names.push(*map.entry(&at).unwrap().1);
        map.advance(&mut at).unwrap();
    }
    assert_eq!(names, vec!["three", "four", "five", "nine"]);

    assert_eq!(map.entry(&map.find(&4)), Ok((&4, &"four")));
    assert_eq!(map.entry(&map.upper_bound(&5)), Ok((&9, &"nine")));
    assert!(map.find(&2).is_end());
    assert_eq!(map.entry(&map.end()), Err(DictError::InvalidIterator));
}

#[test]
fn value_mut_through_cursor_matrix() {
    let mut map: OrderedMap<i32, Vec<i32>> = (0..4).map(|k| (k, Vec::new())).collect();
    let mut at = map.begin();
    while !at.is_end() {
        let key = *map.entry(&at).unwrap().0;
        map.value_mut(&at).unwrap().push(key * key);
        map.advance(&mut at).unwrap();
    }
    let squares: Vec<i32> = map.values().flatten().copied().collect();
    assert_eq!(squares, vec![0, 1, 4, 9]);
}

#[test]
fn custom_comparator_matrix() {
    let by_len = less_comparator(|a: &String, b: &String| a.len() < b.len());
    let mut map = OrderedMap::with_comparator(by_len);
    map.push("ccc".to_string(), 3);
    map.push("a".to_string(), 1);
    // Same length as "a": treated as the same key.
    assert_eq!(map.push("b".to_string(), 2), Some(1));
    assert_eq!(map.len(), 2);
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, vec!["a", "ccc"]);
    map.assert_valid().unwrap();
}

#[test]
fn clear_and_clone_matrix() {
    let mut map: OrderedMap<i32, String> = (0..20).map(|k| (k, k.to_string())).collect();
    let copy = map.clone();
    map.clear();
    assert!(map.is_empty());
    assert!(!map.contains_key(&3));
    assert_eq!(copy.len(), 20);
    assert_eq!(copy.get(&3).map(String::as_str), Ok("3"));

    map.push(7, "seven".to_string());
    assert_eq!(map.len(), 1);
    assert_eq!((&copy).into_iter().count(), 20);
    assert!(copy.tree().height() <= 6);
}
