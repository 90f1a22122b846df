use bidi_list::{BidirectionalList, ContainerError, ListCursor};

#[test]
fn list_cursor_walk_matrix() {
    let list: BidirectionalList<&str> = ["a", "b", "c"].into();

    let mut forward = Vec::new();
    let mut at = list.begin();
    while at != list.end() {
        forward.push(*list.get(at).unwrap());
        at = list.next(at).unwrap();
    }
    assert_eq!(forward, vec!["a", "b", "c"]);
    assert_eq!(list.next(list.end()), Err(ContainerError::InvalidIterator));
    assert_eq!(list.get(list.end()), Err(ContainerError::InvalidIterator));

    let mut backward = Vec::new();
    let mut at = list.end();
    while at != list.begin() {
        at = list.prev(at).unwrap();
        backward.push(*list.get(at).unwrap());
    }
    assert_eq!(backward, vec!["c", "b", "a"]);
    assert_eq!(list.prev(list.begin()), Err(ContainerError::InvalidIterator));
}

#[test]
fn list_empty_matrix() {
    let mut list: BidirectionalList<i32> = BidirectionalList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.begin(), list.end());
    assert_eq!(list.prev(list.end()), Err(ContainerError::InvalidIterator));
    assert_eq!(list.erase(list.end()), Err(ContainerError::InvalidIterator));
    assert!(list.find(&1).is_end());
    assert_eq!(list.front_mut(), Err(ContainerError::EmptyContainer));
    assert_eq!(list.iter().next(), None);
}

#[test]
fn list_replace_value_with_sequence_matrix() {
    // Splice every occurrence of 2 with the contents of another list.
    let mut dest: BidirectionalList<i64> = [1, 2, 3, 2].into();
    let arg: BidirectionalList<i64> = [7, 8].into();

    loop {
        let at = dest.find(&2);
        if at.is_end() {
            break;
        }
        for value in &arg {
            dest.insert_before(*value, at).unwrap();
        }
        dest.erase(at).unwrap();
    }
    assert_eq!(dest, BidirectionalList::from([1, 7, 8, 3, 7, 8]));
}

#[test]
fn list_iter_mut_matrix() {
    let mut list: BidirectionalList<i32> = (1..=6).collect();
    for value in list.iter_mut() {
        if *value % 2 == 0 {
            *value *= 10;
        }
    }
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![1, 20, 3, 40, 5, 60]
    );

    let mut it = list.iter_mut();
    *it.next_back().unwrap() = 0;
    *it.next().unwrap() = 0;
    assert_eq!(it.len(), 4);
    drop(it);
    assert_eq!(list.front(), Ok(&0));
    assert_eq!(list.back(), Ok(&0));

    let at = list.find(&3);
    *list.get_mut(at).unwrap() = 33;
    assert!(list.contains(&33));
}

#[test]
fn list_clone_is_independent_matrix() {
    let mut original: BidirectionalList<String> =
        ["x", "y", "z"].iter().map(|s| s.to_string()).collect();
    original.erase(original.find(&"x".to_string())).unwrap();
    original.push_front("w".to_string());

    let copy = original.clone();
    assert_eq!(copy, original);

    original.pop_back().unwrap();
    *original.front_mut().unwrap() = "changed".to_string();
    assert_eq!(format!("{copy:?}"), r#"["w", "y", "z"]"#);
    assert_ne!(copy, original);
}

#[test]
fn list_move_empties_source_matrix() {
    let mut source: BidirectionalList<u8> = [1, 2, 3].into();
    let moved = std::mem::take(&mut source);
    assert!(source.is_empty());
    assert_eq!(moved.len(), 3);

    let mut other: BidirectionalList<u8> = [9].into();
    source.swap(&mut other);
    assert_eq!(source, BidirectionalList::from([9]));
    assert!(other.is_empty());
}

#[test]
fn list_equality_matrix() {
    let a: BidirectionalList<i32> = [1, 2, 3].into();
    let b: BidirectionalList<i32> = [1, 2, 3].into();
    let prefix: BidirectionalList<i32> = [1, 2].into();
    let longer: BidirectionalList<i32> = [1, 2, 3, 4].into();
    let different: BidirectionalList<i32> = [1, 5, 3].into();
    assert_eq!(a, b);
    assert_ne!(a, prefix);
    assert_ne!(prefix, a);
    assert_ne!(a, longer);
    assert_ne!(a, different);
    assert_eq!(BidirectionalList::<i32>::new(), BidirectionalList::new());
}

#[test]
fn list_owned_iteration_matrix() {
    let list: BidirectionalList<i32> = (1..=4).collect();
    let mut it = list.into_iter();
    assert_eq!(it.next_back(), Some(4));
    assert_eq!(it.next(), Some(1));
    assert_eq!(it.collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn list_cursor_survives_unrelated_erase_matrix() {
    let mut list: BidirectionalList<i32> = (0..5).collect();
    let keep: ListCursor = list.find(&3);
    list.erase(list.find(&1)).unwrap();
    list.erase(list.find(&4)).unwrap();
    assert_eq!(list.get(keep), Ok(&3));
    assert_eq!(list.next(keep), Ok(list.end()));
    list.clear();
    assert_eq!(list.get(keep), Err(ContainerError::InvalidIterator));
}
