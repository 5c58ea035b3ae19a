//! Helpers for the id-keyed lists every slice owns.

use std::collections::HashSet;

pub trait Identified {
    fn id(&self) -> &str;
}

/// Appends `item` unless an entry with the same id is already present.
pub fn push_unique<T: Identified>(list: &mut Vec<T>, item: T) {
    if !contains_id(list, item.id()) {
        list.push(item);
    }
}

/// Prepends `item` unless an entry with the same id is already present.
pub fn prepend_unique<T: Identified>(list: &mut Vec<T>, item: T) {
    if !contains_id(list, item.id()) {
        list.insert(0, item);
    }
}

/// Drops the entry with `id`. Unknown ids leave the list unchanged.
pub fn remove_by_id<T: Identified>(list: &mut Vec<T>, id: &str) {
    list.retain(|item| item.id() != id);
}

/// Keeps the first occurrence of every id, preserving order.
pub fn dedup_by_id<T: Identified>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(item.id().to_string())).collect()
}

pub fn contains_id<T: Identified>(list: &[T], id: &str) -> bool {
    list.iter().any(|item| item.id() == id)
}

pub fn find_by_id<'a, T: Identified>(list: &'a [T], id: &str) -> Option<&'a T> {
    list.iter().find(|item| item.id() == id)
}
