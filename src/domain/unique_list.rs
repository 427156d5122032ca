// src/domain/unique_list.rs
//
// Ordered collection that never holds two identity-equal entries.
//
// Two predicates are in play and they are deliberately NOT the same:
// - identity (`Identifiable::is_same_identity`) guards uniqueness: add, contains, replace
// - value equality (`PartialEq`) locates targets: remove, replace, position_of

use std::cmp::Ordering;
use std::slice;

use crate::domain::{DomainError, DomainResult};

/// The looser equality rule used only for collection uniqueness
pub trait Identifiable {
    /// Entity name used in error messages ("person", "game")
    const KIND: &'static str;

    fn is_same_identity(&self, other: &Self) -> bool;

    /// Short human-readable key for error messages
    fn identity_label(&self) -> String;
}

/// Ordering applied after every structural mutation (sorted variant only)
pub type SortOrder<T> = fn(&T, &T) -> Ordering;

#[derive(Debug, Clone)]
pub struct UniqueEntityList<T> {
    items: Vec<T>,
    order: Option<SortOrder<T>>,
}

impl<T> Default for UniqueEntityList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            order: None,
        }
    }
}

impl<T> UniqueEntityList<T>
where
    T: Identifiable + PartialEq + Clone,
{
    /// Insertion-ordered list
    pub fn new() -> Self {
        Self::default()
    }

    /// List kept sorted by `order` after add, replace and set_all
    pub fn sorted_by(order: SortOrder<T>) -> Self {
        Self {
            items: Vec::new(),
            order: Some(order),
        }
    }

    /// True iff some element is identity-equal to `item`
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same_identity(item))
    }

    pub fn add(&mut self, item: T) -> DomainResult<()> {
        if self.contains(&item) {
            return Err(duplicate(&item));
        }
        self.items.push(item);
        self.resort();
        Ok(())
    }

    /// Removes the element value-equal to `item` and returns it
    pub fn remove(&mut self, item: &T) -> DomainResult<T> {
        let index = self.position_of(item).ok_or_else(|| not_found(item))?;
        Ok(self.items.remove(index))
    }

    /// Replaces `target` with `replacement`.
    ///
    /// A replacement keeping the target's identity is always accepted; one that
    /// takes the identity of a *different* element is rejected.
    pub fn replace(&mut self, target: &T, replacement: T) -> DomainResult<()> {
        let index = self.position_of(target).ok_or_else(|| not_found(target))?;

        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.is_same_identity(&replacement));
        if collides {
            return Err(duplicate(&replacement));
        }

        self.items[index] = replacement;
        self.resort();
        Ok(())
    }

    /// Replaces the whole backing sequence; rejected unless pairwise unique
    pub fn set_all(&mut self, items: Vec<T>) -> DomainResult<()> {
        if let Some(item) = first_duplicate(&items) {
            return Err(duplicate(item));
        }
        self.items = items;
        self.resort();
        Ok(())
    }

    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    /// Finds the stored element identity-equal to `item`
    pub fn find_same_identity(&self, item: &T) -> Option<&T> {
        self.items.iter().find(|existing| existing.is_same_identity(item))
    }

    fn resort(&mut self) {
        if let Some(order) = self.order {
            // stable, so equal keys keep insertion order
            self.items.sort_by(order);
        }
    }
}

impl<T> UniqueEntityList<T> {
    /// Read-only view of the current contents
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: PartialEq> PartialEq for UniqueEntityList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a, T> IntoIterator for &'a UniqueEntityList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// O(n²) pairwise check; collections are bounded by one person's dataset
fn first_duplicate<T: Identifiable>(items: &[T]) -> Option<&T> {
    for (i, a) in items.iter().enumerate() {
        if items[i + 1..].iter().any(|b| a.is_same_identity(b)) {
            return Some(a);
        }
    }
    None
}

fn duplicate<T: Identifiable>(item: &T) -> DomainError {
    DomainError::DuplicateEntity(format!("{} {}", T::KIND, item.identity_label()))
}

fn not_found<T: Identifiable>(item: &T) -> DomainError {
    DomainError::EntityNotFound(format!("{} {}", T::KIND, item.identity_label()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Identity is the key; value equality also covers the payload
    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        key: u32,
        payload: &'static str,
    }

    impl Identifiable for Item {
        const KIND: &'static str = "item";

        fn is_same_identity(&self, other: &Self) -> bool {
            self.key == other.key
        }

        fn identity_label(&self) -> String {
            self.key.to_string()
        }
    }

    fn item(key: u32, payload: &'static str) -> Item {
        Item { key, payload }
    }

    fn by_key(a: &Item, b: &Item) -> Ordering {
        a.key.cmp(&b.key)
    }

    #[test]
    fn test_add_rejects_same_identity() {
        let mut list = UniqueEntityList::new();
        list.add(item(1, "a")).unwrap();

        let err = list.add(item(1, "b")).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEntity(_)));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0).unwrap().payload, "a");
    }

    #[test]
    fn test_contains_uses_identity() {
        let mut list = UniqueEntityList::new();
        list.add(item(1, "a")).unwrap();
        assert!(list.contains(&item(1, "different payload")));
        assert!(!list.contains(&item(2, "a")));
    }

    #[test]
    fn test_remove_uses_value_equality() {
        let mut list = UniqueEntityList::new();
        list.add(item(1, "a")).unwrap();

        // same identity, different value: not removable
        let err = list.remove(&item(1, "b")).unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound(_)));
        assert_eq!(list.len(), 1);

        let removed = list.remove(&item(1, "a")).unwrap();
        assert_eq!(removed, item(1, "a"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_then_remove_restores_state() {
        let mut list = UniqueEntityList::new();
        list.add(item(1, "a")).unwrap();
        list.add(item(2, "b")).unwrap();
        let before = list.clone();

        list.add(item(3, "c")).unwrap();
        list.remove(&item(3, "c")).unwrap();
        assert_eq!(list, before);
    }

    #[test]
    fn test_replace_with_same_identity_allowed() {
        let mut list = UniqueEntityList::new();
        list.add(item(1, "a")).unwrap();
        list.replace(&item(1, "a"), item(1, "edited")).unwrap();
        assert_eq!(list.as_slice(), &[item(1, "edited")]);
    }

    #[test]
    fn test_replace_colliding_with_other_element_fails() {
        let mut list = UniqueEntityList::new();
        list.add(item(1, "a")).unwrap();
        list.add(item(2, "b")).unwrap();

        let err = list.replace(&item(1, "a"), item(2, "c")).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEntity(_)));
        assert_eq!(list.as_slice(), &[item(1, "a"), item(2, "b")]);
    }

    #[test]
    fn test_replace_missing_target_fails() {
        let mut list: UniqueEntityList<Item> = UniqueEntityList::new();
        let err = list.replace(&item(1, "a"), item(2, "b")).unwrap_err();
        assert!(matches!(err, DomainError::EntityNotFound(_)));
    }

    #[test]
    fn test_set_all_rejects_duplicates_and_keeps_old_contents() {
        let mut list = UniqueEntityList::sorted_by(by_key);
        let err = list.set_all(vec![item(1, "a"), item(1, "a")]).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateEntity(_)));
        assert!(list.is_empty());
    }

    #[test]
    fn test_sorted_variant_resorts_after_mutation() {
        let mut list = UniqueEntityList::sorted_by(by_key);
        list.add(item(3, "c")).unwrap();
        list.add(item(1, "a")).unwrap();
        list.add(item(2, "b")).unwrap();
        let keys: Vec<u32> = list.iter().map(|i| i.key).collect();
        assert_eq!(keys, vec![1, 2, 3]);

        list.replace(&item(1, "a"), item(4, "d")).unwrap();
        let keys: Vec<u32> = list.iter().map(|i| i.key).collect();
        assert_eq!(keys, vec![2, 3, 4]);

        list.set_all(vec![item(9, "z"), item(5, "y")]).unwrap();
        let keys: Vec<u32> = list.iter().map(|i| i.key).collect();
        assert_eq!(keys, vec![5, 9]);
    }

    #[test]
    fn test_never_holds_identity_duplicates() {
        let mut list = UniqueEntityList::new();
        let ops = [(1, true), (2, true), (1, true), (2, false), (2, true), (3, true), (1, false)];
        for (key, is_add) in ops {
            if is_add {
                let _ = list.add(item(key, "x"));
            } else {
                let _ = list.remove(&item(key, "x"));
            }
            assert!(first_duplicate(list.as_slice()).is_none());
        }
    }
}
