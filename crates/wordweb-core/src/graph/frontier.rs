//! Breadth-first frontier with constant-time membership checks
//!
//! A `VecDeque` keeps insertion order and a `HashSet` answers
//! `contains` without scanning the queue. Both always hold the same items.

use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use crate::error::{Result, WordWebError};

#[derive(Debug, Clone)]
pub struct FrontierQueue<T> {
    members: HashSet<T>,
    order: VecDeque<T>,
}

impl<T> Default for FrontierQueue<T> {
    fn default() -> Self {
        Self {
            members: HashSet::new(),
            order: VecDeque::new(),
        }
    }
}

impl<T> FrontierQueue<T>
where
    T: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a queue seeded with `items`, failing on the first duplicate
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Result<Self> {
        let mut queue = Self::new();
        for item in items {
            queue.add(item)?;
        }
        Ok(queue)
    }

    /// Append `item` to the back of the queue.
    ///
    /// Callers must check [`contains`](Self::contains) first; inserting an
    /// item that is already queued is a bookkeeping bug and is reported as
    /// [`WordWebError::DuplicateInsertion`].
    pub fn add(&mut self, item: T) -> Result<()> {
        if self.members.contains(&item) {
            return Err(WordWebError::duplicate_insertion(&item));
        }
        self.members.insert(item.clone());
        self.order.push_back(item);
        Ok(())
    }

    /// Pop the front-most item
    pub fn remove(&mut self) -> Result<T> {
        let item = self.order.pop_front().ok_or(WordWebError::EmptyFrontier)?;
        self.members.remove(&item);
        Ok(item)
    }

    /// Front-most item without removing it
    pub fn peek(&self) -> Result<&T> {
        self.order.front().ok_or(WordWebError::EmptyFrontier)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.members.contains(item)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = FrontierQueue::from_items(["a", "b"]).unwrap();
        queue.add("c").unwrap();
        assert_eq!(queue.remove().unwrap(), "a");
        assert_eq!(queue.remove().unwrap(), "b");
        assert_eq!(queue.remove().unwrap(), "c");
        assert!(queue.is_empty());
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut queue = FrontierQueue::new();
        queue.add(1).unwrap();
        let err = queue.add(1).unwrap_err();
        assert!(matches!(err, WordWebError::DuplicateInsertion { .. }));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_from_items_rejects_duplicates() {
        assert!(FrontierQueue::from_items([3, 4, 3]).is_err());
    }

    #[test]
    fn test_removed_item_no_longer_contained() {
        let mut queue = FrontierQueue::from_items([7, 8]).unwrap();
        assert!(queue.contains(&7));
        queue.remove().unwrap();
        assert!(!queue.contains(&7));
        assert!(queue.contains(&8));
        // Re-adding after removal is allowed
        queue.add(7).unwrap();
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: FrontierQueue<u32> = FrontierQueue::new();
        assert!(matches!(queue.remove(), Err(WordWebError::EmptyFrontier)));
        assert!(matches!(queue.peek(), Err(WordWebError::EmptyFrontier)));
    }

    #[test]
    fn test_peek_does_not_remove() {
        let queue = FrontierQueue::from_items(["x", "y"]).unwrap();
        assert_eq!(*queue.peek().unwrap(), "x");
        assert_eq!(queue.len(), 2);
        assert!(queue.contains(&"x"));
    }

    #[test]
    fn test_len_tracks_adds_minus_removes() {
        let mut queue = FrontierQueue::new();
        for i in 0..10 {
            queue.add(i).unwrap();
        }
        for _ in 0..4 {
            queue.remove().unwrap();
        }
        assert_eq!(queue.len(), 6);
        for i in 4..10 {
            assert!(queue.contains(&i));
        }
    }
}
