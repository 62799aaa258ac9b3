//! LRU Tracker Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use std::collections::HashMap;
use std::mem;

// == Node ==
/// A slot in the recency list. Vacant slots hold an empty key and sit on the free list.
#[derive(Debug, Default)]
struct Node {
    key: Vec<u8>,
    prev: Option<usize>,
    next: Option<usize>,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in a doubly-linked list threaded through a slab, with a key→slot
/// index, so touch, remove and eviction are all O(1):
/// - Front (head) = Least recently used
/// - Back (tail) = Most recently used
#[derive(Debug, Default)]
pub struct LruTracker {
    /// Slab of list nodes
    nodes: Vec<Node>,
    /// Vacant slab slots available for reuse
    free: Vec<usize>,
    /// Key to slab slot
    index: HashMap<Vec<u8>, usize>,
    /// Least recently used slot
    head: Option<usize>,
    /// Most recently used slot
    tail: Option<usize>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            index: HashMap::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to back).
    ///
    /// If key exists, it is unlinked and relinked at the back.
    /// If key is new, it is appended at the back.
    pub fn touch(&mut self, key: &[u8]) {
        if let Some(&idx) = self.index.get(key) {
            if self.tail != Some(idx) {
                self.unlink(idx);
                self.push_back(idx);
            }
            return;
        }

        let node = Node {
            key: key.to_vec(),
            prev: None,
            next: None,
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.index.insert(key.to_vec(), idx);
        self.push_back(idx);
    }

    // == Remove ==
    /// Removes a key from the tracker, keeping the relative order of the rest.
    ///
    /// Returns false if the key was not tracked.
    pub fn remove(&mut self, key: &[u8]) -> bool {
        match self.index.remove(key) {
            Some(idx) => {
                self.unlink(idx);
                self.release(idx);
                true
            }
            None => false,
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<Vec<u8>> {
        let idx = self.head?;
        self.unlink(idx);
        let key = self.release(idx);
        self.index.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&[u8]> {
        self.head.map(|idx| self.nodes[idx].key.as_slice())
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &[u8]) -> bool {
        self.index.contains_key(key)
    }

    // == Iter ==
    /// Iterates keys from least to most recently used.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            tracker: self,
            cursor: self.head,
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = {
            let node = &self.nodes[idx];
            (node.prev, node.next)
        };

        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        let node = &mut self.nodes[idx];
        node.prev = None;
        node.next = None;
    }

    fn push_back(&mut self, idx: usize) {
        let old_tail = self.tail;
        {
            let node = &mut self.nodes[idx];
            node.prev = old_tail;
            node.next = None;
        }

        match old_tail {
            Some(t) => self.nodes[t].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
    }

    /// Vacates a slot that is already unlinked and hands back its key.
    fn release(&mut self, idx: usize) -> Vec<u8> {
        self.free.push(idx);
        mem::take(&mut self.nodes[idx].key)
    }
}

// == Iterator ==
/// Iterator over tracked keys, least recently used first.
pub struct Iter<'a> {
    tracker: &'a LruTracker,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = &self.tracker.nodes[idx];
        self.cursor = node.next;
        Some(node.key.as_slice())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn order(lru: &LruTracker) -> Vec<&[u8]> {
        lru.iter().collect()
    }

    #[test]
    fn test_lru_new() {
        let lru = LruTracker::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.peek_oldest(), None);
    }

    #[test]
    fn test_lru_touch_new_key() {
        let mut lru = LruTracker::new();

        lru.touch(b"key1");
        lru.touch(b"key2");
        lru.touch(b"key3");

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.peek_oldest(), Some(&b"key1"[..]));
    }

    #[test]
    fn test_lru_touch_existing_key() {
        let mut lru = LruTracker::new();

        lru.touch(b"key1");
        lru.touch(b"key2");
        lru.touch(b"key3");

        // Touch key1 again - should move to back
        lru.touch(b"key1");

        assert_eq!(lru.len(), 3);
        assert_eq!(lru.peek_oldest(), Some(&b"key2"[..]));
        assert_eq!(
            order(&lru),
            vec![b"key2".as_slice(), b"key3".as_slice(), b"key1".as_slice()]
        );
    }

    #[test]
    fn test_lru_evict_oldest() {
        let mut lru = LruTracker::new();

        lru.touch(b"key1");
        lru.touch(b"key2");
        lru.touch(b"key3");

        assert_eq!(lru.evict_oldest(), Some(b"key1".to_vec()));
        assert_eq!(lru.len(), 2);
        assert!(!lru.contains(b"key1"));

        assert_eq!(lru.evict_oldest(), Some(b"key2".to_vec()));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_evict_empty() {
        let mut lru = LruTracker::new();
        assert_eq!(lru.evict_oldest(), None);
    }

    #[test]
    fn test_lru_remove_middle_preserves_order() {
        let mut lru = LruTracker::new();

        lru.touch(b"a");
        lru.touch(b"b");
        lru.touch(b"c");
        lru.touch(b"d");

        assert!(lru.remove(b"b"));

        assert_eq!(lru.len(), 3);
        assert!(!lru.contains(b"b"));
        assert_eq!(order(&lru), vec![b"a".as_slice(), b"c".as_slice(), b"d".as_slice()]);
    }

    #[test]
    fn test_lru_remove_head_and_tail() {
        let mut lru = LruTracker::new();

        lru.touch(b"a");
        lru.touch(b"b");
        lru.touch(b"c");

        assert!(lru.remove(b"a"));
        assert!(lru.remove(b"c"));

        assert_eq!(order(&lru), vec![b"b".as_slice()]);
        assert_eq!(lru.peek_oldest(), Some(&b"b"[..]));
    }

    #[test]
    fn test_lru_remove_nonexistent_key() {
        let mut lru = LruTracker::new();

        lru.touch(b"key1");
        lru.touch(b"key2");

        assert!(!lru.remove(b"nonexistent"));

        assert_eq!(lru.len(), 2);
        assert!(lru.contains(b"key1"));
        assert!(lru.contains(b"key2"));
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruTracker::new();

        lru.touch(b"a");
        lru.touch(b"b");
        lru.touch(b"c");

        // Order after touches, oldest first: a, c, b
        lru.touch(b"a");
        lru.touch(b"c");
        lru.touch(b"b");

        assert_eq!(lru.evict_oldest(), Some(b"a".to_vec()));
        assert_eq!(lru.evict_oldest(), Some(b"c".to_vec()));
        assert_eq!(lru.evict_oldest(), Some(b"b".to_vec()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_touch_same_key_multiple_times() {
        let mut lru = LruTracker::new();

        lru.touch(b"key1");
        lru.touch(b"key1");
        lru.touch(b"key1");

        assert_eq!(lru.len(), 1);
        assert_eq!(lru.evict_oldest(), Some(b"key1".to_vec()));
        assert!(lru.is_empty());
    }

    #[test]
    fn test_lru_reuses_vacant_slots() {
        let mut lru = LruTracker::with_capacity(2);

        lru.touch(b"a");
        lru.touch(b"b");
        lru.evict_oldest();
        lru.remove(b"b");
        lru.touch(b"c");
        lru.touch(b"d");

        assert_eq!(lru.nodes.len(), 2);
        assert_eq!(order(&lru), vec![b"c".as_slice(), b"d".as_slice()]);
    }

    #[test]
    fn test_lru_empty_key_is_tracked() {
        let mut lru = LruTracker::new();

        lru.touch(b"");
        assert!(lru.contains(b""));
        assert_eq!(lru.evict_oldest(), Some(Vec::new()));
        assert!(lru.is_empty());
    }
}
