//! LRU List Module
//!
//! Implements Least Recently Used tracking for cache eviction.
//!
//! Keys live in a doubly-linked list laid out over a slab of nodes:
//! - Front = Most recently used
//! - Back = Least recently used
//!
//! Entries hold their node index, so move-to-front on a hit and
//! evict-from-back are both O(1). Freed slots are reused.

use std::mem;

use crate::cache::CacheKey;

// == Node ==
#[derive(Debug)]
struct Node {
    key: CacheKey,
    /// Neighbor toward the front (more recently used)
    prev: Option<usize>,
    /// Neighbor toward the back (less recently used)
    next: Option<usize>,
}

// == LRU List ==
/// Doubly-linked access-order list of cache keys.
#[derive(Debug, Default)]
pub struct LruList {
    nodes: Vec<Node>,
    /// Recycled slab slots
    free: Vec<usize>,
    /// Most recently used
    head: Option<usize>,
    /// Least recently used
    tail: Option<usize>,
    len: usize,
}

impl LruList {
    // == Constructor ==
    /// Creates a new empty LRU list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Front ==
    /// Inserts a key at the most-recently-used position.
    ///
    /// Returns the node index the caller must keep to touch or remove the
    /// key later.
    pub fn push_front(&mut self, key: CacheKey) -> usize {
        let node = Node {
            key,
            prev: None,
            next: self.head,
        };

        let idx = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        match self.head {
            Some(old_head) => self.nodes[old_head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        idx
    }

    // == Touch ==
    /// Marks a node as most recently used (moves it to the front).
    pub fn touch(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);

        let old_head = self.head;
        self.nodes[idx].prev = None;
        self.nodes[idx].next = old_head;
        if let Some(old_head) = old_head {
            self.nodes[old_head].prev = Some(idx);
        } else {
            self.tail = Some(idx);
        }
        self.head = Some(idx);
    }

    // == Remove ==
    /// Removes a node and returns its key. The slot is recycled.
    pub fn remove(&mut self, idx: usize) -> CacheKey {
        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;
        mem::take(&mut self.nodes[idx].key)
    }

    // == Pop Back ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<CacheKey> {
        self.tail.map(|idx| self.remove(idx))
    }

    // == Peek ==
    /// The least recently used key, if any.
    pub fn back(&self) -> Option<&CacheKey> {
        self.tail.map(|idx| &self.nodes[idx].key)
    }

    /// The most recently used key, if any.
    pub fn front(&self) -> Option<&CacheKey> {
        self.head.map(|idx| &self.nodes[idx].key)
    }

    // == Keys ==
    /// All keys ordered oldest (least recently used) first.
    pub fn keys_oldest_first(&self) -> Vec<CacheKey> {
        let mut keys = Vec::with_capacity(self.len);
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            keys.push(self.nodes[idx].key.clone());
            cursor = self.nodes[idx].prev;
        }
        keys
    }

    // == Clear ==
    /// Removes every node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Detaches a node from its neighbors, fixing head/tail.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> CacheKey {
        CacheKey::from(s)
    }

    #[test]
    fn test_lru_new() {
        let lru = LruList::new();
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.back(), None);
        assert_eq!(lru.front(), None);
    }

    #[test]
    fn test_lru_push_front_order() {
        let mut lru = LruList::new();

        lru.push_front(key("key1"));
        lru.push_front(key("key2"));
        lru.push_front(key("key3"));

        assert_eq!(lru.len(), 3);
        // key1 is oldest (added first)
        assert_eq!(lru.back(), Some(&key("key1")));
        assert_eq!(lru.front(), Some(&key("key3")));
    }

    #[test]
    fn test_lru_touch_moves_to_front() {
        let mut lru = LruList::new();

        let a = lru.push_front(key("a"));
        lru.push_front(key("b"));
        lru.push_front(key("c"));

        // 'a' is oldest
        assert_eq!(lru.back(), Some(&key("a")));

        lru.touch(a);

        // Now 'b' is oldest and 'a' is newest
        assert_eq!(lru.back(), Some(&key("b")));
        assert_eq!(lru.front(), Some(&key("a")));
        assert_eq!(lru.len(), 3);
    }

    #[test]
    fn test_lru_touch_front_is_noop() {
        let mut lru = LruList::new();

        lru.push_front(key("a"));
        let b = lru.push_front(key("b"));

        lru.touch(b);

        assert_eq!(lru.front(), Some(&key("b")));
        assert_eq!(lru.back(), Some(&key("a")));
    }

    #[test]
    fn test_lru_touch_tail_updates_tail() {
        let mut lru = LruList::new();

        let a = lru.push_front(key("a"));
        lru.push_front(key("b"));

        lru.touch(a);

        assert_eq!(lru.back(), Some(&key("b")));
        assert_eq!(lru.pop_back(), Some(key("b")));
        assert_eq!(lru.pop_back(), Some(key("a")));
        assert_eq!(lru.pop_back(), None);
    }

    #[test]
    fn test_lru_pop_back_eviction_order() {
        let mut lru = LruList::new();

        lru.push_front(key("key1"));
        lru.push_front(key("key2"));
        lru.push_front(key("key3"));

        assert_eq!(lru.pop_back(), Some(key("key1")));
        assert_eq!(lru.pop_back(), Some(key("key2")));
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn test_lru_pop_back_empty() {
        let mut lru = LruList::new();
        assert_eq!(lru.pop_back(), None);
    }

    #[test]
    fn test_lru_remove_middle() {
        let mut lru = LruList::new();

        lru.push_front(key("a"));
        let b = lru.push_front(key("b"));
        lru.push_front(key("c"));

        let removed = lru.remove(b);
        assert_eq!(removed, key("b"));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.pop_back(), Some(key("a")));
        assert_eq!(lru.pop_back(), Some(key("c")));
    }

    #[test]
    fn test_lru_slot_reuse() {
        let mut lru = LruList::new();

        let a = lru.push_front(key("a"));
        lru.remove(a);
        let b = lru.push_front(key("b"));

        // The freed slot gets recycled
        assert_eq!(a, b);
        assert_eq!(lru.len(), 1);
        assert_eq!(lru.front(), Some(&key("b")));
    }

    #[test]
    fn test_lru_order_after_multiple_touches() {
        let mut lru = LruList::new();

        let a = lru.push_front(key("a"));
        let b = lru.push_front(key("b"));
        let c = lru.push_front(key("c"));

        // Touch order a, c, b leaves eviction order a, c, b
        lru.touch(a);
        lru.touch(c);
        lru.touch(b);

        assert_eq!(lru.pop_back(), Some(key("a")));
        assert_eq!(lru.pop_back(), Some(key("c")));
        assert_eq!(lru.pop_back(), Some(key("b")));
    }

    #[test]
    fn test_lru_keys_oldest_first() {
        let mut lru = LruList::new();

        let a = lru.push_front(key("a"));
        lru.push_front(key("b"));
        lru.push_front(key("c"));
        lru.touch(a);

        assert_eq!(
            lru.keys_oldest_first(),
            vec![key("b"), key("c"), key("a")]
        );
    }

    #[test]
    fn test_lru_clear() {
        let mut lru = LruList::new();

        lru.push_front(key("a"));
        lru.push_front(key("b"));
        lru.clear();

        assert!(lru.is_empty());
        assert_eq!(lru.back(), None);
        assert_eq!(lru.pop_back(), None);
    }
}
