use std::collections::{HashMap, VecDeque};

use crate::domain::CacheKey;

pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Bounded reply cache with strict FIFO eviction. Lookups never change the
/// eviction order. Not synchronized; callers share it behind a lock.
#[derive(Debug)]
pub struct ResponseCache {
    capacity: usize,
    entries: HashMap<CacheKey, String>,
    insertion_order: VecDeque<CacheKey>,
}

impl ResponseCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            insertion_order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn get(&self, message: &str) -> Option<&str> {
        self.get_by_key(&CacheKey::from_message(message))
    }

    pub fn get_by_key(&self, key: &CacheKey) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn put(&mut self, message: &str, reply: String) {
        self.put_by_key(CacheKey::from_message(message), reply);
    }

    /// Inserts at the newest position, evicting the oldest entry first when full.
    /// An existing key keeps its position and only has its value replaced.
    pub fn put_by_key(&mut self, key: CacheKey, reply: String) {
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = reply;
            return;
        }

        if self.entries.len() >= self.capacity {
            if let Some(oldest) = self.insertion_order.pop_front() {
                self.entries.remove(&oldest);
            }
        }

        self.insertion_order.push_back(key.clone());
        self.entries.insert(key, reply);
    }

    pub fn contains(&self, message: &str) -> bool {
        self.entries.contains_key(&CacheKey::from_message(message))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
