//! Bounded memo of contact guesses, keyed by lowercased place name.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use super::ContactGuess;

pub struct GuessCache {
    entries: Mutex<LruCache<String, ContactGuess>>,
}

impl GuessCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn get(&self, key: &str) -> Option<ContactGuess> {
        self.entries.lock().get(key).cloned()
    }

    pub fn insert(&self, key: String, guess: ContactGuess) {
        self.entries.lock().put(key, guess);
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
