use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use thiserror::Error;

/// A mutation could not run because the store is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A writer panicked while holding the lock.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Keyed record storage owned by one service.
///
/// Every mutating call runs under a single write lock, so read-modify-write
/// sequences (insert-if-absent, in-place update) cannot lose updates.
/// Mutations report a poisoned store as an error; reads degrade to empty.
pub trait RecordStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> Option<V>;

    /// Insert `value` unless `key` is taken. Returns whether it was inserted.
    fn insert(&self, key: K, value: V) -> Result<bool, StoreError>;

    fn list(&self) -> Vec<V>;

    /// Mutate the record at `key` in place. Returns `false` when absent.
    fn update(&self, key: &K, f: &mut dyn FnMut(&mut V)) -> Result<bool, StoreError>;

    /// Mutate the record at `key`, storing `initial` first when absent.
    fn update_or_insert(&self, key: K, initial: V, f: &mut dyn FnMut(&mut V)) -> Result<(), StoreError>;
}

impl<K, V, S> RecordStore<K, V> for Arc<S>
where
    S: RecordStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> Option<V> {
        (**self).get(key)
    }

    fn insert(&self, key: K, value: V) -> Result<bool, StoreError> {
        (**self).insert(key, value)
    }

    fn list(&self) -> Vec<V> {
        (**self).list()
    }

    fn update(&self, key: &K, f: &mut dyn FnMut(&mut V)) -> Result<bool, StoreError> {
        (**self).update(key, f)
    }

    fn update_or_insert(&self, key: K, initial: V, f: &mut dyn FnMut(&mut V)) -> Result<(), StoreError> {
        (**self).update_or_insert(key, initial, f)
    }
}

/// Unpersisted map-backed store. Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecordStore<K, V> for InMemoryStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().ok()?;
        map.get(key).cloned()
    }

    fn insert(&self, key: K, value: V) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        if map.contains_key(&key) {
            return Ok(false);
        }
        map.insert(key, value);
        Ok(true)
    }

    fn list(&self) -> Vec<V> {
        match self.inner.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn update(&self, key: &K, f: &mut dyn FnMut(&mut V)) -> Result<bool, StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        match map.get_mut(key) {
            Some(v) => {
                f(v);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn update_or_insert(&self, key: K, initial: V, f: &mut dyn FnMut(&mut V)) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        f(map.entry(key).or_insert(initial));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_refuses_taken_keys() {
        let store: InMemoryStore<String, i32> = InMemoryStore::new();
        assert_eq!(store.insert("a".to_string(), 1), Ok(true));
        assert_eq!(store.insert("a".to_string(), 2), Ok(false));
        assert_eq!(store.get(&"a".to_string()), Some(1));
    }

    #[test]
    fn update_only_touches_existing_records() {
        let store: InMemoryStore<String, i32> = InMemoryStore::new();
        assert_eq!(store.update(&"missing".to_string(), &mut |v| *v += 1), Ok(false));
        assert!(store.list().is_empty());

        store.insert("a".to_string(), 1).unwrap();
        assert_eq!(store.update(&"a".to_string(), &mut |v| *v = 5), Ok(true));
        assert_eq!(store.get(&"a".to_string()), Some(5));
    }

    #[test]
    fn update_or_insert_seeds_missing_keys() {
        let store: InMemoryStore<String, Vec<&'static str>> = InMemoryStore::new();
        store.update_or_insert("p1".to_string(), Vec::new(), &mut |v| v.push("first")).unwrap();
        store.update_or_insert("p1".to_string(), Vec::new(), &mut |v| v.push("second")).unwrap();

        assert_eq!(store.get(&"p1".to_string()), Some(vec!["first", "second"]));
    }

    #[test]
    fn concurrent_appends_are_not_lost() {
        let store: Arc<InMemoryStore<u8, Vec<usize>>> = Arc::new(InMemoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..100 {
                        store.update_or_insert(0, Vec::new(), &mut |v| v.push(t * 100 + i)).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(store.get(&0).unwrap().len(), 800);
    }

    #[test]
    fn poisoned_store_reports_mutations_as_failed() {
        let store: Arc<InMemoryStore<String, i32>> = Arc::new(InMemoryStore::new());
        store.insert("a".to_string(), 1).unwrap();

        let poisoner = store.clone();
        let result = std::thread::spawn(move || {
            let _ = poisoner.update(&"a".to_string(), &mut |_| panic!("writer died"));
        })
        .join();
        assert!(result.is_err());

        assert_eq!(store.insert("b".to_string(), 2), Err(StoreError::Poisoned));
        assert_eq!(store.update(&"a".to_string(), &mut |v| *v = 9), Err(StoreError::Poisoned));
        assert_eq!(
            store.update_or_insert("c".to_string(), 0, &mut |v| *v += 1),
            Err(StoreError::Poisoned)
        );
        assert_eq!(store.get(&"a".to_string()), None);
        assert!(store.list().is_empty());
    }
}
