//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use theme_switcher::{MemoryStore, PreferenceStore, StorageError};

/// Store that can be told to fail reads and/or writes.
/// Successful calls fall through to an inner `MemoryStore`.
#[derive(Clone, Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: bool,
    pub fail_writes: bool,
    pub writes: Rc<Cell<usize>>,
}

impl FlakyStore {
    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl PreferenceStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("storage disabled".into()));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        if self.fail_writes {
            return Err(StorageError::Write("quota exceeded".into()));
        }
        self.inner.set(key, value)
    }
}

/// Store seeded with a single `theme` entry
pub fn seeded(value: &str) -> MemoryStore {
    let store = MemoryStore::new();
    store.insert("theme", value);
    store
}
