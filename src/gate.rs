//! Admission gate: at most one in-flight generation per client identifier.
//!
//! The check-and-insert runs under a single mutex so two near-simultaneous
//! requests from the same address cannot both pass. The returned guard
//! removes the entry on drop, which covers the success path, the provider
//! error path, and an unwinding handler alike.

use parking_lot::Mutex;
use std::collections::HashSet;

#[derive(Default)]
pub struct PendingClients {
    inner: Mutex<HashSet<String>>,
}

impl PendingClients {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claim a slot for `id`. `None` means a generation for this
    /// identifier is already running and the caller should answer "busy".
    pub fn try_enter(&self, id: &str) -> Option<PendingGuard<'_>> {
        let mut set = self.inner.lock();
        if set.insert(id.to_string()) {
            Some(PendingGuard {
                set: self,
                id: id.to_string(),
            })
        } else {
            None
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.lock().contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    fn leave(&self, id: &str) {
        self.inner.lock().remove(id);
    }
}

/// Held for the duration of one generation; releases the slot when dropped.
pub struct PendingGuard<'a> {
    set: &'a PendingClients,
    id: String,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.set.leave(&self.id);
    }
}
