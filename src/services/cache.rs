// src/services/cache.rs
// DOCUMENTATION: Observable in-memory collection cache
// PURPOSE: Hold the current snapshot of a remote collection and push every change to subscribers

use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// One published state of a collection
/// DOCUMENTATION: `version` starts at 0 (empty, never written) and grows by one
/// on every write, so consumers can tell "no change" from "same contents".
#[derive(Debug)]
pub struct Snapshot<T> {
    pub version: u64,
    pub items: Arc<Vec<T>>,
}

impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Snapshot {
            version: self.version,
            items: Arc::clone(&self.items),
        }
    }
}

/// Reactive cache for one collection
/// DOCUMENTATION: Thread-safe; writes are serialized by the watch channel.
/// Writes never fail, with or without subscribers.
pub struct Collection<T> {
    sender: watch::Sender<Snapshot<T>>,
}

impl<T> Default for Collection<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Collection<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create an empty collection
    pub fn new() -> Self {
        let (sender, _) = watch::channel(Snapshot {
            version: 0,
            items: Arc::new(Vec::new()),
        });
        Self { sender }
    }

    /// Copy of the current items
    pub fn snapshot(&self) -> Vec<T> {
        self.sender.borrow().items.as_ref().clone()
    }

    /// Current version counter
    pub fn version(&self) -> u64 {
        self.sender.borrow().version
    }

    pub fn is_empty(&self) -> bool {
        self.sender.borrow().items.is_empty()
    }

    /// Replace the whole collection
    pub fn replace(&self, items: Vec<T>) {
        let count = items.len();
        self.sender.send_modify(|snapshot| {
            snapshot.version += 1;
            snapshot.items = Arc::new(items);
        });
        log::debug!("Collection replaced: {} items (v{})", count, self.version());
    }

    /// Apply `change` to a copy of the current items and publish the result
    pub fn modify<F>(&self, change: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        self.sender.send_modify(|snapshot| {
            let mut items = snapshot.items.as_ref().clone();
            change(&mut items);
            snapshot.version += 1;
            snapshot.items = Arc::new(items);
        });
        log::debug!("Collection modified (v{})", self.version());
    }

    /// Receiver that observes every published snapshot
    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.sender.subscribe()
    }

    /// Stream yielding the current snapshot first, then each later one
    pub fn stream(&self) -> WatchStream<Snapshot<T>> {
        WatchStream::new(self.subscribe())
    }
}
