//! Single-value observable store.
//!
//! Holds the current value, replays it to every new subscriber and pushes each
//! replacement to all live subscribers in subscription order.
//!
//! Every value carries a version. A notification whose version is no longer
//! current is dropped: the newer `set` already reaches every listener, so the
//! last value a listener sees always equals `get()`.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::filter::Filter;


type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct StoreInner<T> {
    value: T,
    version: u64,
    next_id: u64,
    listeners: Vec<(u64, Listener<T>)>,
}

/// Shared handle to a single observable value. Clones observe the same value.
pub struct StateStore<T> {
    inner: Arc<Mutex<StoreInner<T>>>,
}

impl<T> Clone for StateStore<T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T: Clone + Send + 'static> StateStore<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                value: initial,
                version: 0,
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.lock().value.clone()
    }

    /// Replaces the value and notifies every live subscriber with it.
    pub fn set(&self, value: T) {
        let (version, value, listeners) = {
            let mut inner = self.inner.lock();
            inner.value = value;
            inner.version += 1;
            let listeners: Vec<Listener<T>> = inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (inner.version, inner.value.clone(), listeners)
        };
        // lock released: listeners may read or set the store
        for listener in listeners {
            if !self.is_current(version) {
                // a nested set replaced the value and notified everyone
                break;
            }
            listener(&value);
        }
    }

    fn is_current(&self, version: u64) -> bool {
        self.inner.lock().version == version
    }

    /// Registers `listener`, calls it right away with the current value and
    /// then on every `set` until the returned [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let listener: Listener<T> = Arc::new(listener);
        let (id, version, current) = {
            let mut inner = self.inner.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.version, inner.value.clone())
        };
        // a set that landed since registration already delivered a newer value
        if self.is_current(version) {
            listener(&current);
        }

        let store: Weak<Mutex<StoreInner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(store) = store.upgrade() {
                    store.lock().listeners.retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().listeners.len()
    }
}

/// Unsubscribe token returned by [`StateStore::subscribe`]. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }

    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("active", &self.is_active()).finish()
    }
}


/// Holds the authoritative filter of one search session.
#[derive(Clone)]
pub struct FilterStore {
    store: StateStore<Filter>,
}

impl FilterStore {
    pub fn new(initial: Filter) -> Self {
        Self { store: StateStore::new(initial) }
    }

    pub fn filter(&self) -> Filter {
        self.store.get()
    }

    /// Replaces the whole filter. There is no partial update.
    pub fn set_filter(&self, filter: Filter) {
        tracing::debug!("filter = {filter:?}");
        self.store.set(filter);
    }

    pub fn subscribe(&self, listener: impl Fn(&Filter) + Send + Sync + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new(Filter::default())
    }
}
