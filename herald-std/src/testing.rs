//! Testing utilities for Herald.
//!
//! This module provides listeners that make routing observable in tests.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered log of handler invocations
//! - [`RecordingListener`]: A listener that records every event it receives
//! - [`CountingListener`]: A listener that counts invocations across all kinds
//! - [`LoggingListener`]: A named listener that writes `name:Kind` to a [`CallLog`]

use herald_core::{Event, Listen};
use parking_lot::Mutex;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Call Log
// ============================================================================

/// A shared, ordered log of invocations.
///
/// Clones share the same log, so one log can be handed to several listeners
/// to assert on their relative order.
#[derive(Clone, Debug, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    /// Get a copy of all entries in order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Clear all entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

// ============================================================================
// Recording Listener
// ============================================================================

/// A listener that records all events it receives.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Arc::new(RecordingListener::<Connected>::new());
/// dispatcher.add_listener::<Connected>(&recorder);
///
/// dispatcher.post(&event);
/// assert_eq!(recorder.events(), vec![event]);
/// ```
pub struct RecordingListener<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone> RecordingListener<E> {
    /// Create a new recording listener.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<E> {
        self.events.lock().clone()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl<E: Clone> Default for RecordingListener<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for RecordingListener<E> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
        }
    }
}

impl<E: Event> Listen<E> for RecordingListener<E> {
    fn handle(&self, event: &E) {
        self.events.lock().push(event.clone());
    }
}

// ============================================================================
// Counting Listener
// ============================================================================

/// A listener that counts invocations for any kind.
#[derive(Clone, Debug, Default)]
pub struct CountingListener {
    count: Arc<AtomicUsize>,
}

impl CountingListener {
    /// Create a new counting listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<E: Event> Listen<E> for CountingListener {
    fn handle(&self, _event: &E) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Logging Listener
// ============================================================================

/// A named listener that logs `name:Kind` for every kind it receives.
///
/// The logged kind is the kind of the handler that ran, so a connected
/// delivery shows up under the base kind.
#[derive(Clone, Debug)]
pub struct LoggingListener {
    name: &'static str,
    log: CallLog,
}

impl LoggingListener {
    /// Create a listener writing to `log` under `name`.
    pub fn new(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            log: log.clone(),
        }
    }
}

impl<E: Event> Listen<E> for LoggingListener {
    fn handle(&self, _event: &E) {
        self.log.record(format!("{}:{}", self.name, E::NAME));
    }
}
