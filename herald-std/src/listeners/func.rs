//! Closure-backed listeners.

use herald_core::{Event, Listen};

/// A listener backed by a closure.
///
/// # Example
/// ```ignore
/// let printer = Arc::new(from_fn(|event: &Connected| println!("{}", event.peer)));
/// dispatcher.add_listener::<Connected>(&printer);
/// ```
#[derive(Clone)]
pub struct FnListener<F> {
    f: F,
}

/// Wrap a closure as a listener.
pub fn from_fn<F>(f: F) -> FnListener<F> {
    FnListener { f }
}

impl<E, F> Listen<E> for FnListener<F>
where
    E: Event,
    F: Fn(&E) + Send + Sync + 'static,
{
    fn handle(&self, event: &E) {
        (self.f)(event)
    }
}
