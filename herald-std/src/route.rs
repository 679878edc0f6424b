//! Type-erased invocation targets stored in the registry.
//!
//! A route remembers *how* to reach a listener for one triggering kind:
//! directly through its own capability, or through an ancestor capability
//! after upcasting. Routes hold weak references only; the dispatcher never
//! keeps a listener alive.

use herald_core::{Derives, Event, Listen};
use std::{
    any::type_name,
    marker::PhantomData,
    sync::{Arc, Weak},
};

/// A shared, type-erased route for events of kind `E`.
pub type Route<E> = Arc<dyn Deliver<E>>;

/// Object-safe delivery of an event of kind `E` to one listener.
pub trait Deliver<E>: Send + Sync + 'static {
    /// Invoke the listener. Returns `false` if it no longer exists.
    fn deliver(&self, event: &E) -> bool;

    /// Type name of the listener, for diagnostics.
    fn listener_name(&self) -> &'static str;
}

/// Delivers events of kind `E` through the listener's `Listen<E>` capability.
pub struct DirectRoute<L> {
    listener: Weak<L>,
}

impl<L> DirectRoute<L> {
    /// Create a route to `listener` without taking ownership of it.
    pub fn new(listener: &Arc<L>) -> Self {
        Self {
            listener: Arc::downgrade(listener),
        }
    }
}

impl<E, L> Deliver<E> for DirectRoute<L>
where
    E: Event,
    L: Listen<E>,
{
    fn deliver(&self, event: &E) -> bool {
        let Some(listener) = self.listener.upgrade() else {
            return false;
        };
        listener.handle(event);
        true
    }

    fn listener_name(&self) -> &'static str {
        type_name::<L>()
    }
}

/// Delivers events of a derived kind through the listener's `Listen<B>`
/// capability, viewing each event as its ancestor `B`.
pub struct ConnectedRoute<L, B> {
    listener: Weak<L>,
    _base: PhantomData<fn(B)>,
}

impl<L, B> ConnectedRoute<L, B> {
    /// Create a route to `listener` without taking ownership of it.
    pub fn new(listener: &Arc<L>) -> Self {
        Self {
            listener: Arc::downgrade(listener),
            _base: PhantomData,
        }
    }
}

impl<D, B, L> Deliver<D> for ConnectedRoute<L, B>
where
    D: Event + Derives<B>,
    B: Event,
    L: Listen<B>,
{
    fn deliver(&self, event: &D) -> bool {
        let Some(listener) = self.listener.upgrade() else {
            return false;
        };
        listener.handle(&<D as Derives<B>>::upcast(event));
        true
    }

    fn listener_name(&self) -> &'static str {
        type_name::<L>()
    }
}
