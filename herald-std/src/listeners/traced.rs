//! Span-instrumented listeners.

use herald_core::{Event, Listen};

/// A listener wrapper that runs every handler inside a `tracing` span.
///
/// Without the `tracing` feature the wrapper is a plain pass-through.
pub struct Traced<L> {
    inner: L,
    name: &'static str,
}

impl<L> Traced<L> {
    /// Wrap `inner`, naming it `name` in spans.
    pub const fn new(inner: L, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped listener.
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// The span name of this listener.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<L: Clone> Clone for Traced<L> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<E, L> Listen<E> for Traced<L>
where
    E: Event,
    L: Listen<E>,
{
    #[cfg(feature = "tracing")]
    fn handle(&self, event: &E) {
        let span = tracing::info_span!("listener", listener = %self.name, kind = E::NAME);
        let _entered = span.enter();
        self.inner.handle(event);
    }

    #[cfg(not(feature = "tracing"))]
    fn handle(&self, event: &E) {
        self.inner.handle(event);
    }
}
