//! # Listener Capabilities
//!
//! A capability is the promise "this type can handle events of kind `E`".
//! Listener types implement [`Listen<E>`] once per kind they support, so the
//! full set of supported kinds is simply the set of implemented capabilities.
//!
//! Registration is gated on these impls: a dispatcher refuses, at compile
//! time, to register a listener for a kind it has no capability for.

use crate::event::Event;

/// The capability to handle events of kind `E`.
///
/// Handlers run synchronously and to completion. They receive the event by
/// shared reference and cannot fail; a listener that needs to report errors
/// does so through its own state.
///
/// # Example
///
/// ```rust,ignore
/// struct Audit;
///
/// impl Listen<Connected> for Audit {
///     fn handle(&self, event: &Connected) {
///         tracing::info!(peer = %event.peer, "connected");
///     }
/// }
///
/// impl Listen<Disconnected> for Audit {
///     fn handle(&self, event: &Disconnected) {
///         tracing::info!(peer = %event.peer, "disconnected");
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot listen for `{E}` events",
    label = "missing `Listen<{E}>` implementation",
    note = "Implement `Listen<{E}>` for `{Self}` to register it for `{E}`."
)]
pub trait Listen<E: Event>: Send + Sync + 'static {
    /// Called once per matching post.
    fn handle(&self, event: &E);
}
