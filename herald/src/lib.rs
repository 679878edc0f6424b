//! # herald - Typed In-Process Event Dispatcher
//!
//! `herald` routes strongly-typed events to listeners that declared, at
//! compile time, which event kinds they can handle. A listener can also opt
//! in to receiving a *derived* kind through the handler it wrote for an
//! ancestor kind.
//!
//! ## Quick Start
//!
//! ```rust
//! use herald::prelude::*;
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug, Event)]
//! struct Opened { path: String }
//!
//! #[derive(Clone, Debug, Event)]
//! #[event(extends(Opened))]
//! struct Reopened {
//!     #[event(parent)]
//!     opened: Opened,
//!     attempt: u32,
//! }
//!
//! struct Audit;
//!
//! impl Listen<Opened> for Audit {
//!     fn handle(&self, event: &Opened) {
//!         assert_eq!(event.path, "/srv/data");
//!     }
//! }
//!
//! let dispatcher = Dispatcher::new(Hierarchy::of::<kinds![Opened, Reopened]>()?);
//! let audit = Arc::new(Audit);
//! dispatcher.add_listener::<Opened>(&audit);
//! dispatcher.connect_handler::<Reopened, Opened>(&audit)?;
//!
//! let opened = Opened { path: "/srv/data".to_string() };
//! assert_eq!(dispatcher.post(&opened).direct, 1);
//!
//! let reopened = Reopened { opened, attempt: 2 };
//! assert_eq!(dispatcher.post(&reopened).connected, 1);
//! # Ok::<(), herald::HeraldError>(())
//! ```
//!
//! ## Definition-Time Rejections
//!
//! Registering a listener for a kind it has no capability for does not
//! compile:
//!
//! ```compile_fail
//! use herald::prelude::*;
//! use std::sync::Arc;
//!
//! #[derive(Clone, Event)]
//! struct Ping;
//!
//! #[derive(Clone, Event)]
//! struct Pong;
//!
//! struct PingOnly;
//!
//! impl Listen<Ping> for PingOnly {
//!     fn handle(&self, _event: &Ping) {}
//! }
//!
//! Dispatcher::default().add_listener::<Pong>(&Arc::new(PingOnly));
//! ```
//!
//! Neither does connecting a kind to itself:
//!
//! ```compile_fail
//! use herald::prelude::*;
//! use std::sync::Arc;
//!
//! #[derive(Clone, Event)]
//! struct Ping;
//!
//! struct PingOnly;
//!
//! impl Listen<Ping> for PingOnly {
//!     fn handle(&self, _event: &Ping) {}
//! }
//!
//! Dispatcher::default().connect_handler::<Ping, Ping>(&Arc::new(PingOnly));
//! ```
//!
//! Nor connecting two kinds without a declared derivation:
//!
//! ```compile_fail
//! use herald::prelude::*;
//! use std::sync::Arc;
//!
//! #[derive(Clone, Event)]
//! struct Ping;
//!
//! #[derive(Clone, Event)]
//! struct Pong;
//!
//! struct PingOnly;
//!
//! impl Listen<Ping> for PingOnly {
//!     fn handle(&self, _event: &Ping) {}
//! }
//!
//! Dispatcher::default().connect_handler::<Pong, Ping>(&Arc::new(PingOnly));
//! ```
//!
//! ## Process-Wide Dispatchers
//!
//! [`define_dispatcher!`] declares a lazily created dispatcher together with
//! its participating kinds:
//!
//! ```rust
//! use herald::prelude::*;
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug, Event)]
//! struct Opened { path: String }
//!
//! #[derive(Clone, Debug, Event)]
//! #[event(extends(Opened))]
//! struct Reopened {
//!     #[event(parent)]
//!     opened: Opened,
//! }
//!
//! herald::define_dispatcher! {
//!     fn files() = kinds![Opened, Reopened];
//! }
//!
//! let counter = Arc::new(herald::testing::CountingListener::new());
//! files()?.connect_handler::<Reopened, Opened>(&counter)?;
//!
//! let opened = Opened { path: "/srv/data".to_string() };
//! files()?.post(&Reopened { opened });
//! assert_eq!(counter.count(), 1);
//! # Ok::<(), herald::HeraldError>(())
//! ```
//!
//! ## Features
//!
//! - `macros` (default): `#[derive(Event)]`
//! - `tracing`: registration, dispatch and [`Traced`] span instrumentation
//!
//! [`Traced`]: listeners::Traced

#![warn(missing_docs)]

pub use herald_core::{
    // Event kinds
    Ancestry,
    Derives,
    Event,
    // Type-level kind lists
    HCons,
    HNil,
    // Error types
    HeraldError,
    HierarchyError,
    Kind,
    KindEntry,
    KindSet,
    // Capabilities
    Listen,
    kinds,
};

pub use herald_std::{
    // Routing
    ConnectedRoute,
    Deliver,
    DirectRoute,
    Dispatcher,
    // Hierarchy
    Hierarchy,
    HierarchyBuilder,
    PostReport,
    Registry,
    Route,
    RouteKey,
    TypedKey,
    // Process-wide instances
    define_dispatcher,
};

/// The process-wide dispatcher.
pub mod global {
    pub use herald_std::global::{dispatcher, install, is_initialized};
}

/// Standard listener implementations.
pub mod listeners {
    pub use herald_std::listeners::{FnListener, Traced, from_fn};
}

/// Testing utilities.
pub mod testing {
    pub use herald_std::testing::{CallLog, CountingListener, LoggingListener, RecordingListener};
}

/// Prelude module - common imports for Herald.
///
/// # Usage
///
/// ```rust,ignore
/// use herald::prelude::*;
/// ```
pub mod prelude {
    // `Event` brings in the derive macro as well when `macros` is enabled.
    pub use crate::{
        // Event kinds
        Derives,
        // Dispatching
        Dispatcher,
        Event,
        Hierarchy,
        // Errors
        HeraldError,
        HierarchyError,
        // Capabilities
        Listen,
        PostReport,
        kinds,
    };
}

#[cfg(feature = "macros")]
pub use herald_macros::Event;
