//! The dispatcher: registration and routing of posted events.
//!
//! # Routing
//!
//! Posting an event of kind `K` runs in two phases:
//!
//! 1. Every listener registered directly for `K`, in registration order,
//!    receives the event unchanged.
//! 2. For every ancestor `A` of `K` in the dispatcher's [`Hierarchy`]
//!    (enumeration order), every listener connected under `(K, A)` receives
//!    the event viewed as an `A`.
//!
//! Connections are one hop: connecting a listener for `(D, B)` says nothing
//! about kinds derived from `D`. A connection is only accepted when `B` is a
//! participating ancestor of `D`, so every stored connection can fire.

use crate::{
    hierarchy::Hierarchy,
    registry::{Registry, RouteKey, TypedKey},
    route::{ConnectedRoute, DirectRoute, Route},
};
use herald_core::{Derives, Event, HeraldError, Kind, Listen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Outcome of a single [`Dispatcher::post`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostReport {
    /// Handlers invoked through direct registrations.
    pub direct: usize,
    /// Handlers invoked through connections.
    pub connected: usize,
    /// Routes skipped because their listener no longer exists.
    pub stale: usize,
}

impl PostReport {
    /// Total number of handler invocations.
    pub fn delivered(&self) -> usize {
        self.direct + self.connected
    }
}

/// The routing point between producers and listeners.
///
/// The dispatcher owns the [`Registry`] and the participating [`Hierarchy`].
/// It holds listeners by weak reference only: whoever constructs a listener
/// keeps it alive, and a dropped listener is silently skipped.
///
/// Use [`Dispatcher::global`] for the process-wide instance, or build
/// isolated instances with [`Dispatcher::new`].
///
/// # Example
/// ```ignore
/// let dispatcher = Dispatcher::new(Hierarchy::of::<kinds![Connected, Reconnected]>()?);
///
/// let audit = Arc::new(Audit);
/// dispatcher.add_listener::<Connected>(&audit);
/// dispatcher.connect_handler::<Reconnected, Connected>(&audit)?;
///
/// dispatcher.post(&reconnected); // Audit sees it as a `Connected`
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    hierarchy: Hierarchy,
    registry: RwLock<Registry>,
}

impl Dispatcher {
    /// Create a dispatcher routing over `hierarchy`.
    pub fn new(hierarchy: Hierarchy) -> Self {
        Self {
            hierarchy,
            registry: RwLock::new(Registry::new()),
        }
    }

    /// The process-wide dispatcher.
    ///
    /// See [`global`](crate::global) for how its hierarchy is chosen.
    pub fn global() -> &'static Dispatcher {
        crate::global::dispatcher()
    }

    /// The participating hierarchy.
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Register `listener` for events of exactly kind `K`.
    ///
    /// Registering the same listener twice makes it run twice per post.
    pub fn add_listener<K: Event>(&self, listener: &Arc<impl Listen<K>>) {
        let route: Route<K> = Arc::new(DirectRoute::new(listener));
        self.file(TypedKey::direct(), route);
    }

    /// Register `listener`, written against base kind `B`, for events of the
    /// derived kind `D`.
    ///
    /// The listener receives each `D` viewed as a `B`.
    ///
    /// # Errors
    ///
    /// [`HeraldError::NotADerivation`] if `B` is not an ancestor of `D` in
    /// this dispatcher's hierarchy. Nothing is registered in that case.
    pub fn connect_handler<D, B>(&self, listener: &Arc<impl Listen<B>>) -> Result<(), HeraldError>
    where
        D: Event + Derives<B>,
        B: Event,
    {
        let (derived, base) = (Kind::of::<D>(), Kind::of::<B>());
        if !self.hierarchy.derives(derived, base) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                derived = D::NAME,
                base = B::NAME,
                "rejected connection: base is not a participating ancestor of derived"
            );
            return Err(HeraldError::NotADerivation { derived, base });
        }

        let route: Route<D> = Arc::new(ConnectedRoute::<_, B>::new(listener));
        self.file(TypedKey::connected(base), route);
        Ok(())
    }

    /// Deliver `event` to every matching listener, direct listeners first.
    ///
    /// Routes are snapshotted before any handler runs, so handlers may post
    /// or register re-entrantly; new registrations apply from the next post.
    pub fn post<K: Event>(&self, event: &K) -> PostReport {
        let kind = Kind::of::<K>();
        let (direct, connected) = {
            let registry = self.registry.read();
            let direct = registry.lookup(TypedKey::<K>::direct());
            let connected: Vec<Route<K>> = self
                .hierarchy
                .ancestors(kind)
                .iter()
                .flat_map(|&base| registry.lookup(TypedKey::<K>::connected(base)))
                .collect();
            (direct, connected)
        };

        let mut report = PostReport::default();
        for route in &direct {
            if deliver(route, event) {
                report.direct += 1;
            } else {
                report.stale += 1;
            }
        }
        for route in &connected {
            if deliver(route, event) {
                report.connected += 1;
            } else {
                report.stale += 1;
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            kind = K::NAME,
            direct = report.direct,
            connected = report.connected,
            stale = report.stale,
            "posted event"
        );
        report
    }

    /// Number of routes filed under `key`.
    pub fn listener_count(&self, key: &RouteKey) -> usize {
        self.registry.read().len(key)
    }

    fn file<E: Event>(&self, key: TypedKey<E>, route: Route<E>) {
        #[cfg(feature = "tracing")]
        let listener = route.listener_name();
        let len = self.registry.write().append(key, route);

        #[cfg(feature = "tracing")]
        tracing::debug!(?key, listener, listeners = len, "registered listener");
        #[cfg(not(feature = "tracing"))]
        let _ = len;
    }
}

fn deliver<E: Event>(route: &Route<E>, event: &E) -> bool {
    let delivered = route.deliver(event);
    #[cfg(feature = "tracing")]
    {
        if !delivered {
            tracing::trace!(listener = route.listener_name(), "skipped dropped listener");
        }
    }
    delivered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CallLog;
    use herald_core::kinds;

    #[derive(Clone, Debug, PartialEq)]
    struct Opened {
        path: String,
    }

    impl Event for Opened {
        const NAME: &'static str = "Opened";
        type Ancestors = kinds![];
    }

    #[derive(Clone, Debug)]
    struct Reopened {
        opened: Opened,
    }

    impl Event for Reopened {
        const NAME: &'static str = "Reopened";
        type Ancestors = kinds![Opened];
    }

    impl Derives<Opened> for Reopened {
        fn upcast(&self) -> Opened {
            self.opened.clone()
        }
    }

    struct Watcher {
        log: CallLog,
    }

    impl Listen<Opened> for Watcher {
        fn handle(&self, event: &Opened) {
            self.log.record(format!("opened:{}", event.path));
        }
    }

    fn reopened(path: &str) -> Reopened {
        Reopened {
            opened: Opened {
                path: path.to_string(),
            },
        }
    }

    #[test]
    fn test_post_without_listeners() {
        let dispatcher = Dispatcher::default();
        let report = dispatcher.post(&Opened {
            path: "a".to_string(),
        });
        assert_eq!(report, PostReport::default());
    }

    #[test]
    fn test_connected_delivery_views_as_base() {
        let log = CallLog::new();
        let watcher = Arc::new(Watcher { log: log.clone() });
        let dispatcher = Dispatcher::new(Hierarchy::of::<kinds![Opened, Reopened]>().unwrap());
        dispatcher
            .connect_handler::<Reopened, Opened>(&watcher)
            .unwrap();

        let report = dispatcher.post(&reopened("b"));
        assert_eq!(report.direct, 0);
        assert_eq!(report.connected, 1);
        assert_eq!(log.entries(), vec!["opened:b"]);
    }

    #[test]
    fn test_connection_outside_hierarchy_is_rejected() {
        let log = CallLog::new();
        let watcher = Arc::new(Watcher { log: log.clone() });
        let dispatcher = Dispatcher::default();

        let err = dispatcher
            .connect_handler::<Reopened, Opened>(&watcher)
            .unwrap_err();
        assert!(matches!(
            err,
            HeraldError::NotADerivation { derived, base }
                if derived == Reopened::kind() && base == Opened::kind()
        ));
        assert_eq!(
            dispatcher.listener_count(&RouteKey::connected::<Reopened, Opened>()),
            0
        );
        assert_eq!(dispatcher.post(&reopened("c")).delivered(), 0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_kind_sharing_a_name_with_its_base_can_connect() {
        #[derive(Clone, Debug)]
        struct Renamed {
            opened: Opened,
        }

        impl Event for Renamed {
            const NAME: &'static str = "Opened";
            type Ancestors = kinds![Opened];
        }

        impl Derives<Opened> for Renamed {
            fn upcast(&self) -> Opened {
                self.opened.clone()
            }
        }

        let log = CallLog::new();
        let watcher = Arc::new(Watcher { log: log.clone() });
        let dispatcher = Dispatcher::new(Hierarchy::of::<kinds![Opened, Renamed]>().unwrap());
        dispatcher.connect_handler::<Renamed, Opened>(&watcher).unwrap();

        let report = dispatcher.post(&Renamed {
            opened: Opened {
                path: "e".to_string(),
            },
        });
        assert_eq!(report.connected, 1);
        assert_eq!(log.entries(), vec!["opened:e"]);
    }

    #[test]
    fn test_dropped_listener_is_stale() {
        let log = CallLog::new();
        let watcher = Arc::new(Watcher { log: log.clone() });
        let dispatcher = Dispatcher::default();
        dispatcher.add_listener::<Opened>(&watcher);
        drop(watcher);

        let report = dispatcher.post(&Opened {
            path: "d".to_string(),
        });
        assert_eq!(report.direct, 0);
        assert_eq!(report.stale, 1);
        assert!(log.is_empty());
    }
}
