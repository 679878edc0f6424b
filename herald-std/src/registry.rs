//! Registry module for listener routes.
//!
//! The registry is an accumulate-only map from [`RouteKey`] to an ordered
//! list of routes. Lists are created lazily on first append and are never
//! removed. Each list is stored type-erased; the key's triggering kind
//! determines its element type, and [`TypedKey`] ties the two together.

use crate::route::Route;
use herald_core::{Event, Kind};
use std::{any::Any, collections::HashMap, marker::PhantomData};

/// Key under which routes are filed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteKey {
    /// Listeners registered for exactly this kind.
    Direct(Kind),
    /// Listeners for `base` that opted in to events of kind `derived`.
    Connected {
        /// The posted kind.
        derived: Kind,
        /// The ancestor kind the listeners handle.
        base: Kind,
    },
}

impl RouteKey {
    /// The direct key for kind `K`.
    pub fn direct<K: Event>() -> Self {
        Self::Direct(Kind::of::<K>())
    }

    /// The connected key for derived kind `D` viewed as `B`.
    pub fn connected<D: Event, B: Event>() -> Self {
        Self::Connected {
            derived: Kind::of::<D>(),
            base: Kind::of::<B>(),
        }
    }

    /// The kind whose posts look this key up.
    pub fn trigger(&self) -> Kind {
        match self {
            Self::Direct(kind) => *kind,
            Self::Connected { derived, .. } => *derived,
        }
    }
}

/// A [`RouteKey`] whose trigger is statically kind `E`.
///
/// Every key built here triggers on `E`, so the routes filed under it always
/// have the element type of the key's slot.
pub struct TypedKey<E> {
    key: RouteKey,
    _kind: PhantomData<fn() -> E>,
}

impl<E: Event> TypedKey<E> {
    /// Listeners registered for exactly `E`.
    pub fn direct() -> Self {
        Self::wrap(RouteKey::Direct(Kind::of::<E>()))
    }

    /// Listeners for `base` that opted in to events of kind `E`.
    pub fn connected(base: Kind) -> Self {
        Self::wrap(RouteKey::Connected {
            derived: Kind::of::<E>(),
            base,
        })
    }

    fn wrap(key: RouteKey) -> Self {
        Self {
            key,
            _kind: PhantomData,
        }
    }

    /// The untyped key.
    pub fn key(&self) -> RouteKey {
        self.key
    }
}

impl<E> Clone for TypedKey<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for TypedKey<E> {}

impl<E> std::fmt::Debug for TypedKey<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.key.fmt(f)
    }
}

struct Slot {
    len: usize,
    // A `Vec<Route<E>>` for the key's trigger kind `E`.
    routes: Box<dyn Any + Send + Sync>,
}

/// Listener routes keyed by [`RouteKey`].
///
/// # Example
/// ```ignore
/// let mut registry = Registry::new();
/// let key = TypedKey::<Connected>::direct();
/// registry.append(key, Arc::new(DirectRoute::new(&audit)));
///
/// assert_eq!(registry.lookup(key).len(), 1);
/// ```
#[derive(Default)]
pub struct Registry {
    slots: HashMap<RouteKey, Slot>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route at the end of the key's list.
    ///
    /// Returns the list's new length.
    pub fn append<E: Event>(&mut self, key: TypedKey<E>, route: Route<E>) -> usize {
        let slot = self.slots.entry(key.key()).or_insert_with(|| Slot {
            len: 0,
            routes: Box::new(Vec::<Route<E>>::new()),
        });
        // Slots of a key are always created with the key's trigger type.
        if let Some(routes) = slot.routes.downcast_mut::<Vec<Route<E>>>() {
            routes.push(route);
            slot.len = routes.len();
        }
        slot.len
    }

    /// A snapshot of the key's routes in insertion order.
    ///
    /// Unknown keys yield an empty list.
    pub fn lookup<E: Event>(&self, key: TypedKey<E>) -> Vec<Route<E>> {
        self.slots
            .get(&key.key())
            .and_then(|slot| slot.routes.downcast_ref::<Vec<Route<E>>>())
            .cloned()
            .unwrap_or_default()
    }

    /// Number of routes filed under `key`.
    pub fn len(&self, key: &RouteKey) -> usize {
        self.slots.get(key).map_or(0, |slot| slot.len)
    }

    /// Check if no routes have been filed at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All keys with at least one route.
    pub fn keys(&self) -> impl Iterator<Item = &RouteKey> {
        self.slots.keys()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|(key, slot)| (key, slot.len)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::DirectRoute;
    use herald_core::{Listen, kinds};
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Clone, Debug)]
    struct Tick(u32);

    impl Event for Tick {
        const NAME: &'static str = "Tick";
        type Ancestors = kinds![];
    }

    #[derive(Clone, Debug)]
    struct Tock;

    impl Event for Tock {
        const NAME: &'static str = "Tock";
        type Ancestors = kinds![];
    }

    struct Tagged {
        tag: &'static str,
        seen: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Listen<Tick> for Tagged {
        fn handle(&self, _event: &Tick) {
            self.seen.lock().push(self.tag);
        }
    }

    fn route(listener: &Arc<Tagged>) -> Route<Tick> {
        Arc::new(DirectRoute::new(listener))
    }

    #[test]
    fn test_lookup_unknown_key_is_empty() {
        let registry = Registry::new();
        assert!(registry.lookup(TypedKey::<Tick>::direct()).is_empty());
        assert_eq!(registry.len(&RouteKey::direct::<Tick>()), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first = Arc::new(Tagged {
            tag: "first",
            seen: seen.clone(),
        });
        let second = Arc::new(Tagged {
            tag: "second",
            seen: seen.clone(),
        });

        let key = TypedKey::<Tick>::direct();
        let mut registry = Registry::new();
        assert_eq!(registry.append(key, route(&second)), 1);
        assert_eq!(registry.append(key, route(&first)), 2);
        assert_eq!(registry.append(key, route(&second)), 3);

        for route in registry.lookup(key) {
            assert!(route.deliver(&Tick(1)));
        }
        assert_eq!(*seen.lock(), vec!["second", "first", "second"]);
    }

    #[test]
    fn test_keys_are_independent() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let listener = Arc::new(Tagged { tag: "t", seen });

        let mut registry = Registry::new();
        registry.append(TypedKey::direct(), route(&listener));

        assert_eq!(registry.len(&RouteKey::direct::<Tick>()), 1);
        assert_eq!(registry.len(&RouteKey::direct::<Tock>()), 0);
        assert_eq!(registry.len(&RouteKey::connected::<Tick, Tock>()), 0);
        assert_eq!(registry.keys().count(), 1);
    }

    #[test]
    fn test_connected_and_direct_slots_are_separate() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let listener = Arc::new(Tagged { tag: "t", seen });

        let mut registry = Registry::new();
        let connected = TypedKey::<Tick>::connected(Tock::kind());
        assert_eq!(registry.append(connected, route(&listener)), 1);
        assert_eq!(registry.append(connected, route(&listener)), 2);

        assert_eq!(connected.key(), RouteKey::connected::<Tick, Tock>());
        assert_eq!(registry.len(&RouteKey::connected::<Tick, Tock>()), 2);
        assert!(registry.lookup(TypedKey::<Tick>::direct()).is_empty());
        assert_eq!(registry.lookup(connected).len(), 2);
    }

    #[test]
    fn test_lookup_is_a_snapshot() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let listener = Arc::new(Tagged { tag: "t", seen });
        let key = TypedKey::<Tick>::direct();

        let mut registry = Registry::new();
        registry.append(key, route(&listener));
        let snapshot = registry.lookup(key);
        registry.append(key, route(&listener));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(registry.lookup(key).len(), 2);
    }

    #[test]
    fn test_route_key_trigger() {
        assert_eq!(RouteKey::direct::<Tick>().trigger(), Tick::kind());
        assert_eq!(RouteKey::connected::<Tock, Tick>().trigger(), Tock::kind());
        assert_eq!(TypedKey::<Tock>::connected(Tick::kind()).key().trigger(), Tock::kind());
        assert_ne!(
            RouteKey::connected::<Tock, Tick>(),
            RouteKey::connected::<Tick, Tock>()
        );
    }
}
