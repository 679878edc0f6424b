//! Event kinds and the derivation relationship between them.

use std::{
    any::TypeId,
    fmt,
    hash::{Hash, Hasher},
};

/// The common marker for everything that can be posted.
///
/// An event kind is identified by its type. Its place in the event hierarchy
/// is declared statically through [`Event::Ancestors`], a type-level list of
/// every kind this event derives from (directly or transitively), excluding
/// itself.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Debug)]
/// struct Connected { peer: String }
///
/// impl Event for Connected {
///     const NAME: &'static str = "Connected";
///     type Ancestors = kinds![];
/// }
///
/// #[derive(Clone, Debug)]
/// struct Reconnected { base: Connected, attempt: u32 }
///
/// impl Event for Reconnected {
///     const NAME: &'static str = "Reconnected";
///     type Ancestors = kinds![Connected];
/// }
///
/// impl Derives<Connected> for Reconnected {
///     fn upcast(&self) -> Connected {
///         self.base.clone()
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an event kind",
    label = "missing `Event` implementation",
    note = "Derive it with `#[derive(Event)]` or implement `Event` by hand."
)]
pub trait Event: Clone + Send + Sync + 'static {
    /// Human-readable name of this kind. Identity is the type, so two
    /// kinds may share a name.
    const NAME: &'static str;

    /// Every kind this event derives from, nearest first.
    type Ancestors: Ancestry<Self>;

    /// The runtime identity token for this kind.
    fn kind() -> Kind {
        Kind::of::<Self>()
    }

    /// The declared ancestors as runtime identities.
    fn ancestors() -> Vec<Kind> {
        let mut out = Vec::new();
        Self::Ancestors::push_kinds(&mut out);
        out
    }
}

/// States that an event of kind `Self` may be viewed as an event of kind `B`.
///
/// Viewing is lossy: fields specific to `Self` are dropped and the handler
/// only ever sees a plain `B`. There is no reflexive
/// implementation, so `Derives<K>` never holds for `K` itself.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not derived from `{B}`",
    label = "`{B}` is not an ancestor of `{Self}`",
    note = "Declare the derivation with `#[event(extends({B}))]`. An event kind is never derived from itself and cannot be connected to itself."
)]
pub trait Derives<B> {
    /// Views this event as its ancestor kind `B`.
    fn upcast(&self) -> B;
}

/// A type-level list of ancestors valid for event kind `E`.
///
/// Implemented for [`HNil`] and for [`HCons<H, T>`] whenever `E: Derives<H>`,
/// which ties the declared ancestry to the available upcasts.
///
/// [`HNil`]: crate::HNil
/// [`HCons<H, T>`]: crate::HCons
pub trait Ancestry<E>: 'static {
    /// Appends the runtime identity of every listed kind, in order.
    fn push_kinds(out: &mut Vec<Kind>);
}

/// The runtime identity of an event kind.
///
/// Equality and hashing use only the type identity; the name is carried for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct Kind {
    id: TypeId,
    name: &'static str,
}

impl Kind {
    /// The identity of kind `E`.
    pub fn of<E: Event>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: E::NAME,
        }
    }

    /// The kind's declared name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this is the identity of kind `E`.
    pub fn is<E: Event>(&self) -> bool {
        self.id == TypeId::of::<E>()
    }
}

impl PartialEq for Kind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Kind {}

impl Hash for Kind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Kind").field(&self.name).finish()
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
