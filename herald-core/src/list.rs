//! Type-level lists of event kinds.
//!
//! These lists never exist as values. They are read at definition time to
//! describe an event's ancestry ([`Ancestry`]) or a closed set of
//! participating kinds ([`KindSet`]).

use crate::event::{Ancestry, Derives, Event, Kind};
use std::marker::PhantomData;

/// List terminator - the empty set of kinds.
pub struct HNil;

/// List cons cell - a kind followed by more kinds.
pub struct HCons<H, T>(PhantomData<fn() -> (H, T)>);

impl<E> Ancestry<E> for HNil {
    fn push_kinds(_out: &mut Vec<Kind>) {}
}

impl<E, H, T> Ancestry<E> for HCons<H, T>
where
    E: Derives<H> + 'static,
    H: Event,
    T: Ancestry<E>,
{
    fn push_kinds(out: &mut Vec<Kind>) {
        out.push(Kind::of::<H>());
        T::push_kinds(out);
    }
}

/// A participating kind together with its declared ancestors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KindEntry {
    /// The kind itself.
    pub kind: Kind,
    /// Its declared ancestors, nearest first.
    pub ancestors: Vec<Kind>,
}

impl KindEntry {
    /// The entry for kind `E`.
    pub fn of<E: Event>() -> Self {
        Self {
            kind: Kind::of::<E>(),
            ancestors: E::ancestors(),
        }
    }
}

/// A closed, ordered set of event kinds.
pub trait KindSet: 'static {
    /// Appends an entry for every listed kind, in order.
    fn entries(out: &mut Vec<KindEntry>);
}

impl KindSet for HNil {
    fn entries(_out: &mut Vec<KindEntry>) {}
}

impl<H: Event, T: KindSet> KindSet for HCons<H, T> {
    fn entries(out: &mut Vec<KindEntry>) {
        out.push(KindEntry::of::<H>());
        T::entries(out);
    }
}

/// Names a type-level list of event kinds.
///
/// # Example
/// ```ignore
/// type Participants = kinds![Connected, Reconnected, Disconnected];
/// ```
#[macro_export]
macro_rules! kinds {
    () => { $crate::HNil };
    ($head:ty $(,)?) => { $crate::HCons<$head, $crate::HNil> };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        $crate::HCons<$head, $crate::kinds!($($rest),+)>
    };
}
