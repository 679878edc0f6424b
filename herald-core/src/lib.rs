//! # herald-core
//!
//! Core traits for the Herald typed event dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! crates that only define events and listeners, without pulling in the
//! dispatcher itself.
//!
//! # Building Blocks
//!
//! ## Event Kinds ([`Event`])
//!
//! Every postable value implements [`Event`]. The trait is the common
//! marker for all event kinds and carries two pieces of definition-time
//! metadata:
//!
//! - **Identity**: the type itself, surfaced at runtime as a [`Kind`] that
//!   carries the display name [`Event::NAME`]
//! - **Ancestry**: [`Event::Ancestors`], a type-level list of every kind the
//!   event derives from
//!
//! ## Derivation ([`Derives`])
//!
//! `D: Derives<B>` states that an event of kind `D` can be viewed as an event
//! of kind `B`. An [`Ancestry`] list only type-checks when every listed kind
//! is reachable through `Derives`, so the declared chain and the available
//! upcasts can never disagree.
//!
//! ## Capabilities ([`Listen`])
//!
//! A listener type implements `Listen<K>` once per event kind it can handle.
//! Capabilities compose freely: a single type may implement any number of
//! them, and the dispatcher only accepts a registration when the matching
//! capability exists.
//!
//! ## Kind Lists ([`HCons`], [`HNil`], [`kinds!`])
//!
//! Closed, ordered sets of event kinds are expressed as type-level lists.
//! They describe both an event's ancestry and the participating kinds of a
//! dispatcher's hierarchy.
//!
//! # Error Types
//!
//! - [`HeraldError`] - Top-level error type
//! - [`HierarchyError`] - Malformed participating hierarchies

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event;
mod list;
mod listener;

// Re-exports
pub use error::{HeraldError, HierarchyError};
pub use event::{Ancestry, Derives, Event, Kind};
pub use list::{HCons, HNil, KindEntry, KindSet};
pub use listener::Listen;
