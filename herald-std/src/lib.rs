//! # herald-std
//!
//! Standard implementations for the Herald typed event dispatcher.
//!
//! This crate provides:
//! - **Hierarchy**: [`Hierarchy`], the closed set of participating kinds and
//!   their precomputed ancestor table
//! - **Registry**: [`Registry`], type-erased listener lists keyed by [`RouteKey`]
//! - **Dispatching**: [`Dispatcher`], plus process-wide instances in [`global`]
//!   and [`define_dispatcher!`]
//! - **Standard listeners**: [`FnListener`], [`Traced`]
//! - **Testing utilities**: [`testing`]
//!
//! [`FnListener`]: listeners::FnListener
//! [`Traced`]: listeners::Traced

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use herald_core;

// Modules
pub mod dispatcher;
pub mod global;
pub mod hierarchy;
pub mod listeners;
pub mod registry;
pub mod route;
pub mod testing;

pub use dispatcher::{Dispatcher, PostReport};
pub use hierarchy::{Hierarchy, HierarchyBuilder};
pub use registry::{Registry, RouteKey, TypedKey};
pub use route::{ConnectedRoute, Deliver, DirectRoute, Route};
