use std::sync::Arc;

use anyhow::Result;
use herald::{
    listeners::{Traced, from_fn},
    prelude::*,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

// --- Events ---

#[derive(Clone, Debug, Event)]
#[event(name = "A")]
struct A {
    id: u32,
}

#[derive(Clone, Debug, Event)]
#[event(name = "B")]
struct B {
    label: String,
}

#[derive(Clone, Debug, Event)]
#[event(name = "D", extends(A))]
struct D {
    #[event(parent)]
    base: A,
    detail: String,
}

// --- Listeners ---

/// Handles every kind directly.
struct Foo;

impl Listen<A> for Foo {
    fn handle(&self, event: &A) {
        info!(id = event.id, "Foo handled A");
    }
}

impl Listen<B> for Foo {
    fn handle(&self, event: &B) {
        info!(label = %event.label, "Foo handled B");
    }
}

impl Listen<D> for Foo {
    fn handle(&self, event: &D) {
        info!(id = event.base.id, detail = %event.detail, "Foo handled D");
    }
}

/// Only knows about A, and opts in to D through its A handler.
struct Bar;

impl Listen<A> for Bar {
    fn handle(&self, event: &A) {
        info!(id = event.id, "Bar handled A");
    }
}

herald::define_dispatcher! {
    /// The process-wide dispatcher for this walkthrough.
    fn events() = kinds![A, B, D];
}

// --- Main ---

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("herald_std=debug".parse()?)
                .add_directive("herald_demo=info".parse()?),
        )
        .init();

    let dispatcher = events()?;

    let foo = Arc::new(Foo);
    let bar = Arc::new(Traced::new(Bar, "bar"));
    let audit = Arc::new(from_fn(|event: &D| info!(?event, "audit saw D")));

    dispatcher.add_listener::<A>(&foo);
    dispatcher.add_listener::<B>(&foo);
    dispatcher.add_listener::<D>(&foo);
    dispatcher.add_listener::<D>(&audit);
    dispatcher.add_listener::<A>(&bar);
    dispatcher.connect_handler::<D, A>(&bar)?;

    let report = dispatcher.post(&A { id: 1 });
    info!(?report, "posted A");

    let report = dispatcher.post(&B {
        label: "hello".to_string(),
    });
    info!(?report, "posted B");

    let report = dispatcher.post(&D {
        base: A { id: 2 },
        detail: "upgraded".to_string(),
    });
    info!(?report, "posted D");

    drop(bar);
    let report = events()?.post(&A { id: 3 });
    info!(?report, "posted A after dropping Bar");

    Ok(())
}
