//! The full A/B/D walkthrough: two listeners, one connection.

use herald::{Dispatcher, testing::CallLog};
use std::sync::Arc;

mod common;
use common::{AEvent, BEvent, Bar, DEvent, Foo, a, b, d, participants};

fn setup() -> (Dispatcher, CallLog, Arc<Foo>, Arc<Bar>) {
    let log = CallLog::new();
    let foo = Arc::new(Foo { log: log.clone() });
    let bar = Arc::new(Bar { log: log.clone() });

    let dispatcher = Dispatcher::new(participants());
    dispatcher.add_listener::<AEvent>(&foo);
    dispatcher.add_listener::<BEvent>(&foo);
    dispatcher.add_listener::<DEvent>(&foo);
    dispatcher.add_listener::<AEvent>(&bar);
    dispatcher.connect_handler::<DEvent, AEvent>(&bar).unwrap();

    (dispatcher, log, foo, bar)
}

#[test]
fn test_post_a_reaches_both_listeners() {
    let (dispatcher, log, _foo, _bar) = setup();
    let report = dispatcher.post(&a(1));
    assert_eq!(report.direct, 2);
    assert_eq!(log.entries(), vec!["Foo.A(1)", "Bar.A(1)"]);
}

#[test]
fn test_post_b_reaches_only_foo() {
    let (dispatcher, log, _foo, _bar) = setup();
    dispatcher.post(&b("hello"));
    assert_eq!(log.entries(), vec!["Foo.B(hello)"]);
}

#[test]
fn test_post_d_reaches_foo_directly_and_bar_through_connection() {
    let (dispatcher, log, _foo, _bar) = setup();
    let report = dispatcher.post(&d(7, "extra"));
    assert_eq!(report.direct, 1);
    assert_eq!(report.connected, 1);
    assert_eq!(log.entries(), vec!["Foo.D(7,extra)", "Bar.A(7)"]);
}

#[test]
fn test_sequence_of_posts() {
    let (dispatcher, log, _foo, _bar) = setup();
    dispatcher.post(&a(1));
    dispatcher.post(&b("x"));
    dispatcher.post(&d(2, "y"));
    assert_eq!(
        log.entries(),
        vec!["Foo.A(1)", "Bar.A(1)", "Foo.B(x)", "Foo.D(2,y)", "Bar.A(2)"]
    );
}

#[test]
fn test_dropping_bar_silences_only_bar() {
    let (dispatcher, log, _foo, bar) = setup();
    drop(bar);

    let report = dispatcher.post(&d(3, "z"));
    assert_eq!(report.direct, 1);
    assert_eq!(report.connected, 0);
    assert_eq!(report.stale, 1);
    assert_eq!(log.entries(), vec!["Foo.D(3,z)"]);
}
