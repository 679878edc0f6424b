#![allow(dead_code)]

use herald::{Event, Hierarchy, Listen, kinds, testing::CallLog};

// ============================================================================
// Test Event Types
// ============================================================================

#[derive(Clone, Debug, PartialEq, Event)]
#[event(name = "A")]
pub struct AEvent {
    pub id: u32,
}

#[derive(Clone, Debug, PartialEq, Event)]
#[event(name = "B")]
pub struct BEvent {
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Event)]
#[event(name = "D", extends(AEvent))]
pub struct DEvent {
    #[event(parent)]
    pub base: AEvent,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Event)]
#[event(name = "E", extends(DEvent, AEvent))]
pub struct EEvent {
    #[event(parent)]
    pub base: DEvent,
}

pub fn a(id: u32) -> AEvent {
    AEvent { id }
}

pub fn b(label: &str) -> BEvent {
    BEvent {
        label: label.to_string(),
    }
}

pub fn d(id: u32, detail: &str) -> DEvent {
    DEvent {
        base: a(id),
        detail: detail.to_string(),
    }
}

pub fn e(id: u32) -> EEvent {
    EEvent {
        base: d(id, "nested"),
    }
}

/// A, B, D, E in that order.
pub fn participants() -> Hierarchy {
    Hierarchy::of::<kinds![AEvent, BEvent, DEvent, EEvent]>().unwrap()
}

// ============================================================================
// Test Listeners
// ============================================================================

/// Handles A, B and D directly.
pub struct Foo {
    pub log: CallLog,
}

impl Listen<AEvent> for Foo {
    fn handle(&self, event: &AEvent) {
        self.log.record(format!("Foo.A({})", event.id));
    }
}

impl Listen<BEvent> for Foo {
    fn handle(&self, event: &BEvent) {
        self.log.record(format!("Foo.B({})", event.label));
    }
}

impl Listen<DEvent> for Foo {
    fn handle(&self, event: &DEvent) {
        self.log.record(format!("Foo.D({},{})", event.base.id, event.detail));
    }
}

/// Handles A only.
pub struct Bar {
    pub log: CallLog,
}

impl Listen<AEvent> for Bar {
    fn handle(&self, event: &AEvent) {
        self.log.record(format!("Bar.A({})", event.id));
    }
}

/// A named A-listener, for ordering tests.
pub struct Tagged {
    pub tag: &'static str,
    pub log: CallLog,
}

impl Listen<AEvent> for Tagged {
    fn handle(&self, event: &AEvent) {
        self.log.record(format!("{}.A({})", self.tag, event.id));
    }
}
