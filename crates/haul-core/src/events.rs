//! Logistics event types and the fire-and-forget event sink.
//!
//! Every successful job transition and every service-area mutation emits a
//! named event.  Events exist for observability and for external
//! economy/reward hooks — nothing in this core reads them back, there is no
//! acknowledgment, and there is no backpressure.

use crate::{EntityId, Material, Tick, TileCoord};

// ── Event ─────────────────────────────────────────────────────────────────────

/// A named simulation event with its payload.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// A carrier withdrew cargo from a building's output.
    PickupComplete {
        carrier: EntityId,
        building: EntityId,
        material: Material,
        amount: u32,
    },

    /// A carrier deposited cargo into a building's input.  `overflow` is the
    /// part that did not fit (lost, but reported).
    DeliveryComplete {
        carrier: EntityId,
        building: EntityId,
        material: Material,
        amount: u32,
        overflow: u32,
    },

    /// A carrier finished its return leg and went idle.
    ReturnedHome { carrier: EntityId, home: EntityId },

    /// A hub's service area changed center or radius.
    ServiceAreaChanged {
        building: EntityId,
        center: TileCoord,
        radius: u32,
    },
}

impl Event {
    /// Stable event name, useful as a CSV/log discriminator column.
    pub fn name(&self) -> &'static str {
        match self {
            Event::PickupComplete { .. } => "pickupComplete",
            Event::DeliveryComplete { .. } => "deliveryComplete",
            Event::ReturnedHome { .. } => "returnedHome",
            Event::ServiceAreaChanged { .. } => "serviceAreaChanged",
        }
    }
}

// ── EventSink ─────────────────────────────────────────────────────────────────

/// Receiver of simulation events.
///
/// Implementations must not fail: event delivery is fire-and-forget, and a
/// sink that cannot record an event should drop it rather than disturb the
/// tick loop.
pub trait EventSink {
    fn emit(&mut self, tick: Tick, event: &Event);
}

/// An [`EventSink`] that discards everything.
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _tick: Tick, _event: &Event) {}
}

/// An in-memory [`EventSink`] that records every event in order.
///
/// Intended for tests and for applications that drain events after each tick.
#[derive(Default)]
pub struct EventLog {
    pub entries: Vec<(Tick, Event)>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Events of the given name, in emission order.
    pub fn named(&self, name: &str) -> Vec<&Event> {
        self.entries
            .iter()
            .filter(|(_, e)| e.name() == name)
            .map(|(_, e)| e)
            .collect()
    }
}

impl EventSink for EventLog {
    fn emit(&mut self, tick: Tick, event: &Event) {
        self.entries.push((tick, event.clone()));
    }
}
