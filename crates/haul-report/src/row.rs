//! Plain data rows written by the report backends.

use haul_core::{Event, Tick};

/// One simulation event flattened into CSV-friendly columns.
///
/// Unused columns are `None` and serialize as empty cells; every event kind
/// shares the same header so one file holds the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick: u64,
    /// Event discriminator, e.g. `"pickupComplete"`.
    pub event: &'static str,
    pub carrier: Option<u32>,
    pub building: Option<u32>,
    pub material: Option<&'static str>,
    pub amount: Option<u32>,
    pub overflow: Option<u32>,
    pub radius: Option<u32>,
}

impl EventRow {
    pub const HEADER: [&'static str; 8] = [
        "tick", "event", "carrier", "building", "material", "amount", "overflow", "radius",
    ];

    pub fn from_event(tick: Tick, event: &Event) -> Self {
        let mut row = EventRow {
            tick: tick.0,
            event: event.name(),
            carrier: None,
            building: None,
            material: None,
            amount: None,
            overflow: None,
            radius: None,
        };
        match *event {
            Event::PickupComplete { carrier, building, material, amount } => {
                row.carrier = Some(carrier.0);
                row.building = Some(building.0);
                row.material = Some(material.as_str());
                row.amount = Some(amount);
            }
            Event::DeliveryComplete { carrier, building, material, amount, overflow } => {
                row.carrier = Some(carrier.0);
                row.building = Some(building.0);
                row.material = Some(material.as_str());
                row.amount = Some(amount);
                row.overflow = Some(overflow);
            }
            Event::ReturnedHome { carrier, home } => {
                row.carrier = Some(carrier.0);
                row.building = Some(home.0);
            }
            Event::ServiceAreaChanged { building, radius, .. } => {
                row.building = Some(building.0);
                row.radius = Some(radius);
            }
        }
        row
    }

    /// The row as CSV fields, empty strings for unused columns.
    pub fn record(&self) -> [String; 8] {
        fn opt<T: ToString>(v: Option<T>) -> String {
            v.map(|v| v.to_string()).unwrap_or_default()
        }
        [
            self.tick.to_string(),
            self.event.to_string(),
            opt(self.carrier),
            opt(self.building),
            self.material.unwrap_or_default().to_string(),
            opt(self.amount),
            opt(self.overflow),
            opt(self.radius),
        ]
    }
}
