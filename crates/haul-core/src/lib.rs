//! `haul-core` — foundational types for the hexhaul logistics simulation.
//!
//! This crate is a dependency of every other `haul-*` crate.  It intentionally
//! has no `haul-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`ids`]      | `EntityId`, `PlayerId`                                |
//! | [`tile`]     | `TileCoord`, `HexDir`, hex distance                   |
//! | [`material`] | `Material` enum                                       |
//! | [`time`]     | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]      | `SimRng` (deterministic global RNG)                   |
//! | [`events`]   | `Event`, `EventSink`, `NoopSink`, `EventLog`          |
//! | [`error`]    | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod events;
pub mod ids;
pub mod material;
pub mod rng;
pub mod tile;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use events::{Event, EventLog, EventSink, NoopSink};
pub use ids::{EntityId, PlayerId};
pub use material::Material;
pub use rng::SimRng;
pub use tile::{HexDir, TileCoord, Y_SCALE};
pub use time::{SimClock, SimConfig, Tick};
