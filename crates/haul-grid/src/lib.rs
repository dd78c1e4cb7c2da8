//! `haul-grid` — terrain, occupancy, pathfinding, and service areas.
//!
//! # Crate layout
//!
//! | Module           | Contents                                                  |
//! |------------------|-----------------------------------------------------------|
//! | [`terrain`]      | `GroundType`, `TerrainGrid` (per-tile type + height)      |
//! | [`occupancy`]    | `OccupancyMap` — tile → occupying entity                  |
//! | [`path`]         | `Pathfinder` trait, `AstarPathfinder`                     |
//! | [`service_area`] | `ServiceArea`, `ServiceAreaIndex`, `BuildingProvider`     |
//! | [`error`]        | `GridError`, `GridResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.       |

pub mod error;
pub mod occupancy;
pub mod path;
pub mod service_area;
pub mod terrain;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use occupancy::OccupancyMap;
pub use path::{AstarPathfinder, Pathfinder, HEIGHT_COST_MILLI, STEP_COST_MILLI};
pub use service_area::{
    AreaFilter, BuildingProvider, ServiceArea, ServiceAreaIndex, MAX_SERVICE_RADIUS,
    MIN_SERVICE_RADIUS,
};
pub use terrain::{GroundType, TerrainGrid};
