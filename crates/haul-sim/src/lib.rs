//! `haul-sim` — the top-level simulation crate.
//!
//! Wires the grid, mobility, and carrier layers into one owned world and
//! drives the tick loop.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`entity`]   | `EntityTable` — buildings and units, positions, ownership  |
//! | [`sim`]      | `Sim<P>` — world state, tick phases, transport dispatch    |
//! | [`builder`]  | `SimBuilder` — fluent construction with validation         |
//! | [`observer`] | `SimObserver` tick callbacks                               |
//! | [`error`]    | `SimError`, `SimResult<T>`                                 |
//!
//! # Quick start
//!
//! ```rust
//! use haul_carrier::InventoryProvider;
//! use haul_core::{Material, PlayerId, SimConfig, TileCoord};
//! use haul_grid::TerrainGrid;
//! use haul_sim::{BuildingKind, NoopObserver, SimBuilder};
//!
//! let config = SimConfig { tick_dt_secs: 0.5, total_ticks: 200, seed: 42 };
//! let mut sim = SimBuilder::new(config, TerrainGrid::flat(32, 32))
//!     .build()
//!     .unwrap();
//!
//! let player = PlayerId(0);
//! let hub = sim.spawn_hub(player, TileCoord::new(10, 10), 8);
//! let wood = sim.spawn_building(BuildingKind::Woodcutter, player, TileCoord::new(7, 10));
//! let mill = sim.spawn_building(BuildingKind::Sawmill, player, TileCoord::new(13, 10));
//! sim.spawn_carrier_at(player, hub, TileCoord::new(10, 11), 1.0).unwrap();
//!
//! sim.inventories.deposit_output(wood, Material::Log, 1);
//! assert!(sim.request_transport(wood, mill, Material::Log, 1).unwrap());
//! sim.run(&mut NoopObserver).unwrap();
//! ```

pub mod builder;
pub mod entity;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use entity::{BuildingKind, EntityKind, EntityTable};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{
    Sim, FATIGUE_PER_DELIVERY, FATIGUE_PER_PICKUP, FATIGUE_RECOVERY_PER_SEC, WANDER_CHANCE,
};
