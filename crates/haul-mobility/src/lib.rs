//! `haul-mobility` — unit movement state, path following, and push resolution.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`state`]  | `UnitState` — per-unit path follower state                      |
//! | [`store`]  | `MovementStore` — `EntityId → UnitState` table                  |
//! | [`engine`] | `MovementEngine` — tick advancement, push resolution, wander    |
//! | [`error`]  | `MobilityError`, `MobilityResult<T>`                            |
//!
//! # Movement model (tick-synchronous tile stepping)
//!
//! Units advance in discrete tile steps inside each `tick(dt)`:
//!
//! 1. The tick's distance budget is `move_progress + speed · dt` tiles.
//! 2. While a whole tile of budget remains, the unit consumes the next
//!    waypoint: occupancy moves first, then the position, then `path_index`.
//! 3. A blocked step invokes push resolution; if the blocker cannot be
//!    displaced the step is deferred to a later tick.
//! 4. The sub-tile remainder is stored as `move_progress ∈ [0, 1)` — a visual
//!    interpolation hint, never an input to game rules.
//!
//! Units are processed in ascending `EntityId` order so that push outcomes
//! and path races are reproducible for identical input state.

pub mod engine;
pub mod error;
pub mod state;
pub mod store;


pub use engine::{find_random_free_direction, MovementEngine, PositionProvider};
pub use error::{MobilityError, MobilityResult};
pub use state::UnitState;
pub use store::MovementStore;
