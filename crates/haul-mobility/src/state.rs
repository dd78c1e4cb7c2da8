//! Per-unit movement state.

use haul_core::TileCoord;

/// The path-follower state for a single mobile unit.
///
/// A unit is either **stationary** (empty `path`) or **following** a waypoint
/// sequence.  `prev` always names the tile the unit most recently left;
/// together with `move_progress` it lets rendering interpolate a smooth
/// position between ticks.  Neither field ever feeds a game-state decision.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitState {
    /// Waypoints still to visit, excluding the tile the unit started on.
    pub path: Vec<TileCoord>,

    /// Index of the next waypoint in `path`.
    pub path_index: usize,

    /// Movement speed in tiles per simulated second.
    pub speed: f32,

    /// Sub-tile advance toward the next waypoint, in `[0, 1)`.  Visual only.
    pub move_progress: f32,

    /// The tile left most recently.  Equals the current tile when stationary.
    pub prev: TileCoord,
}

impl UnitState {
    /// Construct a stationary state at `tile`.
    #[inline]
    pub fn stationary(speed: f32, tile: TileCoord) -> Self {
        Self {
            path: Vec::new(),
            path_index: 0,
            speed,
            move_progress: 0.0,
            prev: tile,
        }
    }

    /// `true` while waypoints remain to be consumed.
    #[inline]
    pub fn has_path(&self) -> bool {
        self.path_index < self.path.len()
    }

    /// Waypoints not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.path.len() - self.path_index.min(self.path.len())
    }

    /// Drop the current path without finishing it (e.g. after being pushed).
    pub fn clear_path(&mut self) {
        self.path.clear();
        self.path_index = 0;
        self.move_progress = 0.0;
    }

    /// Mark the path completed at `final_tile`: clears the path and collapses
    /// the interpolation state onto the final position.
    pub fn finish_path(&mut self, final_tile: TileCoord) {
        self.clear_path();
        self.prev = final_tile;
    }
}
