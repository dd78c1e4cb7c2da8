//! Movement engine: advances path followers and resolves tile collisions.

use haul_core::{EntityId, SimRng, TileCoord};
use haul_grid::{OccupancyMap, TerrainGrid};

use crate::{MobilityError, MobilityResult, MovementStore};

// ── PositionProvider ──────────────────────────────────────────────────────────

/// Write access to entity positions, supplied by the entity layer.
///
/// The engine never owns entity lifecycle — it only moves entities that the
/// provider knows about and keeps the occupancy map in lockstep.
pub trait PositionProvider {
    fn position(&self, id: EntityId) -> Option<TileCoord>;
    fn set_position(&mut self, id: EntityId, tile: TileCoord);
}

// ── Free-neighbor search ──────────────────────────────────────────────────────

/// Pick a random neighbor of `tile` that is both terrain-passable and
/// unoccupied.  Returns `None` when all six neighbors are blocked.
///
/// Neighbor order is randomized per call; the result is deterministic given
/// the RNG state, which the tick loop threads through in fixed entity order.
pub fn find_random_free_direction(
    tile: TileCoord,
    terrain: &TerrainGrid,
    occupancy: &OccupancyMap,
    rng: &mut SimRng,
) -> Option<TileCoord> {
    let mut neighbors = tile.neighbors();
    rng.shuffle(&mut neighbors);
    neighbors
        .into_iter()
        .find(|&n| terrain.is_passable(n) && occupancy.is_free(n))
}

// ── MovementEngine ────────────────────────────────────────────────────────────

/// Wraps a [`MovementStore`] and drives every unit's path one tick at a time.
pub struct MovementEngine {
    /// All per-unit movement state.
    pub store: MovementStore,
}

impl MovementEngine {
    pub fn new() -> Self {
        Self { store: MovementStore::new() }
    }

    /// Start `id` following `path` (waypoints excluding its current tile).
    ///
    /// Replaces any path in progress.  Erroring on an unregistered unit is
    /// deliberate — callers must create the movement record first.
    pub fn begin_path(&mut self, id: EntityId, path: Vec<TileCoord>) -> MobilityResult<()> {
        let unit = self.store.get_mut(id).ok_or(MobilityError::UnitNotFound(id))?;
        unit.path = path;
        unit.path_index = 0;
        unit.move_progress = 0.0;
        Ok(())
    }

    /// Advance every unit with a non-empty path by `dt` simulated seconds.
    ///
    /// Units are processed in ascending `EntityId` order.  Returns the ids
    /// that completed their path this tick, ascending.
    pub fn tick(
        &mut self,
        dt: f32,
        positions: &mut dyn PositionProvider,
        occupancy: &mut OccupancyMap,
        terrain: &TerrainGrid,
        rng: &mut SimRng,
    ) -> Vec<EntityId> {
        let mut completed = Vec::new();

        for id in self.store.unit_ids_sorted() {
            // Re-fetch each iteration: an earlier unit's push may have
            // cleared this unit's path already.
            let Some(unit) = self.store.get(id) else { continue };
            if !unit.has_path() {
                continue;
            }

            let mut budget = unit.move_progress + unit.speed * dt;
            let mut blocked = false;

            loop {
                let Some(unit) = self.store.get(id) else { break };
                if budget < 1.0 || !unit.has_path() {
                    break;
                }
                let next = unit.path[unit.path_index];

                // Resolve the collision before taking the step.
                if let Some(blocker) = occupancy.occupant(next) {
                    if blocker != id
                        && !self.push_unit(id, blocker, positions, occupancy, terrain, rng)
                    {
                        blocked = true;
                        break;
                    }
                }

                let Some(cur) = positions.position(id) else {
                    blocked = true;
                    break;
                };
                if !occupancy.relocate(cur, next, id) {
                    // Push vacated the tile onto our own square or raced;
                    // defer to the next tick.
                    blocked = true;
                    break;
                }
                positions.set_position(id, next);

                let unit = self.store.get_mut(id).expect("unit present: fetched above");
                unit.prev = cur;
                unit.path_index += 1;
                budget -= 1.0;
            }

            let Some(unit) = self.store.get_mut(id) else { continue };
            if !unit.path.is_empty() && !unit.has_path() {
                // Path fully consumed this tick.
                let final_tile = positions.position(id).unwrap_or(unit.prev);
                unit.finish_path(final_tile);
                completed.push(id);
            } else if blocked {
                unit.move_progress = 0.0;
            } else if unit.has_path() {
                unit.move_progress = budget;
            }
        }

        completed
    }

    /// Displace `blocker` from its tile so that `pusher` can step in.
    ///
    /// The lower entity id always wins: when `pusher >= blocker` (including a
    /// unit "pushing" itself) the call returns `false` immediately and nobody
    /// moves.  Otherwise the blocker is relocated to a random passable, free
    /// neighbor; its remaining path (if any) is discarded and the owning
    /// layer re-routes it on a later tick.  Returns `false` when no free
    /// neighbor exists.
    pub fn push_unit(
        &mut self,
        pusher: EntityId,
        blocker: EntityId,
        positions: &mut dyn PositionProvider,
        occupancy: &mut OccupancyMap,
        terrain: &TerrainGrid,
        rng: &mut SimRng,
    ) -> bool {
        if pusher >= blocker {
            return false;
        }
        let Some(from) = positions.position(blocker) else {
            return false;
        };
        let Some(target) = find_random_free_direction(from, terrain, occupancy, rng) else {
            return false;
        };
        if !occupancy.relocate(from, target, blocker) {
            return false;
        }
        positions.set_position(blocker, target);
        if let Some(unit) = self.store.get_mut(blocker) {
            unit.clear_path();
            unit.prev = from;
        }
        true
    }

    /// Interpolation hint for rendering: `(prev_tile, current_tile, progress)`.
    ///
    /// Collapses to `(t, t, 0.0)` once a unit is stationary at `t`.
    pub fn interpolated_position(
        &self,
        id: EntityId,
        positions: &dyn PositionProvider,
    ) -> Option<(TileCoord, TileCoord, f32)> {
        let unit = self.store.get(id)?;
        let cur = positions.position(id)?;
        Some((unit.prev, cur, unit.move_progress))
    }
}

impl Default for MovementEngine {
    fn default() -> Self {
        Self::new()
    }
}
