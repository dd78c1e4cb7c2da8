//! Movement state table: `EntityId → UnitState`.

use haul_core::{EntityId, TileCoord};
use rustc_hash::FxHashMap;

use crate::{MobilityError, MobilityResult, UnitState};

/// Owns one [`UnitState`] per mobile entity.
///
/// Created when an entity becomes mobile, removed with the entity.  The
/// store never touches positions or occupancy — those belong to the entity
/// layer and are mutated by the engine during ticks.
#[derive(Default)]
pub struct MovementStore {
    units: FxHashMap<EntityId, UnitState>,
}

impl MovementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new mobile unit, stationary at `tile`.
    ///
    /// Double registration is a caller bug surfaced as
    /// [`MobilityError::AlreadyRegistered`].
    pub fn register(&mut self, id: EntityId, speed: f32, tile: TileCoord) -> MobilityResult<()> {
        if self.units.contains_key(&id) {
            return Err(MobilityError::AlreadyRegistered(id));
        }
        self.units.insert(id, UnitState::stationary(speed, tile));
        Ok(())
    }

    /// Remove a unit's movement record.  `false` if absent.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.units.remove(&id).is_some()
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.units.contains_key(&id)
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&UnitState> {
        self.units.get(&id)
    }

    #[inline]
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut UnitState> {
        self.units.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// All unit ids in ascending order — the fixed per-tick processing order
    /// that keeps push races deterministic.
    pub fn unit_ids_sorted(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.units.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
