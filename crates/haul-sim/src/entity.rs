//! The entity table: buildings and mobile units in one id space.

use haul_core::{EntityId, PlayerId, TileCoord};
use haul_grid::BuildingProvider;
use haul_mobility::PositionProvider;
use rustc_hash::FxHashMap;

// ── Kinds ─────────────────────────────────────────────────────────────────────

/// The building types the logistics layer distinguishes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum BuildingKind {
    /// The carrier hub; owns a service area and homes carriers.
    Tavern,
    Woodcutter,
    Sawmill,
    Farm,
    Mill,
    Bakery,
    Storehouse,
}

/// What an entity is.  One id space covers both buildings and units so that
/// occupancy, events, and carrier records all speak plain [`EntityId`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum EntityKind {
    Building { kind: BuildingKind, player: PlayerId },
    Unit { player: PlayerId },
}

#[derive(Copy, Clone, Debug)]
struct EntityRecord {
    kind: EntityKind,
    pos: TileCoord,
}

// ── EntityTable ───────────────────────────────────────────────────────────────

/// Owns every live entity: its kind, owner, and tile position.
///
/// Ids are allocated monotonically and never reused, so a stale id held
/// across a removal can never silently alias a new entity.
#[derive(Default)]
pub struct EntityTable {
    records: FxHashMap<EntityId, EntityRecord>,
    next_id: u32,
}

impl EntityTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn spawn_building(
        &mut self,
        kind: BuildingKind,
        player: PlayerId,
        pos: TileCoord,
    ) -> EntityId {
        let id = self.alloc();
        self.records.insert(id, EntityRecord { kind: EntityKind::Building { kind, player }, pos });
        id
    }

    pub fn spawn_unit(&mut self, player: PlayerId, pos: TileCoord) -> EntityId {
        let id = self.alloc();
        self.records.insert(id, EntityRecord { kind: EntityKind::Unit { player }, pos });
        id
    }

    /// Remove an entity.  `false` if it was already gone.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.records.remove(&id).is_some()
    }

    pub fn kind(&self, id: EntityId) -> Option<EntityKind> {
        self.records.get(&id).map(|r| r.kind)
    }

    pub fn is_building(&self, id: EntityId) -> bool {
        matches!(self.kind(id), Some(EntityKind::Building { .. }))
    }

    pub fn player(&self, id: EntityId) -> Option<PlayerId> {
        match self.kind(id)? {
            EntityKind::Building { player, .. } | EntityKind::Unit { player } => Some(player),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All entity ids, ascending.
    pub fn entity_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

// ── Layer contracts ───────────────────────────────────────────────────────────

impl BuildingProvider for EntityTable {
    fn building_exists(&self, id: EntityId) -> bool {
        self.is_building(id)
    }

    fn building_pos(&self, id: EntityId) -> Option<TileCoord> {
        let record = self.records.get(&id)?;
        matches!(record.kind, EntityKind::Building { .. }).then_some(record.pos)
    }

    fn building_player(&self, id: EntityId) -> Option<PlayerId> {
        match self.kind(id)? {
            EntityKind::Building { player, .. } => Some(player),
            EntityKind::Unit { .. } => None,
        }
    }

    fn building_ids(&self) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .records
            .iter()
            .filter(|(_, r)| matches!(r.kind, EntityKind::Building { .. }))
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }
}

impl PositionProvider for EntityTable {
    fn position(&self, id: EntityId) -> Option<TileCoord> {
        self.records.get(&id).map(|r| r.pos)
    }

    fn set_position(&mut self, id: EntityId, tile: TileCoord) {
        if let Some(record) = self.records.get_mut(&id) {
            record.pos = tile;
        }
    }
}
