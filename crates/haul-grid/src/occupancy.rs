//! Tile occupancy map.
//!
//! Tracks which entity stands on which tile.  At most one occupant per tile;
//! every position change goes through [`OccupancyMap::relocate`] (or a
//! claim/release pair), so no stale entry can survive a successful move.

use haul_core::{EntityId, TileCoord};
use rustc_hash::FxHashMap;

/// Mapping from tile → occupying entity.
#[derive(Default, Debug)]
pub struct OccupancyMap {
    map: FxHashMap<TileCoord, EntityId>,
}

impl OccupancyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entity standing on `tile`, if any.
    #[inline]
    pub fn occupant(&self, tile: TileCoord) -> Option<EntityId> {
        self.map.get(&tile).copied()
    }

    /// `true` if no entity occupies `tile`.
    #[inline]
    pub fn is_free(&self, tile: TileCoord) -> bool {
        !self.map.contains_key(&tile)
    }

    /// Claim `tile` for `id`.
    ///
    /// Returns `false` (and changes nothing) when a **different** entity
    /// already holds the tile.  Re-claiming one's own tile succeeds.
    pub fn claim(&mut self, tile: TileCoord, id: EntityId) -> bool {
        match self.map.get(&tile) {
            Some(&holder) if holder != id => false,
            _ => {
                self.map.insert(tile, id);
                true
            }
        }
    }

    /// Release `tile`, which must currently be held by `id`.
    ///
    /// A release of a tile held by someone else is a caller bug: it is
    /// ignored in release builds and trips a debug assertion.
    pub fn release(&mut self, tile: TileCoord, id: EntityId) {
        match self.map.get(&tile) {
            Some(&holder) if holder == id => {
                self.map.remove(&tile);
            }
            other => {
                debug_assert!(
                    other.is_none(),
                    "release of {tile} held by {other:?}, not {id}"
                );
            }
        }
    }

    /// Atomically move `id` from `from` to `to`.
    ///
    /// Claims `to` first; on success releases `from`, so the entity is never
    /// left without an entry.  Returns `false` (nothing changes) when `to`
    /// is held by another entity.
    pub fn relocate(&mut self, from: TileCoord, to: TileCoord, id: EntityId) -> bool {
        if !self.claim(to, id) {
            return false;
        }
        if from != to {
            self.release(from, id);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Drop every entry (world teardown).
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
