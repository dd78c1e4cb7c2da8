//! Service areas: hex-radius zones around logistics hubs.
//!
//! A hub (tavern) owns one `ServiceArea`; buildings inside the radius can be
//! serviced by the hub's carriers.  Membership is always the exact hex
//! distance test; an R-tree over hub centers in world coordinates serves
//! only as a superset pre-filter (every hex step has unit world length, so
//! world distance never exceeds hex distance).

use haul_core::{EntityId, Event, EventSink, PlayerId, Tick, TileCoord};
use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

/// Smallest allowed service radius, in tiles.
pub const MIN_SERVICE_RADIUS: u32 = 3;

/// Largest allowed service radius, in tiles.
pub const MAX_SERVICE_RADIUS: u32 = 20;

// ── BuildingProvider ──────────────────────────────────────────────────────────

/// Read-only view of the world's buildings, supplied by the entity layer.
///
/// The index never owns entity lifecycle; every query re-checks existence so
/// that a hub or candidate building destroyed since area creation silently
/// drops out of results.
pub trait BuildingProvider {
    fn building_exists(&self, id: EntityId) -> bool;
    fn building_pos(&self, id: EntityId) -> Option<TileCoord>;
    fn building_player(&self, id: EntityId) -> Option<PlayerId>;
    /// All building ids in ascending order (the deterministic scan order).
    fn building_ids(&self) -> Vec<EntityId>;
}

// ── ServiceArea ───────────────────────────────────────────────────────────────

/// One hub's service zone.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ServiceArea {
    pub building: EntityId,
    pub player: PlayerId,
    pub center: TileCoord,
    pub radius: u32,
}

impl ServiceArea {
    /// `true` if `tile` lies within this area (hex distance ≤ radius).
    #[inline]
    pub fn contains(&self, tile: TileCoord) -> bool {
        self.center.hex_distance(tile) <= self.radius
    }
}

/// Filter options for [`ServiceAreaIndex::buildings_in_area`].
#[derive(Copy, Clone, Debug, Default)]
pub struct AreaFilter {
    /// Only buildings owned by this player.
    pub player: Option<PlayerId>,
    /// Include the hub building itself in the result.
    pub include_self: bool,
}

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// Entry in the hub-center spatial index: a world-space point plus the hub id.
#[derive(Clone, PartialEq)]
struct HubEntry {
    point: [f32; 2],
    id: EntityId,
}

impl RTreeObject for HubEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for HubEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── ServiceAreaIndex ──────────────────────────────────────────────────────────

/// Owns every hub's `ServiceArea` and answers radius-membership queries.
///
/// Created empty and passed by reference into the simulation tick — an
/// explicit owned collection, not an ambient global.
#[derive(Default)]
pub struct ServiceAreaIndex {
    areas: FxHashMap<EntityId, ServiceArea>,
    centers: RTree<HubEntry>,
}

impl ServiceAreaIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the service area for `building`.
    ///
    /// The radius is clamped to `[MIN_SERVICE_RADIUS, MAX_SERVICE_RADIUS]`.
    /// Returns the stored area.
    pub fn create(
        &mut self,
        building: EntityId,
        player: PlayerId,
        center: TileCoord,
        radius: u32,
    ) -> ServiceArea {
        if let Some(old) = self.areas.remove(&building) {
            self.centers.remove(&HubEntry { point: old.center.world_pos(), id: building });
        }
        let area = ServiceArea {
            building,
            player,
            center,
            radius: radius.clamp(MIN_SERVICE_RADIUS, MAX_SERVICE_RADIUS),
        };
        self.areas.insert(building, area);
        self.centers.insert(HubEntry { point: center.world_pos(), id: building });
        area
    }

    /// Remove the service area of a destroyed hub.  `false` if absent.
    pub fn remove(&mut self, building: EntityId) -> bool {
        match self.areas.remove(&building) {
            Some(old) => {
                self.centers.remove(&HubEntry { point: old.center.world_pos(), id: building });
                true
            }
            None => false,
        }
    }

    pub fn get(&self, building: EntityId) -> Option<&ServiceArea> {
        self.areas.get(&building)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Change a hub's radius (clamped).  Emits `ServiceAreaChanged`.
    /// Returns `false` if the hub has no area.
    pub fn set_radius(
        &mut self,
        building: EntityId,
        radius: u32,
        tick: Tick,
        sink: &mut dyn EventSink,
    ) -> bool {
        let Some(area) = self.areas.get_mut(&building) else {
            return false;
        };
        area.radius = radius.clamp(MIN_SERVICE_RADIUS, MAX_SERVICE_RADIUS);
        let (center, radius) = (area.center, area.radius);
        sink.emit(tick, &Event::ServiceAreaChanged { building, center, radius });
        true
    }

    /// Move a hub's center (e.g. after a rebuild).  Emits `ServiceAreaChanged`.
    /// Returns `false` if the hub has no area.
    pub fn set_center(
        &mut self,
        building: EntityId,
        center: TileCoord,
        tick: Tick,
        sink: &mut dyn EventSink,
    ) -> bool {
        let Some(area) = self.areas.get_mut(&building) else {
            return false;
        };
        let old_center = area.center;
        area.center = center;
        let radius = area.radius;
        self.centers.remove(&HubEntry { point: old_center.world_pos(), id: building });
        self.centers.insert(HubEntry { point: center.world_pos(), id: building });
        sink.emit(tick, &Event::ServiceAreaChanged { building, center, radius });
        true
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All live hubs whose area contains `tile`, ascending by id.
    ///
    /// Hubs whose backing building has been destroyed are skipped even if
    /// their area record still exists.
    pub fn hubs_serving_position(
        &self,
        tile: TileCoord,
        provider: &dyn BuildingProvider,
    ) -> Vec<EntityId> {
        // World-space pre-filter: a serving hub's center is at hex distance
        // ≤ MAX_SERVICE_RADIUS, hence at world distance ≤ MAX_SERVICE_RADIUS.
        let max_d = (MAX_SERVICE_RADIUS + 1) as f32;
        let mut hubs: Vec<EntityId> = self
            .centers
            .locate_within_distance(tile.world_pos(), max_d * max_d)
            .filter_map(|entry| self.areas.get(&entry.id))
            .filter(|area| area.contains(tile) && provider.building_exists(area.building))
            .map(|area| area.building)
            .collect();
        hubs.sort_unstable();
        hubs
    }

    /// The live hub serving `tile` whose center is hex-nearest to it.
    /// Ties break toward the lower building id.  `None` when nothing serves
    /// the tile.
    pub fn nearest_hub_for_position(
        &self,
        tile: TileCoord,
        provider: &dyn BuildingProvider,
    ) -> Option<EntityId> {
        self.hubs_serving_position(tile, provider)
            .into_iter()
            .min_by_key(|&hub| (self.areas[&hub].center.hex_distance(tile), hub))
    }

    /// Hubs serving **both** positions — the candidates able to cover an
    /// entire pickup→deliver route.  Ascending by id.
    pub fn hubs_serving_both(
        &self,
        a: TileCoord,
        b: TileCoord,
        provider: &dyn BuildingProvider,
    ) -> Vec<EntityId> {
        let serving_b = self.hubs_serving_position(b, provider);
        self.hubs_serving_position(a, provider)
            .into_iter()
            .filter(|hub| serving_b.contains(hub))
            .collect()
    }

    /// All live buildings inside `area`, optionally player-filtered and
    /// optionally excluding the hub itself.  Ascending by id.
    pub fn buildings_in_area(
        &self,
        area: &ServiceArea,
        provider: &dyn BuildingProvider,
        filter: AreaFilter,
    ) -> Vec<EntityId> {
        provider
            .building_ids()
            .into_iter()
            .filter(|&id| filter.include_self || id != area.building)
            .filter(|&id| match filter.player {
                Some(player) => provider.building_player(id) == Some(player),
                None => true,
            })
            .filter(|&id| {
                provider
                    .building_pos(id)
                    .is_some_and(|pos| area.contains(pos))
            })
            .collect()
    }
}
