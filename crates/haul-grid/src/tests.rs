//! Unit tests for haul-grid.

use haul_core::{EntityId, PlayerId, TileCoord};

use crate::{
    AreaFilter, AstarPathfinder, BuildingProvider, GroundType, OccupancyMap, Pathfinder,
    ServiceAreaIndex, TerrainGrid, MAX_SERVICE_RADIUS, MIN_SERVICE_RADIUS,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(x: i32, y: i32) -> TileCoord {
    TileCoord::new(x, y)
}

/// Minimal building table for service-area tests.
#[derive(Default)]
struct TestBuildings {
    buildings: Vec<(EntityId, PlayerId, TileCoord)>,
}

impl TestBuildings {
    fn add(&mut self, id: u32, player: u16, pos: TileCoord) {
        self.buildings.push((EntityId(id), PlayerId(player), pos));
        self.buildings.sort_by_key(|&(id, _, _)| id);
    }

    fn remove(&mut self, id: u32) {
        self.buildings.retain(|&(b, _, _)| b != EntityId(id));
    }
}

impl BuildingProvider for TestBuildings {
    fn building_exists(&self, id: EntityId) -> bool {
        self.buildings.iter().any(|&(b, _, _)| b == id)
    }

    fn building_pos(&self, id: EntityId) -> Option<TileCoord> {
        self.buildings
            .iter()
            .find(|&&(b, _, _)| b == id)
            .map(|&(_, _, pos)| pos)
    }

    fn building_player(&self, id: EntityId) -> Option<PlayerId> {
        self.buildings
            .iter()
            .find(|&&(b, _, _)| b == id)
            .map(|&(_, player, _)| player)
    }

    fn building_ids(&self) -> Vec<EntityId> {
        self.buildings.iter().map(|&(b, _, _)| b).collect()
    }
}

// ── Terrain ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod terrain {
    use super::*;
    use crate::GridError;

    #[test]
    fn flat_grid_is_passable_grass() {
        let g = TerrainGrid::flat(8, 8);
        assert!(g.is_passable(t(0, 0)));
        assert_eq!(g.ground_at(t(7, 7)), GroundType::Grass);
        assert_eq!(g.height_at(t(3, 3)), 0);
    }

    #[test]
    fn water_and_rock_impassable() {
        let mut g = TerrainGrid::flat(4, 4);
        g.set_ground(t(1, 1), GroundType::Water);
        g.set_ground(t(2, 2), GroundType::Rock);
        g.set_ground(t(3, 3), GroundType::Mountain);
        assert!(!g.is_passable(t(1, 1)));
        assert!(!g.is_passable(t(2, 2)));
        assert!(g.is_passable(t(3, 3)));
    }

    #[test]
    fn out_of_bounds_is_impassable() {
        let g = TerrainGrid::flat(4, 4);
        assert!(!g.is_passable(t(-1, 0)));
        assert!(!g.is_passable(t(4, 0)));
        assert!(!g.is_passable(t(0, 4)));
    }

    #[test]
    fn from_parts_validates_lengths() {
        let err = TerrainGrid::from_parts(2, 2, vec![GroundType::Grass; 3], vec![0; 4]);
        assert!(matches!(
            err,
            Err(GridError::DimensionMismatch { what: "ground_type", .. })
        ));
        let ok = TerrainGrid::from_parts(2, 2, vec![GroundType::Grass; 4], vec![0; 4]);
        assert!(ok.is_ok());
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use super::*;

    #[test]
    fn claim_and_release() {
        let mut occ = OccupancyMap::new();
        assert!(occ.claim(t(1, 1), EntityId(7)));
        assert_eq!(occ.occupant(t(1, 1)), Some(EntityId(7)));
        assert!(!occ.claim(t(1, 1), EntityId(8)), "tile already held");
        assert!(occ.claim(t(1, 1), EntityId(7)), "re-claiming own tile is fine");

        occ.release(t(1, 1), EntityId(7));
        assert!(occ.is_free(t(1, 1)));
    }

    #[test]
    fn relocate_leaves_no_stale_entry() {
        let mut occ = OccupancyMap::new();
        occ.claim(t(1, 1), EntityId(7));
        assert!(occ.relocate(t(1, 1), t(2, 1), EntityId(7)));
        assert!(occ.is_free(t(1, 1)));
        assert_eq!(occ.occupant(t(2, 1)), Some(EntityId(7)));
        assert_eq!(occ.len(), 1);
    }

    #[test]
    fn relocate_blocked_changes_nothing() {
        let mut occ = OccupancyMap::new();
        occ.claim(t(1, 1), EntityId(7));
        occ.claim(t(2, 1), EntityId(8));
        assert!(!occ.relocate(t(1, 1), t(2, 1), EntityId(7)));
        assert_eq!(occ.occupant(t(1, 1)), Some(EntityId(7)));
        assert_eq!(occ.occupant(t(2, 1)), Some(EntityId(8)));
    }
}

// ── Pathfinding ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use super::*;

    fn find(
        start: TileCoord,
        goal: TileCoord,
        terrain: &TerrainGrid,
        occ: &OccupancyMap,
    ) -> Option<Vec<TileCoord>> {
        AstarPathfinder.find_path(start, goal, terrain, occ)
    }

    #[test]
    fn straight_open_row() {
        let g = TerrainGrid::flat(16, 4);
        let occ = OccupancyMap::new();
        let path = find(t(2, 2), t(7, 2), &g, &occ).unwrap();
        // Excludes start, includes goal: exactly hex_distance tiles.
        assert_eq!(path.len(), 5);
        assert_eq!(path.last(), Some(&t(7, 2)));
        assert!(!path.contains(&t(2, 2)));
    }

    #[test]
    fn start_equals_goal_is_empty() {
        let g = TerrainGrid::flat(4, 4);
        let occ = OccupancyMap::new();
        assert_eq!(find(t(1, 1), t(1, 1), &g, &occ), Some(vec![]));
    }

    #[test]
    fn impassable_goal_is_none() {
        let mut g = TerrainGrid::flat(8, 8);
        g.set_ground(t(5, 5), GroundType::Water);
        let occ = OccupancyMap::new();
        assert_eq!(find(t(1, 1), t(5, 5), &g, &occ), None);
    }

    #[test]
    fn walled_goal_is_none() {
        let mut g = TerrainGrid::flat(10, 10);
        let goal = t(5, 4);
        for n in goal.neighbors() {
            g.set_ground(n, GroundType::Rock);
        }
        let occ = OccupancyMap::new();
        assert_eq!(find(t(1, 1), goal, &g, &occ), None);
    }

    #[test]
    fn routes_around_occupied_tiles() {
        let g = TerrainGrid::flat(12, 4);
        let mut occ = OccupancyMap::new();
        occ.claim(t(4, 2), EntityId(99));
        let path = find(t(2, 2), t(6, 2), &g, &occ).unwrap();
        assert!(!path.contains(&t(4, 2)));
        assert_eq!(path.last(), Some(&t(6, 2)));
        // Every 4-step path between same-row tiles at distance 4 is the
        // straight row, so dodging one tile costs exactly one extra step.
        assert_eq!(path.len(), 5);
    }

    #[test]
    fn occupied_goal_is_still_reachable() {
        let g = TerrainGrid::flat(8, 4);
        let mut occ = OccupancyMap::new();
        occ.claim(t(5, 2), EntityId(99));
        let path = find(t(2, 2), t(5, 2), &g, &occ).unwrap();
        assert_eq!(path.last(), Some(&t(5, 2)));
    }

    #[test]
    fn fully_surrounded_start_blocked_by_occupants() {
        let g = TerrainGrid::flat(10, 10);
        let mut occ = OccupancyMap::new();
        let start = t(5, 4);
        for (i, n) in start.neighbors().into_iter().enumerate() {
            occ.claim(n, EntityId(10 + i as u32));
        }
        assert_eq!(find(start, t(8, 8), &g, &occ), None);
    }

    #[test]
    fn height_penalty_prefers_flat_route() {
        // A ridge across the direct row makes the flat detour cheaper.
        let mut g = TerrainGrid::flat(12, 6);
        for y in 0..6 {
            g.set_height(t(5, y), 200);
        }
        g.set_height(t(5, 0), 0); // flat gap at the top row
        let occ = OccupancyMap::new();
        let path = find(t(2, 2), t(8, 2), &g, &occ).unwrap();
        let crossing = path.iter().find(|p| p.x == 5).unwrap();
        assert_eq!(crossing.y, 0, "route should cross the ridge at the flat gap");
    }

    #[test]
    fn steep_terrain_is_costly_but_never_blocked() {
        let mut g = TerrainGrid::flat(6, 2);
        for x in 0..6 {
            g.set_height(t(x, 0), if x % 2 == 0 { 0 } else { 255 });
        }
        let occ = OccupancyMap::new();
        // Only one row is wide enough... route exists despite max elevation swings.
        let path = find(t(0, 0), t(5, 0), &g, &occ);
        assert!(path.is_some());
    }

    #[test]
    fn deterministic_for_identical_inputs() {
        let mut g = TerrainGrid::flat(16, 16);
        for y in 3..13 {
            g.set_ground(t(8, y), GroundType::Rock);
        }
        let occ = OccupancyMap::new();
        let a = find(t(2, 8), t(14, 8), &g, &occ).unwrap();
        let b = find(t(2, 8), t(14, 8), &g, &occ).unwrap();
        assert_eq!(a, b);
    }
}

// ── Service areas ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod service_area {
    use super::*;
    use haul_core::{Event, EventLog, Tick};

    fn hub_world() -> (ServiceAreaIndex, TestBuildings) {
        let mut buildings = TestBuildings::default();
        buildings.add(100, 1, t(50, 50)); // the hub itself
        let mut index = ServiceAreaIndex::new();
        index.create(EntityId(100), PlayerId(1), t(50, 50), 10);
        (index, buildings)
    }

    #[test]
    fn membership_boundary() {
        let (index, _) = hub_world();
        let area = *index.get(EntityId(100)).unwrap();
        assert!(area.contains(t(60, 50)), "distance 10 is inside");
        assert!(!area.contains(t(61, 50)), "distance 11 is outside");
    }

    #[test]
    fn radius_clamped_on_create_and_set() {
        let mut index = ServiceAreaIndex::new();
        let area = index.create(EntityId(1), PlayerId(0), t(5, 5), 999);
        assert_eq!(area.radius, MAX_SERVICE_RADIUS);

        let mut log = EventLog::new();
        assert!(index.set_radius(EntityId(1), 0, Tick(3), &mut log));
        assert_eq!(index.get(EntityId(1)).unwrap().radius, MIN_SERVICE_RADIUS);
        assert!(matches!(
            log.entries[0].1,
            Event::ServiceAreaChanged { radius, .. } if radius == MIN_SERVICE_RADIUS
        ));
    }

    #[test]
    fn set_radius_unknown_hub_is_false() {
        let mut index = ServiceAreaIndex::new();
        let mut log = EventLog::new();
        assert!(!index.set_radius(EntityId(9), 5, Tick(0), &mut log));
        assert!(log.is_empty());
    }

    #[test]
    fn hubs_serving_position_requires_live_building() {
        let (index, mut buildings) = hub_world();
        assert_eq!(
            index.hubs_serving_position(t(55, 50), &buildings),
            vec![EntityId(100)]
        );
        buildings.remove(100);
        assert!(index.hubs_serving_position(t(55, 50), &buildings).is_empty());
        assert_eq!(index.nearest_hub_for_position(t(55, 50), &buildings), None);
    }

    #[test]
    fn nearest_hub_picks_hex_closest() {
        let mut buildings = TestBuildings::default();
        buildings.add(100, 1, t(50, 50));
        buildings.add(101, 1, t(58, 50));
        let mut index = ServiceAreaIndex::new();
        index.create(EntityId(100), PlayerId(1), t(50, 50), 10);
        index.create(EntityId(101), PlayerId(1), t(58, 50), 10);

        // (56,50): distance 6 from hub 100, distance 2 from hub 101.
        assert_eq!(
            index.nearest_hub_for_position(t(56, 50), &buildings),
            Some(EntityId(101))
        );
        // Equidistant point (54,50): ties break to the lower id.
        assert_eq!(
            index.nearest_hub_for_position(t(54, 50), &buildings),
            Some(EntityId(100))
        );
    }

    #[test]
    fn hubs_serving_both_is_intersection() {
        let mut buildings = TestBuildings::default();
        buildings.add(100, 1, t(50, 50));
        buildings.add(101, 1, t(70, 50));
        let mut index = ServiceAreaIndex::new();
        index.create(EntityId(100), PlayerId(1), t(50, 50), 10);
        index.create(EntityId(101), PlayerId(1), t(70, 50), 10);

        // Both endpoints near hub 100 only.
        assert_eq!(
            index.hubs_serving_both(t(48, 50), t(54, 50), &buildings),
            vec![EntityId(100)]
        );
        // Endpoints split between the two hubs: no shared hub.
        assert!(index
            .hubs_serving_both(t(48, 50), t(68, 50), &buildings)
            .is_empty());
    }

    #[test]
    fn buildings_in_area_filters() {
        let mut buildings = TestBuildings::default();
        buildings.add(100, 1, t(50, 50)); // hub
        buildings.add(200, 1, t(53, 50)); // in range, player 1
        buildings.add(201, 2, t(55, 50)); // in range, player 2
        buildings.add(202, 1, t(80, 50)); // out of range
        let mut index = ServiceAreaIndex::new();
        let area = index.create(EntityId(100), PlayerId(1), t(50, 50), 10);

        let all = index.buildings_in_area(&area, &buildings, AreaFilter::default());
        assert_eq!(all, vec![EntityId(200), EntityId(201)]);

        let mine = index.buildings_in_area(
            &area,
            &buildings,
            AreaFilter { player: Some(PlayerId(1)), include_self: false },
        );
        assert_eq!(mine, vec![EntityId(200)]);

        let with_self = index.buildings_in_area(
            &area,
            &buildings,
            AreaFilter { player: None, include_self: true },
        );
        assert_eq!(with_self, vec![EntityId(100), EntityId(200), EntityId(201)]);
    }

    #[test]
    fn remove_hub_area() {
        let (mut index, buildings) = hub_world();
        assert!(index.remove(EntityId(100)));
        assert!(!index.remove(EntityId(100)));
        assert!(index.hubs_serving_position(t(50, 50), &buildings).is_empty());
    }

    #[test]
    fn set_center_moves_area() {
        let (mut index, buildings) = hub_world();
        let mut log = EventLog::new();
        assert!(index.set_center(EntityId(100), t(30, 30), Tick(1), &mut log));
        assert!(index.hubs_serving_position(t(55, 50), &buildings).is_empty());
        assert_eq!(
            index.hubs_serving_position(t(32, 30), &buildings),
            vec![EntityId(100)]
        );
        assert_eq!(log.len(), 1);
    }
}
