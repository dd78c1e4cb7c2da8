//! Pathfinding trait and default A* implementation.
//!
//! # Pluggability
//!
//! The sim crate calls pathfinding via the [`Pathfinder`] trait, so
//! applications can swap in custom implementations (hierarchical search,
//! flow fields) without touching the movement core.  The default
//! [`AstarPathfinder`] covers the game's needs.
//!
//! # Cost units
//!
//! All costs are integer **milli-tiles** (u32): a flat step costs
//! [`STEP_COST_MILLI`], plus [`HEIGHT_COST_MILLI`] per unit of elevation
//! difference.  Integer costs keep frontier ordering exact — no float
//! comparisons, no platform-dependent ties.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use haul_core::TileCoord;
use rustc_hash::FxHashMap;

use crate::{OccupancyMap, TerrainGrid};

/// Cost of one flat step, in milli-tiles.
pub const STEP_COST_MILLI: u32 = 1000;

/// Extra cost per unit of |Δelevation| across an edge, in milli-tiles.
/// Steeper edges cost more, but height never makes an edge impassable.
pub const HEIGHT_COST_MILLI: u32 = 60;

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable path search over the hex grid.
///
/// `find_path` returns the waypoint sequence **excluding** the start tile and
/// **including** the goal tile, in traversal order.  `Some(vec![])` means the
/// start already is the goal.  `None` means no route exists — a normal,
/// expected outcome that callers must check, never an error.
pub trait Pathfinder {
    fn find_path(
        &self,
        start: TileCoord,
        goal: TileCoord,
        terrain: &TerrainGrid,
        occupancy: &OccupancyMap,
    ) -> Option<Vec<TileCoord>>;
}

// ── AstarPathfinder ───────────────────────────────────────────────────────────

/// A* over the six hex neighbors.
///
/// Tile admission rules:
/// - out-of-bounds or terrain-impassable tiles are never expanded;
/// - occupied tiles are excluded, **except the goal itself** — pathfinding
///   permits a currently occupied goal and leaves arrival resolution
///   (push protocols, waiting) to the caller.
///
/// Determinism: the frontier orders on `(f_cost, insertion_seq)`, so equal
/// cost ties always resolve to the first-found entry and identical inputs
/// yield identical paths.
pub struct AstarPathfinder;

impl Pathfinder for AstarPathfinder {
    fn find_path(
        &self,
        start: TileCoord,
        goal: TileCoord,
        terrain: &TerrainGrid,
        occupancy: &OccupancyMap,
    ) -> Option<Vec<TileCoord>> {
        astar(start, goal, terrain, occupancy)
    }
}

// ── A* internals ──────────────────────────────────────────────────────────────

/// Cost of stepping from `a` onto `b`, in milli-tiles.
#[inline]
fn step_cost(terrain: &TerrainGrid, a: TileCoord, b: TileCoord) -> u32 {
    let dh = terrain.height_at(a).abs_diff(terrain.height_at(b)) as u32;
    STEP_COST_MILLI + HEIGHT_COST_MILLI * dh
}

/// Admissible heuristic: hex distance at flat-step cost (height penalties
/// only ever add to the true cost).
#[inline]
fn heuristic(tile: TileCoord, goal: TileCoord) -> u32 {
    tile.hex_distance(goal) * STEP_COST_MILLI
}

fn astar(
    start: TileCoord,
    goal: TileCoord,
    terrain: &TerrainGrid,
    occupancy: &OccupancyMap,
) -> Option<Vec<TileCoord>> {
    if start == goal {
        return Some(vec![]);
    }
    if !terrain.is_passable(goal) || !terrain.in_bounds(start) {
        return None;
    }

    // best[t] = best known cost (milli-tiles) to reach t.
    let mut best: FxHashMap<TileCoord, u32> = FxHashMap::default();
    let mut came_from: FxHashMap<TileCoord, TileCoord> = FxHashMap::default();
    best.insert(start, 0);

    // Min-heap on (f_cost, seq, tile); Reverse turns BinaryHeap into a
    // min-heap.  `seq` is a monotone insertion counter — the deterministic
    // first-found tie-break.
    let mut heap: BinaryHeap<Reverse<(u32, u64, TileCoord)>> = BinaryHeap::new();
    heap.push(Reverse((heuristic(start, goal), 0, start)));
    let mut seq: u64 = 1;

    while let Some(Reverse((f, _, tile))) = heap.pop() {
        let g = best[&tile];
        if tile == goal {
            return Some(reconstruct(&came_from, start, goal));
        }
        // Skip stale heap entries superseded by a cheaper rediscovery.
        if f > g + heuristic(tile, goal) {
            continue;
        }

        for neighbor in tile.neighbors() {
            if !terrain.is_passable(neighbor) {
                continue;
            }
            if neighbor != goal && occupancy.occupant(neighbor).is_some() {
                continue;
            }

            let tentative = g + step_cost(terrain, tile, neighbor);
            if tentative < *best.get(&neighbor).unwrap_or(&u32::MAX) {
                best.insert(neighbor, tentative);
                came_from.insert(neighbor, tile);
                heap.push(Reverse((tentative + heuristic(neighbor, goal), seq, neighbor)));
                seq += 1;
            }
        }
    }

    None
}

fn reconstruct(
    came_from: &FxHashMap<TileCoord, TileCoord>,
    start: TileCoord,
    goal: TileCoord,
) -> Vec<TileCoord> {
    let mut path = Vec::new();
    let mut cur = goal;
    while cur != start {
        path.push(cur);
        cur = came_from[&cur];
    }
    path.reverse();
    path
}
