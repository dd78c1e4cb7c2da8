//! Hex tile coordinates and the hex distance metric.
//!
//! # Layout
//!
//! Tiles live on an **odd-row offset** hex grid: integer `(x, y)` pairs where
//! odd rows are shifted half a tile east.  Each tile has six neighbors whose
//! `(dx, dy)` deltas depend on the row's parity.
//!
//! # Two distance notions
//!
//! - [`TileCoord::hex_distance`] — the integer tile metric (offset → cube
//!   conversion, then `max(|dq|, |dr|, |dq + dr|)`).  All game rules use this.
//! - [`TileCoord::world_distance`] — Euclidean distance between tile centers
//!   in world units, with rows spaced [`Y_SCALE`] apart vertically.  Used for
//!   spatial indexing and float tie-breaking only, never for game rules.

use std::fmt;

/// Vertical spacing of hex rows in world units: `(√3 / 2) · 0.999999`.
///
/// The 0.999999 factor nudges the spacing off the exact value so that
/// float comparisons at ring boundaries never land on an exact tie.
pub const Y_SCALE: f32 = 0.866_024_5;

// ── HexDir ────────────────────────────────────────────────────────────────────

/// The six hex directions in fixed clockwise order.
///
/// The order is part of the contract: neighbor iteration, path expansion,
/// and push-resolution scans all walk directions in this sequence (modulo an
/// explicit shuffle for the randomized searches).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexDir {
    NorthEast,
    East,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl HexDir {
    /// All six directions in clockwise order starting at north-east.
    pub const ALL: [HexDir; 6] = [
        HexDir::NorthEast,
        HexDir::East,
        HexDir::SouthEast,
        HexDir::SouthWest,
        HexDir::West,
        HexDir::NorthWest,
    ];

    /// `(dx, dy)` delta for this direction given the row parity of the
    /// starting tile (`odd_row = y & 1 == 1`).
    #[inline]
    pub fn delta(self, odd_row: bool) -> (i32, i32) {
        use HexDir::*;
        if odd_row {
            match self {
                NorthEast => (1, -1),
                East => (1, 0),
                SouthEast => (1, 1),
                SouthWest => (0, 1),
                West => (-1, 0),
                NorthWest => (0, -1),
            }
        } else {
            match self {
                NorthEast => (0, -1),
                East => (1, 0),
                SouthEast => (0, 1),
                SouthWest => (-1, 1),
                West => (-1, 0),
                NorthWest => (-1, -1),
            }
        }
    }
}

// ── TileCoord ─────────────────────────────────────────────────────────────────

/// A tile position on the odd-row offset hex grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileCoord {
    pub x: i32,
    pub y: i32,
}

impl TileCoord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// `true` if this tile sits on an odd (east-shifted) row.
    #[inline]
    pub fn odd_row(self) -> bool {
        self.y & 1 == 1
    }

    /// The neighbor one step in `dir`.
    #[inline]
    pub fn neighbor(self, dir: HexDir) -> TileCoord {
        let (dx, dy) = dir.delta(self.odd_row());
        TileCoord::new(self.x + dx, self.y + dy)
    }

    /// The six neighbors in fixed clockwise order (NE, E, SE, SW, W, NW).
    pub fn neighbors(self) -> [TileCoord; 6] {
        HexDir::ALL.map(|d| self.neighbor(d))
    }

    /// Offset → axial conversion: `(q, r)` with `r = y`.
    #[inline]
    pub fn to_axial(self) -> (i32, i32) {
        let q = self.x - (self.y - (self.y & 1)) / 2;
        (q, self.y)
    }

    /// Hex tile distance: the minimum number of neighbor steps between two
    /// tiles.  Computed via cube coordinates: `max(|dq|, |dr|, |dq + dr|)`.
    ///
    /// Satisfies `d(a, a) = 0`, symmetry, and the triangle inequality; every
    /// direct neighbor is at distance 1.
    pub fn hex_distance(self, other: TileCoord) -> u32 {
        let (q1, r1) = self.to_axial();
        let (q2, r2) = other.to_axial();
        let dq = q2 - q1;
        let dr = r2 - r1;
        dq.abs().max(dr.abs()).max((dq + dr).abs()) as u32
    }

    /// `true` if `other` is one of this tile's six neighbors.
    pub fn is_adjacent(self, other: TileCoord) -> bool {
        self != other && self.hex_distance(other) == 1
    }

    /// Center of this tile in world units: odd rows shift east by half a
    /// tile, rows are [`Y_SCALE`] apart.
    #[inline]
    pub fn world_pos(self) -> [f32; 2] {
        let shift = if self.odd_row() { 0.5 } else { 0.0 };
        [self.x as f32 + shift, self.y as f32 * Y_SCALE]
    }

    /// Euclidean distance between tile centers in world units.
    ///
    /// Every neighbor step has (near-)unit world length, so
    /// `world_distance <= hex_distance` — which is what makes the world-space
    /// R-tree a safe pre-filter for hex-radius queries.
    pub fn world_distance(self, other: TileCoord) -> f32 {
        let a = self.world_pos();
        let b = other.world_pos();
        let dx = b[0] - a[0];
        let dy = b[1] - a[1];
        (dx * dx + dy * dy).sqrt()
    }

    /// Row-major array index (`y * width + x`) for terrain-style flat arrays.
    ///
    /// Callers must have bounds-checked the coordinate first.
    #[inline]
    pub fn index(self, width: usize) -> usize {
        self.y as usize * width + self.x as usize
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
