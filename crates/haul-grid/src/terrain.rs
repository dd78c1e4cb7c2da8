//! Terrain grid: per-tile ground category and elevation.
//!
//! # Data layout
//!
//! Both arrays are flat, row-major (`y * width + x`), sized exactly
//! `width * height`.  The grid is an immutable snapshot from the tick loop's
//! point of view: movement and pathfinding only read it; mutation happens at
//! world-construction time.

use haul_core::TileCoord;

use crate::{GridError, GridResult};

// ── GroundType ────────────────────────────────────────────────────────────────

/// Per-tile terrain category.
///
/// Passability is a property of the category alone; elevation differences
/// add path cost but never block movement.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroundType {
    #[default]
    Grass,
    Sand,
    Dirt,
    Mountain,
    Water,
    Rock,
}

impl GroundType {
    /// `true` if units may stand on and traverse this category.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, GroundType::Water | GroundType::Rock)
    }
}

// ── TerrainGrid ───────────────────────────────────────────────────────────────

/// Read-only view of the world's ground: category and height per tile.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    ground_type: Vec<GroundType>,
    ground_height: Vec<u8>,
}

impl TerrainGrid {
    /// A flat, all-grass grid at elevation 0.
    pub fn flat(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ground_type: vec![GroundType::Grass; width * height],
            ground_height: vec![0; width * height],
        }
    }

    /// Build from pre-loaded arrays, validating their lengths.
    pub fn from_parts(
        width: usize,
        height: usize,
        ground_type: Vec<GroundType>,
        ground_height: Vec<u8>,
    ) -> GridResult<Self> {
        let expected = width * height;
        if ground_type.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                got: ground_type.len(),
                what: "ground_type",
            });
        }
        if ground_height.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                got: ground_height.len(),
                what: "ground_height",
            });
        }
        Ok(Self { width, height, ground_type, ground_height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `true` if `tile` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, tile: TileCoord) -> bool {
        tile.x >= 0
            && tile.y >= 0
            && (tile.x as usize) < self.width
            && (tile.y as usize) < self.height
    }

    /// Ground category at `tile`.
    ///
    /// # Panics
    /// Panics if `tile` is out of bounds; check `in_bounds` first.
    #[inline]
    pub fn ground_at(&self, tile: TileCoord) -> GroundType {
        self.ground_type[tile.index(self.width)]
    }

    /// Elevation at `tile` (0–255).
    ///
    /// # Panics
    /// Panics if `tile` is out of bounds; check `in_bounds` first.
    #[inline]
    pub fn height_at(&self, tile: TileCoord) -> u8 {
        self.ground_height[tile.index(self.width)]
    }

    /// `true` if `tile` is in bounds and its category is passable.
    #[inline]
    pub fn is_passable(&self, tile: TileCoord) -> bool {
        self.in_bounds(tile) && self.ground_at(tile).is_passable()
    }

    /// Set the ground category of one tile (world-construction time only).
    ///
    /// # Panics
    /// Panics if `tile` is out of bounds.
    pub fn set_ground(&mut self, tile: TileCoord, ground: GroundType) {
        assert!(self.in_bounds(tile), "set_ground out of bounds: {tile}");
        let idx = tile.index(self.width);
        self.ground_type[idx] = ground;
    }

    /// Set the elevation of one tile (world-construction time only).
    ///
    /// # Panics
    /// Panics if `tile` is out of bounds.
    pub fn set_height(&mut self, tile: TileCoord, elevation: u8) {
        assert!(self.in_bounds(tile), "set_height out of bounds: {tile}");
        let idx = tile.index(self.width);
        self.ground_height[idx] = elevation;
    }
}
