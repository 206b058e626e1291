//! Fixed-size tile grid with bounds-checked access.
//!
//! The grid is the only collidable geometry in the world. Every cell inside
//! the declared dimensions has a defined state; access outside them is a
//! programmer error surfaced as [`GridError::OutOfBounds`]. Mutation goes
//! through `set_tile` only, so a given call sequence always produces the same
//! grid regardless of caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::TILE_SIZE;
use crate::geometry::{Rect, Vec2};

/// State of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileState {
    /// Solid ground. Collidable, can be dug out.
    Blocked,
    /// Dug-out or water. Agents move through it, can be backfilled.
    Passable,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("tile ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },
}

/// Row-major W x H tile array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGrid {
    width: u32,
    height: u32,
    cells: Vec<TileState>,
}

impl TileGrid {
    /// Create a grid with every cell set to `fill`.
    pub fn new(width: u32, height: u32, fill: TileState) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        if self.in_bounds(x, y) {
            Ok((y as u32 * self.width + x as u32) as usize)
        } else {
            Err(GridError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Result<TileState, GridError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set_tile(&mut self, x: i32, y: i32, state: TileState) -> Result<(), GridError> {
        let i = self.index(x, y)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Collision query. Coordinates outside the grid hold no tiles and are
    /// treated as open space.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.tile_at(x, y) == Ok(TileState::Blocked)
    }

    /// Tile coordinates containing a world-space point.
    pub fn world_to_tile(point: Vec2) -> (i32, i32) {
        (
            (point.x / TILE_SIZE).floor() as i32,
            (point.y / TILE_SIZE).floor() as i32,
        )
    }

    /// World-space rectangle covered by a tile.
    pub fn tile_rect(x: i32, y: i32) -> Rect {
        let min = Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE);
        Rect::new(min, Vec2::new(min.x + TILE_SIZE, min.y + TILE_SIZE))
    }

    /// True if any Blocked tile overlaps the given world-space rectangle.
    pub fn rect_hits_blocked(&self, rect: &Rect) -> bool {
        // Shrink the far edge so a rect flush against a tile boundary does
        // not pull in the neighbouring tile.
        const EDGE_EPS: f32 = 1e-3;
        let (min_tx, min_ty) = Self::world_to_tile(rect.min);
        let (max_tx, max_ty) =
            Self::world_to_tile(Vec2::new(rect.max.x - EDGE_EPS, rect.max.y - EDGE_EPS));

        for ty in min_ty..=max_ty {
            for tx in min_tx..=max_tx {
                if self.is_blocked(tx, ty) {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_round_trip() {
        let mut grid = TileGrid::new(8, 4, TileState::Passable);
        for y in 0..4 {
            for x in 0..8 {
                grid.set_tile(x, y, TileState::Blocked).unwrap();
                assert_eq!(grid.tile_at(x, y), Ok(TileState::Blocked));
                grid.set_tile(x, y, TileState::Passable).unwrap();
                assert_eq!(grid.tile_at(x, y), Ok(TileState::Passable));
            }
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = TileGrid::new(8, 4, TileState::Passable);
        assert!(matches!(
            grid.tile_at(8, 0),
            Err(GridError::OutOfBounds { x: 8, y: 0, .. })
        ));
        assert!(grid.tile_at(-1, 0).is_err());
        assert!(grid.tile_at(0, 4).is_err());
        assert!(grid.set_tile(0, -1, TileState::Blocked).is_err());
    }

    #[test]
    fn test_is_blocked_outside_is_open() {
        let grid = TileGrid::new(2, 2, TileState::Blocked);
        assert!(grid.is_blocked(0, 0));
        assert!(!grid.is_blocked(-1, 0));
        assert!(!grid.is_blocked(0, 5));
    }

    #[test]
    fn test_world_to_tile() {
        assert_eq!(TileGrid::world_to_tile(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(TileGrid::world_to_tile(Vec2::new(31.9, 31.9)), (0, 0));
        assert_eq!(TileGrid::world_to_tile(Vec2::new(32.0, 64.0)), (1, 2));
        assert_eq!(TileGrid::world_to_tile(Vec2::new(-0.1, -5.0)), (-1, -1));
    }

    #[test]
    fn test_rect_hits_blocked() {
        let mut grid = TileGrid::new(4, 4, TileState::Passable);
        grid.set_tile(1, 1, TileState::Blocked).unwrap();

        let inside = Rect::from_center(Vec2::new(48.0, 48.0), 4.0, 4.0);
        assert!(grid.rect_hits_blocked(&inside));

        let flush_left = Rect::new(Vec2::new(0.0, 32.0), Vec2::new(32.0, 64.0));
        assert!(!grid.rect_hits_blocked(&flush_left));

        let clear = Rect::from_center(Vec2::new(100.0, 10.0), 4.0, 4.0);
        assert!(!grid.rect_hits_blocked(&clear));
    }
}
