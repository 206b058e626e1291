//! Dig and fill rules over the tile grid.
//!
//! Digging turns ground into open space; filling does the reverse, guarded
//! so an agent can never seal itself inside a wall. Both are no-ops rather
//! than errors when the tile is already in the requested state; only
//! out-of-bounds coordinates are reported to the caller.

use crate::geometry::Rect;
use crate::grid::{GridError, TileGrid, TileState};

/// What a dig attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigOutcome {
    /// Blocked -> Passable.
    Dug,
    /// Tile was already open; nothing changed.
    AlreadyOpen,
}

/// What a fill attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    /// Passable -> Blocked.
    Filled,
    /// Tile was already solid; nothing changed.
    AlreadySolid,
    /// The agent's bounds overlap the tile; filling would entomb it.
    WouldEntomb,
}

/// Dig out a tile.
pub fn dig(grid: &mut TileGrid, x: i32, y: i32) -> Result<DigOutcome, GridError> {
    match grid.tile_at(x, y)? {
        TileState::Blocked => {
            grid.set_tile(x, y, TileState::Passable)?;
            Ok(DigOutcome::Dug)
        }
        TileState::Passable => Ok(DigOutcome::AlreadyOpen),
    }
}

/// Backfill a tile, refusing when the acting agent overlaps it.
pub fn fill(
    grid: &mut TileGrid,
    x: i32,
    y: i32,
    agent_bounds: &Rect,
) -> Result<FillOutcome, GridError> {
    match grid.tile_at(x, y)? {
        TileState::Blocked => Ok(FillOutcome::AlreadySolid),
        TileState::Passable => {
            if agent_bounds.overlaps(&TileGrid::tile_rect(x, y)) {
                Ok(FillOutcome::WouldEntomb)
            } else {
                grid.set_tile(x, y, TileState::Blocked)?;
                Ok(FillOutcome::Filled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec2;

    fn solid_grid() -> TileGrid {
        TileGrid::new(8, 8, TileState::Blocked)
    }

    #[test]
    fn test_dig_opens_tile() {
        let mut grid = solid_grid();
        assert_eq!(dig(&mut grid, 3, 2), Ok(DigOutcome::Dug));
        assert_eq!(grid.tile_at(3, 2), Ok(TileState::Passable));
    }

    #[test]
    fn test_dig_is_idempotent() {
        let mut grid = solid_grid();
        dig(&mut grid, 3, 2).unwrap();
        assert_eq!(dig(&mut grid, 3, 2), Ok(DigOutcome::AlreadyOpen));
        assert_eq!(grid.tile_at(3, 2), Ok(TileState::Passable));
    }

    #[test]
    fn test_dig_out_of_bounds_is_error() {
        let mut grid = solid_grid();
        assert!(dig(&mut grid, 99, 0).is_err());
    }

    #[test]
    fn test_fill_open_tile_away_from_agent() {
        let mut grid = solid_grid();
        dig(&mut grid, 3, 2).unwrap();

        let far_agent = Rect::from_center(Vec2::new(500.0, 500.0), 8.0, 8.0);
        assert_eq!(fill(&mut grid, 3, 2, &far_agent), Ok(FillOutcome::Filled));
        assert_eq!(grid.tile_at(3, 2), Ok(TileState::Blocked));
    }

    #[test]
    fn test_fill_refuses_when_agent_overlaps() {
        let mut grid = solid_grid();
        dig(&mut grid, 3, 2).unwrap();

        // Agent centered inside the target tile.
        let center = TileGrid::tile_rect(3, 2).center();
        let agent = Rect::from_center(center, 8.0, 8.0);
        assert_eq!(fill(&mut grid, 3, 2, &agent), Ok(FillOutcome::WouldEntomb));
        assert_eq!(grid.tile_at(3, 2), Ok(TileState::Passable));

        // Even a corner graze refuses.
        let graze = Rect::from_center(
            TileGrid::tile_rect(3, 2).min - Vec2::new(1.0, 1.0),
            8.0,
            8.0,
        );
        assert_eq!(fill(&mut grid, 3, 2, &graze), Ok(FillOutcome::WouldEntomb));
    }

    #[test]
    fn test_fill_allows_flush_contact() {
        let mut grid = solid_grid();
        dig(&mut grid, 3, 2).unwrap();
        dig(&mut grid, 2, 2).unwrap();

        // Agent flush against the tile's left edge, not overlapping it.
        let tile = TileGrid::tile_rect(3, 2);
        let agent = Rect::from_center(Vec2::new(tile.min.x - 8.0, tile.center().y), 8.0, 8.0);
        assert_eq!(fill(&mut grid, 3, 2, &agent), Ok(FillOutcome::Filled));
    }

    #[test]
    fn test_fill_solid_tile_is_noop() {
        let mut grid = solid_grid();
        let agent = Rect::from_center(Vec2::new(500.0, 500.0), 8.0, 8.0);
        assert_eq!(fill(&mut grid, 1, 1, &agent), Ok(FillOutcome::AlreadySolid));
    }
}
