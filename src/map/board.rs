//! The playable board: a level plus its portals.

use std::collections::HashMap;

use crate::error::Error;
use crate::error::Result;
use crate::geo::Dir;
use crate::geo::Point;
use crate::map::End;
use crate::map::Level;
use crate::map::Portal;
use crate::map::Tile;

/// A level together with the portals threaded through it.
///
/// The board is "real space": everything here is in absolute level
/// coordinates. Observers borrow it immutably while computing their view, so
/// neither tiles nor portals can change halfway through a raycast.
#[derive(Clone, Debug)]
pub struct Board {
  level: Level,
  portals: Vec<Portal>,
  // Invariant: maps every portal endpoint to its portal's index in `portals`
  // and the end it belongs to; no cell hosts two endpoints.
  index: HashMap<Point, (usize, End)>,
}

impl Board {
  /// Creates a new board out of a level and its portals.
  ///
  /// Every portal endpoint must lie inside the level, and no cell may host
  /// more than one endpoint (including both ends of the same portal).
  pub fn new(level: Level, portals: Vec<Portal>) -> Result<Self> {
    let mut index = HashMap::new();
    for (i, portal) in portals.iter().enumerate() {
      for &end in &[End::First, End::Second] {
        let pos = portal.pos(end);
        if !level.contains(pos) {
          return Err(Error::PortalOutOfBounds { portal: i, pos });
        }
        if let Some(&(first, _)) = index.get(&pos) {
          return Err(Error::PortalOverlap {
            first,
            second: i,
            pos,
          });
        }
        index.insert(pos, (i, end));
      }
    }

    let (width, height) = level.size();
    tracing::info!(width, height, portals = portals.len(), "built board");
    Ok(Self {
      level,
      portals,
      index,
    })
  }

  /// Returns the underlying level.
  pub fn level(&self) -> &Level {
    &self.level
  }

  /// Returns the portals on this board, in insertion order.
  pub fn portals(&self) -> &[Portal] {
    &self.portals
  }

  /// Returns the portal with an endpoint at `pos`, and which end it is.
  pub fn portal_at(&self, pos: Point) -> Option<(&Portal, End)> {
    let &(i, end) = self.index.get(&pos)?;
    Some((&self.portals[i], end))
  }

  /// Returns the tile at `pos`.
  ///
  /// Anything outside the level is [`Tile::default()`], which blocks both
  /// movement and vision.
  #[inline]
  pub fn tile(&self, pos: Point) -> Tile {
    self.level.get(pos).unwrap_or_default()
  }

  /// Returns the tile at `(x, y)`. See [`Board::tile()`].
  #[inline]
  pub fn tile_at(&self, x: i64, y: i64) -> Tile {
    self.tile(Point::new(x, y))
  }

  /// Overwrites the tile at `pos`.
  pub fn set_tile(&mut self, pos: Point, tile: Tile) -> Result<()> {
    self.level.set(pos, tile)
  }

  /// Moves a cursor at `pos` one step towards `dir`, going through a portal if
  /// `pos` is a portal endpoint that captures `dir`.
  ///
  /// A teleport replaces the cursor with the other endpoint *before* stepping,
  /// so the cursor comes out next to the exit, still heading along `dir`. The
  /// exit's own facing plays no part.
  pub fn step(&self, pos: Point, dir: Dir) -> Point {
    let mut target = pos;
    if let Some((portal, enter)) = self.portal_at(pos) {
      if portal.captures(enter, dir) {
        target = portal.pos(enter.other());
        tracing::trace!(from = %pos, to = %target, ?dir, "teleport");
      }
    }
    target + dir.step()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::map::Orientation;
  use crate::map::TileKind;

  fn floor(width: usize, height: usize) -> Level {
    Level::new(width, height, Tile::new(TileKind::Floor))
  }

  #[test]
  fn lookups_outside_are_the_default_tile() {
    let board = Board::new(floor(3, 3), vec![]).unwrap();
    assert_eq!(board.tile_at(1, 1).kind(), TileKind::Floor);
    assert_eq!(board.tile_at(3, 0), Tile::default());
    assert_eq!(board.tile_at(-1, 2), Tile::default());
    assert!(board.tile_at(0, 3).is_opaque());
  }

  #[test]
  fn plain_steps() {
    let board = Board::new(floor(3, 3), vec![]).unwrap();
    assert_eq!(board.step(Point::new(1, 1), Dir::UpLeft), Point::new(0, 2));
    // Stepping doesn't care about bounds.
    assert_eq!(board.step(Point::new(0, 0), Dir::Down), Point::new(0, -1));
  }

  #[test]
  fn one_way_portal() {
    let portal =
      Portal::new(Orientation::Horizontal, Point::new(0, 0), Point::new(5, 5))
        .one_way(End::First);
    let board = Board::new(floor(8, 8), vec![portal]).unwrap();

    // Through the face and along both grazing directions.
    assert_eq!(board.step(Point::new(0, 0), Dir::Right), Point::new(6, 5));
    assert_eq!(board.step(Point::new(0, 0), Dir::UpRight), Point::new(6, 6));
    assert_eq!(board.step(Point::new(0, 0), Dir::Down), Point::new(5, 4));

    // Walking parallel to the face is ordinary movement.
    assert_eq!(board.step(Point::new(0, 0), Dir::Up), Point::new(0, 1));

    // The second end faces left, but may not be entered.
    assert_eq!(board.step(Point::new(5, 5), Dir::Left), Point::new(4, 5));
  }

  #[test]
  fn two_way_portal_returns() {
    let portal =
      Portal::new(Orientation::Vertical, Point::new(1, 1), Point::new(6, 2));
    let board = Board::new(floor(8, 8), vec![portal]).unwrap();

    assert_eq!(board.step(Point::new(1, 1), Dir::Up), Point::new(6, 3));
    assert_eq!(board.step(Point::new(6, 2), Dir::Down), Point::new(1, 0));
    // Exit orientation is ignored: stepping right out of the second end keeps
    // heading right.
    assert_eq!(board.step(Point::new(1, 1), Dir::Right), Point::new(7, 2));
  }

  #[test]
  fn rejects_bad_portals() {
    let outside =
      Portal::new(Orientation::Horizontal, Point::new(0, 0), Point::new(9, 0));
    let err = Board::new(floor(4, 4), vec![outside]).unwrap_err();
    assert_eq!(
      err,
      Error::PortalOutOfBounds {
        portal: 0,
        pos: Point::new(9, 0)
      }
    );

    let a =
      Portal::new(Orientation::Horizontal, Point::new(0, 0), Point::new(3, 0));
    let b =
      Portal::new(Orientation::Vertical, Point::new(2, 2), Point::new(3, 0));
    let err = Board::new(floor(4, 4), vec![a, b]).unwrap_err();
    assert_eq!(
      err,
      Error::PortalOverlap {
        first: 0,
        second: 1,
        pos: Point::new(3, 0)
      }
    );

    let degenerate =
      Portal::new(Orientation::Vertical, Point::new(1, 1), Point::new(1, 1));
    assert!(Board::new(floor(4, 4), vec![degenerate]).is_err());
  }

  #[test]
  fn edits_between_passes() {
    let mut board = Board::new(floor(2, 2), vec![]).unwrap();
    board
      .set_tile(Point::new(1, 0), Tile::new(TileKind::Wall))
      .unwrap();
    assert!(board.tile_at(1, 0).is_solid());
    assert!(board.set_tile(Point::new(2, 0), Tile::default()).is_err());
  }
}
