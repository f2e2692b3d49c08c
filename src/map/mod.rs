//! Tiles, levels, portals and the board they make up.

use rand::distributions::Distribution as _;
use rand::distributions::Uniform;
use rand::Rng;

use crate::error::Error;
use crate::error::Result;
use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;

pub mod board;
pub mod portal;

pub use board::Board;
pub use portal::End;
pub use portal::Orientation;
pub use portal::Portal;
pub use portal::WayMask;

/// The kind of a [`Tile`], which decides how it interacts with movement and
/// vision.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum TileKind {
  /// Nothing at all; what lies beyond the edge of a level.
  None,
  Floor,
  Wall,
  Glass,
}

impl TileKind {
  /// Returns the glyph drawn for this kind when a tile has no decal.
  pub fn glyph(self) -> char {
    match self {
      TileKind::None => 'X',
      TileKind::Floor => ' ',
      TileKind::Wall => '#',
      TileKind::Glass => '~',
    }
  }
}

/// A single grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Tile {
  kind: TileKind,
  glyph: char,
}

impl Tile {
  /// Creates a new tile of the given kind, with its default glyph.
  #[inline]
  pub fn new(kind: TileKind) -> Self {
    Self {
      kind,
      glyph: kind.glyph(),
    }
  }

  /// Creates a new tile of the given kind, drawn as `decal` instead of its
  /// default glyph.
  #[inline]
  pub fn with_decal(kind: TileKind, decal: char) -> Self {
    Self { kind, glyph: decal }
  }

  #[inline]
  pub fn kind(self) -> TileKind {
    self.kind
  }

  #[inline]
  pub fn glyph(self) -> char {
    self.glyph
  }

  /// Returns whether this tile blocks movement. Only floor can be walked on.
  #[inline]
  pub fn is_solid(self) -> bool {
    self.kind != TileKind::Floor
  }

  /// Returns whether this tile blocks vision. Floor and glass can be seen
  /// through.
  #[inline]
  pub fn is_opaque(self) -> bool {
    !matches!(self.kind, TileKind::Floor | TileKind::Glass)
  }
}

impl Default for Tile {
  fn default() -> Self {
    Tile::new(TileKind::None)
  }
}

/// Raw level data: a fixed-size rectangle of tiles with its lower-left corner
/// at the origin.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Level {
  tiles: RectVec<Tile>,
}

impl Level {
  /// Creates a `width` by `height` level filled with `fill`.
  pub fn new(width: usize, height: usize, fill: Tile) -> Self {
    Self {
      tiles: RectVec::new(Rect::with_dims(width as i64, height as i64), fill),
    }
  }

  /// Creates a level out of columns of tiles, i.e. `columns[x][y]`.
  ///
  /// Every column must have the same height.
  pub fn from_columns(columns: Vec<Vec<Tile>>) -> Result<Self> {
    let height = columns.first().map(Vec::len).unwrap_or(0);
    let mut level = Self::new(columns.len(), height, Tile::default());
    for (x, column) in columns.into_iter().enumerate() {
      if column.len() != height {
        return Err(Error::RaggedLevel {
          column: x,
          expected: height,
          found: column.len(),
        });
      }
      for (y, tile) in column.into_iter().enumerate() {
        level.set(Point::new(x as i64, y as i64), tile)?;
      }
    }
    Ok(level)
  }

  /// Creates a `width` by `height` level where every tile is picked at random
  /// out of a bag of three floors, one wall and one glass.
  pub fn scatter(width: usize, height: usize, rng: &mut impl Rng) -> Self {
    const BAG: [TileKind; 5] = [
      TileKind::Wall,
      TileKind::Floor,
      TileKind::Floor,
      TileKind::Glass,
      TileKind::Floor,
    ];

    let pick = Uniform::new(0, BAG.len());
    let mut level = Self::new(width, height, Tile::default());
    for t in level.tiles.data_mut() {
      *t = Tile::new(BAG[pick.sample(rng)]);
    }
    level
  }

  /// Returns the bounds of this level.
  pub fn rect(&self) -> Rect {
    self.tiles.dims()
  }

  /// Returns the size of this level, as `(width, height)`.
  pub fn size(&self) -> (usize, usize) {
    let rect = self.rect();
    (rect.width() as usize, rect.height() as usize)
  }

  /// Returns whether `pos` is inside this level.
  pub fn contains(&self, pos: Point) -> bool {
    self.rect().contains(pos)
  }

  /// Returns the tile at `pos`, or `None` if it is outside the level.
  pub fn get(&self, pos: Point) -> Option<Tile> {
    self.tiles.get(pos).copied()
  }

  /// Overwrites the tile at `pos`.
  pub fn set(&mut self, pos: Point, tile: Tile) -> Result<()> {
    let slot = self.tiles.get_mut(pos).ok_or(Error::TileOutOfBounds(pos))?;
    *slot = tile;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng as _;

  use super::*;

  #[test]
  fn tile_predicates() {
    let floor = Tile::new(TileKind::Floor);
    let wall = Tile::new(TileKind::Wall);
    let glass = Tile::new(TileKind::Glass);
    let none = Tile::default();

    assert!(!floor.is_solid() && !floor.is_opaque());
    assert!(wall.is_solid() && wall.is_opaque());
    assert!(glass.is_solid() && !glass.is_opaque());
    assert!(none.is_solid() && none.is_opaque());
    assert_eq!(none.kind(), TileKind::None);
  }

  #[test]
  fn decals_override_glyphs() {
    assert_eq!(Tile::new(TileKind::Wall).glyph(), '#');
    let marked = Tile::with_decal(TileKind::Floor, '7');
    assert_eq!(marked.glyph(), '7');
    assert!(!marked.is_solid());
  }

  #[test]
  fn columns_index_by_x_then_y() {
    let floor = Tile::new(TileKind::Floor);
    let wall = Tile::new(TileKind::Wall);
    let level =
      Level::from_columns(vec![vec![floor, wall], vec![floor, floor]]).unwrap();

    assert_eq!(level.size(), (2, 2));
    assert_eq!(level.get(Point::new(0, 1)), Some(wall));
    assert_eq!(level.get(Point::new(1, 1)), Some(floor));
    assert_eq!(level.get(Point::new(2, 0)), None);
    assert_eq!(level.get(Point::new(0, -1)), None);
  }

  #[test]
  fn ragged_columns_are_rejected() {
    let floor = Tile::new(TileKind::Floor);
    let err = Level::from_columns(vec![vec![floor, floor], vec![floor]]);
    assert_eq!(
      err,
      Err(Error::RaggedLevel {
        column: 1,
        expected: 2,
        found: 1
      })
    );
  }

  #[test]
  fn writes_outside_fail() {
    let mut level = Level::new(2, 2, Tile::default());
    let p = Point::new(2, 0);
    assert_eq!(
      level.set(p, Tile::new(TileKind::Wall)),
      Err(Error::TileOutOfBounds(p))
    );
  }

  #[test]
  fn scatter_only_uses_known_kinds() {
    let mut rng = StdRng::seed_from_u64(7);
    let level = Level::scatter(16, 8, &mut rng);
    assert_eq!(level.size(), (16, 8));
    for p in level.rect().points() {
      let kind = level.get(p).unwrap().kind();
      assert_ne!(kind, TileKind::None);
    }
  }
}
