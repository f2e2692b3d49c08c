//! Observers and their views.
//!
//! A view maps "view space" (offsets relative to the observer) to "real
//! space" (absolute board positions). Without portals the mapping is just a
//! translation, but a ray passing through a portal keeps drawing cells
//! adjacent in view space while jumping elsewhere in real space.

use crate::error::Error;
use crate::error::Result;
use crate::geo::Dir;
use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;
use crate::map::Board;
use crate::map::Tile;
use crate::map::TileKind;
use crate::rays::RayTable;
use crate::rays::RayTemplate;

/// The result of a raycast: which real cell is seen at each view offset.
///
/// Storage is a dense square around the origin, sized from the extent of the
/// [`RayTable`] it was filled from.
#[derive(Clone, Debug)]
pub struct View {
  cells: RectVec<Option<Point>>,
  len: usize,
}

impl View {
  /// Creates an empty view.
  pub fn new() -> Self {
    Self {
      cells: RectVec::empty(),
      len: 0,
    }
  }

  /// Empties this view, making room for offsets up to `extent` away from the
  /// origin.
  pub fn reset(&mut self, extent: i64) {
    let side = extent * 2 + 1;
    let rect = Rect::with_dims(side, side).centered_on(Point::zero());
    self.cells.resize(rect, None);
    self.len = 0;
  }

  /// Records that `rel` shows `real`, unless `rel` is already taken.
  ///
  /// Returns whether the entry was inserted.
  ///
  /// # Panics
  ///
  /// Panics if `rel` lies outside the extent passed to [`View::reset()`].
  pub fn insert(&mut self, rel: Point, real: Point) -> bool {
    let slot = match self.cells.get_mut(rel) {
      Some(slot) => slot,
      None => panic!("offset {} is outside this view's extent", rel),
    };
    if slot.is_some() {
      return false;
    }
    *slot = Some(real);
    self.len += 1;
    true
  }

  /// Returns the real position seen at `rel`, if it is visible.
  pub fn get(&self, rel: Point) -> Option<Point> {
    self.cells.get(rel).copied().flatten()
  }

  /// Returns whether anything is visible at `rel`.
  pub fn contains(&self, rel: Point) -> bool {
    self.get(rel).is_some()
  }

  /// Returns the number of visible offsets.
  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Iterates over `(relative, real)` pairs, in row-major order from the
  /// lowest y.
  pub fn iter(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
    self
      .cells
      .points()
      .filter_map(|(rel, real)| real.map(|real| (rel, real)))
  }
}

impl Default for View {
  fn default() -> Self {
    Self::new()
  }
}

/// Something that stands on a board and looks around.
#[derive(Clone, Debug)]
pub struct Observer {
  pos: Point,
  view: View,
}

impl Observer {
  /// Creates an observer at `pos`, with an empty view.
  pub fn new(pos: Point) -> Self {
    Self {
      pos,
      view: View::new(),
    }
  }

  /// Returns this observer's absolute position.
  pub fn pos(&self) -> Point {
    self.pos
  }

  /// Returns the view computed by the last [`Observer::raycast()`].
  pub fn view(&self) -> &View {
    &self.view
  }

  /// Recomputes this observer's view.
  ///
  /// The observer's own cell is always visible. Then every ray in `rays` is
  /// walked in order through [`Board::step()`]; each cell it reaches is
  /// recorded unless an earlier ray already claimed that view offset, and the
  /// ray ends at the first opaque cell (which is itself recorded).
  pub fn raycast(&mut self, board: &Board, rays: &RayTable) {
    self.view.reset(rays.extent());
    self.view.insert(Point::zero(), self.pos);
    for ray in rays.rays() {
      self.cast_one(board, ray);
    }
  }

  fn cast_one(&mut self, board: &Board, ray: &RayTemplate) {
    let mut real = self.pos;
    // View-space offsets come straight from the template: portals bend real
    // space only.
    for (&dir, &rel) in ray.steps().iter().zip(&ray.points()[1..]) {
      real = board.step(real, dir);
      self.view.insert(rel, real);
      if board.tile(real).is_opaque() {
        break;
      }
    }
  }

  /// Returns the tile seen at view offset `rel`.
  ///
  /// Fails with [`Error::NotInView`] if the last raycast did not reach `rel`;
  /// callers drawing a view should check [`View::contains()`] first.
  pub fn tile_at_pos(&self, board: &Board, rel: Point) -> Result<Tile> {
    let real = self.view.get(rel).ok_or(Error::NotInView(rel))?;
    Ok(board.tile(real))
  }

  /// Steps this observer towards `dir`, through portals, unless the
  /// destination is solid.
  ///
  /// Returns whether the observer moved. Bumping into something is not an
  /// error. The view is left alone until the next raycast.
  pub fn walk(&mut self, board: &Board, dir: Dir) -> bool {
    let next = board.step(self.pos, dir);
    if board.tile(next).is_solid() {
      return false;
    }
    self.pos = next;
    true
  }

  /// Renders the view within `radius` of the origin as text, one line per
  /// row, highest y first.
  pub fn ascii(&self, board: &Board, radius: i64) -> String {
    let mut out = String::new();
    for y in (-radius..=radius).rev() {
      for x in -radius..=radius {
        let rel = Point::new(x, y);
        let c = if rel == Point::zero() {
          '@'
        } else {
          match self.view.get(rel).map(|real| board.tile(real).kind()) {
            None => ' ',
            Some(TileKind::None) => 'X',
            Some(TileKind::Floor) => '.',
            Some(TileKind::Wall) => '#',
            Some(TileKind::Glass) => '~',
          }
        };
        out.push(c);
      }
      out.push('\n');
    }
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::map::End;
  use crate::map::Level;
  use crate::map::Orientation;
  use crate::map::Portal;

  fn floor_board(width: usize, height: usize, portals: Vec<Portal>) -> Board {
    let level = Level::new(width, height, Tile::new(TileKind::Floor));
    Board::new(level, portals).unwrap()
  }

  fn ray(points: &[(i64, i64)]) -> RayTemplate {
    RayTemplate::from_points(points.iter().map(|&p| p.into()).collect())
      .unwrap()
  }

  #[test]
  fn origin_is_always_visible() {
    let board = floor_board(5, 5, vec![]);
    let mut obs = Observer::new(Point::new(2, 2));
    obs.raycast(&board, RayTable::shared());
    assert_eq!(obs.view().get(Point::zero()), Some(Point::new(2, 2)));

    // Even standing in a wall, or off the map.
    let mut obs = Observer::new(Point::new(-10, 40));
    obs.raycast(&board, RayTable::shared());
    assert_eq!(obs.view().get(Point::zero()), Some(Point::new(-10, 40)));
  }

  #[test]
  fn open_floor_is_fully_visible() {
    let board = floor_board(5, 5, vec![]);
    let mut obs = Observer::new(Point::new(2, 2));
    obs.raycast(&board, RayTable::shared());

    for x in -2..=2 {
      for y in -2..=2 {
        let rel = Point::new(x, y);
        assert_eq!(obs.view().get(rel), Some(Point::new(2, 2) + rel));
      }
    }
    for (rel, real) in obs.view().iter() {
      assert_eq!(real, Point::new(2, 2) + rel);
    }

    let here = obs.tile_at_pos(&board, Point::zero()).unwrap();
    assert_eq!(here, Tile::new(TileKind::Floor));

    // The map edge is seen, but nothing beyond it.
    assert_eq!(
      obs.tile_at_pos(&board, Point::new(3, 0)).unwrap(),
      Tile::default()
    );
    assert!(!obs.view().contains(Point::new(4, 0)));
  }

  #[test]
  fn walls_stop_rays() {
    let mut board = floor_board(5, 5, vec![]);
    board
      .set_tile(Point::new(3, 2), Tile::new(TileKind::Wall))
      .unwrap();

    let mut obs = Observer::new(Point::new(2, 2));
    obs.raycast(&board, RayTable::shared());

    assert_eq!(obs.view().get(Point::new(1, 0)), Some(Point::new(3, 2)));
    assert!(!obs.view().contains(Point::new(2, 0)));
    assert_eq!(
      obs.tile_at_pos(&board, Point::new(2, 0)),
      Err(Error::NotInView(Point::new(2, 0)))
    );
  }

  #[test]
  fn glass_does_not_stop_rays() {
    let mut board = floor_board(5, 5, vec![]);
    board
      .set_tile(Point::new(3, 2), Tile::new(TileKind::Glass))
      .unwrap();

    let mut obs = Observer::new(Point::new(2, 2));
    obs.raycast(&board, RayTable::shared());
    assert!(obs.view().contains(Point::new(2, 0)));
  }

  #[test]
  fn nothing_is_recorded_past_an_opaque_cell() {
    let mut board = floor_board(9, 1, vec![]);
    board
      .set_tile(Point::new(4, 0), Tile::new(TileKind::Wall))
      .unwrap();
    let table = RayTable::from_templates(vec![ray(&[
      (0, 0),
      (1, 0),
      (2, 0),
      (3, 0),
      (4, 0),
    ])]);

    let mut obs = Observer::new(Point::new(1, 0));
    obs.raycast(&board, &table);
    let seen: Vec<_> = obs.view().iter().map(|(rel, _)| rel).collect();
    assert_eq!(
      seen,
      vec![
        Point::new(0, 0),
        Point::new(1, 0),
        Point::new(2, 0),
        Point::new(3, 0)
      ]
    );
  }

  #[test]
  fn earlier_rays_win() {
    // The observer stands on a portal that swallows rightward steps. One ray
    // goes right (through the portal), the other goes up and then cuts back
    // down-right; both land on view offset (1, 0).
    let portal =
      Portal::new(Orientation::Horizontal, Point::new(2, 2), Point::new(6, 6));
    let board = floor_board(10, 10, vec![portal]);
    let through = ray(&[(0, 0), (1, 0)]);
    let around = ray(&[(0, 0), (0, 1), (1, 0)]);

    let mut obs = Observer::new(Point::new(2, 2));

    let table = RayTable::from_templates(vec![through.clone(), around.clone()]);
    obs.raycast(&board, &table);
    assert_eq!(obs.view().get(Point::new(1, 0)), Some(Point::new(7, 6)));

    let table = RayTable::from_templates(vec![around, through]);
    obs.raycast(&board, &table);
    assert_eq!(obs.view().get(Point::new(1, 0)), Some(Point::new(3, 2)));
    assert_eq!(obs.view().len(), 3);
  }

  #[test]
  fn portals_bend_real_space_only() {
    let portal =
      Portal::new(Orientation::Horizontal, Point::new(3, 2), Point::new(10, 7));
    let board = floor_board(16, 16, vec![portal]);

    let mut obs = Observer::new(Point::new(2, 2));
    obs.raycast(&board, RayTable::shared());

    // Looking right: the portal cell itself, then out of the far end.
    assert_eq!(obs.view().get(Point::new(1, 0)), Some(Point::new(3, 2)));
    assert_eq!(obs.view().get(Point::new(2, 0)), Some(Point::new(11, 7)));
    assert_eq!(obs.view().get(Point::new(3, 0)), Some(Point::new(12, 7)));
    // Looking left is untouched.
    assert_eq!(obs.view().get(Point::new(-1, 0)), Some(Point::new(1, 2)));
  }

  #[test]
  fn one_way_portal_views() {
    let portal =
      Portal::new(Orientation::Horizontal, Point::new(0, 0), Point::new(5, 5))
        .one_way(End::First);
    let board = floor_board(12, 12, vec![portal]);

    // Standing on the entry, looking right, shows the far side.
    let mut obs = Observer::new(Point::new(0, 0));
    obs.raycast(&board, RayTable::shared());
    assert_eq!(obs.view().get(Point::new(1, 0)), Some(Point::new(6, 5)));

    // Standing on the exit, looking left, does not.
    let mut obs = Observer::new(Point::new(5, 5));
    obs.raycast(&board, RayTable::shared());
    assert_eq!(obs.view().get(Point::new(-1, 0)), Some(Point::new(4, 5)));
  }

  #[test]
  fn walking() {
    let mut board = floor_board(5, 5, vec![]);
    board
      .set_tile(Point::new(3, 2), Tile::new(TileKind::Wall))
      .unwrap();
    let mut obs = Observer::new(Point::new(2, 2));
    obs.raycast(&board, RayTable::shared());
    let before: Vec<_> = obs.view().iter().collect();

    assert!(!obs.walk(&board, Dir::Right));
    assert_eq!(obs.pos(), Point::new(2, 2));
    obs.raycast(&board, RayTable::shared());
    let after: Vec<_> = obs.view().iter().collect();
    assert_eq!(before, after);

    assert!(obs.walk(&board, Dir::Up));
    assert_eq!(obs.pos(), Point::new(2, 3));
    // Off the top edge is solid.
    assert!(obs.walk(&board, Dir::Up));
    assert!(!obs.walk(&board, Dir::Up));
    assert_eq!(obs.pos(), Point::new(2, 4));
  }

  #[test]
  fn walking_through_a_portal() {
    let portal =
      Portal::new(Orientation::Vertical, Point::new(1, 1), Point::new(6, 6));
    let board = floor_board(8, 8, vec![portal]);
    let mut obs = Observer::new(Point::new(1, 1));
    assert!(obs.walk(&board, Dir::Up));
    assert_eq!(obs.pos(), Point::new(6, 7));
  }

  #[test]
  fn ascii_dump() {
    let mut board = floor_board(3, 3, vec![]);
    board
      .set_tile(Point::new(2, 1), Tile::new(TileKind::Glass))
      .unwrap();
    let mut obs = Observer::new(Point::new(1, 1));
    obs.raycast(&board, RayTable::shared());
    assert_eq!(obs.ascii(&board, 1), "...\n.@~\n...\n");
  }
}
