//! The eight lattice directions.

use crate::geo::Point;

/// A direction on the plane: four orthogonal, then four diagonal.
///
/// The discriminants are load-bearing. Portal facings are computed
/// arithmetically from them (see [`Dir::from_index()`]), and an orthogonal
/// direction `d` shares its orientation with the diagonal `d + 4`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[allow(missing_docs)]
#[repr(u8)]
pub enum Dir {
  Right = 0,
  Up = 1,
  Left = 2,
  Down = 3,
  UpRight = 4,
  UpLeft = 5,
  DownLeft = 6,
  DownRight = 7,
}

const ALL: [Dir; 8] = [
  Dir::Right,
  Dir::Up,
  Dir::Left,
  Dir::Down,
  Dir::UpRight,
  Dir::UpLeft,
  Dir::DownLeft,
  Dir::DownRight,
];

const STEPS: [Point<i64>; 8] = [
  Point::new(1, 0),
  Point::new(0, 1),
  Point::new(-1, 0),
  Point::new(0, -1),
  Point::new(1, 1),
  Point::new(-1, 1),
  Point::new(-1, -1),
  Point::new(1, -1),
];

impl Dir {
  /// Returns all directions, in index order.
  #[inline]
  pub fn all() -> [Dir; 8] {
    ALL
  }

  /// Returns the four orthogonal directions, in index order.
  #[inline]
  pub fn orthogonal() -> [Dir; 4] {
    [Dir::Right, Dir::Up, Dir::Left, Dir::Down]
  }

  /// Returns the direction with the given index, if there is one.
  #[inline]
  pub fn from_index(index: usize) -> Option<Dir> {
    ALL.get(index).copied()
  }

  /// Returns this direction's index in `0..8`.
  #[inline]
  pub fn index(self) -> usize {
    self as usize
  }

  /// Returns the unit step of this direction.
  #[inline]
  pub fn step(self) -> Point<i64> {
    STEPS[self.index()]
  }

  /// Looks up the direction whose unit step is `step`.
  ///
  /// Returns `None` for anything that is not one of the eight unit steps,
  /// including zero.
  pub fn from_step(step: Point<i64>) -> Option<Dir> {
    match step.coords() {
      [1, 0] => Some(Dir::Right),
      [0, 1] => Some(Dir::Up),
      [-1, 0] => Some(Dir::Left),
      [0, -1] => Some(Dir::Down),
      [1, 1] => Some(Dir::UpRight),
      [-1, 1] => Some(Dir::UpLeft),
      [-1, -1] => Some(Dir::DownLeft),
      [1, -1] => Some(Dir::DownRight),
      _ => None,
    }
  }

  /// Returns the two directions 45 degrees to either side of this one,
  /// counterclockwise first.
  ///
  /// For an orthogonal `d` these are the diagonals `d + 4` and
  /// `(d - 1) mod 4 + 4`.
  pub fn flanks(self) -> [Dir; 2] {
    match self {
      Dir::Right => [Dir::UpRight, Dir::DownRight],
      Dir::Up => [Dir::UpLeft, Dir::UpRight],
      Dir::Left => [Dir::DownLeft, Dir::UpLeft],
      Dir::Down => [Dir::DownRight, Dir::DownLeft],
      Dir::UpRight => [Dir::Up, Dir::Right],
      Dir::UpLeft => [Dir::Left, Dir::Up],
      Dir::DownLeft => [Dir::Down, Dir::Left],
      Dir::DownRight => [Dir::Right, Dir::Down],
    }
  }

  /// Returns the orthogonal direction preceding this one, i.e.
  /// `(d - 1) mod 4`.
  #[inline]
  pub fn prev_orthogonal(self) -> Dir {
    Dir::orthogonal()[(self.index() + 3) % 4]
  }
}
