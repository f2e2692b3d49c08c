//! Portals: pairs of cells linked so that stepping out of one continues out of
//! the other.

use crate::error::Error;
use crate::error::Result;
use crate::geo::Dir;
use crate::geo::Point;

/// Which axis a portal faces along.
///
/// A horizontal portal's first end faces right and its second end faces left;
/// a vertical portal's first end faces up and its second faces down.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum Orientation {
  Horizontal = 0,
  Vertical = 1,
}

/// One of the two ends of a [`Portal`].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum End {
  First = 0,
  Second = 1,
}

impl End {
  /// Returns the opposite end.
  #[inline]
  pub fn other(self) -> End {
    match self {
      End::First => End::Second,
      End::Second => End::First,
    }
  }

  #[inline]
  fn index(self) -> usize {
    self as usize
  }
}

bitflags::bitflags! {
  /// The set of ends a portal may be entered from.
  pub struct WayMask: u8 {
    const FIRST = 1 << 0;
    const SECOND = 1 << 1;
    const BOTH = Self::FIRST.bits | Self::SECOND.bits;
  }
}

impl WayMask {
  /// Returns the mask with only `end` set.
  #[inline]
  pub fn only(end: End) -> WayMask {
    match end {
      End::First => WayMask::FIRST,
      End::Second => WayMask::SECOND,
    }
  }

  /// Returns whether `end` may be entered.
  #[inline]
  pub fn permits(self, end: End) -> bool {
    self.contains(WayMask::only(end))
  }
}

/// A link between two cells.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Portal {
  orientation: Orientation,
  ends: [Point; 2],
  ways: WayMask,
}

impl Portal {
  /// Creates a new two-way portal between `first` and `second`.
  pub fn new(orientation: Orientation, first: Point, second: Point) -> Self {
    Self {
      orientation,
      ends: [first, second],
      ways: WayMask::BOTH,
    }
  }

  /// Restricts this portal so that it can only be entered from `end`.
  pub fn one_way(mut self, end: End) -> Self {
    self.ways = WayMask::only(end);
    self
  }

  /// Builds a portal out of a raw `(orientation, x1, y1, x2, y2, oneway)`
  /// record, as found in portal files.
  ///
  /// `orientation` is 0 for horizontal and 1 for vertical; `oneway` is -1 for
  /// a two-way portal, or the index of the only end it can be entered from.
  pub fn from_record(
    orientation: i64,
    first: Point,
    second: Point,
    oneway: i64,
  ) -> Result<Self> {
    let orientation = match orientation {
      0 => Orientation::Horizontal,
      1 => Orientation::Vertical,
      o => return Err(Error::InvalidOrientation(o)),
    };
    let portal = Self::new(orientation, first, second);
    match oneway {
      -1 => Ok(portal),
      0 => Ok(portal.one_way(End::First)),
      1 => Ok(portal.one_way(End::Second)),
      w => Err(Error::InvalidWayMask(w)),
    }
  }

  pub fn orientation(&self) -> Orientation {
    self.orientation
  }

  pub fn ways(&self) -> WayMask {
    self.ways
  }

  /// Returns the cell at the given end.
  #[inline]
  pub fn pos(&self, end: End) -> Point {
    self.ends[end.index()]
  }

  /// Returns both ends' cells, first end first.
  pub fn ends(&self) -> [Point; 2] {
    self.ends
  }

  /// Returns which end sits on `pos`, if any.
  pub fn end_at(&self, pos: Point) -> Option<End> {
    [End::First, End::Second]
      .iter()
      .copied()
      .find(|&e| self.pos(e) == pos)
  }

  /// Returns the direction the given end faces.
  pub fn facing(&self, end: End) -> Dir {
    match (self.orientation, end) {
      (Orientation::Horizontal, End::First) => Dir::Right,
      (Orientation::Vertical, End::First) => Dir::Up,
      (Orientation::Horizontal, End::Second) => Dir::Left,
      (Orientation::Vertical, End::Second) => Dir::Down,
    }
  }

  /// Returns the directions that pass through the given end: straight through
  /// its face, or along either diagonal grazing it.
  pub fn entering(&self, end: End) -> [Dir; 3] {
    let d = self.facing(end);
    let [ccw, _] = d.flanks();
    [d, ccw, d.prev_orthogonal()]
  }

  /// Returns whether stepping `dir` while standing on `end` goes through this
  /// portal.
  pub fn captures(&self, end: End, dir: Dir) -> bool {
    self.ways.permits(end) && self.entering(end).contains(&dir)
  }
}
