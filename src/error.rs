//! Error types.
//!
//! Per-frame operations (stepping, raycasting, movement) are total and never
//! fail; everything here is reported once, while setting things up, or is a
//! caller bug.

use crate::geo::Point;

/// A `Result` defaulting to this crate's [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while building ray geometry or boards, or when a caller
/// breaks a precondition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Two consecutive ray offsets are not 8-adjacent.
  #[error("ray steps from {from} to {to}, which is not a unit step")]
  NonUnitStep { from: Point, to: Point },

  /// A ray does not begin at the origin.
  #[error("ray does not start at the origin")]
  RayOrigin,

  /// Ray geometry parameters are outside the supported range.
  #[error(
    "ray geometry with radius {radius} and {ray_count} rays is out of range"
  )]
  RayConfig { radius: i64, ray_count: usize },

  /// A portal endpoint lies outside the level.
  #[error("portal {portal} has an endpoint at {pos}, outside the level")]
  PortalOutOfBounds { portal: usize, pos: Point },

  /// Two portal endpoints share a cell.
  #[error("portals {first} and {second} both have an endpoint at {pos}")]
  PortalOverlap {
    first: usize,
    second: usize,
    pos: Point,
  },

  /// A portal record names an orientation other than 0 or 1.
  #[error("invalid portal orientation {0}, expected 0 or 1")]
  InvalidOrientation(i64),

  /// A portal record names a one-way side other than -1, 0 or 1.
  #[error("invalid portal one-way side {0}, expected -1, 0 or 1")]
  InvalidWayMask(i64),

  /// A level's columns are not all the same height.
  #[error("level column {column} has {found} tiles, expected {expected}")]
  RaggedLevel {
    column: usize,
    expected: usize,
    found: usize,
  },

  /// A tile write landed outside the level.
  #[error("tile {0} is outside the level")]
  TileOutOfBounds(Point),

  /// A view lookup asked for an offset that the last raycast did not reach.
  #[error("relative offset {0} is not in view")]
  NotInView(Point),

  /// An observer id does not belong to the session.
  #[error("no observer with id {0}")]
  UnknownObserver(usize),
}
