//! Ray geometry.
//!
//! Field-of-view is computed by walking a fixed "flower" of rays out of the
//! observer. The rays only depend on the view distance and the number of rays,
//! never on map contents, so they are computed once and shared by every
//! observer.

use std::f64::consts::PI;

use lazy_static::lazy_static;

use crate::error::Error;
use crate::error::Result;
use crate::geo::line;
use crate::geo::Dir;
use crate::geo::Point;

/// Default view distance, in tiles.
pub const VIEW_DISTANCE: i64 = 20;

/// Default number of primary (angular) rays.
pub const RAY_COUNT: usize = 300;

/// Largest view distance a [`RayTable`] accepts.
///
/// Views are dense squares of side `2 * radius + 1`, and the correction rays
/// alone visit about `4 * radius^2` offsets.
pub const MAX_VIEW_DISTANCE: i64 = 256;

/// Largest number of primary rays a [`RayTable`] accepts.
pub const MAX_RAY_COUNT: usize = 4096;

/// Parameters for building a [`RayTable`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct RayConfig {
  /// The length of each primary ray, in tiles.
  pub radius: i64,
  /// The number of primary rays, evenly spaced in angle.
  pub ray_count: usize,
}

impl RayConfig {
  /// Returns whether this configuration is within the accepted limits.
  pub fn in_range(self) -> bool {
    (1..=MAX_VIEW_DISTANCE).contains(&self.radius)
      && (1..=MAX_RAY_COUNT).contains(&self.ray_count)
  }
}

impl Default for RayConfig {
  fn default() -> Self {
    Self {
      radius: VIEW_DISTANCE,
      ray_count: RAY_COUNT,
    }
  }
}

/// A single precomputed ray.
///
/// A ray is a lattice path out of the origin, stored twice: as the offsets it
/// visits, and as the directions stepping between them.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RayTemplate {
  // Invariant: points[0] == (0, 0), steps.len() + 1 == points.len() and
  // points[i] + steps[i].step() == points[i + 1].
  points: Vec<Point>,
  steps: Vec<Dir>,
}

impl RayTemplate {
  /// Builds a ray from the offsets it visits.
  ///
  /// Fails if the path does not start at the origin, or if two consecutive
  /// offsets are not 8-adjacent.
  pub fn from_points(points: Vec<Point>) -> Result<Self> {
    if points.first() != Some(&Point::zero()) {
      return Err(Error::RayOrigin);
    }

    let steps = points
      .windows(2)
      .map(|w| {
        Dir::from_step(w[1] - w[0]).ok_or(Error::NonUnitStep {
          from: w[0],
          to: w[1],
        })
      })
      .collect::<Result<Vec<_>>>()?;

    Ok(Self { points, steps })
  }

  /// Returns the offsets visited by this ray, starting at the origin.
  pub fn points(&self) -> &[Point] {
    &self.points
  }

  /// Returns the directions stepped along this ray; `steps()[i]` leads from
  /// `points()[i]` to `points()[i + 1]`.
  pub fn steps(&self) -> &[Dir] {
    &self.steps
  }

  /// Returns the number of steps in this ray.
  pub fn len(&self) -> usize {
    self.steps.len()
  }

  /// Returns whether this ray never leaves the origin.
  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }
}

/// An ordered collection of [`RayTemplate`]s.
///
/// Order matters: when two rays reach the same view cell, the earlier one
/// decides what is seen there.
#[derive(Clone, Debug)]
pub struct RayTable {
  rays: Vec<RayTemplate>,
  extent: i64,
}

impl RayTable {
  /// Builds the ray flower for `config`.
  ///
  /// The primary rays are Bresenham lines to evenly spaced points on the
  /// circle of radius `config.radius`, followed by short correction rays that
  /// run along each axis and then peel off diagonally by one tile. Angular
  /// sampling misses the cells right next to the axes, and the correction
  /// rays cover exactly those.
  ///
  /// Fails if `config` is outside [`RayConfig::in_range()`].
  pub fn new(config: RayConfig) -> Result<Self> {
    let RayConfig { radius, ray_count } = config;
    if !config.in_range() {
      return Err(Error::RayConfig { radius, ray_count });
    }

    let angle = PI * 2.0 / ray_count as f64;
    let mut lines = (0..ray_count)
      .map(|i| {
        let theta = i as f64 * angle;
        let end = Point::new(
          (radius as f64 * theta.cos()).round() as i64,
          (-radius as f64 * theta.sin()).round() as i64,
        );
        line::bresenham(Point::zero(), end)
      })
      .collect::<Vec<_>>();

    for &axis in Dir::orthogonal().iter() {
      for &flank in axis.flanks().iter() {
        for s in 1..radius {
          let mut points =
            (0..=s).map(|k| axis.step() * k).collect::<Vec<Point>>();
          points.push(axis.step() * s + flank.step());
          lines.push(points);
        }
      }
    }

    let rays = lines
      .into_iter()
      .map(RayTemplate::from_points)
      .collect::<Result<Vec<_>>>()?;
    let table = Self::from_templates(rays);

    tracing::debug!(
      radius,
      ray_count,
      rays = table.len(),
      extent = table.extent(),
      "built ray table"
    );
    Ok(table)
  }

  /// Assembles a table out of arbitrary templates, in the given order.
  pub fn from_templates(rays: Vec<RayTemplate>) -> Self {
    let extent = rays
      .iter()
      .flat_map(|r| r.points().iter())
      .map(|p| p.chebyshev())
      .max()
      .unwrap_or(0);
    Self { rays, extent }
  }

  /// Returns the process-wide table for the default [`RayConfig`].
  pub fn shared() -> &'static RayTable {
    &DEFAULT_TABLE
  }

  /// Returns the rays of this table, in processing order.
  pub fn rays(&self) -> &[RayTemplate] {
    &self.rays
  }

  /// Returns the number of rays in this table.
  pub fn len(&self) -> usize {
    self.rays.len()
  }

  /// Returns whether this table contains no rays.
  pub fn is_empty(&self) -> bool {
    self.rays.is_empty()
  }

  /// Returns the largest Chebyshev distance from the origin reached by any ray.
  ///
  /// Every relative offset a ray visits lies in the square of side
  /// `2 * extent + 1` centered on the origin.
  pub fn extent(&self) -> i64 {
    self.extent
  }
}

lazy_static! {
  static ref DEFAULT_TABLE: RayTable = match RayTable::new(RayConfig::default())
  {
    Ok(table) => table,
    Err(e) => panic!("default ray geometry is malformed: {}", e),
  };
}
