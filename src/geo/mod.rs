//! Geometry library: points, rectangles, directions and lines on the integer
//! lattice.
//!
//! We use the following convention for coordinates: x increases to the right,
//! and y increases *upwards*. Renderers that draw top-to-bottom must mirror the
//! y axis.

use std::ops::Range;

use num::FromPrimitive;
use num::Signed;
use num::Zero;

mod impls;

pub mod dir;
pub mod line;

pub use dir::Dir;

/// A two-dimensional point.
///
/// `Point<T>` values may be added and subtracted componentwise.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Point<T = i64>([T; 2]);

impl<T> Point<T> {
  /// Creates a new `Point` with the given coordinates.
  #[inline]
  pub const fn new(x: T, y: T) -> Self {
    Self([x, y])
  }

  /// Creates a new `Point` representing the origin.
  #[inline]
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Zero::zero()
  }

  /// Returns this `Point`'s coordinates as an array.
  #[inline]
  pub fn coords(self) -> [T; 2] {
    self.0
  }

  /// Returns the `x` coordinate.
  #[inline]
  pub fn x(self) -> T
  where
    T: Copy,
  {
    self.0[0]
  }

  /// Returns the `y` coordinate.
  #[inline]
  pub fn y(self) -> T
  where
    T: Copy,
  {
    self.0[1]
  }

  /// Computes the Chebyshev norm of `self`, i.e., the larger of the absolute
  /// values of its coordinates.
  pub fn chebyshev(self) -> T
  where
    T: Signed + PartialOrd + Copy,
  {
    let (x, y) = (self.x().abs(), self.y().abs());
    if x > y {
      x
    } else {
      y
    }
  }
}

/// A rectangle, represented as a pair of [`Point`] values.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Rect<T = i64>(Point<T>, Point<T>);

// Invariant: rect.0.x <= rect.1.x and rect.0.y <= rect.1.y.
impl<T: Signed> Rect<T> {
  /// Creates a new `Rect` of the given dimensions with one corner at the
  /// origin.
  #[inline]
  pub fn with_dims(width: T, height: T) -> Self {
    Self(Point::zero(), Point::new(width.abs(), height.abs()))
  }

  /// Returns the corner with the smallest coordinates.
  #[inline]
  pub fn lower_left(self) -> Point<T> {
    self.0
  }

  /// Returns the lower and upper corners of this `Rect`.
  #[inline]
  pub fn corners(self) -> (Point<T>, Point<T>) {
    (self.0, self.1)
  }

  /// Returns the width of this `Rect`.
  #[inline]
  pub fn width(self) -> T
  where
    T: Copy,
  {
    self.1.x() - self.0.x()
  }

  /// Returns the height of this `Rect`.
  #[inline]
  pub fn height(self) -> T
  where
    T: Copy,
  {
    self.1.y() - self.0.y()
  }

  /// Returns the area of this `Rect`.
  #[inline]
  pub fn area(self) -> T
  where
    T: Copy,
  {
    self.width() * self.height()
  }

  /// Returns whether this `Rect` contains a given point.
  ///
  /// Note that the points in a rectangle form an "exclusive" range; points
  /// colinear with the upper corner are *not* part of the rectangle.
  #[inline]
  pub fn contains(self, p: Point<T>) -> bool
  where
    T: Copy + PartialOrd,
  {
    for i in 0..p.len() {
      if !(self.0[i]..self.1[i]).contains(&p[i]) {
        return false;
      }
    }
    true
  }

  /// Translates this `Rect` such that its center is (approximately) at
  /// `center`.
  pub fn centered_on(self, center: Point<T>) -> Self
  where
    T: FromPrimitive + Copy,
  {
    let two = T::from_u64(2).unwrap_or_else(T::one);
    Self::with_dims(self.width(), self.height())
      - Point::new(self.width() / two, self.height() / two)
      + center
  }

  /// Returns an iterator over all points in this rectangle.
  ///
  /// Points are traversed in row-major order, starting from the lower corner.
  pub fn points(self) -> impl Iterator<Item = Point<T>>
  where
    T: Copy,
    Range<T>: Iterator<Item = T>,
  {
    let [x1, y1] = self.0.coords();
    let [x2, y2] = self.1.coords();

    (y1..y2).flat_map(move |y| (x1..x2).map(move |x| Point::new(x, y)))
  }
}

/// A rectangle with associated data at each point.
// Invariant: self.1.len() == self.0.area()
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct RectVec<T>(Rect<i64>, Box<[T]>);

impl<T: Clone> RectVec<T> {
  /// Creates a new, empty `RectVec` with arbitrary degenerate coordinates.
  pub fn empty() -> Self {
    RectVec(Rect::with_dims(0, 0), Vec::new().into_boxed_slice())
  }

  /// Creates a new `RectVec` with the requested dimensions and filled with the
  /// given value.
  pub fn new(rect: Rect<i64>, val: T) -> Self {
    RectVec(rect, vec![val; rect.area() as usize].into_boxed_slice())
  }

  /// Returns this `RectVec`'s dimensions.
  pub fn dims(&self) -> Rect<i64> {
    self.0
  }

  /// Returns this `RectVec`'s data as a mutable linear slice.
  pub fn data_mut(&mut self) -> &mut [T] {
    &mut self.1
  }

  /// Transforms this `RectVec`'s dimensions to the new rectangle, filling it
  /// with `val` in the process.
  pub fn resize(&mut self, new_rect: Rect<i64>, val: T) {
    if self.0.area() == new_rect.area() {
      self.0 = new_rect;
      for x in self.1.iter_mut() {
        *x = val.clone();
      }
    } else {
      *self = Self::new(new_rect, val);
    }
  }

  fn index_of(&self, p: Point<i64>) -> Option<usize> {
    if !self.dims().contains(p) {
      return None;
    }
    let rel = p - self.dims().lower_left();
    Some((rel.x() + rel.y() * self.dims().width()) as usize)
  }

  /// Gets a reference to the data value associated with `p`.
  ///
  /// Returns `None` if `p` is out-of-bounds.
  pub fn get(&self, p: Point<i64>) -> Option<&T> {
    let index = self.index_of(p)?;
    self.1.get(index)
  }

  /// Gets a mutable reference to the data value associated with `p`.
  ///
  /// Returns `None` if `p` is out-of-bounds.
  pub fn get_mut(&mut self, p: Point<i64>) -> Option<&mut T> {
    let index = self.index_of(p)?;
    self.1.get_mut(index)
  }

  /// Returns an iterator over the points of this `RectVec` and their associated
  /// values.
  pub fn points(&self) -> impl Iterator<Item = (Point<i64>, &T)> + '_ {
    self.dims().points().zip(self.1.iter())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rect_contains_is_exclusive() {
    let r = Rect::with_dims(3, 2);
    assert!(r.contains(Point::new(0, 0)));
    assert!(r.contains(Point::new(2, 1)));
    assert!(!r.contains(Point::new(3, 1)));
    assert!(!r.contains(Point::new(0, 2)));
    assert!(!r.contains(Point::new(-1, 0)));
  }

  #[test]
  fn centered_rect_is_symmetric_for_odd_sides() {
    let r = Rect::with_dims(5, 5).centered_on(Point::zero());
    assert_eq!(r.corners(), (Point::new(-2, -2), Point::new(3, 3)));
  }

  #[test]
  fn rect_vec_addresses_by_point() {
    let rect = Rect::with_dims(3, 3).centered_on(Point::new(10, 10));
    let mut v = RectVec::new(rect, 0u8);
    *v.get_mut(Point::new(11, 9)).unwrap() = 7;

    assert_eq!(v.get(Point::new(11, 9)), Some(&7));
    assert_eq!(v.get(Point::new(12, 9)), None);
    let hits: Vec<_> = v.points().filter(|(_, x)| **x == 7).collect();
    assert_eq!(hits, vec![(Point::new(11, 9), &7)]);
  }

  #[test]
  fn chebyshev_norm() {
    assert_eq!(Point::new(-3, 2).chebyshev(), 3);
    assert_eq!(Point::new(1, -4).chebyshev(), 4);
  }
}
