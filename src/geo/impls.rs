//! Operator overloads.

use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Deref;
use std::ops::DerefMut;
use std::ops::Mul;
use std::ops::Sub;

use num::Zero;

use crate::geo::Point;
use crate::geo::Rect;

const N: usize = 2;

#[inline]
fn map<T, U>(x: [T; N], mut f: impl FnMut(T) -> U) -> [U; N] {
  let [a, b] = x;
  [f(a), f(b)]
}

#[inline]
fn zip<T, U, V>(x: [T; N], y: [U; N], mut f: impl FnMut(T, U) -> V) -> [V; N] {
  let [a0, a1] = x;
  let [b0, b1] = y;
  [f(a0, b0), f(a1, b1)]
}

impl<T> Deref for Point<T> {
  type Target = [T; N];
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T> DerefMut for Point<T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl<T> From<(T, T)> for Point<T> {
  #[inline]
  fn from((x, y): (T, T)) -> Self {
    Self::new(x, y)
  }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.0[0], self.0[1])
  }
}

impl<T: Zero + Add<T, Output = T>> Zero for Point<T> {
  #[inline]
  fn zero() -> Self {
    Self([T::zero(), T::zero()])
  }

  #[inline]
  fn is_zero(&self) -> bool {
    self.iter().all(|x| x.is_zero())
  }
}

impl<T: Add<U>, U> Add<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn add(self, other: Point<U>) -> Self::Output {
    Point(zip(self.0, other.0, |x, y| x + y))
  }
}

impl<T: Sub<U>, U> Sub<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn sub(self, other: Point<U>) -> Self::Output {
    Point(zip(self.0, other.0, |x, y| x - y))
  }
}

impl<T: Mul<U>, U: Copy> Mul<U> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn mul(self, other: U) -> Self::Output {
    Point(map(self.0, |x| x * other))
  }
}

impl<T: AddAssign<U>, U: Copy> AddAssign<Point<U>> for Point<T> {
  #[inline]
  fn add_assign(&mut self, other: Point<U>) {
    for (i, x) in self.iter_mut().enumerate() {
      *x += other[i];
    }
  }
}

impl<T: Add<U>, U: Copy> Add<Point<U>> for Rect<T> {
  type Output = Rect<T::Output>;
  #[inline]
  fn add(self, other: Point<U>) -> Self::Output {
    Rect(self.0 + other, self.1 + other)
  }
}

impl<T: Sub<U>, U: Copy> Sub<Point<U>> for Rect<T> {
  type Output = Rect<T::Output>;
  #[inline]
  fn sub(self, other: Point<U>) -> Self::Output {
    Rect(self.0 - other, self.1 - other)
  }
}
