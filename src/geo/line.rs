//! Integer line drawing.

use std::mem;

use crate::geo::Point;

/// Draws a line from `from` to `to` using Bresenham's algorithm.
///
/// The returned points start at `from` and end at `to`, and consecutive
/// points are always 8-adjacent.
///
/// The line is always rasterized along increasing values of its driving axis;
/// if that means drawing it backwards, the output is reversed afterwards so
/// that it still starts at `from`. This makes the rasterization of a segment
/// independent of which end it is drawn from.
pub fn bresenham(from: Point<i64>, to: Point<i64>) -> Vec<Point<i64>> {
  let [mut x1, mut y1] = from.coords();
  let [mut x2, mut y2] = to.coords();

  let steep = (y2 - y1).abs() > (x2 - x1).abs();
  if steep {
    mem::swap(&mut x1, &mut y1);
    mem::swap(&mut x2, &mut y2);
  }

  let reversed = x1 > x2;
  if reversed {
    mem::swap(&mut x1, &mut x2);
    mem::swap(&mut y1, &mut y2);
  }

  let dx = x2 - x1;
  let dy = (y2 - y1).abs();
  let y_step = if y1 < y2 { 1 } else { -1 };

  let mut error = dx / 2;
  let mut y = y1;
  let mut points = Vec::with_capacity(dx as usize + 1);
  for x in x1..=x2 {
    points.push(if steep {
      Point::new(y, x)
    } else {
      Point::new(x, y)
    });

    error -= dy;
    if error < 0 {
      y += y_step;
      error += dx;
    }
  }

  if reversed {
    points.reverse();
  }
  points
}
