//! Drawing an observer's view onto the terminal.

use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;
use crate::map::Board;
use crate::render::texel::colors;
use crate::render::texel::Texel;
use crate::view::View;

pub mod curses;
pub mod texel;

/// A global rendering context.
///
/// Keeps the last frame around so that only cells that changed are sent to
/// the terminal.
pub struct Renderer {
  baked: RectVec<Texel>,
  scratch: RectVec<Texel>,
}

impl Renderer {
  /// Creates a new `Renderer`.
  pub fn new() -> Self {
    Self {
      baked: RectVec::empty(),
      scratch: RectVec::empty(),
    }
  }

  /// Composes a frame showing `view`, with the observer in the middle of a
  /// `cols` by `rows` screen.
  ///
  /// Frame coordinates are screen coordinates: x is the column and y is the
  /// row, counting *down*. View space counts up, so it is mirrored here.
  pub fn compose(
    &mut self,
    view: &View,
    board: &Board,
    rows: usize,
    cols: usize,
  ) -> &RectVec<Texel> {
    let screen = Rect::with_dims(cols as i64, rows as i64);
    let void = Texel::new('.').with_fg(colors::DIMGRAY);
    self.scratch.resize(screen, void);

    let center = Point::new(cols as i64 / 2, rows as i64 / 2);
    let to_screen =
      |rel: Point| Point::new(center.x() + rel.x(), center.y() - rel.y());
    for (rel, real) in view.iter() {
      if let Some(slot) = self.scratch.get_mut(to_screen(rel)) {
        *slot = Texel::of_tile(board.tile(real));
      }
    }
    if let Some(slot) = self.scratch.get_mut(center) {
      *slot = Texel::new('@').with_fg(colors::RED);
    }

    &self.scratch
  }

  /// Composes a frame and draws it onto `window`.
  pub fn bake(
    &mut self,
    view: &View,
    board: &Board,
    window: &mut curses::Curses,
  ) -> crossterm::Result<()> {
    let (rows, cols) = window.dims()?;
    self.compose(view, board, rows, cols);

    let full_redraw = self.baked.dims() != self.scratch.dims();
    for (p, &texel) in self.scratch.points() {
      if !full_redraw && self.baked.get(p) == Some(&texel) {
        continue;
      }
      window.draw(p.y() as usize, p.x() as usize, texel)?;
    }
    window.flush()?;

    std::mem::swap(&mut self.baked, &mut self.scratch);
    Ok(())
  }
}

impl Default for Renderer {
  fn default() -> Self {
    Self::new()
  }
}
