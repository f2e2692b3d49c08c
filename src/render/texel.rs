//! Texels, terminal elements.
//!
//! A *texel* is a glyph plus an optional foreground color: everything needed
//! to draw one terminal cell.

pub use palette::named as colors;

use crate::map::Tile;
use crate::map::TileKind;

/// A color used by a [`Texel`].
pub type Color = palette::Srgb<u8>;

/// A "terminal element", analogous to a pixel or voxel.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Texel {
  glyph: char,
  fg: Option<Color>,
}

impl Texel {
  /// Creates a new colorless texel with the given glyph.
  #[inline]
  pub fn new(glyph: char) -> Self {
    Self { glyph, fg: None }
  }

  /// Returns a copy of this texel with the given foreground color.
  #[inline]
  pub fn with_fg(self, fg: Color) -> Self {
    Self {
      fg: Some(fg),
      ..self
    }
  }

  /// Returns the texel that draws `tile`.
  pub fn of_tile(tile: Tile) -> Self {
    let t = Texel::new(tile.glyph());
    match tile.kind() {
      TileKind::None => t.with_fg(colors::DIMGRAY),
      TileKind::Floor => t.with_fg(colors::GOLD),
      TileKind::Wall => t.with_fg(colors::WHITE),
      TileKind::Glass => t.with_fg(colors::CYAN),
    }
  }

  /// Returns the glyph.
  #[inline]
  pub fn glyph(self) -> char {
    self.glyph
  }

  /// Returns the foreground color, if one is present.
  #[inline]
  pub fn fg(self) -> Option<Color> {
    self.fg
  }
}
