//! Level and portal file parsing.
//!
//! Level files are plain text, one row per line; column `i` of line `j` is
//! the tile at `(i, j)`:
//!
//! ```text
//! #    wall
//!      floor (space)
//! @    floor, and where the observer starts
//! ~    glass
//! 0-9  floor, drawn as the digit
//! ```
//!
//! Portal files hold one portal per line, as six integers:
//! `orientation x1 y1 x2 y2 oneway` (see [`Portal::from_record()`]).

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Error;
use crate::geo::Point;
use crate::map::Board;
use crate::map::Level;
use crate::map::Portal;
use crate::map::Tile;
use crate::map::TileKind;

/// Errors from loading level or portal files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
  #[error("could not read {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: io::Error,
  },

  /// The level file has no rows.
  #[error("level is empty")]
  Empty,

  /// The level file has no `@`.
  #[error("level has no starting position")]
  NoStart,

  /// A portal line is malformed.
  #[error("portal line {line}: {reason}")]
  Portal { line: usize, reason: String },

  #[error(transparent)]
  Board(#[from] Error),
}

/// A parsed level file.
#[derive(Clone, Debug)]
pub struct ParsedLevel {
  pub level: Level,
  pub start: Point,
}

/// Parses the contents of a level file.
///
/// The level is as wide as its longest line; cells past the end of shorter
/// lines are walls, as are unknown characters.
pub fn parse_level(text: &str) -> Result<ParsedLevel, LoadError> {
  let rows: Vec<&str> = text.lines().collect();
  let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
  if rows.is_empty() || width == 0 {
    return Err(LoadError::Empty);
  }

  let mut level = Level::new(width, rows.len(), Tile::new(TileKind::Wall));
  let mut start = None;
  for (y, row) in rows.iter().enumerate() {
    for (x, c) in row.chars().enumerate() {
      let pos = Point::new(x as i64, y as i64);
      let tile = match c {
        '#' => Tile::new(TileKind::Wall),
        ' ' => Tile::new(TileKind::Floor),
        '~' => Tile::new(TileKind::Glass),
        '@' => {
          start = Some(pos);
          Tile::new(TileKind::Floor)
        }
        '0'..='9' => Tile::with_decal(TileKind::Floor, c),
        _ => {
          tracing::warn!(%pos, glyph = ?c, "unrecognized character in level");
          continue;
        }
      };
      level.set(pos, tile)?;
    }
  }

  let start = start.ok_or(LoadError::NoStart)?;
  let (width, height) = level.size();
  tracing::info!(width, height, %start, "parsed level");
  Ok(ParsedLevel { level, start })
}

/// Parses the contents of a portal file. Blank lines are skipped.
pub fn parse_portals(text: &str) -> Result<Vec<Portal>, LoadError> {
  let mut portals = Vec::new();
  for (i, line) in text.lines().enumerate() {
    let line_no = i + 1;
    if line.trim().is_empty() {
      continue;
    }

    let fields = line
      .split_whitespace()
      .map(str::parse::<i64>)
      .collect::<Result<Vec<_>, _>>()
      .map_err(|e| LoadError::Portal {
        line: line_no,
        reason: e.to_string(),
      })?;
    let (o, x1, y1, x2, y2, w) = match fields.as_slice() {
      &[o, x1, y1, x2, y2, w] => (o, x1, y1, x2, y2, w),
      _ => {
        return Err(LoadError::Portal {
          line: line_no,
          reason: format!("expected 6 fields, found {}", fields.len()),
        })
      }
    };

    let portal =
      Portal::from_record(o, Point::new(x1, y1), Point::new(x2, y2), w)
        .map_err(|e| LoadError::Portal {
          line: line_no,
          reason: e.to_string(),
        })?;
    portals.push(portal);
  }
  Ok(portals)
}

fn read(path: &Path) -> Result<String, LoadError> {
  fs::read_to_string(path).map_err(|source| LoadError::Io {
    path: path.display().to_string(),
    source,
  })
}

/// Loads a level file and an optional portal file into a [`Board`], returning
/// it alongside the starting position.
pub fn load(
  level_path: &Path,
  portal_path: Option<&Path>,
) -> Result<(Board, Point), LoadError> {
  let ParsedLevel { level, start } = parse_level(&read(level_path)?)?;
  let portals = match portal_path {
    Some(path) => parse_portals(&read(path)?)?,
    None => Vec::new(),
  };
  Ok((Board::new(level, portals)?, start))
}
