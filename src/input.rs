//! Keyboard commands.

pub use crossterm::event::KeyCode;
pub use crossterm::event::KeyEvent;
pub use crossterm::event::KeyModifiers;

use crate::geo::Dir;

/// Something the player asked for.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
  /// Step the observer.
  Walk(Dir),
  /// Leave the game.
  Quit,
}

/// Maps a key press to a [`Command`], if it means anything.
///
/// Arrow keys, WASD and hjkl-style letters walk orthogonally; diagonals are
/// on the corners of WASD:
///
/// ```text
///  \  |  /
///   q w e
/// - a   d -
///   z s c
///  /  |  \
/// ```
pub fn command(key: KeyEvent) -> Option<Command> {
  if key.modifiers.contains(KeyModifiers::CONTROL)
    && key.code == KeyCode::Char('c')
  {
    return Some(Command::Quit);
  }

  let dir = match key.code {
    KeyCode::Esc => return Some(Command::Quit),
    KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Dir::Right,
    KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('j') => Dir::Up,
    KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Dir::Left,
    KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('k') => Dir::Down,
    KeyCode::Char('e') => Dir::UpRight,
    KeyCode::Char('q') => Dir::UpLeft,
    KeyCode::Char('z') => Dir::DownLeft,
    KeyCode::Char('c') => Dir::DownRight,
    _ => return None,
  };
  Some(Command::Walk(dir))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
      code,
      modifiers: KeyModifiers::empty(),
    }
  }

  #[test]
  fn movement_keys() {
    assert_eq!(command(key(KeyCode::Up)), Some(Command::Walk(Dir::Up)));
    assert_eq!(
      command(key(KeyCode::Char('j'))),
      Some(Command::Walk(Dir::Up))
    );
    assert_eq!(
      command(key(KeyCode::Char('c'))),
      Some(Command::Walk(Dir::DownRight))
    );
    assert_eq!(command(key(KeyCode::Char('x'))), None);
  }

  #[test]
  fn quitting() {
    assert_eq!(command(key(KeyCode::Esc)), Some(Command::Quit));
    let ctrl_c = KeyEvent {
      code: KeyCode::Char('c'),
      modifiers: KeyModifiers::CONTROL,
    };
    assert_eq!(command(ctrl_c), Some(Command::Quit));
  }
}
