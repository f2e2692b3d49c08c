//! `curses` helper library.
//!
//! Note that this module doesn't *actually* use `libcurses`, and merely
//! emulates its behavior at a high level in terms of `crossterm`.

use std::io;

use crossterm::event::Event;
use crossterm::event::KeyEvent;
use crossterm::style::Color;

use crate::render::texel::Texel;

/// A low-level curses context.
///
/// The terminal is put back the way it was when this is dropped.
pub struct Curses<W: io::Write = io::Stdout> {
  w: W,
}

impl Curses {
  /// Initializes the `curses` environment on `stdout`.
  pub fn init() -> crossterm::Result<Curses> {
    Curses::with(io::stdout())
  }
}

impl<W: io::Write> Curses<W> {
  /// Initializes the `curses` environment for `w`.
  pub fn with(mut w: W) -> crossterm::Result<Curses<W>> {
    crossterm::execute!(
      w,
      crossterm::terminal::EnterAlternateScreen,
      crossterm::cursor::Hide,
      crossterm::terminal::DisableLineWrap,
    )?;
    crossterm::terminal::enable_raw_mode()?;

    Ok(Curses { w })
  }

  /// Returns the current dimensions of the terminal window, as
  /// `(rows, cols)`.
  pub fn dims(&self) -> crossterm::Result<(usize, usize)> {
    let (cols, rows) = crossterm::terminal::size()?;
    Ok((rows as _, cols as _))
  }

  /// Queues drawing `texel` at the given location on the screen.
  pub fn draw(
    &mut self,
    row: usize,
    col: usize,
    texel: Texel,
  ) -> crossterm::Result<()> {
    let fg = match texel.fg() {
      Some(rgb) => Color::Rgb {
        r: rgb.red,
        g: rgb.green,
        b: rgb.blue,
      },
      None => Color::Reset,
    };

    crossterm::queue!(
      self.w,
      crossterm::cursor::MoveTo(col as _, row as _),
      crossterm::style::SetForegroundColor(fg),
      crossterm::style::Print(texel.glyph()),
    )
  }

  /// Pushes queued draws out to the terminal.
  pub fn flush(&mut self) -> crossterm::Result<()> {
    self.w.flush()?;
    Ok(())
  }

  /// Blocks until a key is pressed.
  pub fn next_key(&mut self) -> crossterm::Result<KeyEvent> {
    loop {
      if let Event::Key(e) = crossterm::event::read()? {
        return Ok(e);
      }
    }
  }

  /// Clean up whatever mess the terminal made.
  fn cleanup(&mut self) -> crossterm::Result<()> {
    crossterm::execute!(
      self.w,
      crossterm::style::ResetColor,
      crossterm::terminal::LeaveAlternateScreen,
      crossterm::cursor::Show,
      crossterm::terminal::EnableLineWrap,
    )?;
    crossterm::terminal::disable_raw_mode()?;
    self.w.flush()?;
    Ok(())
  }
}

impl<W: io::Write> Drop for Curses<W> {
  fn drop(&mut self) {
    if let Err(e) = self.cleanup() {
      tracing::error!(error = %e, "failed to restore terminal");
    }
  }
}
