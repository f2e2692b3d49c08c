//! A playing session: one board, the observers on it, and the ray geometry
//! they look through.

use crate::error::Error;
use crate::error::Result;
use crate::geo::Dir;
use crate::geo::Point;
use crate::map::Board;
use crate::rays::RayTable;
use crate::view::Observer;

/// Identifies an observer within a [`Session`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct ObserverId(usize);

/// Owns a [`Board`] and every [`Observer`] on it.
///
/// Each observer keeps its own view; the board is only ever borrowed
/// immutably while views are computed.
pub struct Session<'r> {
  rays: &'r RayTable,
  board: Board,
  observers: Vec<Observer>,
}

impl<'r> Session<'r> {
  /// Starts a session on `board`, with no observers.
  pub fn new(board: Board, rays: &'r RayTable) -> Self {
    Self {
      rays,
      board,
      observers: Vec::new(),
    }
  }

  pub fn board(&self) -> &Board {
    &self.board
  }

  /// Returns the board for editing. Views computed before an edit are stale
  /// until the next raycast.
  pub fn board_mut(&mut self) -> &mut Board {
    &mut self.board
  }

  pub fn rays(&self) -> &'r RayTable {
    self.rays
  }

  /// Places a new observer at `pos`.
  pub fn spawn(&mut self, pos: Point) -> ObserverId {
    self.observers.push(Observer::new(pos));
    ObserverId(self.observers.len() - 1)
  }

  pub fn observer(&self, id: ObserverId) -> Result<&Observer> {
    self
      .observers
      .get(id.0)
      .ok_or(Error::UnknownObserver(id.0))
  }

  /// Moves an observer one step. See [`Observer::walk()`].
  pub fn walk(&mut self, id: ObserverId, dir: Dir) -> Result<bool> {
    let board = &self.board;
    let obs = self
      .observers
      .get_mut(id.0)
      .ok_or(Error::UnknownObserver(id.0))?;
    Ok(obs.walk(board, dir))
  }

  /// Recomputes one observer's view.
  pub fn raycast(&mut self, id: ObserverId) -> Result<()> {
    let (board, rays) = (&self.board, self.rays);
    let obs = self
      .observers
      .get_mut(id.0)
      .ok_or(Error::UnknownObserver(id.0))?;
    obs.raycast(board, rays);
    Ok(())
  }

  /// Recomputes every observer's view.
  pub fn raycast_all(&mut self) {
    for obs in &mut self.observers {
      obs.raycast(&self.board, self.rays);
    }
  }
}
