//! Field of view on a tile grid threaded with portals.
//!
//! Vision is computed by walking a fixed set of precomputed rays (see
//! [`rays`]) out of an observer, one step at a time. Each step goes through
//! [`map::Board::step()`], which may teleport the ray through a portal, and
//! rays stop at the first opaque tile. The result is a [`view::View`]: a map
//! from cells around the observer, as drawn on screen, to the real cells seen
//! there.

#![deny(unused)]
#![deny(warnings)]

pub mod config;
pub mod error;
pub mod geo;
pub mod input;
pub mod loader;
pub mod map;
pub mod rays;
pub mod render;
pub mod session;
pub mod view;

pub use error::Error;
pub use error::Result;
