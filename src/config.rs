//! Runtime configuration.

use std::env;
use std::path::PathBuf;

use crate::rays::RayConfig;
use crate::rays::MAX_RAY_COUNT;
use crate::rays::MAX_VIEW_DISTANCE;

/// Settings for the terminal game.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
  /// Ray geometry to see with.
  pub rays: RayConfig,
  /// Path to the level file.
  pub map_path: PathBuf,
  /// Path to the portal file; missing files mean "no portals".
  pub portal_path: PathBuf,
  /// Size of the random level generated when there is no level file.
  pub fallback_size: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      rays: RayConfig::default(),
      map_path: PathBuf::from("map/mapdata"),
      portal_path: PathBuf::from("map/portals"),
      fallback_size: 40,
    }
  }
}

impl Config {
  /// Construct configuration from environment variables.
  ///
  /// Environment variables:
  /// - `PORTALSIGHT_VIEW_DISTANCE` - Length of each ray in tiles (default: 20,
  ///   clamped to 1..=256)
  /// - `PORTALSIGHT_RAYS` - Number of primary rays (default: 300, clamped to
  ///   1..=4096)
  /// - `PORTALSIGHT_MAP` - Level file (default: `map/mapdata`)
  /// - `PORTALSIGHT_PORTALS` - Portal file (default: `map/portals`)
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let mut config = Self::default();

    if let Some(r) = parse::<i64>(&lookup, "PORTALSIGHT_VIEW_DISTANCE") {
      config.rays.radius = r.clamp(1, MAX_VIEW_DISTANCE);
    }
    if let Some(n) = parse::<usize>(&lookup, "PORTALSIGHT_RAYS") {
      config.rays.ray_count = n.clamp(1, MAX_RAY_COUNT);
    }
    if let Some(path) = lookup("PORTALSIGHT_MAP") {
      config.map_path = path.into();
    }
    if let Some(path) = lookup("PORTALSIGHT_PORTALS") {
      config.portal_path = path.into();
    }

    config
  }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
  T: std::str::FromStr,
{
  lookup(key)?.trim().parse().ok()
}
