//! Terminal front end: walk around a level and look through its portals.

#![deny(unused)]
#![deny(warnings)]

use std::borrow::Cow;

use anyhow::Context as _;

use portalsight::config::Config;
use portalsight::geo::Point;
use portalsight::input;
use portalsight::input::Command;
use portalsight::loader;
use portalsight::map::Board;
use portalsight::map::Level;
use portalsight::map::Tile;
use portalsight::map::TileKind;
use portalsight::rays::RayConfig;
use portalsight::rays::RayTable;
use portalsight::render::curses::Curses;
use portalsight::render::Renderer;
use portalsight::session::Session;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into()),
    )
    .with_writer(std::io::stderr)
    .init();

  let config = Config::from_env();

  let rays: Cow<'static, RayTable> = if config.rays == RayConfig::default() {
    Cow::Borrowed(RayTable::shared())
  } else {
    Cow::Owned(RayTable::new(config.rays).context("building ray geometry")?)
  };

  let (board, start) = load_board(&config)?;
  let mut session = Session::new(board, &rays);
  let player = session.spawn(start);

  let mut window = Curses::init().context("setting up the terminal")?;
  let mut renderer = Renderer::new();
  loop {
    session.raycast(player)?;
    let obs = session.observer(player)?;
    renderer.bake(obs.view(), session.board(), &mut window)?;

    match input::command(window.next_key()?) {
      Some(Command::Walk(dir)) => {
        session.walk(player, dir)?;
      }
      Some(Command::Quit) => break,
      None => {}
    }
  }

  Ok(())
}

/// Loads the configured level and portals, or makes up a random level if
/// there is no level file.
fn load_board(config: &Config) -> anyhow::Result<(Board, Point)> {
  if config.map_path.exists() {
    let portals = Some(config.portal_path.as_path()).filter(|p| p.exists());
    return loader::load(&config.map_path, portals)
      .with_context(|| format!("loading {}", config.map_path.display()));
  }

  tracing::warn!(
    path = %config.map_path.display(),
    "no level file, generating a random level"
  );
  let size = config.fallback_size.max(1);
  let mut level = Level::scatter(size, size, &mut rand::thread_rng());
  let start = Point::new(size as i64 / 2, size as i64 / 2);
  level.set(start, Tile::new(TileKind::Floor))?;
  Ok((Board::new(level, vec![])?, start))
}
