mod app_states;
mod camera;
mod controls;
#[cfg(feature = "dev")]
mod debug;
mod game_loop;
mod game_world;
mod initialisation;
mod shared;

mod prelude {
  pub use crate::shared::*;
}

#[cfg(feature = "dev")]
use crate::debug::DebugPlugin;

use crate::app_states::AppStatePlugin;
use crate::camera::CameraPlugin;
use crate::controls::ControlsPlugin;
use crate::game_loop::GameLoopPlugin;
use crate::game_world::GameWorldPlugin;
use crate::initialisation::InitialisationPlugin;
use crate::prelude::constants::*;
use crate::prelude::*;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() -> AppExit {
  let mut app = App::new();
  app.add_plugins(LogPlugin::default());

  let config = match GridConfig::new(GRID_WIDTH, GRID_HEIGHT, CELL_SIZE, TICKS_PER_SECOND) {
    Ok(config) => config,
    Err(e) => {
      error!("Refusing to start with an invalid grid: {}", e);
      return AppExit::error();
    }
  };
  info!(
    "Starting [{}] on a {}x{} grid at [{}] ticks per second, ticking every [{:?}]",
    WINDOW_TITLE,
    config.width(),
    config.height(),
    config.ticks_per_second(),
    config.tick_interval()
  );

  app
    .add_plugins(DefaultPlugins.build().disable::<LogPlugin>().set(WindowPlugin {
      primary_window: Some(Window {
        title: WINDOW_TITLE.to_string(),
        resolution: WindowResolution::new(config.window_width(), config.window_height()),
        resizable: false,
        ..default()
      }),
      ..default()
    }))
    .insert_resource(config)
    .add_plugins((
      CameraPlugin,
      AppStatePlugin,
      GameWorldPlugin,
      SharedResourcesPlugin,
      SharedMessagesPlugin,
      InitialisationPlugin,
      GameLoopPlugin,
      ControlsPlugin,
    ));

  #[cfg(feature = "dev")]
  app.add_plugins(DebugPlugin);

  app.run()
}
