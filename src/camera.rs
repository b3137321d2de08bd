use crate::prelude::constants::BACKGROUND_COLOUR;
use bevy::app::{App, Plugin, Startup};
use bevy::prelude::*;

/// A plugin that sets up the one camera looking at the centre of the playfield.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
  fn build(&self, app: &mut App) {
    app
      .insert_resource(ClearColor(Color::from(BACKGROUND_COLOUR)))
      .add_systems(Startup, setup_camera_system);
  }
}

#[derive(Component)]
struct InGameCamera;

fn setup_camera_system(mut commands: Commands) {
  commands.spawn((Name::new("Camera"), Camera2d, Msaa::Off, InGameCamera));
}
