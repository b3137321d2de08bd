use crate::prelude::Settings;
use bevy::app::{App, Plugin, Update};
use bevy::input::ButtonInput;
use bevy::log::info;
use bevy::prelude::{KeyCode, Res, ResMut};

/// A plugin that manages debug related controls that do not exist in release builds.
pub struct DebugControlsPlugin;

impl Plugin for DebugControlsPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Update, debug_controls_system);
  }
}

/// A system that handles debug related controls such as toggling the grid gizmos.
fn debug_controls_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut settings: ResMut<Settings>) {
  if keyboard_input.just_pressed(KeyCode::F9) {
    settings.general.display_grid_gizmos = !settings.general.display_grid_gizmos;
    info!("[F9] Set display grid gizmos to [{}]", settings.general.display_grid_gizmos);
  }
}
