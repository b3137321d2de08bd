#![cfg(feature = "dev")]

mod controls;
mod gizmos;

use crate::debug::controls::DebugControlsPlugin;
use crate::debug::gizmos::GizmosPlugin;
use crate::prelude::{GameState, Ticker};
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::input::common_conditions::input_toggle_active;
use bevy::prelude::{App, KeyCode, Plugin};
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::{ResourceInspectorPlugin, WorldInspectorPlugin};

/// A plugin that adds debugging tools that only exist with the `dev` feature:
/// - F1 toggles the world inspector
/// - F2 toggles an inspector for the current round and the ticker
/// - F9 toggles the grid gizmos
pub struct DebugPlugin;

impl Plugin for DebugPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_plugins(EguiPlugin::default())
      .add_plugins(FrameTimeDiagnosticsPlugin::default())
      .add_plugins(WorldInspectorPlugin::default().run_if(input_toggle_active(false, KeyCode::F1)))
      .add_plugins(ResourceInspectorPlugin::<GameState>::default().run_if(input_toggle_active(false, KeyCode::F2)))
      .add_plugins(ResourceInspectorPlugin::<Ticker>::default().run_if(input_toggle_active(false, KeyCode::F2)))
      .add_plugins((DebugControlsPlugin, GizmosPlugin));
  }
}
