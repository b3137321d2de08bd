use bevy::app::{App, Plugin, Update};
use bevy::log::*;
use bevy::prelude::{AppExtStates, MessageReader, State, StateTransitionEvent, States};
use bevy::reflect::Reflect;
use std::fmt::Display;

/// A plugin that introduces and manages the main application states.
pub struct AppStatePlugin;

impl Plugin for AppStatePlugin {
  fn build(&self, app: &mut App) {
    app
      .init_state::<AppState>()
      .register_type::<State<AppState>>()
      .add_systems(Update, log_app_state_transitions_system);
  }
}

/// The main application states for this application. Drives the overall flow of the game.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States, Reflect)]
pub enum AppState {
  /// Places the player and the apple. Runs at application start and after every restart.
  #[default]
  Initialising,
  /// The round is set up but the player hasn't chosen a direction yet. The ticker is not running.
  Waiting,
  /// The ticker is running and moves the player on every tick. There is no way back to [`AppState::Waiting`] other
  /// than restarting.
  Running,
}

impl Display for AppState {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}

fn log_app_state_transitions_system(mut app_state_messages: MessageReader<StateTransitionEvent<AppState>>) {
  for message in app_state_messages.read() {
    match (message.exited, message.entered) {
      (Some(exited), Some(entered)) => info!("Transitioning from [{}] to [{}]", exited, entered),
      (None, Some(entered)) => info!("Entering initial state [{}]", entered),
      _ => {}
    }
  }
}
