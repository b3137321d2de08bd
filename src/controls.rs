use crate::app_states::AppState;
use crate::game_loop::GameLoopSet;
use crate::prelude::{AdjustTickRateMessage, Direction, GameCommand, RestartMessage};
use bevy::app::{App, Plugin, Update};
use bevy::input::ButtonInput;
use bevy::log::*;
use bevy::prelude::{IntoScheduleConfigs, KeyCode, MessageWriter, Res, SystemCondition, in_state};

/// A plugin that turns keyboard input into messages. Never changes game state directly.
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(
      Update,
      (
        direction_input_system.run_if(in_state(AppState::Waiting).or(in_state(AppState::Running))),
        restart_input_system.run_if(in_state(AppState::Waiting).or(in_state(AppState::Running))),
        tick_rate_input_system,
      )
        .in_set(GameLoopSet::Input),
    );
  }
}

/// Maps the arrow keys and WASD to a [`Direction`]. All other keys map to nothing.
fn direction_from_key_code(key_code: KeyCode) -> Option<Direction> {
  match key_code {
    KeyCode::ArrowUp | KeyCode::KeyW => Some(Direction::Up),
    KeyCode::ArrowDown | KeyCode::KeyS => Some(Direction::Down),
    KeyCode::ArrowLeft | KeyCode::KeyA => Some(Direction::Left),
    KeyCode::ArrowRight | KeyCode::KeyD => Some(Direction::Right),
    _ => None,
  }
}

/// Sends a [`GameCommand::Turn`] for every direction key pressed this frame. Whether the turn is allowed is decided
/// when the command is applied.
fn direction_input_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut game_commands: MessageWriter<GameCommand>) {
  for key_code in keyboard_input.get_just_pressed() {
    if let Some(direction) = direction_from_key_code(*key_code) {
      trace!("[{:?}] requested turn to [{}]", key_code, direction);
      game_commands.write(GameCommand::Turn(direction));
    }
  }
}

/// Sends a [`RestartMessage`] when the player presses F5 or R.
fn restart_input_system(keyboard_input: Res<ButtonInput<KeyCode>>, mut restart_message: MessageWriter<RestartMessage>) {
  if keyboard_input.any_just_pressed([KeyCode::F5, KeyCode::KeyR]) {
    restart_message.write(RestartMessage);
  }
}

/// Sends an [`AdjustTickRateMessage`] when the player presses plus or minus.
fn tick_rate_input_system(
  keyboard_input: Res<ButtonInput<KeyCode>>,
  mut tick_rate_message: MessageWriter<AdjustTickRateMessage>,
) {
  if keyboard_input.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
    tick_rate_message.write(AdjustTickRateMessage(1));
  }
  if keyboard_input.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
    tick_rate_message.write(AdjustTickRateMessage(-1));
  }
}
