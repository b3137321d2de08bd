use crate::prelude::Direction;
use bevy::app::{App, Plugin};
use bevy::prelude::Message;

/// A plugin that registers all shared messages used across multiple plugins and systems.
pub struct SharedMessagesPlugin;

impl Plugin for SharedMessagesPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_message::<GameCommand>()
      .add_message::<AdjustTickRateMessage>()
      .add_message::<RestartMessage>();
  }
}

/// A command that changes the [`crate::prelude::GameState`]. Written by the keyboard and by the ticker, read and
/// applied in order by a single system so that the two sources never interleave.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
  /// The player asked to head in the given direction.
  Turn(Direction),
  /// The fixed-rate ticker fired.
  Tick,
}

/// A request to change the tick rate by the given number of ticks per second.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustTickRateMessage(pub i32);

/// A request to start over with a fresh round.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartMessage;
