use crate::app_states::AppState;
use crate::prelude::{AdjustTickRateMessage, GameCommand, GameState, RestartMessage, Ticker};
use bevy::app::{App, Plugin};
use bevy::prelude::*;

/// A plugin that manages the main game loop: it drives the ticker and applies every [`GameCommand`] to the
/// [`GameState`].
pub struct GameLoopPlugin;

impl Plugin for GameLoopPlugin {
  fn build(&self, app: &mut App) {
    app
      .configure_sets(
        Update,
        (GameLoopSet::Input, GameLoopSet::Tick, GameLoopSet::Apply, GameLoopSet::Render).chain(),
      )
      .add_systems(OnEnter(AppState::Running), start_ticker_system)
      .add_systems(Update, tick_system.run_if(in_state(AppState::Running)).in_set(GameLoopSet::Tick))
      .add_systems(
        Update,
        (
          (apply_game_commands_system, restart_system).chain(),
          adjust_tick_rate_system.run_if(resource_exists::<Ticker>),
        )
          .run_if(in_state(AppState::Waiting).or(in_state(AppState::Running)))
          .in_set(GameLoopSet::Apply),
      );
  }
}

/// The order in which the game loop runs within a frame. Input is turned into commands first, then the ticker adds its
/// own, then all commands are applied, and only then is anything drawn.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameLoopSet {
  Input,
  Tick,
  Apply,
  Render,
}

/// Starts the ticker from zero so that the first move happens one full interval after the first accepted key press.
fn start_ticker_system(mut ticker: ResMut<Ticker>) {
  ticker.restart();
  info!(
    "Started ticker at [{}] ticks per second, ticking every [{:?}]",
    ticker.ticks_per_second(),
    ticker.interval()
  );
}

/// Advances the ticker and sends one [`GameCommand::Tick`] for every tick that is due.
fn tick_system(time: Res<Time>, mut ticker: ResMut<Ticker>, mut game_commands: MessageWriter<GameCommand>) {
  let due = ticker.tick(time.delta());
  for _ in 0..due {
    game_commands.write(GameCommand::Tick);
  }
}

/// The only system that changes the [`GameState`]. Commands are applied in the order they were written, which means
/// key presses from this frame are applied before this frame's ticks.
fn apply_game_commands_system(
  mut game_commands: MessageReader<GameCommand>,
  mut game_state: ResMut<GameState>,
  app_state: Res<State<AppState>>,
  mut next_app_state: ResMut<NextState<AppState>>,
) {
  for command in game_commands.read() {
    match command {
      GameCommand::Turn(direction) => {
        if !game_state.turn(*direction) {
          debug!("Rejected turn from [{}] to [{}]", game_state.direction(), direction);
          continue;
        }
        debug!("Player at {} is now heading [{}]", game_state.player(), direction);
        if *app_state.get() == AppState::Waiting {
          next_app_state.set(AppState::Running);
        }
      }
      GameCommand::Tick => {
        game_state.advance();
        trace!("Moved player to {}", game_state.player());
      }
    }
  }
}

/// Starts a fresh round by going back to [`AppState::Initialising`]. Runs after [`apply_game_commands_system`] so that
/// a restart overrides a turn that would start the game in the same frame.
fn restart_system(
  mut restart_messages: MessageReader<RestartMessage>,
  mut next_app_state: ResMut<NextState<AppState>>,
) {
  if restart_messages.read().count() == 0 {
    return;
  }
  info!("Restarting the game");
  next_app_state.set(AppState::Initialising);
}

/// Changes the tick rate. Takes effect immediately, also while the ticker is running.
fn adjust_tick_rate_system(mut tick_rate_messages: MessageReader<AdjustTickRateMessage>, mut ticker: ResMut<Ticker>) {
  for message in tick_rate_messages.read() {
    let ticks_per_second = ticker.adjust(message.0);
    info!("Set tick rate to [{}] ticks per second", ticks_per_second);
  }
}
