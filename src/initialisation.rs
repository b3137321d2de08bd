use crate::app_states::AppState;
use crate::prelude::{GameState, GridConfig, Ticker};
use bevy::app::{App, Plugin};
use bevy::log::*;
use bevy::prelude::{Commands, IntoScheduleConfigs, NextState, OnEnter, Res, ResMut};

/// A plugin that sets up a round by placing the player and the apple and preparing the ticker. Runs at application
/// start and again after every restart.
pub struct InitialisationPlugin;

impl Plugin for InitialisationPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(
      OnEnter(AppState::Initialising),
      (reset_game_state_system, prepare_ticker_system, finish_initialisation_system).chain(),
    );
  }
}

/// Runs last in the initialisation chain and hands over to [`AppState::Waiting`].
fn finish_initialisation_system(mut next_state: ResMut<NextState<AppState>>) {
  debug!("✅  Initialisation completed");
  next_state.set(AppState::Waiting);
}

/// Puts the player on a random cell without a direction and places the apple somewhere else. Creates the
/// [`GameState`] on first use.
fn reset_game_state_system(mut commands: Commands, config: Res<GridConfig>, game_state: Option<ResMut<GameState>>) {
  let mut rng = rand::rng();
  match game_state {
    Some(mut game_state) => {
      game_state.reset(&mut rng);
      debug!("Reset player to {} and apple to {}", game_state.player(), game_state.apple());
    }
    None => {
      let game_state = GameState::new(&config, &mut rng);
      debug!(
        "Placed player at {} and apple at {} on a {}x{} grid",
        game_state.player(),
        game_state.apple(),
        config.width(),
        config.height()
      );
      commands.insert_resource(game_state);
    }
  }
}

/// Creates the [`Ticker`] on first use. An existing ticker keeps its tick rate so that adjustments survive a restart.
fn prepare_ticker_system(mut commands: Commands, config: Res<GridConfig>, ticker: Option<Res<Ticker>>) {
  if ticker.is_none() {
    commands.insert_resource(Ticker::new(config.ticks_per_second()));
    debug!("Created ticker at [{}] ticks per second", config.ticks_per_second());
  }
}
