use crate::prelude::constants::MAX_TICKS_PER_SECOND;
use crate::prelude::{GameState, GridConfig, tick_interval};
use bevy::app::{App, Plugin};
use bevy::log::*;
use bevy::prelude::{Reflect, ReflectResource, Resource};
use bevy::time::{Timer, TimerMode};
use std::time::Duration;

/// A plugin that registers and initialises shared resources used across the entire application such as [`Settings`].
/// The [`GridConfig`] is validated before the app is built and must be inserted by the caller.
pub struct SharedResourcesPlugin;

impl Plugin for SharedResourcesPlugin {
  fn build(&self, app: &mut App) {
    app
      .init_resource::<Settings>()
      .register_type::<Settings>()
      .register_type::<GeneralSettings>()
      .register_type::<GridConfig>()
      .register_type::<GameState>()
      .register_type::<Ticker>();
  }
}

/// A resource that holds various settings that can be configured for the game. Intended for developer use only.
#[derive(Resource, Reflect, Clone, Copy, Default)]
#[reflect(Resource)]
pub struct Settings {
  pub general: GeneralSettings,
}

/// General settings, a child of the [`Settings`] resource. Intended for developer use only.
#[derive(Reflect, Clone, Copy, Default)]
pub struct GeneralSettings {
  /// Whether to draw the outline of every cell on the playfield.
  pub display_grid_gizmos: bool,
}

/// The fixed-rate clock that drives the game once the player has chosen a direction.
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct Ticker {
  timer: Timer,
  ticks_per_second: u32,
}

impl Ticker {
  /// Creates a ticker running at the given rate, clamped to `1..=MAX_TICKS_PER_SECOND`.
  pub fn new(ticks_per_second: u32) -> Self {
    let requested = ticks_per_second;
    let ticks_per_second = requested.clamp(1, MAX_TICKS_PER_SECOND);
    if ticks_per_second != requested {
      warn!("Requested [{}] ticks per second, using [{}] instead", requested, ticks_per_second);
    }
    Self {
      timer: Timer::new(tick_interval(ticks_per_second), TimerMode::Repeating),
      ticks_per_second,
    }
  }

  pub fn ticks_per_second(&self) -> u32 {
    self.ticks_per_second
  }

  /// The time between two ticks.
  pub fn interval(&self) -> Duration {
    self.timer.duration()
  }

  /// Starts counting from zero again, so the next tick happens one full interval from now.
  pub fn restart(&mut self) {
    self.timer.reset();
  }

  /// Advances the clock by `delta` and returns how many ticks are due.
  pub fn tick(&mut self, delta: Duration) -> u32 {
    self.timer.tick(delta).times_finished_this_tick()
  }

  /// Changes the tick rate by `delta` ticks per second, staying within `1..=MAX_TICKS_PER_SECOND`. Returns the new
  /// rate.
  pub fn adjust(&mut self, delta: i32) -> u32 {
    let ticks_per_second = i64::from(self.ticks_per_second) + i64::from(delta);
    self.ticks_per_second = ticks_per_second.clamp(1, i64::from(MAX_TICKS_PER_SECOND)) as u32;
    self.timer.set_duration(tick_interval(self.ticks_per_second));
    self.ticks_per_second
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use bevy::MinimalPlugins;

  fn setup() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, SharedResourcesPlugin));
    app
  }

  #[test]
  fn shared_resources_plugin_does_not_panic_on_empty_app() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(SharedResourcesPlugin);
  }

  #[test]
  fn shared_resources_plugin_registers_resources() {
    let app = setup();
    let settings = app.world().get_resource::<Settings>().expect("Failed to retrieve Settings");
    assert!(!settings.general.display_grid_gizmos);
  }

  #[test]
  fn ticker_fires_once_per_interval() {
    let mut ticker = Ticker::new(5);
    assert_eq!(ticker.interval(), Duration::from_millis(200));
    assert_eq!(ticker.tick(Duration::from_millis(199)), 0);
    assert_eq!(ticker.tick(Duration::from_millis(1)), 1);
    assert_eq!(ticker.tick(Duration::from_millis(100)), 0);
    assert_eq!(ticker.tick(Duration::from_millis(100)), 1);
  }

  #[test]
  fn ticker_catches_up_on_long_frames() {
    let mut ticker = Ticker::new(5);
    assert_eq!(ticker.tick(Duration::from_millis(650)), 3);
    assert_eq!(ticker.tick(Duration::from_millis(150)), 1);
  }

  #[test]
  fn ticker_restart_discards_elapsed_time() {
    let mut ticker = Ticker::new(5);
    assert_eq!(ticker.tick(Duration::from_millis(150)), 0);
    ticker.restart();
    assert_eq!(ticker.tick(Duration::from_millis(150)), 0);
    assert_eq!(ticker.tick(Duration::from_millis(50)), 1);
  }

  #[test]
  fn ticker_adjust_changes_interval_within_bounds() {
    let mut ticker = Ticker::new(5);
    assert_eq!(ticker.adjust(1), 6);
    assert_eq!(ticker.interval(), Duration::from_millis(166));
    assert_eq!(ticker.adjust(-10), 1);
    assert_eq!(ticker.interval(), Duration::from_millis(1000));
    assert_eq!(ticker.adjust(100), MAX_TICKS_PER_SECOND);
  }

  #[test]
  fn ticker_new_clamps_rate() {
    assert_eq!(Ticker::new(0).ticks_per_second(), 1);
    assert_eq!(Ticker::new(1_000).ticks_per_second(), MAX_TICKS_PER_SECOND);
  }
}
