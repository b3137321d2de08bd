use crate::prelude::constants::{MAX_TICKS_PER_SECOND, MIN_GRID_SIZE};
use bevy::prelude::{Reflect, ReflectResource, Resource};
use std::time::Duration;
use thiserror::Error;

/// The reasons a [`GridConfig`] can be rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridConfigError {
  #[error("Grid width must be at least 2 cells but was [{0}]")]
  TooNarrow(u32),
  #[error("Grid height must be at least 2 cells but was [{0}]")]
  TooShort(u32),
  #[error("Cell size must be at least 1 pixel")]
  ZeroCellSize,
  #[error("Tick rate must be at least 1 tick per second")]
  ZeroTickRate,
  #[error("Tick rate must be at most {max} ticks per second but was [{0}]", max = MAX_TICKS_PER_SECOND)]
  TickRateTooHigh(u32),
}

/// The immutable dimensions and timing of the playfield. Can only be created through [`GridConfig::new`], which
/// guarantees that the grid has room for both the player and the apple.
#[derive(Resource, Reflect, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Resource)]
pub struct GridConfig {
  width: u32,
  height: u32,
  cell_size: u32,
  ticks_per_second: u32,
}

impl GridConfig {
  pub fn new(width: u32, height: u32, cell_size: u32, ticks_per_second: u32) -> Result<Self, GridConfigError> {
    if width < MIN_GRID_SIZE {
      return Err(GridConfigError::TooNarrow(width));
    }
    if height < MIN_GRID_SIZE {
      return Err(GridConfigError::TooShort(height));
    }
    if cell_size == 0 {
      return Err(GridConfigError::ZeroCellSize);
    }
    if ticks_per_second == 0 {
      return Err(GridConfigError::ZeroTickRate);
    }
    if ticks_per_second > MAX_TICKS_PER_SECOND {
      return Err(GridConfigError::TickRateTooHigh(ticks_per_second));
    }

    Ok(Self {
      width,
      height,
      cell_size,
      ticks_per_second,
    })
  }

  /// The number of cells along the X axis.
  pub fn width(&self) -> u32 {
    self.width
  }

  /// The number of cells along the Y axis.
  pub fn height(&self) -> u32 {
    self.height
  }

  /// The edge length of a cell in pixels.
  pub fn cell_size(&self) -> u32 {
    self.cell_size
  }

  /// The tick rate the game starts with.
  pub fn ticks_per_second(&self) -> u32 {
    self.ticks_per_second
  }

  /// The width of the window in pixels.
  pub fn window_width(&self) -> u32 {
    self.width * self.cell_size
  }

  /// The height of the window in pixels.
  pub fn window_height(&self) -> u32 {
    self.height * self.cell_size
  }

  /// The time between two ticks at the configured tick rate.
  pub fn tick_interval(&self) -> Duration {
    tick_interval(self.ticks_per_second)
  }
}

/// Converts a tick rate into the time between two ticks, truncated to whole milliseconds.
pub fn tick_interval(ticks_per_second: u32) -> Duration {
  Duration::from_millis(1000 / u64::from(ticks_per_second.max(1)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_accepts_valid_dimensions() {
    let config = GridConfig::new(16, 12, 50, 5).expect("Expected a valid config");
    assert_eq!(config.width(), 16);
    assert_eq!(config.height(), 12);
    assert_eq!(config.cell_size(), 50);
    assert_eq!(config.ticks_per_second(), 5);
    assert_eq!(config.window_width(), 800);
    assert_eq!(config.window_height(), 600);
  }

  #[test]
  fn new_accepts_the_smallest_grid() {
    assert!(GridConfig::new(2, 2, 1, 1).is_ok());
  }

  #[test]
  fn new_rejects_degenerate_grids() {
    assert_eq!(GridConfig::new(1, 1, 50, 5), Err(GridConfigError::TooNarrow(1)));
    assert_eq!(GridConfig::new(0, 12, 50, 5), Err(GridConfigError::TooNarrow(0)));
    assert_eq!(GridConfig::new(16, 1, 50, 5), Err(GridConfigError::TooShort(1)));
  }

  #[test]
  fn new_rejects_zero_cell_size_and_tick_rate() {
    assert_eq!(GridConfig::new(16, 12, 0, 5), Err(GridConfigError::ZeroCellSize));
    assert_eq!(GridConfig::new(16, 12, 50, 0), Err(GridConfigError::ZeroTickRate));
  }

  #[test]
  fn new_rejects_tick_rates_the_ticker_cannot_run_at() {
    assert!(GridConfig::new(16, 12, 50, MAX_TICKS_PER_SECOND).is_ok());
    assert_eq!(
      GridConfig::new(16, 12, 50, MAX_TICKS_PER_SECOND + 1),
      Err(GridConfigError::TickRateTooHigh(31))
    );
  }

  #[test]
  fn tick_interval_is_a_thousand_milliseconds_divided_by_tick_rate() {
    let config = GridConfig::new(16, 12, 50, 5).expect("Expected a valid config");
    assert_eq!(config.tick_interval(), Duration::from_millis(200));
    assert_eq!(tick_interval(3), Duration::from_millis(333));
    assert_eq!(tick_interval(30), Duration::from_millis(33));
  }

  #[test]
  fn errors_display_the_offending_value() {
    assert_eq!(
      GridConfigError::TooNarrow(1).to_string(),
      "Grid width must be at least 2 cells but was [1]"
    );
    assert_eq!(
      GridConfigError::TickRateTooHigh(31).to_string(),
      "Tick rate must be at most 30 ticks per second but was [31]"
    );
  }
}
