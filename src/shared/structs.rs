use bevy::prelude::Reflect;
use rand::Rng;
use std::fmt::Display;

/// A cell on the playfield. Row `0` is the top row, so `y` grows downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub struct Position {
  pub x: u32,
  pub y: u32,
}

impl Position {
  pub fn new(x: u32, y: u32) -> Self {
    Self { x, y }
  }

  /// Picks a uniformly random cell on a grid of the given size.
  pub fn random<R: Rng + ?Sized>(rng: &mut R, width: u32, height: u32) -> Self {
    Self {
      x: rng.random_range(0..width),
      y: rng.random_range(0..height),
    }
  }

  /// Returns the neighbouring cell in the given direction, wrapping around the edges of a `width` x `height` grid.
  /// [`Direction::None`] returns the position unchanged.
  pub fn stepped(self, direction: Direction, width: u32, height: u32) -> Self {
    match direction {
      Direction::Up => Self::new(self.x, (self.y + height - 1) % height),
      Direction::Down => Self::new(self.x, (self.y + 1) % height),
      Direction::Left => Self::new((self.x + width - 1) % width, self.y),
      Direction::Right => Self::new((self.x + 1) % width, self.y),
      Direction::None => self,
    }
  }
}

impl Display for Position {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// The direction the player is heading in. [`Direction::None`] means the player hasn't chosen one yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Reflect)]
pub enum Direction {
  Up,
  Down,
  Left,
  Right,
  #[default]
  None,
}

impl Direction {
  /// The direction pointing the other way. [`Direction::None`] has no opposite and returns itself.
  pub fn opposite(self) -> Self {
    match self {
      Direction::Up => Direction::Down,
      Direction::Down => Direction::Up,
      Direction::Left => Direction::Right,
      Direction::Right => Direction::Left,
      Direction::None => Direction::None,
    }
  }

  /// Whether turning from `self` to `other` would be a 180 degree turn.
  pub fn is_opposite(self, other: Direction) -> bool {
    self != Direction::None && self.opposite() == other
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}
