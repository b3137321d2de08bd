use crate::prelude::{Direction, GridConfig, Position};
use bevy::log::*;
use bevy::prelude::{Reflect, ReflectResource, Resource};
use rand::Rng;

/// The complete state of a round: where the player and the apple are and where the player is heading.
///
/// This is the only mutable game data. It is changed once per tick by [`GameState::advance`] and once per accepted key
/// press by [`GameState::turn`]; everything else only reads it.
#[derive(Resource, Reflect, Debug, Clone, PartialEq, Eq)]
#[reflect(Resource)]
pub struct GameState {
  width: u32,
  height: u32,
  player: Position,
  apple: Position,
  direction: Direction,
}

impl GameState {
  /// Creates a fresh round with the player on a random cell, no direction and an apple on a different cell.
  pub fn new<R: Rng + ?Sized>(config: &GridConfig, rng: &mut R) -> Self {
    let mut state = Self {
      width: config.width(),
      height: config.height(),
      player: Position::default(),
      apple: Position::default(),
      direction: Direction::None,
    };
    state.reset(rng);
    state
  }

  /// Creates a round with a fixed layout. The apple is taken as given, even if it overlaps the player.
  #[cfg(test)]
  pub fn with_layout(config: &GridConfig, player: Position, apple: Position, direction: Direction) -> Self {
    Self {
      width: config.width(),
      height: config.height(),
      player,
      apple,
      direction,
    }
  }

  pub fn player(&self) -> Position {
    self.player
  }

  pub fn apple(&self) -> Position {
    self.apple
  }

  pub fn direction(&self) -> Direction {
    self.direction
  }

  /// Moves the player by one cell in the current direction, wrapping around the edges. Does nothing while no direction
  /// has been chosen.
  pub fn advance(&mut self) {
    self.player = self.player.stepped(self.direction, self.width, self.height);
  }

  /// Changes the direction of the player unless the new direction would reverse it. Returns whether the direction was
  /// accepted. [`Direction::None`] is never accepted since a direction can't be unset.
  pub fn turn(&mut self, direction: Direction) -> bool {
    if direction == Direction::None || self.direction.is_opposite(direction) {
      return false;
    }
    self.direction = direction;
    true
  }

  /// Moves the apple to a uniformly random cell that isn't occupied by the player.
  pub fn place_apple<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    let mut apple = self.player;
    while apple == self.player {
      apple = Position::random(rng, self.width, self.height);
    }
    self.apple = apple;
    trace!("Placed apple at {}", self.apple);
  }

  /// Puts the player on a random cell without a direction and places a new apple.
  pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
    self.player = Position::random(rng, self.width, self.height);
    self.direction = Direction::None;
    self.place_apple(rng);
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  const ALL_DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

  fn config() -> GridConfig {
    GridConfig::new(16, 12, 50, 5).expect("Expected a valid config")
  }

  #[test]
  fn new_places_player_and_apple_on_different_cells() {
    let config = config();
    for seed in 0..200 {
      let state = GameState::new(&config, &mut StdRng::seed_from_u64(seed));
      assert_ne!(state.player(), state.apple());
      assert_eq!(state.direction(), Direction::None);
      assert!(state.player().x < 16 && state.player().y < 12);
      assert!(state.apple().x < 16 && state.apple().y < 12);
    }
  }

  #[test]
  fn advance_moves_up_by_one_cell() {
    let mut state = GameState::with_layout(&config(), Position::new(5, 5), Position::new(0, 0), Direction::Up);
    state.advance();
    assert_eq!(state.player(), Position::new(5, 4));
  }

  #[test]
  fn advance_wraps_around_the_left_edge() {
    let mut state = GameState::with_layout(&config(), Position::new(0, 5), Position::new(0, 0), Direction::Left);
    state.advance();
    assert_eq!(state.player(), Position::new(15, 5));
  }

  #[test]
  fn advance_without_direction_keeps_player_in_place() {
    let mut state = GameState::with_layout(&config(), Position::new(3, 3), Position::new(0, 0), Direction::None);
    state.advance();
    assert_eq!(state.player(), Position::new(3, 3));
  }

  #[test]
  fn advance_does_not_move_the_apple() {
    let mut state = GameState::with_layout(&config(), Position::new(3, 3), Position::new(9, 1), Direction::Right);
    state.advance();
    state.advance();
    assert_eq!(state.player(), Position::new(5, 3));
    assert_eq!(state.apple(), Position::new(9, 1));
  }

  #[test]
  fn full_lap_returns_to_start() {
    let mut state = GameState::with_layout(&config(), Position::new(2, 7), Position::new(0, 0), Direction::Down);
    for _ in 0..12 {
      state.advance();
    }
    assert_eq!(state.player(), Position::new(2, 7));
  }

  #[test]
  fn turn_rejects_reversal_and_leaves_state_untouched() {
    for direction in ALL_DIRECTIONS {
      let mut state = GameState::with_layout(&config(), Position::new(4, 4), Position::new(1, 1), direction);
      let before = state.clone();
      assert!(!state.turn(direction.opposite()));
      assert_eq!(state, before);
    }
  }

  #[test]
  fn turn_accepts_perpendicular_and_same_direction() {
    let mut state = GameState::with_layout(&config(), Position::new(4, 4), Position::new(1, 1), Direction::Up);
    assert!(state.turn(Direction::Up));
    assert!(state.turn(Direction::Left));
    assert_eq!(state.direction(), Direction::Left);
  }

  #[test]
  fn turn_accepts_any_direction_before_the_first_move() {
    for direction in ALL_DIRECTIONS {
      let mut state = GameState::with_layout(&config(), Position::new(4, 4), Position::new(1, 1), Direction::None);
      assert!(state.turn(direction));
      assert_eq!(state.direction(), direction);
    }
  }

  #[test]
  fn turn_rejects_none() {
    let mut state = GameState::with_layout(&config(), Position::new(4, 4), Position::new(1, 1), Direction::Up);
    assert!(!state.turn(Direction::None));
    assert_eq!(state.direction(), Direction::Up);
  }

  #[test]
  fn place_apple_never_lands_on_the_player() {
    let config = GridConfig::new(2, 2, 10, 5).expect("Expected a valid config");
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = GameState::with_layout(&config, Position::new(1, 0), Position::new(1, 0), Direction::None);
    for _ in 0..500 {
      state.place_apple(&mut rng);
      assert_ne!(state.apple(), state.player());
    }
  }

  #[test]
  fn reset_clears_the_direction() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut state = GameState::with_layout(&config(), Position::new(4, 4), Position::new(1, 1), Direction::Right);
    state.reset(&mut rng);
    assert_eq!(state.direction(), Direction::None);
    assert_ne!(state.player(), state.apple());
  }
}
