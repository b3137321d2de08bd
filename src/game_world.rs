use crate::game_loop::GameLoopSet;
use crate::prelude::constants::*;
use crate::prelude::{Apple, GameState, GridConfig, PlayerHead, Position};
use bevy::prelude::*;

/// Plugin that draws the playfield. Only has a visual effect and never changes the [`GameState`].
pub struct GameWorldPlugin;

impl Plugin for GameWorldPlugin {
  fn build(&self, app: &mut App) {
    app
      .add_systems(Startup, create_world_system)
      .add_systems(
        Update,
        sync_transforms_system
          .run_if(resource_exists_and_changed::<GameState>)
          .in_set(GameLoopSet::Render),
      );
  }
}

/// Spawns one sprite for the player and one for the apple. Both are positioned by [`sync_transforms_system`] once the
/// first round has been set up.
fn create_world_system(mut commands: Commands, config: Res<GridConfig>) {
  let cell_size = config.cell_size() as f32;
  commands.spawn((
    Name::new("Apple"),
    Sprite::from_color(Color::from(APPLE_COLOUR), Vec2::splat(cell_size * APPLE_SIZE_RATIO)),
    Transform::from_xyz(0., 0., Z_APPLE),
    Apple,
  ));
  commands.spawn((
    Name::new("Player"),
    Sprite::from_color(Color::from(PLAYER_COLOUR), Vec2::splat(cell_size)),
    Transform::from_xyz(0., 0., Z_PLAYER),
    PlayerHead,
  ));
  debug!("✅  Game world creation completed");
}

/// Converts a cell into the world coordinates of its centre. Cell `(0, 0)` is the top left corner of the window, and
/// the camera looks at the centre of the playfield. Since the apple is centred on its cell, its inset is the same on
/// every side.
fn grid_to_world(position: Position, config: &GridConfig) -> Vec2 {
  let cell_size = config.cell_size() as f32;
  let half_width = config.window_width() as f32 / 2.;
  let half_height = config.window_height() as f32 / 2.;
  Vec2::new(
    (position.x as f32 + 0.5) * cell_size - half_width,
    half_height - (position.y as f32 + 0.5) * cell_size,
  )
}

fn sync_transforms_system(
  game_state: Res<GameState>,
  config: Res<GridConfig>,
  mut player_query: Query<&mut Transform, (With<PlayerHead>, Without<Apple>)>,
  mut apple_query: Query<&mut Transform, (With<Apple>, Without<PlayerHead>)>,
) {
  for mut transform in player_query.iter_mut() {
    let translation = grid_to_world(game_state.player(), &config);
    transform.translation = translation.extend(Z_PLAYER);
  }
  for mut transform in apple_query.iter_mut() {
    let translation = grid_to_world(game_state.apple(), &config);
    transform.translation = translation.extend(Z_APPLE);
  }
}
