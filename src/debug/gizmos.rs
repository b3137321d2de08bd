use crate::prelude::{GridConfig, Settings};
use bevy::app::{App, Plugin, Update};
use bevy::color::Color;
use bevy::color::palettes::tailwind;
use bevy::math::Vec2;
use bevy::prelude::{Gizmos, Res};

/// A plugin that renders gizmos for debugging purposes.
pub struct GizmosPlugin;

impl Plugin for GizmosPlugin {
  fn build(&self, app: &mut App) {
    app.add_systems(Update, (render_gizmos_system,));
  }
}

/// Outlines every cell of the playfield.
fn render_gizmos_system(mut gizmos: Gizmos, settings: Res<Settings>, config: Res<GridConfig>) {
  if !settings.general.display_grid_gizmos {
    return;
  }

  let cell_size = config.cell_size() as f32;
  let half_width = config.window_width() as f32 / 2.;
  let half_height = config.window_height() as f32 / 2.;
  let colour = Color::from(tailwind::NEUTRAL_400);

  // Columns
  for i in 0..=config.width() {
    let x = i as f32 * cell_size - half_width;
    gizmos.line_2d(Vec2::new(x, -half_height), Vec2::new(x, half_height), colour);
  }

  // Rows
  for j in 0..=config.height() {
    let y = half_height - j as f32 * cell_size;
    gizmos.line_2d(Vec2::new(-half_width, y), Vec2::new(half_width, y), colour);
  }
}
