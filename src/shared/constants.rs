use bevy::color::Srgba;

// Window
// --------------------------------//

/// The title of the one and only window.
pub(crate) const WINDOW_TITLE: &str = "Snake";

// Grid
// --------------------------------//

/// The number of cells along the X axis of the playfield.
pub(crate) const GRID_WIDTH: u32 = 16;

/// The number of cells along the Y axis of the playfield.
pub(crate) const GRID_HEIGHT: u32 = 12;

/// The edge length of a single cell, in pixels.
pub(crate) const CELL_SIZE: u32 = 50;

/// The smallest accepted number of cells along either axis. Apple placement needs at least one cell that isn't
/// occupied by the player.
pub(crate) const MIN_GRID_SIZE: u32 = 2;

// Timing
// --------------------------------//

/// The number of ticks per second the game starts with.
pub(crate) const TICKS_PER_SECOND: u32 = 5;

/// The upper bound for the tick rate when adjusting it at runtime.
pub(crate) const MAX_TICKS_PER_SECOND: u32 = 30;

// Rendering
// --------------------------------//

/// The fraction of a cell that the apple covers along each axis. The rest is split evenly between both sides.
pub(crate) const APPLE_SIZE_RATIO: f32 = 0.7;

/// The colour used to clear the playfield every frame.
pub(crate) const BACKGROUND_COLOUR: Srgba = Srgba::rgb(0.933, 0.933, 0.933);

/// The colour of the player's head.
pub(crate) const PLAYER_COLOUR: Srgba = Srgba::rgb(0.906, 0.012, 0.012);

/// The colour of the apple.
pub(crate) const APPLE_COLOUR: Srgba = Srgba::rgb(0.035, 0.867, 0.004);

/// The z-index of the apple sprite.
pub(crate) const Z_APPLE: f32 = 0.;

/// The z-index of the player sprite. The player is drawn on top of the apple.
pub(crate) const Z_PLAYER: f32 = 1.;
