mod components;
pub mod constants;
mod game_state;
mod grid_config;
mod messages;
mod resources;
mod structs;

pub use components::*;
pub use game_state::*;
pub use grid_config::*;
pub use messages::*;
pub use resources::*;
pub use structs::*;
