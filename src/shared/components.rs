use bevy::prelude::Component;

/// A marker component for the sprite drawing the player's head.
#[derive(Component)]
pub struct PlayerHead;

/// A marker component for the sprite drawing the apple.
#[derive(Component)]
pub struct Apple;
