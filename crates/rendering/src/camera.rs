//! 2D camera framing the fixed map rectangle.

use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use simulation::config::{WORLD_HEIGHT, WORLD_WIDTH};

/// Extra world units kept visible around the map edges.
const MARGIN: f32 = 0.5;

/// Spawn a camera centred on the map that always shows the whole
/// world rectangle at equal aspect, whatever the window shape.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scaling_mode: ScalingMode::AutoMin {
                min_width: WORLD_WIDTH + 2.0 * MARGIN,
                min_height: WORLD_HEIGHT + 2.0 * MARGIN,
            },
            ..OrthographicProjection::default_2d()
        },
        Transform::from_xyz(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0, 0.0),
    ));
}
