//! Per-frame placement of the bus sprite along the active route.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use simulation::bus::{BusProgress, Heading};
use simulation::network::{ActiveRoute, RouteNetwork};

use crate::bus_icon::BusSprite;

/// Height above the map lines the sprite draws at.
const BUS_Z: f32 = 10.0;

/// System: move and orient the bus sprite from the animation state.
///
/// The icon is authored facing east. Vertical travel rotates it a
/// quarter turn; westward travel mirrors it instead of rotating, so
/// the bus never rides upside down.
pub fn update_bus_sprite(
    net: Res<RouteNetwork>,
    active: Res<ActiveRoute>,
    bus: Res<BusProgress>,
    mut sprites: Query<(&mut Transform, &mut Sprite), With<BusSprite>>,
) {
    let Ok((mut transform, mut sprite)) = sprites.get_single_mut() else {
        return;
    };
    let (position, direction) = bus.sample(&net, active.0);
    transform.translation = position.extend(BUS_Z);
    let (angle, flip_x) = match Heading::of(direction) {
        Heading::East => (0.0, false),
        Heading::West => (0.0, true),
        Heading::North => (FRAC_PI_2, false),
        Heading::South => (-FRAC_PI_2, false),
    };
    transform.rotation = Quat::from_rotation_z(angle);
    sprite.flip_x = flip_x;
}
