//! Keyboard input: route cycling.

use bevy::prelude::*;

use simulation::bus::BusProgress;
use simulation::network::{ActiveRoute, RouteNetwork};
use simulation::RouteChanged;

/// System: space cycles to the next route in insertion order and
/// restarts the bus at the first stop.
pub fn switch_route(
    keys: Res<ButtonInput<KeyCode>>,
    net: Res<RouteNetwork>,
    mut active: ResMut<ActiveRoute>,
    mut bus: ResMut<BusProgress>,
    mut changed: EventWriter<RouteChanged>,
) {
    if !keys.just_pressed(KeyCode::Space) {
        return;
    }
    active.0 = net.next_route(active.0);
    *bus = BusProgress::default();
    changed.send(RouteChanged { route: active.0 });
    info!(
        "switched to {} ({})",
        net.route(active.0).name,
        net.stop_sequence(active.0)
    );
}
