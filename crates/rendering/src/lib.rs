use bevy::prelude::*;

pub mod bus;
pub mod bus_icon;
pub mod camera;
pub mod input;
pub mod map;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(map::BACKGROUND_COLOR))
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    map::spawn_stops,
                    bus_icon::setup_bus_icon,
                ),
            )
            .add_systems(
                Update,
                (
                    input::switch_route,
                    map::draw_route_lines,
                    bus::update_bus_sprite.after(input::switch_route),
                ),
            );
    }
}
