use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod panels;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin).add_systems(
            Update,
            (
                panels::route_panel_ui,
                panels::metrics_panel_ui,
                panels::impact_panel_ui,
            ),
        );
    }
}
