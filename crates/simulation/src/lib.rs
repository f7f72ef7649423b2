use bevy::prelude::*;

pub mod bus;
pub mod config;
pub mod metrics;
pub mod network;

use bus::BusProgress;
use metrics::MetricsHistory;
use network::{ActiveRoute, RouteId, RouteNetwork};

/// Fired whenever the active route changes.
#[derive(Event, Debug, Clone, Copy)]
pub struct RouteChanged {
    pub route: RouteId,
}

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RouteNetwork>()
            .init_resource::<ActiveRoute>()
            .init_resource::<BusProgress>()
            .init_resource::<MetricsHistory>()
            .add_event::<RouteChanged>()
            .insert_resource(Time::<Fixed>::from_hz(config::TICK_HZ))
            .add_systems(Startup, metrics::record_initial_metrics)
            .add_systems(FixedUpdate, bus::advance_bus)
            .add_systems(Update, metrics::record_metrics_on_change);
    }
}
