//! Bus animation state: progress along the active route and the coarse
//! travel heading used to orient the sprite.

use bevy::prelude::*;

use crate::config::{BASE_STEP_PER_TICK, CONGESTION_SLOWDOWN, REFERENCE_SPEED_KMH};
use crate::network::{ActiveRoute, RouteId, RouteNetwork, ServiceParams};

/// Where the bus is on the active route: segment index plus the
/// fraction of that segment already covered.
///
/// `progress` stays in [0, 1) and `segment` stays within the route's
/// segment count; both wrap. Reset to zero on every route change.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct BusProgress {
    pub segment: usize,
    pub progress: f32,
}

impl BusProgress {
    /// Per-tick progress step for a route's service parameters: faster
    /// routes move more, congested routes less.
    pub fn step(params: &ServiceParams) -> f32 {
        BASE_STEP_PER_TICK * (params.avg_speed_kmh / REFERENCE_SPEED_KMH)
            * (1.0 - params.congestion * CONGESTION_SLOWDOWN)
    }

    /// Advance one tick, wrapping at segment boundaries and looping
    /// past the last segment.
    pub fn advance(&mut self, net: &RouteNetwork, route: RouteId) {
        self.progress += Self::step(&net.route(route).params);
        if self.progress >= 1.0 {
            self.progress = 0.0;
            self.segment += 1;
            if self.segment >= net.segment_count(route) {
                self.segment = 0;
            }
        }
    }

    /// Interpolated world position and travel direction on the current
    /// segment.
    pub fn sample(&self, net: &RouteNetwork, route: RouteId) -> (Vec2, Vec2) {
        let (start, end) = net.segment(route, self.segment);
        (start + (end - start) * self.progress, end - start)
    }
}

/// Coarse travel orientation, snapped to one of four 90-degree bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    East,
    North,
    West,
    South,
}

impl Heading {
    /// Band the direction angle falls in. The east band is closed on
    /// both ends, so exact diagonals read as horizontal travel.
    pub fn of(direction: Vec2) -> Self {
        let angle = direction.y.atan2(direction.x).to_degrees();
        if (-45.0..=45.0).contains(&angle) {
            Heading::East
        } else if (45.0..=135.0).contains(&angle) {
            Heading::North
        } else if angle.abs() > 135.0 {
            Heading::West
        } else {
            Heading::South
        }
    }
}

/// System: advance the bus one tick along the active route.
pub fn advance_bus(
    net: Res<RouteNetwork>,
    active: Res<ActiveRoute>,
    mut bus: ResMut<BusProgress>,
) {
    bus.advance(&net, active.0);
}
