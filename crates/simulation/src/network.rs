//! Static description of the bus network: stops, routes, and the
//! service parameters each route runs with.
//!
//! The whole network is hardcoded and built once by
//! `RouteNetwork::default()`; nothing here mutates afterwards. Routes
//! are kept in insertion order R1..R4, which is also the order the
//! space bar cycles through.

use bevy::color::palettes::css;
use bevy::prelude::*;

/// Index into `RouteNetwork::stops`.
pub type StopId = usize;

/// Index into `RouteNetwork::routes`.
pub type RouteId = usize;

/// A named point on the map.
#[derive(Debug, Clone)]
pub struct Stop {
    pub name: &'static str,
    pub position: Vec2,
}

/// Shift applied to another route's demand while this route runs.
#[derive(Debug, Clone, Copy)]
pub struct DemandImpact {
    /// Route whose demand is shifted.
    pub on: RouteId,
    /// Relative shift, e.g. -0.12 for a 12% reduction.
    pub factor: f32,
}

/// Per-route service parameters, fixed for the session.
#[derive(Debug, Clone)]
pub struct ServiceParams {
    /// Line color used for map drawing.
    pub color: Color,
    /// Average commercial speed in km/h.
    pub avg_speed_kmh: f32,
    /// Minutes between departures.
    pub headway_min: f32,
    /// Congestion factor in [0, 1]; stretches travel time and slows
    /// the animation.
    pub congestion: f32,
    /// Base daily passenger demand.
    pub demand: f32,
    /// Buses assigned to the route.
    pub fleet: u32,
    /// Demand shift this route causes on another route, if any.
    pub impact: Option<DemandImpact>,
}

/// An ordered run of stops. All four routes are two-stop shuttles, but
/// the motion code treats `stops` as a polyline.
#[derive(Debug, Clone)]
pub struct Route {
    pub name: &'static str,
    pub stops: Vec<StopId>,
    pub params: ServiceParams,
}

/// Index of the currently selected route.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ActiveRoute(pub RouteId);

/// Top-level resource holding the stops and routes.
#[derive(Resource, Debug, Clone)]
pub struct RouteNetwork {
    pub stops: Vec<Stop>,
    pub routes: Vec<Route>,
}

impl Default for RouteNetwork {
    fn default() -> Self {
        let stops = vec![
            Stop { name: "Terminal", position: Vec2::new(2.0, 2.0) },
            Stop { name: "Hospital", position: Vec2::new(8.0, 5.0) },
            Stop { name: "El Recreo", position: Vec2::new(5.0, 8.0) },
            Stop { name: "Barrio Industrial", position: Vec2::new(10.0, 2.0) },
        ];
        let routes = vec![
            Route {
                name: "R1",
                stops: vec![0, 1],
                params: ServiceParams {
                    color: css::BLUE.into(),
                    avg_speed_kmh: 30.0,
                    headway_min: 15.0,
                    congestion: 0.7,
                    demand: 180.0,
                    fleet: 180,
                    impact: None,
                },
            },
            Route {
                name: "R2",
                stops: vec![1, 2],
                params: ServiceParams {
                    color: css::GREEN.into(),
                    avg_speed_kmh: 25.0,
                    headway_min: 20.0,
                    congestion: 0.6,
                    demand: 150.0,
                    fleet: 150,
                    impact: None,
                },
            },
            Route {
                name: "R3",
                stops: vec![0, 2],
                params: ServiceParams {
                    color: css::RED.into(),
                    avg_speed_kmh: 35.0,
                    headway_min: 25.0,
                    congestion: 0.4,
                    demand: 120.0,
                    fleet: 120,
                    impact: None,
                },
            },
            // The express link to the industrial district pulls some of
            // R1's riders: running it cuts R1 demand by 12%.
            Route {
                name: "R4",
                stops: vec![0, 3],
                params: ServiceParams {
                    color: css::PURPLE.into(),
                    avg_speed_kmh: 40.0,
                    headway_min: 15.0,
                    congestion: 0.5,
                    demand: 100.0,
                    fleet: 2,
                    impact: Some(DemandImpact { on: 0, factor: -0.12 }),
                },
            },
        ];
        Self { stops, routes }
    }
}

impl RouteNetwork {
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id]
    }

    pub fn route(&self, id: RouteId) -> &Route {
        &self.routes[id]
    }

    /// Number of travel segments on a route (one less than its stops).
    pub fn segment_count(&self, route: RouteId) -> usize {
        self.routes[route].stops.len() - 1
    }

    /// Endpoints of segment `i`, wrapping back to the first stop past
    /// the last one.
    pub fn segment(&self, route: RouteId, i: usize) -> (Vec2, Vec2) {
        let stops = &self.routes[route].stops;
        let start = self.stop(stops[i]).position;
        let end = match stops.get(i + 1) {
            Some(&next) => self.stop(next).position,
            None => self.stop(stops[0]).position,
        };
        (start, end)
    }

    /// Euclidean length of the route polyline in kilometres.
    pub fn route_length(&self, route: RouteId) -> f32 {
        (0..self.segment_count(route))
            .map(|i| {
                let (a, b) = self.segment(route, i);
                a.distance(b)
            })
            .sum()
    }

    /// Base demand adjusted by every impact targeting this route.
    pub fn effective_demand(&self, route: RouteId) -> f32 {
        let mut demand = self.routes[route].params.demand;
        for other in &self.routes {
            if let Some(impact) = other.params.impact {
                if impact.on == route {
                    demand *= 1.0 + impact.factor;
                }
            }
        }
        demand
    }

    /// Next route in insertion order, wrapping past the last.
    pub fn next_route(&self, route: RouteId) -> RouteId {
        (route + 1) % self.routes.len()
    }

    /// Stop names along a route joined with arrows, e.g.
    /// "Terminal -> Hospital".
    pub fn stop_sequence(&self, route: RouteId) -> String {
        self.routes[route]
            .stops
            .iter()
            .map(|&id| self.stop(id).name)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_stops_four_routes() {
        let net = RouteNetwork::default();
        assert_eq!(net.stops.len(), 4);
        assert_eq!(net.routes.len(), 4);
        for route in &net.routes {
            assert_eq!(route.stops.len(), 2);
        }
    }

    #[test]
    fn cycling_visits_every_route_then_returns() {
        let net = RouteNetwork::default();
        let mut current = 0;
        let mut visited = Vec::new();
        for _ in 0..net.routes.len() {
            visited.push(net.route(current).name);
            current = net.next_route(current);
        }
        assert_eq!(visited, ["R1", "R2", "R3", "R4"]);
        assert_eq!(current, 0);
    }

    #[test]
    fn segment_wraps_to_first_stop() {
        let net = RouteNetwork::default();
        let (start, end) = net.segment(0, 0);
        assert_eq!(start, Vec2::new(2.0, 2.0));
        assert_eq!(end, Vec2::new(8.0, 5.0));
        // A segment starting at the last stop leads back home.
        let (start, end) = net.segment(0, 1);
        assert_eq!(start, Vec2::new(8.0, 5.0));
        assert_eq!(end, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn route_lengths_match_geometry() {
        let net = RouteNetwork::default();
        assert!((net.route_length(0) - 45.0_f32.sqrt()).abs() < 1e-5);
        assert!((net.route_length(1) - 18.0_f32.sqrt()).abs() < 1e-5);
        assert!((net.route_length(2) - 45.0_f32.sqrt()).abs() < 1e-5);
        assert!((net.route_length(3) - 8.0).abs() < 1e-5);
    }

    #[test]
    fn express_link_cuts_r1_demand() {
        let net = RouteNetwork::default();
        assert!((net.effective_demand(0) - 158.4).abs() < 1e-3);
        assert!((net.effective_demand(1) - 150.0).abs() < 1e-3);
        assert!((net.effective_demand(2) - 120.0).abs() < 1e-3);
        // The impact never feeds back on the route causing it.
        assert!((net.effective_demand(3) - 100.0).abs() < 1e-3);
    }

    #[test]
    fn stop_sequence_reads_in_travel_order() {
        let net = RouteNetwork::default();
        assert_eq!(net.stop_sequence(0), "Terminal -> Hospital");
        assert_eq!(net.stop_sequence(3), "Terminal -> Barrio Industrial");
    }
}
