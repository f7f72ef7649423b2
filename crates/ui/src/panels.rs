//! The three overlay panels: active-route facts, optimization metrics,
//! and the inter-route demand impact note.
//!
//! Panels are plain egui windows anchored to the screen corners and
//! rebuilt from current state every frame; nothing here is cached.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::metrics::{evaluate_route, MetricsHistory};
use simulation::network::{ActiveRoute, RouteId, RouteNetwork};

/// Top-left: service parameters of the active route.
pub fn route_panel_ui(
    mut contexts: EguiContexts,
    net: Res<RouteNetwork>,
    active: Res<ActiveRoute>,
) {
    let text = route_summary(&net, active.0);
    anchored_panel(
        "route_panel",
        egui::Align2::LEFT_TOP,
        [MARGIN, MARGIN],
        contexts.ctx_mut(),
        &text,
    );
}

/// Top-right: derived metrics plus the history sample count.
pub fn metrics_panel_ui(
    mut contexts: EguiContexts,
    net: Res<RouteNetwork>,
    active: Res<ActiveRoute>,
    history: Res<MetricsHistory>,
) {
    let text = metrics_summary(&net, active.0, history.0.len());
    anchored_panel(
        "metrics_panel",
        egui::Align2::RIGHT_TOP,
        [-MARGIN, MARGIN],
        contexts.ctx_mut(),
        &text,
    );
}

/// Bottom-center: shown only while the active route is party to a
/// demand impact.
pub fn impact_panel_ui(
    mut contexts: EguiContexts,
    net: Res<RouteNetwork>,
    active: Res<ActiveRoute>,
) {
    if let Some(text) = impact_summary(&net, active.0) {
        anchored_panel(
            "impact_panel",
            egui::Align2::CENTER_BOTTOM,
            [0.0, -MARGIN],
            contexts.ctx_mut(),
            &text,
        );
    }
}

/// Screen-edge inset for the anchored panels, in logical pixels.
const MARGIN: f32 = 12.0;

fn anchored_panel(
    id: &str,
    anchor: egui::Align2,
    offset: [f32; 2],
    ctx: &mut egui::Context,
    text: &str,
) {
    egui::Window::new(id)
        .anchor(anchor, offset)
        .title_bar(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(text);
        });
}

fn route_summary(net: &RouteNetwork, route: RouteId) -> String {
    let r = net.route(route);
    format!(
        "Current route: {} ({})\n\
         Speed: {:.0} km/h\n\
         Congestion: {:.0}%\n\
         Headway: {:.0} min\n\
         Fleet: {} buses",
        r.name,
        net.stop_sequence(route),
        r.params.avg_speed_kmh,
        r.params.congestion * 100.0,
        r.params.headway_min,
        r.params.fleet,
    )
}

fn metrics_summary(net: &RouteNetwork, route: RouteId, samples: usize) -> String {
    let m = evaluate_route(net, route);
    format!(
        "Optimization metrics\n\
         Distance: {:.2} km\n\
         Travel time: {:.2} min\n\
         Demand: {:.0} passengers\n\
         Score: {:.2}\n\
         Samples recorded: {samples}",
        m.distance_km, m.travel_time_min, m.effective_demand, m.score,
    )
}

/// Impact text for the active route, or `None` when it neither causes
/// nor receives a demand shift.
fn impact_summary(net: &RouteNetwork, route: RouteId) -> Option<String> {
    // The active route shifts demand somewhere else.
    if let Some(impact) = net.route(route).params.impact {
        return Some(format!(
            "Impact of this route:\n\
             Cuts demand on {} by {:.0}%\n\
             Buses required: {}",
            net.route(impact.on).name,
            impact.factor.abs() * 100.0,
            net.route(route).params.fleet,
        ));
    }
    // Another route shifts demand here.
    for other in &net.routes {
        if let Some(impact) = other.params.impact {
            if impact.on == route {
                return Some(format!(
                    "Impact of {}:\n\
                     Cuts demand on {} by {:.0}%\n\
                     Additional buses needed: {}",
                    other.name,
                    net.route(route).name,
                    impact.factor.abs() * 100.0,
                    other.params.fleet,
                ));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_summary_lists_the_service_facts() {
        let net = RouteNetwork::default();
        let text = route_summary(&net, 0);
        assert!(text.contains("R1 (Terminal -> Hospital)"));
        assert!(text.contains("Speed: 30 km/h"));
        assert!(text.contains("Congestion: 70%"));
        assert!(text.contains("Fleet: 180 buses"));
    }

    #[test]
    fn metrics_summary_rounds_to_two_decimals() {
        let net = RouteNetwork::default();
        let text = metrics_summary(&net, 3, 5);
        assert!(text.contains("Distance: 8.00 km"));
        assert!(text.contains("Travel time: 18.00 min"));
        assert!(text.contains("Score: 5.95"));
        assert!(text.contains("Samples recorded: 5"));
    }

    #[test]
    fn impact_panel_covers_both_parties() {
        let net = RouteNetwork::default();
        // R1 is on the receiving end.
        let affected = impact_summary(&net, 0).unwrap();
        assert!(affected.contains("Impact of R4"));
        assert!(affected.contains("by 12%"));
        // R4 causes the shift.
        let cause = impact_summary(&net, 3).unwrap();
        assert!(cause.contains("Impact of this route"));
        assert!(cause.contains("Cuts demand on R1"));
    }

    #[test]
    fn impact_panel_hidden_for_uninvolved_routes() {
        let net = RouteNetwork::default();
        assert_eq!(impact_summary(&net, 1), None);
        assert_eq!(impact_summary(&net, 2), None);
    }
}
