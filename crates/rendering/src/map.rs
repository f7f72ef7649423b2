//! Stop markers, labels, and per-frame route line drawing.

use bevy::prelude::*;

use simulation::network::{ActiveRoute, RouteNetwork};

/// Light neutral canvas behind the map.
pub const BACKGROUND_COLOR: Color = Color::srgb(0.92, 0.92, 0.92);

/// Radius of a stop marker in world units.
const STOP_RADIUS: f32 = 0.18;

/// Vertical offset of a stop label above its marker.
const LABEL_OFFSET: f32 = 0.45;

/// World units per font point; text is authored at UI size and scaled
/// down into map space.
const LABEL_SCALE: f32 = 0.015;

/// Dash pattern for inactive route lines, in world units.
const DASH_LEN: f32 = 0.25;
const GAP_LEN: f32 = 0.15;

/// Spawn one marker and label pair per stop.
pub fn spawn_stops(
    mut commands: Commands,
    net: Res<RouteNetwork>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let circle = meshes.add(Circle::new(STOP_RADIUS));
    let black = materials.add(Color::BLACK);
    for stop in &net.stops {
        commands.spawn((
            Mesh2d(circle.clone()),
            MeshMaterial2d(black.clone()),
            Transform::from_translation(stop.position.extend(1.0)),
        ));
        commands.spawn((
            Text2d::new(stop.name),
            TextFont {
                font_size: 24.0,
                ..default()
            },
            TextColor(Color::BLACK),
            Transform::from_translation(
                (stop.position + Vec2::new(0.0, LABEL_OFFSET)).extend(1.0),
            )
            .with_scale(Vec3::splat(LABEL_SCALE)),
        ));
    }
}

/// System: redraw the route polylines. Every route shows as a faint
/// dashed line in its own color; the active route gets a solid overlay
/// on top.
pub fn draw_route_lines(
    net: Res<RouteNetwork>,
    active: Res<ActiveRoute>,
    mut gizmos: Gizmos,
) {
    for (id, route) in net.routes.iter().enumerate() {
        let faint = route.params.color.with_alpha(0.3);
        for i in 0..net.segment_count(id) {
            let (a, b) = net.segment(id, i);
            let dir = (b - a).normalize();
            for (from, to) in dash_spans(a.distance(b)) {
                gizmos.line_2d(a + dir * from, a + dir * to, faint);
            }
        }
    }
    let route = net.route(active.0);
    let strong = route.params.color.with_alpha(0.8);
    for i in 0..net.segment_count(active.0) {
        let (a, b) = net.segment(active.0, i);
        gizmos.line_2d(a, b, strong);
    }
}

/// Gizmo lines have no dash pattern, so chop the segment by hand.
/// Returns (start, end) distances of each dash along the line.
fn dash_spans(length: f32) -> Vec<(f32, f32)> {
    let mut spans = Vec::new();
    let mut t = 0.0;
    while t < length {
        let end = (t + DASH_LEN).min(length);
        spans.push((t, end));
        t = end + GAP_LEN;
    }
    spans
}
