//! Fixed world, animation, and scoring constants.

/// Extent of the map in world units (kilometres).
pub const WORLD_WIDTH: f32 = 12.0;
pub const WORLD_HEIGHT: f32 = 10.0;

/// Animation ticks per second. The bus advances once per tick.
pub const TICK_HZ: f64 = 20.0;

/// Progress gained per tick at the reference speed on a free segment.
pub const BASE_STEP_PER_TICK: f32 = 0.01;

/// Speed that maps to exactly `BASE_STEP_PER_TICK` per tick.
pub const REFERENCE_SPEED_KMH: f32 = 30.0;

/// Fraction of animation speed lost at full congestion.
pub const CONGESTION_SLOWDOWN: f32 = 0.5;

/// Scoring weights: demand counts for a route, travel time and sparse
/// headways count against it.
pub const DEMAND_WEIGHT: f32 = 0.5;
pub const TIME_WEIGHT: f32 = 0.3;
pub const HEADWAY_WEIGHT: f32 = 0.2;
