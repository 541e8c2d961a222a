//! Standalone city layout module
//!
//! This module contains the procedural generator, the rasterizer and the
//! traffic simulation. It runs independently of the Bevy game engine and
//! can be exercised from the console without booting the 3D view.

mod config;
mod editor;
mod generator;
mod lighting;
mod placement;
mod plan_view;
mod raster;
mod road_patterns;
mod types;
mod vehicle;

// Re-export public types for external use
pub use config::{CityConfig, RoadPattern, Skyline};
pub use editor::{MAX_EDIT_SIZE, MIN_EDIT_SIZE, SINGLE_PLACEMENT_ATTEMPTS};
pub use generator::{
    max_placement_attempts, CityGenerator, GenerationReport, VehicleTickSummary,
    ATTEMPTS_PER_BUILDING, MAX_GENERATED_SIZE, MAX_VEHICLE_SPEED, MIN_GENERATED_SIZE,
    MIN_VEHICLE_SPEED,
};
pub use lighting::{lights_for_road, street_lights_for, DayClock, FAST_TIME_SPEED, START_HOUR};
pub use placement::{clears_pond, footprints_conflict, is_valid_footprint, pond_center};
pub use plan_view::{
    PlanCanvas, BUILDING_GLYPH, LIT_BUILDING_GLYPH, PARK_GLYPH, ROAD_GLYPH, VEHICLE_GLYPH,
};
pub use raster::{rasterize_circle, rasterize_line, rasterize_rect_outline};
pub use road_patterns::{grid_roads, radial_roads, random_roads};
pub use types::{
    Building, Footprint, Park, PlanPoint, Point2D, Position, Road, StreetLight, GRID_SPACING,
    MIN_LAYOUT_SIZE, PLACEMENT_BUFFER, POND_RADIUS, STREET_LIGHT_ELEVATION, STREET_LIGHT_SPACING,
    VEHICLE_COUNT, VEHICLE_ELEVATION,
};
pub use vehicle::{Vehicle, VehicleUpdateResult, WAYPOINT_THRESHOLD};
