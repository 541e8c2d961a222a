//! Road network builders for each road pattern

use rand::Rng;
use std::f32::consts::TAU;

use super::types::{Point2D, Road, GRID_SPACING};

const RADIAL_SPOKES: i32 = 8;
const RADIAL_RINGS: i32 = 3;
const RING_SEGMENTS: i32 = 32;
const RANDOM_ROAD_COUNT: usize = 15;

/// Full-span streets every `GRID_SPACING` units, boundary lines excluded.
/// Vertical roads come first, then horizontal ones.
pub fn grid_roads(size: i32) -> Vec<Road> {
    let num_lines = size / GRID_SPACING;
    let mut roads = Vec::new();

    for i in 1..num_lines {
        let x = i * GRID_SPACING;
        roads.push(Road::new(Point2D::new(x, 0), Point2D::new(x, size)));
    }

    for i in 1..num_lines {
        let y = i * GRID_SPACING;
        roads.push(Road::new(Point2D::new(0, y), Point2D::new(size, y)));
    }

    roads
}

/// Spokes from the center to the boundary circle, then the ring polylines
/// from the innermost ring outwards
pub fn radial_roads(size: i32) -> Vec<Road> {
    let center = Point2D::new(size / 2, size / 2);
    let radius = size / 2;
    let mut roads = Vec::new();

    for i in 0..RADIAL_SPOKES {
        let angle = TAU * i as f32 / RADIAL_SPOKES as f32;
        roads.push(Road::new(center, point_on_circle(center, radius, angle)));
    }

    for ring in 1..=RADIAL_RINGS {
        let ring_radius = radius * ring / (RADIAL_RINGS + 1);

        for i in 0..RING_SEGMENTS {
            let angle1 = TAU * i as f32 / RING_SEGMENTS as f32;
            let angle2 = TAU * (i + 1) as f32 / RING_SEGMENTS as f32;
            roads.push(Road::new(
                point_on_circle(center, ring_radius, angle1),
                point_on_circle(center, ring_radius, angle2),
            ));
        }
    }

    roads
}

/// Segments with both endpoints uniform in `[0, size)`
pub fn random_roads<R: Rng + ?Sized>(rng: &mut R, size: i32) -> Vec<Road> {
    (0..RANDOM_ROAD_COUNT)
        .map(|_| {
            let start = Point2D::new(rng.random_range(0..size), rng.random_range(0..size));
            let end = Point2D::new(rng.random_range(0..size), rng.random_range(0..size));
            Road::new(start, end)
        })
        .collect()
}

// Offsets truncate toward zero
fn point_on_circle(center: Point2D, radius: i32, angle: f32) -> Point2D {
    Point2D::new(
        center.x + (radius as f32 * angle.cos()) as i32,
        center.y + (radius as f32 * angle.sin()) as i32,
    )
}
