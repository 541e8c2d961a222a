//! Scan conversion of plan geometry into pixel coordinates
//!
//! Pure point generators; drawing the points is left to the caller.

use super::types::Point2D;

/// Bresenham line from `start` to `end`, both endpoints included.
///
/// The result is an 8-connected path that always ends exactly on `end`.
/// A zero-length segment yields the single point.
pub fn rasterize_line(start: Point2D, end: Point2D) -> Vec<Point2D> {
    let dx = (end.x - start.x).abs();
    let dy = (end.y - start.y).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };

    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);
    let mut err = dx - dy;
    let mut x = start.x;
    let mut y = start.y;

    loop {
        points.push(Point2D::new(x, y));

        if x == end.x && y == end.y {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}

/// Midpoint circle around `center`.
///
/// Every octant step contributes its 8 mirrored points, so points on the
/// axes and diagonals appear more than once. Radius 0 collapses to the center.
pub fn rasterize_circle(center: Point2D, radius: i32) -> Vec<Point2D> {
    let radius = radius.saturating_abs();
    let mut x = 0;
    let mut y = radius;
    let mut d = 1 - radius;

    let mut points = Vec::new();
    plot_octants(&mut points, center, x, y);

    while x < y {
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
        plot_octants(&mut points, center, x, y);
    }

    points
}

fn plot_octants(points: &mut Vec<Point2D>, center: Point2D, x: i32, y: i32) {
    let (cx, cy) = (center.x, center.y);
    points.extend_from_slice(&[
        Point2D::new(cx + x, cy + y),
        Point2D::new(cx - x, cy + y),
        Point2D::new(cx + x, cy - y),
        Point2D::new(cx - x, cy - y),
        Point2D::new(cx + y, cy + x),
        Point2D::new(cx - y, cy + x),
        Point2D::new(cx + y, cy - x),
        Point2D::new(cx - y, cy - x),
    ]);
}

/// Outline of the rectangle spanned by two opposite corners.
///
/// Edges are emitted top, right, bottom, left; shared corners repeat.
pub fn rasterize_rect_outline(min: Point2D, max: Point2D) -> Vec<Point2D> {
    let top_right = Point2D::new(max.x, min.y);
    let bottom_left = Point2D::new(min.x, max.y);

    let mut points = rasterize_line(min, top_right);
    points.extend(rasterize_line(top_right, max));
    points.extend(rasterize_line(max, bottom_left));
    points.extend(rasterize_line(bottom_left, min));
    points
}
