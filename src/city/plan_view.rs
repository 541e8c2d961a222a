//! Top-down planning view drawn into a character grid
//!
//! Geometry is scaled from layout units into cells first and then scan
//! converted with the rasterizer, so every glyph on the map is a pixel the
//! rasterizer produced.

use std::fmt;

use super::raster::{rasterize_circle, rasterize_line, rasterize_rect_outline};
use super::types::{Building, Park, Point2D, Road};
use super::vehicle::Vehicle;

pub const ROAD_GLYPH: char = '#';
pub const PARK_GLYPH: char = 'o';
pub const BUILDING_GLYPH: char = 'B';
pub const LIT_BUILDING_GLYPH: char = '*';
pub const VEHICLE_GLYPH: char = 'V';
const EMPTY_GLYPH: char = '.';

/// Character raster covering a square layout
pub struct PlanCanvas {
    width: usize,
    height: usize,
    scale_x: f32,
    scale_y: f32,
    cells: Vec<Vec<char>>,
}

impl PlanCanvas {
    /// Canvas `columns` wide. Rows are halved because terminal cells are tall.
    pub fn new(layout_size: i32, columns: usize) -> Self {
        let width = columns.max(2);
        let height = (width / 2).max(1);
        let size = layout_size.max(1) as f32;

        Self {
            width,
            height,
            scale_x: (width - 1) as f32 / size,
            scale_y: (height - 1) as f32 / size,
            cells: vec![vec![EMPTY_GLYPH; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn glyph_at(&self, column: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|line| line.get(column)).copied()
    }

    /// How many cells currently show `glyph`
    pub fn count(&self, glyph: char) -> usize {
        self.cells
            .iter()
            .flat_map(|line| line.iter())
            .filter(|&&c| c == glyph)
            .count()
    }

    /// Layout point to cell coordinates
    pub fn to_cell(&self, x: f32, y: f32) -> Point2D {
        Point2D::new(
            (x * self.scale_x).round() as i32,
            (y * self.scale_y).round() as i32,
        )
    }

    /// Set a single cell; points outside the canvas are clipped
    pub fn plot(&mut self, point: Point2D, glyph: char) {
        if point.x < 0 || point.y < 0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(point.y as usize)
            .and_then(|line| line.get_mut(point.x as usize))
        {
            *cell = glyph;
        }
    }

    pub fn plot_all(&mut self, points: impl IntoIterator<Item = Point2D>, glyph: char) {
        for point in points {
            self.plot(point, glyph);
        }
    }

    pub fn draw_road(&mut self, road: &Road) {
        let start = self.to_cell(road.start.x as f32, road.start.y as f32);
        let end = self.to_cell(road.end.x as f32, road.end.y as f32);
        self.plot_all(rasterize_line(start, end), ROAD_GLYPH);
    }

    pub fn draw_park(&mut self, park: &Park) {
        let center = self.to_cell(park.center.x as f32, park.center.y as f32);
        let radius = (park.radius as f32 * self.scale_x).round() as i32;
        let radius_rows = (park.radius as f32 * self.scale_y).round() as i32;

        // Cells are twice as tall as wide, so squash the circle vertically
        let points = rasterize_circle(Point2D::new(0, 0), radius)
            .into_iter()
            .map(|p| {
                let y = if radius > 0 { p.y * radius_rows / radius } else { 0 };
                Point2D::new(center.x + p.x, center.y + y)
            });
        self.plot_all(points, PARK_GLYPH);
    }

    pub fn draw_building(&mut self, building: &Building, lit: bool) {
        let footprint = building.footprint();
        let min = self.to_cell(footprint.x, footprint.y);
        let max = self.to_cell(footprint.x + footprint.width, footprint.y + footprint.depth);
        let glyph = if lit { LIT_BUILDING_GLYPH } else { BUILDING_GLYPH };
        self.plot_all(rasterize_rect_outline(min, max), glyph);
    }

    pub fn draw_vehicle(&mut self, vehicle: &Vehicle) {
        let cell = self.to_cell(vehicle.position.x, vehicle.position.z);
        self.plot(cell, VEHICLE_GLYPH);
    }
}

impl fmt::Display for PlanCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.cells {
            let line: String = line.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
