//! Core types for the city layout
//!
//! These are standalone types that don't depend on Bevy.

/// An integer point on the layout plane (road endpoints, park centers, pixels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_plan(self) -> PlanPoint {
        PlanPoint::new(self.x as f32, self.y as f32)
    }
}

/// A continuous point on the layout plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlanPoint {
    pub x: f32,
    pub y: f32,
}

impl PlanPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &PlanPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A 3D position. `y` is elevation; the layout plane maps to (x, z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Lift a plan point to the given elevation
    pub fn on_plan(point: Point2D, elevation: f32) -> Self {
        Self::new(point.x as f32, elevation, point.y as f32)
    }

    pub fn distance(&self, other: &Position) -> f32 {
        self.offset_to(other).length()
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Vector from this position to another
    pub fn offset_to(&self, other: &Position) -> Position {
        Position::new(other.x - self.x, other.y - self.y, other.z - self.z)
    }

    /// Unit vector in the same direction, or zero for a zero-length vector
    pub fn normalized(&self) -> Position {
        let len = self.length();
        if len > 0.0 {
            Position::new(self.x / len, self.y / len, self.z / len)
        } else {
            Position::default()
        }
    }

    pub fn dot(&self, other: &Position) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn scaled(&self, factor: f32) -> Position {
        Position::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn add(&self, other: &Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn lerp(&self, other: &Position, t: f32) -> Position {
        Position {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Calculate the angle from this position to another (Y-axis rotation)
    pub fn angle_to(&self, other: &Position) -> f32 {
        let dx = other.x - self.x;
        let dz = other.z - self.z;
        let direction_len = (dx * dx + dz * dz).sqrt();
        if direction_len > 0.0 {
            (dx / direction_len).atan2(dz / direction_len)
        } else {
            0.0
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// Axis-aligned rectangle on the layout plane, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
}

impl Footprint {
    pub fn new(x: f32, y: f32, width: f32, depth: f32) -> Self {
        Self {
            x,
            y,
            width,
            depth,
        }
    }

    pub fn center(&self) -> PlanPoint {
        PlanPoint::new(self.x + self.width * 0.5, self.y + self.depth * 0.5)
    }

    /// Radius of the circle through all four corners
    pub fn bounding_radius(&self) -> f32 {
        (self.width * self.width + self.depth * self.depth).sqrt() * 0.5
    }

    /// Grow the far edges by `buffer`, keeping the top-left corner fixed
    pub fn expanded(&self, buffer: f32) -> Footprint {
        Footprint::new(self.x, self.y, self.width + buffer, self.depth + buffer)
    }

    /// Strict AABB overlap on both axes; touching edges do not overlap
    pub fn overlaps(&self, other: &Footprint) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.depth
            && self.y + self.depth > other.y
    }

    pub fn contains(&self, point: &PlanPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.depth
    }

    /// Whether the rectangle lies inside the square `[0, size]`
    pub fn within_layout(&self, size: f32) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.x + self.width <= size && self.y + self.depth <= size
    }
}

/// A straight road segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Road {
    pub start: Point2D,
    pub end: Point2D,
}

impl Road {
    pub fn new(start: Point2D, end: Point2D) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.to_plan().distance(&self.end.to_plan())
    }

    /// Shortest distance from a point to this segment
    pub fn distance_to(&self, point: &PlanPoint) -> f32 {
        let start = self.start.to_plan();
        let end = self.end.to_plan();

        let road_vec_x = end.x - start.x;
        let road_vec_y = end.y - start.y;
        let road_length_sq = road_vec_x * road_vec_x + road_vec_y * road_vec_y;

        if road_length_sq < 0.001 {
            return point.distance(&start);
        }

        let pos_vec_x = point.x - start.x;
        let pos_vec_y = point.y - start.y;

        let t = ((pos_vec_x * road_vec_x + pos_vec_y * road_vec_y) / road_length_sq).clamp(0.0, 1.0);

        let closest = PlanPoint::new(start.x + t * road_vec_x, start.y + t * road_vec_y);
        point.distance(&closest)
    }
}

/// A building on the layout
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    /// Top-left corner
    pub position: PlanPoint,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    /// Facade theme, 0 or 1
    pub texture_index: u8,
}

impl Building {
    pub fn new(position: PlanPoint, width: f32, depth: f32, height: f32, texture_index: u8) -> Self {
        Self {
            position,
            width,
            depth,
            height,
            texture_index,
        }
    }

    pub fn footprint(&self) -> Footprint {
        Footprint::new(self.position.x, self.position.y, self.width, self.depth)
    }
}

/// A circular park. The generated one is the central pond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Park {
    pub center: Point2D,
    pub radius: i32,
}

impl Park {
    pub fn new(center: Point2D, radius: i32) -> Self {
        Self { center, radius }
    }

    pub fn contains(&self, point: &PlanPoint) -> bool {
        self.center.to_plan().distance(point) <= self.radius as f32
    }
}

/// A street light hovering over a road
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreetLight {
    pub position: Position,
}

/// Spacing between grid roads
pub const GRID_SPACING: i32 = 100;

/// Radius of the generated pond
pub const POND_RADIUS: i32 = 60;

/// Clearance kept around the pond and between buildings
pub const PLACEMENT_BUFFER: f32 = 10.0;

/// Number of vehicles seeded by a full generation
pub const VEHICLE_COUNT: usize = 8;

/// Elevation vehicles ride at
pub const VEHICLE_ELEVATION: f32 = 5.0;

/// Elevation of street lights above the road
pub const STREET_LIGHT_ELEVATION: f32 = 15.0;

/// Distance between street lights along a road
pub const STREET_LIGHT_SPACING: f32 = 50.0;

/// Smallest layout a city can be generated on
pub const MIN_LAYOUT_SIZE: i32 = 100;
