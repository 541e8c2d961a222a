//! Vehicle movement logic
//!
//! Standalone implementation that doesn't depend on Bevy.

use super::types::{Position, Road, VEHICLE_ELEVATION};

/// Distance under which a waypoint counts as reached
pub const WAYPOINT_THRESHOLD: f32 = 5.0;

/// Result of a vehicle update indicating what happened this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleUpdateResult {
    /// Vehicle kept driving toward the same waypoint
    Continue,
    /// Vehicle reached a waypoint and is heading for the next one
    AdvancedWaypoint(usize),
    /// Vehicle finished its path and snapped back to the first point
    LoopedToStart,
    /// Path too short to follow; vehicle left untouched
    Idle,
}

/// A vehicle following a fixed polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub position: Position,
    /// Unit vector, or zero on a degenerate segment
    pub direction: Position,
    pub speed: f32,
    pub path: Vec<Position>,
    /// Index of the waypoint the current segment starts at
    pub path_index: usize,
}

impl Vehicle {
    /// Create a vehicle at the start of `path`, heading for its second point
    pub fn new(path: Vec<Position>, speed: f32) -> Self {
        let position = path.first().copied().unwrap_or_default();
        let direction = path
            .get(1)
            .map(|target| position.offset_to(target).normalized())
            .unwrap_or_default();

        Self {
            position,
            direction,
            speed,
            path,
            path_index: 0,
        }
    }

    /// Create a vehicle that drives `road` from start to end
    pub fn on_road(road: &Road, speed: f32) -> Self {
        Self::new(
            vec![
                Position::on_plan(road.start, VEHICLE_ELEVATION),
                Position::on_plan(road.end, VEHICLE_ELEVATION),
            ],
            speed,
        )
    }

    /// Whether this vehicle's path is exactly the given road
    pub fn follows(&self, road: &Road) -> bool {
        self.path.len() == 2
            && self.path[0] == Position::on_plan(road.start, VEHICLE_ELEVATION)
            && self.path[1] == Position::on_plan(road.end, VEHICLE_ELEVATION)
    }

    /// Heading around the vertical axis, for renderers
    pub fn angle(&self) -> f32 {
        Position::default().angle_to(&self.direction)
    }

    /// Advance along the path by `delta_secs`
    pub fn update(&mut self, delta_secs: f32) -> VehicleUpdateResult {
        if self.path.len() < 2 {
            return VehicleUpdateResult::Idle;
        }

        self.position = self
            .position
            .add(&self.direction.scaled(self.speed * delta_secs));

        let target = self.path[self.path_index + 1];
        let to_target = self.position.offset_to(&target);

        // A step long enough to carry the vehicle past the target also counts
        let overshot = to_target.dot(&self.direction) < 0.0;
        if to_target.length() >= WAYPOINT_THRESHOLD && !overshot {
            return VehicleUpdateResult::Continue;
        }

        self.path_index += 1;
        let result = if self.path_index >= self.path.len() - 1 {
            self.path_index = 0;
            self.position = self.path[0];
            VehicleUpdateResult::LoopedToStart
        } else {
            VehicleUpdateResult::AdvancedWaypoint(self.path_index)
        };

        let next = self.path[self.path_index + 1];
        self.direction = self.position.offset_to(&next).normalized();

        result
    }
}
