//! Street light placement and the day/night clock

use super::types::{
    Position, Road, StreetLight, STREET_LIGHT_ELEVATION, STREET_LIGHT_SPACING,
};

/// Hour the clock starts at
pub const START_HOUR: f32 = 12.0;
/// Clock multiplier for fast-forward
pub const FAST_TIME_SPEED: f32 = 10.0;

const DUSK_HOUR: f32 = 19.0;
const DAWN_HOUR: f32 = 6.0;

/// Lights spread evenly along the interior of a road.
///
/// A road of length `L` gets `floor(L / 50) - 1` lights, none at the endpoints.
pub fn lights_for_road(road: &Road) -> Vec<StreetLight> {
    let dx = (road.end.x - road.start.x) as f32;
    let dy = (road.end.y - road.start.y) as f32;
    let num_lights = (road.length() / STREET_LIGHT_SPACING) as i32;

    (1..num_lights)
        .map(|i| {
            let t = i as f32 / num_lights as f32;
            StreetLight {
                position: Position::new(
                    road.start.x as f32 + dx * t,
                    STREET_LIGHT_ELEVATION,
                    road.start.y as f32 + dy * t,
                ),
            }
        })
        .collect()
}

/// Lights for a whole road network, in road order
pub fn street_lights_for(roads: &[Road]) -> Vec<StreetLight> {
    roads.iter().flat_map(lights_for_road).collect()
}

/// Simulated time of day. One real minute advances one hour at normal speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayClock {
    hour: f32,
    speed: f32,
}

impl Default for DayClock {
    fn default() -> Self {
        Self {
            hour: START_HOUR,
            speed: 1.0,
        }
    }
}

impl DayClock {
    pub fn hour(&self) -> f32 {
        self.hour
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    pub fn set_hour(&mut self, hour: f32) {
        self.hour = hour.rem_euclid(24.0);
    }

    pub fn advance(&mut self, delta_secs: f32) {
        self.hour = (self.hour + delta_secs * self.speed / 60.0).rem_euclid(24.0);
    }

    pub fn is_night(&self) -> bool {
        self.hour < DAWN_HOUR || self.hour >= DUSK_HOUR
    }
}
