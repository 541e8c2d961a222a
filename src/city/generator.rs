//! City generator that owns every entity of the layout
//!
//! This is the entry point for building and animating a city
//! without any Bevy dependencies.

use anyhow::Result;
use log::{debug, info};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use super::config::{CityConfig, RoadPattern, Skyline};
use super::lighting::{street_lights_for, DayClock};
use super::placement::is_valid_footprint;
use super::plan_view::PlanCanvas;
use super::road_patterns::{grid_roads, radial_roads, random_roads};
use super::types::{
    Building, Footprint, Park, PlanPoint, Point2D, Road, StreetLight, POND_RADIUS, VEHICLE_COUNT,
};
use super::vehicle::{Vehicle, VehicleUpdateResult};

/// Failed attempts allowed per requested building
pub const ATTEMPTS_PER_BUILDING: usize = 10;

/// Placement attempts allowed for `count` requested buildings
pub fn max_placement_attempts(count: usize) -> usize {
    count.saturating_mul(ATTEMPTS_PER_BUILDING)
}

/// Generated building footprint range, per axis
pub const MIN_GENERATED_SIZE: f32 = 30.0;
pub const MAX_GENERATED_SIZE: f32 = 70.0;

/// Vehicle speed range in units per second
pub const MIN_VEHICLE_SPEED: f32 = 20.0;
pub const MAX_VEHICLE_SPEED: f32 = 40.0;

/// Outcome of a building placement run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    pub requested: usize,
    pub placed: usize,
    pub attempts: usize,
}

impl GenerationReport {
    /// Whether every requested building found a spot
    pub fn is_complete(&self) -> bool {
        self.placed >= self.requested
    }
}

/// Per-tick vehicle counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleTickSummary {
    pub advanced: usize,
    pub looped: usize,
}

/// The generated city
pub struct CityGenerator {
    roads: Vec<Road>,
    buildings: Vec<Building>,
    parks: Vec<Park>,
    vehicles: Vec<Vehicle>,
    street_lights: Vec<StreetLight>,

    /// Settings of the most recent generation
    config: CityConfig,

    /// Simulation time
    time: f32,

    day_clock: DayClock,

    /// Optional seeded RNG for reproducible cities
    rng: Option<StdRng>,
}

impl Default for CityGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CityGenerator {
    fn new_internal(rng: Option<StdRng>) -> Self {
        Self {
            roads: Vec::new(),
            buildings: Vec::new(),
            parks: Vec::new(),
            vehicles: Vec::new(),
            street_lights: Vec::new(),
            config: CityConfig::default(),
            time: 0.0,
            day_clock: DayClock::default(),
            rng,
        }
    }

    pub fn new() -> Self {
        Self::new_internal(None)
    }

    /// Create a generator with a seeded RNG for reproducible cities
    pub fn new_with_seed(seed: u64) -> Self {
        Self::new_internal(Some(StdRng::seed_from_u64(seed)))
    }

    /// Create and generate in one go
    pub fn with_city(config: &CityConfig, seed: Option<u64>) -> Result<Self> {
        let mut generator = match seed {
            Some(seed) => Self::new_with_seed(seed),
            None => Self::new(),
        };
        generator.generate(config)?;
        Ok(generator)
    }

    /// Get a random value in the given range, using seeded RNG if available
    pub(crate) fn random_range(&mut self, range: std::ops::Range<f32>) -> f32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    fn random_bool(&mut self) -> bool {
        match &mut self.rng {
            Some(rng) => rng.random_bool(0.5),
            None => rand::rng().random_bool(0.5),
        }
    }

    /// Choose a random element from a slice, using seeded RNG if available
    fn choose_random<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        match &mut self.rng {
            Some(rng) => slice.choose(rng),
            None => slice.choose(&mut rand::rng()),
        }
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub(crate) fn buildings_mut(&mut self) -> &mut Vec<Building> {
        &mut self.buildings
    }

    pub fn parks(&self) -> &[Park] {
        &self.parks
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn street_lights(&self) -> &[StreetLight] {
        &self.street_lights
    }

    pub fn layout_size(&self) -> i32 {
        self.config.layout_size
    }

    pub fn config(&self) -> &CityConfig {
        &self.config
    }

    pub(crate) fn config_mut(&mut self) -> &mut CityConfig {
        &mut self.config
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn day_clock(&self) -> &DayClock {
        &self.day_clock
    }

    pub fn day_clock_mut(&mut self) -> &mut DayClock {
        &mut self.day_clock
    }

    /// Drop every entity collection
    pub fn clear(&mut self) {
        self.roads.clear();
        self.buildings.clear();
        self.parks.clear();
        self.vehicles.clear();
        self.street_lights.clear();
    }

    /// Build a complete city, replacing everything currently in the layout
    pub fn generate(&mut self, config: &CityConfig) -> Result<GenerationReport> {
        config.validate()?;

        self.clear();
        self.config = *config;

        self.generate_roads(config.road_pattern, config.layout_size);
        let report = self.place_buildings(config.building_count, config.skyline, config.layout_size);
        self.generate_pond(config.layout_size);
        self.generate_vehicles(VEHICLE_COUNT);
        self.generate_street_lights();

        info!(
            "Generated {} city: {} roads, {}/{} buildings, {} vehicles, {} street lights",
            config.road_pattern,
            self.roads.len(),
            report.placed,
            report.requested,
            self.vehicles.len(),
            self.street_lights.len()
        );

        Ok(report)
    }

    /// Rebuild only the road collection
    pub fn generate_roads(&mut self, pattern: RoadPattern, size: i32) {
        self.roads = match pattern {
            RoadPattern::Grid => grid_roads(size),
            RoadPattern::Radial => radial_roads(size),
            RoadPattern::Random => match &mut self.rng {
                Some(rng) => random_roads(rng, size),
                None => random_roads(&mut rand::rng(), size),
            },
        };
        debug!("Built {} roads for {} pattern", self.roads.len(), pattern);
    }

    /// Rejection-sample up to `count` new buildings, giving up after
    /// `max_placement_attempts(count)` tries
    pub fn place_buildings(&mut self, count: usize, skyline: Skyline, size: i32) -> GenerationReport {
        let max_attempts = max_placement_attempts(count);
        let mut report = GenerationReport {
            requested: count,
            ..GenerationReport::default()
        };

        while report.placed < count && report.attempts < max_attempts {
            report.attempts += 1;
            if let Some(building) = self.sample_building(skyline, size) {
                self.buildings.push(building);
                report.placed += 1;
            }
        }

        if !report.is_complete() {
            debug!(
                "Placed {}/{} buildings after {} attempts",
                report.placed, report.requested, report.attempts
            );
        }

        report
    }

    /// Draw one candidate building; `None` if it fails validation
    pub(crate) fn sample_building(&mut self, skyline: Skyline, size: i32) -> Option<Building> {
        let width = self.random_range(MIN_GENERATED_SIZE..MAX_GENERATED_SIZE);
        let depth = self.random_range(MIN_GENERATED_SIZE..MAX_GENERATED_SIZE);

        let max_x = size as f32 - width;
        let max_y = size as f32 - depth;
        if max_x <= 0.0 || max_y <= 0.0 {
            return None;
        }

        let position = PlanPoint::new(self.random_range(0.0..max_x), self.random_range(0.0..max_y));
        if !self.is_valid_position(&position, width, depth, size) {
            return None;
        }

        let height = self.random_range(skyline.height_range());
        let texture_index = u8::from(self.random_bool());
        Some(Building::new(position, width, depth, height, texture_index))
    }

    /// Placement check against the pond of a `layout_size` layout and every
    /// existing building
    pub fn is_valid_position(
        &self,
        position: &PlanPoint,
        width: f32,
        depth: f32,
        layout_size: i32,
    ) -> bool {
        let candidate = Footprint::new(position.x, position.y, width, depth);
        is_valid_footprint(&candidate, &self.buildings, layout_size)
    }

    /// The single central pond
    fn generate_pond(&mut self, size: i32) {
        self.parks
            .push(Park::new(Point2D::new(size / 2, size / 2), POND_RADIUS));
    }

    /// Drop manually added parks and restore the pond
    pub(crate) fn reset_parks(&mut self) {
        self.parks.clear();
        self.generate_pond(self.config.layout_size);
    }

    /// Seed vehicles onto random roads
    fn generate_vehicles(&mut self, count: usize) {
        if self.roads.is_empty() {
            return;
        }

        let roads = self.roads.clone();
        for _ in 0..count {
            let Some(road) = self.choose_random(&roads).copied() else {
                break;
            };
            let speed = self.random_range(MIN_VEHICLE_SPEED..MAX_VEHICLE_SPEED);
            self.vehicles.push(Vehicle::on_road(&road, speed));
        }
    }

    /// Rebuild the vehicles for the current road set
    pub(crate) fn reseed_vehicles(&mut self) {
        self.vehicles.clear();
        self.generate_vehicles(VEHICLE_COUNT);
    }

    /// Derive street lights from the current roads
    pub fn generate_street_lights(&mut self) {
        self.street_lights = street_lights_for(&self.roads);
    }

    /// Append a building without validation
    pub fn add_building(&mut self, building: Building) {
        self.buildings.push(building);
    }

    /// Append a road without validation; street lights follow the new road set
    pub fn add_road(&mut self, road: Road) {
        self.roads.push(road);
        self.generate_street_lights();
    }

    /// Append a park without validation
    pub fn add_park(&mut self, park: Park) {
        self.parks.push(park);
    }

    /// Remove the first building whose footprint contains `point`
    pub fn delete_building_at(&mut self, point: &PlanPoint) -> bool {
        match self
            .buildings
            .iter()
            .position(|b| b.footprint().contains(point))
        {
            Some(index) => {
                self.buildings.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove the first road within `threshold` of `point`, along with the
    /// vehicles driving it
    pub fn delete_road_at(&mut self, point: &PlanPoint, threshold: f32) -> bool {
        let Some(index) = self
            .roads
            .iter()
            .position(|road| road.distance_to(point) <= threshold)
        else {
            return false;
        };

        self.remove_road(index)
    }

    /// Remove a road by index, along with the vehicles driving it
    pub fn remove_road(&mut self, index: usize) -> bool {
        if index >= self.roads.len() {
            return false;
        }
        let road = self.roads.remove(index);
        self.vehicles.retain(|vehicle| !vehicle.follows(&road));
        self.generate_street_lights();
        true
    }

    /// Remove the first park whose disk contains `point`
    pub fn delete_park_at(&mut self, point: &PlanPoint) -> bool {
        match self.parks.iter().position(|p| p.contains(point)) {
            Some(index) => {
                self.parks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Index of the road closest to `point`
    pub fn closest_road(&self, point: &PlanPoint) -> Option<usize> {
        self.roads
            .iter()
            .enumerate()
            .min_by_key(|(_, road)| OrderedFloat(road.distance_to(point)))
            .map(|(index, _)| index)
    }

    /// Move every vehicle along its path
    pub fn advance_vehicles(&mut self, delta_secs: f32) -> VehicleTickSummary {
        let mut summary = VehicleTickSummary::default();
        for vehicle in &mut self.vehicles {
            match vehicle.update(delta_secs) {
                VehicleUpdateResult::AdvancedWaypoint(_) => summary.advanced += 1,
                VehicleUpdateResult::LoopedToStart => summary.looped += 1,
                VehicleUpdateResult::Continue | VehicleUpdateResult::Idle => {}
            }
        }
        summary
    }

    /// Advance traffic, the day clock and simulation time by one frame
    pub fn tick(&mut self, delta_secs: f32) -> VehicleTickSummary {
        let summary = self.advance_vehicles(delta_secs);
        self.day_clock.advance(delta_secs);
        self.time += delta_secs;
        summary
    }

    /// Print a summary of the city state
    pub fn print_summary(&self) {
        println!("=== City Summary ===");
        println!("Time: {:.2}s (hour {:.1})", self.time, self.day_clock.hour());
        println!(
            "Layout: {}x{}, Roads: {} ({}), Skyline: {}",
            self.config.layout_size,
            self.config.layout_size,
            self.roads.len(),
            self.config.road_pattern,
            self.config.skyline
        );
        println!(
            "Buildings: {}/{}",
            self.buildings.len(),
            self.config.building_count
        );
        println!("Parks: {}", self.parks.len());
        println!("Street lights: {}", self.street_lights.len());
        println!("Vehicles: {}", self.vehicles.len());

        if !self.vehicles.is_empty() {
            println!("--- Vehicles ---");
            for (index, vehicle) in self.vehicles.iter().enumerate() {
                println!(
                    "  Vehicle {}: speed={:.1}, position=({:.1}, {:.1}), waypoint={}/{}",
                    index,
                    vehicle.speed,
                    vehicle.position.x,
                    vehicle.position.z,
                    vehicle.path_index + 1,
                    vehicle.path.len()
                );
            }
        }
    }

    /// Render the planning view into a canvas `columns` wide
    pub fn plan_canvas(&self, columns: usize) -> PlanCanvas {
        let mut canvas = PlanCanvas::new(self.config.layout_size, columns);
        let lit = self.day_clock.is_night();

        for road in &self.roads {
            canvas.draw_road(road);
        }
        for park in &self.parks {
            canvas.draw_park(park);
        }
        for building in &self.buildings {
            canvas.draw_building(building, lit);
        }
        for vehicle in &self.vehicles {
            canvas.draw_vehicle(vehicle);
        }

        canvas
    }

    /// Draw the planning view in the terminal
    pub fn draw_plan(&self, columns: usize) {
        println!("\n=== City Plan ===");
        println!("Legend: #=Road, o=Park, B=Building (*=lit), V=Vehicle");
        println!();
        print!("{}", self.plan_canvas(columns));
        println!();
    }
}
