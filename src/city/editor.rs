//! Live editing operations on a generated city
//!
//! Every operation reports success through its return value. Bad indices
//! and rejected edits leave the city untouched.

use anyhow::Result;
use log::{debug, info};

use super::config::{RoadPattern, Skyline};
use super::generator::{CityGenerator, GenerationReport};
use super::placement::is_valid_footprint;
use super::types::{Footprint, PlanPoint};

/// Attempts allowed when adding a single building interactively
pub const SINGLE_PLACEMENT_ATTEMPTS: usize = 100;

/// Footprint range enforced by interactive resizing
pub const MIN_EDIT_SIZE: f32 = 20.0;
pub const MAX_EDIT_SIZE: f32 = 100.0;

impl CityGenerator {
    /// Rejection-sample one building with the active skyline and append it.
    /// Returns the new building's index.
    pub fn add_random_building(&mut self) -> Option<usize> {
        let skyline = self.config().skyline;
        let size = self.layout_size();

        for attempt in 1..=SINGLE_PLACEMENT_ATTEMPTS {
            if let Some(building) = self.sample_building(skyline, size) {
                self.add_building(building);
                debug!("Added building after {} attempts", attempt);
                return Some(self.buildings().len() - 1);
            }
        }

        debug!(
            "No free spot for a new building after {} attempts",
            SINGLE_PLACEMENT_ATTEMPTS
        );
        None
    }

    pub fn remove_building(&mut self, index: usize) -> bool {
        if index >= self.buildings().len() {
            return false;
        }
        self.buildings_mut().remove(index);
        true
    }

    /// Index of the first building containing `point`
    pub fn building_at(&self, point: &PlanPoint) -> Option<usize> {
        self.buildings()
            .iter()
            .position(|b| b.footprint().contains(point))
    }

    /// Shift a building, clamped to the layout. Rejected if the new spot
    /// crowds the pond or another building.
    pub fn move_building(&mut self, index: usize, dx: f32, dy: f32) -> bool {
        let Some(building) = self.buildings().get(index) else {
            return false;
        };

        let size = self.layout_size() as f32;
        let footprint = building.footprint();
        let moved = Footprint::new(
            (footprint.x + dx).min(size - footprint.width).max(0.0),
            (footprint.y + dy).min(size - footprint.depth).max(0.0),
            footprint.width,
            footprint.depth,
        );

        if !self.fits_without(index, &moved) {
            return false;
        }

        let building = &mut self.buildings_mut()[index];
        building.position = PlanPoint::new(moved.x, moved.y);
        true
    }

    /// Grow or shrink a building's footprint, keeping its top-left corner
    pub fn resize_building(&mut self, index: usize, dw: f32, dd: f32) -> bool {
        let Some(building) = self.buildings().get(index) else {
            return false;
        };

        let size = self.layout_size() as f32;
        let footprint = building.footprint();
        let resized = Footprint::new(
            footprint.x,
            footprint.y,
            (footprint.width + dw)
                .clamp(MIN_EDIT_SIZE, MAX_EDIT_SIZE)
                .min(size - footprint.x),
            (footprint.depth + dd)
                .clamp(MIN_EDIT_SIZE, MAX_EDIT_SIZE)
                .min(size - footprint.y),
        );

        if !self.fits_without(index, &resized) {
            return false;
        }

        let building = &mut self.buildings_mut()[index];
        building.width = resized.width;
        building.depth = resized.depth;
        true
    }

    /// Step a building to the next skyline tier, at that tier's midpoint height
    pub fn cycle_building_height(&mut self, index: usize) -> bool {
        match self.buildings_mut().get_mut(index) {
            Some(building) => {
                let tier = Skyline::for_height(building.height).next();
                building.height = tier.midpoint_height();
                true
            }
            None => false,
        }
    }

    /// Switch road pattern, rebuilding roads, parks, vehicles and street lights.
    /// Buildings stay where they are. Returns false if a deterministic pattern
    /// is already active; `Random` always re-rolls.
    pub fn set_road_pattern(&mut self, pattern: RoadPattern) -> bool {
        if self.config().road_pattern == pattern && pattern != RoadPattern::Random {
            return false;
        }

        let size = self.layout_size();
        self.config_mut().road_pattern = pattern;
        self.generate_roads(pattern, size);

        self.reset_parks();
        self.reseed_vehicles();
        self.generate_street_lights();

        info!("Road type: {}", pattern);
        true
    }

    /// Re-draw every building's height within the new tier
    pub fn set_skyline(&mut self, skyline: Skyline) {
        self.config_mut().skyline = skyline;
        for index in 0..self.buildings().len() {
            let height = self.random_range(skyline.height_range());
            self.buildings_mut()[index].height = height;
        }
        info!("Skyline: {}", skyline);
    }

    /// Change the building target and regenerate
    pub fn set_building_count(&mut self, count: usize) -> Result<GenerationReport> {
        self.config_mut().building_count = count;
        info!("Buildings: {}", count);
        self.regenerate()
    }

    /// Generate a fresh city with the active settings
    pub fn regenerate(&mut self) -> Result<GenerationReport> {
        let config = *self.config();
        self.generate(&config)
    }

    fn fits_without(&self, index: usize, footprint: &Footprint) -> bool {
        let others = self
            .buildings()
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, b)| b);
        is_valid_footprint(footprint, others, self.layout_size())
    }
}
