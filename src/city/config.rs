//! Generation settings passed explicitly into the generator

use anyhow::{bail, Result};
use clap::ValueEnum;
use std::fmt;
use std::ops::Range;

use super::types::MIN_LAYOUT_SIZE;

/// Road network topology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RoadPattern {
    /// Evenly spaced vertical and horizontal streets
    #[default]
    Grid,
    /// Spokes from the center plus concentric rings
    Radial,
    /// Unconnected random segments
    Random,
}

impl fmt::Display for RoadPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoadPattern::Grid => "GRID",
            RoadPattern::Radial => "RADIAL",
            RoadPattern::Random => "RANDOM",
        };
        f.write_str(name)
    }
}

/// Height tier applied to every building in a generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Skyline {
    LowRise,
    #[default]
    MidRise,
    Skyscraper,
}

impl Skyline {
    /// Half-open height range for the tier
    pub fn height_range(self) -> Range<f32> {
        match self {
            Skyline::LowRise => 20.0..50.0,
            Skyline::MidRise => 50.0..100.0,
            Skyline::Skyscraper => 100.0..200.0,
        }
    }

    pub fn midpoint_height(self) -> f32 {
        let range = self.height_range();
        (range.start + range.end) * 0.5
    }

    /// The tier a height falls in; heights above every tier count as skyscrapers
    pub fn for_height(height: f32) -> Skyline {
        if height < Skyline::LowRise.height_range().end {
            Skyline::LowRise
        } else if height < Skyline::MidRise.height_range().end {
            Skyline::MidRise
        } else {
            Skyline::Skyscraper
        }
    }

    pub fn next(self) -> Skyline {
        match self {
            Skyline::LowRise => Skyline::MidRise,
            Skyline::MidRise => Skyline::Skyscraper,
            Skyline::Skyscraper => Skyline::LowRise,
        }
    }
}

impl fmt::Display for Skyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Skyline::LowRise => "LOW RISE",
            Skyline::MidRise => "MID RISE",
            Skyline::Skyscraper => "SKYSCRAPER",
        };
        f.write_str(name)
    }
}

/// Everything `generate` needs to build a city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CityConfig {
    /// Target number of buildings; placement may fall short
    pub building_count: usize,
    /// Side length of the square layout
    pub layout_size: i32,
    pub road_pattern: RoadPattern,
    pub skyline: Skyline,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            building_count: 30,
            layout_size: 600,
            road_pattern: RoadPattern::Grid,
            skyline: Skyline::MidRise,
        }
    }
}

impl CityConfig {
    pub fn new(
        building_count: usize,
        layout_size: i32,
        road_pattern: RoadPattern,
        skyline: Skyline,
    ) -> Self {
        Self {
            building_count,
            layout_size,
            road_pattern,
            skyline,
        }
    }

    /// Reject layouts too small to hold a single generated building
    pub fn validate(&self) -> Result<()> {
        if self.layout_size < MIN_LAYOUT_SIZE {
            bail!(
                "Layout size {} is below the minimum of {}",
                self.layout_size,
                MIN_LAYOUT_SIZE
            );
        }
        Ok(())
    }
}
