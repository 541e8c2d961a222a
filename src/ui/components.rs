//! UI components and resources for linking Bevy entities to city state

use bevy::prelude::*;

use crate::city::{CityConfig, CityGenerator};

/// Resource wrapper for the city generator
#[derive(Resource)]
pub struct CityResource(pub CityGenerator);

impl CityResource {
    /// Generate the initial city, falling back to defaults on invalid settings
    pub fn generate(config: &CityConfig, seed: Option<u64>) -> Self {
        let mut city = match seed {
            Some(seed) => CityGenerator::new_with_seed(seed),
            None => CityGenerator::new(),
        };

        if let Err(e) = city.generate(config) {
            bevy::log::warn!("Invalid city settings ({:#}), using defaults", e);
            if let Err(e) = city.generate(&CityConfig::default()) {
                bevy::log::error!("Failed to generate default city: {:#}", e);
            }
        }

        Self(city)
    }
}

impl Default for CityResource {
    fn default() -> Self {
        Self::generate(&CityConfig::default(), None)
    }
}

/// Set when the static city visuals no longer match the generator
#[derive(Resource)]
pub struct CityDirty(pub bool);

impl Default for CityDirty {
    fn default() -> Self {
        Self(true)
    }
}

/// Marker component for ground plane
#[derive(Component)]
pub struct Ground;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker component for the sun
#[derive(Component)]
pub struct Sun;

/// Which camera the user is looking through
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Top-down planning view
    #[default]
    Plan,
    /// Free-flying exploration camera
    Explore,
}

/// Resource to control camera movement settings
#[derive(Resource)]
pub struct CameraSettings {
    pub movement_speed: f32,
    pub rotation_speed: f32,
    pub vertical_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            movement_speed: 150.0,
            rotation_speed: 1.0,
            vertical_speed: 100.0,
        }
    }
}

/// Index of the building being edited
#[derive(Resource, Default)]
pub struct Selection(pub Option<usize>);

/// Shared material handles for city visuals
#[derive(Resource)]
pub struct CityMaterials {
    pub road: Handle<StandardMaterial>,
    pub buildings: [Handle<StandardMaterial>; 2],
    pub selected: Handle<StandardMaterial>,
    pub pond: Handle<StandardMaterial>,
    pub vehicle: Handle<StandardMaterial>,
    pub lamp: Handle<StandardMaterial>,
}

/// Marker for entities rebuilt from city state
#[derive(Component)]
pub struct CitySynced;

/// Links a Bevy entity to a building by index
#[derive(Component)]
pub struct BuildingLink(pub usize);

/// Links a Bevy entity to a vehicle by index
#[derive(Component)]
pub struct VehicleLink(pub usize);

/// Marker for street light entities
#[derive(Component)]
pub struct StreetLightLink;

/// Marker for the status overlay text
#[derive(Component)]
pub struct StatusText;
