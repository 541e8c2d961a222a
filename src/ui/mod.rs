//! UI module that visualizes and edits the city using Bevy
//!
//! All generation and simulation logic lives in the `city` module.
//! The UI reads state from `CityGenerator`, renders it in 3D and maps
//! keyboard commands onto the generator's editing operations.

mod components;
mod input;
pub mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

use crate::city::CityConfig;

pub use components::{CityDirty, CityResource, Selection, ViewMode};

use components::CameraSettings;
use input::{
    handle_building_edits, handle_camera_movement, handle_city_commands, handle_input,
    handle_road_removal,
};
use spawner::refresh_city_visuals;
use sync::{highlight_selection, sync_vehicles, tick_city, update_lighting, update_status_text};
use world::{setup_status_ui, setup_world};

/// Plugin to register all UI systems
pub struct CityDesignerUIPlugin {
    pub config: CityConfig,
    pub seed: Option<u64>,
}

impl Plugin for CityDesignerUIPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(CityResource::generate(&self.config, self.seed))
            .init_resource::<CityDirty>()
            .init_resource::<CameraSettings>()
            .init_resource::<Selection>()
            .init_resource::<ViewMode>()
            .add_systems(Startup, (setup_world, setup_status_ui))
            .add_systems(FixedUpdate, tick_city)
            .add_systems(
                Update,
                (
                    handle_input,
                    handle_city_commands,
                    handle_building_edits.after(handle_city_commands),
                    handle_camera_movement,
                    handle_road_removal.after(handle_city_commands),
                    refresh_city_visuals
                        .after(handle_city_commands)
                        .after(handle_building_edits)
                        .after(handle_road_removal),
                    sync_vehicles.after(refresh_city_visuals),
                    highlight_selection.after(refresh_city_visuals),
                    update_lighting,
                    update_status_text,
                ),
            );
    }
}
