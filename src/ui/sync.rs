//! Systems for syncing Bevy entities with city state

use bevy::prelude::*;

use super::components::{
    BuildingLink, CityMaterials, CityResource, Selection, StatusText, StreetLightLink, Sun,
    VehicleLink, ViewMode,
};

const STREET_LIGHT_INTENSITY: f32 = 200_000.0;
const DAY_ILLUMINANCE: f32 = 10_000.0;
const NIGHT_ILLUMINANCE: f32 = 300.0;

/// System to run a simulation tick
pub fn tick_city(time: Res<Time>, mut city: ResMut<CityResource>) {
    city.0.tick(time.delta_secs());
}

/// System to move vehicle visuals to their simulated positions
pub fn sync_vehicles(
    city: Res<CityResource>,
    mut vehicle_query: Query<(&VehicleLink, &mut Transform)>,
) {
    for (link, mut transform) in vehicle_query.iter_mut() {
        if let Some(vehicle) = city.0.vehicles().get(link.0) {
            transform.translation =
                Vec3::new(vehicle.position.x, vehicle.position.y, vehicle.position.z);
            transform.rotation = Quat::from_rotation_y(vehicle.angle());
        }
    }
}

/// System to highlight the selected building
pub fn highlight_selection(
    city: Res<CityResource>,
    selection: Res<Selection>,
    city_materials: Res<CityMaterials>,
    mut building_query: Query<(&BuildingLink, &mut MeshMaterial3d<StandardMaterial>)>,
) {
    for (link, mut material) in building_query.iter_mut() {
        let Some(building) = city.0.buildings().get(link.0) else {
            continue;
        };

        material.0 = if selection.0 == Some(link.0) {
            city_materials.selected.clone()
        } else {
            city_materials.buildings[usize::from(building.texture_index) % 2].clone()
        };
    }
}

/// System to switch street lights and dim the sun at night
pub fn update_lighting(
    city: Res<CityResource>,
    mut lamp_query: Query<&mut PointLight, With<StreetLightLink>>,
    mut sun_query: Query<&mut DirectionalLight, With<Sun>>,
) {
    let night = city.0.day_clock().is_night();

    for mut lamp in lamp_query.iter_mut() {
        lamp.intensity = if night { STREET_LIGHT_INTENSITY } else { 0.0 };
    }

    for mut sun in sun_query.iter_mut() {
        sun.illuminance = if night {
            NIGHT_ILLUMINANCE
        } else {
            DAY_ILLUMINANCE
        };
    }
}

/// System to refresh the status overlay
pub fn update_status_text(
    city: Res<CityResource>,
    selection: Res<Selection>,
    mode: Res<ViewMode>,
    mut text_query: Query<&mut Text, With<StatusText>>,
) {
    let city = &city.0;
    let config = city.config();
    let clock = city.day_clock();

    let selected = match selection.0 {
        Some(index) => format!("#{}", index),
        None => "none".to_string(),
    };

    let status = format!(
        "CITY DESIGNER ({:?} view)\nRoads: {} ({})\nSkyline: {}\nBuildings: {}/{}\nVehicles: {}\nStreet lights: {}\nTime: {:02}:{:02} x{}{}\nSelected: {}",
        *mode,
        city.roads().len(),
        config.road_pattern,
        config.skyline,
        city.buildings().len(),
        config.building_count,
        city.vehicles().len(),
        city.street_lights().len(),
        clock.hour() as u32,
        (clock.hour().fract() * 60.0) as u32,
        clock.speed(),
        if clock.is_night() { " (night)" } else { "" },
        selected,
    );

    for mut text in text_query.iter_mut() {
        text.0 = status.clone();
    }
}
