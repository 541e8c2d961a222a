//! Systems for spawning visual entities from city state

use bevy::prelude::*;

use super::components::{
    BuildingLink, CityDirty, CityMaterials, CityResource, CitySynced, StreetLightLink,
    VehicleLink,
};
use crate::city::{Building, CityGenerator, Park, Position, Road, StreetLight, Vehicle};

const ROAD_WIDTH: f32 = 8.0;
const ROAD_HEIGHT: f32 = 0.5;
const POND_DEPTH: f32 = 1.0;
const LAMP_RADIUS: f32 = 1.5;
const VEHICLE_SIZE: Vec3 = Vec3::new(6.0, 3.0, 10.0);

/// System to rebuild every city visual after the generator changed
pub fn refresh_city_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    city: Res<CityResource>,
    city_materials: Res<CityMaterials>,
    mut dirty: ResMut<CityDirty>,
    synced: Query<Entity, With<CitySynced>>,
) {
    if !dirty.0 {
        return;
    }

    for entity in synced.iter() {
        commands.entity(entity).despawn();
    }

    spawn_city(&mut commands, &mut meshes, &city_materials, &city.0);
    dirty.0 = false;
}

fn spawn_city(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    city_materials: &CityMaterials,
    city: &CityGenerator,
) {
    for road in city.roads() {
        spawn_road_visual(commands, meshes, city_materials, road);
    }
    for park in city.parks() {
        spawn_park_visual(commands, meshes, city_materials, park);
    }
    for (index, building) in city.buildings().iter().enumerate() {
        spawn_building_visual(commands, meshes, city_materials, index, building);
    }
    for light in city.street_lights() {
        spawn_street_light_visual(commands, meshes, city_materials, light);
    }
    for (index, vehicle) in city.vehicles().iter().enumerate() {
        spawn_vehicle_visual(commands, meshes, city_materials, index, vehicle);
    }
}

/// Spawn a single road visual as a flat slab between its endpoints
pub fn spawn_road_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    city_materials: &CityMaterials,
    road: &Road,
) {
    let start = Position::on_plan(road.start, 0.0);
    let end = Position::on_plan(road.end, 0.0);
    let length = start.distance(&end);
    if length <= 0.0 {
        return;
    }
    let midpoint = start.lerp(&end, 0.5);
    let rotation = Quat::from_rotation_y(start.angle_to(&end));

    commands.spawn((
        CitySynced,
        Mesh3d(meshes.add(Cuboid::new(ROAD_WIDTH, ROAD_HEIGHT, length))),
        MeshMaterial3d(city_materials.road.clone()),
        Transform::from_translation(Vec3::new(midpoint.x, ROAD_HEIGHT / 2.0, midpoint.z))
            .with_rotation(rotation),
    ));
}

/// Spawn a park as a shallow disc of water
pub fn spawn_park_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    city_materials: &CityMaterials,
    park: &Park,
) {
    commands.spawn((
        CitySynced,
        Mesh3d(meshes.add(Cylinder::new(park.radius as f32, POND_DEPTH))),
        MeshMaterial3d(city_materials.pond.clone()),
        Transform::from_xyz(
            park.center.x as f32,
            POND_DEPTH / 2.0,
            park.center.y as f32,
        ),
    ));
}

/// Spawn a building as a box standing on its footprint
pub fn spawn_building_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    city_materials: &CityMaterials,
    index: usize,
    building: &Building,
) {
    let center = building.footprint().center();
    let material = &city_materials.buildings[usize::from(building.texture_index) % 2];

    commands.spawn((
        CitySynced,
        BuildingLink(index),
        Mesh3d(meshes.add(Cuboid::new(
            building.width,
            building.height,
            building.depth,
        ))),
        MeshMaterial3d(material.clone()),
        Transform::from_xyz(center.x, building.height / 2.0, center.y),
    ));
}

/// Spawn a street lamp with a point light that is switched on at night
pub fn spawn_street_light_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    city_materials: &CityMaterials,
    light: &StreetLight,
) {
    let pos = light.position;
    commands.spawn((
        CitySynced,
        StreetLightLink,
        Mesh3d(meshes.add(Sphere::new(LAMP_RADIUS))),
        MeshMaterial3d(city_materials.lamp.clone()),
        PointLight {
            intensity: 0.0,
            range: 60.0,
            color: Color::srgb(1.0, 0.9, 0.6),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(pos.x, pos.y, pos.z),
    ));
}

/// Spawn a vehicle body; its transform is driven by `sync_vehicles`
pub fn spawn_vehicle_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    city_materials: &CityMaterials,
    index: usize,
    vehicle: &Vehicle,
) {
    commands.spawn((
        CitySynced,
        VehicleLink(index),
        Mesh3d(meshes.add(Cuboid::from_size(VEHICLE_SIZE))),
        MeshMaterial3d(city_materials.vehicle.clone()),
        Transform::from_xyz(vehicle.position.x, vehicle.position.y, vehicle.position.z)
            .with_rotation(Quat::from_rotation_y(vehicle.angle())),
    ));
}
