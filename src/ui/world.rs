//! World setup systems for camera, lighting, ground and the status overlay

use bevy::prelude::*;

use super::components::{
    CityMaterials, CityResource, Ground, MainCamera, StatusText, Sun, ViewMode,
};

/// Camera transform for the given view over a layout
pub fn camera_transform(mode: ViewMode, layout_size: f32) -> Transform {
    let center = Vec3::new(layout_size / 2.0, 0.0, layout_size / 2.0);
    match mode {
        ViewMode::Plan => Transform::from_xyz(center.x, layout_size * 1.1, center.z)
            .looking_at(center, Vec3::NEG_Z),
        ViewMode::Explore => Transform::from_xyz(center.x, 80.0, layout_size + 100.0)
            .looking_at(center, Vec3::Y),
    }
}

/// System to setup the world environment (ground, lighting, camera)
pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    city: Res<CityResource>,
    mode: Res<ViewMode>,
) {
    let size = city.0.layout_size() as f32;

    commands.spawn((MainCamera, Camera3d::default(), camera_transform(*mode, size)));

    commands.spawn((
        Sun,
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(size, size, size * 0.25).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Ground,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(size, size))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
        Transform::from_xyz(size / 2.0, 0.0, size / 2.0),
    ));

    commands.insert_resource(CityMaterials {
        road: materials.add(Color::srgb(0.3, 0.3, 0.3)),
        buildings: [
            materials.add(Color::srgb(0.7, 0.7, 0.9)),
            materials.add(Color::srgb(0.8, 0.7, 0.6)),
        ],
        selected: materials.add(Color::srgb(1.0, 0.8, 0.2)),
        pond: materials.add(Color::srgb(0.1, 0.4, 0.8)),
        vehicle: materials.add(Color::srgb(0.8, 0.2, 0.2)),
        lamp: materials.add(Color::srgb(1.0, 0.9, 0.5)),
    });
}

/// System to setup the status overlay at the top-left of the screen
pub fn setup_status_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Auto,
                height: Val::Auto,
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("CITY DESIGNER"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                StatusText,
            ));
        });
}
