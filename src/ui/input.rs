//! Input handling systems
//!
//! Keyboard commands map onto the city's mutation API. Anything that
//! changes the set of entities marks the visuals dirty so they are rebuilt.

use bevy::prelude::*;

use super::components::{
    CameraSettings, CityDirty, CityResource, MainCamera, Selection, ViewMode,
};
use super::world::camera_transform;
use crate::city::{PlanPoint, RoadPattern, Skyline, FAST_TIME_SPEED};

/// Distance a selected building moves per key press
const MOVE_STEP: f32 = 10.0;
/// Footprint change per key press
const RESIZE_STEP: f32 = 5.0;
/// Building count change per key press
const COUNT_STEP: usize = 5;
const MIN_BUILDING_COUNT: usize = 5;

/// Handle exit and view switching
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut exit: MessageWriter<AppExit>,
    mut mode: ResMut<ViewMode>,
    city: Res<CityResource>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }

    if keyboard.just_pressed(KeyCode::Enter) {
        *mode = match *mode {
            ViewMode::Plan => ViewMode::Explore,
            ViewMode::Explore => ViewMode::Plan,
        };
        if let Ok(mut transform) = camera_query.single_mut() {
            *transform = camera_transform(*mode, city.0.layout_size() as f32);
        }
        info!("Switched to {:?} view", *mode);
    }
}

/// Handle regeneration, road pattern, skyline and building count keys
pub fn handle_city_commands(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut city: ResMut<CityResource>,
    mut dirty: ResMut<CityDirty>,
    mut selection: ResMut<Selection>,
) {
    let city = &mut city.0;
    let mut regenerate = false;

    if keyboard.just_pressed(KeyCode::KeyR) {
        regenerate = true;
    }

    let pattern = if keyboard.just_pressed(KeyCode::Digit1) {
        Some(RoadPattern::Grid)
    } else if keyboard.just_pressed(KeyCode::Digit2) {
        Some(RoadPattern::Radial)
    } else if keyboard.just_pressed(KeyCode::Digit3) {
        Some(RoadPattern::Random)
    } else {
        None
    };
    if let Some(pattern) = pattern {
        dirty.0 |= city.set_road_pattern(pattern);
    }

    let skyline = if keyboard.just_pressed(KeyCode::Digit4) {
        Some(Skyline::LowRise)
    } else if keyboard.just_pressed(KeyCode::Digit5) {
        Some(Skyline::MidRise)
    } else if keyboard.just_pressed(KeyCode::Digit6) {
        Some(Skyline::Skyscraper)
    } else {
        None
    };
    if let Some(skyline) = skyline {
        city.set_skyline(skyline);
        dirty.0 = true;
    }

    let count = city.config().building_count;
    let new_count = if keyboard.any_just_pressed([KeyCode::Equal, KeyCode::NumpadAdd]) {
        Some(count + COUNT_STEP)
    } else if keyboard.any_just_pressed([KeyCode::Minus, KeyCode::NumpadSubtract]) {
        Some(count.saturating_sub(COUNT_STEP).max(MIN_BUILDING_COUNT))
    } else {
        None
    };

    let result = match new_count {
        Some(count) => Some(city.set_building_count(count)),
        None if regenerate => Some(city.regenerate()),
        None => None,
    };

    if let Some(result) = result {
        match result {
            Ok(report) => info!(
                "City regenerated: {}/{} buildings",
                report.placed, report.requested
            ),
            Err(e) => warn!("Failed to regenerate city: {:#}", e),
        }
        selection.0 = None;
        dirty.0 = true;
    }

    if keyboard.just_pressed(KeyCode::KeyT) {
        city.day_clock_mut().set_speed(FAST_TIME_SPEED);
        info!("Time speed: Fast ({}x)", FAST_TIME_SPEED);
    }
    if keyboard.just_pressed(KeyCode::KeyY) {
        city.day_clock_mut().set_speed(1.0);
        info!("Time speed: Normal (1x)");
    }
    if keyboard.just_pressed(KeyCode::KeyN) {
        let clock = city.day_clock_mut();
        if clock.is_night() {
            clock.set_hour(12.0);
            info!("Time set to day (12:00)");
        } else {
            clock.set_hour(22.0);
            info!("Time set to night (22:00)");
        }
    }
}

/// Handle building selection and per-building edits
pub fn handle_building_edits(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut city: ResMut<CityResource>,
    mut dirty: ResMut<CityDirty>,
    mut selection: ResMut<Selection>,
) {
    let city = &mut city.0;
    let count = city.buildings().len();

    // Drop a stale selection left over from a removal or regeneration
    if selection.0.is_some_and(|index| index >= count) {
        selection.0 = None;
    }

    if keyboard.just_pressed(KeyCode::KeyB) {
        match city.add_random_building() {
            Some(index) => {
                selection.0 = Some(index);
                dirty.0 = true;
            }
            None => warn!("No room for another building"),
        }
    }

    if keyboard.just_pressed(KeyCode::Tab) && count > 0 {
        selection.0 = Some(match selection.0 {
            Some(index) => (index + 1) % count,
            None => 0,
        });
    }

    let Some(index) = selection.0 else {
        return;
    };

    let (dx, dy) = arrow_delta(&keyboard);
    if (dx != 0.0 || dy != 0.0) && city.move_building(index, dx, dy) {
        dirty.0 = true;
    }

    if keyboard.just_pressed(KeyCode::BracketRight)
        && city.resize_building(index, RESIZE_STEP, RESIZE_STEP)
    {
        dirty.0 = true;
    }
    if keyboard.just_pressed(KeyCode::BracketLeft)
        && city.resize_building(index, -RESIZE_STEP, -RESIZE_STEP)
    {
        dirty.0 = true;
    }

    if keyboard.just_pressed(KeyCode::KeyH) && city.cycle_building_height(index) {
        dirty.0 = true;
    }

    if keyboard.any_just_pressed([KeyCode::Delete, KeyCode::Backspace])
        && city.remove_building(index)
    {
        selection.0 = None;
        dirty.0 = true;
    }
}

/// Remove the road nearest the point under the camera
pub fn handle_road_removal(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut city: ResMut<CityResource>,
    mut dirty: ResMut<CityDirty>,
    camera_query: Query<&Transform, With<MainCamera>>,
) {
    if !keyboard.just_pressed(KeyCode::KeyX) {
        return;
    }
    let Ok(transform) = camera_query.single() else {
        return;
    };

    let city = &mut city.0;
    let focus = PlanPoint::new(transform.translation.x, transform.translation.z);
    match city.closest_road(&focus) {
        Some(index) if city.remove_road(index) => {
            info!("Removed road {} ({} left)", index, city.roads().len());
            dirty.0 = true;
        }
        _ => warn!("No road to remove"),
    }
}

fn arrow_delta(keyboard: &ButtonInput<KeyCode>) -> (f32, f32) {
    let mut delta = (0.0, 0.0);
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        delta.0 -= MOVE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        delta.0 += MOVE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        delta.1 -= MOVE_STEP;
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        delta.1 += MOVE_STEP;
    }
    delta
}

/// Fly the camera in the exploration view
pub fn handle_camera_movement(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    settings: Res<CameraSettings>,
    mode: Res<ViewMode>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if *mode != ViewMode::Explore {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let forward = transform.forward().as_vec3().with_y(0.0).normalize_or_zero();
    let right = transform.right().as_vec3().with_y(0.0).normalize_or_zero();

    let mut movement = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        movement += forward;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        movement -= forward;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        movement += right;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        movement -= right;
    }
    transform.translation += movement.normalize_or_zero() * settings.movement_speed * dt;

    if keyboard.pressed(KeyCode::Space) {
        transform.translation.y += settings.vertical_speed * dt;
    }
    if keyboard.pressed(KeyCode::ShiftLeft) {
        transform.translation.y = (transform.translation.y - settings.vertical_speed * dt).max(2.0);
    }

    if keyboard.pressed(KeyCode::KeyQ) {
        transform.rotate_y(settings.rotation_speed * dt);
    }
    if keyboard.pressed(KeyCode::KeyE) {
        transform.rotate_y(-settings.rotation_speed * dt);
    }
}
