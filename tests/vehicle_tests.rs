//! Vehicle movement validation tests

use city_designer::city::{Point2D, Position, Road, Vehicle, VehicleUpdateResult};

fn straight_vehicle(length: i32, speed: f32) -> Vehicle {
    Vehicle::on_road(&Road::new(Point2D::new(0, 0), Point2D::new(length, 0)), speed)
}

#[test]
fn test_vehicle_starts_at_path_start() {
    let vehicle = straight_vehicle(100, 20.0);
    assert_eq!(vehicle.position, Position::new(0.0, 5.0, 0.0));
    assert_eq!(vehicle.path_index, 0);
    assert!((vehicle.direction.length() - 1.0).abs() < 1e-5);
    assert_eq!(vehicle.direction, Position::new(1.0, 0.0, 0.0));
}

#[test]
fn test_vehicle_loops_back_to_start() {
    let mut vehicle = straight_vehicle(100, 20.0);
    let dt = 0.1;

    let mut ticks = 0;
    let mut result = VehicleUpdateResult::Continue;
    while result != VehicleUpdateResult::LoopedToStart && ticks < 1000 {
        result = vehicle.update(dt);
        ticks += 1;
    }

    assert_eq!(result, VehicleUpdateResult::LoopedToStart);
    // 100 units at 20 units/s takes at most 5 s, less the 5-unit threshold
    let elapsed = ticks as f32 * dt;
    assert!(elapsed <= 5.0 + dt, "took {}s", elapsed);
    assert!(elapsed >= 4.5 - dt, "took {}s", elapsed);

    assert_eq!(vehicle.position, vehicle.path[0]);
    assert_eq!(vehicle.path_index, 0);
    assert_eq!(vehicle.direction, Position::new(1.0, 0.0, 0.0));
}

#[test]
fn test_large_step_does_not_overshoot_forever() {
    let mut vehicle = straight_vehicle(100, 30.0);
    // One step carries the vehicle well past the end
    assert_eq!(vehicle.update(10.0), VehicleUpdateResult::LoopedToStart);
    assert_eq!(vehicle.position, vehicle.path[0]);
}

#[test]
fn test_multi_waypoint_path() {
    let path = vec![
        Position::new(0.0, 5.0, 0.0),
        Position::new(50.0, 5.0, 0.0),
        Position::new(50.0, 5.0, 50.0),
    ];
    let mut vehicle = Vehicle::new(path, 25.0);

    let mut advanced = Vec::new();
    for _ in 0..100 {
        match vehicle.update(0.1) {
            VehicleUpdateResult::AdvancedWaypoint(index) => advanced.push(index),
            VehicleUpdateResult::LoopedToStart => break,
            _ => {}
        }
    }

    assert_eq!(advanced, vec![1]);
    assert_eq!(vehicle.position, Position::new(0.0, 5.0, 0.0));
}

#[test]
fn test_direction_turns_at_waypoint() {
    let path = vec![
        Position::new(0.0, 5.0, 0.0),
        Position::new(10.0, 5.0, 0.0),
        Position::new(10.0, 5.0, 100.0),
    ];
    let mut vehicle = Vehicle::new(path, 10.0);

    let result = vehicle.update(0.6);
    assert_eq!(result, VehicleUpdateResult::AdvancedWaypoint(1));
    assert!((vehicle.direction.length() - 1.0).abs() < 1e-5);
    assert!(vehicle.direction.z > 0.9);
}

#[test]
fn test_short_path_is_idle() {
    let mut empty = Vehicle::new(Vec::new(), 20.0);
    assert_eq!(empty.update(1.0), VehicleUpdateResult::Idle);

    let mut single = Vehicle::new(vec![Position::new(3.0, 5.0, 4.0)], 20.0);
    assert_eq!(single.update(1.0), VehicleUpdateResult::Idle);
    assert_eq!(single.position, Position::new(3.0, 5.0, 4.0));
}

#[test]
fn test_zero_length_road_never_produces_nan() {
    let mut vehicle = Vehicle::on_road(&Road::new(Point2D::new(7, 7), Point2D::new(7, 7)), 25.0);
    assert_eq!(vehicle.direction, Position::default());

    for _ in 0..10 {
        vehicle.update(0.1);
        assert!(!vehicle.position.x.is_nan());
        assert!(!vehicle.position.z.is_nan());
        assert!(!vehicle.angle().is_nan());
    }
    assert_eq!(vehicle.position, Position::new(7.0, 5.0, 7.0));
}
