//! City generation validation tests
//!
//! Covers road patterns, placement, the pond, vehicles, street lights,
//! entity deletion and the planning view.

use city_designer::city::{
    clears_pond, footprints_conflict, max_placement_attempts, Building, CityConfig,
    CityGenerator, Park, PlanPoint, Point2D, Road, RoadPattern, Skyline, ATTEMPTS_PER_BUILDING,
    BUILDING_GLYPH, LIT_BUILDING_GLYPH, PARK_GLYPH, POND_RADIUS, ROAD_GLYPH,
    STREET_LIGHT_ELEVATION, VEHICLE_COUNT, VEHICLE_ELEVATION, VEHICLE_GLYPH,
};

fn generate(pattern: RoadPattern, seed: u64) -> CityGenerator {
    let config = CityConfig::new(30, 600, pattern, Skyline::MidRise);
    CityGenerator::with_city(&config, Some(seed)).expect("valid config")
}

#[test]
fn test_grid_roads_span_layout() {
    let city = generate(RoadPattern::Grid, 1);
    let roads = city.roads();
    assert_eq!(roads.len(), 10);

    // Vertical roads first, boundary lines excluded
    for (i, road) in roads[..5].iter().enumerate() {
        let x = (i as i32 + 1) * 100;
        assert_eq!(*road, Road::new(Point2D::new(x, 0), Point2D::new(x, 600)));
    }
    for (i, road) in roads[5..].iter().enumerate() {
        let y = (i as i32 + 1) * 100;
        assert_eq!(*road, Road::new(Point2D::new(0, y), Point2D::new(600, y)));
    }
}

#[test]
fn test_radial_road_count() {
    let city = generate(RoadPattern::Radial, 1);
    assert_eq!(city.roads().len(), 8 + 3 * 32);

    // Spokes start at the center
    for spoke in &city.roads()[..8] {
        assert_eq!(spoke.start, Point2D::new(300, 300));
    }
    assert_eq!(city.roads()[0].end, Point2D::new(600, 300));
}

#[test]
fn test_random_roads_stay_in_layout() {
    let city = generate(RoadPattern::Random, 3);
    assert_eq!(city.roads().len(), 15);
    for road in city.roads() {
        for point in [road.start, road.end] {
            assert!((0..600).contains(&point.x));
            assert!((0..600).contains(&point.y));
        }
    }
}

#[test]
fn test_single_central_pond() {
    let city = generate(RoadPattern::Grid, 2);
    assert_eq!(city.parks().len(), 1);
    assert_eq!(city.parks()[0].center, Point2D::new(300, 300));
    assert_eq!(city.parks()[0].radius, POND_RADIUS);
}

#[test]
fn test_buildings_respect_placement_rules() {
    let city = generate(RoadPattern::Grid, 4);
    let buildings = city.buildings();
    assert!(!buildings.is_empty());
    assert!(buildings.len() <= 30);

    for (i, building) in buildings.iter().enumerate() {
        let footprint = building.footprint();
        assert!(footprint.within_layout(600.0), "building {} leaves the layout", i);
        assert!(clears_pond(&footprint, 600), "building {} crowds the pond", i);
        assert!((50.0..100.0).contains(&building.height));
        assert!(building.texture_index <= 1);
        assert!((30.0..70.0).contains(&building.width));
        assert!((30.0..70.0).contains(&building.depth));

        for other in &buildings[i + 1..] {
            assert!(!footprints_conflict(&footprint, &other.footprint()));
        }
    }
}

#[test]
fn test_placement_gives_up_after_attempt_cap() {
    let config = CityConfig::new(10, 100, RoadPattern::Grid, Skyline::LowRise);
    let mut city = CityGenerator::new_with_seed(9);
    let report = city.generate(&config).expect("valid config");

    // The pond leaves no room in a layout this small
    assert_eq!(report.placed, 0);
    assert_eq!(report.attempts, 10 * ATTEMPTS_PER_BUILDING);
    assert!(!report.is_complete());
    assert!(city.buildings().is_empty());
}

#[test]
fn test_vehicles_follow_roads() {
    let city = generate(RoadPattern::Grid, 5);
    assert_eq!(city.vehicles().len(), VEHICLE_COUNT);

    for vehicle in city.vehicles() {
        assert!(city.roads().iter().any(|road| vehicle.follows(road)));
        assert!((20.0..40.0).contains(&vehicle.speed));
        assert_eq!(vehicle.position, vehicle.path[0]);
        assert_eq!(vehicle.position.y, VEHICLE_ELEVATION);
    }
}

#[test]
fn test_street_light_counts() {
    let city = generate(RoadPattern::Grid, 6);
    // Each 600-unit road gets floor(600 / 50) - 1 lights
    assert_eq!(city.street_lights().len(), 10 * 11);
    assert!(city
        .street_lights()
        .iter()
        .all(|light| light.position.y == STREET_LIGHT_ELEVATION));

    let first = city.street_lights()[0].position;
    assert_eq!((first.x, first.z), (100.0, 50.0));
}

#[test]
fn test_pattern_change_rebuilds_lights_and_keeps_buildings() {
    let mut city = generate(RoadPattern::Grid, 7);
    let buildings = city.buildings().to_vec();

    assert!(!city.set_road_pattern(RoadPattern::Grid));
    assert!(city.set_road_pattern(RoadPattern::Radial));

    assert_eq!(city.roads().len(), 104);
    assert_eq!(city.buildings(), buildings.as_slice());
    assert_eq!(city.parks().len(), 1);
    assert_eq!(city.vehicles().len(), VEHICLE_COUNT);

    let expected: usize = city
        .roads()
        .iter()
        .map(|road| ((road.length() / 50.0) as usize).saturating_sub(1))
        .sum();
    assert_eq!(city.street_lights().len(), expected);
}

#[test]
fn test_invalid_layout_size_is_rejected() {
    let config = CityConfig::new(10, 50, RoadPattern::Grid, Skyline::MidRise);
    assert!(config.validate().is_err());

    let mut city = generate(RoadPattern::Grid, 8);
    let roads_before = city.roads().len();
    assert!(city.generate(&config).is_err());
    // A rejected config leaves the previous city alone
    assert_eq!(city.roads().len(), roads_before);
}

#[test]
fn test_seeded_generation_is_reproducible() {
    let a = generate(RoadPattern::Random, 42);
    let b = generate(RoadPattern::Random, 42);
    assert_eq!(a.roads(), b.roads());
    assert_eq!(a.buildings(), b.buildings());
    assert_eq!(a.vehicles(), b.vehicles());
}

#[test]
fn test_regenerate_replaces_previous_city() {
    let mut city = generate(RoadPattern::Grid, 10);
    city.add_road(Road::new(Point2D::new(0, 0), Point2D::new(10, 10)));
    assert_eq!(city.roads().len(), 11);

    city.regenerate().expect("valid config");
    assert_eq!(city.roads().len(), 10);
    assert_eq!(city.parks().len(), 1);
}

#[test]
fn test_delete_operations_report_success() {
    let mut city = generate(RoadPattern::Grid, 11);

    assert!(city.delete_park_at(&PlanPoint::new(300.0, 300.0)));
    assert!(city.parks().is_empty());
    assert!(!city.delete_park_at(&PlanPoint::new(300.0, 300.0)));

    let building = city.buildings()[0].footprint().center();
    let count = city.buildings().len();
    assert!(city.delete_building_at(&building));
    assert_eq!(city.buildings().len(), count - 1);

    assert!(!city.delete_road_at(&PlanPoint::new(50.0, 50.0), 5.0));
}

#[test]
fn test_delete_road_removes_its_vehicles_and_lights() {
    let mut city = generate(RoadPattern::Grid, 12);
    let road = city.roads()[0];
    let riders = city.vehicles().iter().filter(|v| v.follows(&road)).count();

    assert!(city.delete_road_at(&PlanPoint::new(100.0, 300.0), 5.0));
    assert_eq!(city.roads().len(), 9);
    assert!(!city.roads().contains(&road));
    assert_eq!(city.vehicles().len(), VEHICLE_COUNT - riders);
    assert_eq!(city.street_lights().len(), 9 * 11);
}

#[test]
fn test_add_road_adds_lights() {
    let mut city = generate(RoadPattern::Grid, 13);
    city.add_road(Road::new(Point2D::new(0, 0), Point2D::new(200, 0)));
    assert_eq!(city.street_lights().len(), 110 + 3);
}

#[test]
fn test_closest_road() {
    let city = generate(RoadPattern::Grid, 14);
    assert_eq!(city.closest_road(&PlanPoint::new(104.0, 250.0)), Some(0));
    assert_eq!(city.closest_road(&PlanPoint::new(250.0, 497.0)), Some(9));
}

#[test]
fn test_tick_advances_time_and_clock() {
    let mut city = generate(RoadPattern::Grid, 15);
    for _ in 0..10 {
        city.tick(0.5);
    }
    assert!((city.time() - 5.0).abs() < 1e-4);
    assert!((city.day_clock().hour() - (12.0 + 5.0 / 60.0)).abs() < 1e-4);
}

#[test]
fn test_plan_canvas_glyphs() {
    let mut city = generate(RoadPattern::Grid, 16);
    let canvas = city.plan_canvas(80);
    assert_eq!(canvas.width(), 80);
    assert_eq!(canvas.height(), 40);
    assert!(canvas.count(ROAD_GLYPH) > 0);
    assert!(canvas.count(PARK_GLYPH) > 0);
    assert!(canvas.count(BUILDING_GLYPH) > 0);
    assert!(canvas.count(VEHICLE_GLYPH) > 0);
    assert_eq!(canvas.count(LIT_BUILDING_GLYPH), 0);
    assert_eq!(canvas.glyph_at(80, 0), None);

    city.day_clock_mut().set_hour(22.0);
    let night = city.plan_canvas(80);
    assert_eq!(night.count(BUILDING_GLYPH), 0);
    assert!(night.count(LIT_BUILDING_GLYPH) > 0);

    let rendered = night.to_string();
    assert_eq!(rendered.lines().count(), 40);
    assert!(rendered.lines().all(|line| line.chars().count() == 80));
}

#[test]
fn test_attempt_budget_saturates_for_huge_counts() {
    assert_eq!(max_placement_attempts(30), 30 * ATTEMPTS_PER_BUILDING);
    assert_eq!(max_placement_attempts(0), 0);
    assert_eq!(max_placement_attempts(usize::MAX / 5), usize::MAX);
}

#[test]
fn test_is_valid_position_uses_given_layout_size() {
    let city = CityGenerator::new();
    let spot = PlanPoint::new(130.0, 130.0);

    // Dead center of a 300-unit layout's pond, far from a 600-unit one
    assert!(!city.is_valid_position(&spot, 40.0, 40.0, 300));
    assert!(city.is_valid_position(&spot, 40.0, 40.0, 600));
}

#[test]
fn test_is_valid_position_pond_edge() {
    let city = CityGenerator::new();
    // A 30x40 footprint has a bounding radius of 25, so its center must
    // stay 60 + 10 + 25 = 95 units from the pond center at (300, 300)
    assert!(city.is_valid_position(&PlanPoint::new(380.0, 280.0), 30.0, 40.0, 600));
    assert!(!city.is_valid_position(&PlanPoint::new(379.99, 280.0), 30.0, 40.0, 600));
}

#[test]
fn test_is_valid_position_buffer_edge() {
    let mut city = CityGenerator::new();
    city.add_building(Building::new(PlanPoint::new(0.0, 0.0), 40.0, 40.0, 60.0, 0));

    // Buffered footprints touching edge to edge are allowed
    assert!(city.is_valid_position(&PlanPoint::new(50.0, 0.0), 40.0, 40.0, 600));
    assert!(city.is_valid_position(&PlanPoint::new(0.0, 50.0), 40.0, 40.0, 600));
    assert!(!city.is_valid_position(&PlanPoint::new(49.99, 0.0), 40.0, 40.0, 600));
    assert!(!city.is_valid_position(&PlanPoint::new(0.0, 49.99), 40.0, 40.0, 600));
}

#[test]
fn test_add_park_then_delete() {
    let mut city = generate(RoadPattern::Grid, 17);

    // Overlapping the pond is fine, adding does not validate
    let park = Park::new(Point2D::new(340, 300), 40);
    city.add_park(park);
    assert_eq!(city.parks().len(), 2);
    assert_eq!(city.parks()[1], park);

    // Only the added park covers this point
    assert!(city.delete_park_at(&PlanPoint::new(370.0, 300.0)));
    assert_eq!(city.parks().len(), 1);
    assert_eq!(city.parks()[0].center, Point2D::new(300, 300));
}

#[test]
fn test_remove_closest_road() {
    let mut city = generate(RoadPattern::Grid, 18);
    let index = city
        .closest_road(&PlanPoint::new(298.0, 40.0))
        .expect("grid has roads");
    let road = city.roads()[index];
    assert_eq!(road.start, Point2D::new(300, 0));

    assert!(city.remove_road(index));
    assert_eq!(city.roads().len(), 9);
    assert!(city.vehicles().iter().all(|v| !v.follows(&road)));
    assert_eq!(city.street_lights().len(), 9 * 11);

    assert!(!city.remove_road(9));
    assert_eq!(CityGenerator::new().closest_road(&PlanPoint::new(0.0, 0.0)), None);
}

#[test]
fn test_random_pattern_rerolls() {
    let mut city = generate(RoadPattern::Random, 19);
    let before = city.roads().to_vec();

    assert!(city.set_road_pattern(RoadPattern::Random));
    assert_eq!(city.roads().len(), 15);
    assert_ne!(city.roads(), before.as_slice());
    assert_eq!(city.vehicles().len(), VEHICLE_COUNT);
}
