//! Property-based tests for building placement and rasterization

use proptest::prelude::*;

use city_designer::city::{
    clears_pond, footprints_conflict, rasterize_line, CityConfig, CityGenerator, Point2D,
    RoadPattern, Skyline, ATTEMPTS_PER_BUILDING,
};

fn road_pattern() -> impl Strategy<Value = RoadPattern> {
    prop_oneof![
        Just(RoadPattern::Grid),
        Just(RoadPattern::Radial),
        Just(RoadPattern::Random),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Every generated building keeps its buffer, clears the pond and stays inside
    #[test]
    fn test_generated_buildings_are_valid(
        seed in any::<u64>(),
        count in 0usize..40,
        size in 100i32..900,
        pattern in road_pattern(),
    ) {
        let config = CityConfig::new(count, size, pattern, Skyline::MidRise);
        let mut city = CityGenerator::new_with_seed(seed);
        let report = city.generate(&config).unwrap();

        prop_assert_eq!(report.placed, city.buildings().len());
        prop_assert!(report.placed <= count);
        prop_assert!(report.attempts <= count * ATTEMPTS_PER_BUILDING);

        let buildings = city.buildings();
        for (i, building) in buildings.iter().enumerate() {
            let footprint = building.footprint();
            prop_assert!(footprint.within_layout(size as f32));
            prop_assert!(clears_pond(&footprint, size));
            for other in &buildings[i + 1..] {
                prop_assert!(!footprints_conflict(&footprint, &other.footprint()));
            }
        }
    }

    /// Lines always reach their end through 8-connected steps
    #[test]
    fn test_lines_are_connected(
        x0 in -200i32..200, y0 in -200i32..200,
        x1 in -200i32..200, y1 in -200i32..200,
    ) {
        let start = Point2D::new(x0, y0);
        let end = Point2D::new(x1, y1);
        let points = rasterize_line(start, end);

        prop_assert_eq!(points[0], start);
        prop_assert_eq!(*points.last().unwrap(), end);
        for pair in points.windows(2) {
            prop_assert!((pair[1].x - pair[0].x).abs() <= 1);
            prop_assert!((pair[1].y - pair[0].y).abs() <= 1);
        }
    }

    /// Vehicles never leave the bounding box of their road
    #[test]
    fn test_vehicles_stay_on_their_roads(seed in any::<u64>(), steps in 1usize..200) {
        let config = CityConfig::new(5, 600, RoadPattern::Random, Skyline::LowRise);
        let mut city = CityGenerator::with_city(&config, Some(seed)).unwrap();

        for _ in 0..steps {
            city.tick(0.1);
        }

        for vehicle in city.vehicles() {
            let (a, b) = (vehicle.path[0], vehicle.path[1]);
            prop_assert!(vehicle.position.x >= a.x.min(b.x) - 5.0);
            prop_assert!(vehicle.position.x <= a.x.max(b.x) + 5.0);
            prop_assert!(vehicle.position.z >= a.z.min(b.z) - 5.0);
            prop_assert!(vehicle.position.z <= a.z.max(b.z) + 5.0);
        }
    }
}
