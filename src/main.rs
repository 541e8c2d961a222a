use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use city_designer::city::{CityConfig, CityGenerator, RoadPattern, Skyline};

/// Upper bound on `--buildings`; far more than any layout can hold
const MAX_BUILDINGS: i64 = 10_000;

#[derive(Parser)]
#[command(name = "city_designer")]
#[command(about = "Procedural city designer with optional 3D UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "100")]
    ticks: u32,

    /// Time delta per tick in seconds
    #[arg(long, default_value = "0.1", value_parser = parse_delta)]
    delta: f32,

    /// Target number of buildings
    #[arg(long, default_value = "30", value_parser = clap::value_parser!(u32).range(0..=MAX_BUILDINGS))]
    buildings: u32,

    /// Side length of the square layout
    #[arg(long, default_value = "600")]
    size: i32,

    /// Road network pattern
    #[arg(long, value_enum, default_value_t = RoadPattern::Grid)]
    roads: RoadPattern,

    /// Building height tier
    #[arg(long, value_enum, default_value_t = Skyline::MidRise)]
    skyline: Skyline,

    /// Seed for a reproducible city
    #[arg(long)]
    seed: Option<u64>,

    /// Width of the printed plan in characters
    #[arg(long, default_value = "80")]
    map_width: usize,
}

/// Tick deltas must move time forward
fn parse_delta(value: &str) -> Result<f32, String> {
    let delta: f32 = value
        .parse()
        .map_err(|e| format!("'{}' is not a number: {}", value, e))?;
    if !delta.is_finite() || delta <= 0.0 {
        return Err(format!("delta must be a positive number of seconds, got {}", value));
    }
    Ok(delta)
}

impl Cli {
    fn city_config(&self) -> CityConfig {
        CityConfig::new(self.buildings as usize, self.size, self.roads, self.skyline)
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(cli.city_config(), cli.seed);
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        if let Err(e) = run_headless(&cli) {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run the generator in headless mode (no graphics)
fn run_headless(cli: &Cli) -> Result<()> {
    println!("Running city designer in headless mode...");
    println!("Ticks: {}, Delta: {}s", cli.ticks, cli.delta);

    // Calculate how many ticks equal 1 second of simulation time
    let ticks_per_second = ((1.0 / cli.delta).ceil() as u32).max(1);
    println!();

    let config = cli.city_config();
    let mut city =
        CityGenerator::with_city(&config, cli.seed).context("Failed to generate city")?;
    let active = *city.config();

    println!("Initial state:");
    city.print_summary();
    city.draw_plan(cli.map_width);

    let mut total_advanced = 0;
    let mut total_looped = 0;

    let mut tick = 0;
    while tick < cli.ticks {
        let ticks_to_run = ticks_per_second.min(cli.ticks - tick);

        for _ in 0..ticks_to_run {
            tick += 1;
            let summary = city.tick(cli.delta);
            total_advanced += summary.advanced;
            total_looped += summary.looped;
        }

        println!(
            "--- After tick {} ({:.1}s simulated time) ---",
            tick,
            tick as f32 * cli.delta
        );
        city.draw_plan(cli.map_width);
    }

    println!("=== Final State ===");
    city.print_summary();

    info!("=== SIMULATION COMPLETE ===");
    info!("Elapsed time: {:.2}s", city.time());
    info!("Road pattern: {}", active.road_pattern);
    info!("Total roads: {}", city.roads().len());
    info!(
        "Buildings placed: {}/{}",
        city.buildings().len(),
        active.building_count
    );
    info!("Total street lights: {}", city.street_lights().len());
    info!("Total vehicles: {}", city.vehicles().len());
    info!("Waypoints reached: {}", total_advanced);
    info!("Vehicle loops: {}", total_looped);

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(config: CityConfig, seed: Option<u64>) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting City Designer UI...");
    println!();
    println!("Controls:");
    println!("  ENTER       - Switch plan/explore camera");
    println!("  W/A/S/D     - Move camera");
    println!("  SPACE/SHIFT - Camera up/down");
    println!("  Q/E         - Rotate camera");
    println!("  R           - Regenerate city");
    println!("  1/2/3       - Road type (grid/radial/random)");
    println!("  X           - Remove the road nearest the camera");
    println!("  4/5/6       - Skyline (low/mid/skyscraper)");
    println!("  +/-         - Buildings +5/-5");
    println!("  B           - Add a building");
    println!("  TAB         - Select next building");
    println!("  Arrows      - Move selected building");
    println!("  [ / ]       - Shrink/grow selected building");
    println!("  H           - Cycle selected building height");
    println!("  DELETE      - Remove selected building");
    println!("  T/Y         - Time speed fast/normal");
    println!("  N           - Toggle day/night");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,city_designer=debug".to_string(),
                    level: bevy::log::Level::DEBUG,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "City Designer".into(),
                        resolution: (1280, 720).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(city_designer::ui::CityDesignerUIPlugin { config, seed })
        .run();
}
