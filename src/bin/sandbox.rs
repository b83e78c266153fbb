//! Headless driver: runs a scenario for a number of frames and logs progress.
//!
//! Usage: `sandbox [scenario.json] [frames]`. Without a scenario the demo scene runs.

use aabb_sandbox::{
    config::MAX_FRAME_DT_MS,
    render::{self, Viewport},
    scenario::{Scenario, ScenarioError},
    utils, World,
};

use std::process::ExitCode;

const DEFAULT_FRAMES: usize = 600;
const LOG_EVERY: usize = 60;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

fn load(path: Option<&str>) -> Result<World, ScenarioError> {
    match path {
        Some(path) => Scenario::from_path(path)?.into_world(),
        None => Ok(utils::demo_scenario(0)),
    }
}

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let frames = match args.get(1).map(|s| s.parse::<usize>()) {
        Some(Ok(frames)) => frames,
        Some(Err(error)) => {
            tracing::error!(%error, "frame count must be a non-negative integer");
            return ExitCode::FAILURE;
        }
        None => DEFAULT_FRAMES,
    };

    let mut world = match load(args.first().map(String::as_str)) {
        Ok(world) => world,
        Err(error) => {
            tracing::error!(%error, "failed to load scenario");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(bodies = world.bodies().len(), frames, "scenario loaded");

    // Fixed frame time: a headless run has no wall clock to follow.
    let viewport = Viewport::new(800.0, 800.0);
    for frame in 1..=frames {
        world.tick(MAX_FRAME_DT_MS);

        if frame % LOG_EVERY == 0 {
            let drawn = render::frame(&world, viewport);
            let lowest = world
                .bodies()
                .iter()
                .map(|b| b.position.y + b.size.height)
                .fold(f64::MIN, f64::max);
            tracing::info!(
                frame,
                hue = world.hue,
                lowest_edge = lowest,
                rects = drawn.rects.len(),
                "tick"
            );
        }
    }

    for (index, body) in world.bodies().iter().enumerate() {
        tracing::debug!(
            index,
            x = body.position.x,
            y = body.position.y,
            vx = body.velocity.x(),
            vy = body.velocity.y(),
            "final state"
        );
    }

    ExitCode::SUCCESS
}
