//! Giga Guy headless runner
//!
//! Loads a level, drops the actor into it and drives it with seeded random
//! input for a fixed number of ticks. Prints the final actor state as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use giga_guy::sim::{Actor, Grid, TickInput, tick};
use giga_guy::{PhysicsSettings, default_actor_size, default_cell_size, load_level, parse_level};

/// Built-in level: a 45° hill, a 22.5° ramp up onto a ledge with a one-tile
/// step, and an 11.25° ramp back down
const DEMO_LEVEL: &str = include_str!("../levels/demo.txt");

/// Ticks between random input changes
const INPUT_HOLD_TICKS: u32 = 30;

#[derive(Parser)]
#[command(name = "giga-guy")]
#[command(about = "Run the platformer collision core headless", long_about = None)]
struct Cli {
    /// Level text file (default: built-in demo level)
    level: Option<PathBuf>,
    /// Physics settings JSON
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Number of simulation ticks
    #[arg(long, default_value_t = 1200)]
    ticks: u32,
    /// Input RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(actor) => match serde_json::to_string_pretty(&actor) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to serialize actor: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<Actor, Box<dyn std::error::Error>> {
    let cell = default_cell_size();
    let grid = match &cli.level {
        Some(path) => load_level(path, cell)?,
        None => parse_level(DEMO_LEVEL, cell),
    };
    let settings = match &cli.settings {
        Some(path) => PhysicsSettings::load(path)?,
        None => PhysicsSettings::default(),
    };
    settings.validate(default_actor_size(), cell)?;

    let mut actor = Actor::new(spawn_point(&grid, 1), default_actor_size());
    let mut rng = Pcg32::seed_from_u64(cli.seed);
    let mut input = TickInput::default();

    log::info!(
        "Running {} ticks with seed {} from ({}, {})",
        cli.ticks,
        cli.seed,
        actor.pos.x,
        actor.pos.y
    );

    for t in 0..cli.ticks {
        if t % INPUT_HOLD_TICKS == 0 {
            input.move_dir = rng.random_range(-1..=1) as f32;
        }
        input.jump = rng.random_bool(0.05);

        let before = actor.contacts;
        tick(&mut actor, &grid, &input, &settings);

        if actor.contacts.on_ground && !before.on_ground {
            log::info!("[{t}] landed at ({:.1}, {:.1})", actor.pos.x, actor.pos.y);
        }
        if actor.contacts.on_wall && !before.on_wall {
            let side = if actor.contacts.on_right_wall { "right" } else { "left" };
            log::info!("[{t}] hit {side} wall at x={:.1}", actor.pos.x);
        }
        if actor.contacts.slope != before.slope
            && let Some(slope) = actor.contacts.slope
        {
            log::info!("[{t}] on {:?} slope ({}°)", slope, slope.angle_degrees());
        }
    }

    Ok(actor)
}

/// Just above the first solid tile in `col`, or resting on the grid's bottom edge
fn spawn_point(grid: &Grid, col: usize) -> Vec2 {
    let size = default_actor_size();
    let x = col as f32 * grid.cell_size().x;
    let top = (0..grid.rows() as i64)
        .find_map(|row| grid.cell(row, col as i64))
        .map(|tile| tile.hitbox.top())
        .unwrap_or(grid.bounds().bottom());
    Vec2::new(x, (top - size.y).max(0.0))
}
