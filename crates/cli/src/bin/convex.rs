use std::{path::PathBuf, process::ExitCode};

use anyhow::Error;
use clap::{Parser, Subcommand};
use convex_cli::Scene;
use convex_collision::{Cuboid, Settings, Sphere, intersects_with};
use convex_math::Point;

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Give up on a shape pair after this many GJK iterations.
    #[arg(long, default_value_t = Settings::default().max_iterations)]
    max_iterations: u32,
}

#[derive(Subcommand)]
enum Command {
    /// Test every shape pair in a JSON scene file.
    Check { path: PathBuf },
    /// Test a sphere of radius 5 at (10, 10, 0) against a 5x5x5 cuboid at the origin.
    Demo,
}

fn main() -> Result<ExitCode, Error> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings {
        max_iterations: cli.max_iterations,
    };

    match cli.command {
        Command::Check { path } => {
            let scene = Scene::load(&path)?;

            let mut failed = false;
            for (name, res) in scene.check(&settings) {
                match res {
                    Ok(true) => println!("{name}: intersect"),
                    Ok(false) => println!("{name}: separate"),
                    Err(err) => {
                        println!("{name}: error: {:#}", Error::from(err));
                        failed = true;
                    }
                }
            }

            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Command::Demo => {
            let sphere = Sphere::new(Point::new(10.0, 10.0, 0.0), 5.0)?;
            let cuboid = Cuboid::new(Point::origin(), 5.0, 5.0, 5.0)?;

            if intersects_with(&settings, &sphere, &cuboid)? {
                println!("Shapes intersect.");
            } else {
                println!("Shapes do NOT intersect.");
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
