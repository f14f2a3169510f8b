use clap::{Parser, ValueEnum};
use fire_ca_core::{
    Cardinal, CellState, ForestExtensionLayout, Grid, GridPos, IgnitionSources, Landscape,
    SimulationConfig, SimulationState, WaterDropConfig, WindConfig,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Wind direction as given on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum WindDir {
    N,
    E,
    S,
    W,
    None,
}

impl WindDir {
    fn cardinal(self) -> Option<Cardinal> {
        match self {
            WindDir::N => Some(Cardinal::North),
            WindDir::E => Some(Cardinal::East),
            WindDir::S => Some(Cardinal::South),
            WindDir::W => Some(Cardinal::West),
            WindDir::None => None,
        }
    }
}

/// Forest fire cellular automaton with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "fire-ca-demo")]
#[command(about = "Wind-aware forest fire cellular automaton", long_about = None)]
struct Args {
    /// Number of generations to run
    #[arg(short, long, default_value_t = fire_ca_core::simulation::DEFAULT_GENERATIONS)]
    generations: u32,

    /// Grid side length including the border
    #[arg(long, default_value_t = fire_ca_core::grid::REFERENCE_GRID_SIZE)]
    grid_size: usize,

    /// Use an all-chaparral landscape instead of the reference map
    #[arg(long)]
    open: bool,

    /// Disable the incinerator ignition source (top-right corner)
    #[arg(long)]
    no_incinerator: bool,

    /// Enable the power plant ignition source (top-left corner)
    #[arg(long)]
    power_plant: bool,

    /// Wind direction
    #[arg(long, value_enum, default_value = "none")]
    wind_dir: WindDir,

    /// Wind speed in km/h (above 30 disables wind)
    #[arg(short, long, default_value_t = 0)]
    wind_speed: u32,

    /// Water drop target row
    #[arg(long, requires = "water_col")]
    water_row: Option<usize>,

    /// Water drop target column
    #[arg(long, requires = "water_row")]
    water_col: Option<usize>,

    /// Iteration at which the water drop happens
    #[arg(long, default_value_t = 0)]
    water_time: u32,

    /// Forest extension layout (1-5)
    #[arg(short, long)]
    forest_extension: Option<u8>,

    /// Random seed
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Report interval in generations
    #[arg(short, long, default_value_t = 10)]
    report_interval: u32,

    /// Print the final grid as text
    #[arg(short, long)]
    print_grid: bool,
}

fn build_config(args: &Args) -> Result<SimulationConfig, fire_ca_core::ConfigError> {
    let forest_extension = args
        .forest_extension
        .map(ForestExtensionLayout::from_index)
        .transpose()?;
    let water_drop = args
        .water_row
        .zip(args.water_col)
        .map(|(row, col)| WaterDropConfig {
            target: GridPos::new(row, col),
            iteration: args.water_time,
        });
    Ok(SimulationConfig {
        grid_size: args.grid_size,
        landscape: if args.open {
            Landscape::Open
        } else {
            Landscape::Reference
        },
        wind: WindConfig::from_raw_speed(args.wind_dir.cardinal(), args.wind_speed),
        water_drop,
        forest_extension,
        ignition: IgnitionSources {
            incinerator: !args.no_incinerator,
            power_plant: args.power_plant,
        },
        generations: args.generations,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let mut sim = match SimulationState::seeded(&config, args.seed) {
        Ok(sim) => sim,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    println!("=== Forest Fire Simulation ===\n");
    println!(
        "Grid: {0}x{0}, generations: {1}, seed: {2}",
        config.grid_size, config.generations, args.seed
    );
    match config.wind.direction {
        Some(dir) => println!("Wind: {:?}, speed band {}", dir, config.wind.speed),
        None => println!("Wind: calm"),
    }
    println!();

    // Timeline holds every generation including the initial grid
    let mut timeline: Vec<Grid> = Vec::with_capacity(config.generations as usize + 1);
    timeline.push(sim.grid().clone());

    let interval = args.report_interval.max(1);
    for _ in 0..config.generations {
        timeline.push(sim.step().clone());
        if let Some(stats) = sim.last_step() {
            if stats.water_drop.is_some() || (stats.iteration + 1) % interval == 0 {
                println!(
                    "gen {:>4} | fire {:>5} | burnt {:>5} | +{:>4} base +{:>4} embers{}",
                    stats.iteration + 1,
                    stats.counts.fire,
                    stats.counts.burnt,
                    stats.base_ignitions,
                    stats.wind_ignitions,
                    stats
                        .water_drop
                        .map(|s| format!(" | water {:?}", s))
                        .unwrap_or_default(),
                );
            }
        }
    }

    let last = timeline.last().unwrap_or_else(|| sim.grid());
    println!("\n=== Final State ===");
    for state in CellState::ALL {
        println!("{:>10}: {}", format!("{:?}", state), last.count(state));
    }
    match sim.town_ignited_at() {
        Some(iteration) => println!("Town caught fire on iteration {}", iteration),
        None => println!("Town never caught fire"),
    }
    info!("Recorded {} frames", timeline.len());

    if args.print_grid {
        println!("\n{}", last.render());
    }
}
