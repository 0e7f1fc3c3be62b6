use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use railroad::{find_shortest_rail_paths, minimal_rail_budgets, solve_railroad_puzzle, Preset, PresetError, RailPieceCountMap};

/// Solve a hexagonal railroad puzzle preset.
#[derive(Parser, Debug)]
#[command(name = "solver", about = "Exact solver for hexagonal railroad puzzles", long_about = None)]
struct Args {
    /// Preset JSON file, such as one of those under `solver/presets`
    preset: PathBuf,
    /// Straight pieces available, instead of the preset's default
    #[arg(long)]
    straight: Option<usize>,
    /// Slightly curved pieces available, instead of the preset's default
    #[arg(long)]
    slightly_curved: Option<usize>,
    /// Very curved pieces available, instead of the preset's default
    #[arg(long)]
    very_curved: Option<usize>,
    /// Print every route tied for the fewest pieces rather than the first route found
    #[arg(long, conflicts_with = "budgets")]
    shortest: bool,
    /// Print the smallest inventories that still solve the puzzle
    #[arg(long)]
    budgets: bool,
}

fn main() -> Result<ExitCode, PresetError> {
    env_logger::init();
    let args = Args::parse();

    let preset = Preset::from_path(&args.preset)?;
    let defaults = preset.default_available_rails;
    let rails = RailPieceCountMap::new(
        args.straight.unwrap_or(defaults.straight),
        args.slightly_curved.unwrap_or(defaults.slightly_curved),
        args.very_curved.unwrap_or(defaults.very_curved),
    );
    let config = preset.config_with(rails)?;
    info!("loaded preset {:?} from {}", preset.name, args.preset.display());

    println!("{}\n\n{}", preset.name, config.grid);

    if args.budgets {
        let budgets = minimal_rail_budgets(&config);
        if budgets.is_empty() {
            eprintln!("no route with {}", rails);
            return Ok(ExitCode::FAILURE);
        }

        println!("minimal budgets ({} piece(s)):", budgets[0].total());
        for budget in budgets {
            println!("  {}", budget);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if args.shortest {
        let routes = find_shortest_rail_paths(&config);
        if routes.is_empty() {
            eprintln!("no route with {}", rails);
            return Ok(ExitCode::FAILURE);
        }

        for (index, route) in routes.iter().enumerate() {
            println!("route {} of {}, {} piece(s): {}", index + 1, routes.len(), route.len(), RailPieceCountMap::tally(route));
            println!("{}", config.grid.with_route(route));
        }
        return Ok(ExitCode::SUCCESS);
    }

    match solve_railroad_puzzle(&config) {
        Some(route) => {
            println!("route of {} piece(s): {}", route.len(), RailPieceCountMap::tally(&route));
            println!("{}", config.grid.with_route(&route));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("no route with {}", rails);
            Ok(ExitCode::FAILURE)
        }
    }
}
