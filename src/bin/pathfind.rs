use std::{env, fs, time::Instant};

use color_eyre::Result;
use log::{debug, info, warn};
use snake_pathfinder::{
    find_path,
    grid::{
        models::{Outcome, Scenario},
        types::Coord,
        utils::MoveString,
    },
    pathfinder::{bench::walled_off_snake, safety::has_escape_walk},
    Board,
    Snake,
};

fn load(path: Option<String>) -> Result<(Snake, Coord)> {
    match path {
        Some(path) => {
            info!("loading scenario from {path}");
            let scenario: Scenario =
                serde_json::from_str(&fs::read_to_string(path)?)?;
            let board = Board::new(scenario.width, scenario.height)?;
            Ok((Snake::new(board, scenario.body)?, scenario.target))
        },
        None => {
            info!("no scenario given, using the walled off 10x10 sample");
            Ok((walled_off_snake()?, Coord { x: 0, y: 0 }))
        },
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let args: Vec<String> = env::args().skip(1).collect();
    let check_escape = args.iter().any(|arg| arg == "--escape");
    let scenario = args.into_iter().find(|arg| !arg.starts_with("--"));

    let (snake, target) = load(scenario)?;
    debug!("searching from:\n{snake}");

    info!("searching for {target}...");
    let start = Instant::now();
    let report = find_path(&snake, target)?;
    let elapsed = start.elapsed();

    info!("search completed in {} ms", elapsed.as_millis());
    info!("opened: {}, explored: {}", report.opened, report.explored);

    match &report.path {
        Some(moves) => {
            println!("{}", MoveString(moves));
            if check_escape && !has_escape_walk(&snake, moves)? {
                warn!("the snake can't get away from {target} after arriving");
            }
        },
        None => warn!("no path to {target}"),
    }

    let outcome = Outcome {
        found:    report.is_found(),
        moves:    report.path.unwrap_or_default(),
        opened:   report.opened,
        explored: report.explored,
        millis:   elapsed.as_millis(),
    };
    println!("{}", serde_json::to_string(&outcome)?);

    Ok(())
}
