//! lemin: plan and simulate the evacuation of an ant colony.
//!
//! Reads a colony file, picks near-disjoint routes from `##start` to
//! `##end`, and prints the moves of every turn as `L<ant>-<room>` tokens.
//! Diagnostics go to stderr through `log`; set `--log-level debug` to see the
//! chosen routes, the allocation, and the total number of turns.

mod logging;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;

use lm_colony::load_colony_file;
use lm_core::PlanConfig;
use lm_output::{CsvWriter, JsonDumpWriter, MoveLogObserver, MoveWriter, TextWriter};
use lm_sim::{Simulator, plan};

#[derive(Parser, Debug)]
#[command(name = "lemin", version, about = "Ant colony evacuation planner")]
struct Cli {
    /// Colony file: ant count, rooms, `##start`/`##end` markers and tunnels
    file: PathBuf,

    /// Write the colony and every move to this JSON file for a visualiser
    #[arg(short = 'v', long, value_name = "JSON")]
    visualize: Option<PathBuf>,

    /// Write `moves.csv` into this directory
    #[arg(long, value_name = "DIR")]
    csv: Option<PathBuf>,

    /// Planning configuration as JSON; missing fields take their defaults
    #[arg(long, value_name = "JSON")]
    config: Option<PathBuf>,

    /// Interior rooms a new route may share with the routes already chosen
    #[arg(long, value_name = "N")]
    overlap_tolerance: Option<usize>,

    /// Upper bound on the number of selected routes
    #[arg(long, value_name = "N")]
    max_routes: Option<usize>,

    /// Log filter (error, warn, info, debug, trace); `RUST_LOG` takes precedence
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Do not print the moves to stdout
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(cli: &Cli) -> Result<PlanConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => PlanConfig::default(),
    };
    if let Some(t) = cli.overlap_tolerance {
        config.overlap_tolerance = t;
    }
    if cli.max_routes.is_some() {
        config.max_routes = cli.max_routes;
    }
    config.validate()?;
    Ok(config)
}

fn check_output_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("output directory {} does not exist", dir.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let t0 = Instant::now();

    // 1. Load and validate the colony.
    let file = load_colony_file(&cli.file)
        .with_context(|| format!("loading {}", cli.file.display()))?;
    let colony = &file.colony;
    log::debug!("Number of ants: {}", file.ants);
    log::info!(
        "colony: {} rooms, {} tunnels",
        colony.room_count(),
        colony.tunnel_count()
    );

    // 2. Plan.
    let config = load_config(&cli)?;
    let evacuation = plan(colony, file.ants, &config)?;

    // 3. Writers.
    let mut writers: Vec<Box<dyn MoveWriter + '_>> = Vec::new();
    if !cli.quiet {
        writers.push(Box::new(TextWriter::new(io::stdout().lock(), colony)));
    }
    if let Some(dir) = &cli.csv {
        check_output_dir(dir)?;
        writers.push(Box::new(CsvWriter::new(dir, colony)?));
    }
    if let Some(path) = &cli.visualize {
        writers.push(Box::new(JsonDumpWriter::new(path, colony)?));
    }

    // 4. Simulate.
    let mut obs = MoveLogObserver::new(writers);
    let schedule = Simulator::from_plan(&evacuation)?.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing moves");
    }

    log::info!("Total number of turns: {}", schedule.turn_count);
    log::info!("Execution time: {:.3} ms", t0.elapsed().as_secs_f64() * 1e3);
    Ok(())
}
