use clap::{Parser, Subcommand};
use graphplan::planning_graph::{PlanningGraph, RelaxedPlanningGraph};
use graphplan::report::{self, ReportFormat};
use graphplan::{ModelError, PlannerConfig, Task, Verbosity};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

#[derive(Parser)]
#[command(version)]
/// Build the planning graph of a PDDL task and report its mutexes.
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(help = "The PDDL domain file")]
    domain: PathBuf,
    #[arg(help = "The PDDL problem instance file")]
    problem: PathBuf,
    #[arg(
        help = "A TOML planner config with pruning rules and flattened subtypes",
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "The directory the reports are written to",
        short = 'o',
        long = "output-dir",
        id = "OUTPUT_DIR",
        default_value = "."
    )]
    output_dir: PathBuf,
    #[arg(
        value_enum,
        help = "The report format",
        short = 'f',
        long = "format",
        id = "FORMAT",
        default_value_t = ReportFormat::Text
    )]
    format: ReportFormat,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand the planning graph until it stops growing and compute the
    /// inconsistent-effects, interference and inconsistent-support mutexes of
    /// every level.
    Graphplan,
    /// Expand the delete-relaxed graph and compute the additive cost of every
    /// reachable fact and of the goal.
    Relaxation,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), ModelError> {
    let start = Instant::now();
    let config = match &cli.config {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig::default(),
    };
    let task = Task::from_path(&cli.domain, &cli.problem, &config)?;
    info!(
        ground_actions = task.actions().len(),
        elapsed = %humantime::format_duration(start.elapsed()),
        "task ready"
    );

    let written = match cli.command {
        Commands::Graphplan => {
            let graph = PlanningGraph::build(task.actions(), task.problem().init());
            match graph.goal_level(task.problem().positive_goals()) {
                Some(level) => info!(level, "all positive goals reachable"),
                None => info!("some positive goals are unreachable"),
            }
            report::write_graphplan(&cli.output_dir, cli.format, &task, &graph)?
        }
        Commands::Relaxation => {
            let relaxed = RelaxedPlanningGraph::build(task.actions(), task.problem().init());
            match relaxed.goal_value(task.problem().positive_goals()) {
                Some(value) => info!(value, "goal hadd value"),
                None => info!("some positive goals are unreachable, no goal value"),
            }
            report::write_relaxation(&cli.output_dir, cli.format, &task, &relaxed)?
        }
    };

    info!(
        reports = written.len(),
        elapsed = %humantime::format_duration(start.elapsed()),
        "done"
    );
    Ok(())
}
