use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use blastzone_app::cli::{self, Args};
use blastzone_app::game_loop;
use blastzone_app::AppError;
use blastzone_core::config::GameRules;
use blastzone_sim::engine::{SimConfig, SimulationEngine};

fn main() {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    if raw.iter().any(|a| matches!(a.as_str(), "help" | "--help" | "-h")) {
        cli::print_usage();
        return;
    }

    let args = match Args::parse(&raw) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            cli::print_usage();
            process::exit(2);
        }
    };

    init_tracing();

    if let Err(err) = run(&args) {
        error!(error = %err, "run_failed");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let rules = match &args.rules {
        Some(path) => GameRules::load(path)?,
        None => GameRules::default(),
    };
    let config = SimConfig {
        seed: args.seed,
        rules,
    };
    let mut engine = SimulationEngine::load(&args.level, config)?;
    info!(
        level = %args.level.display(),
        seed = args.seed,
        script_len = args.script.len(),
        realtime = args.realtime,
        "session_started"
    );

    let snapshot = game_loop::run(&mut engine, &args.script, &args.loop_options());
    info!(
        outcome = ?snapshot.outcome,
        ticks = snapshot.time.tick,
        elapsed_secs = snapshot.time.elapsed_secs,
        hostiles_remaining = snapshot.hostiles_remaining,
        "session_finished"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
