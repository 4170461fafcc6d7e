use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cat_core::{
    parse_actions, Cat, Pet, PetKind, Session, SessionConfig, SessionReport, SimulationParams,
    SimulationRng,
};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Look after a virtual cat")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the actions listed in a session file and emit a JSON report.
    Run(RunArgs),
    /// Create a cat from flags and apply the given actions.
    Act(ActArgs),
    /// Summarize a saved report.
    Summary(SummaryArgs),
}

#[derive(Args)]
struct RunArgs {
    #[arg(long, default_value = "demos/session.toml")]
    config: PathBuf,
    /// Overrides the seed from the file and the environment.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Args)]
struct ActArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value_t = 1)]
    age: u32,
    #[arg(long, default_value = "Tabby")]
    color: String,
    #[arg(long, default_value = "house")]
    kind: PetKind,
    #[arg(long, default_value_t = 100)]
    energy: i32,
    #[arg(long, default_value_t = 0)]
    hunger: i32,
    #[arg(long)]
    seed: Option<u64>,
    /// Actions such as `feed 30`, `play 10`, `hunt`.
    #[arg(required = true)]
    actions: Vec<String>,
}

#[derive(Args)]
struct SummaryArgs {
    #[arg(long)]
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .try_init()
        .ok();
    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => handle_run(args),
        Commands::Act(args) => handle_act(args),
        Commands::Summary(args) => handle_summary(args),
    }
}

fn handle_run(args: RunArgs) -> Result<()> {
    let config = SessionConfig::from_path(&args.config)
        .with_context(|| format!("failed to load {}", args.config.display()))?;
    let actions = config.parsed_actions()?;
    let seed = args.seed.unwrap_or_else(|| config.params().seed);

    let report = play_out(config.cat.build(), seed, &actions);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = args.report {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn handle_act(args: ActArgs) -> Result<()> {
    let actions = parse_actions(&args.actions)?;
    let seed = args
        .seed
        .unwrap_or_else(|| SimulationParams::from_env().seed);
    let cat = Cat::new(args.name, args.age, args.color).with_vitals(args.energy, args.hunger);

    let report = play_out(Pet::new(args.kind, cat), seed, &actions);
    let state = &report.final_state;
    println!(
        "{} ({}): energy {}, hunger {}",
        state.name, state.kind, state.energy, state.hunger
    );
    Ok(())
}

fn handle_summary(args: SummaryArgs) -> Result<()> {
    let data = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let report: SessionReport = serde_json::from_str(&data)?;
    println!(
        "Report {} (seed {}) -> {} lines, {} errors, {} ends with energy {} and hunger {}",
        report.id,
        report.seed,
        report.transcript.len(),
        report.errors(),
        report.final_state.name,
        report.final_state.energy,
        report.final_state.hunger
    );
    Ok(())
}

fn play_out(pet: Pet, seed: u64, actions: &[cat_core::Action]) -> SessionReport {
    info!(target: "catsim", seed, kind = %pet.kind(), actions = actions.len(), "starting session");
    let mut session = Session::new(pet, SimulationRng::new(seed));
    session.run(actions);
    for line in session.transcript() {
        println!("{line}");
    }

    let (pet, transcript) = session.into_parts();
    let run_id = format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S"));
    SessionReport::new(run_id, seed, transcript, pet.snapshot())
}
