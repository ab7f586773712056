use gravbox::broadphase;
use gravbox::{advance, Scenario, ScenarioConfig};
use gravbox::{bench_broadphase, bench_integrators};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless frame driver standing in for the UI collaborator: it supplies
/// the per-frame elapsed time and consumes the candidate pairs that would
/// be handed to a narrowphase.
#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "two_body.yaml")]
    file_name: String,

    /// Number of frames to run
    #[arg(long, default_value_t = 600)]
    steps: u32,

    /// Elapsed seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f64,

    /// Run the built-in benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_broadphase();
        bench_integrators();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario {
        engine,
        mut system,
        forces,
        ..
    } = Scenario::build_scenario(scenario_cfg)?;

    log::info!(
        "running {} frames of {} bodies, dt = {}",
        args.steps,
        system.bodies.len(),
        args.dt
    );

    for step in 0..args.steps {
        advance(&mut system, &forces, &engine.integrator, args.dt);

        // Candidate pairs would be handed to the narrowphase here
        let candidates = broadphase::find_candidate_pairs(&mut system.bodies);
        log::debug!(
            "step {step}: t = {:.3}, {} candidate pairs",
            system.t,
            candidates.len()
        );
    }

    for (i, body) in system.bodies.iter().enumerate() {
        println!(
            "body {i}: x = ({:9.3}, {:9.3}), |v| = {:.3}",
            body.x.x,
            body.x.y,
            body.v.norm()
        );
    }

    Ok(())
}
