use gravsim::{CsvReport, Scenario, ScenarioConfig, TextReport};
#[cfg(feature = "viewer")]
use gravsim::Trajectory;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Fixed-timestep explicit Euler N-body gravity integrator")]
struct Args {
    /// Scenario YAML, as a path or a name under the crate's scenarios/ directory
    #[arg(short, long, default_value = "three_body.yaml")]
    file_name: String,

    /// Also write every observation to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Suppress the per-step text report
    #[arg(short, long)]
    quiet: bool,

    /// Replay the run in a window once it finishes
    #[cfg(feature = "viewer")]
    #[arg(long)]
    viewer: bool,
}

// resolve here to keep main clean
fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let path = scenario_path(&args.file_name);
    info!("loading scenario from {}", path.display());
    let scenario_cfg = ScenarioConfig::from_path(&path)?;

    let scenario = Scenario::build_scenario(scenario_cfg)?;
    let integrator = scenario.integrator()?;
    let mut system = scenario.system;

    let stdout = io::stdout();
    let text = (!args.quiet).then(|| TextReport::new(BufWriter::new(stdout.lock())));
    let csv = match &args.csv {
        Some(p) => Some(
            CsvReport::create(p).with_context(|| format!("failed to create {}", p.display()))?,
        ),
        None => None,
    };

    let mut reports = (text, csv);

    #[cfg(feature = "viewer")]
    let mut trajectory = args.viewer.then(Trajectory::new);
    #[cfg(feature = "viewer")]
    let summary = integrator.run(&mut system, &mut (&mut reports, &mut trajectory))?;
    #[cfg(not(feature = "viewer"))]
    let summary = integrator.run(&mut system, &mut reports)?;

    let (text, csv) = reports;
    if let Some(text) = text {
        text.into_inner().flush()?;
    }
    if let Some(mut csv) = csv {
        csv.flush()?;
    }

    println!(
        "Simulated {} bodies for {} steps ({:.3} s)",
        summary.bodies, summary.steps, summary.simulated_time
    );
    println!("Execution time: {} microseconds", summary.elapsed.as_micros());

    #[cfg(feature = "viewer")]
    {
        if let Some(trajectory) = trajectory {
            let masses = system.bodies.iter().map(|b| b.mass()).collect();
            gravsim::run_2d(&trajectory, masses);
        }
    }

    Ok(())
}
