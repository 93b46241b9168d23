/*!
 * MMU Simulator - Main Entry Point
 *
 * Replays a workload file against a fixed partition and prints the free and
 * allocated pools after every event.
 */

use argh::FromArgs;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use mmu_sim::simulation::report::{write_snapshot, write_step, write_step_json, write_step_summary};
use mmu_sim::{init_tracing, OutputFormat, Policy, Simulator, SimulatorConfig, Workload};

/// Simulate first-fit, best-fit and worst-fit placement over a fixed partition.
#[derive(Debug, FromArgs)]
struct Args {
    /// workload file: partition size, then one `<pid> <size>` event per line
    #[argh(positional)]
    input: PathBuf,

    /// placement policy: F/FIFO, B/BESTFIT or W/WORSTFIT (any case)
    #[argh(option, short = 'p')]
    policy: Option<Policy>,

    /// print one JSON document per event instead of the block listing
    #[argh(switch)]
    json: bool,

    /// print only the event headers and the final pools
    #[argh(switch, short = 'q')]
    quiet: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    let mut config = SimulatorConfig::from_env().wrap_err("invalid environment configuration")?;
    if let Some(policy) = args.policy {
        config = config.with_policy(policy);
    }
    if args.json {
        config = config.with_output(OutputFormat::Json);
    }
    config = config.with_quiet(args.quiet);

    init_tracing(config.trace_json);

    let workload = Workload::from_path(&args.input)?;
    info!(
        path = %args.input.display(),
        policy = %config.policy,
        partition_size = workload.partition_size,
        events = workload.events.len(),
        "starting simulation"
    );

    let mut simulator = Simulator::new(workload.partition_size, config.policy);
    let reports = simulator.run(&workload.events);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for report in &reports {
        let written = match (config.output, config.quiet) {
            (OutputFormat::Json, _) => write_step_json(&mut out, report),
            (OutputFormat::Text, false) => write_step(&mut out, report),
            (OutputFormat::Text, true) => write_step_summary(&mut out, report),
        };
        written.into_diagnostic().wrap_err("failed to write report")?;
    }

    if config.output == OutputFormat::Text && config.quiet {
        write_snapshot(&mut out, &simulator.snapshot()).into_diagnostic()?;
    }
    out.flush().into_diagnostic()?;

    Ok(())
}
