mod cli;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::error;
use tracing_subscriber::EnvFilter;

use cli::Args;
use u_lpt::models::ProcessorSchedule;
use u_lpt::scheduler::{measure, LptScheduler, OptimizedLptScheduler, ScheduleKpi};

const OUTER_RULE: usize = 50;

#[derive(Serialize)]
struct Report<'a> {
    processors: usize,
    optimized: bool,
    assignment: Vec<Vec<i64>>,
    loads: &'a [i64],
    kpi: ScheduleKpi,
    elapsed_ms: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Scheduling failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let jobs = args.job_lengths();
    let strategy = args.strategy.into();
    let lpt = LptScheduler::new().with_strategy(strategy);
    let optimized = OptimizedLptScheduler::new().with_strategy(strategy);
    let label = if args.optimized { "optimized_lpt" } else { "lpt" };

    if !args.json {
        println!("\n{}\n", "*".repeat(OUTER_RULE));
        println!("Jobs: {jobs:?}");
    }

    for &processors in &args.processors {
        let measured = measure(label, || {
            if args.optimized {
                optimized.schedule(&jobs, processors)
            } else {
                lpt.schedule(&jobs, processors)
            }
        });
        let elapsed_ms = measured.elapsed_ms();
        let schedule = measured.value?;

        if args.json {
            print_json(&schedule, processors, args.optimized, elapsed_ms)?;
        } else {
            print_text(&schedule, processors, elapsed_ms);
        }
    }

    if !args.json {
        println!("\n{}\n", "*".repeat(OUTER_RULE));
    }
    Ok(())
}

fn print_text(schedule: &ProcessorSchedule, processors: usize, elapsed_ms: f64) {
    let rule = "-".repeat(OUTER_RULE);
    println!("{rule}");
    println!("Processor: {processors}");
    println!("Scheduled Jobs: {:?}", schedule.assignment());
    println!("Loads: {:?}", schedule.loads());
    println!(
        "Makespan: {} ({} active, {} idle) in {elapsed_ms:.3} ms",
        schedule.makespan(),
        schedule.active_processor_count(),
        schedule.idle_processor_count()
    );
    println!("{rule}");
}

fn print_json(
    schedule: &ProcessorSchedule,
    processors: usize,
    optimized: bool,
    elapsed_ms: f64,
) -> serde_json::Result<()> {
    let report = Report {
        processors,
        optimized,
        assignment: schedule.assignment(),
        loads: schedule.loads(),
        kpi: ScheduleKpi::calculate(schedule),
        elapsed_ms,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
