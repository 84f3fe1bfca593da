use clap::{Parser, ValueEnum};

use u_lpt::scheduler::SelectionStrategy;
use u_lpt::workload::{Dataset, DEFAULT_PROCESSOR_COUNTS};

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Linear scan over processor loads
    Linear,
    /// Binary heap keyed by load and index
    Heap,
}

impl From<Strategy> for SelectionStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Linear => SelectionStrategy::LinearScan,
            Strategy::Heap => SelectionStrategy::MinHeap,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(author = AUTHOR)]
#[command(about = "LPT load balancing on identical parallel processors", long_about = None)]
pub struct Args {
    /// Comma separated job lengths, e.g. 3,1,6,4,5,2
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        conflicts_with_all = ["dataset", "random"]
    )]
    pub jobs: Option<Vec<i64>>,

    /// Built-in job set: basic, medium, repeated or large
    #[arg(short, long, conflicts_with = "random")]
    pub dataset: Option<Dataset>,

    /// Generate this many random jobs
    #[arg(short, long)]
    pub random: Option<usize>,

    /// Seed for random jobs
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Largest random job length
    #[arg(long, default_value_t = 100)]
    pub max_length: i64,

    /// Comma separated processor counts to schedule on
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_PROCESSOR_COUNTS)]
    pub processors: Vec<usize>,

    /// Use only as many processors as the longest job requires
    #[arg(short, long)]
    pub optimized: bool,

    /// Processor selection strategy
    #[arg(short, long, value_enum, default_value_t = Strategy::Linear)]
    pub strategy: Strategy,

    /// Print results as JSON lines
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Job lengths selected by the arguments; the basic set when none is given.
    pub fn job_lengths(&self) -> Vec<i64> {
        if let Some(jobs) = &self.jobs {
            return jobs.clone();
        }
        if let Some(count) = self.random {
            return u_lpt::workload::random_jobs(count, self.max_length, self.seed);
        }
        self.dataset.unwrap_or(Dataset::Basic).jobs()
    }
}
