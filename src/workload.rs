//! Job sets for demonstrations and benchmarks.
//!
//! Four fixed job sets of increasing size (basic, medium, with repeated
//! lengths, large with repetitions and one dominant job) plus seeded
//! random job sets.

use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const BASIC: [i64; 6] = [3, 1, 6, 4, 5, 2];

const MEDIUM: [i64; 18] = [
    507, 367, 300, 91, 82, 77, 50, 29, 26, 14, 13, 12, 12, 11, 10, 8, 6, 3,
];

const REPEATED: [i64; 34] = [
    300, 15, 300, 17, 27, 300, 149, 12, 300, 5, 79, 19, 4, 8, 5, 18, 5, 5, 10, 7, 9, 5, 11, 5, 301,
    5, 7, 300, 127, 300, 9, 7, 9, 8,
];

const LARGE: [i64; 203] = [
    13, 12, 12, 6, 18, 11, 1, 301, 51, 3, 8, 6, 169, 13, 8, 2, 2, 8, 300, 29, 7, 11, 12, 26, 19, 1,
    10, 39, 7, 6, 19, 4, 50, 11, 300, 36, 106, 4, 13, 3, 7, 8, 300, 7, 8, 36, 29, 16, 19, 35, 300,
    68, 11, 5, 302, 36, 9, 4, 9, 38, 6, 2, 18, 21, 7, 41, 8, 12, 9, 7, 35, 7, 1, 300, 10, 110, 13,
    302, 14, 80, 301, 302, 7, 19, 7, 12, 303, 12, 33, 53, 6, 21, 300, 302, 75, 1, 7, 14, 62, 2, 13,
    302, 76, 102, 2, 8, 12, 1, 37, 128, 7, 5, 8, 6, 32, 300, 13, 7, 6, 11, 300, 7, 128, 1, 7, 303,
    1, 12, 302, 12, 63, 22, 12, 420, 32, 36, 1, 12, 32, 1, 62, 7, 7, 301, 19, 2, 36, 11, 11, 111,
    12, 10, 1, 300, 131, 18, 177, 11, 3601, 7, 11, 31, 54, 7, 26, 13, 300, 71, 300, 301, 61, 1, 13,
    10, 12, 8, 20, 3, 28, 2, 1, 8, 301, 12, 300, 12, 1, 5, 6, 18, 102, 300, 13, 1, 13, 17, 8, 13,
    10, 300, 7, 12, 52,
];

/// Processor counts the built-in job sets are usually run against.
pub const DEFAULT_PROCESSOR_COUNTS: [usize; 4] = [2, 4, 6, 8];

/// A built-in job set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    /// Six distinct lengths.
    Basic,
    /// Eighteen distinct lengths.
    Medium,
    /// Thirty-four lengths with many repetitions.
    Repeated,
    /// Two hundred three lengths with repetitions and one dominant job.
    Large,
}

impl Dataset {
    /// All built-in job sets, smallest first.
    pub const ALL: [Dataset; 4] = [
        Dataset::Basic,
        Dataset::Medium,
        Dataset::Repeated,
        Dataset::Large,
    ];

    /// Job lengths of this set, in their original order.
    pub fn jobs(self) -> Vec<i64> {
        match self {
            Dataset::Basic => BASIC.to_vec(),
            Dataset::Medium => MEDIUM.to_vec(),
            Dataset::Repeated => REPEATED.to_vec(),
            Dataset::Large => LARGE.to_vec(),
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Dataset::Basic => "basic",
            Dataset::Medium => "medium",
            Dataset::Repeated => "repeated",
            Dataset::Large => "large",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dataset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dataset::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!("unknown dataset '{s}', expected one of: basic, medium, repeated, large")
            })
    }
}

/// Generates `count` job lengths uniformly in `1..=max_length`.
///
/// The same seed always yields the same jobs.
pub fn random_jobs(count: usize, max_length: i64, seed: u64) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let upper = max_length.max(1);
    (0..count).map(|_| rng.random_range(1..=upper)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{schedule, schedule_optimized};

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(Dataset::Basic.jobs().len(), 6);
        assert_eq!(Dataset::Medium.jobs().len(), 18);
        assert_eq!(Dataset::Repeated.jobs().len(), 34);
        assert_eq!(Dataset::Large.jobs().len(), 203);
    }

    #[test]
    fn test_dataset_from_str() {
        assert_eq!("medium".parse::<Dataset>().unwrap(), Dataset::Medium);
        assert_eq!("LARGE".parse::<Dataset>().unwrap(), Dataset::Large);
        assert!("huge".parse::<Dataset>().is_err());
        for d in Dataset::ALL {
            assert_eq!(d.to_string().parse::<Dataset>().unwrap(), d);
        }
    }

    #[test]
    fn test_medium_loads() {
        let jobs = Dataset::Medium.jobs();
        assert_eq!(schedule(&jobs, 2).unwrap().loads(), &[810, 808]);
        assert_eq!(schedule(&jobs, 4).unwrap().loads(), &[507, 370, 370, 371]);
        // ceil(1618 / 507) = 4 processors are enough for 8.
        assert_eq!(
            schedule_optimized(&jobs, 8).unwrap().loads(),
            &[507, 370, 370, 371, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_repeated_loads() {
        let jobs = Dataset::Repeated.jobs();
        assert_eq!(schedule(&jobs, 4).unwrap().loads(), &[673, 672, 672, 671]);
        // ideal 9 > 8, so the optimized run uses every processor.
        assert_eq!(
            schedule_optimized(&jobs, 8).unwrap(),
            schedule(&jobs, 8).unwrap()
        );
    }

    #[test]
    fn test_large_loads() {
        let jobs = Dataset::Large.jobs();
        let loads = schedule(&jobs, 8).unwrap().loads().to_vec();
        assert_eq!(loads, vec![3601, 1792, 1792, 1792, 1792, 1792, 1792, 1792]);
    }

    #[test]
    fn test_random_jobs_seeded() {
        let a = random_jobs(50, 20, 9);
        assert_eq!(a, random_jobs(50, 20, 9));
        assert_eq!(a.len(), 50);
        assert!(a.iter().all(|&l| (1..=20).contains(&l)));
    }

    #[test]
    fn test_random_jobs_degenerate_max() {
        assert!(random_jobs(5, 0, 1).iter().all(|&l| l == 1));
        assert!(random_jobs(0, 10, 1).is_empty());
    }
}
