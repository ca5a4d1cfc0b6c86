use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::TestScenario;
use crate::logic::shopper::{SessionSummary, ShopperPlan, ShopperRunner};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: u64,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "millis")]
    pub average_duration: Duration,
    #[serde(with = "millis::vec")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    runner: ShopperRunner,
    verbose: bool,
}

/// Running totals for one scenario and seed.
#[derive(Default)]
struct IterationTally {
    passed: usize,
    failures: Vec<String>,
    timings: Vec<Duration>,
}

impl IterationTally {
    fn average(&self) -> Duration {
        match u32::try_from(self.timings.len()) {
            Ok(0) | Err(_) => Duration::ZERO,
            Ok(n) => self.timings.iter().sum::<Duration>() / n,
        }
    }
}

impl LogicTester {
    pub const fn new(runner: ShopperRunner, verbose: bool) -> Self {
        Self { runner, verbose }
    }

    /// Run `scenario` `iterations` times for every seed. Iteration `i` uses
    /// `seed + i`, so any failure can be replayed from the reported seed.
    pub fn run_scenario(
        &self,
        scenario: &TestScenario,
        seeds: &[u64],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|&seed| {
                if self.verbose {
                    println!(
                        "🧪 {} ({} actions, seed {seed})",
                        scenario.name.bright_white(),
                        scenario.plan.actions.len()
                    );
                }
                let tally = self.run_iterations(&scenario.plan, seed, iterations);
                ScenarioResult {
                    scenario_name: scenario.name.clone(),
                    seed,
                    passed: tally.failures.is_empty(),
                    iterations_run: iterations,
                    successful_iterations: tally.passed,
                    average_duration: tally.average(),
                    failures: tally.failures,
                    performance_data: tally.timings,
                }
            })
            .collect()
    }

    fn run_iterations(&self, plan: &ShopperPlan, seed: u64, iterations: usize) -> IterationTally {
        let mut tally = IterationTally::default();

        for (i, offset) in (0_u64..).take(iterations).enumerate() {
            let iteration_seed = seed.wrapping_add(offset);
            let started = Instant::now();
            let summary = self.runner.run_plan(plan, iteration_seed);

            match evaluate_expectations(plan, &summary) {
                None => {
                    tally.passed += 1;
                    let elapsed = started.elapsed();
                    tally.timings.push(elapsed);
                    if self.verbose {
                        println!(
                            "  ✅ {}/{iterations} ({elapsed:?}) lines:{} total:{}",
                            i + 1,
                            summary.lines.len(),
                            summary.total
                        );
                    }
                }
                Some(err) => {
                    if self.verbose {
                        println!("  ❌ {}/{iterations}: {}", i + 1, err.red());
                    }
                    tally.failures.push(format!(
                        "Iteration {} (seed {}, {} actions): {err} | lines {} items {} total {}",
                        i + 1,
                        summary.seed,
                        summary.actions_run,
                        summary.lines.len(),
                        summary.item_count,
                        summary.total
                    ));
                }
            }
        }

        tally
    }
}

fn evaluate_expectations(plan: &ShopperPlan, summary: &SessionSummary) -> Option<String> {
    plan.expectations
        .iter()
        .find_map(|expectation| expectation(summary).err().map(|err| format!("{err:#}")))
}

/// Durations travel as whole milliseconds.
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    fn to_millis(duration: &Duration) -> u64 {
        u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(to_millis(duration))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }

    pub mod vec {
        use serde::{Deserialize, Deserializer, Serializer};
        use std::time::Duration;

        pub fn serialize<S: Serializer>(
            durations: &[Duration],
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(durations.iter().map(super::to_millis))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<Duration>, D::Error> {
            let millis = Vec::<u64>::deserialize(deserializer)?;
            Ok(millis.into_iter().map(Duration::from_millis).collect())
        }
    }
}
