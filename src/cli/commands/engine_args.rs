//! Search flags shared by the commands that run an engine.

use std::time::Duration;

use isolation::evaluate::EvaluatorKind;
use isolation::game::engine::{EngineConfig, Strategy};
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct EngineArgs {
    #[structopt(
        long,
        default_value = "iterative-deepening",
        help = "One of: minimax, alpha-beta, iterative-deepening"
    )]
    pub strategy: Strategy,
    #[structopt(
        short,
        long,
        default_value = "partition",
        help = "One of: mobility, partition, tempo"
    )]
    pub evaluator: EvaluatorKind,
    #[structopt(
        short,
        long,
        default_value = "3",
        help = "Search depth for the fixed-depth strategies"
    )]
    pub depth: u8,
    #[structopt(
        long = "time-limit-ms",
        default_value = "150",
        help = "Time per move in milliseconds for iterative deepening"
    )]
    pub time_limit_ms: u64,
    #[structopt(
        long = "threshold-ms",
        default_value = "10",
        help = "Milliseconds kept in reserve before the time limit"
    )]
    pub threshold_ms: u64,
    #[structopt(long, help = "Skip root moves that mirror an earlier one")]
    pub dedupe_symmetric_root: bool,
    #[structopt(long, help = "Seed for the mobility evaluator's perturbation")]
    pub seed: Option<u64>,
}

impl EngineArgs {
    pub fn config(&self) -> EngineConfig {
        EngineConfig {
            strategy: self.strategy,
            evaluator: self.evaluator,
            time_limit: Duration::from_millis(self.time_limit_ms),
            timer_threshold: Duration::from_millis(self.threshold_ms),
            search_depth: self.depth,
            dedupe_symmetric_root: self.dedupe_symmetric_root,
            seed: self.seed,
        }
    }
}
