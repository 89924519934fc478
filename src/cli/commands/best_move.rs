//! Best move command - search a single position.

use isolation::board::IsolationBoard;
use isolation::game::engine::Engine;
use structopt::StructOpt;

use super::engine_args::EngineArgs;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long = "position")]
    pub starting_position: IsolationBoard,
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(long, help = "Also print search statistics")]
    pub stats: bool,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut engine = Engine::with_config(self.engine.config(), self.starting_position);

        match engine.get_best_move() {
            Ok(Some(best_move)) => {
                println!("{}", best_move);
                if self.stats {
                    let stats = engine.get_search_stats();
                    println!(
                        "positions: {}, cutoffs: {}, depth: {}, score: {:?}, duration: {:?}",
                        stats.positions_searched,
                        stats.cutoffs,
                        stats.completed_depth,
                        stats.last_score,
                        stats.last_search_duration
                    );
                }
            }
            Ok(None) => println!("none"),
            Err(err) => {
                eprintln!("Failed to calculate best move: {}", err);
                std::process::exit(1);
            }
        }
    }
}
