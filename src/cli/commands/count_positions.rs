//! Count positions command - count the positions a search visits per depth.

use isolation::board::{IsolationBoard, Move};
use isolation::evaluate::EvaluatorKind;
use isolation::game::position_counter::{run_count_positions, CountPositionsStrategy};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short, long, default_value = "minimax")]
    pub strategy: CountPositionsStrategy,
    #[structopt(short, long, default_value = "mobility")]
    pub evaluator: EvaluatorKind,
    #[structopt(
        long = "position",
        help = "Defaults to an open 7x7 board with the players in opposite corners"
    )]
    pub starting_position: Option<IsolationBoard>,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        let position = match self.starting_position {
            Some(position) => position,
            None => match IsolationBoard::new(7, 7, Move::new(0, 0), Move::new(6, 6)) {
                Ok(position) => position,
                Err(err) => {
                    eprintln!("Failed to set up the board: {}", err);
                    std::process::exit(1);
                }
            },
        };
        let evaluator = self.evaluator.build::<IsolationBoard>(None);

        if let Err(err) = run_count_positions(&position, self.depth, self.strategy, &evaluator) {
            eprintln!("Search failed: {}", err);
            std::process::exit(1);
        }
    }
}
