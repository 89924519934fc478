//! Watch command - watch two engines play against each other.

use std::time::Duration;

use isolation::board::IsolationBoard;
use isolation::evaluate::EvaluatorKind;
use isolation::game::computer_vs_computer::computer_vs_computer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use structopt::StructOpt;

use super::engine_args::EngineArgs;
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long = "position")]
    pub starting_position: Option<IsolationBoard>,
    #[structopt(long, default_value = "7", help = "Width and height of a random board")]
    pub size: u8,
    #[structopt(long, default_value = "0", help = "Obstacles on a random board")]
    pub blocked: usize,
    #[structopt(flatten)]
    pub engine: EngineArgs,
    #[structopt(long, help = "Evaluator for player one (default: --evaluator)")]
    pub p1: Option<EvaluatorKind>,
    #[structopt(long, help = "Evaluator for player two (default: --evaluator)")]
    pub p2: Option<EvaluatorKind>,
    #[structopt(long, default_value = "0", help = "Stop after this many moves (0: no limit)")]
    pub move_limit: usize,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let starting_position = match self.starting_position {
            Some(position) => Ok(position),
            None => {
                let mut rng = match self.engine.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_entropy(),
                };
                IsolationBoard::random(self.size, self.size, self.blocked, &mut rng)
            }
        };
        let starting_position = match starting_position {
            Ok(position) => position,
            Err(err) => {
                eprintln!("Failed to set up the board: {}", err);
                std::process::exit(1);
            }
        };

        let mut player_one = self.engine.config();
        let mut player_two = player_one.clone();
        player_one.evaluator = self.p1.unwrap_or(self.engine.evaluator);
        player_two.evaluator = self.p2.unwrap_or(self.engine.evaluator);

        println!("{}\n", starting_position);
        let delay = Duration::from_millis(self.delay_ms);
        let result = computer_vs_computer(
            starting_position,
            player_one,
            player_two,
            self.move_limit,
            |turn| {
                println!(
                    "{} plays {} (depth {}, {} positions)",
                    turn.player, turn.mv, turn.stats.completed_depth, turn.stats.positions_searched
                );
                println!("{}\n", turn.board);
                std::thread::sleep(delay);
            },
        );

        match result {
            Ok(outcome) => match outcome.winner {
                Some(winner) => println!("{} wins after {} moves", winner, outcome.moves.len()),
                None => println!("stopped after {} moves", outcome.moves.len()),
            },
            Err(err) => {
                eprintln!("error: {}", err);
                std::process::exit(1);
            }
        }
    }
}
