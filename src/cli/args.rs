//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, count_positions::CountPositionsArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "isolation",
    about = "An adversarial search engine for the knight-move game Isolation"
)]
pub enum Isolation {
    #[structopt(
        name = "best-move",
        about = "Search for the best move in the position given with `--position` (required). The position notation lists the rows separated by `/` using `.` (open), `#` (blocked), `1` and `2` (players), followed by the player to move and the move count, e.g. `1..../...../..#../...../....2 1 0`."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "watch",
        about = "Watch two engines play against each other. The starting position is given with `--position`, or is a random `--size` x `--size` board with `--blocked` obstacles (default: 7x7 with none)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "count-positions",
        about = "Count the positions visited by a fixed-depth search at every depth up to `--depth` (default: 4), and report the time it took. By default this runs plain minimax; select pruning with `--strategy alpha-beta`."
    )]
    CountPositions(CountPositionsArgs),
}

impl crate::cli::commands::Command for Isolation {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            BestMove(cmd),
            Watch(cmd),
            CountPositions(cmd),
        }
    }
}
