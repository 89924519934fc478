use log::info;

use super::engine::{Engine, EngineConfig, EngineError, SearchStats};
use crate::board::{IsolationBoard, Move, Player};

/// A single move of a computer-vs-computer match, reported after it is played.
#[derive(Debug, Clone)]
pub struct MatchTurn<'a> {
    pub player: Player,
    pub mv: Move,
    pub board: &'a IsolationBoard,
    pub stats: SearchStats,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// `None` only when the match was stopped by the move limit.
    pub winner: Option<Player>,
    pub moves: Vec<Move>,
    pub final_position: IsolationBoard,
}

/// Plays two engines against each other from `starting_position` until one
/// side is stuck or `move_limit` moves have been played (zero means no
/// limit). `on_turn` is called after every move.
pub fn computer_vs_computer<F>(
    starting_position: IsolationBoard,
    player_one: EngineConfig,
    player_two: EngineConfig,
    move_limit: usize,
    mut on_turn: F,
) -> Result<MatchOutcome, EngineError>
where
    F: FnMut(&MatchTurn),
{
    let mut engines = [
        Engine::with_config(player_one, starting_position.clone()),
        Engine::with_config(player_two, starting_position),
    ];

    loop {
        let player = engines[0].board().active_player();

        if engines[0].is_game_over() {
            let winner = player.opponent();
            info!("{} is stuck, {} wins", player, winner);
            return Ok(finish(&engines[0], Some(winner)));
        }

        if move_limit > 0 && engines[0].move_history().len() >= move_limit {
            info!("move limit of {} reached", move_limit);
            return Ok(finish(&engines[0], None));
        }

        let mover = player.index();
        let mv = match engines[mover].get_best_move()? {
            Some(mv) => mv,
            None => return Ok(finish(&engines[0], Some(player.opponent()))),
        };
        for engine in engines.iter_mut() {
            engine.make_move(mv)?;
        }

        let stats = engines[mover].get_search_stats();
        info!(
            "{} plays {} (depth {}, {} positions)",
            player, mv, stats.completed_depth, stats.positions_searched
        );
        on_turn(&MatchTurn {
            player,
            mv,
            board: engines[0].board(),
            stats,
        });
    }
}

fn finish(engine: &Engine, winner: Option<Player>) -> MatchOutcome {
    MatchOutcome {
        winner,
        moves: engine.move_history().to_vec(),
        final_position: engine.board().clone(),
    }
}
