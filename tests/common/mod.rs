// Shared helpers for the integration tests. Everything runs headless on the
// simulated clock, so no test sleeps.

#![allow(dead_code)]

use simon_pads::{MemoryScorekeeper, RecordingPresenter, SimonGame, Symbol};

pub type TestGame = SimonGame<RecordingPresenter, MemoryScorekeeper>;

pub fn new_game(seed: u64) -> TestGame {
    SimonGame::with_seed(RecordingPresenter::new(), MemoryScorekeeper::new(), seed)
}

pub fn new_game_with_best(seed: u64, best: u64) -> TestGame {
    SimonGame::with_seed(RecordingPresenter::new(), MemoryScorekeeper::with_best(best), seed)
}

/// A pad other than `symbol`
pub fn wrong_for(symbol: Symbol) -> Symbol {
    Symbol::ALL[(symbol.index() + 1) % Symbol::ALL.len()]
}

/// Let the presentation finish, then enter the whole sequence
pub fn play_round(game: &mut TestGame) {
    game.run_until_idle();
    let sequence = game.state().sequence.clone();
    for symbol in sequence {
        game.submit_input(symbol);
    }
}

/// Let the presentation finish, then press a wrong pad first
pub fn lose_round(game: &mut TestGame) {
    game.run_until_idle();
    let wrong = wrong_for(game.state().sequence[0]);
    game.submit_input(wrong);
}
