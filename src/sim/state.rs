//! Game state and phase
//!
//! Everything the round logic reads or writes lives in `GameState`. The
//! playing/showing flags are derived from the phase so they can never
//! disagree with it.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Waiting for the first start
    #[default]
    Idle,
    /// Replaying the sequence to the player, input ignored
    ShowingSequence,
    /// Player's turn
    AwaitingInput,
    /// Round cleared, pausing before the sequence grows
    RoundComplete,
    /// Wrong pad pressed; waits for start or reset
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Idle => "Idle",
            GamePhase::ShowingSequence => "ShowingSequence",
            GamePhase::AwaitingInput => "AwaitingInput",
            GamePhase::RoundComplete => "RoundComplete",
            GamePhase::GameOver => "GameOver",
        }
    }

    /// True from start until game over
    pub fn is_playing(&self) -> bool {
        matches!(
            self,
            GamePhase::ShowingSequence | GamePhase::AwaitingInput | GamePhase::RoundComplete
        )
    }
}

/// Complete round state (serializable snapshot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Pads to reproduce, one appended per round
    pub sequence: Vec<Symbol>,
    /// Pads entered so far this round
    pub player_sequence: Vec<Symbol>,
    /// Pads correctly reproduced this round
    pub current_step: usize,
    /// Current level (1-based, equals `sequence.len()` once a round begins)
    pub level: u32,
    pub score: u64,
    /// Best score seen, never decreases
    pub best_score: u64,
    pub phase: GamePhase,
    /// Bumped on every start/reset; scheduled state changes from older epochs are dropped
    pub epoch: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GameState {
    /// Fresh idle state with a previously stored best score
    pub fn new(best_score: u64) -> Self {
        Self {
            sequence: Vec::new(),
            player_sequence: Vec::new(),
            current_step: 0,
            level: 1,
            score: 0,
            best_score,
            phase: GamePhase::Idle,
            epoch: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase.is_playing()
    }

    pub fn is_showing_sequence(&self) -> bool {
        self.phase == GamePhase::ShowingSequence
    }

    /// Pads are live on the player's turn and through the round pause.
    /// A press during the pause has nothing left to match and ends the game.
    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, GamePhase::AwaitingInput | GamePhase::RoundComplete)
    }

    /// Pad the player must press next, if any
    pub fn expected(&self) -> Option<Symbol> {
        self.sequence.get(self.current_step).copied()
    }

    /// Whole sequence reproduced this round
    pub fn round_complete(&self) -> bool {
        !self.sequence.is_empty() && self.current_step == self.sequence.len()
    }

    /// Points a completed round at the current level is worth
    pub fn round_points(&self) -> u64 {
        u64::from(self.level) * crate::consts::POINTS_PER_LEVEL
    }

    /// Clear per-round progress
    pub fn clear_round(&mut self) {
        self.player_sequence.clear();
        self.current_step = 0;
    }

    /// Clear everything but the best score and start a new epoch
    pub fn clear_game(&mut self) {
        self.epoch += 1;
        self.sequence.clear();
        self.clear_round();
        self.level = 1;
        self.score = 0;
    }

    /// Raise the best score if beaten. Returns true on a new record.
    pub fn record_best(&mut self) -> bool {
        if self.score > self.best_score {
            self.best_score = self.score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(40);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 40);
        assert!(!state.is_playing());
        assert!(!state.is_showing_sequence());
        assert!(!state.accepts_input());
    }

    #[test]
    fn test_flags_follow_phase() {
        let mut state = GameState::default();
        state.phase = GamePhase::ShowingSequence;
        assert!(state.is_playing() && state.is_showing_sequence() && !state.accepts_input());
        state.phase = GamePhase::AwaitingInput;
        assert!(state.is_playing() && !state.is_showing_sequence() && state.accepts_input());
        state.phase = GamePhase::RoundComplete;
        assert!(state.is_playing() && state.accepts_input());
        assert_eq!(state.expected(), None);
        state.phase = GamePhase::GameOver;
        assert!(!state.is_playing() && !state.accepts_input());
    }

    #[test]
    fn test_round_complete_and_expected() {
        let mut state = GameState::default();
        assert!(!state.round_complete());
        assert_eq!(state.expected(), None);

        state.sequence = vec![Symbol::Red, Symbol::Blue];
        assert_eq!(state.expected(), Some(Symbol::Red));
        state.current_step = 1;
        assert_eq!(state.expected(), Some(Symbol::Blue));
        assert!(!state.round_complete());
        state.current_step = 2;
        assert!(state.round_complete());
        assert_eq!(state.expected(), None);
    }

    #[test]
    fn test_clear_game_keeps_best_and_bumps_epoch() {
        let mut state = GameState::new(90);
        state.sequence = vec![Symbol::Green; 3];
        state.player_sequence = vec![Symbol::Green];
        state.current_step = 1;
        state.level = 3;
        state.score = 30;

        state.clear_game();
        assert!(state.sequence.is_empty());
        assert!(state.player_sequence.is_empty());
        assert_eq!(state.current_step, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 90);
        assert_eq!(state.epoch, 1);
    }

    #[test]
    fn test_record_best_only_on_strict_improvement() {
        let mut state = GameState::new(20);
        state.score = 20;
        assert!(!state.record_best());
        state.score = 30;
        assert!(state.record_best());
        assert_eq!(state.best_score, 30);
    }

    #[test]
    fn test_snapshot_serializes_symbols_by_name() {
        let mut state = GameState::default();
        state.sequence = vec![Symbol::Yellow];
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"yellow\""));
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
