//! The sequence/turn state machine
//!
//! `SimonGame` owns the round state and drives the presenter. Time only moves
//! through `advance`, which fires the cues of every scheduled track in order.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GamePhase, GameState};
use super::symbol::Symbol;
use super::timeline::{Cue, Fired, Timeline, Track};
use crate::consts::*;
use crate::persistence::Scorekeeper;
use crate::presenter::{Message, Presenter, StartLabel};

/// What a single pad press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not the player's turn; nothing changed
    Ignored,
    /// Right pad, round continues
    Correct,
    /// Right pad, sequence finished
    RoundComplete,
    /// Wrong pad, game over
    Wrong,
}

/// A Simon game with injected presenter, score storage and randomness
pub struct SimonGame<P, S, R = Pcg32> {
    state: GameState,
    presenter: P,
    scorekeeper: S,
    rng: R,
    timeline: Timeline,
    start_label: StartLabel,
}

impl<P: Presenter, S: Scorekeeper> SimonGame<P, S, Pcg32> {
    /// Game with a seeded PCG generator
    pub fn with_seed(presenter: P, scorekeeper: S, seed: u64) -> Self {
        Self::new(presenter, scorekeeper, Pcg32::seed_from_u64(seed))
    }
}

impl<P: Presenter, S: Scorekeeper, R: Rng> SimonGame<P, S, R> {
    /// Load the best score and put the presenter in the idle state
    pub fn new(presenter: P, scorekeeper: S, rng: R) -> Self {
        let best_score = match scorekeeper.load_best_score() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("Best score unavailable, starting from 0: {}", e);
                0
            }
        };

        let mut game = Self {
            state: GameState::new(best_score),
            presenter,
            scorekeeper,
            rng,
            timeline: Timeline::new(),
            start_label: StartLabel::Start,
        };
        game.update_display();
        game.presenter.set_input_enabled(true);
        game.show(Message::Idle);
        game.presenter.set_start_control(true, StartLabel::Start);
        log::info!("Game ready (best score {})", best_score);
        game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn scorekeeper(&self) -> &S {
        &self.scorekeeper
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Simulated time since creation
    pub fn now_ms(&self) -> u64 {
        self.timeline.now_ms()
    }

    /// Time until the next scheduled cue, if anything is scheduled
    pub fn next_due_in(&self) -> Option<u64> {
        self.timeline.next_due_in()
    }

    /// Anything still scheduled (presentation, feedback, pause or flash)
    pub fn is_busy(&self) -> bool {
        !self.timeline.is_idle()
    }

    /// Start a fresh game
    pub fn start(&mut self) {
        self.state.clear_game();
        // Any presentation still on screen belongs to the old epoch
        self.state.phase = GamePhase::Idle;
        log::info!("Game started (epoch {})", self.state.epoch);

        self.update_display();
        self.show(Message::Memorize);
        self.presenter.set_start_control(false, self.start_label);
        self.next_round();
    }

    /// Grow the sequence by one random pad and present it
    pub fn next_round(&mut self) {
        let symbol = Symbol::ALL[self.rng.random_range(0..Symbol::ALL.len())];
        self.state.sequence.push(symbol);
        self.state.clear_round();
        log::debug!(
            "Round {}: appended {} (sequence length {})",
            self.state.level,
            symbol,
            self.state.sequence.len()
        );
        self.present();
    }

    /// Replay the whole sequence, then hand over to the player.
    ///
    /// Only from Idle or on the player's turn; the round pause and game over
    /// keep the board to themselves.
    pub fn show_sequence(&mut self) {
        match self.state.phase {
            GamePhase::Idle | GamePhase::AwaitingInput => self.present(),
            phase => log::debug!("No replay during {}", phase.as_str()),
        }
    }

    fn present(&mut self) {
        if self.state.is_showing_sequence() {
            log::debug!("Presentation already running");
            return;
        }
        self.state.phase = GamePhase::ShowingSequence;
        self.presenter.set_input_enabled(false);

        let mut track = Track::new("presentation", self.state.epoch).wait(LEAD_TIME_MS);
        for &symbol in &self.state.sequence {
            track = track
                .wait(SYMBOL_GAP_MS)
                .then(Cue::Highlight(symbol))
                .wait(HIGHLIGHT_MS)
                .then(Cue::Release(symbol));
        }
        self.timeline.schedule(track.then(Cue::PresentationDone));
    }

    /// Handle one pad press. Ignored unless the pads are live.
    pub fn submit_input(&mut self, symbol: Symbol) -> InputOutcome {
        if !self.state.accepts_input() {
            log::debug!("Ignored {} during {}", symbol, self.state.phase.as_str());
            return InputOutcome::Ignored;
        }

        self.state.player_sequence.push(symbol);
        self.press_feedback(symbol);

        if self.state.expected() != Some(symbol) {
            self.game_over();
            return InputOutcome::Wrong;
        }

        self.state.current_step += 1;
        if !self.state.round_complete() {
            return InputOutcome::Correct;
        }

        self.state.score += self.state.round_points();
        self.state.level += 1;
        self.state.phase = GamePhase::RoundComplete;
        self.update_display();
        self.show(Message::NextLevel);
        log::info!(
            "Round cleared: level {} next, score {}",
            self.state.level,
            self.state.score
        );

        self.timeline.schedule(
            Track::new("round-pause", self.state.epoch)
                .wait(ROUND_PAUSE_MS)
                .then(Cue::BeginRound),
        );
        InputOutcome::RoundComplete
    }

    /// End the game, record a new best score and flash the board
    pub fn game_over(&mut self) {
        self.state.phase = GamePhase::GameOver;
        self.presenter.set_input_enabled(false);

        let record = self.state.record_best();
        if record {
            if let Err(e) = self.scorekeeper.save_best_score(self.state.best_score) {
                log::warn!("Best score kept for this session only: {}", e);
            }
        }
        self.update_display();
        if record {
            self.show(Message::NewRecord(self.state.score));
        } else {
            self.show(Message::GameOver(self.state.score));
        }
        log::info!(
            "Game over at level {} (score {}, best {})",
            self.state.level,
            self.state.score,
            self.state.best_score
        );

        self.start_label = StartLabel::PlayAgain;
        self.presenter.set_start_control(true, self.start_label);

        let mut flash = Track::new("game-over-flash", self.state.epoch);
        for _ in 0..FLASH_COUNT {
            flash = flash
                .then(Cue::LightAll)
                .wait(FLASH_MS)
                .then(Cue::DarkenAll)
                .wait(FLASH_MS);
        }
        self.timeline.schedule(flash);
    }

    /// Back to the idle state. Visual cues already scheduled still play out.
    pub fn reset(&mut self) {
        self.state.clear_game();
        self.state.phase = GamePhase::Idle;
        log::info!("Game reset (epoch {})", self.state.epoch);

        self.presenter.set_input_enabled(true);
        self.update_display();
        self.show(Message::Idle);
        self.start_label = StartLabel::Start;
        self.presenter.set_start_control(true, self.start_label);
    }

    /// Move simulated time forward, firing every cue that falls due
    pub fn advance(&mut self, elapsed_ms: u64) {
        let until = self.timeline.now_ms() + elapsed_ms;
        while let Some(fired) = self.timeline.pop_due(until) {
            self.apply(fired);
        }
        self.timeline.settle(until);
    }

    /// Advance until nothing is scheduled. Returns the simulated time spent.
    pub fn run_until_idle(&mut self) -> u64 {
        let started = self.timeline.now_ms();
        while let Some(due_in) = self.timeline.next_due_in() {
            self.advance(due_in);
        }
        self.timeline.now_ms() - started
    }

    fn apply(&mut self, fired: Fired) {
        if fired.cue.changes_state() && fired.epoch != self.state.epoch {
            log::debug!(
                "Dropped stale {:?} from epoch {} at {} ms",
                fired.cue,
                fired.epoch,
                fired.at_ms
            );
            return;
        }

        match fired.cue {
            Cue::Highlight(symbol) => {
                self.presenter.highlight(symbol);
                self.presenter.play_tone(symbol);
            }
            Cue::Release(symbol) => self.presenter.clear_highlight(symbol),
            Cue::LightAll => {
                for symbol in Symbol::ALL {
                    self.presenter.highlight(symbol);
                }
            }
            Cue::DarkenAll => {
                for symbol in Symbol::ALL {
                    self.presenter.clear_highlight(symbol);
                }
            }
            Cue::PresentationDone => {
                if self.state.is_showing_sequence() {
                    self.state.phase = GamePhase::AwaitingInput;
                    self.presenter.set_input_enabled(true);
                    self.show(Message::YourTurn);
                }
            }
            Cue::BeginRound => {
                if self.state.phase == GamePhase::RoundComplete {
                    self.next_round();
                }
            }
        }
    }

    /// Light and sound a pressed pad right away, release it after the hold time
    fn press_feedback(&mut self, symbol: Symbol) {
        self.presenter.highlight(symbol);
        self.presenter.play_tone(symbol);
        self.timeline.schedule(
            Track::new("press", self.state.epoch)
                .wait(HIGHLIGHT_MS)
                .then(Cue::Release(symbol)),
        );
    }

    fn update_display(&mut self) {
        self.presenter.set_level(self.state.level);
        self.presenter.set_score(self.state.score);
        self.presenter.set_best_score(self.state.best_score);
    }

    fn show(&mut self, message: Message) {
        self.presenter.show_message(&message.text(), message.kind());
    }
}
