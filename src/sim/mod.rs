//! Deterministic game module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `SimonGame::advance`
//! - Injected RNG only
//! - Rendering, audio and storage go through the `Presenter`/`Scorekeeper` seams

pub mod game;
pub mod state;
pub mod symbol;
pub mod timeline;

pub use game::{InputOutcome, SimonGame};
pub use state::{GamePhase, GameState};
pub use symbol::Symbol;
pub use timeline::{Cue, Fired, Timeline, Track};
