//! Simon Pads - a sequence-memory arcade game
//!
//! Core modules:
//! - `sim`: Deterministic game core (sequence state machine, timeline, symbols)
//! - `presenter`: Rendering/audio seam the core talks to
//! - `persistence`: Best-score storage (memory, JSON file, LocalStorage)
//! - `platform`: Browser and terminal front ends
//! - `settings`: Audio preferences

pub mod persistence;
pub mod platform;
pub mod presenter;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod audio;

pub use persistence::{MemoryScorekeeper, Scorekeeper, StorageError};
pub use presenter::{MessageKind, Presenter, PresenterEvent, RecordingPresenter, StartLabel};
pub use settings::Settings;
pub use sim::{GamePhase, GameState, InputOutcome, SimonGame, Symbol};

/// Game configuration constants
pub mod consts {
    /// Pause before the first pad of a presentation lights up (ms)
    pub const LEAD_TIME_MS: u64 = 500;
    /// Gap before each pad in a presentation (ms)
    pub const SYMBOL_GAP_MS: u64 = 300;
    /// How long a pad stays lit, both when shown and when pressed (ms)
    pub const HIGHLIGHT_MS: u64 = 400;
    /// Pause between a completed round and the next presentation (ms)
    pub const ROUND_PAUSE_MS: u64 = 1500;
    /// Half-period of the game-over flash: lit this long, then dark this long (ms)
    pub const FLASH_MS: u64 = 200;
    /// Number of game-over flashes
    pub const FLASH_COUNT: u32 = 3;

    /// Points per level for a completed round
    pub const POINTS_PER_LEVEL: u64 = 10;

    /// Tone envelope (Web Audio)
    pub const TONE_GAIN: f32 = 0.3;
    pub const TONE_RELEASE_GAIN: f32 = 0.01;
    pub const TONE_SECS: f64 = 0.3;
}
