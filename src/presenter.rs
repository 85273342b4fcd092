//! Rendering seam
//!
//! The game core never touches a display or speaker directly. Front ends
//! implement `Presenter`; the core calls it on every visible change.

use serde::{Deserialize, Serialize};

use crate::sim::Symbol;

/// Tone of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessageKind {
    #[default]
    Neutral,
    Success,
    Error,
}

impl MessageKind {
    /// CSS modifier class (empty for neutral)
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Neutral => "",
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Caption on the start control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartLabel {
    Start,
    PlayAgain,
}

impl StartLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StartLabel::Start => "Start",
            StartLabel::PlayAgain => "Play again",
        }
    }
}

/// Visual and audio feedback
pub trait Presenter {
    /// Light a pad
    fn highlight(&mut self, symbol: Symbol);
    /// Turn a pad off
    fn clear_highlight(&mut self, symbol: Symbol);
    /// Enable or grey out the pads
    fn set_input_enabled(&mut self, enabled: bool);
    fn show_message(&mut self, text: &str, kind: MessageKind);
    fn set_level(&mut self, level: u32);
    fn set_score(&mut self, score: u64);
    fn set_best_score(&mut self, best: u64);
    /// Play the pad's tone. Must be a no-op when audio is unavailable.
    fn play_tone(&mut self, symbol: Symbol);
    fn set_start_control(&mut self, enabled: bool, label: StartLabel);
}

/// One recorded `Presenter` call
#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    Highlight(Symbol),
    ClearHighlight(Symbol),
    InputEnabled(bool),
    Message(String, MessageKind),
    Level(u32),
    Score(u64),
    BestScore(u64),
    Tone(Symbol),
    StartControl(bool, StartLabel),
}

/// Headless presenter that records every call, for tests and replays
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent message and its kind
    pub fn last_message(&self) -> Option<(&str, MessageKind)> {
        self.events.iter().rev().find_map(|e| match e {
            PresenterEvent::Message(text, kind) => Some((text.as_str(), *kind)),
            _ => None,
        })
    }

    /// Most recent input enablement
    pub fn input_enabled(&self) -> Option<bool> {
        self.events.iter().rev().find_map(|e| match e {
            PresenterEvent::InputEnabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    /// Most recent start control state
    pub fn start_control(&self) -> Option<(bool, StartLabel)> {
        self.events.iter().rev().find_map(|e| match e {
            PresenterEvent::StartControl(enabled, label) => Some((*enabled, *label)),
            _ => None,
        })
    }

    /// Pads lit, in order
    pub fn highlights(&self) -> Vec<Symbol> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::Highlight(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    /// Tones played, in order
    pub fn tones(&self) -> Vec<Symbol> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PresenterEvent::Tone(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn highlight(&mut self, symbol: Symbol) {
        self.events.push(PresenterEvent::Highlight(symbol));
    }

    fn clear_highlight(&mut self, symbol: Symbol) {
        self.events.push(PresenterEvent::ClearHighlight(symbol));
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.events.push(PresenterEvent::InputEnabled(enabled));
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        self.events.push(PresenterEvent::Message(text.to_string(), kind));
    }

    fn set_level(&mut self, level: u32) {
        self.events.push(PresenterEvent::Level(level));
    }

    fn set_score(&mut self, score: u64) {
        self.events.push(PresenterEvent::Score(score));
    }

    fn set_best_score(&mut self, best: u64) {
        self.events.push(PresenterEvent::BestScore(best));
    }

    fn play_tone(&mut self, symbol: Symbol) {
        self.events.push(PresenterEvent::Tone(symbol));
    }

    fn set_start_control(&mut self, enabled: bool, label: StartLabel) {
        self.events.push(PresenterEvent::StartControl(enabled, label));
    }
}

/// Status messages the game shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Message {
    Idle,
    Memorize,
    YourTurn,
    NextLevel,
    NewRecord(u64),
    GameOver(u64),
}

impl Message {
    pub(crate) fn text(&self) -> String {
        match self {
            Message::Idle => "Press \"Start\" to play!".to_string(),
            Message::Memorize => "Watch the sequence...".to_string(),
            Message::YourTurn => "Your turn!".to_string(),
            Message::NextLevel => "Well done! Next level...".to_string(),
            Message::NewRecord(score) => format!("New record! Score: {}", score),
            Message::GameOver(score) => format!("Game over! Score: {}", score),
        }
    }

    pub(crate) fn kind(&self) -> MessageKind {
        match self {
            Message::Idle | Message::Memorize | Message::YourTurn => MessageKind::Neutral,
            Message::NextLevel | Message::NewRecord(_) => MessageKind::Success,
            Message::GameOver(_) => MessageKind::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kinds() {
        assert_eq!(Message::YourTurn.kind(), MessageKind::Neutral);
        assert_eq!(Message::NewRecord(50).kind(), MessageKind::Success);
        assert_eq!(Message::GameOver(0).kind(), MessageKind::Error);
    }

    #[test]
    fn test_score_messages_include_score() {
        assert_eq!(Message::GameOver(30).text(), "Game over! Score: 30");
        assert_eq!(Message::NewRecord(60).text(), "New record! Score: 60");
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(MessageKind::Neutral.css_class(), "");
        assert_eq!(MessageKind::Error.css_class(), "error");
        assert_eq!(StartLabel::PlayAgain.as_str(), "Play again");
    }
}
