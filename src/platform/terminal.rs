//! Text front end for the native build
//!
//! Renders the board as one line per change, e.g. `[RED]  green  blue  yellow`,
//! and reads pad presses from lines of keys.

use std::io::Write;

use crate::presenter::{MessageKind, Presenter, StartLabel};
use crate::settings::Settings;
use crate::sim::Symbol;

/// A command typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Reset,
    Quit,
    Press(Symbol),
}

/// Parse one typed line into commands. Unknown characters are skipped.
pub fn parse_line(line: &str) -> Vec<Command> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| match c.to_ascii_lowercase() {
            's' => Some(Command::Start),
            'r' => Some(Command::Reset),
            'x' => Some(Command::Quit),
            other => Symbol::from_key(&other.to_string()).map(Command::Press),
        })
        .collect()
}

/// Key help shown at startup
pub fn help_text() -> String {
    let pads: Vec<String> = Symbol::ALL
        .iter()
        .map(|s| format!("{} = {}", s.key(), s))
        .collect();
    format!(
        "Pads: {}\nCommands: s = start, r = reset, x = quit (type keys, then Enter)",
        pads.join(", ")
    )
}

/// Presenter writing to any `io::Write`
pub struct TerminalPresenter<W: Write> {
    out: W,
    settings: Settings,
    lit: [bool; 4],
    input_enabled: bool,
    start: (bool, StartLabel),
    level: u32,
    score: u64,
    best: u64,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, settings: Settings) -> Self {
        Self {
            out,
            settings,
            lit: [false; 4],
            input_enabled: false,
            start: (true, StartLabel::Start),
            level: 1,
            score: 0,
            best: 0,
        }
    }

    /// Board line with lit pads in capitals
    pub fn render_board(&self) -> String {
        Symbol::ALL
            .iter()
            .map(|s| {
                if self.lit[s.index()] {
                    format!("[{}]", s.as_str().to_uppercase())
                } else {
                    format!(" {} ", s.as_str())
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Prompt line reflecting what the player can do now
    pub fn prompt(&self) -> String {
        let mut options = Vec::new();
        if self.input_enabled {
            options.push("pads".to_string());
        }
        if self.start.0 {
            options.push(format!("s = {}", self.start.1.as_str()));
        }
        options.push("r = reset".to_string());
        options.push("x = quit".to_string());
        format!("({})> ", options.join(", "))
    }

    pub fn input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Terminal write errors are not worth stopping the game for
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = self.out.flush();
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn highlight(&mut self, symbol: Symbol) {
        self.lit[symbol.index()] = true;
        let board = self.render_board();
        self.line(&board);
    }

    fn clear_highlight(&mut self, symbol: Symbol) {
        self.lit[symbol.index()] = false;
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        let tag = match kind {
            MessageKind::Neutral => "--",
            MessageKind::Success => "ok",
            MessageKind::Error => "!!",
        };
        let status = format!(
            "[{}] {}   (level {}, score {}, best {})",
            tag, text, self.level, self.score, self.best
        );
        self.line(&status);
    }

    fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    fn set_score(&mut self, score: u64) {
        self.score = score;
    }

    fn set_best_score(&mut self, best: u64) {
        self.best = best;
    }

    fn play_tone(&mut self, symbol: Symbol) {
        if self.settings.effective_volume() <= 0.0 {
            return;
        }
        let tone = format!("    ~ {:.0} Hz", symbol.frequency());
        self.line(&tone);
    }

    fn set_start_control(&mut self, enabled: bool, label: StartLabel) {
        self.start = (enabled, label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(p: TerminalPresenter<Vec<u8>>) -> String {
        String::from_utf8(p.into_inner()).unwrap()
    }

    #[test]
    fn test_parse_line() {
        assert_eq!(
            parse_line("q W s x?"),
            vec![
                Command::Press(Symbol::Red),
                Command::Press(Symbol::Green),
                Command::Start,
                Command::Quit,
            ]
        );
        assert_eq!(parse_line("op"), vec![Command::Press(Symbol::Blue), Command::Press(Symbol::Yellow)]);
        assert!(parse_line("   ").is_empty());
    }

    #[test]
    fn test_board_shows_lit_pads() {
        let mut p = TerminalPresenter::new(Vec::new(), Settings::default());
        p.highlight(Symbol::Blue);
        assert_eq!(p.render_board(), " red   green  [BLUE]  yellow ");
        p.clear_highlight(Symbol::Blue);
        assert!(!p.render_board().contains('['));
        assert!(output(p).contains("[BLUE]"));
    }

    #[test]
    fn test_tone_respects_mute() {
        let mut loud = TerminalPresenter::new(Vec::new(), Settings::default());
        loud.play_tone(Symbol::Yellow);
        assert!(output(loud).contains("550 Hz"));

        let muted = Settings {
            muted: true,
            ..Settings::default()
        };
        let mut quiet = TerminalPresenter::new(Vec::new(), muted);
        quiet.play_tone(Symbol::Yellow);
        assert!(output(quiet).is_empty());
    }

    #[test]
    fn test_message_carries_status() {
        let mut p = TerminalPresenter::new(Vec::new(), Settings::default());
        p.set_level(3);
        p.set_score(30);
        p.set_best_score(60);
        p.show_message("Game over! Score: 30", MessageKind::Error);
        assert_eq!(
            output(p),
            "[!!] Game over! Score: 30   (level 3, score 30, best 60)\n"
        );
    }

    #[test]
    fn test_prompt_follows_controls() {
        let mut p = TerminalPresenter::new(Vec::new(), Settings::default());
        p.set_input_enabled(false);
        p.set_start_control(true, StartLabel::PlayAgain);
        assert_eq!(p.prompt(), "(s = Play again, r = reset, x = quit)> ");
        p.set_input_enabled(true);
        p.set_start_control(false, StartLabel::PlayAgain);
        assert_eq!(p.prompt(), "(pads, r = reset, x = quit)> ");
    }

    #[test]
    fn test_help_lists_every_pad() {
        let help = help_text();
        for s in Symbol::ALL {
            assert!(help.contains(&format!("{} = {}", s.key(), s)));
        }
    }
}
