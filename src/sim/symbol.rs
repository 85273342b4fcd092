//! The four coloured pads

use serde::{Deserialize, Serialize};

/// A player-selectable pad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Symbol {
    /// Every pad, in board order
    pub const ALL: [Symbol; 4] = [Symbol::Red, Symbol::Green, Symbol::Blue, Symbol::Yellow];

    /// Name used in markup (`data-color`) and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Red => "red",
            Symbol::Green => "green",
            Symbol::Blue => "blue",
            Symbol::Yellow => "yellow",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(Symbol::Red),
            "green" => Some(Symbol::Green),
            "blue" => Some(Symbol::Blue),
            "yellow" => Some(Symbol::Yellow),
            _ => None,
        }
    }

    /// Fixed keyboard mapping (two keys per hand)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "q" => Some(Symbol::Red),
            "w" => Some(Symbol::Green),
            "o" => Some(Symbol::Blue),
            "p" => Some(Symbol::Yellow),
            _ => None,
        }
    }

    /// Key that plays this pad
    pub fn key(&self) -> char {
        match self {
            Symbol::Red => 'q',
            Symbol::Green => 'w',
            Symbol::Blue => 'o',
            Symbol::Yellow => 'p',
        }
    }

    /// Tone frequency in Hz
    pub fn frequency(&self) -> f32 {
        match self {
            Symbol::Red => 220.0,
            Symbol::Green => 330.0,
            Symbol::Blue => 440.0,
            Symbol::Yellow => 550.0,
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping_is_case_insensitive() {
        assert_eq!(Symbol::from_key("q"), Some(Symbol::Red));
        assert_eq!(Symbol::from_key("W"), Some(Symbol::Green));
        assert_eq!(Symbol::from_key("O"), Some(Symbol::Blue));
        assert_eq!(Symbol::from_key("p"), Some(Symbol::Yellow));
        assert_eq!(Symbol::from_key("a"), None);
        assert_eq!(Symbol::from_key("Enter"), None);
    }

    #[test]
    fn test_key_and_name_agree_with_all() {
        for (i, symbol) in Symbol::ALL.iter().enumerate() {
            assert_eq!(symbol.index(), i);
            assert_eq!(Symbol::from_key(&symbol.key().to_string()), Some(*symbol));
            assert_eq!(Symbol::from_name(symbol.as_str()), Some(*symbol));
        }
    }

    #[test]
    fn test_frequencies_ascend() {
        let freqs: Vec<f32> = Symbol::ALL.iter().map(|s| s.frequency()).collect();
        assert_eq!(freqs, vec![220.0, 330.0, 440.0, 550.0]);
    }
}
