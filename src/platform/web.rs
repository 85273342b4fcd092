//! Browser front end
//!
//! Expected markup: four `.simon-button` elements carrying `data-color`,
//! `#level`, `#score`, `#best-score`, `#message`, `#start-btn` and `#reset-btn`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement};

use crate::audio::AudioManager;
use crate::presenter::{MessageKind, Presenter, StartLabel};
use crate::settings::Settings;
use crate::sim::Symbol;

/// Presenter backed by DOM class toggles and Web Audio
pub struct WebPresenter {
    document: Document,
    audio: AudioManager,
}

impl WebPresenter {
    pub fn new(document: Document, settings: &Settings) -> Self {
        Self {
            document,
            audio: AudioManager::new(settings),
        }
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager {
        &mut self.audio
    }

    fn pad(&self, symbol: Symbol) -> Option<Element> {
        let selector = format!(".simon-button[data-color=\"{}\"]", symbol.as_str());
        self.document.query_selector(&selector).ok().flatten()
    }

    fn pads(&self) -> Vec<Element> {
        let Ok(list) = self.document.query_selector_all(".simon-button") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

impl Presenter for WebPresenter {
    fn highlight(&mut self, symbol: Symbol) {
        if let Some(el) = self.pad(symbol) {
            let _ = el.class_list().add_1("active");
        }
    }

    fn clear_highlight(&mut self, symbol: Symbol) {
        if let Some(el) = self.pad(symbol) {
            let _ = el.class_list().remove_1("active");
        }
    }

    fn set_input_enabled(&mut self, enabled: bool) {
        for el in self.pads() {
            let _ = if enabled {
                el.class_list().remove_1("disabled")
            } else {
                el.class_list().add_1("disabled")
            };
        }
    }

    fn show_message(&mut self, text: &str, kind: MessageKind) {
        if let Some(el) = self.document.get_element_by_id("message") {
            el.set_text_content(Some(text));
            el.set_class_name(format!("message {}", kind.css_class()).trim_end());
        }
    }

    fn set_level(&mut self, level: u32) {
        self.set_text("level", &level.to_string());
    }

    fn set_score(&mut self, score: u64) {
        self.set_text("score", &score.to_string());
    }

    fn set_best_score(&mut self, best: u64) {
        self.set_text("best-score", &best.to_string());
    }

    fn play_tone(&mut self, symbol: Symbol) {
        self.audio.play_tone(symbol);
    }

    fn set_start_control(&mut self, enabled: bool, label: StartLabel) {
        let Some(btn) = self
            .document
            .get_element_by_id("start-btn")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            return;
        };
        btn.set_disabled(!enabled);
        btn.set_text_content(Some(label.as_str()));
    }
}
