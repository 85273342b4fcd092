//! Simon Pads entry point
//!
//! Handles platform-specific initialization and drives the game clock.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

    use simon_pads::persistence::LocalStorageScorekeeper;
    use simon_pads::platform::web::WebPresenter;
    use simon_pads::{Settings, SimonGame, Symbol};

    /// Game instance holding all state
    struct Game {
        sim: SimonGame<WebPresenter, LocalStorageScorekeeper>,
        settings: Settings,
        last_time: f64,
        // Sub-millisecond remainder carried between frames
        carry_ms: f64,
    }

    impl Game {
        fn new(document: Document, seed: u64) -> Self {
            let settings = Settings::load();
            let presenter = WebPresenter::new(document, &settings);
            Self {
                sim: SimonGame::with_seed(presenter, LocalStorageScorekeeper::default(), seed),
                settings,
                last_time: 0.0,
                carry_ms: 0.0,
            }
        }

        /// Advance the game clock by the frame delta
        fn update(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time).max(0.0)
            } else {
                0.0
            };
            self.last_time = time;

            let total = dt + self.carry_ms;
            let whole = total.floor();
            self.carry_ms = total - whole;
            self.sim.advance(whole as u64);
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.settings.save();
            let settings = self.settings.clone();
            self.sim.presenter_mut().audio_mut().apply_settings(&settings);
            log::info!("Sound {}", if settings.muted { "muted" } else { "on" });
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        // Already initialised on hot reload
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Simon Pads starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document - cannot start");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(document.clone(), seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_control_buttons(&document, game.clone());
        setup_pads(&document, game.clone());
        setup_keyboard(&document, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Simon Pads running!");
    }

    fn setup_control_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().sim.start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("reset-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().sim.reset();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_pads(document: &Document, game: Rc<RefCell<Game>>) {
        let Ok(pads) = document.query_selector_all(".simon-button") else {
            return;
        };
        for i in 0..pads.length() {
            let Some(pad) = pads.item(i) else { continue };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let symbol = event
                    .current_target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.get_attribute("data-color"))
                    .and_then(|name| Symbol::from_name(&name));
                if let Some(symbol) = symbol {
                    game.borrow_mut().sim.submit_input(symbol);
                }
            });
            let _ = pad.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(document: &Document, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.repeat() {
                return;
            }
            let key = event.key();
            if key.eq_ignore_ascii_case("m") {
                game.borrow_mut().toggle_mute();
            } else if let Some(symbol) = Symbol::from_key(&key) {
                game.borrow_mut().sim.submit_input(symbol);
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().update(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use std::io::{self, BufRead, Write};
    use std::thread;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use simon_pads::persistence::FileScorekeeper;
    use simon_pads::platform::terminal::{Command, TerminalPresenter, help_text, parse_line};
    use simon_pads::{Presenter, Scorekeeper, Settings, SimonGame};

    /// Play every scheduled cue in real time
    fn play_out<P: Presenter, S: Scorekeeper>(game: &mut SimonGame<P, S>) {
        while let Some(due_in) = game.next_due_in() {
            thread::sleep(Duration::from_millis(due_in));
            game.advance(due_in);
        }
    }

    pub fn run() -> io::Result<()> {
        let settings = Settings::load();
        let scorekeeper = FileScorekeeper::from_env();
        log::info!("Best score file: {}", scorekeeper.path().display());

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::info!("Game initialized with seed: {}", seed);

        let presenter = TerminalPresenter::new(io::stdout(), settings);
        let mut game = SimonGame::with_seed(presenter, scorekeeper, seed);

        let mut out = io::stdout();
        writeln!(out, "{}", help_text())?;

        let mut lines = io::stdin().lock().lines();
        loop {
            play_out(&mut game);

            write!(out, "{}", game.presenter().prompt())?;
            out.flush()?;

            let Some(line) = lines.next() else { break };
            for command in parse_line(&line?) {
                match command {
                    Command::Start => game.start(),
                    Command::Reset => game.reset(),
                    Command::Quit => return Ok(()),
                    Command::Press(symbol) => {
                        game.submit_input(symbol);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Simon Pads (native) starting...");

    if let Err(e) = native_game::run() {
        log::error!("Terminal I/O failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
