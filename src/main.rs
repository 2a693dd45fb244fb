//! Snack Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.
//! On the web this wires the DOM: canvas, HUD labels, touch buttons, the
//! requestAnimationFrame frame loop and the independent wall-clock bonus
//! interval. Natively it runs a short headless session as a smoke test.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use snack_dash::consts::*;
    use snack_dash::render::CanvasRenderer;
    use snack_dash::sim::{GameState, TickInput, streak_bonus, tick};
    use snack_dash::tips::DEFAULT_TIP;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Option<CanvasRenderer>,
        /// Input snapshot; written by event callbacks, read once per tick.
        /// Single-threaded, so the two never interleave mid-tick.
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64) -> Self {
            Self {
                state: GameState::new(seed),
                renderer: None,
                input: TickInput::default(),
            }
        }

        /// Full reset with a fresh seed, then enter Running
        fn restart(&mut self, seed: u64) {
            self.state = GameState::new(seed);
            self.input = TickInput::default();
            self.state.start();
        }

        /// Push score/lives/streak into the HUD labels
        fn update_hud(&self) {
            let Some(document) = document() else { return };
            set_text(&document, "score", &self.state.score.to_string());
            set_text(&document, "lives", &self.state.lives.to_string());
            set_text(&document, "streak", &self.state.streak.to_string());
        }

        fn render(&self) {
            if let Some(ref renderer) = self.renderer {
                renderer.render(&self.state);
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Snack Dash starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game")
            .ok_or_else(|| JsValue::from_str("no #game canvas"))?
            .dyn_into()?;
        canvas.set_width(WORLD_W as u32);
        canvas.set_height(WORLD_H as u32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed)));
        game.borrow_mut().renderer = Some(CanvasRenderer::new(&canvas)?);

        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        setup_start_buttons(game.clone());
        setup_bonus_interval(game.clone())?;
        setup_viewport_fit(&canvas)?;

        // Paint the idle playfield and HUD once before the first start
        {
            let g = game.borrow();
            g.render();
            g.update_hud();
        }
        set_text(&document, "desc", DEFAULT_TIP);

        log::info!("Snack Dash ready");
        Ok(())
    }

    /// Start (or restart) a run from Idle or GameOver
    fn start_game(game: &Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.state.running() {
                return;
            }
            let seed = js_sys::Date::now() as u64;
            g.restart(seed);
            g.update_hud();
            log::info!("Run started with seed: {}", seed);
        }
        if let Some(document) = document() {
            set_hidden(&document, "gameOver", true);
            set_hidden(&document, "startBtn", true);
        }
        start_frame_loop(game.clone());
    }

    /// Game-over side effects: final score display, start affordance back
    fn end_game(game: &Rc<RefCell<Game>>) {
        let score = game.borrow().state.score;
        log::info!("Game over, final score: {}", score);
        if let Some(document) = document() {
            set_text(&document, "finalScore", &format!("Your score: {}", score));
            set_hidden(&document, "gameOver", false);
            set_hidden(&document, "startBtn", false);
        }
    }

    type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    /// Self-rescheduling requestAnimationFrame chain. Reschedules only
    /// while the run is active; leaving `Running` is the sole cancellation.
    fn start_frame_loop(game: Rc<RefCell<Game>>) {
        let f: FrameCallback = Rc::new(RefCell::new(None));
        let g = f.clone();
        let game_for_frame = game.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
            let events = {
                let mut game = game_for_frame.borrow_mut();
                let input = game.input.clone();
                let events = tick(&mut game.state, &input);
                // Jump is one-shot; held keys must not re-fire it
                game.input.jump = false;
                game.render();
                if events.hud_changed {
                    game.update_hud();
                }
                events
            };

            if events.game_over {
                end_game(&game_for_frame);
            }

            if game_for_frame.borrow().state.running() {
                if let Some(w) = web_sys::window() {
                    let _ = w.request_animation_frame(
                        f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                    );
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(w) = web_sys::window() {
            let _ =
                w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }

    /// The wall-clock streak-bonus timer: installed once, fires every
    /// 3 seconds regardless of frame rate, and is a guarded no-op unless
    /// a run is active with the streak on a multiple of five.
    fn setup_bonus_interval(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut()>::new(move || {
            let tip = {
                let mut g = game.borrow_mut();
                let tip = streak_bonus(&mut g.state);
                if tip.is_some() {
                    g.update_hud();
                }
                tip
            };
            if let Some(tip) = tip {
                show_tip(tip);
            }
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            BONUS_INTERVAL_MS,
        )?;
        closure.forget();
        Ok(())
    }

    /// Surface a tip in the description line, reverting after 4.5 seconds
    fn show_tip(tip: &str) {
        let Some(document) = document() else { return };
        set_text(&document, "desc", &format!("Tip: {}", tip));

        let revert = Closure::<dyn FnMut()>::new(move || {
            if let Some(document) = document() {
                set_text(&document, "desc", DEFAULT_TIP);
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                revert.as_ref().unchecked_ref(),
                TIP_DISPLAY_MS,
            );
        }
        revert.forget();
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.move_left = true,
                    "ArrowRight" => g.input.move_right = true,
                    // Edge-triggered: ignore key auto-repeat so a held key
                    // cannot re-jump on landing
                    "ArrowUp" if !event.repeat() => g.input.jump = true,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowLeft" => g.input.move_left = false,
                    "ArrowRight" => g.input.move_right = false,
                    _ => {}
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // On-screen buttons map to the same input snapshot
        setup_hold_button(&game, "leftBtn", |input, held| input.move_left = held);
        setup_hold_button(&game, "rightBtn", |input, held| input.move_right = held);
        {
            let game = game.clone();
            let Some(document) = document() else { return };
            if let Some(btn) = document.get_element_by_id("jumpBtn") {
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                    game.borrow_mut().input.jump = true;
                });
                let _ = btn.add_event_listener_with_callback(
                    "pointerdown",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    /// Wire pointerdown/pointerup on a hold-to-move button
    fn setup_hold_button(
        game: &Rc<RefCell<Game>>,
        id: &str,
        set: fn(&mut TickInput, bool),
    ) {
        let Some(document) = document() else { return };
        let Some(btn) = document.get_element_by_id(id) else {
            return;
        };

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                set(&mut game.borrow_mut().input, true);
            });
            let _ = btn
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                set(&mut game.borrow_mut().input, false);
            });
            let _ =
                btn.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = document() else { return };
        for id in ["startBtn", "restartBtn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    start_game(&game);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// Responsive scaling: CSS-scale the canvas to the viewport while the
    /// game keeps running in fixed 360x640 logical units
    fn setup_viewport_fit(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        fit_canvas(canvas)?;

        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let _ = fit_canvas(&canvas);
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn fit_canvas(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let inner_w = window.inner_width()?.as_f64().unwrap_or(WORLD_W as f64);
        let inner_h = window.inner_height()?.as_f64().unwrap_or(WORLD_H as f64);

        let scale = ((inner_w - 24.0) / WORLD_W as f64)
            .min((inner_h - 80.0) / WORLD_H as f64)
            .min(1.0);

        let style = canvas.style();
        style.set_property("transform", &format!("scale({})", scale))?;
        style.set_property("transform-origin", "top left")?;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use snack_dash::consts::BONUS_INTERVAL_MS;
    use snack_dash::sim::{GameState, TickInput, streak_bonus, tick};

    env_logger::init();
    log::info!("Snack Dash (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    // Scripted session: drift left and right, fire the bonus timer at the
    // cadence it would have at 60 fps, stop at game over.
    let mut state = GameState::new(42);
    state.start();

    let bonus_every = BONUS_INTERVAL_MS as u64 / 16;
    let mut ticks: u64 = 0;
    while state.running() && ticks < 60_000 {
        let input = TickInput {
            move_left: (ticks / 120) % 2 == 0,
            move_right: (ticks / 120) % 2 == 1,
            jump: ticks % 90 == 0,
        };
        tick(&mut state, &input);
        ticks += 1;
        if ticks % bonus_every == 0 {
            if let Some(tip) = streak_bonus(&mut state) {
                log::info!("Streak bonus! Tip: {}", tip);
            }
        }
    }

    log::info!(
        "Headless run over after {} ticks: score {}, lives {}",
        ticks,
        state.score,
        state.lives
    );
    println!("Final score: {}", state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
