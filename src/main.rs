//! Orb Rush entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, KeyboardEvent, PointerEvent};

    use orb_rush::Session;
    use orb_rush::audio::AudioManager;
    use orb_rush::consts::*;
    use orb_rush::input::{key_action, pointer_action};
    use orb_rush::persistence::LocalStore;
    use orb_rush::sim::{Action, GameEvent, RoundStatus};

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStore>,
        audio: AudioManager,
    }

    impl Game {
        fn new(seed: u64, w: f32, h: f32) -> Self {
            let session = Session::new(LocalStore, seed, w, h);
            let mut audio = AudioManager::new();
            audio.set_muted(!session.settings().sound);
            Self { session, audio }
        }

        fn dispatch(&mut self, action: Action) {
            let events = self.session.dispatch(action);
            self.handle_events(&events);
        }

        fn frame(&mut self, time: f64) {
            let events = self.session.frame(time);
            self.handle_events(&events);
        }

        fn handle_events(&mut self, events: &[GameEvent]) {
            if !events.is_empty() {
                self.audio.play_events(events);
            }
        }

        fn sync_settings(&mut self) {
            self.audio.set_muted(!self.session.settings().sound);
            apply_theme(&self.session);
        }

        /// Update HUD elements and the target in the DOM
        fn render(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = self.session.hud();

            set_text(&document, "hud-score", &hud.score.to_string());
            set_text(&document, "hud-best", &hud.high_score.to_string());
            set_text(&document, "hud-level", &hud.level.to_string());
            set_text(&document, "hud-time", &hud.time);
            set_text(&document, "hud-accuracy", &hud.accuracy_label());
            set_text(&document, "hud-combo", &hud.combo.to_string());
            set_text(&document, "hud-hits", &hud.hits.to_string());
            set_text(&document, "hud-misses", &hud.misses.to_string());

            if let Some(target) = element(&document, "target") {
                let style = target.style();
                let d = hud.target_radius * 2.0;
                let _ = style.set_property("width", &format!("{:.1}px", d));
                let _ = style.set_property("height", &format!("{:.1}px", d));
                let _ = style.set_property(
                    "transform",
                    &format!(
                        "translate({:.1}px, {:.1}px)",
                        hud.target_x - hud.target_radius,
                        hud.target_y - hud.target_radius
                    ),
                );
                let _ = style.set_property("background", &hud.target_color());
            }

            // Show/hide overlays
            set_visible(&document, "start-overlay", hud.status == RoundStatus::Idle);
            set_visible(&document, "pause-overlay", hud.status == RoundStatus::Paused);
            set_visible(&document, "game-over", hud.status == RoundStatus::GameOver);
            if hud.status == RoundStatus::GameOver {
                set_text(&document, "final-score", &hud.score.to_string());
                set_text(&document, "final-level", &hud.level.to_string());
                set_text(&document, "final-accuracy", &hud.accuracy_label());
            }
        }
    }

    fn element(document: &Document, id: &str) -> Option<HtmlElement> {
        document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            if el.text_content().as_deref() != Some(text) {
                el.set_text_content(Some(text));
            }
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", !visible);
        }
    }

    fn apply_theme(session: &Session<LocalStore>) {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let settings = session.settings();
        let classes = body.class_list();
        let _ = classes.toggle_with_force("dark", settings.theme == orb_rush::Theme::Dark);
        let _ = classes.toggle_with_force("reduced-motion", settings.reduced_motion);
    }

    /// Current stage size and client-space origin
    fn measure_stage(stage: &HtmlElement) -> (f32, f32, f32, f32) {
        let rect = stage.get_bounding_client_rect();
        (
            rect.width() as f32,
            rect.height() as f32,
            rect.left() as f32,
            rect.top() as f32,
        )
    }

    /// Whether keyboard focus is in a text field
    fn typing_in_text_field(document: &Document) -> bool {
        let Some(active) = document.active_element() else {
            return false;
        };
        let tag = active.tag_name().to_uppercase();
        if tag == "INPUT" || tag == "TEXTAREA" || tag == "SELECT" {
            return true;
        }
        active
            .dyn_ref::<HtmlElement>()
            .map(|el| el.is_content_editable())
            .unwrap_or(false)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orb Rush starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let stage = element(&document, "stage").expect("no stage element");
        let (w, h, _, _) = measure_stage(&stage);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, w, h)));
        apply_theme(&game.borrow().session);
        game.borrow().render();

        log::info!(
            "Stage {}x{} (limits {}..{} x {}..{})",
            w,
            h,
            STAGE_MIN_W,
            STAGE_MAX_W,
            STAGE_MIN_H,
            STAGE_MAX_H
        );

        setup_input_handlers(&stage, game.clone());
        setup_buttons(&document, game.clone());
        setup_resize(stage.clone(), game.clone());
        setup_auto_pause(game.clone());

        request_animation_frame(game);

        log::info!("Orb Rush running!");
    }

    fn setup_input_handlers(stage: &HtmlElement, game: Rc<RefCell<Game>>) {
        // Pointer press anywhere on the stage (target included)
        {
            let game = game.clone();
            let stage_clone = stage.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let (_, _, left, top) = measure_stage(&stage_clone);
                let action =
                    pointer_action(event.client_x() as f32, event.client_y() as f32, left, top);
                game.borrow_mut().dispatch(action);
            });
            let _ = stage
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let typing = web_sys::window()
                    .and_then(|w| w.document())
                    .map(|d| typing_in_text_field(&d))
                    .unwrap_or(false);
                let mut g = game.borrow_mut();
                let status = g.session.state().round.status;
                if let Some(action) = key_action(&event.key(), status, typing) {
                    event.prevent_default();
                    g.dispatch(action);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn on_click(document: &Document, id: &str, mut handler: impl FnMut() + 'static) {
        if let Some(btn) = document.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                handler();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        let actions = [
            ("start-btn", Action::Start),
            ("pause-btn", Action::TogglePause),
            ("resume-btn", Action::TogglePause),
            ("restart-btn", Action::Restart),
            ("menu-btn", Action::Reset),
        ];
        for (id, action) in actions {
            let game = game.clone();
            on_click(document, id, move || game.borrow_mut().dispatch(action));
        }

        {
            let game = game.clone();
            on_click(document, "theme-toggle", move || {
                let mut g = game.borrow_mut();
                g.session.toggle_theme();
                g.sync_settings();
            });
        }
        {
            let game = game.clone();
            on_click(document, "motion-toggle", move || {
                let mut g = game.borrow_mut();
                g.session.toggle_reduced_motion();
                g.sync_settings();
            });
        }
        on_click(document, "sound-toggle", move || {
            let mut g = game.borrow_mut();
            g.session.toggle_sound();
            g.sync_settings();
        });
    }

    fn setup_resize(stage: HtmlElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (w, h, _, _) = measure_stage(&stage);
            game.borrow_mut().session.resize(w, h);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.session.state().round.status == RoundStatus::Playing {
                        g.dispatch(Action::TogglePause);
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.session.state().round.status == RoundStatus::Playing {
                    g.dispatch(Action::TogglePause);
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.frame(time);
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Orb Rush (native) starting...");
    log::info!("The playable build is web-only - run with `trunk serve`");

    println!("\nPlaying a headless demo round...");
    demo_round();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one round with a seeded auto-clicker that lands about 70% of its clicks
#[cfg(not(target_arch = "wasm32"))]
fn demo_round() {
    use orb_rush::Session;
    use orb_rush::persistence::MemoryStore;
    use orb_rush::sim::{Action, RoundStatus};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    // Roughly three clicks per second
    const CLICK_EVERY: u32 = 20;

    let mut session = Session::new(MemoryStore::new(), 2024, 800.0, 520.0);
    let mut rng = Pcg32::seed_from_u64(7);
    session.dispatch(Action::Start);

    let mut now = 0.0;
    let mut frame = 0u32;
    while session.state().round.status != RoundStatus::GameOver {
        session.frame(now);
        now += FRAME_MS;
        frame += 1;

        if frame % CLICK_EVERY == 0 {
            let target = &session.state().target;
            let (x, y) = if rng.random_bool(0.7) {
                (target.pos.x, target.pos.y)
            } else {
                (target.pos.x + target.radius * 3.0, target.pos.y)
            };
            session.dispatch(Action::PointerHit { x, y });
        }
    }

    let hud = session.hud();
    println!(
        "Round over after {} frames: score {}, level {}, accuracy {}, final combo {}",
        frame,
        hud.score,
        hud.level,
        hud.accuracy_label(),
        hud.combo
    );
    println!("Hits {} / misses {}, high score {}", hud.hits, hud.misses, hud.high_score);
}
