//! Arena Chase entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, Document, Element, KeyboardEvent, MouseEvent, PointerEvent};

    use arena_chase::consts::FRAME_MS;
    use arena_chase::renderer::DomRenderer;
    use arena_chase::sim::GameEvent;
    use arena_chase::{Game, GameConfig, platform};

    /// Game plus the page it draws into
    struct Host {
        game: Game,
        renderer: DomRenderer,
        last_time: f64,
    }

    impl Host {
        /// Advance one animation frame and draw it
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                (time - self.last_time) as f32
            } else {
                FRAME_MS
            };
            self.last_time = time;

            let arena = self.renderer.arena();
            self.game.frame(arena, dt);
            self.flush();
        }

        /// Push pending events and positions to the page
        fn flush(&mut self) {
            for event in self.game.drain_events() {
                match event {
                    GameEvent::ScoreChanged(score) => update_score(score),
                    GameEvent::Started => {
                        hide("start-screen");
                        update_score(self.game.score());
                    }
                    _ => {}
                }
            }
            self.renderer.render(self.game.state());
            self.renderer.render_stick(self.game.joystick().knob_offset());
        }

        fn start(&mut self) {
            let arena = self.renderer.arena();
            if self.game.phase() == arena_chase::sim::GamePhase::Running {
                self.game.restart(arena, js_sys::Date::now() as u64);
            } else {
                self.game.start(arena);
            }
            self.flush();
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn hide(id: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            let _ = el.set_attribute("style", "display: none");
        }
    }

    /// Write the score into `#score`
    fn update_score(score: u64) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id("score")) {
            el.set_text_content(Some(&score.to_string()));
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            return;
        }

        log::info!("Arena Chase starting...");

        let Some(document) = document() else {
            log::error!("No document");
            return;
        };

        let config = GameConfig::load();
        let mode = config.input.resolve(platform::prefers_coarse_pointer());
        if !mode.shows_joystick() {
            hide("joystickContainer");
        }

        let Some(renderer) = DomRenderer::new(&document) else {
            log::error!("Page is missing #gameArea or #player");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let host = Rc::new(RefCell::new(Host {
            game: Game::new(config, mode, seed),
            renderer,
            last_time: 0.0,
        }));

        if mode.shows_joystick() {
            setup_joystick(&document, host.clone());
        } else {
            setup_keyboard(&document, host.clone());
        }
        setup_taps(&document, host.clone());

        // Start trigger; pages without a start button start right away
        if let Some(btn) = document.get_element_by_id("start-btn") {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                host.borrow_mut().start();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            host.borrow_mut().start();
        }

        update_score(0);
        request_animation_frame(host);

        log::info!("Arena Chase running!");
    }

    fn setup_joystick(document: &Document, host: Rc<RefCell<Host>>) {
        let Some(stick) = document.get_element_by_id("joystickStick") else {
            log::warn!("No #joystickStick, joystick input disabled");
            return;
        };
        let base = document.get_element_by_id("joystickBase");

        // Pointer down - capture the base center and start tracking
        {
            let host = host.clone();
            let stick_clone = stick.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let center = base_center(base.as_ref().unwrap_or(&stick_clone));
                let at = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                host.borrow_mut()
                    .game
                    .on_pointer_down(event.pointer_id(), at, center);
                let _ = stick_clone.set_pointer_capture(event.pointer_id());
            });
            let _ = stick.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move
        {
            let host = host.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let at = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                host.borrow_mut().game.on_pointer_move(event.pointer_id(), at);
            });
            let _ = stick.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up / cancel
        for name in ["pointerup", "pointercancel"] {
            let host = host.clone();
            let stick_clone = stick.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut h = host.borrow_mut();
                if name == "pointercancel" {
                    h.game.on_pointer_cancel(event.pointer_id());
                } else {
                    h.game.on_pointer_up(event.pointer_id());
                }
                let _ = stick_clone.release_pointer_capture(event.pointer_id());
            });
            let _ = stick.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keep the page from scrolling while dragging
        if let Some(container) = document.get_element_by_id("joystickContainer") {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
                event.prevent_default();
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = container.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    fn base_center(el: &Element) -> Vec2 {
        let rect = el.get_bounding_client_rect();
        Vec2::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
        )
    }

    fn setup_keyboard(document: &Document, host: Rc<RefCell<Host>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut h = host.borrow_mut();
            let arena = h.renderer.arena();
            if h.game.on_key_down(&event.key(), arena) {
                event.prevent_default();
            }
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_taps(document: &Document, host: Rc<RefCell<Host>>) {
        if !host.borrow().game.config().tap_to_remove {
            return;
        }
        let Some(area) = document.get_element_by_id("gameArea") else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let mut h = host.borrow_mut();
            let target_id = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| DomRenderer::enemy_id(&el));
            let credited = match target_id {
                Some(id) => h.game.on_enemy_tapped(id),
                None => {
                    let client = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                    let at = h.renderer.to_arena(client);
                    h.game.on_tap(at)
                }
            };
            if credited.is_some() {
                h.flush();
            }
        });
        let _ = area.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(host, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(host: Rc<RefCell<Host>>, time: f64) {
        host.borrow_mut().frame(time);
        request_animation_frame(host);
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
    log::info!("Arena Chase (native) starting...");
    log::info!("Native mode is headless - serve the wasm build for the playable version");

    println!("\nRunning headless demo...");
    demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Sweep the joystick in a slow circle for a minute of game time
#[cfg(not(target_arch = "wasm32"))]
fn demo() {
    use arena_chase::consts::FRAME_MS;
    use arena_chase::sim::{Arena, InputMode};
    use arena_chase::{Game, GameConfig, Variant};
    use glam::Vec2;

    let arena = Arena::new(800.0, 600.0);
    let config = GameConfig::from_variant(Variant::Frenzy);
    let mut game = Game::new(config, InputMode::Joystick, 2024);
    game.start(arena);

    let center = Vec2::new(100.0, 500.0);
    game.on_pointer_down(1, center, center);

    let frames = 60 * 60;
    for frame in 0..frames {
        let angle = frame as f32 * 0.01;
        let at = center + Vec2::new(angle.cos(), angle.sin()) * 60.0;
        game.on_pointer_move(1, at);
        game.frame(arena, FRAME_MS);
    }
    game.on_pointer_up(1);

    let ticks = game.state().time_ticks;
    log::info!(
        "Demo finished after {} ticks: score {}, {} enemies live",
        ticks,
        game.score(),
        game.state().live_count()
    );
    println!(
        "✓ {}/{} frames simulated, score {}, {} enemies on the field",
        ticks,
        frames,
        game.score(),
        game.state().live_count()
    );
}
