//! Paddle Duel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent};

    use paddle_duel::Settings;
    use paddle_duel::audio::AudioManager;
    use paddle_duel::consts::*;
    use paddle_duel::platform::{HeldKeys, KeyAction, StartupError};
    use paddle_duel::renderer::RenderState;
    use paddle_duel::sim::{GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: RenderState,
        audio: AudioManager,
        keys: HeldKeys,
        /// Attract mode toggle ('i')
        idle_mode: bool,
        last_time: f64,
        hud_score: Element,
        last_score_text: String,
    }

    impl Game {
        /// Advance one frame
        fn update(&mut self, dt: f32) {
            let dt = dt.min(MAX_FRAME_DT);
            let input = self.keys.tick_input(self.idle_mode);

            for event in tick(&mut self.state, &input, dt) {
                if event.plays_blip() {
                    self.audio.play_blip();
                }
                if let GameEvent::Scored { scorer } = event {
                    log::info!(
                        "Point to {:?} ({})",
                        scorer,
                        self.state.score.text()
                    );
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let quads = self.state.quads();
            match self.render_state.render(&quads) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }

        /// Update the score text in the DOM (only when it changes)
        fn update_hud(&mut self) {
            let text = self.state.score.text();
            if text != self.last_score_text {
                self.hud_score.set_text_content(Some(&text));
                self.last_score_text = text;
            }
        }

        fn handle_key_down(&mut self, key: &str) {
            // First gesture unlocks audio
            self.audio.resume();
            match self.keys.key_down(key) {
                Some(KeyAction::ToggleIdle) => {
                    self.idle_mode = !self.idle_mode;
                    log::info!("Idle mode: {}", self.idle_mode);
                }
                Some(KeyAction::ToggleMute) => {
                    let muted = !self.audio.muted();
                    self.audio.set_muted(muted);
                    log::info!("Muted: {}", muted);
                }
                _ => {}
            }
        }
    }

    pub async fn run() -> Result<(), StartupError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Paddle Duel starting...");

        let settings = Settings::from_location();
        log::info!("Computer AI: {}", settings.ai_mode.as_str());

        let window = web_sys::window().ok_or(StartupError::NoWindow)?;
        let document = window.document().ok_or(StartupError::NoDocument)?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or(StartupError::MissingElement("canvas"))?
            .dyn_into()
            .map_err(|_| StartupError::MissingElement("canvas"))?;
        let hud_score = document
            .get_element_by_id("score")
            .ok_or(StartupError::MissingElement("score"))?;

        // Back the playfield with device pixels
        let dpr = window.device_pixel_ratio();
        let width = (PLAYFIELD_WIDTH as f64 * dpr) as u32;
        let height = (PLAYFIELD_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| StartupError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| StartupError::Adapter(e.to_string()))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await?;

        let mut audio = AudioManager::new(&settings)?;
        audio.start_music()?;

        let seed = js_sys::Date::now() as u64;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(seed, settings.ai_mode),
            render_state,
            audio,
            keys: HeldKeys::default(),
            idle_mode: false,
            last_time: 0.0,
            hud_score,
            last_score_text: String::new(),
        }));

        setup_input_handlers(&window, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Paddle Duel running!");
        Ok(())
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if KeyAction::from_key(&event.key()).is_some() {
                    event.prevent_default();
                }
                game.borrow_mut().handle_key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - key-ups may never arrive
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.release_all();
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

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                FRAME_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run().await.map_err(JsValue::from)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Paddle Duel (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` to play");

    let settings = paddle_duel::Settings::from_args(std::env::args().skip(1));
    attract::run(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless attract-mode match: the reactive AI plays the human side
#[cfg(not(target_arch = "wasm32"))]
mod attract {
    use std::time::{SystemTime, UNIX_EPOCH};

    use paddle_duel::Settings;
    use paddle_duel::consts::FRAME_DT;
    use paddle_duel::sim::{GameEvent, GameState, TickInput, tick};

    /// Simulated length of the demo match
    const DEMO_SECONDS: u32 = 120;

    pub fn run(settings: &Settings) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        log::info!(
            "Attract mode: {}s vs {} AI (seed {})",
            DEMO_SECONDS,
            settings.ai_mode.as_str(),
            seed
        );

        let mut state = GameState::new(seed, settings.ai_mode);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };

        let mut paddle_hits = 0u32;
        let frames = DEMO_SECONDS * (1.0 / FRAME_DT).round() as u32;
        for _ in 0..frames {
            for event in tick(&mut state, &input, FRAME_DT) {
                match event {
                    GameEvent::PaddleHit { .. } => paddle_hits += 1,
                    GameEvent::Scored { scorer } => {
                        log::info!("Point to {:?} ({})", scorer, state.score.text())
                    }
                    GameEvent::WallBounce => {}
                }
            }
        }

        match serde_json::to_string(&state) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not snapshot state: {}", e),
        }
        println!(
            "Final score {} after {} paddle hits ({} ticks)",
            state.score.text(),
            paddle_hits,
            state.time_ticks
        );
    }
}
