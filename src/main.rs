//! Unicorn Attack entry point
//!
//! The web build runs the interactive game; the native build runs a
//! headless session and reports how far the rider got.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::ops::ControlFlow;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use unicorn_attack::consts::*;
    use unicorn_attack::platform::{FrameClock, intent_for_key, preference_for_key};
    use unicorn_attack::renderer::{Palette, RenderState, build_scene};
    use unicorn_attack::sim::{GameState, Intent, Level, apply_intent, generate_level, update};
    use unicorn_attack::{Camera, FpsCounter, Preference, Settings, StatusLine};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        clock: FrameClock,
        fps: FpsCounter,
        camera: Camera,
        palette: Palette,
        settings: Settings,
        /// Set by the quit intent; the loop stops after the current frame
        quit: bool,
        /// Track crash to log/show the game-over overlay once
        was_ended: bool,
    }

    impl Game {
        fn new(level: Level, settings: Settings) -> Self {
            Self {
                state: GameState::with_mode(level, settings.start_mode),
                render_state: None,
                clock: FrameClock::new(),
                fps: FpsCounter::new(),
                camera: Camera::default(),
                palette: Palette::for_settings(settings.high_contrast),
                settings,
                quit: false,
                was_ended: false,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, time: f64) {
            let dt = self.clock.advance(time);
            self.fps.frame(dt);

            let steps = self.clock.drain_steps(dt);
            if self.state.is_ended() {
                return;
            }
            for _ in 0..steps {
                update(&mut self.state, SIM_DT);
                if self.state.is_ended() {
                    break;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state, &self.camera, &self.palette);
            let clear = self.palette.clear_color();
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, clear) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Route a key-down to the simulation or the settings
        fn handle_key(&mut self, key: &str) {
            if let Some(preference) = preference_for_key(key) {
                self.toggle_preference(preference);
                return;
            }
            let Some(intent) = intent_for_key(key) else {
                return;
            };
            if intent == Intent::Restart {
                self.clock.reset_accumulator();
            }
            if let ControlFlow::Break(()) = apply_intent(&mut self.state, intent) {
                log::info!("Quit requested");
                self.quit = true;
            }
            if intent == Intent::ToggleControlMode
                && self.settings.remember_mode(self.state.control_mode)
            {
                self.settings.save();
            }
        }

        fn toggle_preference(&mut self, preference: Preference) {
            let enabled = self.settings.toggle(preference);
            log::info!("{:?} {}", preference, if enabled { "on" } else { "off" });
            if preference == Preference::HighContrast {
                self.palette = Palette::for_settings(enabled);
            }
            self.settings.save();
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("hud-status") {
                if self.settings.show_fps {
                    let line = StatusLine::capture(&self.state, self.fps.fps());
                    el.set_text_content(Some(&line.to_string()));
                    let _ = el.set_attribute("class", "");
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }

            if let Some(el) = document.get_element_by_id("hud-mode") {
                el.set_text_content(Some(self.state.control_mode.as_str()));
            }

            // Show/hide game over
            let ended = self.state.is_ended();
            if ended != self.was_ended {
                if ended {
                    log::info!(
                        "Run over at x = {:.2} after {:.2}s",
                        self.state.rider.pos.x,
                        self.state.time
                    );
                }
                if let Some(el) = document.get_element_by_id("game-over") {
                    let class = if ended { "" } else { "hidden" };
                    let _ = el.set_attribute("class", class);
                }
                if let Some(el) = document.get_element_by_id("final-distance") {
                    el.set_text_content(Some(&format!("{:.1}", self.state.rider.pos.x)));
                }
                self.was_ended = ended;
            }

            if self.quit {
                if let Some(el) = document.get_element_by_id("quit-screen") {
                    let _ = el.set_attribute("class", "");
                }
            }
        }
    }

    /// Bundled level, or a generated one if it fails to parse
    fn initial_level(settings: &Settings) -> Level {
        match Level::parse(include_str!("../levels/lvl1.txt")) {
            Ok(level) => {
                log::info!("Loaded bundled level ({} platforms)", level.platform_count());
                level
            }
            Err(e) => {
                log::error!("Bundled level is invalid: {}", e);
                generate_level(settings.level_seed, 200)
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Unicorn Attack starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let level = initial_level(&settings);
        let game = Rc::new(RefCell::new(Game::new(level, settings)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let logical = (SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32);
        match RenderState::new(surface, &adapter, width, height, logical).await {
            Ok(render_state) => game.borrow_mut().render_state = Some(render_state),
            Err(e) => log::error!("Failed to create device: {}", e),
        }

        setup_input_handlers(game.clone());

        if let Some(hud) = document.get_element_by_id("hud") {
            let _ = hud.set_attribute("class", "");
        }

        // Start game loop
        request_animation_frame(game);

        log::info!("Unicorn Attack running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            // Edge-triggered: ignore auto-repeat while a key is held
            if event.repeat() {
                return;
            }
            let key = event.key();
            if intent_for_key(&key).is_some() || preference_for_key(&key).is_some() {
                event.prevent_default();
            }
            game.borrow_mut().handle_key(&key);
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let quit = {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            g.update_hud();
            g.quit
        };

        if quit {
            log::info!("Game loop stopped");
            return;
        }
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::process::ExitCode;

    use unicorn_attack::headless::run_for;
    use unicorn_attack::sim::{GameState, Level, generate_level};
    use unicorn_attack::Settings;

    /// Seconds simulated when `--seconds` is not given
    const DEFAULT_SECONDS: f64 = 60.0;
    /// Platforms in a generated level
    const GENERATED_PLATFORMS: usize = 200;

    struct Args {
        level_path: Option<String>,
        settings_path: String,
        seconds: f64,
    }

    fn print_help() {
        println!("Unicorn Attack - headless runner\n");
        println!("Usage: unicorn-attack [LEVEL_FILE] [--seconds N] [--settings PATH]\n");
        println!("Without LEVEL_FILE the settings' level_path is used, or a level is generated.");
        println!("Set RUST_LOG=debug for a per-second status line.");
    }

    /// A run length must be a finite, non-negative number of seconds
    fn parse_seconds(value: &str) -> Result<f64, String> {
        match value.parse::<f64>() {
            Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds),
            _ => Err(format!("invalid --seconds value: {value}")),
        }
    }

    fn parse_args() -> Result<Option<Args>, String> {
        let mut args = Args {
            level_path: None,
            settings_path: Settings::FILE_NAME.to_string(),
            seconds: DEFAULT_SECONDS,
        };

        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" => {
                    print_help();
                    return Ok(None);
                }
                "--seconds" => {
                    let value = iter.next().ok_or("--seconds needs a value")?;
                    args.seconds = parse_seconds(&value)?;
                }
                "--settings" => {
                    args.settings_path = iter.next().ok_or("--settings needs a path")?;
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown option: {other}"));
                }
                path => args.level_path = Some(path.to_string()),
            }
        }
        Ok(Some(args))
    }

    pub fn run() -> ExitCode {
        let args = match parse_args() {
            Ok(Some(args)) => args,
            Ok(None) => return ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                print_help();
                return ExitCode::from(2);
            }
        };

        let settings = Settings::load_from(&args.settings_path);
        let level = match args.level_path.as_ref().or(settings.level_path.as_ref()) {
            Some(path) => match Level::load(path) {
                Ok(level) => level,
                Err(e) => {
                    log::error!("Cannot load level {}: {}", path, e);
                    return ExitCode::FAILURE;
                }
            },
            None => generate_level(settings.level_seed, GENERATED_PLATFORMS),
        };

        let mut state = GameState::with_mode(level, settings.start_mode);
        log::info!(
            "Running {} mode for up to {:.1}s",
            state.control_mode.as_str(),
            args.seconds
        );

        let report = run_for(&mut state, args.seconds);
        if report.survived {
            log::info!("Survived {:.2}s ({} ticks)", report.elapsed, report.ticks);
        } else {
            log::info!("Crashed after {:.2}s ({} ticks)", report.elapsed, report.ticks);
        }
        println!("{}", report.status);
        ExitCode::SUCCESS
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Unicorn Attack (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the playable web version");
    native::run()
}
