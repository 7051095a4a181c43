//! Desktop simulator for the panelkit widget demos.
//!
//! Renders the panelkit scenes in an SDL2 window via `embedded-graphics-simulator`.
//!
//! # Key bindings
//!
//! | Key | Action            |
//! |-----|-------------------|
//! | 1   | Buttons           |
//! | 2   | Observers         |
//! | 3   | Windows           |
//! | 4   | Skill tree        |
//! | 5   | Controls          |
//! | Q   | Quit              |
//! | Esc | Quit              |
//!
//! Mouse presses, releases and moves are forwarded as pointer events.
//!
//! # Configuration
//!
//! Settings are read from the TOML file named by `PANELKIT_CONFIG`, or from
//! `panelkit.toml` in the working directory if it exists. Missing keys keep
//! their defaults.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    sdl2::{Keycode, MouseButton},
};
use log::{error, info, warn};

use panelkit::assets::{AssetError, AssetSource};
use panelkit::config::SimulatorConfig;
use panelkit::geometry::Viewport;
use panelkit::scenes;
use panelkit::ui::core::{InputEvent, Key, PointerButton};

/// Environment variable naming the config file.
const CONFIG_ENV: &str = "PANELKIT_CONFIG";

/// Config file used when the variable is not set.
const DEFAULT_CONFIG_PATH: &str = "panelkit.toml";

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// Reads assets from the local filesystem, relative to `root`.
struct FsSource {
    root: PathBuf,
}

impl FsSource {
    fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for FsSource {
    fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        std::fs::read(self.root.join(path)).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => AssetError::NotFound,
            _ => AssetError::Io,
        })
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parse a config file body. Keys that are not present keep their defaults.
fn parse_config(text: &str) -> Result<SimulatorConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Load the config named by `PANELKIT_CONFIG`, falling back to defaults.
fn load_config() -> SimulatorConfig {
    let path = match std::env::var(CONFIG_ENV) {
        Ok(path) => PathBuf::from(path),
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => PathBuf::from(DEFAULT_CONFIG_PATH),
        Err(_) => return SimulatorConfig::default(),
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!("Cannot read {}: {}; using defaults", path.display(), e);
            return SimulatorConfig::default();
        }
    };

    match parse_config(&text) {
        Ok(config) => {
            info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Invalid config {}: {}; using defaults", path.display(), e);
            SimulatorConfig::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Input mapping
// ---------------------------------------------------------------------------

fn map_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Left),
        MouseButton::Right => Some(PointerButton::Right),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

fn map_key(keycode: Keycode) -> Option<Key> {
    let key = match keycode {
        Keycode::Escape => Key::Escape,
        Keycode::Return | Keycode::KpEnter => Key::Enter,
        Keycode::Space => Key::Space,
        Keycode::Tab => Key::Tab,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Num1 | Keycode::Kp1 => Key::Char('1'),
        Keycode::Num2 | Keycode::Kp2 => Key::Char('2'),
        Keycode::Num3 | Keycode::Kp3 => Key::Char('3'),
        Keycode::Num4 | Keycode::Kp4 => Key::Char('4'),
        Keycode::Num5 | Keycode::Kp5 => Key::Char('5'),
        Keycode::Q => Key::Char('q'),
        _ => return None,
    };
    Some(key)
}

/// Translate an SDL event into a panelkit input event.
fn map_event(event: SimulatorEvent, viewport: &Viewport) -> Option<InputEvent> {
    match event {
        SimulatorEvent::Quit => Some(InputEvent::Closed),
        SimulatorEvent::KeyDown { keycode, .. } => {
            map_key(keycode).map(|key| InputEvent::KeyDown { key })
        }
        SimulatorEvent::KeyUp { keycode, .. } => {
            map_key(keycode).map(|key| InputEvent::KeyUp { key })
        }
        SimulatorEvent::MouseButtonDown { mouse_btn, point } => {
            map_button(mouse_btn).map(|button| InputEvent::PointerDown {
                button,
                position: viewport.pixel_to_world(point),
            })
        }
        SimulatorEvent::MouseButtonUp { mouse_btn, point } => {
            map_button(mouse_btn).map(|button| InputEvent::PointerUp {
                button,
                position: viewport.pixel_to_world(point),
            })
        }
        SimulatorEvent::MouseMove { point } => Some(InputEvent::PointerMoved {
            position: viewport.pixel_to_world(point),
        }),
        _ => None,
    }
}

fn is_quit(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::Closed
            | InputEvent::KeyDown {
                key: Key::Escape | Key::Char('q'),
            }
    )
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting panelkit simulator");

    let config = load_config();
    let frame_duration = Duration::from_millis(config.frame_time_ms);
    info!(
        "Display: {}×{} (scale {}×)",
        config.width,
        config.height,
        config.effective_scale()
    );
    info!("Keys: 1=Buttons  2=Observers  3=Windows  4=Skills  5=Controls  Q=Quit");

    let assets = FsSource::new(".");
    let mut manager = match scenes::demo(&config, &assets) {
        Ok(manager) => manager,
        Err(e) => {
            error!("Cannot build scenes: {}", e);
            return;
        }
    };

    // SDL2 display and window
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(config.width, config.height));
    let output_settings = OutputSettingsBuilder::new()
        .scale(config.effective_scale())
        .build();
    let mut window = Window::new("Panelkit Simulator", &output_settings);

    // The simulator reports mouse positions in display pixels already
    let viewport = Viewport::default();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    if let Err(e) = manager.draw(&mut display) {
        error!("Draw error: {:?}", e);
    }
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            let Some(event) = map_event(event, &viewport) else {
                continue;
            };
            if is_quit(&event) {
                break 'running;
            }
            if let Some(action) = manager.handle_event(&event) {
                info!("Action {:?}", action);
            }
        }

        // --- Scene update tick --------------------------------------------
        manager.update();

        // --- Render -------------------------------------------------------
        if let Err(e) = manager.draw_dirty(&mut display) {
            error!("Draw error: {:?}", e);
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    info!("Simulator exiting");
}
