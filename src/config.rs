//! Simulator settings
//!
//! The core reads nothing from disk. Front-ends deserialize a
//! [`SimulatorConfig`] from wherever they like (the desktop simulator uses a
//! TOML file) and hand the values to the scenes.

use crate::ui::core::SceneId;
use heapless::String;
use serde::{Deserialize, Serialize};

/// Longest icon directory path accepted
pub const MAX_PATH_LEN: usize = 64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Display width in pixels
    pub width: u32,
    /// Display height in pixels
    pub height: u32,
    /// Window pixels per display pixel
    pub scale: u32,
    /// Minimum time between frames
    pub frame_time_ms: u64,
    pub start_scene: SceneId,
    /// Points available in the skill-tree scene
    pub free_points: u32,
    /// Directory holding `icon_<name>.raw` files
    pub icon_dir: String<MAX_PATH_LEN>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        let mut icon_dir = String::new();
        // "icons" always fits
        let _ = icon_dir.push_str("icons");
        Self {
            width: 800,
            height: 480,
            scale: 1,
            frame_time_ms: 16,
            start_scene: SceneId::Buttons,
            free_points: 5,
            icon_dir,
        }
    }
}

impl SimulatorConfig {
    /// Window scale, never below 1
    pub fn effective_scale(&self) -> u32 {
        self.scale.max(1)
    }
}
