// src/scenes/manager.rs
//! Scene manager with navigation and event dispatching

use super::scene::{Scene, SceneWrapper};
use super::scene_for_key;
use crate::ui::core::{Action, InputEvent, SceneId};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;
use log::{info, warn};

/// Most scenes a manager holds
pub const MAX_SCENES: usize = 8;

/// Owns the scenes, tracks the active one and routes events to it
pub struct SceneManager {
    scenes: Vec<SceneWrapper, MAX_SCENES>,
    current: SceneId,
    display_bounds: Rectangle,
}

impl SceneManager {
    pub fn new(initial: SceneId, display_bounds: Rectangle) -> Self {
        Self {
            scenes: Vec::new(),
            current: initial,
            display_bounds,
        }
    }

    /// Register a new scene. Returns `false` if the manager is full.
    pub fn register(&mut self, scene: impl Into<SceneWrapper>) -> bool {
        match self.scenes.push(scene.into()) {
            Ok(()) => true,
            Err(scene) => {
                warn!("No room for scene {:?}", scene.id());
                false
            }
        }
    }

    /// Switch to `id`. Returns `false` if no such scene is registered.
    pub fn navigate_to(&mut self, id: SceneId) -> bool {
        if !self.scenes.iter().any(|s| s.id() == id) {
            warn!("Scene {:?} is not registered", id);
            return false;
        }
        if id == self.current {
            return true;
        }

        if let Some(current) = self.current_scene_mut() {
            current.on_deactivate();
        }
        self.current = id;
        if let Some(scene) = self.current_scene_mut() {
            scene.on_activate();
            scene.mark_dirty();
            info!("Switched to scene '{}'", scene.title());
        }
        true
    }

    fn current_scene_mut(&mut self) -> Option<&mut SceneWrapper> {
        self.scenes.iter_mut().find(|s| s.id() == self.current)
    }

    pub fn current_scene(&self) -> Option<&SceneWrapper> {
        self.scenes.iter().find(|s| s.id() == self.current)
    }

    /// Handle an input event.
    ///
    /// Digit keys switch scenes; everything else goes to the active scene.
    /// Navigation actions coming back from the scene are followed.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<Action> {
        if let InputEvent::KeyDown { key } = *event {
            if let Some(id) = scene_for_key(key) {
                self.navigate_to(id);
                return Some(Action::NavigateTo(id));
            }
        }

        let action = self.current_scene_mut()?.handle_event(event);
        if let Some(Action::NavigateTo(id)) = action {
            self.navigate_to(id);
        }
        action
    }

    /// Update current scene state
    pub fn update(&mut self) {
        if let Some(scene) = self.current_scene_mut() {
            scene.update();
        }
    }

    /// Draw the current scene (full redraw)
    pub fn draw<D: DrawTarget<Color = Rgb565>>(&mut self, display: &mut D) -> Result<(), D::Error> {
        if let Some(scene) = self.current_scene_mut() {
            scene.draw_scene(display)?;
            scene.mark_clean();
        }
        Ok(())
    }

    /// Redraw the current scene only if something changed
    pub fn draw_dirty<D: DrawTarget<Color = Rgb565>>(
        &mut self,
        display: &mut D,
    ) -> Result<bool, D::Error> {
        match self.current_scene_mut() {
            Some(scene) if scene.is_dirty() => {
                scene.draw_scene(display)?;
                scene.mark_clean();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.current_scene().is_some_and(|s| s.is_dirty())
    }

    pub fn current_scene_id(&self) -> SceneId {
        self.current
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn display_bounds(&self) -> Rectangle {
        self.display_bounds
    }
}
