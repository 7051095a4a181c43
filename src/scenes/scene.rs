// src/scenes/scene.rs
//! Scene trait and the enum that stores scenes of different types

use alloc::boxed::Box;

use super::buttons::ButtonsScene;
use super::controls::ControlsScene;
use super::observers::ObserversScene;
use super::skills::SkillsScene;
use super::windows::WindowsScene;
use crate::ui::core::{Action, InputEvent, SceneId};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A full-screen demo that can be rendered and interacted with
pub trait Scene {
    /// Get the unique identifier for this scene
    fn id(&self) -> SceneId;

    /// Get the title of this scene
    fn title(&self) -> &str;

    /// Called when the scene becomes active
    fn on_activate(&mut self) {}

    /// Called when the scene becomes inactive
    fn on_deactivate(&mut self) {}

    /// Handle an input event, return action if any
    fn handle_event(&mut self, event: &InputEvent) -> Option<Action>;

    /// Update scene state (called once per frame)
    fn update(&mut self) {}

    /// Draw the whole scene, background included
    fn draw_scene<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    fn bounds(&self) -> Rectangle;

    fn is_dirty(&self) -> bool;

    fn mark_clean(&mut self);

    fn mark_dirty(&mut self);
}

/// Scene wrapper enum for storing different scene types
pub enum SceneWrapper {
    Buttons(Box<ButtonsScene>),
    Observers(Box<ObserversScene>),
    Windows(Box<WindowsScene>),
    Skills(Box<SkillsScene>),
    Controls(Box<ControlsScene>),
}

/// Run `$body` with `$s` bound to the wrapped scene
macro_rules! with_scene {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            SceneWrapper::Buttons($s) => $body,
            SceneWrapper::Observers($s) => $body,
            SceneWrapper::Windows($s) => $body,
            SceneWrapper::Skills($s) => $body,
            SceneWrapper::Controls($s) => $body,
        }
    };
}

impl Scene for SceneWrapper {
    fn id(&self) -> SceneId {
        with_scene!(self, s => s.id())
    }

    fn title(&self) -> &str {
        with_scene!(self, s => s.title())
    }

    fn on_activate(&mut self) {
        with_scene!(self, s => s.on_activate())
    }

    fn on_deactivate(&mut self) {
        with_scene!(self, s => s.on_deactivate())
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Action> {
        with_scene!(self, s => s.handle_event(event))
    }

    fn update(&mut self) {
        with_scene!(self, s => s.update())
    }

    fn draw_scene<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        with_scene!(self, s => s.draw_scene(display))
    }

    fn bounds(&self) -> Rectangle {
        with_scene!(self, s => Scene::bounds(s.as_ref()))
    }

    fn is_dirty(&self) -> bool {
        with_scene!(self, s => Scene::is_dirty(s.as_ref()))
    }

    fn mark_clean(&mut self) {
        with_scene!(self, s => Scene::mark_clean(s.as_mut()))
    }

    fn mark_dirty(&mut self) {
        with_scene!(self, s => Scene::mark_dirty(s.as_mut()))
    }
}

impl From<ButtonsScene> for SceneWrapper {
    fn from(scene: ButtonsScene) -> Self {
        SceneWrapper::Buttons(Box::new(scene))
    }
}

impl From<ObserversScene> for SceneWrapper {
    fn from(scene: ObserversScene) -> Self {
        SceneWrapper::Observers(Box::new(scene))
    }
}

impl From<WindowsScene> for SceneWrapper {
    fn from(scene: WindowsScene) -> Self {
        SceneWrapper::Windows(Box::new(scene))
    }
}

impl From<SkillsScene> for SceneWrapper {
    fn from(scene: SkillsScene) -> Self {
        SceneWrapper::Skills(Box::new(scene))
    }
}

impl From<ControlsScene> for SceneWrapper {
    fn from(scene: ControlsScene) -> Self {
        SceneWrapper::Controls(Box::new(scene))
    }
}
