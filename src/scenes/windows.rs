// src/scenes/windows.rs
//! Draggable windows, a question and a message

use alloc::vec::Vec;

use super::scene::Scene;
use super::{clear, title_label};
use crate::ui::components::{Draggable, Label};
use crate::ui::core::{Action, DispatchPolicy, Drawable, InputEvent, SceneId, Touchable, dispatch};
use crate::ui::layouts::{BaseWindow, MessageKind};
use crate::ui::styling::colors::{LIGHT_GRAY, rgb};
use crate::ui::styling::Style;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::info;

/// Windows are kept front to back: index 0 is drawn last and sees events
/// first. A window that takes a press is raised to the front.
pub struct WindowsScene {
    bounds: Rectangle,
    title: Label,
    windows: Vec<BaseWindow>,
    status: Label,
    answer: Option<bool>,
    dirty: bool,
}

impl WindowsScene {
    pub fn new(bounds: Rectangle) -> Self {
        let at = |x: i32, y: i32| bounds.top_left + Point::new(x, y);

        // title bar halfway down the body
        let plain = BaseWindow::new(
            Rectangle::new(at(100, 60), Size::new(300, 300)),
            rgb(100, 50, 90),
            Draggable::new(
                Rectangle::new(at(120, 210), Size::new(200, 20)),
                rgb(200, 200, 150),
            ),
        );
        let surface = BaseWindow::with_title_bar(
            Rectangle::new(at(300, 260), Size::new(300, 200)),
            rgb(240, 240, 240),
            rgb(150, 150, 150),
        );
        let question =
            BaseWindow::question(Rectangle::new(at(440, 40), Size::new(320, 200)), "Are you sure?");
        let message = BaseWindow::message(
            MessageKind::Error,
            Rectangle::new(at(40, 270), Size::new(300, 160)),
            "Error occurred!",
        );

        let status = Label::new(at(10, 10), "No answer yet")
            .with_style(Style::new().with_foreground(LIGHT_GRAY));

        Self {
            bounds,
            title: title_label(bounds, "Windows"),
            windows: alloc::vec![question, message, surface, plain],
            status,
            answer: None,
            dirty: true,
        }
    }

    pub fn windows(&self) -> &[BaseWindow] {
        &self.windows
    }

    /// Last answer given to the question window
    pub fn answer(&self) -> Option<bool> {
        self.answer
    }

    fn raise(&mut self, index: usize) {
        if index > 0 && index < self.windows.len() {
            let window = self.windows.remove(index);
            self.windows.insert(0, window);
            self.dirty = true;
        }
    }
}

impl Scene for WindowsScene {
    fn id(&self) -> SceneId {
        SceneId::Windows
    }

    fn title(&self) -> &str {
        "Windows"
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Action> {
        if let InputEvent::PointerDown { position, .. } = *event {
            if let Some(index) = self.windows.iter().position(|w| w.contains_point(position)) {
                self.raise(index);
            }
        }

        let result = dispatch(&mut self.windows, event, DispatchPolicy::FirstConsumer);
        let action = result.action();
        if let Some(Action::Confirm(ok)) = action {
            info!("Question answered: {}", if ok { "Ok" } else { "Cancel" });
            self.answer = Some(ok);
            self.status
                .set_text(if ok { "Answer: Ok" } else { "Answer: Cancel" });
        }
        action
    }

    fn draw_scene<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        clear(self.bounds, display)?;
        self.title.draw(display)?;
        self.status.draw(display)?;
        for window in self.windows.iter().rev() {
            window.draw(display)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.status.is_dirty() || self.windows.iter().any(|w| w.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        self.status.mark_clean();
        for window in self.windows.iter_mut() {
            window.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
