// src/scenes/buttons.rs
//! Two buttons and a click counter

use core::fmt::Write;

use super::scene::Scene;
use super::{clear, title_label};
use crate::ui::components::{Button, Label};
use crate::ui::core::{Action, Drawable, InputEvent, SceneId, Touchable};
use crate::ui::layouts::{Alignment, Direction, Panel};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Alignment as TextAlignment;
use log::{debug, warn};

pub const CLICK_BUTTON_ID: u16 = 1;
pub const RESET_BUTTON_ID: u16 = 2;

const BUTTON_SIZE: Size = Size::new(180, 60);

pub struct ButtonsScene {
    bounds: Rectangle,
    title: Label,
    buttons: Panel<2>,
    counter: Label,
    clicks: u32,
    dirty: bool,
}

impl ButtonsScene {
    pub fn new(bounds: Rectangle) -> Self {
        let center = bounds.center();
        let row = Rectangle::with_center(center, Size::new(BUTTON_SIZE.width * 2 + 40, 80));
        let mut buttons: Panel<2> = Panel::new(row, Direction::Horizontal)
            .with_alignment(Alignment::Center)
            .with_spacing(40);

        for (id, text) in [(CLICK_BUTTON_ID, "Click me"), (RESET_BUTTON_ID, "Reset")] {
            let button = Button::new(id, Rectangle::new(Point::zero(), BUTTON_SIZE), text)
                .with_border_radius(8);
            if let Err(e) = buttons.add(button) {
                warn!("Button '{}' not added: {}", text, e);
            }
        }

        let counter = Label::new(center + Point::new(0, 70), "Clicks: 0")
            .with_font(&FONT_10X20)
            .with_alignment(TextAlignment::Center);

        Self {
            bounds,
            title: title_label(bounds, "Buttons"),
            buttons,
            counter,
            clicks: 0,
            dirty: true,
        }
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    fn set_clicks(&mut self, clicks: u32) {
        self.clicks = clicks;
        let mut text = heapless::String::<32>::new();
        // "Clicks: " plus a u32 always fits
        let _ = write!(text, "Clicks: {}", clicks);
        self.counter.set_text(&text);
    }
}

impl Scene for ButtonsScene {
    fn id(&self) -> SceneId {
        SceneId::Buttons
    }

    fn title(&self) -> &str {
        "Buttons"
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Action> {
        let action = self.buttons.handle_event(event).action();
        match action {
            Some(Action::Click(CLICK_BUTTON_ID)) => self.set_clicks(self.clicks.saturating_add(1)),
            Some(Action::Click(RESET_BUTTON_ID)) => self.set_clicks(0),
            _ => {}
        }
        if action.is_some() {
            debug!("Buttons scene: {:?}, {} clicks", action, self.clicks);
        }
        action
    }

    fn draw_scene<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        clear(self.bounds, display)?;
        self.title.draw(display)?;
        self.buttons.draw(display)?;
        self.counter.draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.buttons.is_dirty() || self.counter.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        self.buttons.mark_clean();
        self.counter.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
