// src/scenes/controls.rs
//! A toggle, a value slider and a drop list stacked in a panel

use core::fmt::Write;

use super::scene::Scene;
use super::{clear, title_label};
use crate::ui::components::{DropList, Label, Slider, Toggle};
use crate::ui::core::{Action, Drawable, InputEvent, SceneId, Touchable};
use crate::ui::layouts::{Alignment, Direction, Panel};
use crate::ui::observer::Channel;
use crate::ui::styling::colors::{COLOR_STROKE, rgb};
use crate::ui::styling::{Padding, Style};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::{debug, warn};

pub const TOGGLE_ID: u16 = 10;
pub const DROP_LIST_ID: u16 = 11;

const ELEMENTS: [&str; 4] = ["Fire", "Ice", "Lightning", "Earth"];

/// Index of each control in the panel
const TOGGLE_SLOT: usize = 0;
const SLIDER_SLOT: usize = 1;

/// Controls on the left, their current values on the right
pub struct ControlsScene {
    bounds: Rectangle,
    title: Label,
    panel: Panel<3>,
    readouts: [Label; 3],
    dirty: bool,
}

impl ControlsScene {
    pub fn new(bounds: Rectangle) -> Self {
        let area = Rectangle::new(
            bounds.top_left + Point::new(40, 60),
            Size::new(320, bounds.size.height.saturating_sub(100)),
        );
        let style = Style::new()
            .with_background(rgb(30, 30, 40))
            .with_border(COLOR_STROKE, 1)
            .with_padding(Padding::all(20));
        let mut panel: Panel<3> = Panel::new(area, Direction::Vertical)
            .with_alignment(Alignment::Center)
            .with_spacing(30)
            .with_style(style)
            .with_corner_radius(8);

        let toggle = Toggle::new(TOGGLE_ID, Rectangle::new(Point::zero(), Size::new(60, 30)));
        let slider = Slider::with_track(
            Rectangle::new(Point::new(0, 10), Size::new(240, 10)),
            Size::new(16, 30),
        )
        .with_channel(Channel::Value);
        let drop_list = DropList::new(
            DROP_LIST_ID,
            Rectangle::new(Point::zero(), Size::new(200, 30)),
            &ELEMENTS,
        );

        // the drop list goes last so its open rows are drawn over the rest
        for result in [
            panel.add(toggle),
            panel.add(slider),
            drop_list.and_then(|d| panel.add(d)),
        ] {
            if let Err(e) = result {
                warn!("Control not added: {}", e);
            }
        }

        let column = bounds.top_left.x + 420;
        let readouts = [80, 120, 160]
            .map(|y| Label::new(Point::new(column, bounds.top_left.y + y), ""));

        let mut scene = Self {
            bounds,
            title: title_label(bounds, "Controls"),
            panel,
            readouts,
            dirty: true,
        };
        scene.refresh_slider_readout();
        scene.readouts[0].set_text("Toggle: off");
        scene.readouts[2].set_text("Element: Fire");
        scene
    }

    pub fn panel(&self) -> &Panel<3> {
        &self.panel
    }

    fn slider_value(&self) -> Option<f32> {
        self.panel
            .child(SLIDER_SLOT)
            .and_then(|c| c.as_slider())
            .map(|s| s.value())
    }

    fn refresh_slider_readout(&mut self) {
        let Some(value) = self.slider_value() else {
            return;
        };
        let mut text = heapless::String::<24>::new();
        let _ = write!(text, "Value: {:.0}", value);
        self.readouts[1].set_text(&text);
    }
}

impl Scene for ControlsScene {
    fn id(&self) -> SceneId {
        SceneId::Controls
    }

    fn title(&self) -> &str {
        "Controls"
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Action> {
        let action = self.panel.handle_event(event).action();
        match action {
            Some(Action::Toggled { on, .. }) => {
                self.readouts[0].set_text(if on { "Toggle: on" } else { "Toggle: off" });
            }
            Some(Action::Selected { index, .. }) => {
                let mut text = heapless::String::<24>::new();
                let _ = write!(text, "Element: {}", ELEMENTS.get(index).unwrap_or(&"?"));
                self.readouts[2].set_text(&text);
            }
            _ => {}
        }
        if self
            .panel
            .child(SLIDER_SLOT)
            .is_some_and(|c| c.is_dirty())
        {
            self.refresh_slider_readout();
        }
        if action.is_some() {
            debug!("Controls scene: {:?}", action);
        }
        action
    }

    fn draw_scene<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        clear(self.bounds, display)?;
        self.title.draw(display)?;
        self.panel.draw(display)?;
        for readout in &self.readouts {
            readout.draw(display)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.panel.is_dirty() || self.readouts.iter().any(|r| r.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        self.panel.mark_clean();
        self.readouts.iter_mut().for_each(|r| r.mark_clean());
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
