// src/scenes/observers.rs
//! Two sliders driving the rotation and colour of two shapes

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt::Write;

use super::scene::Scene;
use super::{clear, title_label};
use crate::ui::components::{Label, ObservedShape, Slider};
use crate::ui::core::{
    Action, DispatchPolicy, Drawable, InputEvent, PointerButton, SceneId, Touchable, dispatch,
};
use crate::ui::observer::{Channel, ObserverHandle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

const TRACK_SIZE: Size = Size::new(500, 20);
const THUMB_SIZE: Size = Size::new(25, 60);
const SHAPE_SIZE: u32 = 100;
/// Gap between the end of a track and its readout
const READOUT_GAP: i32 = 30;

/// Rotation slider on top, colour slider below. Both shapes listen to both.
pub struct ObserversScene {
    bounds: Rectangle,
    title: Label,
    sliders: [Slider; 2],
    readouts: [Label; 2],
    circle: Rc<RefCell<ObservedShape>>,
    square: Rc<RefCell<ObservedShape>>,
    dirty: bool,
}

impl ObserversScene {
    pub fn new(bounds: Rectangle) -> Self {
        let origin = bounds.top_left;
        let circle = Rc::new(RefCell::new(ObservedShape::circle(
            origin + Point::new(150, 160),
            SHAPE_SIZE,
        )));
        let square = Rc::new(RefCell::new(ObservedShape::square(
            origin + Point::new(400, 160),
            SHAPE_SIZE,
        )));

        let mut sliders = [
            Slider::new(origin + Point::new(400, 330), TRACK_SIZE, THUMB_SIZE)
                .with_channel(Channel::Rotation),
            Slider::new(origin + Point::new(400, 420), TRACK_SIZE, THUMB_SIZE)
                .with_channel(Channel::Color),
        ];
        let circle_handle: ObserverHandle = circle.clone();
        let square_handle: ObserverHandle = square.clone();
        for slider in sliders.iter_mut() {
            slider.register_observer(&circle_handle);
            slider.register_observer(&square_handle);
        }

        let readouts = sliders.each_ref().map(|slider| {
            let track = slider.track();
            let anchor = Point::new(
                track.top_left.x + track.size.width as i32 + READOUT_GAP,
                track.top_left.y + 5,
            );
            Label::new(anchor, "")
        });

        let mut scene = Self {
            bounds,
            title: title_label(bounds, "Observers"),
            sliders,
            readouts,
            circle,
            square,
            dirty: true,
        };
        scene.refresh_readouts();
        scene
    }

    pub fn slider(&self, channel: Channel) -> Option<&Slider> {
        self.sliders.iter().find(|s| s.channel() == channel)
    }

    pub fn circle(&self) -> &Rc<RefCell<ObservedShape>> {
        &self.circle
    }

    pub fn square(&self) -> &Rc<RefCell<ObservedShape>> {
        &self.square
    }

    fn refresh_readouts(&mut self) {
        for (slider, readout) in self.sliders.iter().zip(self.readouts.iter_mut()) {
            let mut text = heapless::String::<16>::new();
            let _ = write!(text, "{:.0}", slider.value());
            readout.set_text(&text);
        }
    }

    fn shapes_dirty(&self) -> bool {
        [&self.circle, &self.square]
            .iter()
            .any(|shape| shape.try_borrow().map(|s| s.is_dirty()).unwrap_or(true))
    }
}

impl Scene for ObserversScene {
    fn id(&self) -> SceneId {
        SceneId::Observers
    }

    fn title(&self) -> &str {
        "Observers"
    }

    fn on_deactivate(&mut self) {
        // a drag must not survive leaving the scene
        for slider in self.sliders.iter_mut() {
            slider.handle_event(&InputEvent::PointerUp {
                button: PointerButton::Left,
                position: Point::zero(),
            });
        }
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Action> {
        let result = dispatch(&mut self.sliders, event, DispatchPolicy::Broadcast);
        if self.sliders.iter().any(|s| s.is_dirty()) {
            self.refresh_readouts();
            debug!(
                "Sliders at {:.0} / {:.0}",
                self.sliders[0].value(),
                self.sliders[1].value()
            );
        }
        result.action()
    }

    fn draw_scene<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        clear(self.bounds, display)?;
        self.title.draw(display)?;
        for slider in &self.sliders {
            slider.draw(display)?;
        }
        for readout in &self.readouts {
            readout.draw(display)?;
        }
        self.circle.borrow().draw(display)?;
        self.square.borrow().draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty
            || self.sliders.iter().any(|s| s.is_dirty())
            || self.readouts.iter().any(|r| r.is_dirty())
            || self.shapes_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        self.sliders.iter_mut().for_each(|s| s.mark_clean());
        self.readouts.iter_mut().for_each(|r| r.mark_clean());
        self.circle.borrow_mut().mark_clean();
        self.square.borrow_mut().mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::colors::rgb;

    fn scene() -> ObserversScene {
        ObserversScene::new(Rectangle::new(Point::zero(), Size::new(800, 480)))
    }

    fn drag(scene: &mut ObserversScene, from: Point, to: Point) {
        scene.handle_event(&InputEvent::PointerDown {
            button: PointerButton::Left,
            position: from,
        });
        scene.handle_event(&InputEvent::PointerMoved { position: to });
        scene.handle_event(&InputEvent::PointerUp {
            button: PointerButton::Left,
            position: to,
        });
    }

    #[test]
    fn test_shapes_start_untouched() {
        let s = scene();
        assert_eq!(s.circle().borrow().angle(), 0.0);
        assert_eq!(s.circle().borrow().color(), rgb(0, 255, 0));
        assert_eq!(s.square().borrow().color(), rgb(255, 0, 0));
        assert_eq!(s.readouts[0].text(), "50");
    }

    #[test]
    fn test_rotation_slider_turns_both_shapes() {
        let mut s = scene();
        let track = s.slider(Channel::Rotation).unwrap().track();
        let y = track.center().y;
        drag(
            &mut s,
            Point::new(track.top_left.x, y),
            Point::new(track.top_left.x + 700, y),
        );

        assert_eq!(s.slider(Channel::Rotation).unwrap().value(), 100.0);
        assert_eq!(s.circle().borrow().angle(), 300.0);
        assert_eq!(s.square().borrow().angle(), 300.0);
        assert_eq!(s.readouts[0].text(), "100");
        // the colour slider was not touched
        assert_eq!(s.circle().borrow().color(), rgb(0, 255, 0));
    }

    #[test]
    fn test_color_slider_dims_both_shapes() {
        let mut s = scene();
        let track = s.slider(Channel::Color).unwrap().track();
        drag(&mut s, track.center(), Point::new(0, track.center().y));

        assert_eq!(s.slider(Channel::Color).unwrap().value(), 0.0);
        assert_eq!(s.circle().borrow().color(), rgb(0, 0, 0));
        assert_eq!(s.square().borrow().color(), rgb(0, 0, 0));
        assert_eq!(s.circle().borrow().angle(), 0.0);
    }
}
