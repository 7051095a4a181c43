// src/ui/components/slider.rs
//! Horizontal slider that publishes its value to observers

use crate::geometry;
use crate::ui::core::{Drawable, EventResult, InputEvent, PointerButton, Touchable};
use crate::ui::interaction::PressState;
use crate::ui::observer::{Channel, Notification, ObserverHandle, Subject};
use crate::ui::styling::StateColors;
use crate::ui::styling::colors::{SLIDER_THUMB, SLIDER_TRACK};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::debug;

/// Highest value a slider reports
pub const MAX_VALUE: f32 = 100.0;

/// Slider with a track and a draggable thumb
///
/// The thumb centre is always kept inside the horizontal span of the track,
/// so [`Slider::value`] is always in `0.0..=100.0`: 0 with the thumb on the
/// left edge of the track and 100 on the right edge.
///
/// Every committed change of the value pushes one [`Notification`] on the
/// slider's [`Channel`] to the registered observers.
#[derive(Clone, Debug)]
pub struct Slider {
    track: Rectangle,
    thumb_size: Size,
    thumb_x: i32,
    channel: Channel,
    state: PressState,
    track_color: Rgb565,
    thumb_colors: StateColors,
    subject: Subject,
    dirty: bool,
}

impl Slider {
    /// Slider whose track of `track_size` is centred on `center`.
    ///
    /// The thumb starts in the middle of the track.
    pub fn new(center: Point, track_size: Size, thumb_size: Size) -> Self {
        // exact half sizes; `Rectangle::with_center` is off by one for even sizes
        let half = Point::new((track_size.width / 2) as i32, (track_size.height / 2) as i32);
        Self::with_track(Rectangle::new(center - half, track_size), thumb_size)
    }

    /// Slider over an explicit track rectangle.
    pub fn with_track(track: Rectangle, thumb_size: Size) -> Self {
        Self {
            track,
            thumb_size,
            thumb_x: track.top_left.x + (track.size.width / 2) as i32,
            channel: Channel::Value,
            state: PressState::Idle,
            track_color: SLIDER_TRACK,
            thumb_colors: StateColors::uniform(SLIDER_THUMB),
            subject: Subject::new(),
            dirty: true,
        }
    }

    /// Channel the notifications are published on.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_track_color(mut self, color: Rgb565) -> Self {
        self.track_color = color;
        self.dirty = true;
        self
    }

    pub fn with_thumb_colors(mut self, colors: StateColors) -> Self {
        self.thumb_colors = colors;
        self.dirty = true;
        self
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn track(&self) -> Rectangle {
        self.track
    }

    /// Rectangle currently covered by the thumb
    pub fn thumb(&self) -> Rectangle {
        Rectangle::with_center(Point::new(self.thumb_x, self.track.center().y), self.thumb_size)
    }

    /// Horizontal centre of the thumb
    pub fn thumb_x(&self) -> i32 {
        self.thumb_x
    }

    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Current value in `0.0..=100.0`
    pub fn value(&self) -> f32 {
        MAX_VALUE * geometry::span_fraction(self.thumb_x, &self.track)
    }

    /// Move the thumb to represent `value` (clamped to `0.0..=100.0`).
    pub fn set_value(&mut self, value: f32) {
        let fraction = value.clamp(0.0, MAX_VALUE) / MAX_VALUE;
        let offset = libm::roundf(fraction * self.track.size.width as f32) as i32;
        self.move_thumb(self.track.top_left.x + offset);
    }

    pub fn register_observer(&mut self, observer: &ObserverHandle) -> bool {
        self.subject.register(observer)
    }

    pub fn unregister_observer(&mut self, observer: &ObserverHandle) -> bool {
        self.subject.unregister(observer)
    }

    pub fn observers(&self) -> &Subject {
        &self.subject
    }

    /// Push the current value to every observer.
    pub fn notify_observers(&mut self) -> usize {
        let notification = Notification {
            channel: self.channel,
            value: self.value(),
        };
        self.subject.notify(notification)
    }

    /// Clamp `x` to the track and commit it; notifies if the thumb moved.
    fn move_thumb(&mut self, x: i32) -> bool {
        let x = geometry::clamp_to_span(x, &self.track);
        if x == self.thumb_x {
            return false;
        }
        self.thumb_x = x;
        self.dirty = true;
        debug!("Slider {:?} value {}", self.channel, self.value());
        self.notify_observers();
        true
    }
}

impl Drawable for Slider {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.track
            .into_styled(PrimitiveStyle::with_fill(self.track_color))
            .draw(display)?;
        self.thumb()
            .into_styled(PrimitiveStyle::with_fill(self.thumb_colors.for_state(self.state)))
            .draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        // the thumb overhangs both ends of the track
        let left = Rectangle::with_center(
            Point::new(self.track.top_left.x, self.track.center().y),
            self.thumb_size,
        );
        let right = left.translate(Point::new(self.track.size.width as i32, 0));
        let thumbs = geometry::union(&left, &right);
        geometry::union(&self.track, &thumbs)
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for Slider {
    /// The track and the thumb are both hit regions
    fn contains_point(&self, point: Point) -> bool {
        geometry::contains(&self.track, point) || geometry::contains(&self.thumb(), point)
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        match *event {
            InputEvent::PointerDown {
                button: PointerButton::Left,
                position,
            } => {
                if !self.state.press(self.contains_point(position)) {
                    return EventResult::NotHandled;
                }
                self.dirty = true;
                self.move_thumb(position.x);
                EventResult::Handled
            }
            InputEvent::PointerMoved { position } => {
                if self.state.is_pressed() {
                    self.move_thumb(position.x);
                } else if self.state.hover(self.contains_point(position)) {
                    self.dirty = true;
                }
                EventResult::NotHandled
            }
            InputEvent::PointerUp {
                button: PointerButton::Left,
                position,
            } => {
                if self.state.release(self.contains_point(position)) {
                    self.dirty = true;
                    EventResult::Handled
                } else {
                    EventResult::NotHandled
                }
            }
            _ => EventResult::NotHandled,
        }
    }
}

impl Transform for Slider {
    fn translate(&self, by: Point) -> Self {
        let mut moved = self.clone();
        moved.translate_mut(by);
        moved
    }

    fn translate_mut(&mut self, by: Point) -> &mut Self {
        self.track.top_left += by;
        self.thumb_x += by.x;
        self.dirty = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::observer::Observer;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        values: Vec<f32>,
    }

    impl Observer for Recorder {
        fn notify(&mut self, notification: Notification) {
            self.values.push(notification.value);
        }
    }

    /// Track spanning x in [100, 400], thumb 20 wide
    fn slider() -> Slider {
        Slider::with_track(
            Rectangle::new(Point::new(100, 190), Size::new(300, 20)),
            Size::new(20, 60),
        )
    }

    fn down(x: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(x, 200),
        }
    }

    fn moved(x: i32) -> InputEvent {
        InputEvent::PointerMoved {
            position: Point::new(x, 200),
        }
    }

    fn up(x: i32) -> InputEvent {
        InputEvent::PointerUp {
            button: PointerButton::Left,
            position: Point::new(x, 200),
        }
    }

    #[test]
    fn test_starts_in_the_middle() {
        assert_eq!(slider().value(), 50.0);
    }

    #[test]
    fn test_centred_slider_starts_at_half() {
        let s = Slider::new(Point::new(400, 330), Size::new(500, 20), Size::new(25, 60));
        assert_eq!(s.track().top_left, Point::new(150, 320));
        assert_eq!(s.thumb_x(), 400);
        assert_eq!(s.value(), 50.0);

        assert_eq!(slider().thumb_x(), 250);
    }

    #[test]
    fn test_click_and_drag_scenario() {
        let mut s = slider();
        assert_eq!(s.handle_event(&down(100)), EventResult::Handled);
        assert_eq!(s.value(), 0.0);

        s.handle_event(&moved(400));
        assert_eq!(s.value(), 100.0);

        s.handle_event(&moved(550));
        assert_eq!(s.thumb_x(), 400);
        assert_eq!(s.value(), 100.0);

        assert_eq!(s.handle_event(&up(550)), EventResult::Handled);
        assert!(!s.is_pressed());

        // no longer pressed, moves are ignored
        s.handle_event(&moved(250));
        assert_eq!(s.value(), 100.0);
    }

    #[test]
    fn test_value_is_monotonic_and_bounded() {
        let mut s = slider();
        s.handle_event(&down(250));
        let mut last = -1.0;
        for x in (0..600).step_by(7) {
            s.handle_event(&moved(x));
            let v = s.value();
            assert!((0.0..=100.0).contains(&v));
            assert!(v >= last);
            last = v;
        }
    }

    #[test]
    fn test_press_outside_is_ignored() {
        let mut s = slider();
        let outside = InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(50, 50),
        };
        assert!(!s.handle_event(&outside).is_consumed());
        assert!(!s.is_pressed());
        s.handle_event(&moved(120));
        assert_eq!(s.value(), 50.0);
    }

    #[test]
    fn test_press_on_thumb_outside_track() {
        let mut s = slider();
        // thumb is 60 tall, track only 20
        let on_thumb = InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(250, 175),
        };
        assert_eq!(s.handle_event(&on_thumb), EventResult::Handled);
        assert!(s.is_pressed());
    }

    #[test]
    fn test_notification_per_value_change() {
        let rec = Rc::new(RefCell::new(Recorder::default()));
        let handle: ObserverHandle = rec.clone();
        let mut s = slider().with_channel(Channel::Rotation);
        s.register_observer(&handle);
        s.register_observer(&handle);

        s.handle_event(&down(100)); // 50 -> 0
        s.handle_event(&moved(100)); // unchanged
        s.handle_event(&moved(250)); // 0 -> 50
        s.handle_event(&moved(700)); // 50 -> 100
        s.handle_event(&moved(800)); // clamped, unchanged
        s.handle_event(&up(800));

        assert_eq!(rec.borrow().values, [0.0, 50.0, 100.0]);

        s.unregister_observer(&handle);
        s.set_value(10.0);
        assert_eq!(rec.borrow().values.len(), 3);
        assert!(s.observers().is_empty());
    }

    #[test]
    fn test_set_value_clamps() {
        let mut s = slider();
        s.set_value(250.0);
        assert_eq!(s.value(), 100.0);
        s.set_value(-3.0);
        assert_eq!(s.value(), 0.0);
        s.set_value(25.0);
        assert_eq!(s.thumb_x(), 175);
    }

    #[test]
    fn test_zero_width_track_reports_zero() {
        let mut s = Slider::with_track(
            Rectangle::new(Point::new(10, 10), Size::new(0, 10)),
            Size::new(4, 4),
        );
        assert_eq!(s.value(), 0.0);
        s.handle_event(&down(10));
        assert_eq!(s.value(), 0.0);
    }
}
