// src/ui/layouts/window.rs
//! Movable windows with a draggable title bar

use alloc::vec::Vec;

use crate::geometry;
use crate::ui::components::{Button, Draggable, Label};
use crate::ui::core::{
    Action, DispatchPolicy, Drawable, EventResult, InputEvent, Touchable, dispatch,
};
use crate::ui::elements::AnyWidget;
use crate::ui::styling::colors::{MESSAGE_DONE, MESSAGE_ERROR};
use crate::ui::styling::{ColorPalette, Style};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use log::debug;

/// Id of the Ok button of a question window
pub const OK_BUTTON_ID: u16 = 0xFFF0;
/// Id of the Cancel button of a question window
pub const CANCEL_BUTTON_ID: u16 = 0xFFF1;

/// Default height of the title bar
pub const TITLE_BAR_HEIGHT: u32 = 20;

/// Inset of the body text from the base rectangle
const TEXT_INSET: i32 = 10;

const DIALOG_BUTTON_SIZE: Size = Size::new(100, 30);

/// Tint of a message window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Done,
}

impl MessageKind {
    pub fn color(&self) -> Rgb565 {
        match self {
            MessageKind::Error => MESSAGE_ERROR,
            MessageKind::Done => MESSAGE_DONE,
        }
    }
}

/// What a window was built as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Plain,
    Question,
    Message(MessageKind),
}

/// A base rectangle with a draggable title bar and owned children.
///
/// The title bar sees every event first. While it is being dragged the base
/// rectangle and every child move by the same amount, so the layout of the
/// window never changes. Events the title bar does not consume go to the
/// children with the window's [`DispatchPolicy`]; a press that lands on the
/// window surface but on no child is still consumed so windows underneath do
/// not react to it.
#[derive(Clone)]
pub struct BaseWindow {
    base: Rectangle,
    base_color: Rgb565,
    title: Draggable,
    children: Vec<AnyWidget>,
    policy: DispatchPolicy,
    kind: WindowKind,
    dirty: bool,
}

impl BaseWindow {
    pub fn new(base: Rectangle, base_color: Rgb565, title: Draggable) -> Self {
        Self {
            base,
            base_color,
            title,
            children: Vec::new(),
            policy: DispatchPolicy::default(),
            kind: WindowKind::Plain,
            dirty: true,
        }
    }

    /// Window whose title bar spans the top `TITLE_BAR_HEIGHT` pixels of `base`.
    pub fn with_title_bar(base: Rectangle, base_color: Rgb565, bar_color: Rgb565) -> Self {
        let bar = Rectangle::new(base.top_left, Size::new(base.size.width, TITLE_BAR_HEIGHT));
        Self::new(base, base_color, Draggable::new(bar, bar_color))
    }

    /// Window asking `text` with an Ok and a Cancel button.
    ///
    /// Clicking them yields [`Action::Confirm`] with `true` and `false`.
    pub fn question(base: Rectangle, text: &str) -> Self {
        let palette = ColorPalette::default();
        let mut window = Self::with_title_bar(base, palette.surface, palette.border);
        window.kind = WindowKind::Question;
        window.push(body_text(&base, text));

        let y = geometry::bottom_edge(&base) - 40;
        let ok = Rectangle::new(Point::new(base.top_left.x + 50, y), DIALOG_BUTTON_SIZE);
        let cancel = Rectangle::new(Point::new(base.top_left.x + 200, y), DIALOG_BUTTON_SIZE);
        window.push(Button::new(OK_BUTTON_ID, ok, "Ok"));
        window.push(Button::new(CANCEL_BUTTON_ID, cancel, "Cancel"));
        window
    }

    /// Window showing `text` on a base tinted by `kind`.
    pub fn message(kind: MessageKind, base: Rectangle, text: &str) -> Self {
        let palette = ColorPalette::default();
        let mut window = Self::with_title_bar(base, kind.color(), palette.border);
        window.kind = WindowKind::Message(kind);
        window.push(body_text(&base, text));
        window
    }

    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add a child. Its position is absolute, not relative to the window.
    pub fn push(&mut self, widget: impl Into<AnyWidget>) -> &mut Self {
        self.children.push(widget.into());
        self.dirty = true;
        self
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn base(&self) -> Rectangle {
        self.base
    }

    pub fn title_bar(&self) -> &Draggable {
        &self.title
    }

    pub fn children(&self) -> &[AnyWidget] {
        &self.children
    }

    pub fn set_base_color(&mut self, color: Rgb565) {
        self.base_color = color;
        self.dirty = true;
    }

    pub fn set_base_size(&mut self, size: Size) {
        self.base.size = size;
        self.dirty = true;
    }

    /// Move the window so its base starts at `position`.
    pub fn set_position(&mut self, position: Point) {
        let delta = position - self.base.top_left;
        self.translate_mut(delta);
    }

    fn shift_content(&mut self, by: Point) {
        self.base.top_left += by;
        for child in self.children.iter_mut() {
            child.translate_mut(by);
        }
        self.dirty = true;
    }

    /// Replace the button clicks of a question window with its answer
    fn answer(&self, result: EventResult) -> EventResult {
        if self.kind != WindowKind::Question {
            return result;
        }
        match result {
            EventResult::Action(Action::Click(OK_BUTTON_ID)) => {
                EventResult::Action(Action::Confirm(true))
            }
            EventResult::Action(Action::Click(CANCEL_BUTTON_ID)) => {
                EventResult::Action(Action::Confirm(false))
            }
            other => other,
        }
    }
}

fn body_text(base: &Rectangle, text: &str) -> Label {
    let origin = base.top_left + Point::new(TEXT_INSET, TITLE_BAR_HEIGHT as i32 + TEXT_INSET);
    let palette = ColorPalette::default();
    Label::new(origin, text).with_style(Style::new().with_foreground(palette.text_on_surface))
}

impl Drawable for BaseWindow {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.base
            .into_styled(PrimitiveStyle::with_fill(self.base_color))
            .draw(display)?;
        self.title.draw(display)?;
        for child in &self.children {
            child.draw(display)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        geometry::union(&self.base, &Drawable::bounds(&self.title))
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.title.is_dirty() || self.children.iter().any(|c| c.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        for child in self.children.iter_mut() {
            child.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for BaseWindow {
    fn contains_point(&self, point: Point) -> bool {
        geometry::contains(&self.base, point) || self.title.contains_point(point)
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        let before = self.title.position();
        let title_result = self.title.handle_event(event);
        let moved = self.title.position() - before;
        if moved != Point::zero() {
            self.shift_content(moved);
        }
        if title_result.is_consumed() {
            if matches!(event, InputEvent::PointerUp { .. }) {
                debug!("Window moved to {:?}", self.base.top_left);
            }
            return title_result;
        }

        let dispatched = dispatch(&mut self.children, event, self.policy);
        let result = self.answer(dispatched);
        if result.is_consumed() {
            return result;
        }

        match *event {
            InputEvent::PointerDown { position, .. } if self.contains_point(position) => {
                EventResult::Handled
            }
            _ => result,
        }
    }
}

impl Transform for BaseWindow {
    fn translate(&self, by: Point) -> Self {
        let mut moved = self.clone();
        moved.translate_mut(by);
        moved
    }

    fn translate_mut(&mut self, by: Point) -> &mut Self {
        self.title.translate_mut(by);
        self.shift_content(by);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::PointerButton;
    use crate::ui::styling::colors::{COLOR_STROKE, COLOR_SURFACE, LIGHT_GRAY};
    use crate::ui::test_support::Canvas;

    fn down(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    fn up(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerUp {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    fn moved(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerMoved {
            position: Point::new(x, y),
        }
    }

    fn plain() -> BaseWindow {
        let base = Rectangle::new(Point::new(100, 100), Size::new(300, 300));
        let bar = Draggable::new(
            Rectangle::new(Point::new(120, 250), Size::new(200, 20)),
            LIGHT_GRAY,
        );
        let mut window = BaseWindow::new(base, COLOR_SURFACE, bar);
        window.push(Label::new(Point::new(110, 110), "hello"));
        window
    }

    #[test]
    fn test_title_drag_moves_everything() {
        let mut w = plain();
        assert_eq!(w.handle_event(&down(130, 255)), EventResult::Handled);
        w.handle_event(&moved(180, 205));
        assert_eq!(w.base().top_left, Point::new(150, 50));
        assert_eq!(w.title_bar().position(), Point::new(170, 200));
        assert_eq!(
            Drawable::bounds(&w.children()[0]).top_left.x,
            Drawable::bounds(&Label::new(Point::new(160, 60), "hello")).top_left.x
        );

        w.handle_event(&up(180, 205));
        w.handle_event(&moved(300, 300));
        assert_eq!(w.base().top_left, Point::new(150, 50));
    }

    #[test]
    fn test_press_on_surface_is_consumed() {
        let mut w = plain();
        assert_eq!(w.handle_event(&down(390, 390)), EventResult::Handled);
        assert_eq!(w.handle_event(&down(10, 10)), EventResult::NotHandled);
        // the drag only starts on the title bar
        w.handle_event(&moved(50, 50));
        assert_eq!(w.base().top_left, Point::new(100, 100));
    }

    #[test]
    fn test_question_answers() {
        let base = Rectangle::new(Point::new(300, 300), Size::new(300, 200));
        let mut w = BaseWindow::question(base, "Are you sure?");
        assert_eq!(w.kind(), WindowKind::Question);

        // Ok button spans x 350..450, y 460..490
        w.handle_event(&down(360, 470));
        assert_eq!(
            w.handle_event(&up(360, 470)),
            EventResult::Action(Action::Confirm(true))
        );

        // Cancel button spans x 500..600
        w.handle_event(&down(510, 470));
        assert_eq!(
            w.handle_event(&up(510, 470)),
            EventResult::Action(Action::Confirm(false))
        );
    }

    #[test]
    fn test_question_buttons_follow_the_window() {
        let base = Rectangle::new(Point::new(300, 300), Size::new(300, 200));
        let mut w = BaseWindow::question(base, "Are you sure?");
        // grab the title bar and move the window 100 px left
        w.handle_event(&down(310, 305));
        w.handle_event(&moved(210, 305));
        w.handle_event(&up(210, 305));

        w.handle_event(&down(260, 470));
        assert_eq!(
            w.handle_event(&up(260, 470)),
            EventResult::Action(Action::Confirm(true))
        );
    }

    #[test]
    fn test_message_tint() {
        let base = Rectangle::new(Point::new(0, 0), Size::new(100, 60));
        let w = BaseWindow::message(MessageKind::Error, base, "Error occurred!");
        assert_eq!(w.kind(), WindowKind::Message(MessageKind::Error));

        let mut canvas = Canvas::new(100, 60);
        w.draw(&mut canvas).unwrap();
        assert_eq!(canvas.pixel(Point::new(95, 55)), Some(MESSAGE_ERROR));
        assert_eq!(canvas.pixel(Point::new(95, 5)), Some(COLOR_STROKE));
    }

    #[test]
    fn test_done_message_tint() {
        let base = Rectangle::new(Point::new(0, 0), Size::new(100, 60));
        let w = BaseWindow::message(MessageKind::Done, base, "Done!");
        assert_eq!(w.kind(), WindowKind::Message(MessageKind::Done));

        let mut canvas = Canvas::new(100, 60);
        w.draw(&mut canvas).unwrap();
        assert_eq!(canvas.pixel(Point::new(95, 55)), Some(MESSAGE_DONE));
        assert_ne!(canvas.pixel(Point::new(95, 55)), Some(MESSAGE_ERROR));
    }
}
