// src/ui/elements.rs
//! Concrete UI element enum.
//!
//! Composites need to own heterogeneous child widgets *without* using trait
//! objects. `DrawTarget` is generic, which makes `Drawable` (our trait) **not
//! object-safe**, so children are stored as [`AnyWidget`]. Code that needs to
//! know what a child is matches on [`AnyWidget::kind`] or on the variant.

use crate::ui::components::{Button, Draggable, DropList, Label, ObservedShape, Slider, Toggle};
use crate::ui::core::{Drawable, EventResult, InputEvent, Touchable};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Discriminant of an [`AnyWidget`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Button,
    Slider,
    Draggable,
    Toggle,
    DropList,
    Label,
    Shape,
}

#[derive(Clone)]
pub enum AnyWidget {
    Button(Button),
    Slider(Slider),
    Draggable(Draggable),
    Toggle(Toggle),
    DropList(DropList),
    Label(Label),
    Shape(ObservedShape),
}

/// Run `$body` with `$w` bound to the inner widget of any variant
macro_rules! with_inner {
    ($self:expr, $w:ident => $body:expr) => {
        match $self {
            AnyWidget::Button($w) => $body,
            AnyWidget::Slider($w) => $body,
            AnyWidget::Draggable($w) => $body,
            AnyWidget::Toggle($w) => $body,
            AnyWidget::DropList($w) => $body,
            AnyWidget::Label($w) => $body,
            AnyWidget::Shape($w) => $body,
        }
    };
}

impl AnyWidget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            AnyWidget::Button(_) => WidgetKind::Button,
            AnyWidget::Slider(_) => WidgetKind::Slider,
            AnyWidget::Draggable(_) => WidgetKind::Draggable,
            AnyWidget::Toggle(_) => WidgetKind::Toggle,
            AnyWidget::DropList(_) => WidgetKind::DropList,
            AnyWidget::Label(_) => WidgetKind::Label,
            AnyWidget::Shape(_) => WidgetKind::Shape,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            AnyWidget::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_slider(&self) -> Option<&Slider> {
        match self {
            AnyWidget::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    pub fn as_slider_mut(&mut self) -> Option<&mut Slider> {
        match self {
            AnyWidget::Slider(slider) => Some(slider),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            AnyWidget::Label(label) => Some(label),
            _ => None,
        }
    }
}

impl Drawable for AnyWidget {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        with_inner!(self, w => w.draw(display))
    }

    fn bounds(&self) -> Rectangle {
        with_inner!(self, w => Drawable::bounds(w))
    }

    fn is_dirty(&self) -> bool {
        with_inner!(self, w => w.is_dirty())
    }

    fn mark_clean(&mut self) {
        with_inner!(self, w => w.mark_clean())
    }

    fn mark_dirty(&mut self) {
        with_inner!(self, w => w.mark_dirty())
    }
}

impl Touchable for AnyWidget {
    fn contains_point(&self, point: Point) -> bool {
        with_inner!(self, w => w.contains_point(point))
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        with_inner!(self, w => w.handle_event(event))
    }
}

impl Transform for AnyWidget {
    fn translate(&self, by: Point) -> Self {
        let mut moved = self.clone();
        moved.translate_mut(by);
        moved
    }

    fn translate_mut(&mut self, by: Point) -> &mut Self {
        with_inner!(self, w => {
            w.translate_mut(by);
        });
        self
    }
}

impl From<Button> for AnyWidget {
    fn from(widget: Button) -> Self {
        AnyWidget::Button(widget)
    }
}

impl From<Slider> for AnyWidget {
    fn from(widget: Slider) -> Self {
        AnyWidget::Slider(widget)
    }
}

impl From<Draggable> for AnyWidget {
    fn from(widget: Draggable) -> Self {
        AnyWidget::Draggable(widget)
    }
}

impl From<Toggle> for AnyWidget {
    fn from(widget: Toggle) -> Self {
        AnyWidget::Toggle(widget)
    }
}

impl From<DropList> for AnyWidget {
    fn from(widget: DropList) -> Self {
        AnyWidget::DropList(widget)
    }
}

impl From<Label> for AnyWidget {
    fn from(widget: Label) -> Self {
        AnyWidget::Label(widget)
    }
}

impl From<ObservedShape> for AnyWidget {
    fn from(widget: ObservedShape) -> Self {
        AnyWidget::Shape(widget)
    }
}
