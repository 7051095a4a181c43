// src/ui/components/drop_list.rs
//! Single-choice drop-down list

use crate::geometry;
use crate::ui::components::WidgetError;
use crate::ui::components::label::fit_font;
use crate::ui::core::{Action, Drawable, EventResult, InputEvent, PointerButton, Touchable};
use crate::ui::styling::colors::{BLACK, WHITE};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyleBuilder, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use log::debug;

/// Maximum number of items in a list
pub const MAX_ITEMS: usize = 8;
/// Maximum item label length in characters
pub const MAX_ITEM_LEN: usize = 24;

/// Horizontal inset of the item text
const TEXT_INSET: i32 = 10;

type Item = heapless::String<MAX_ITEM_LEN>;

/// Header showing the selected item; pressing it opens the item list below.
///
/// While open, a press on an item selects it and closes the list. A press
/// anywhere else closes the list without consuming the event, so the widget
/// underneath still receives it.
#[derive(Clone)]
pub struct DropList {
    id: u16,
    header: Rectangle,
    items: heapless::Vec<Item, MAX_ITEMS>,
    selected: usize,
    open: bool,
    font: &'static MonoFont<'static>,
    dirty: bool,
}

impl DropList {
    /// Build a list whose header occupies `header`; every item row has the
    /// same size as the header. The first item starts selected.
    pub fn new(id: u16, header: Rectangle, items: &[&str]) -> Result<Self, WidgetError> {
        if items.is_empty() {
            return Err(WidgetError::Empty);
        }

        let mut list = heapless::Vec::new();
        for text in items {
            let mut item = Item::new();
            item.push_str(text)
                .map_err(|_| WidgetError::LabelTooLong { max: MAX_ITEM_LEN })?;
            list.push(item)
                .map_err(|_| WidgetError::TooManyItems { max: MAX_ITEMS })?;
        }

        let longest = items.iter().copied().max_by_key(|s| s.len()).unwrap_or("");
        let area = Size::new(header.size.width, header.size.height * 2);

        Ok(Self {
            id,
            header,
            items: list,
            selected: 0,
            open: false,
            font: fit_font(longest, area),
            dirty: true,
        })
    }

    pub fn id(&self) -> u16 {
        self.id
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> &str {
        self.items.get(self.selected).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Row rectangle of item `index` in the open list
    pub fn item_bounds(&self, index: usize) -> Rectangle {
        let step = self.header.size.height as i32;
        let offset = Point::new(0, step * (index as i32 + 1));
        Rectangle::new(self.header.top_left + offset, self.header.size)
    }

    /// Rectangle covered by the open list, below the header
    fn list_bounds(&self) -> Rectangle {
        let size = Size::new(
            self.header.size.width,
            self.header.size.height * self.items.len() as u32,
        );
        Rectangle::new(self.item_bounds(0).top_left, size)
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            self.open = open;
            self.dirty = true;
        }
    }

    fn item_at(&self, point: Point) -> Option<usize> {
        (0..self.items.len()).find(|&i| geometry::contains(&self.item_bounds(i), point))
    }

    fn draw_row<D: DrawTarget<Color = Rgb565>>(
        &self,
        display: &mut D,
        row: Rectangle,
        text: &str,
    ) -> Result<(), D::Error> {
        let text_style = MonoTextStyle::new(self.font, BLACK);
        let origin = Point::new(row.top_left.x + TEXT_INSET, row.center().y);
        Text::with_baseline(text, origin, text_style, Baseline::Middle).draw(display)?;
        Ok(())
    }
}

impl Drawable for DropList {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        let frame = PrimitiveStyleBuilder::new()
            .fill_color(WHITE)
            .stroke_color(BLACK)
            .stroke_width(1)
            .build();

        self.header.into_styled(frame).draw(display)?;
        self.draw_row(display, self.header, self.selected_item())?;

        if self.open {
            self.list_bounds().into_styled(frame).draw(display)?;
            for (index, item) in self.items.iter().enumerate() {
                self.draw_row(display, self.item_bounds(index), item)?;
            }
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        if self.open {
            let height = self.header.size.height * (self.items.len() as u32 + 1);
            Rectangle::new(self.header.top_left, Size::new(self.header.size.width, height))
        } else {
            self.header
        }
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

impl Touchable for DropList {
    fn contains_point(&self, point: Point) -> bool {
        geometry::contains(&Drawable::bounds(self), point)
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        let InputEvent::PointerDown {
            button: PointerButton::Left,
            position,
        } = *event
        else {
            return EventResult::NotHandled;
        };

        if geometry::contains(&self.header, position) {
            self.set_open(!self.open);
            return EventResult::Handled;
        }

        if !self.open {
            return EventResult::NotHandled;
        }

        self.set_open(false);
        match self.item_at(position) {
            Some(index) => {
                self.selected = index;
                debug!("DropList {} selected '{}'", self.id, self.selected_item());
                EventResult::Action(Action::Selected { id: self.id, index })
            }
            None => EventResult::NotHandled,
        }
    }
}

impl Transform for DropList {
    fn translate(&self, by: Point) -> Self {
        let mut moved = self.clone();
        moved.translate_mut(by);
        moved
    }

    fn translate_mut(&mut self, by: Point) -> &mut Self {
        self.header.top_left += by;
        self.dirty = true;
        self
    }
}
