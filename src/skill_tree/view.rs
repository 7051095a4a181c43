//! Skill tree together with its point pool

use core::fmt::Write;

use super::budget::FreePoints;
use super::tree::SkillTree;
use crate::ui::core::{Drawable, EventResult, InputEvent, Touchable};
use crate::ui::styling::colors::WHITE;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_10X20};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use log::info;

/// Where the point counter is drawn
const COUNTER_POSITION: Point = Point::new(10, 10);

/// Owns a [`SkillTree`] and the [`FreePoints`] its activations draw from,
/// and shows the remaining points in the top-left corner.
#[derive(Debug, Clone)]
pub struct SkillTreeView {
    tree: SkillTree,
    points: FreePoints,
    dirty: bool,
}

impl SkillTreeView {
    /// Unlocks the root so the first activation is possible.
    ///
    /// Unlocking the root costs nothing: a fresh view shows all `points`,
    /// and activating the root is the first thing that spends one.
    pub fn new(mut tree: SkillTree, points: u32) -> Self {
        tree.unlock_root();
        Self {
            tree,
            points: FreePoints(points),
            dirty: true,
        }
    }

    pub fn tree(&self) -> &SkillTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut SkillTree {
        &mut self.tree
    }

    pub fn free_points(&self) -> u32 {
        self.points.available()
    }

    pub fn points_mut(&mut self) -> &mut FreePoints {
        &mut self.points
    }

    fn counter_text(&self) -> heapless::String<24> {
        let mut text = heapless::String::new();
        // "Free Points: " plus at most 10 digits always fits
        let _ = write!(text, "Free Points: {}", self.points.available());
        text
    }
}

impl Drawable for SkillTreeView {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.tree.draw(display)?;
        let style = MonoTextStyle::new(&FONT_10X20, WHITE);
        Text::with_baseline(&self.counter_text(), COUNTER_POSITION, style, Baseline::Top)
            .draw(display)?;
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        let counter = Rectangle::new(COUNTER_POSITION, Size::new(230, 20));
        crate::geometry::union(&Drawable::bounds(&self.tree), &counter)
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.tree.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.tree.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl Touchable for SkillTreeView {
    fn contains_point(&self, point: Point) -> bool {
        self.tree
            .ids()
            .filter_map(|id| self.tree.node(id).ok())
            .any(|node| node.hit_test(point))
    }

    /// Presses go to every reachable node; other events are ignored
    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        let InputEvent::PointerDown { button, position } = *event else {
            return EventResult::NotHandled;
        };
        if self
            .tree
            .on_pointer_pressed(position, button, &mut self.points)
        {
            self.dirty = true;
            info!("Skill tree changed, {} free points", self.points.available());
            EventResult::Handled
        } else {
            EventResult::NotHandled
        }
    }
}
