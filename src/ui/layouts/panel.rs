// src/ui/layouts/panel.rs
//! Panel that stacks widgets in a direction with alignment

use crate::ui::components::WidgetError;
use crate::ui::core::{DispatchPolicy, Drawable, EventResult, InputEvent, Touchable, dispatch};
use crate::ui::elements::AnyWidget;
use crate::ui::styling::Style;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Rectangle, RoundedRectangle};
use heapless::Vec;
use log::trace;

/// Alignment options for panel children
///
/// Determines how children are positioned along the cross-axis
/// (perpendicular to the layout direction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Align to start (left for vertical, top for horizontal)
    #[default]
    Start,
    /// Center alignment
    Center,
    /// Align to end (right for vertical, bottom for horizontal)
    End,
}

/// Direction for panel layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Left to right
    Horizontal,
    /// Top to bottom
    #[default]
    Vertical,
}

/// Composite that owns up to `N` widgets and lays them out one after another.
///
/// Children keep their own size; the panel only moves them. Drawing goes
/// background first, then children in insertion order. Events are forwarded
/// with the panel's [`DispatchPolicy`].
///
/// # Examples
/// ```ignore
/// let mut panel = Panel::<4>::new(
///     Rectangle::new(Point::new(10, 10), Size::new(300, 200)),
///     Direction::Vertical,
/// )
/// .with_alignment(Alignment::Center)
/// .with_spacing(10);
///
/// panel.add(Toggle::new(1, Rectangle::new(Point::zero(), Size::new(60, 30))))?;
/// ```
#[derive(Clone)]
pub struct Panel<const N: usize> {
    bounds: Rectangle,
    direction: Direction,
    alignment: Alignment,
    spacing: u32,
    style: Style,
    corner_radius: u32,
    policy: DispatchPolicy,
    children: Vec<AnyWidget, N>,
    dirty: bool,
}

impl<const N: usize> Panel<N> {
    /// Create an empty panel. Spacing is 0, alignment Start and dispatch
    /// first-consumer-wins until configured otherwise.
    pub fn new(bounds: Rectangle, direction: Direction) -> Self {
        Self {
            bounds,
            direction,
            alignment: Alignment::Start,
            spacing: 0,
            style: Style::default(),
            corner_radius: 0,
            policy: DispatchPolicy::default(),
            children: Vec::new(),
            dirty: true,
        }
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self.layout();
        self
    }

    /// Gap between consecutive children along the layout direction
    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self.layout();
        self
    }

    /// Style controls background, border and padding.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self.layout();
        self
    }

    /// A radius of 0 (default) produces square corners.
    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DispatchPolicy {
        self.policy
    }

    /// Add a child after the existing ones and re-run the layout.
    ///
    /// Returns the index of the child.
    pub fn add(&mut self, widget: impl Into<AnyWidget>) -> Result<usize, WidgetError> {
        self.children
            .push(widget.into())
            .map_err(|_| WidgetError::TooManyItems { max: N })?;
        self.dirty = true;
        self.layout();
        Ok(self.children.len() - 1)
    }

    pub fn children(&self) -> &[AnyWidget] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&AnyWidget> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut AnyWidget> {
        self.children.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn set_bounds(&mut self, bounds: Rectangle) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.dirty = true;
            self.layout();
        }
    }

    /// Move every child to its slot
    fn layout(&mut self) {
        let padding = self.style.padding;
        let available_width = self.bounds.size.width.saturating_sub(padding.horizontal());
        let available_height = self.bounds.size.height.saturating_sub(padding.vertical());
        let start = Point::new(
            self.bounds.top_left.x + padding.left as i32,
            self.bounds.top_left.y + padding.top as i32,
        );

        let mut cursor = start;
        for child in self.children.iter_mut() {
            let current = Drawable::bounds(child);
            let size = current.size;

            let target = match self.direction {
                Direction::Vertical => Point::new(
                    start.x + cross_offset(self.alignment, available_width, size.width),
                    cursor.y,
                ),
                Direction::Horizontal => Point::new(
                    cursor.x,
                    start.y + cross_offset(self.alignment, available_height, size.height),
                ),
            };

            let delta = target - current.top_left;
            if delta != Point::zero() {
                child.translate_mut(delta);
            }

            match self.direction {
                Direction::Vertical => cursor.y += (size.height + self.spacing) as i32,
                Direction::Horizontal => cursor.x += (size.width + self.spacing) as i32,
            }
        }
    }
}

/// Offset along the cross axis for a child of `extent` in `available`
fn cross_offset(alignment: Alignment, available: u32, extent: u32) -> i32 {
    let free = available.saturating_sub(extent);
    match alignment {
        Alignment::Start => 0,
        Alignment::Center => (free / 2) as i32,
        Alignment::End => free as i32,
    }
}

impl<const N: usize> Drawable for Panel<N> {
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        if self.style.background_color.is_some() || self.style.border_color.is_some() {
            let corner_size = Size::new(self.corner_radius, self.corner_radius);
            RoundedRectangle::with_equal_corners(self.bounds, corner_size)
                .into_styled(self.style.to_primitive_style())
                .draw(display)?;
        }

        for child in &self.children {
            child.draw(display)?;
        }
        Ok(())
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.children.iter().any(|c| c.is_dirty())
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        for child in self.children.iter_mut() {
            child.mark_clean();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

impl<const N: usize> Touchable for Panel<N> {
    fn contains_point(&self, point: Point) -> bool {
        crate::geometry::contains(&self.bounds, point)
            || self.children.iter().any(|c| c.contains_point(point))
    }

    fn handle_event(&mut self, event: &InputEvent) -> EventResult {
        let result = dispatch(&mut self.children, event, self.policy);
        if result.is_consumed() {
            trace!("Panel event {:?} -> {:?}", event, result);
        }
        result
    }
}

impl<const N: usize> Transform for Panel<N> {
    fn translate(&self, by: Point) -> Self {
        let mut moved = self.clone();
        moved.translate_mut(by);
        moved
    }

    fn translate_mut(&mut self, by: Point) -> &mut Self {
        self.bounds.top_left += by;
        for child in self.children.iter_mut() {
            child.translate_mut(by);
        }
        self.dirty = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::{Button, Toggle};
    use crate::ui::core::{Action, PointerButton};
    use crate::ui::styling::Padding;

    fn area() -> Rectangle {
        Rectangle::new(Point::new(10, 10), Size::new(200, 200))
    }

    fn toggle(id: u16) -> Toggle {
        Toggle::new(id, Rectangle::new(Point::zero(), Size::new(60, 30)))
    }

    fn press(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Left,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn test_vertical_stack_with_spacing() {
        let mut panel = Panel::<4>::new(area(), Direction::Vertical)
            .with_spacing(10)
            .with_style(Style::new().with_padding(Padding::all(5)));
        panel.add(toggle(1)).unwrap();
        panel.add(toggle(2)).unwrap();

        let first = Drawable::bounds(&panel.children()[0]);
        let second = Drawable::bounds(&panel.children()[1]);
        assert_eq!(first.top_left, Point::new(15, 15));
        assert_eq!(second.top_left, Point::new(15, 55));
    }

    #[test]
    fn test_centered_horizontal_stack() {
        let mut panel = Panel::<2>::new(area(), Direction::Horizontal)
            .with_alignment(Alignment::Center);
        panel.add(toggle(1)).unwrap();
        assert_eq!(
            Drawable::bounds(&panel.children()[0]).top_left,
            Point::new(10, 95)
        );
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut panel = Panel::<1>::new(area(), Direction::Vertical);
        panel.add(toggle(1)).unwrap();
        assert_eq!(
            panel.add(toggle(2)),
            Err(WidgetError::TooManyItems { max: 1 })
        );
    }

    #[test]
    fn test_first_consumer_wins_on_overlap() {
        // layout never overlaps children, so stack the second onto the first
        let mut panel = Panel::<2>::new(area(), Direction::Vertical);
        panel.add(toggle(1)).unwrap();
        panel.add(toggle(2)).unwrap();
        panel.child_mut(1).unwrap().translate_mut(Point::new(0, -30));

        let result = panel.handle_event(&press(20, 20));
        assert_eq!(result, EventResult::Action(Action::Toggled { id: 1, on: true }));
        let second = match panel.child(1).unwrap() {
            AnyWidget::Toggle(t) => t.is_on(),
            _ => unreachable!(),
        };
        assert!(!second);
    }

    #[test]
    fn test_broadcast_reaches_all_children() {
        let mut panel =
            Panel::<2>::new(area(), Direction::Vertical).with_policy(DispatchPolicy::Broadcast);
        panel.add(toggle(1)).unwrap();
        panel.add(toggle(2)).unwrap();
        panel.child_mut(1).unwrap().translate_mut(Point::new(0, -30));

        panel.handle_event(&press(20, 20));
        let on: heapless::Vec<bool, 2> = panel
            .children()
            .iter()
            .filter_map(|c| match c {
                AnyWidget::Toggle(t) => Some(t.is_on()),
                _ => None,
            })
            .collect();
        assert_eq!(on.as_slice(), &[true, true]);
    }

    #[test]
    fn test_translate_moves_children() {
        let mut panel = Panel::<2>::new(area(), Direction::Vertical);
        panel
            .add(Button::new(4, Rectangle::new(Point::zero(), Size::new(50, 20)), "b"))
            .unwrap();
        panel.translate_mut(Point::new(5, 5));
        assert_eq!(
            Drawable::bounds(&panel.children()[0]).top_left,
            Point::new(15, 15)
        );
        assert_eq!(Drawable::bounds(&panel).top_left, Point::new(15, 15));
    }
}
