// src/ui/core.rs
//! Core UI traits and types for the panelkit widget system

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};

/// Pointer buttons understood by the widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Keyboard keys forwarded by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab,
    Left,
    Right,
    Up,
    Down,
    Char(char),
    /// Any key the host could not map, with its raw code
    Other(i32),
}

/// Discrete input events pumped from the host once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The host window was closed
    Closed,
    PointerDown {
        button: PointerButton,
        position: Point,
    },
    PointerUp {
        button: PointerButton,
        position: Point,
    },
    PointerMoved {
        position: Point,
    },
    KeyDown {
        key: Key,
    },
    KeyUp {
        key: Key,
    },
    Resized {
        width: u32,
        height: u32,
    },
}

impl InputEvent {
    /// Pointer position carried by the event, if it is a pointer event
    pub fn position(&self) -> Option<Point> {
        match *self {
            InputEvent::PointerDown { position, .. }
            | InputEvent::PointerUp { position, .. }
            | InputEvent::PointerMoved { position } => Some(position),
            _ => None,
        }
    }

    /// Shift the pointer position of the event by `delta`
    pub fn translated(&self, delta: Point) -> Self {
        match *self {
            InputEvent::PointerDown { button, position } => InputEvent::PointerDown {
                button,
                position: position + delta,
            },
            InputEvent::PointerUp { button, position } => InputEvent::PointerUp {
                button,
                position: position + delta,
            },
            InputEvent::PointerMoved { position } => InputEvent::PointerMoved {
                position: position + delta,
            },
            other => other,
        }
    }
}

/// Scene identifier for navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SceneId {
    #[default]
    Buttons,
    Observers,
    Windows,
    SkillTree,
    Controls,
}

/// Actions that UI elements can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A button with this id completed a click
    Click(u16),
    /// A question window was answered (`true` for Ok)
    Confirm(bool),
    /// A toggle changed state
    Toggled { id: u16, on: bool },
    /// A drop list item was picked
    Selected { id: u16, index: usize },
    /// Switch to another scene
    NavigateTo(SceneId),
}

/// Result from handling an input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was not handled, pass to next element
    NotHandled,
    /// Event changed state owned by this element
    Handled,
    /// Event completed an interaction that triggers an action
    Action(Action),
}

impl EventResult {
    /// Whether the event counts as consumed
    pub fn is_consumed(&self) -> bool {
        !matches!(self, EventResult::NotHandled)
    }

    pub fn action(&self) -> Option<Action> {
        match self {
            EventResult::Action(action) => Some(*action),
            _ => None,
        }
    }

    /// Combine two results, keeping the most significant one
    ///
    /// An action beats a plain `Handled`, which beats `NotHandled`. Between two
    /// actions the earlier one wins.
    pub fn merge(self, other: EventResult) -> EventResult {
        match (self, other) {
            (EventResult::Action(a), _) => EventResult::Action(a),
            (_, EventResult::Action(b)) => EventResult::Action(b),
            (EventResult::Handled, _) | (_, EventResult::Handled) => EventResult::Handled,
            _ => EventResult::NotHandled,
        }
    }
}

/// How a composite forwards events to its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchPolicy {
    /// Every child sees every event
    Broadcast,
    /// Dispatch stops at the first child that consumes the event.
    ///
    /// When children overlap, the earlier child in insertion order wins even
    /// if it is drawn underneath a later one.
    #[default]
    FirstConsumer,
}

/// Trait for any UI element that can be drawn
pub trait Drawable {
    /// Draw the element to the display. Must not change element state.
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error>;

    /// Get the bounds of this drawable element
    fn bounds(&self) -> Rectangle;

    /// Check if this element needs to be redrawn
    fn is_dirty(&self) -> bool;

    /// Mark this element as clean (already drawn)
    fn mark_clean(&mut self);

    /// Mark this element as dirty (needs redraw)
    fn mark_dirty(&mut self);
}

/// Trait for UI elements that respond to input events
pub trait Touchable {
    /// Check if a point is within this element's hit region
    fn contains_point(&self, point: Point) -> bool;

    /// Handle an input event, returns result indicating if consumed and any action
    fn handle_event(&mut self, event: &InputEvent) -> EventResult;
}

/// Combined trait for interactive drawable elements
pub trait Widget: Drawable + Touchable {}

/// Implement Widget for any type that implements both Drawable and Touchable
impl<T: Drawable + Touchable> Widget for T {}

/// Forward `event` to `children` according to `policy`.
///
/// Pointer moves are always broadcast so that every child can leave its
/// hovered state and in-progress drags keep tracking.
pub fn dispatch<W: Touchable>(
    children: &mut [W],
    event: &InputEvent,
    policy: DispatchPolicy,
) -> EventResult {
    let broadcast = matches!(policy, DispatchPolicy::Broadcast)
        || matches!(event, InputEvent::PointerMoved { .. });

    let mut result = EventResult::NotHandled;
    for child in children.iter_mut() {
        let child_result = child.handle_event(event);
        if !broadcast && child_result.is_consumed() {
            return child_result;
        }
        result = result.merge(child_result);
    }
    result
}
