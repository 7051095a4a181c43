// src/ui/mod.rs
//! Widget toolkit for `embedded-graphics` targets
//!
//! This module provides:
//! - Core traits for drawable and touchable elements, and event dispatch
//! - The press/hover state machine shared by pressable widgets
//! - Components (buttons, sliders, toggles, drop lists, labels, shapes)
//! - Composites (stacking panels, draggable windows)
//! - A push-based observer channel between widgets

pub mod components;
pub mod core;
pub mod elements;
pub mod interaction;
pub mod layouts;
pub mod observer;
pub mod styling;

#[cfg(test)]
pub mod test_support;

// Re-export commonly used items
pub use components::{
    Button, Draggable, DropList, Label, ObservedShape, ShapeKind, Slider, Toggle, WidgetError,
};
pub use core::{
    Action, DispatchPolicy, Drawable, EventResult, InputEvent, Key, PointerButton, SceneId,
    Touchable, Widget, dispatch,
};
pub use elements::{AnyWidget, WidgetKind};
pub use interaction::PressState;
pub use layouts::{Alignment, BaseWindow, Direction, MessageKind, Panel, WindowKind};
pub use observer::{Channel, Notification, Observer, ObserverHandle, Subject};
pub use styling::{ColorPalette, Padding, StateColors, Style};
