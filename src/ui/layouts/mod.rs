// src/ui/layouts/mod.rs
//! Composite widgets that own and arrange other widgets

pub mod panel;
pub mod window;

pub use panel::{Alignment, Direction, Panel};
pub use window::{BaseWindow, CANCEL_BUTTON_ID, MessageKind, OK_BUTTON_ID, WindowKind};
