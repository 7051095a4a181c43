// src/ui/components/mod.rs
//! UI components library

use thiserror_no_std::Error;

pub mod button;
pub mod draggable;
pub mod drop_list;
pub mod label;
pub mod shape;
pub mod slider;
pub mod toggle;

pub use button::Button;
pub use draggable::Draggable;
pub use drop_list::DropList;
pub use label::Label;
pub use shape::{ObservedShape, ShapeKind};
pub use slider::Slider;
pub use toggle::Toggle;

/// Error types for component construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A label does not fit its bounded buffer
    #[error("Label too long (max: {max} characters)")]
    LabelTooLong {
        /// Maximum label length
        max: usize,
    },

    /// Too many entries for a bounded list
    #[error("Too many items (max: {max})")]
    TooManyItems {
        /// Maximum item count
        max: usize,
    },

    /// A widget that needs at least one entry got none
    #[error("No items given")]
    Empty,
}
