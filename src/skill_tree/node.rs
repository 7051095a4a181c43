//! Skill-tree nodes

use alloc::vec::Vec;
use core::fmt::Write;

use crate::assets::Icon;
use crate::geometry;
use crate::ui::styling::colors::{NODE_ACTIVATED, NODE_BLOCKED, NODE_UNLOCKED};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Default radius of a hit node
pub const HIT_RADIUS: u32 = 24;
/// Default side of an accumulative node
pub const ACCUMULATIVE_SIZE: u32 = 48;
/// Default level cap of an accumulative node
pub const MAX_LEVEL: u8 = 5;

/// Index of a node in its [`SkillTree`](super::SkillTree)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeState {
    /// Out of reach, its parent is not activated
    #[default]
    Blocked,
    /// Reachable, can be activated
    Unlocked,
    Activated,
}

impl NodeState {
    pub fn color(&self) -> Rgb565 {
        match self {
            NodeState::Blocked => NODE_BLOCKED,
            NodeState::Unlocked => NODE_UNLOCKED,
            NodeState::Activated => NODE_ACTIVATED,
        }
    }
}

/// Shape and behaviour of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Round node toggled between unlocked and activated by any press
    Hit { radius: u32 },
    /// Square node levelled up with the left button and down with the right
    Accumulative { size: u32, level: u8, max_level: u8 },
}

impl NodeKind {
    pub fn hit() -> Self {
        NodeKind::Hit { radius: HIT_RADIUS }
    }

    pub fn accumulative() -> Self {
        NodeKind::Accumulative {
            size: ACCUMULATIVE_SIZE,
            level: 0,
            max_level: MAX_LEVEL,
        }
    }
}

/// A node of the tree. Parent and children are ids into the same arena.
#[derive(Debug, Clone)]
pub struct SkillNode {
    pub(crate) position: Point,
    pub(crate) kind: NodeKind,
    pub(crate) state: NodeState,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) icon_name: &'static str,
    pub(crate) icon: Option<Icon>,
}

impl SkillNode {
    /// A blocked node centred on `position`. `icon_name` picks the icon file.
    pub fn new(kind: NodeKind, position: Point, icon_name: &'static str) -> Self {
        Self {
            position,
            kind,
            state: NodeState::Blocked,
            parent: None,
            children: Vec::new(),
            icon_name,
            icon: None,
        }
    }

    pub fn hit(position: Point, icon_name: &'static str) -> Self {
        Self::new(NodeKind::hit(), position, icon_name)
    }

    pub fn accumulative(position: Point, icon_name: &'static str) -> Self {
        Self::new(NodeKind::accumulative(), position, icon_name)
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    pub fn icon_name(&self) -> &'static str {
        self.icon_name
    }

    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = Some(icon);
    }

    /// Current level; hit nodes count as level 1 while activated
    pub fn level(&self) -> u8 {
        match self.kind {
            NodeKind::Accumulative { level, .. } => level,
            NodeKind::Hit { .. } => u8::from(self.state == NodeState::Activated),
        }
    }

    /// Points currently invested in this node
    pub fn spent(&self) -> u32 {
        u32::from(self.level())
    }

    /// Width of the icon that fits the node
    pub fn extent(&self) -> u32 {
        match self.kind {
            NodeKind::Hit { radius } => radius * 2,
            NodeKind::Accumulative { size, .. } => size,
        }
    }

    pub fn hit_test(&self, point: Point) -> bool {
        match self.kind {
            NodeKind::Hit { radius } => geometry::within_radius(self.position, point, radius),
            NodeKind::Accumulative { size, .. } => {
                geometry::within_square(self.position, point, size)
            }
        }
    }

    pub fn bounds(&self) -> Rectangle {
        let extent = self.extent();
        Rectangle::with_center(self.position, Size::new(extent, extent))
    }

    /// "level / max" caption of an accumulative node
    pub fn level_text(&self) -> Option<heapless::String<12>> {
        let NodeKind::Accumulative {
            level, max_level, ..
        } = self.kind
        else {
            return None;
        };
        let mut text = heapless::String::new();
        write!(text, "{} / {}", level, max_level).ok()?;
        Some(text)
    }

    pub(crate) fn set_level(&mut self, new_level: u8) {
        if let NodeKind::Accumulative { level, .. } = &mut self.kind {
            *level = new_level;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_node_uses_strict_radius() {
        let node = SkillNode::hit(Point::new(400, 500), "lightning");
        assert!(node.hit_test(Point::new(400, 500)));
        assert!(node.hit_test(Point::new(423, 500)));
        assert!(!node.hit_test(Point::new(424, 500)));
        assert!(!node.hit_test(Point::new(418, 518)));
    }

    #[test]
    fn test_accumulative_node_uses_square() {
        let node = SkillNode::accumulative(Point::new(100, 100), "rect_sword");
        assert!(node.hit_test(Point::new(123, 77)));
        assert!(!node.hit_test(Point::new(124, 100)));
        assert_eq!(node.level_text().unwrap().as_str(), "0 / 5");
    }

    #[test]
    fn test_level_of_hit_node() {
        let mut node = SkillNode::hit(Point::zero(), "eye");
        assert_eq!(node.level(), 0);
        node.state = NodeState::Activated;
        assert_eq!(node.spent(), 1);
        assert!(node.level_text().is_none());
    }
}
