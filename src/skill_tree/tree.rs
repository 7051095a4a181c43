//! Arena of skill nodes and the activation rules

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use super::budget::SkillBudget;
use super::node::{NodeId, NodeKind, NodeState, SkillNode};
use super::TreeError;
use crate::assets::{AssetSource, load_icon};
use crate::geometry;
use crate::ui::core::{Drawable, PointerButton};
use crate::ui::styling::colors::WHITE;
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_6X10};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use log::{debug, warn};

/// Width of the connection lines
const LINK_WIDTH: u32 = 2;
/// Gap between an accumulative node and its level caption
const CAPTION_GAP: i32 = 5;

/// Skill tree stored as a flat arena.
///
/// Node 0 is the root. Every node except the root has exactly one parent,
/// and a node can only be unlocked or activated while its parent is
/// activated: activating a node unlocks its direct children, deactivating
/// it blocks its whole subtree.
///
/// The tree does not own a point budget. Operations that spend or return
/// points take one as an argument.
#[derive(Debug, Clone)]
pub struct SkillTree {
    nodes: Vec<SkillNode>,
    dirty: bool,
}

impl SkillTree {
    /// Tree holding only `root`, blocked.
    pub fn new(mut root: SkillNode) -> Self {
        root.parent = None;
        root.children.clear();
        root.state = NodeState::Blocked;
        root.set_level(0);
        Self {
            nodes: vec![root],
            dirty: true,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`, a tree has at least its root
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids, parents before children
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn node(&self, id: NodeId) -> Result<&SkillNode, TreeError> {
        self.nodes
            .get(id.0)
            .ok_or(TreeError::UnknownNode { index: id.0 })
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SkillNode, TreeError> {
        self.nodes
            .get_mut(id.0)
            .ok_or(TreeError::UnknownNode { index: id.0 })
    }

    pub fn state(&self, id: NodeId) -> Result<NodeState, TreeError> {
        self.node(id).map(|node| node.state)
    }

    pub fn children(&self, id: NodeId) -> Result<&[NodeId], TreeError> {
        self.node(id).map(|node| node.children.as_slice())
    }

    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, TreeError> {
        self.node(id).map(|node| node.parent)
    }

    /// Attach `node` under `parent` and return its id.
    ///
    /// The new node starts unlocked if the parent is already activated,
    /// blocked otherwise.
    pub fn add_child(&mut self, parent: NodeId, mut node: SkillNode) -> Result<NodeId, TreeError> {
        let parent_state = self.state(parent)?;
        let id = NodeId(self.nodes.len());

        node.parent = Some(parent);
        node.children.clear();
        node.set_level(0);
        node.state = if parent_state == NodeState::Activated {
            NodeState::Unlocked
        } else {
            NodeState::Blocked
        };

        self.nodes.push(node);
        self.node_mut(parent)?.children.push(id);
        self.dirty = true;
        Ok(id)
    }

    /// Make the root reachable. Returns `false` if it already was.
    pub fn unlock_root(&mut self) -> bool {
        let root = &mut self.nodes[0];
        if root.state != NodeState::Blocked {
            return false;
        }
        root.state = NodeState::Unlocked;
        self.dirty = true;
        true
    }

    /// Make `id` reachable. Its parent must be activated.
    ///
    /// Returns `Ok(false)` if the node was not blocked.
    pub fn unlock(&mut self, id: NodeId) -> Result<bool, TreeError> {
        let parent = self.node(id)?.parent;
        match parent {
            None => return Ok(self.unlock_root()),
            Some(parent) if self.state(parent)? != NodeState::Activated => {
                return Err(TreeError::ParentNotActivated { index: id.0 });
            }
            Some(_) => {}
        }

        let node = self.node_mut(id)?;
        if node.state != NodeState::Blocked {
            return Ok(false);
        }
        node.state = NodeState::Unlocked;
        self.dirty = true;
        Ok(true)
    }

    /// Block `id` and its whole subtree, refunding every point spent in it.
    ///
    /// Returns the number of points refunded.
    pub fn block(
        &mut self,
        id: NodeId,
        budget: &mut (impl SkillBudget + ?Sized),
    ) -> Result<u32, TreeError> {
        self.node(id)?;
        let refunded = self.block_subtree(id);
        budget.refund(refunded);
        Ok(refunded)
    }

    /// Ids below `id`, parents before children
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(node) = self.nodes.get(id.0) else {
            return out;
        };
        let mut stack: Vec<NodeId> = node.children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.nodes[next.0].children.iter().rev().copied());
        }
        out
    }

    /// Apply a pointer press at `point` to every reachable node.
    ///
    /// Nodes are visited parent before children. Blocked nodes and their
    /// subtrees are skipped; every node below a blocked node is blocked too.
    /// Returns `true` if any node changed.
    pub fn on_pointer_pressed(
        &mut self,
        point: Point,
        button: PointerButton,
        budget: &mut (impl SkillBudget + ?Sized),
    ) -> bool {
        let mut changed = false;
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if self.nodes[id.0].state == NodeState::Blocked {
                continue;
            }
            changed |= self.press_node(id, point, button, budget);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        if changed {
            self.dirty = true;
        }
        changed
    }

    fn press_node(
        &mut self,
        id: NodeId,
        point: Point,
        button: PointerButton,
        budget: &mut (impl SkillBudget + ?Sized),
    ) -> bool {
        let node = &self.nodes[id.0];
        if !node.hit_test(point) {
            return false;
        }
        let state = node.state;

        match (node.kind, button) {
            (NodeKind::Hit { .. }, PointerButton::Middle) => false,
            (NodeKind::Hit { .. }, _) => match state {
                NodeState::Unlocked => self.activate(id, budget),
                NodeState::Activated => {
                    self.nodes[id.0].state = NodeState::Unlocked;
                    let refunded = 1 + self.block_children(id);
                    budget.refund(refunded);
                    debug!("Node {} deactivated, {} points back", id.0, refunded);
                    true
                }
                NodeState::Blocked => false,
            },
            (NodeKind::Accumulative { .. }, PointerButton::Left) => match state {
                NodeState::Unlocked => self.activate(id, budget),
                NodeState::Activated => self.level_up(id, budget),
                NodeState::Blocked => false,
            },
            (NodeKind::Accumulative { level, .. }, PointerButton::Right)
                if state == NodeState::Activated =>
            {
                let level = level.saturating_sub(1);
                self.nodes[id.0].set_level(level);
                let mut refunded = 1;
                if level == 0 {
                    self.nodes[id.0].state = NodeState::Unlocked;
                    refunded += self.block_children(id);
                }
                budget.refund(refunded);
                debug!("Node {} down to level {}", id.0, level);
                true
            }
            _ => false,
        }
    }

    /// Unlocked to activated, spending one point
    fn activate(&mut self, id: NodeId, budget: &mut (impl SkillBudget + ?Sized)) -> bool {
        if !budget.try_spend() {
            debug!("No free points to activate node {}", id.0);
            return false;
        }
        let node = &mut self.nodes[id.0];
        node.state = NodeState::Activated;
        node.set_level(1);
        let children = node.children.clone();
        for child in children {
            let child = &mut self.nodes[child.0];
            if child.state == NodeState::Blocked {
                child.state = NodeState::Unlocked;
            }
        }
        debug!("Node {} activated", id.0);
        true
    }

    fn level_up(&mut self, id: NodeId, budget: &mut (impl SkillBudget + ?Sized)) -> bool {
        let NodeKind::Accumulative {
            level, max_level, ..
        } = self.nodes[id.0].kind
        else {
            return false;
        };
        if level >= max_level || !budget.try_spend() {
            return false;
        }
        self.nodes[id.0].set_level(level + 1);
        debug!("Node {} up to level {}", id.0, level + 1);
        true
    }

    /// Block every child subtree of `id`; returns the points they held
    fn block_children(&mut self, id: NodeId) -> u32 {
        let children = self.nodes[id.0].children.clone();
        children
            .into_iter()
            .map(|child| self.block_subtree(child))
            .sum()
    }

    /// Block `id` and everything below it, resetting levels; returns the
    /// points they held
    fn block_subtree(&mut self, id: NodeId) -> u32 {
        let mut freed = 0;
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let node = &mut self.nodes[next.0];
            freed += node.spent();
            node.state = NodeState::Blocked;
            node.set_level(0);
            stack.extend(node.children.iter().copied());
        }
        self.dirty = true;
        freed
    }

    /// Load `dir/icon_<name>.raw` for every node from `source`.
    ///
    /// Missing or malformed icons are logged and skipped; the node is drawn
    /// without one. Returns how many icons were loaded.
    pub fn load_icons(&mut self, source: &(impl AssetSource + ?Sized), dir: &str) -> usize {
        let mut loaded = 0;
        for node in self.nodes.iter_mut() {
            let path = format!("{}/icon_{}.raw", dir, node.icon_name());
            match load_icon(source, &path, node.extent()) {
                Ok(icon) => {
                    node.set_icon(icon);
                    loaded += 1;
                }
                Err(e) => warn!("Icon {} not loaded: {}", path, e),
            }
        }
        self.dirty = true;
        loaded
    }

    fn draw_node<D: DrawTarget<Color = Rgb565>>(
        &self,
        id: NodeId,
        display: &mut D,
    ) -> Result<(), D::Error> {
        let node = &self.nodes[id.0];
        let color = node.state.color();
        let link = PrimitiveStyle::with_stroke(color, LINK_WIDTH);

        for child in &node.children {
            Line::new(node.position, self.nodes[child.0].position)
                .into_styled(link)
                .draw(display)?;
            self.draw_node(*child, display)?;
        }

        let fill = PrimitiveStyle::with_fill(color);
        match node.kind {
            NodeKind::Hit { radius } => {
                Circle::with_center(node.position, radius * 2)
                    .into_styled(fill)
                    .draw(display)?;
            }
            NodeKind::Accumulative { size, .. } => {
                node.bounds().into_styled(fill).draw(display)?;
                if let Some(caption) = node.level_text() {
                    let half = (size / 2) as i32;
                    let origin = node.position + Point::new(-half, half + CAPTION_GAP);
                    let style = MonoTextStyle::new(&FONT_6X10, WHITE);
                    Text::with_baseline(&caption, origin, style, Baseline::Top).draw(display)?;
                }
            }
        }

        if let Some(icon) = node.icon() {
            icon.draw_centered(node.position, display)?;
        }
        Ok(())
    }
}

impl Drawable for SkillTree {
    /// Links and subtrees first, then the node itself on top
    fn draw<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        self.draw_node(self.root(), display)
    }

    fn bounds(&self) -> Rectangle {
        self.nodes
            .iter()
            .map(|node| node.bounds())
            .fold(Rectangle::zero(), |acc, b| geometry::union(&acc, &b))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::StaticSource;
    use crate::skill_tree::budget::{FreePoints, Unlimited};
    use crate::ui::test_support::Canvas;

    /// root at (100, 300) with children a (50, 200) and b (150, 200);
    /// a has child c (50, 100), b has accumulative child d (150, 100)
    struct Fixture {
        tree: SkillTree,
        root: NodeId,
        a: NodeId,
        b: NodeId,
        c: NodeId,
        d: NodeId,
    }

    fn fixture() -> Fixture {
        let mut tree = SkillTree::new(SkillNode::hit(Point::new(100, 300), "lightning"));
        let root = tree.root();
        let a = tree
            .add_child(root, SkillNode::hit(Point::new(50, 200), "shuriken"))
            .unwrap();
        let b = tree
            .add_child(root, SkillNode::hit(Point::new(150, 200), "bomb"))
            .unwrap();
        let c = tree
            .add_child(a, SkillNode::hit(Point::new(50, 100), "shield"))
            .unwrap();
        let d = tree
            .add_child(b, SkillNode::accumulative(Point::new(150, 100), "rect_chain"))
            .unwrap();
        tree.unlock_root();
        Fixture {
            tree,
            root,
            a,
            b,
            c,
            d,
        }
    }

    fn left(tree: &mut SkillTree, at: Point, budget: &mut impl SkillBudget) -> bool {
        tree.on_pointer_pressed(at, PointerButton::Left, budget)
    }

    fn right(tree: &mut SkillTree, at: Point, budget: &mut impl SkillBudget) -> bool {
        tree.on_pointer_pressed(at, PointerButton::Right, budget)
    }

    #[test]
    fn test_activation_unlocks_direct_children_only() {
        let Fixture {
            mut tree,
            root,
            a,
            b,
            c,
            d,
        } = fixture();
        let mut points = FreePoints(5);

        assert!(left(&mut tree, Point::new(100, 300), &mut points));
        assert_eq!(tree.state(root), Ok(NodeState::Activated));
        assert_eq!(tree.state(a), Ok(NodeState::Unlocked));
        assert_eq!(tree.state(b), Ok(NodeState::Unlocked));
        assert_eq!(tree.state(c), Ok(NodeState::Blocked));
        assert_eq!(tree.state(d), Ok(NodeState::Blocked));
        assert_eq!(points.available(), 4);
    }

    #[test]
    fn test_deactivation_blocks_whole_subtree() {
        let Fixture {
            mut tree,
            root,
            a,
            b,
            c,
            d,
        } = fixture();
        let mut points = FreePoints(5);
        left(&mut tree, Point::new(100, 300), &mut points);
        left(&mut tree, Point::new(50, 200), &mut points);
        left(&mut tree, Point::new(150, 200), &mut points);
        left(&mut tree, Point::new(150, 100), &mut points);
        assert_eq!(tree.state(c), Ok(NodeState::Unlocked));
        assert_eq!(tree.state(d), Ok(NodeState::Activated));
        assert_eq!(points.available(), 1);

        // right press toggles hit nodes too
        assert!(right(&mut tree, Point::new(100, 300), &mut points));
        assert_eq!(tree.state(root), Ok(NodeState::Unlocked));
        for id in tree.descendants(root) {
            assert_eq!(tree.state(id), Ok(NodeState::Blocked));
        }
        assert_eq!(tree.node(d).unwrap().level(), 0);
        assert_eq!(points.available(), 5);
        let _ = (a, b);
    }

    #[test]
    fn test_blocked_nodes_ignore_presses() {
        let Fixture { mut tree, a, .. } = fixture();
        assert!(!left(&mut tree, Point::new(50, 200), &mut Unlimited));
        assert_eq!(tree.state(a), Ok(NodeState::Blocked));
    }

    #[test]
    fn test_empty_budget_refuses_activation() {
        let Fixture { mut tree, root, .. } = fixture();
        let mut points = FreePoints(0);
        assert!(!left(&mut tree, Point::new(100, 300), &mut points));
        assert_eq!(tree.state(root), Ok(NodeState::Unlocked));
    }

    #[test]
    fn test_middle_button_and_misses_do_nothing() {
        let Fixture { mut tree, root, .. } = fixture();
        assert!(!tree.on_pointer_pressed(
            Point::new(100, 300),
            PointerButton::Middle,
            &mut Unlimited
        ));
        assert!(!left(&mut tree, Point::new(124, 300), &mut Unlimited));
        assert_eq!(tree.state(root), Ok(NodeState::Unlocked));
    }

    #[test]
    fn test_accumulative_levels() {
        let Fixture {
            mut tree, b, d, ..
        } = fixture();
        let mut points = FreePoints(10);
        left(&mut tree, Point::new(100, 300), &mut points);
        left(&mut tree, Point::new(150, 200), &mut points);
        let at = Point::new(150, 100);

        for _ in 0..7 {
            left(&mut tree, at, &mut points);
        }
        let node = tree.node(d).unwrap();
        assert_eq!(node.level(), 5);
        assert_eq!(node.level_text().unwrap().as_str(), "5 / 5");
        assert_eq!(points.available(), 3);

        assert!(right(&mut tree, at, &mut points));
        assert_eq!(tree.node(d).unwrap().level(), 4);
        assert_eq!(points.available(), 4);

        for _ in 0..4 {
            right(&mut tree, at, &mut points);
        }
        assert_eq!(tree.state(d), Ok(NodeState::Unlocked));
        assert_eq!(tree.node(d).unwrap().level(), 0);
        assert_eq!(points.available(), 8);

        // nothing left to take away
        assert!(!right(&mut tree, at, &mut points));
        assert_eq!(tree.state(b), Ok(NodeState::Activated));
    }

    #[test]
    fn test_unlock_requires_activated_parent() {
        let Fixture {
            mut tree, root, a, c, ..
        } = fixture();
        assert_eq!(
            tree.unlock(c),
            Err(TreeError::ParentNotActivated { index: c.index() })
        );
        assert_eq!(
            tree.unlock(NodeId(99)),
            Err(TreeError::UnknownNode { index: 99 })
        );

        left(&mut tree, Point::new(100, 300), &mut Unlimited);
        assert_eq!(tree.unlock(a), Ok(false));
        assert_eq!(tree.parent(a), Ok(Some(root)));
        assert_eq!(tree.children(a), Ok(&[c][..]));
        assert!(!tree.unlock_root());
    }

    #[test]
    fn test_block_refunds_subtree() {
        let Fixture {
            mut tree, root, a, ..
        } = fixture();
        let mut points = FreePoints(3);
        left(&mut tree, Point::new(100, 300), &mut points);
        left(&mut tree, Point::new(50, 200), &mut points);
        assert_eq!(points.available(), 1);

        assert_eq!(tree.block(root, &mut points), Ok(2));
        assert_eq!(points.available(), 3);
        assert_eq!(tree.state(root), Ok(NodeState::Blocked));
        assert_eq!(tree.state(a), Ok(NodeState::Blocked));
    }

    #[test]
    fn test_child_of_activated_parent_starts_unlocked() {
        let Fixture { mut tree, root, .. } = fixture();
        left(&mut tree, Point::new(100, 300), &mut Unlimited);
        let e = tree
            .add_child(root, SkillNode::hit(Point::new(250, 200), "eye"))
            .unwrap();
        assert_eq!(tree.state(e), Ok(NodeState::Unlocked));
        assert_eq!(
            tree.add_child(NodeId(42), SkillNode::hit(Point::zero(), "eye")),
            Err(TreeError::UnknownNode { index: 42 })
        );
    }

    #[test]
    fn test_draw_uses_state_colors() {
        let Fixture { mut tree, .. } = fixture();
        let mut canvas = Canvas::new(200, 400);
        tree.draw(&mut canvas).unwrap();
        assert_eq!(
            canvas.pixel(Point::new(100, 300)),
            Some(NodeState::Unlocked.color())
        );
        assert_eq!(
            canvas.pixel(Point::new(50, 200)),
            Some(NodeState::Blocked.color())
        );

        left(&mut tree, Point::new(100, 300), &mut Unlimited);
        tree.draw(&mut canvas).unwrap();
        assert_eq!(
            canvas.pixel(Point::new(100, 300)),
            Some(NodeState::Activated.color())
        );
        assert_eq!(
            canvas.pixel(Point::new(50, 200)),
            Some(NodeState::Unlocked.color())
        );
    }

    #[test]
    fn test_missing_icons_are_skipped() {
        const ICON: [u8; 48 * 48 * 2] = [0xFF; 48 * 48 * 2];
        const ASSETS: [(&str, &[u8]); 1] = [("icons/icon_lightning.raw", &ICON)];

        let Fixture { mut tree, root, .. } = fixture();
        let loaded = tree.load_icons(&StaticSource::new(&ASSETS), "icons");
        assert_eq!(loaded, 1);
        assert!(tree.node(root).unwrap().icon().is_some());
    }
}
