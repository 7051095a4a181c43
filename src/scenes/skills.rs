// src/scenes/skills.rs
//! The mage skill tree

use super::scene::Scene;
use super::{clear, title_label};
use crate::assets::AssetSource;
use crate::skill_tree::{SkillTreeView, TreeError, mage_tree};
use crate::ui::components::Label;
use crate::ui::core::{Action, Drawable, InputEvent, SceneId, Touchable};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::info;

pub struct SkillsScene {
    bounds: Rectangle,
    title: Label,
    view: SkillTreeView,
    dirty: bool,
}

impl SkillsScene {
    pub fn new(bounds: Rectangle, free_points: u32) -> Result<Self, TreeError> {
        Ok(Self {
            bounds,
            title: title_label(bounds, "Skill tree"),
            view: SkillTreeView::new(mage_tree()?, free_points),
            dirty: true,
        })
    }

    /// Attach icons from `dir`; returns how many were found
    pub fn load_icons(&mut self, source: &(impl AssetSource + ?Sized), dir: &str) -> usize {
        let loaded = self.view.tree_mut().load_icons(source, dir);
        info!("{} of {} skill icons loaded", loaded, self.view.tree().len());
        loaded
    }

    pub fn view(&self) -> &SkillTreeView {
        &self.view
    }
}

impl Scene for SkillsScene {
    fn id(&self) -> SceneId {
        SceneId::SkillTree
    }

    fn title(&self) -> &str {
        "Skill tree"
    }

    fn handle_event(&mut self, event: &InputEvent) -> Option<Action> {
        self.view.handle_event(event).action()
    }

    fn draw_scene<D: DrawTarget<Color = Rgb565>>(&self, display: &mut D) -> Result<(), D::Error> {
        clear(self.bounds, display)?;
        self.title.draw(display)?;
        self.view.draw(display)
    }

    fn bounds(&self) -> Rectangle {
        self.bounds
    }

    fn is_dirty(&self) -> bool {
        self.dirty || self.view.is_dirty()
    }

    fn mark_clean(&mut self) {
        self.dirty = false;
        self.title.mark_clean();
        self.view.mark_clean();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skill_tree::NodeState;
    use crate::ui::core::PointerButton;
    use crate::ui::test_support::Canvas;

    fn scene() -> SkillsScene {
        SkillsScene::new(Rectangle::new(Point::zero(), Size::new(800, 480)), 5).unwrap()
    }

    #[test]
    fn test_root_press_spends_a_point() {
        let mut s = scene();
        let tree = s.view().tree();
        let root = tree.root();
        let at = tree.node(root).unwrap().position();

        s.mark_clean();
        s.handle_event(&InputEvent::PointerDown {
            button: PointerButton::Left,
            position: at,
        });

        assert_eq!(s.view().tree().state(root), Ok(NodeState::Activated));
        assert_eq!(s.view().free_points(), 4);
        assert!(s.is_dirty());
    }

    #[test]
    fn test_draws_without_icons() {
        let s = scene();
        let mut canvas = Canvas::new(800, 480);
        s.draw_scene(&mut canvas).unwrap();
        let root = s.view().tree().root();
        let at = s.view().tree().node(root).unwrap().position();
        assert_eq!(canvas.pixel(at), Some(NodeState::Unlocked.color()));
    }
}
