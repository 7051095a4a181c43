//! Demo scenes
//!
//! Each scene fills the display and owns its widgets. The [`SceneManager`]
//! keeps one scene active and routes input to it; digit keys 1 to 5 switch
//! between the scenes in [`SCENE_ORDER`].

pub mod buttons;
pub mod controls;
pub mod manager;
pub mod observers;
pub mod scene;
pub mod skills;
pub mod windows;

pub use buttons::ButtonsScene;
pub use controls::ControlsScene;
pub use manager::SceneManager;
pub use observers::ObserversScene;
pub use scene::{Scene, SceneWrapper};
pub use skills::SkillsScene;
pub use windows::WindowsScene;

use crate::assets::AssetSource;
use crate::config::SimulatorConfig;
use crate::skill_tree::TreeError;
use crate::ui::components::Label;
use crate::ui::core::{Key, SceneId};
use crate::ui::styling::colors::LIGHT_GRAY;
use crate::ui::styling::{ColorPalette, Style};
use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Alignment as TextAlignment;

/// Scenes in key order: key `1` opens the first one
pub const SCENE_ORDER: [SceneId; 5] = [
    SceneId::Buttons,
    SceneId::Observers,
    SceneId::Windows,
    SceneId::SkillTree,
    SceneId::Controls,
];

/// Scene opened by a digit key, if any
pub fn scene_for_key(key: Key) -> Option<SceneId> {
    let Key::Char(c) = key else {
        return None;
    };
    let digit = c.to_digit(10)? as usize;
    SCENE_ORDER.get(digit.checked_sub(1)?).copied()
}

/// Fill `bounds` with the palette background
pub(crate) fn clear<D: DrawTarget<Color = Rgb565>>(
    bounds: Rectangle,
    display: &mut D,
) -> Result<(), D::Error> {
    bounds
        .into_styled(PrimitiveStyle::with_fill(ColorPalette::default().background))
        .draw(display)?;
    Ok(())
}

/// Scene title in the top-right corner
pub(crate) fn title_label(bounds: Rectangle, title: &str) -> Label {
    let right = bounds.top_left.x + bounds.size.width as i32;
    let anchor = Point::new(right - 10, bounds.top_left.y + 10);
    Label::new(anchor, title)
        .with_alignment(TextAlignment::Right)
        .with_style(Style::new().with_foreground(LIGHT_GRAY))
}

/// Build a manager holding every demo scene, starting on the configured one.
///
/// Skill icons are read from `assets`; missing icons only cost the picture.
pub fn demo(
    config: &SimulatorConfig,
    assets: &(impl AssetSource + ?Sized),
) -> Result<SceneManager, TreeError> {
    let bounds = Rectangle::new(Point::zero(), Size::new(config.width, config.height));
    let mut manager = SceneManager::new(config.start_scene, bounds);

    let mut skills = SkillsScene::new(bounds, config.free_points)?;
    skills.load_icons(assets, &config.icon_dir);

    manager.register(ButtonsScene::new(bounds));
    manager.register(ObserversScene::new(bounds));
    manager.register(WindowsScene::new(bounds));
    manager.register(skills);
    manager.register(ControlsScene::new(bounds));
    Ok(manager)
}
