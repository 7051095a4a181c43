//! The mage demo tree

use super::node::SkillNode;
use super::tree::SkillTree;
use super::TreeError;
use embedded_graphics::prelude::Point;

/// Layout coordinates are drawn for a 1000x600 board; scale them down to
/// fit an 800x480 display.
fn place(x: i32, y: i32) -> Point {
    Point::new(x * 3 / 4, y * 3 / 4 + 40)
}

/// Three branches under a lightning root: a melee branch, a bomb branch with
/// its own sub-branch, and an eye branch ending in two accumulative nodes.
pub fn mage_tree() -> Result<SkillTree, TreeError> {
    let mut tree = SkillTree::new(SkillNode::hit(place(400, 500), "lightning"));
    let root = tree.root();

    let melee = tree.add_child(root, SkillNode::hit(place(200, 400), "shuriken"))?;
    let bombs = tree.add_child(root, SkillNode::hit(place(400, 400), "bomb"))?;
    let sight = tree.add_child(root, SkillNode::hit(place(600, 400), "eye"))?;

    tree.add_child(melee, SkillNode::hit(place(100, 200), "shield"))?;
    tree.add_child(melee, SkillNode::hit(place(200, 200), "sword"))?;
    tree.add_child(melee, SkillNode::hit(place(300, 200), "earthquake"))?;

    tree.add_child(bombs, SkillNode::hit(place(400, 200), "hand"))?;
    tree.add_child(bombs, SkillNode::hit(place(500, 200), "meteorite"))?;
    let big_bomb = tree.add_child(bombs, SkillNode::hit(place(600, 200), "bomb"))?;
    tree.add_child(big_bomb, SkillNode::hit(place(500, 100), "wind"))?;
    tree.add_child(big_bomb, SkillNode::hit(place(600, 100), "sword"))?;

    tree.add_child(sight, SkillNode::hit(place(700, 200), "eye"))?;
    tree.add_child(sight, SkillNode::hit(place(800, 200), "fireball"))?;
    tree.add_child(sight, SkillNode::accumulative(place(900, 200), "rect_sword"))?;
    tree.add_child(sight, SkillNode::accumulative(place(1000, 200), "rect_chain"))?;

    Ok(tree)
}
