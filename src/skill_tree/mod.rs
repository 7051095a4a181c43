//! Skill tree: nodes that unlock their children once activated
//!
//! [`SkillTree`] keeps every node in one arena and enforces the reachability
//! rule, [`SkillBudget`] decides whether an activation can be paid for and
//! [`SkillTreeView`] puts a tree and its point counter on screen.

pub mod budget;
pub mod mage;
pub mod node;
pub mod tree;
pub mod view;

pub use budget::{FreePoints, SkillBudget, Unlimited};
pub use mage::mage_tree;
pub use node::{NodeId, NodeKind, NodeState, SkillNode};
pub use tree::SkillTree;
pub use view::SkillTreeView;

use thiserror_no_std::Error;

/// Error types for tree operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The id does not belong to this tree
    #[error("Unknown node {index}")]
    UnknownNode { index: usize },

    /// The node can only be unlocked below an activated parent
    #[error("Parent of node {index} is not activated")]
    ParentNotActivated { index: usize },
}
