//! Point budgets gating node activation

/// Source of skill points.
///
/// The tree asks for one point per activation or level-up and gives points
/// back when nodes are deactivated, levelled down or blocked.
pub trait SkillBudget {
    /// Take one point. Returns `false` if none is left.
    fn try_spend(&mut self) -> bool;

    /// Return `points` previously spent.
    fn refund(&mut self, points: u32);
}

/// A finite pool of free points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FreePoints(pub u32);

impl FreePoints {
    pub fn available(&self) -> u32 {
        self.0
    }
}

impl SkillBudget for FreePoints {
    fn try_spend(&mut self) -> bool {
        match self.0.checked_sub(1) {
            Some(left) => {
                self.0 = left;
                true
            }
            None => false,
        }
    }

    fn refund(&mut self, points: u32) {
        self.0 = self.0.saturating_add(points);
    }
}

/// Budget that never runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unlimited;

impl SkillBudget for Unlimited {
    fn try_spend(&mut self) -> bool {
        true
    }

    fn refund(&mut self, _points: u32) {}
}
