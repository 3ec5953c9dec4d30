use serde::{Deserialize, Serialize};

/// Fixed streak milestones, ascending.
pub const MILESTONES: [u32; 9] = [5, 10, 25, 50, 100, 200, 365, 500, 1000];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneProjection {
    pub days_until: u32,
    pub milestone: u32,
}

/// Next milestone and how many days away it is.
///
/// Past the fixed table the next milestone is the next multiple of 100.
/// An exact multiple of 100 therefore projects onto itself with
/// `days_until == 0`; product has not decided whether that should roll
/// over to the next hundred instead.
pub fn next_milestone(current_streak: u32) -> MilestoneProjection {
    let milestone = MILESTONES
        .iter()
        .copied()
        .find(|&milestone| current_streak < milestone)
        .unwrap_or_else(|| current_streak.div_ceil(100) * 100);

    MilestoneProjection {
        days_until: milestone - current_streak,
        milestone,
    }
}
