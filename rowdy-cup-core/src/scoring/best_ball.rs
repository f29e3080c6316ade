//! Team net aggregation and per-hole winner determination.

use crate::model::HoleResult;

/// Lower of the present team nets on a hole, or `None` until someone on
/// the team has a score.
#[must_use]
pub fn best_ball_net(nets: &[Option<i32>]) -> Option<i32> {
    nets.iter().flatten().copied().min()
}

/// Slot of the player whose net is counting for the team. Ties within
/// a team go to the earlier roster slot.
#[must_use]
pub fn contributing_slot(nets: &[Option<i32>]) -> Option<usize> {
    let best = best_ball_net(nets)?;
    nets.iter().position(|net| *net == Some(best))
}

/// Hole winner from the two team nets. A hole stays undetermined until
/// both sides have a number.
#[must_use]
pub fn hole_result(side_a_net: Option<i32>, side_b_net: Option<i32>) -> HoleResult {
    match (side_a_net, side_b_net) {
        (Some(a), Some(b)) if a < b => HoleResult::SideA,
        (Some(a), Some(b)) if b < a => HoleResult::SideB,
        (Some(_), Some(_)) => HoleResult::Halved,
        _ => HoleResult::Undetermined,
    }
}
