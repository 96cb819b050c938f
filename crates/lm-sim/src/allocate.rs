//! Optimal per-route ant allocation.
//!
//! # Model
//!
//! A route of length `L` needs `L` turns before its first delivery and then
//! delivers one ant per turn, so by turn budget `T` it accounts for
//! `max(0, T - L)` ants.  Summed over all routes this capacity is monotone in
//! `T`, so the smallest sufficient `T` is found by binary search over
//! `[min(L) + 1, min(L) + units]`; the upper end always suffices because the
//! shortest route alone covers `units` ants there.
//!
//! The budget counts the spawn step as its own turn: a plan with budget `T`
//! finishes in `T - 1` simulated turns.

use crate::{SimError, SimResult};

/// Turn budget and the number of ants sent down each route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Minimal budget `T` with `capacity_for_turns(lengths, T) >= units`.
    pub turns: u64,
    /// Ants per route, in route order.  Sums to the fleet size.
    pub quota: Vec<u32>,
}

impl Allocation {
    pub fn total(&self) -> u64 {
        self.quota.iter().map(|&q| q as u64).sum()
    }
}

/// Ants the routes of `lengths` can account for within `turns`.
pub fn capacity_for_turns(lengths: &[usize], turns: u64) -> u64 {
    lengths
        .iter()
        .map(|&len| turns.saturating_sub(len as u64))
        .sum()
}

/// Find the minimal turn budget for `units` ants over routes of the given
/// lengths, and a quota per route that meets it.
///
/// `lengths` is expected in ascending order: any surplus left by the budget
/// is trimmed one ant at a time from the back, i.e. from the longest routes.
pub fn allocate(lengths: &[usize], units: u32) -> SimResult<Allocation> {
    let Some(&shortest) = lengths.iter().min() else {
        return Err(SimError::NoRoutes);
    };
    if units == 0 {
        return Err(SimError::NoUnits);
    }
    let units = units as u64;

    let (mut lo, mut hi) = (shortest as u64 + 1, shortest as u64 + units);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if capacity_for_turns(lengths, mid) >= units {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    let turns = lo;

    // Each entry is at most `units`, which fits in u32.
    let mut quota: Vec<u32> = lengths
        .iter()
        .map(|&len| turns.saturating_sub(len as u64) as u32)
        .collect();

    // The surplus is smaller than the number of non-empty routes (otherwise
    // `turns - 1` would already have sufficed), so one backward pass clears it.
    let mut excess = capacity_for_turns(lengths, turns) - units;
    for q in quota.iter_mut().rev() {
        if excess == 0 {
            break;
        }
        if *q > 0 {
            *q -= 1;
            excess -= 1;
        }
    }
    debug_assert_eq!(excess, 0);

    log::debug!("allocation: budget {turns} turns, quota {quota:?}");
    Ok(Allocation { turns, quota })
}
