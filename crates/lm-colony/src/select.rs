//! Near-disjoint route selection.
//!
//! # Algorithm
//!
//! 1. Stable-sort all routes by length.  The shortest is the *best route*
//!    and always leads the result.
//! 2. Scan the remaining routes shortest first.  A candidate is accepted
//!    when at most `tolerance` of its interior rooms are already used by
//!    candidates accepted before it; its interior rooms are then marked as
//!    used.  The best route takes no part in this count.  The scan stops
//!    once the best route plus the accepted candidates reach `max_count`.
//! 3. Drop every accepted route whose first hop repeats the first hop of a
//!    route kept before it, the best route included, so parallel routes
//!    split right at the start.
//!
//! Any pair of selected routes other than the best one shares at most
//! `tolerance` interior rooms.

use std::collections::HashSet;

use lm_core::RoomId;

use crate::{ColonyError, ColonyResult, Route};

// ── RouteSet ──────────────────────────────────────────────────────────────────

/// An ordered selection of routes led by the globally shortest one.
///
/// Never empty; no two routes share a first hop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSet {
    routes: Vec<Route>,
}

impl RouteSet {
    /// The shortest route.
    pub fn best(&self) -> &Route {
        &self.routes[0]
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The first `n` routes (at least one, at most all of them).
    pub fn truncated(&self, n: usize) -> RouteSet {
        let n = n.clamp(1, self.routes.len());
        RouteSet { routes: self.routes[..n].to_vec() }
    }

    /// Tunnel count of each route, in set order.
    pub fn lengths(&self) -> Vec<usize> {
        self.routes.iter().map(Route::length).collect()
    }

}

// ── Selection ─────────────────────────────────────────────────────────────────

/// Pick at most `max_count` near-disjoint routes from `routes`.
///
/// The best route is always kept, even when `max_count` is 0.  An empty
/// `routes` slice yields [`ColonyError::NoRoute`] with `INVALID` endpoints.
pub fn select_routes(routes: &[Route], max_count: usize, tolerance: usize) -> ColonyResult<RouteSet> {
    let mut sorted: Vec<&Route> = routes.iter().collect();
    sorted.sort_by_key(|r| r.length());

    let Some((&best, rest)) = sorted.split_first() else {
        return Err(ColonyError::NoRoute { from: RoomId::INVALID, to: RoomId::INVALID });
    };

    // ── Greedy overlap-bounded acceptance ─────────────────────────────────
    let max_extra = max_count.saturating_sub(1);
    let mut used: HashSet<RoomId> = HashSet::new();
    let mut accepted: Vec<&Route> = vec![best];

    for &candidate in rest {
        if accepted.len() > max_extra {
            break;
        }
        let overlap = candidate.interior().iter().filter(|r| used.contains(r)).count();
        if overlap <= tolerance {
            used.extend(candidate.interior().iter().copied());
            accepted.push(candidate);
        }
    }

    // ── Unique first hop ──────────────────────────────────────────────────
    let mut kept: Vec<Route> = Vec::with_capacity(accepted.len());
    for route in accepted {
        if kept.iter().all(|k| k.first_hop() != route.first_hop()) {
            kept.push(route.clone());
        }
    }

    log::debug!(
        "selected {} of {} routes (tolerance {tolerance}, max {max_count})",
        kept.len(),
        routes.len(),
    );

    Ok(RouteSet { routes: kept })
}
