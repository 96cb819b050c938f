//! Simulation observer trait for progress reporting and move export.

use lm_core::Turn;

use crate::Move;

/// Callbacks invoked by [`Simulator::run`][crate::Simulator::run].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: line printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl TurnObserver for Printer {
///     fn on_turn_end(&mut self, turn: Turn, moves: &[Move]) {
///         println!("{turn}: {} moves", moves.len());
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called once for every turn in which at least one ant moved.
    ///
    /// `moves` is sorted by ascending ant identity.
    fn on_turn_end(&mut self, _turn: Turn, _moves: &[Move]) {}

    /// Called once after the last productive turn.
    fn on_sim_end(&mut self, _turn_count: u64) {}
}

/// A [`TurnObserver`] that does nothing.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
