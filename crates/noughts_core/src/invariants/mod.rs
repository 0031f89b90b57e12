//! Game invariants, re-checked after every accepted move in debug builds.

use derive_more::Display;

/// Property a game state must satisfy between moves.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used when it fails.
    fn description() -> &'static str;
}

/// A property that failed for some game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Statement of the failed property.
    pub description: &'static str,
}

/// Several invariants checked in one pass.
pub trait InvariantSet<S> {
    /// Collects every failing member; `Ok` when all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [(fn(&S) -> bool, &'static str); 2] =
            [(A::holds, A::description()), (B::holds, B::description())];

        let violations: Vec<_> = checks
            .into_iter()
            .filter(|(holds, _)| !holds(state))
            .map(|(_, description)| InvariantViolation { description })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
