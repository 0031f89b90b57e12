//! Alternating turn invariant: players move One, Two, One, Two, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show One, Two, One, ... and each move must use the
/// mover's own marker.
pub struct AlternatingTurnInvariant;

impl<const N: usize> Invariant<Game<N>> for AlternatingTurnInvariant {
    fn holds(game: &Game<N>) -> bool {
        let history = game.history();

        if history.iter().any(|mov| mov.marker() != mov.player().marker()) {
            return false;
        }

        if history.first().is_some_and(|first| first.player() != Player::One) {
            return false;
        }

        history
            .windows(2)
            .all(|pair| pair[0].player() != pair[1].player())
    }

    fn description() -> &'static str {
        "Players alternate turns (One, Two, One, ...)"
    }
}
