//! Component state for the raffle page.

use common::{RaffleConfig, RaffleSession};

/// Main state container for the `RaffleComponent`.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct RaffleComponent {
    /// Roster, pool, winner, error and results log.
    pub session: RaffleSession,

    /// Whether confetti keeps recycling. Turns off `confetti_ms` after a win.
    pub confetti_active: bool,

    /// Bumped on every win so a timer started for an earlier win cannot stop
    /// the confetti of a later one.
    pub confetti_generation: u32,
}

impl RaffleComponent {
    pub fn new(config: RaffleConfig) -> Self {
        Self {
            session: RaffleSession::new(config),
            confetti_active: false,
            confetti_generation: 0,
        }
    }
}
