use std::time::Duration;

/// Tunable constants of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    pub round_seconds: i64,
    pub refresh_penalty_seconds: i64,
    pub accept_bonus_seconds: i64,
    /// How long an accepted/rejected banner stays up before reverting.
    pub banner_duration: Duration,
    pub tick: Duration,
    /// Slots the guess row is padded to. Not a cap on the guess itself.
    pub guess_slots: usize,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            round_seconds: 60,
            refresh_penalty_seconds: 5,
            accept_bonus_seconds: 10,
            banner_duration: Duration::from_secs(1),
            tick: Duration::from_secs(1),
            guess_slots: 7,
        }
    }
}
