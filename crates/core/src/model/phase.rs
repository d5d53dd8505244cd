use std::fmt;

/// Top-level mode of the game state machine.
///
/// Exactly one phase is active at a time; legal transitions are enforced by
/// the session service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Start,
    Instructions,
    Playing,
    Results,
    GameOver,
}

impl Phase {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Start => "start",
            Phase::Instructions => "instructions",
            Phase::Playing => "playing",
            Phase::Results => "results",
            Phase::GameOver => "game over",
        };
        write!(f, "{name}")
    }
}
