//! Game state: lives, score, grounded flag, terminal condition

/// Mutable game state. Written only by collision dispatch; every other
/// component reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    /// Remaining lives. Starts at 1, floors at 0.
    pub lives: u32,
    /// Coins collected. Monotonically increasing.
    pub score: u32,
    /// True only after a Ground-contact event; cleared by the jump rule.
    pub grounded: bool,
    /// Latches true when lives reaches 0. The simulation keeps running,
    /// but no further lives are deducted.
    pub over: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            lives: 1,
            score: 0,
            grounded: false,
            over: false,
        }
    }

    /// Deduct one life, saturating at 0. Reaching 0 ends the game.
    pub fn lose_life(&mut self) {
        if self.over {
            return;
        }
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.over = true;
        }
    }

    /// Award one point
    pub fn add_score(&mut self) {
        self.score += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink for the lives readout.
///
/// Refreshed whenever lives or score changes; it receives both values so a
/// single widget can show them.
pub trait LivesDisplay {
    fn update_lives(&mut self, lives: u32, score: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.lives, 1);
        assert_eq!(state.score, 0);
        assert!(!state.grounded);
        assert!(!state.over);
    }

    #[test]
    fn test_lives_floor_at_zero_and_latch_over() {
        let mut state = GameState::new();
        state.lose_life();
        assert_eq!(state.lives, 0);
        assert!(state.over);

        // Further hits never drive lives negative
        state.lose_life();
        state.lose_life();
        assert_eq!(state.lives, 0);
    }

    #[test]
    fn test_score_is_monotonic() {
        let mut state = GameState::new();
        state.add_score();
        state.add_score();
        assert_eq!(state.score, 2);
    }
}
