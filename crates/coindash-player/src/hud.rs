//! Console HUD — the lives-text sink
//!
//! There is no renderer in this binary, so the lives readout is a console
//! line, rewritten whenever lives or score changes.

use coindash_game::LivesDisplay;

/// Prints the lives/score readout to stdout
#[derive(Default)]
pub struct ConsoleHud;

impl ConsoleHud {
    pub fn new() -> Self {
        Self
    }
}

impl LivesDisplay for ConsoleHud {
    fn update_lives(&mut self, lives: u32, score: u32) {
        println!("Lives: {lives}   Score: {score}");
    }
}
