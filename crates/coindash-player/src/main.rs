//! Coindash Player - Standalone game binary
//!
//! First-person arena game: grab the coin, dodge the boulders.
//!
//! Usage:
//!   coindash-player [--seed <n>] [--fullscreen]

use anyhow::{Context, Result};
use clap::Parser;
use coindash_player::PlayerApp;
use winit::event_loop::{ControlFlow, EventLoop};

#[derive(Parser)]
#[command(name = "coindash-player")]
#[command(about = "Coindash player - collect coins, avoid boulders")]
struct Args {
    /// Seed for deterministic spawn positions
    #[arg(long)]
    seed: Option<u64>,

    /// Launch in fullscreen mode
    #[arg(long)]
    fullscreen: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app =
        PlayerApp::new(args.seed, args.fullscreen).context("Failed to create game session")?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
