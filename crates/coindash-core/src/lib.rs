//! Coindash Core - Foundational types for the Coindash game
//!
//! This crate provides the core types that all other Coindash crates depend on:
//! - `EntityId` - Stable entity identifiers
//! - `Vec3` - Spatial math
//! - Error types and Result alias

mod error;
mod id;
mod types;

pub use error::{GameError, Result};
pub use id::EntityId;
pub use types::Vec3;
