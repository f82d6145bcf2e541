//! Combat system module
//!
//! Implements deterministic turn-based combat with:
//! - Bounded health pools with clamp-on-write semantics
//! - A fixed damage formula (firewall halving, no dice)
//! - Stat-bearing combatants
//! - Encounter resolution with alternating turns
//!
//! There is no randomness anywhere in this module: identical stats always
//! produce an identical winner in an identical number of turns.

mod damage;
mod entity;
mod health;
mod resolver;

pub use damage::{compute_damage, DamageOutcome};
pub use entity::{CombatEntity, Disposition};
pub use health::HealthPool;
pub use resolver::{Encounter, EncounterState, Side, TurnReport};

use thiserror::Error;

/// Combat errors
#[derive(Debug, Error)]
pub enum CombatError {
    /// Construction-time input that can never work (non-positive maximum,
    /// negative stat). Not recoverable by retry.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Malformed operation input, e.g. a negative damage amount.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
