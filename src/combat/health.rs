//! Bounded health pools
//!
//! A health pool is the only per-combatant state the turn loop mutates.
//! Every write goes through the same clamped transition, so the current
//! value is never observable outside `[0, maximum]`. Zero is the terminal
//! "dead" state; death is data, not an error.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CombatError;

/// The pool's single write path: move `current` by a signed delta and
/// clamp the result into `[0, maximum]`.
fn settle(maximum: i32, current: i32, delta: i32) -> i32 {
    (current + delta).clamp(0, maximum)
}

/// A bounded `current/maximum` health value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthPool {
    current: i32,
    maximum: i32,
}

impl HealthPool {
    /// Create a pool at full health.
    pub fn new(maximum: i32) -> Result<Self, CombatError> {
        Self::with_current(maximum, maximum)
    }

    /// Create a pool with an explicit starting value.
    ///
    /// A starting value outside `[0, maximum]` is clamped rather than
    /// rejected, matching the write path. Only a non-positive maximum is
    /// an error.
    pub fn with_current(maximum: i32, initial: i32) -> Result<Self, CombatError> {
        if maximum <= 0 {
            return Err(CombatError::InvalidConfiguration(format!(
                "health maximum must be positive, got {}",
                maximum
            )));
        }
        Ok(Self {
            current: settle(maximum, 0, initial),
            maximum,
        })
    }

    /// Current health.
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum health. Fixed at construction.
    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Whether the pool has been depleted.
    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Apply damage, clamping at zero.
    ///
    /// Negative amounts are rejected; damage never heals.
    pub fn apply_damage(&mut self, amount: i32) -> Result<(), CombatError> {
        if amount < 0 {
            return Err(CombatError::InvalidArgument(format!(
                "damage amount must be non-negative, got {}",
                amount
            )));
        }
        self.deplete(amount);
        Ok(())
    }

    /// Recover health, clamping at the maximum.
    pub fn restore(&mut self, amount: i32) -> Result<(), CombatError> {
        if amount < 0 {
            return Err(CombatError::InvalidArgument(format!(
                "restore amount must be non-negative, got {}",
                amount
            )));
        }
        self.current = settle(self.maximum, self.current, amount);
        Ok(())
    }

    /// Damage write path for callers that already hold a non-negative
    /// amount (the damage formula cannot produce a negative one).
    pub(crate) fn deplete(&mut self, amount: i32) {
        self.current = settle(self.maximum, self.current, -amount);
        if self.current == 0 {
            debug!("health pool depleted");
        }
    }
}

impl std::fmt::Display for HealthPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}
