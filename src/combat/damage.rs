//! Damage formula
//!
//! Deterministic integer damage: every point of offense is one extra
//! point of damage, and a defender whose firewall strictly exceeds the
//! attacker's offense halves the hit (integer division, rounding down).
//! No dice, no critical hits.

use serde::{Deserialize, Serialize};

/// Breakdown of a single damage computation.
///
/// Surfaced so the resolver and presentation layers can report a hit
/// without re-deriving it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageOutcome {
    /// Damage before the firewall check
    pub base: i32,
    /// Whether the defender's firewall halved the hit
    pub halved: bool,
    /// Final damage dealt
    pub total: i32,
}

impl DamageOutcome {
    /// Compute the outcome for an attacker/defender stat pair.
    ///
    /// Halving requires defense to be strictly greater than offense; an
    /// even match takes the full hit.
    pub fn compute(offense: i32, defense: i32) -> Self {
        let base = offense + 1;
        let halved = defense > offense;
        let total = if halved { base / 2 } else { base };
        Self {
            base,
            halved,
            total,
        }
    }
}

/// Damage dealt by an attacker with `offense` against a defender with
/// `defense`. Pure; non-negative inputs always yield non-negative output.
pub fn compute_damage(offense: i32, defense: i32) -> i32 {
    DamageOutcome::compute(offense, defense).total
}
