//! Combatants
//!
//! A combat entity bundles a health pool with the offense/defense stats
//! the damage formula consumes. Stats are fixed for the entity's
//! lifetime; only the health pool mutates.

use serde::{Deserialize, Serialize};

use super::{CombatError, HealthPool};

/// How an entity relates to the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Disposition {
    #[default]
    Neutral,
    Hostile,
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Disposition::Neutral => "neutral",
            Disposition::Hostile => "hostile",
        };
        write!(f, "{}", s)
    }
}

/// A stat-bearing participant in an encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatEntity {
    name: String,
    health: HealthPool,
    offense: i32,
    defense: i32,
    disposition: Disposition,
}

impl CombatEntity {
    /// Create a neutral entity at full health.
    ///
    /// Fails if `max_health` is non-positive or either stat is negative;
    /// the damage formula assumes non-negative stats, so bad values are
    /// rejected here and never reach it.
    pub fn new(
        name: &str,
        max_health: i32,
        offense: i32,
        defense: i32,
    ) -> Result<Self, CombatError> {
        if offense < 0 || defense < 0 {
            return Err(CombatError::InvalidConfiguration(format!(
                "stats must be non-negative, got offense {} / defense {}",
                offense, defense
            )));
        }
        Ok(Self {
            name: name.to_string(),
            health: HealthPool::new(max_health)?,
            offense,
            defense,
            disposition: Disposition::Neutral,
        })
    }

    /// Create a hostile entity at full health.
    pub fn hostile(
        name: &str,
        max_health: i32,
        offense: i32,
        defense: i32,
    ) -> Result<Self, CombatError> {
        let mut entity = Self::new(name, max_health, offense, defense)?;
        entity.disposition = Disposition::Hostile;
        Ok(entity)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entity's health pool.
    pub fn health(&self) -> &HealthPool {
        &self.health
    }

    /// Offense stat.
    pub fn offense(&self) -> i32 {
        self.offense
    }

    /// Defense stat.
    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    /// Whether the entity's health pool is depleted.
    pub fn is_dead(&self) -> bool {
        self.health.is_dead()
    }

    /// Apply damage to this entity's health pool.
    pub fn take_damage(&mut self, amount: i32) -> Result<(), CombatError> {
        self.health.apply_damage(amount)
    }

    /// Formula-damage write path; the amount is non-negative by
    /// construction of the formula.
    pub(crate) fn suffer(&mut self, amount: i32) {
        self.health.deplete(amount);
    }
}
