//! Encounter resolution
//!
//! Drives the turn loop between two combatants:
//! - One attack per turn; the defender takes formula damage
//! - A kill ends the encounter immediately, before any counter-attack
//! - Otherwise the roles swap and the loop continues
//!
//! Stats never change mid-encounter, so per-direction damage is constant.
//! When neither side can deal damage the encounter is declared a
//! stalemate instead of looping forever.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::damage::DamageOutcome;
use super::CombatEntity;

/// Which of the two combatants is acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The opposing side.
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Where an encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncounterState {
    /// Both combatants alive, turns remaining
    InProgress,
    /// The given side depleted its opponent's health pool
    Resolved(Side),
    /// Neither side can deal damage; the encounter can never resolve
    Stalemate,
}

impl EncounterState {
    /// Whether the encounter has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, EncounterState::InProgress)
    }
}

/// Record of a single resolved turn, for presentation layers. Reading a
/// report never mutates combatant state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// 1-based turn number
    pub turn: u32,
    /// Side that attacked this turn
    pub attacker: Side,
    /// Damage dealt to the defender
    pub damage: DamageOutcome,
    /// Defender's health after the hit
    pub defender_health: i32,
    /// Whether the hit ended the encounter
    pub fatal: bool,
}

/// A single combat encounter between two entities.
///
/// The entity passed first takes the opening turn. Once the state is
/// terminal it stays terminal; a rematch needs a fresh encounter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Encounter {
    first: CombatEntity,
    second: CombatEntity,
    next_attacker: Side,
    turns: u32,
    state: EncounterState,
}

impl Encounter {
    /// Start an encounter; `first` acts first.
    pub fn new(first: CombatEntity, second: CombatEntity) -> Self {
        Self {
            first,
            second,
            next_attacker: Side::First,
            turns: 0,
            state: EncounterState::InProgress,
        }
    }

    /// Current encounter state.
    pub fn state(&self) -> EncounterState {
        self.state
    }

    /// Turns resolved so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The combatant on the given side.
    pub fn entity(&self, side: Side) -> &CombatEntity {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    /// The winning combatant, once resolved.
    pub fn winner(&self) -> Option<&CombatEntity> {
        match self.state {
            EncounterState::Resolved(side) => Some(self.entity(side)),
            _ => None,
        }
    }

    /// Recover both combatants, consuming the encounter.
    pub fn into_entities(self) -> (CombatEntity, CombatEntity) {
        (self.first, self.second)
    }

    /// Neither direction deals damage with the current stats. Stats are
    /// fixed per encounter, so this can never become false later.
    fn is_deadlocked(&self) -> bool {
        DamageOutcome::compute(self.first.offense(), self.second.defense()).total == 0
            && DamageOutcome::compute(self.second.offense(), self.first.defense()).total == 0
    }

    /// Resolve one turn.
    ///
    /// Returns `None` once the encounter is terminal, including the
    /// transition into stalemate.
    pub fn step(&mut self) -> Option<TurnReport> {
        if self.state.is_terminal() {
            return None;
        }
        if self.is_deadlocked() {
            debug!("neither side can deal damage, declaring stalemate");
            self.state = EncounterState::Stalemate;
            return None;
        }

        let attacker = self.next_attacker;
        let (offense, defender) = match attacker {
            Side::First => (self.first.offense(), &mut self.second),
            Side::Second => (self.second.offense(), &mut self.first),
        };

        let damage = DamageOutcome::compute(offense, defender.defense());
        defender.suffer(damage.total);
        let defender_health = defender.health().current();
        let fatal = defender.is_dead();

        self.turns += 1;
        let report = TurnReport {
            turn: self.turns,
            attacker,
            damage,
            defender_health,
            fatal,
        };

        if fatal {
            self.state = EncounterState::Resolved(attacker);
            debug!(
                "{} wins the encounter after {} turns",
                self.entity(attacker).name(),
                self.turns
            );
        } else {
            debug!(
                "turn {}: {} damage dealt, defender at {}",
                report.turn, damage.total, defender_health
            );
            self.next_attacker = attacker.opponent();
        }

        Some(report)
    }

    /// Drive the loop to a terminal state and return it.
    pub fn run(&mut self) -> EncounterState {
        while self.step().is_some() {}
        self.state
    }
}
