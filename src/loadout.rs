//! Cyberdeck loadouts
//!
//! Fixed-capacity, index-addressed slot banks for equipped programs. The
//! container is generic over the item type; what an item *means* belongs
//! to the host's program catalog, the bank only guarantees bounds-checked
//! storage. Slot banks are independent of combat.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Loadout errors
#[derive(Debug, Error)]
pub enum LoadoutError {
    /// Construction-time input that can never work (zero capacity).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Slot index outside `[0, capacity)`. Never a silent no-op.
    #[error("slot {index} out of range (capacity {capacity})")]
    IndexOutOfRange { index: usize, capacity: usize },
}

/// A fixed-capacity bank of optional equipment slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadoutSlots<T> {
    contents: Vec<Option<T>>,
}

impl<T> LoadoutSlots<T> {
    /// Create an empty bank with the given capacity.
    pub fn new(capacity: usize) -> Result<Self, LoadoutError> {
        if capacity == 0 {
            return Err(LoadoutError::InvalidConfiguration(
                "slot capacity must be positive".to_string(),
            ));
        }
        let mut contents = Vec::with_capacity(capacity);
        contents.resize_with(capacity, || None);
        Ok(Self { contents })
    }

    /// Number of slots. Fixed for the bank's lifetime; no resizing.
    pub fn capacity(&self) -> usize {
        self.contents.len()
    }

    fn check_index(&self, index: usize) -> Result<(), LoadoutError> {
        if index >= self.contents.len() {
            return Err(LoadoutError::IndexOutOfRange {
                index,
                capacity: self.contents.len(),
            });
        }
        Ok(())
    }

    /// Overwrite a slot with new contents, or empty it with `None`.
    ///
    /// Overwriting an occupied slot is permitted and unconditional.
    pub fn set_slot(&mut self, index: usize, contents: Option<T>) -> Result<(), LoadoutError> {
        self.check_index(index)?;
        self.contents[index] = contents;
        Ok(())
    }

    /// Current contents of a slot (possibly empty).
    pub fn get_slot(&self, index: usize) -> Result<Option<&T>, LoadoutError> {
        self.check_index(index)?;
        Ok(self.contents[index].as_ref())
    }

    /// The slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.contents.iter().map(|slot| slot.as_ref())
    }

    /// Count of occupied slots.
    pub fn equipped(&self) -> usize {
        self.contents.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Passive performance stats for a deck chassis. These feed the wider
/// game, not the combat core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    /// Process data and perform actions faster
    pub speed: i32,
    /// Run more programs at once
    pub memory: i32,
}

impl Default for DeckStats {
    fn default() -> Self {
        Self { speed: 5, memory: 5 }
    }
}

/// Slot count on a stock deck chassis.
pub const DEFAULT_DECK_SLOTS: usize = 3;

/// A named cyberdeck: a slot bank of program identifiers plus chassis
/// stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cyberdeck {
    pub name: String,
    pub slots: LoadoutSlots<String>,
    pub stats: DeckStats,
}

impl Cyberdeck {
    /// Create a deck with the stock slot count and stats.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            // the stock slot count is a positive constant
            slots: LoadoutSlots {
                contents: vec![None; DEFAULT_DECK_SLOTS],
            },
            stats: DeckStats::default(),
        }
    }

    /// Create a deck with a custom slot count.
    pub fn with_slots(name: &str, slots: usize) -> Result<Self, LoadoutError> {
        Ok(Self {
            name: name.to_string(),
            slots: LoadoutSlots::new(slots)?,
            stats: DeckStats::default(),
        })
    }
}

impl std::fmt::Display for Cyberdeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}/{} slots)",
            self.name,
            self.slots.equipped(),
            self.slots.capacity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get_returns_just_set_value() {
        let mut slots: LoadoutSlots<String> = LoadoutSlots::new(3).unwrap();

        slots.set_slot(1, Some("icepick".to_string())).unwrap();
        assert_eq!(slots.get_slot(1).unwrap(), Some(&"icepick".to_string()));

        // Untouched slots read back empty
        assert_eq!(slots.get_slot(0).unwrap(), None);
        assert_eq!(slots.get_slot(2).unwrap(), None);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        assert!(matches!(
            LoadoutSlots::<String>::new(0),
            Err(LoadoutError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_out_of_range_index_is_an_error_for_both_operations() {
        let mut slots: LoadoutSlots<String> = LoadoutSlots::new(3).unwrap();

        let err = slots.set_slot(3, Some("overflow".to_string()));
        assert!(matches!(
            err,
            Err(LoadoutError::IndexOutOfRange {
                index: 3,
                capacity: 3
            })
        ));

        assert!(matches!(
            slots.get_slot(99),
            Err(LoadoutError::IndexOutOfRange {
                index: 99,
                capacity: 3
            })
        ));

        // The failed set must not have stored anything anywhere
        assert_eq!(slots.equipped(), 0);
    }

    #[test]
    fn test_overwrite_of_occupied_slot_is_unconditional() {
        let mut slots: LoadoutSlots<&str> = LoadoutSlots::new(2).unwrap();

        slots.set_slot(0, Some("icepick")).unwrap();
        slots.set_slot(0, Some("scrambler")).unwrap();
        assert_eq!(slots.get_slot(0).unwrap(), Some(&"scrambler"));

        // Emptying with None is the same write path
        slots.set_slot(0, None).unwrap();
        assert_eq!(slots.get_slot(0).unwrap(), None);
    }

    #[test]
    fn test_equipped_count_and_iteration_order() {
        let mut slots: LoadoutSlots<&str> = LoadoutSlots::new(3).unwrap();
        slots.set_slot(0, Some("icepick")).unwrap();
        slots.set_slot(2, Some("scrambler")).unwrap();

        assert_eq!(slots.equipped(), 2);
        let seen: Vec<Option<&&str>> = slots.iter().collect();
        assert_eq!(seen, vec![Some(&"icepick"), None, Some(&"scrambler")]);
    }

    #[test]
    fn test_stock_deck() {
        let deck = Cyberdeck::new("babby's first deck");
        assert_eq!(deck.slots.capacity(), DEFAULT_DECK_SLOTS);
        assert_eq!(deck.stats, DeckStats { speed: 5, memory: 5 });
        assert_eq!(deck.to_string(), "babby's first deck (0/3 slots)");
    }

    #[test]
    fn test_deck_honors_slot_bounds() {
        let mut deck = Cyberdeck::with_slots("mil-spec rig", 2).unwrap();
        deck.slots.set_slot(1, Some("blackout".to_string())).unwrap();

        assert!(matches!(
            deck.slots.set_slot(2, Some("overflow".to_string())),
            Err(LoadoutError::IndexOutOfRange { .. })
        ));
        assert!(matches!(Cyberdeck::with_slots("bricked", 0), Err(_)));
    }
}
