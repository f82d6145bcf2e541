//! End-to-end exercises of the public API, the way a host game would
//! drive it: run an encounter to resolution, equip a deck, query network
//! access, and persist host-side state as JSON.

use netrun::access::{Network, Permission, Role};
use netrun::combat::{CombatEntity, Disposition, Encounter, EncounterState, Side};
use netrun::loadout::{Cyberdeck, LoadoutError};

#[test]
fn test_full_encounter_is_deterministic() {
    let run = || {
        let runner = CombatEntity::new("rogue-ai", 30, 8, 3).unwrap();
        let daemon = CombatEntity::hostile("adware-imp", 20, 4, 6).unwrap();
        let mut encounter = Encounter::new(runner, daemon);
        let state = encounter.run();
        (state, encounter.turns())
    };

    let (state, turns) = run();
    assert_eq!(state, EncounterState::Resolved(Side::First));

    // Identical stats, identical outcome, every time
    for _ in 0..5 {
        assert_eq!(run(), (state, turns));
    }
}

#[test]
fn test_driver_loop_reads_turn_reports() {
    // A presentation layer steps the encounter and renders each report
    // without ever mutating combatant state.
    let runner = CombatEntity::new("rogue-ai", 30, 8, 3).unwrap();
    let daemon = CombatEntity::hostile("adware-imp", 20, 4, 6).unwrap();
    let mut encounter = Encounter::new(runner, daemon);

    let mut lines = Vec::new();
    while let Some(report) = encounter.step() {
        let attacker = encounter.entity(report.attacker);
        lines.push(format!(
            "{} deals {} damage ({} left)",
            attacker.name(),
            report.damage.total,
            report.defender_health
        ));
    }

    assert_eq!(lines.len() as u32, encounter.turns());
    // 8 offense against a 6 firewall is a full 9-point hit
    assert_eq!(lines[0], "rogue-ai deals 9 damage (11 left)");

    let winner = encounter.winner().unwrap();
    assert_eq!(winner.name(), "rogue-ai");
    assert_eq!(
        encounter.entity(Side::Second).disposition(),
        Disposition::Hostile
    );

    // Exactly one side is dead once resolved
    assert!(!encounter.entity(Side::First).is_dead());
    assert!(encounter.entity(Side::Second).is_dead());
}

#[test]
fn test_hardened_zero_offense_encounter_stalemates() {
    let first = CombatEntity::new("turtle", 15, 0, 4).unwrap();
    let second = CombatEntity::hostile("firewall-golem", 15, 0, 9).unwrap();
    let mut encounter = Encounter::new(first, second);

    assert_eq!(encounter.run(), EncounterState::Stalemate);

    let (first, second) = encounter.into_entities();
    assert!(!first.is_dead());
    assert!(!second.is_dead());
}

#[test]
fn test_deck_equip_flow() {
    let mut deck = Cyberdeck::new("babby's first deck");

    deck.slots.set_slot(0, Some("icepick".to_string())).unwrap();
    deck.slots.set_slot(2, Some("scrambler".to_string())).unwrap();
    assert_eq!(deck.to_string(), "babby's first deck (2/3 slots)");

    // Swapping a program overwrites in place
    deck.slots.set_slot(0, Some("blackout".to_string())).unwrap();
    assert_eq!(
        deck.slots.get_slot(0).unwrap(),
        Some(&"blackout".to_string())
    );

    // The bank has exactly three slots; there is no fourth
    assert!(matches!(
        deck.slots.set_slot(3, Some("overflow".to_string())),
        Err(LoadoutError::IndexOutOfRange {
            index: 3,
            capacity: 3
        })
    ));
}

#[test]
fn test_network_access_flow() {
    let mut corp_net = Network::new("corp-net");

    // A fresh guest can look but not touch
    assert!(corp_net.authorized_for(Permission::ReadOnly).unwrap());
    assert!(!corp_net.authorized_for(Permission::Partial).unwrap());

    corp_net.assigned_role = Role::User;
    assert!(corp_net.authorized_for(Permission::Partial).unwrap());
    assert!(!corp_net.authorized_for(Permission::Elevated).unwrap());

    corp_net.assigned_role = Role::Admin;
    assert!(corp_net.authorized_for(Permission::Full).unwrap());
}

#[test]
fn test_host_persisted_deck_state() {
    let mut deck = Cyberdeck::with_slots("mil-spec rig", 4).unwrap();
    deck.slots.set_slot(1, Some("icepick".to_string())).unwrap();

    let json = serde_json::to_value(&deck).unwrap();
    assert_eq!(json["name"], "mil-spec rig");
    assert_eq!(json["stats"]["speed"], 5);
    assert_eq!(
        json["slots"]["contents"],
        serde_json::json!([null, "icepick", null, null])
    );

    let restored: Cyberdeck = serde_json::from_value(json).unwrap();
    assert_eq!(restored, deck);
}
