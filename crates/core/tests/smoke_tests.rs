use std::collections::HashSet;

use wheel_core::{
    GameConfig, Session, SessionRules, SpinOutcome, ZoneKind, compress, content::keys, total_for,
};

/// Pushes on, reviving after every bomb, until the run reaches `target_zone`.
fn push_to_zone(seed: u64, config: &GameConfig, target_zone: u32) -> Session<'_> {
    let rules = SessionRules { starting_money: 100_000, ..SessionRules::default() };
    let mut session = Session::new(seed, config, rules);
    session.start().expect("start");
    while session.zone() < target_zone {
        session.spin().expect("spin");
        match session.resolve_spin().expect("resolve") {
            SpinOutcome::Win(_) => session.continue_run().expect("continue"),
            SpinOutcome::Lose(_) => session.revive().expect("revive"),
        }
    }
    session
}

#[test]
fn test_smoke_reach_first_super_zone() {
    let config = GameConfig::build_default();
    let session = push_to_zone(12345, &config, 30);

    assert_eq!(session.zone_kind(), ZoneKind::Super);
    assert!(session.wheel().iter().all(|slice| !slice.is_bomb));
    assert!(session.money() <= 100_000);
    assert!(session.snapshot_hash() != 0);
}

#[test]
fn test_smoke_claim_totals_survive_compression() {
    let config = GameConfig::build_default();
    let mut session = push_to_zone(777, &config, 12);

    // Land one more win so the run can be banked.
    loop {
        session.spin().expect("spin");
        match session.resolve_spin().expect("resolve") {
            SpinOutcome::Win(_) => break,
            SpinOutcome::Lose(_) => session.revive().expect("revive"),
        }
    }

    let collected = session.collected().to_vec();
    let claim = session.exit_and_claim().expect("claim");
    assert_eq!(claim, compress(&collected));

    let cash = config.catalog.key_of(keys::CASH).expect("cash item");
    assert_eq!(total_for(&claim, cash), total_for(&collected, cash));
    let ids: HashSet<_> = claim.iter().map(|slice| slice.item).collect();
    assert_eq!(ids.len(), claim.len(), "claim must list each item once");

    let views = config.catalog.describe(&claim);
    assert_eq!(views.len(), claim.len());
    assert!(views.iter().all(|view| !view.is_bomb));
}
