mod common;

use starroute_lib::{AnchorRecord, EngineConfig, RouteEngine};

use common::hub_and_trap_records;

fn trap_engine() -> RouteEngine {
    let mut engine = RouteEngine::new(EngineConfig {
        jump_range: 10.0,
        max_expansions: 100,
        ..EngineConfig::default()
    })
    .unwrap();
    engine
        .load_catalog(hub_and_trap_records(), &[AnchorRecord::new("Hub")])
        .unwrap();
    engine
}

#[test]
fn range_change_reruns_anchor_relaxation() {
    let mut engine = trap_engine();
    assert!(engine.find_route("Start", "Goal").unwrap().is_none());

    let planned = engine.plan("Start", "Goal").unwrap().cloned().unwrap();
    assert_eq!(planned.waypoint.as_deref(), Some("Hub"));
    assert_eq!(planned.max_jump_range, 10.0);

    // Chain hops are ~7.86 ly, so 9 ly still reaches the hub while the
    // direct search keeps draining its budget in the cluster.
    let recomputed = engine.update_jump_range(9.0).unwrap().cloned().unwrap();
    assert_eq!(recomputed.waypoint.as_deref(), Some("Hub"));
    assert_eq!(recomputed.max_jump_range, 9.0);
    assert_eq!(recomputed.jumps, 36);
    assert_eq!(engine.active_route(), Some(&recomputed));
    assert_eq!(engine.jump_range(), 9.0);
}

#[test]
fn range_below_chain_spacing_drops_the_route() {
    let mut engine = trap_engine();
    assert!(engine.plan("Start", "Goal").unwrap().is_some());

    assert!(engine.update_jump_range(7.0).unwrap().is_none());
    assert!(engine.active_route().is_none());
    assert_eq!(engine.jump_range(), 7.0);
}
