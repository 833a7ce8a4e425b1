//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use starroute_lib::{load_anchor_records, load_system_records, AnchorRecord, Catalog, SystemRecord};

/// Path to fixtures directory shared by the workspace tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_records() -> Vec<SystemRecord> {
    load_system_records(&fixtures_dir().join("systems.json")).expect("fixture systems load")
}

#[allow(dead_code)]
pub fn fixture_anchors() -> Vec<AnchorRecord> {
    load_anchor_records(&fixtures_dir().join("anchors.json")).expect("fixture anchors load")
}

#[allow(dead_code)]
pub fn fixture_catalog() -> Catalog {
    Catalog::from_records(fixture_records()).expect("fixture catalog is valid")
}

/// Catalog built from `(name, x, y, z)` tuples.
#[allow(dead_code)]
pub fn catalog_of(systems: &[(&str, f64, f64, f64)]) -> Catalog {
    Catalog::from_records(
        systems
            .iter()
            .map(|(name, x, y, z)| SystemRecord::new(*name, *x, *y, *z)),
    )
    .expect("valid test catalog")
}

/// Intermediate systems evenly spaced on the segment `from`-`to` in the z=0 plane.
#[allow(dead_code)]
pub fn chain(prefix: &str, from: (f64, f64), to: (f64, f64), segments: u32) -> Vec<SystemRecord> {
    (1..segments)
        .map(|i| {
            let t = f64::from(i) / f64::from(segments);
            SystemRecord::new(
                format!("{prefix}{i}"),
                from.0 + (to.0 - from.0) * t,
                from.1 + (to.1 - from.1) * t,
                0.0,
            )
        })
        .collect()
}

/// Two endpoints joined only through a hub, with a dead-end cluster lying on
/// the straight line between them.
///
/// At a 10 ly range the direct search has to exhaust the cluster (216
/// systems) before it can find the 36-jump detour, while each leg to and from
/// `Hub` is a straight chain of 18 jumps.
#[allow(dead_code)]
pub fn hub_and_trap_records() -> Vec<SystemRecord> {
    let mut records = vec![
        SystemRecord::new("Start", 0.0, 0.0, 0.0),
        SystemRecord::new("Hub", 100.0, 100.0, 0.0),
        SystemRecord::new("Goal", 200.0, 0.0, 0.0),
    ];
    records.extend(chain("Up", (0.0, 0.0), (100.0, 100.0), 18));
    records.extend(chain("Down", (100.0, 100.0), (200.0, 0.0), 18));
    for x in 0..24 {
        for (yi, y) in [-4.0, 0.0, 4.0].into_iter().enumerate() {
            for (zi, z) in [-4.0, 0.0, 4.0].into_iter().enumerate() {
                records.push(SystemRecord::new(
                    format!("Trap-{x}-{yi}-{zi}"),
                    8.0 + f64::from(x) * 4.0,
                    y,
                    z,
                ));
            }
        }
    }
    records
}
