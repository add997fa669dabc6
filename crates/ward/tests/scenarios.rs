//! End-to-end scenarios through the `Ward` facade.

use host::FakeWorld;
use ward::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn pos(x: i32, y: i32, z: i32) -> BlockPos {
    BlockPos::new(x, y, z)
}

fn memory_ward(config: &WardConfig) -> Ward<MemoryBlobs> {
    init_tracing();
    Ward::new(MemoryBlobs::new(), config).unwrap()
}

mod host {
    use std::collections::HashMap;

    use ward::prelude::*;

    /// Block handles are plain positions; nothing ever goes stale.
    #[derive(Default)]
    pub struct FakeWorld {
        pub looks: HashMap<String, (BlockPos, Face)>,
    }

    impl HostWorld for FakeWorld {
        type Block = BlockPos;

        fn connected_actors(&self) -> Vec<String> {
            self.looks.keys().cloned().collect()
        }

        fn raycast(&self, actor: &str, _max_distance: f64) -> Option<RayHit<BlockPos>> {
            let &(block, face) = self.looks.get(actor)?;
            Some(RayHit { block, face })
        }

        fn neighbor(&self, block: &BlockPos, face: Face) -> BlockPos {
            block.neighbor(face)
        }

        fn is_valid(&self, _block: &BlockPos) -> bool {
            true
        }

        fn location(&self, block: &BlockPos) -> BlockPos {
            *block
        }
    }
}

#[test]
fn test_base_scenario() {
    let ward = memory_ward(&WardConfig::default());
    ward.store().register("base", pos(0, 0, 0), pos(10, 10, 10)).unwrap();

    let evaluator = ward.evaluator();
    assert_eq!(evaluator.evaluate("eve", pos(5, 5, 5)).unwrap(), Decision::Deny);
    assert_eq!(evaluator.evaluate("eve", pos(11, 5, 5)).unwrap(), Decision::Allow);

    ward.store().whitelist_add("base", "eve").unwrap();
    assert_eq!(evaluator.evaluate("eve", pos(5, 5, 5)).unwrap(), Decision::Allow);
}

#[test]
fn test_overlapping_registration_leaves_one_area() {
    let ward = memory_ward(&WardConfig::default());
    ward.store().register("base", pos(0, 0, 0), pos(10, 10, 10)).unwrap();

    let err = ward
        .store()
        .register("base2", pos(5, 5, 5), pos(15, 15, 15))
        .unwrap_err();
    assert!(matches!(err, StoreError::Overlap { .. }), "{err}");
    assert_eq!(ward.store().list().unwrap().len(), 1);
}

#[test]
fn test_admin_bypasses_every_area() {
    let ward = memory_ward(&WardConfig::default());
    ward.store().register("base", pos(0, 0, 0), pos(10, 10, 10)).unwrap();
    ward.store().register("vault", pos(-20, 0, -20), pos(-11, 5, -11)).unwrap();
    ward.store().admin_add("alex").unwrap();

    for target in [pos(5, 5, 5), pos(-15, 2, -15), pos(100, 64, 100)] {
        let mut event = ActionEvent::new("alex", Action::Break { block: target });
        assert_eq!(ward.on_action(&mut event).unwrap(), Verdict::Allow);
        assert!(!event.cancel);
    }

    ward.store().admin_remove("alex").unwrap();
    let mut event = ActionEvent::new("alex", Action::Break { block: pos(5, 5, 5) });
    assert!(ward.on_action(&mut event).unwrap().is_cancel());
}

#[test]
fn test_explosion_next_to_base_is_cancelled_entirely() {
    let ward = memory_ward(&WardConfig::default());
    ward.store().register("base", pos(0, 0, 0), pos(10, 10, 10)).unwrap();

    let crater: Vec<_> = (9..=13)
        .flat_map(|x| (4..=6).map(move |y| pos(x, y, 5)))
        .collect();
    let mut event = ActionEvent::new("creeper-fan", Action::AreaEffect { blocks: crater });

    assert!(ward.on_action(&mut event).unwrap().is_cancel());
    assert!(event.cancel);
}

#[test]
fn test_tick_feeds_cached_gate() {
    let config = WardConfig {
        gate_mode: GateMode::Cached,
        ..WardConfig::default()
    };
    let mut ward = memory_ward(&config);
    ward.store().register("base", pos(0, 0, 0), pos(10, 10, 10)).unwrap();

    let mut world = FakeWorld::default();
    // looking down at the roof: target is the block above it, outside
    world.looks.insert("eve".to_owned(), (pos(5, 10, 5), Face::Up));
    // looking at the floor from inside
    world.looks.insert("bob".to_owned(), (pos(5, 0, 5), Face::Up));

    let stats = ward.on_tick(&world).unwrap().unwrap();
    assert_eq!(stats.classified, 2);
    assert_eq!(ward.tracker().is_blocked("eve"), Some(false));
    assert_eq!(ward.tracker().is_blocked("bob"), Some(true));

    let mut event = ActionEvent::new(
        "bob",
        Action::Place {
            against: pos(5, 0, 5),
            face: Face::Up,
        },
    );
    assert!(ward.on_action(&mut event).unwrap().is_cancel());

    world.looks.remove("bob");
    let stats = ward.on_tick(&world).unwrap().unwrap();
    assert_eq!(stats.evicted, 1);
    assert_eq!(ward.tracker().is_blocked("bob"), None);
}

#[test]
fn test_show_border() {
    let ward = memory_ward(&WardConfig::default());
    ward.store().register("tiny", pos(1, 1, 1), pos(0, 0, 0)).unwrap();

    let mut markers = Vec::new();
    let count = ward
        .show_border("tiny", &mut |p: BlockPos| markers.push(p))
        .unwrap();
    assert_eq!(count, Some(8));
    assert_eq!(markers.len(), 8);

    assert_eq!(ward.show_border("missing", &mut |_: BlockPos| {}).unwrap(), None);
}

#[test]
fn test_oversized_border_is_refused() {
    let config = WardConfig {
        border_max_points: 10,
        ..WardConfig::default()
    };
    let ward = memory_ward(&config);
    ward.store().register("big", pos(0, 0, 0), pos(9, 9, 9)).unwrap();

    let err = ward.show_border("big", &mut |_: BlockPos| {}).unwrap_err();
    assert!(matches!(err, WardError::Border(_)), "{err}");
}

#[test]
fn test_registry_survives_reopen() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let config = WardConfig {
        db_path: dir.path().join("ward"),
        ..WardConfig::default()
    };

    {
        let ward = Ward::open(&config).unwrap();
        ward.store().register("base", pos(0, 0, 0), pos(10, 10, 10)).unwrap();
        ward.store().whitelist_add("base", "eve").unwrap();
        ward.store().admin_add("alex").unwrap();
    }

    let ward = Ward::open(&config).unwrap();
    let base = ward.store().get("base").unwrap().unwrap();
    assert_eq!(base.whitelist, vec!["eve".to_owned()]);
    assert_eq!(base.from, pos(0, 0, 0));
    assert_eq!(ward.store().list_admins().unwrap(), vec!["alex".to_owned()]);
    assert_eq!(
        ward.evaluator().evaluate("mallory", pos(1, 1, 1)).unwrap(),
        Decision::Deny
    );
}

#[test]
fn test_cached_gate_protects_the_struck_block() {
    let config = WardConfig {
        gate_mode: GateMode::Cached,
        ..WardConfig::default()
    };
    let mut ward = memory_ward(&config);
    ward.store().register("base", pos(0, 0, 0), pos(10, 10, 10)).unwrap();

    let mut world = FakeWorld::default();
    world.looks.insert("eve".to_owned(), (pos(5, 10, 5), Face::Up));
    ward.on_tick(&world).unwrap().unwrap();
    assert_eq!(ward.tracker().is_blocked("eve"), Some(false));

    let mut event = ActionEvent::new("eve", Action::Break { block: pos(5, 10, 5) });
    assert_eq!(
        ward.on_action(&mut event).unwrap(),
        Verdict::Cancel { at: pos(5, 10, 5) }
    );
    assert!(event.cancel);

    let mut event = ActionEvent::new(
        "eve",
        Action::Place {
            against: pos(5, 10, 5),
            face: Face::Up,
        },
    );
    assert_eq!(ward.on_action(&mut event).unwrap(), Verdict::Allow);
}
