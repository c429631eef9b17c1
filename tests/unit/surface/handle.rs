use super::*;

#[test]
fn starts_uninitialized() {
    let handle = MapHandle::<HashSet<LayerId>>::new();
    assert!(!handle.is_ready());
    assert_eq!(handle.with_surface(HashSet::len), None);
}

#[test]
fn set_stores_the_surface() {
    let handle = MapHandle::new();
    handle.set(HashSet::from([LayerId::from("skeletons")]));
    assert!(handle.is_ready());
    assert_eq!(handle.with_surface(HashSet::len), Some(1));
    assert_eq!(handle.get(), Some(HashSet::from([LayerId::from("skeletons")])));
}

#[test]
fn clones_share_the_slot() {
    let handle = MapHandle::new();
    let shared = handle.clone();
    assert!(!handle.is_ready());

    shared.set(HashSet::from([LayerId::from("perps")]));
    assert!(handle.is_ready());
    assert_eq!(
        handle.with_surface(|s| s.has_layer(&LayerId::from("perps"))),
        Some(true)
    );
}

#[test]
fn set_overwrites_last_write_wins() {
    let handle = MapHandle::new();
    handle.set(HashSet::from([LayerId::from("old")]));
    handle.set(HashSet::from([LayerId::from("new")]));
    assert_eq!(
        handle.with_surface(|s| s.has_layer(&LayerId::from("old"))),
        Some(false)
    );
    assert_eq!(
        handle.with_surface(|s| s.has_layer(&LayerId::from("new"))),
        Some(true)
    );
}

#[test]
fn hash_set_surface_reports_mount_state() {
    let surface = HashSet::from([LayerId::from("input-polygons")]);
    assert!(surface.has_layer(&LayerId::from("input-polygons")));
    assert!(!surface.has_layer(&LayerId::from("thickened")));
}
