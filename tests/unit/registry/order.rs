use super::*;

#[test]
fn preserves_declaration_order() {
    let order = ZOrder::new(["base", "mid", "top"]).unwrap();
    let ids: Vec<&str> = order.iter().map(LayerId::as_str).collect();
    assert_eq!(ids, ["base", "mid", "top"]);
    assert_eq!(order.position(&LayerId::from("base")), Some(0));
    assert_eq!(order.position(&LayerId::from("top")), Some(2));
    assert_eq!(order.position(&LayerId::from("missing")), None);
}

#[test]
fn rejects_duplicate_ids() {
    let err = ZOrder::new(["base", "mid", "base"]).unwrap_err();
    assert!(matches!(err, StackError::Validation(_)));
    assert!(err.to_string().contains("duplicate layer id 'base'"));
}

#[test]
fn membership_queries() {
    let order = ZOrder::new(["base", "top"]).unwrap();
    assert!(order.contains(&LayerId::from("base")));
    assert!(!order.contains(&LayerId::from("nope")));
    assert_eq!(order.len(), 2);
    assert!(!order.is_empty());

    let empty = ZOrder::new(Vec::<LayerId>::new()).unwrap();
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);
}

#[test]
fn json_parses_in_declared_order() {
    let order = ZOrder::from_json(r#"["input-polygons", "skeletons", "perps"]"#).unwrap();
    assert_eq!(order.position(&LayerId::from("skeletons")), Some(1));
    assert_eq!(
        serde_json::to_string(&order).unwrap(),
        r#"["input-polygons","skeletons","perps"]"#
    );
}

#[test]
fn json_duplicates_are_rejected() {
    let err = ZOrder::from_json(r#"["perps", "perps"]"#).unwrap_err();
    assert!(matches!(err, StackError::Serde(_)));
    assert!(err.to_string().contains("duplicate layer id 'perps'"));
}

#[test]
fn json_shape_errors_are_reported() {
    let err = ZOrder::from_json(r#"{"not": "an array"}"#).unwrap_err();
    assert!(matches!(err, StackError::Serde(_)));
}
