//! Property-style tests for the store's structural invariants.

use graphlet::{GraphDatabase, Node, PropertyMap, Value, props};
use proptest::prelude::*;

fn label() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,7}"
}

proptest! {
    // For all nodes and labels, adding a label twice is the same as adding
    // it once, and removing an absent label changes nothing.
    #[test]
    fn prop_label_add_remove_idempotent(base in proptest::collection::vec(label(), 0..4), extra in label()) {
        let mut node = Node::new("n0");
        for l in &base {
            node.add_label(l.as_str());
        }

        let mut twice = node.clone();
        twice.add_label(extra.as_str());
        let once = twice.labels.clone();
        twice.add_label(extra.as_str());
        prop_assert_eq!(&twice.labels, &once);

        let mut removed = twice.clone();
        removed.remove_label(&extra);
        prop_assert!(!removed.has_label(&extra));
        removed.remove_label(&extra);
        prop_assert!(!removed.has_label(&extra));
    }

    // Creating k nodes yields ids n0..n(k-1) in creation order; clear()
    // restarts the sequence.
    #[test]
    fn prop_node_ids_monotonic_and_reset(k in 1usize..24) {
        let mut db = GraphDatabase::new();
        for i in 0..k {
            let node = db.create_node(&[], PropertyMap::new());
            prop_assert_eq!(node.id, format!("n{i}"));
        }

        db.clear();
        let fresh = db.create_node(&[], PropertyMap::new());
        prop_assert_eq!(fresh.id, "n0");
    }

    // Deleting a node removes exactly the edges that touch it.
    #[test]
    fn prop_cascade_removes_exactly_touching_edges(
        n in 2usize..8,
        pairs in proptest::collection::vec((0usize..8, 0usize..8), 0..16),
        victim in 0usize..8,
    ) {
        let mut db = GraphDatabase::new();
        let ids: Vec<String> = (0..n)
            .map(|_| db.create_node(&[], PropertyMap::new()).id)
            .collect();
        for (a, b) in pairs {
            let (from, to) = (&ids[a % n], &ids[b % n]);
            db.create_edge("LINK", from, to, PropertyMap::new()).unwrap();
        }
        let victim = ids[victim % n].clone();
        let expected_survivors: Vec<String> = db
            .get_all_edges()
            .into_iter()
            .filter(|e| !e.involves_node(&victim))
            .map(|e| e.id)
            .collect();

        prop_assert!(db.delete_node(&victim));

        let survivors: Vec<String> =
            db.get_all_edges().into_iter().map(|e| e.id).collect();
        prop_assert_eq!(survivors, expected_survivors);
        prop_assert!(db.get_all_edges().iter().all(|e| !e.involves_node(&victim)));
    }

    // A failed create_edge leaves the edge map untouched; a successful one
    // implies both endpoints are registered.
    #[test]
    fn prop_referential_integrity(present in any::<bool>(), other in "[a-z]{1,6}") {
        let mut db = GraphDatabase::new();
        let a = db.create_node(&[], PropertyMap::new());
        let b = db.create_node(&[], PropertyMap::new());
        db.create_edge("LINK", &a.id, &b.id, PropertyMap::new()).unwrap();
        let before = db.edge_count();

        let to = if present { b.id.clone() } else { format!("ghost_{other}") };
        let outcome = db.create_edge("LINK", &a.id, &to, PropertyMap::new());

        if present {
            let edge = outcome.unwrap();
            prop_assert!(db.get_node(&edge.from).is_some());
            prop_assert!(db.get_node(&edge.to).is_some());
            prop_assert_eq!(db.edge_count(), before + 1);
        } else {
            prop_assert!(outcome.is_err());
            prop_assert_eq!(db.edge_count(), before);
        }
    }

    // Directionality: an a->b edge never implies b->a.
    #[test]
    fn prop_are_connected_directional(edge_type in "[A-Z]{1,8}") {
        let mut db = GraphDatabase::new();
        let a = db.create_node(&[], PropertyMap::new());
        let b = db.create_node(&[], PropertyMap::new());
        db.create_edge(&edge_type, &a.id, &b.id, PropertyMap::new()).unwrap();

        prop_assert!(db.are_connected(&a.id, &b.id, Some(&edge_type)));
        prop_assert!(!db.are_connected(&b.id, &a.id, None));
    }
}

// Property matching is structural on Value: list- and map-valued
// properties match by content, not identity. Pinned here so a change to
// identity-style matching would have to be deliberate.
#[test]
fn test_find_by_property_uses_structural_equality() {
    let mut db = GraphDatabase::new();
    db.create_node(&["Config"], props([("flags", Value::from(vec![1i64, 2]))]));

    let probe = Value::from(vec![1i64, 2]);
    let result = db.find_nodes_by_property("flags", &probe);
    assert_eq!(result.node_count(), 1);
}

// The reversed-edge id is a textual derivation; reversing twice collides
// with nothing in the database only because reversed edges are detached.
#[test]
fn test_reverse_id_derivation_is_textual() {
    let mut db = GraphDatabase::new();
    let a = db.create_node(&[], PropertyMap::new());
    let b = db.create_node(&[], PropertyMap::new());
    let edge = db.create_edge("LINK", &a.id, &b.id, PropertyMap::new()).unwrap();

    let reversed = edge.reverse();
    assert_eq!(reversed.id, "e0_reversed");
    assert_eq!(reversed.reverse().id, "e0_reversed_reversed");
    assert!(db.get_edge(&reversed.id).is_none());
}
