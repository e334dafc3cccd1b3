use std::cell::{Cell, RefCell};

use super::{Rec, forest};
use crate::forest::Children;
use crate::order::NaturalOrder;

#[derive(Debug, PartialEq, Eq)]
struct Node {
    id: u32,
    sibling: usize,
    depth: u32,
    kids: Vec<Node>,
}

fn node(id: u32, sibling: usize, depth: u32, kids: Vec<Node>) -> Node {
    Node {
        id,
        sibling,
        depth,
        kids,
    }
}

#[test]
fn projection_runs_in_depth_first_preorder() {
    let f = forest(&[(1, 0), (2, 1), (3, 1), (4, 2)]);
    let log = RefCell::new(Vec::new());
    let proj = |r: &Rec, _i: usize, d: u32, ch: Children<'_, Rec, u32, NaturalOrder, ()>| {
        log.borrow_mut().push((r.id, d));
        ch.for_each(drop);
    };
    f.materialize(&proj).for_each(drop);
    assert_eq!(log.into_inner(), vec![(1, 0), (2, 1), (4, 2), (3, 1)]);
}

#[test]
fn projection_nests_into_an_owned_tree() {
    let f = forest(&[(1, 0), (2, 1), (3, 1), (4, 2)]);
    let proj = |r: &Rec, i: usize, d: u32, ch: Children<'_, Rec, u32, NaturalOrder, Node>| {
        node(r.id, i, d, ch.collect())
    };
    let tree: Vec<Node> = f.materialize(&proj).collect();
    assert_eq!(
        tree,
        vec![node(
            1,
            0,
            0,
            vec![
                node(2, 0, 1, vec![node(4, 0, 2, vec![])]),
                node(3, 1, 1, vec![]),
            ],
        )]
    );
}

#[test]
fn empty_input_never_calls_project() {
    let f = forest(&[]);
    let calls = Cell::new(0u32);
    let proj = |_r: &Rec, _i: usize, _d: u32, _ch: Children<'_, Rec, u32, NaturalOrder, ()>| {
        calls.set(calls.get() + 1);
    };
    assert_eq!(f.materialize(&proj).count(), 0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn dropping_children_skips_the_whole_subtree() {
    let f = forest(&[(1, 0), (7, 0), (2, 1), (3, 1), (4, 2)]);
    let calls = Cell::new(0u32);
    let proj = |r: &Rec, _i: usize, _d: u32, _ch: Children<'_, Rec, u32, NaturalOrder, u32>| {
        calls.set(calls.get() + 1);
        r.id
    };
    let roots: Vec<u32> = f.materialize(&proj).collect();
    assert_eq!(roots, vec![1, 7]);
    assert_eq!(calls.get(), 2);
}

#[test]
fn abandoning_the_root_iterator_stops_projection() {
    let f = forest(&[(1, 0), (7, 0)]);
    let calls = Cell::new(0u32);
    let proj = |r: &Rec, _i: usize, _d: u32, _ch: Children<'_, Rec, u32, NaturalOrder, u32>| {
        calls.set(calls.get() + 1);
        r.id
    };
    let mut it = f.materialize(&proj);
    assert_eq!(it.next(), Some(1));
    drop(it);
    assert_eq!(calls.get(), 1);
}

#[test]
fn duplicate_own_keys_share_their_child_bucket() {
    // Two records own key 1 (children of 5 and 6); record 2 claims parent 1
    // and therefore shows up under both of them.
    let f = forest(&[(5, 0), (6, 0), (1, 5), (1, 6), (2, 1)]);
    let proj = |r: &Rec, i: usize, d: u32, ch: Children<'_, Rec, u32, NaturalOrder, Node>| {
        node(r.id, i, d, ch.collect())
    };
    let tree: Vec<Node> = f.materialize(&proj).collect();
    assert_eq!(
        tree,
        vec![
            node(5, 0, 0, vec![node(1, 0, 1, vec![node(2, 0, 2, vec![])])]),
            node(6, 1, 0, vec![node(1, 0, 1, vec![node(2, 0, 2, vec![])])]),
        ]
    );
}

#[test]
fn child_buckets_resolve_the_same_on_repeated_traversal() {
    let f = forest(&[(1, 0), (2, 1), (3, 1)]);
    let proj = |r: &Rec, i: usize, d: u32, ch: Children<'_, Rec, u32, NaturalOrder, Node>| {
        node(r.id, i, d, ch.collect())
    };
    let first: Vec<Node> = f.materialize(&proj).collect();
    let second: Vec<Node> = f.materialize(&proj).collect();
    assert_eq!(first, second);
}

#[test]
fn traversal_iterators_report_exact_sizes() {
    let f = forest(&[(1, 0), (7, 0), (2, 1), (3, 1)]);
    let kid_len = Cell::new(usize::MAX);
    let proj = |r: &Rec, _i: usize, _d: u32, ch: Children<'_, Rec, u32, NaturalOrder, u32>| {
        if r.id == 1 {
            kid_len.set(ch.len());
        }
        ch.for_each(drop);
        r.id
    };
    let it = f.materialize(&proj);
    assert_eq!(it.len(), 2);
    it.for_each(drop);
    assert_eq!(kid_len.get(), 2);
}

#[test]
fn projection_may_keep_references_into_the_forest() {
    fn proj<'f>(
        r: &'f Rec,
        _i: usize,
        _d: u32,
        ch: Children<'f, Rec, u32, NaturalOrder, &'f Rec>,
    ) -> &'f Rec {
        ch.for_each(drop);
        r
    }
    let f = forest(&[(1, 0), (2, 1)]);
    let refs: Vec<&Rec> = f.materialize(&proj).collect();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].id, 1);
}
