mod materialize_tests;

use crate::forest::Forest;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Rec {
    pub(crate) id: u32,
    pub(crate) parent: u32,
}

/// Build a forest from `(id, parent)` pairs; parent 0 means "no parent"
/// (no fixture uses 0 as an id).
pub(crate) fn forest(recs: &[(u32, u32)]) -> Forest<Rec, u32> {
    Forest::from_records(
        recs.iter().map(|&(id, parent)| Rec { id, parent }),
        |r| r.id,
        |r| r.parent,
    )
}
