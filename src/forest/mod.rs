//! Forest reconstruction from flat parent/child-keyed records.
//!
//! This module provides [`Forest`], which buffers a record sequence exactly
//! once, derives each record's own key and parent key exactly once, and
//! builds two stably-sorted index vectors for logarithmic key lookup. All
//! traversal over the forest is lazy and borrows the `Forest`, so the indexes
//! are guaranteed to outlive every outstanding iterator.

pub mod dfs;
pub mod materialize;

#[cfg(test)]
mod tests;

pub use dfs::Dfs;
pub use materialize::{Children, ProjectFn, Roots};

use std::cmp::Ordering;
use std::fmt::Debug;

use once_cell::sync::OnceCell;

use crate::forest_error::ForestError;
use crate::order::{KeyOrder, NaturalOrder};

/// A buffered record with its keys derived up front.
pub(crate) struct Entry<R, K> {
    pub(crate) record: R,
    /// Key by which other records reference this one as their parent.
    pub(crate) own: K,
    /// Key of the record this one claims as its parent.
    pub(crate) parent: K,
}

/// A record sequence buffered and indexed by own/parent key.
///
/// Construction consumes the source exactly once and calls each key function
/// exactly once per record; the extracted keys are stored and never
/// re-derived during traversal. A record is a root iff its parent key
/// matches no record's own key. Duplicate own keys are allowed: point
/// lookups resolve to the last such record in input order, while every
/// record remains discoverable as a child through the parent-key index.
///
/// # Example
/// ```
/// use forest_join::Forest;
///
/// let forest = Forest::from_records(
///     vec![(1u32, 0u32), (2, 1), (3, 1)],
///     |r| r.0,
///     |r| r.1,
/// );
/// assert_eq!(forest.len(), 3);
/// assert_eq!(forest.roots().count(), 1);
/// assert_eq!(forest.children_of(&1).count(), 2);
/// ```
pub struct Forest<R, K, O = NaturalOrder> {
    entries: Vec<Entry<R, K>>,
    /// Entry ids stably sorted by own key; equal-key runs keep input order,
    /// so the last id of a run is the last-written record for that key.
    by_own: Vec<usize>,
    /// Entry ids stably sorted by parent key; an equal-key run is the child
    /// bucket for that key, in input order.
    by_parent: Vec<usize>,
    /// Input-order ids of root entries, computed on first use.
    roots: OnceCell<Vec<usize>>,
    order: O,
}

impl<R, K: Ord> Forest<R, K, NaturalOrder> {
    /// Buffer and index `source` under the natural key order.
    pub fn from_records<I, FO, FP>(source: I, own_key: FO, parent_key: FP) -> Self
    where
        I: IntoIterator<Item = R>,
        FO: FnMut(&R) -> K,
        FP: FnMut(&R) -> K,
    {
        Self::from_records_by(source, own_key, parent_key, NaturalOrder)
    }
}

impl<R, K, O: KeyOrder<K>> Forest<R, K, O> {
    /// Buffer and index `source` under an explicit key order.
    ///
    /// `source` may be a one-shot iterator; it is consumed here and never
    /// again, no matter how often the forest is traversed.
    pub fn from_records_by<I, FO, FP>(
        source: I,
        mut own_key: FO,
        mut parent_key: FP,
        order: O,
    ) -> Self
    where
        I: IntoIterator<Item = R>,
        FO: FnMut(&R) -> K,
        FP: FnMut(&R) -> K,
    {
        let entries: Vec<Entry<R, K>> = source
            .into_iter()
            .map(|record| {
                let own = own_key(&record);
                let parent = parent_key(&record);
                Entry {
                    record,
                    own,
                    parent,
                }
            })
            .collect();

        let mut by_own: Vec<usize> = (0..entries.len()).collect();
        by_own.sort_by(|&a, &b| order.cmp(&entries[a].own, &entries[b].own));
        let mut by_parent: Vec<usize> = (0..entries.len()).collect();
        by_parent.sort_by(|&a, &b| order.cmp(&entries[a].parent, &entries[b].parent));

        log::trace!("indexed {} records", entries.len());

        Self {
            entries,
            by_own,
            by_parent,
            roots: OnceCell::new(),
            order,
        }
    }

    /// Number of buffered records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Buffered records in input order.
    pub fn records(&self) -> impl Iterator<Item = &R> {
        self.entries.iter().map(|e| &e.record)
    }

    /// Resolve `key` against the own-key index.
    ///
    /// With duplicate own keys the last record in input order wins.
    pub fn lookup(&self, key: &K) -> Option<&R> {
        self.own_run(key).last().map(|&id| &self.entries[id].record)
    }

    /// Records claiming `key` as their parent, in input order.
    pub fn children_of(&self, key: &K) -> impl Iterator<Item = &R> {
        self.child_run(key).iter().map(|&id| &self.entries[id].record)
    }

    /// Root records in input order.
    pub fn roots(&self) -> impl Iterator<Item = &R> {
        self.root_ids().iter().map(|&id| &self.entries[id].record)
    }

    /// Lazily project the forest depth-first.
    ///
    /// `project` is called once per node as the output is advanced, receiving
    /// the record, its 0-based sibling index, its depth (0 for roots), and a
    /// lazy [`Children`] iterator over the node's projected children.
    /// Dropping a `Children` value unconsumed skips the whole subtree, at no
    /// cost and with no `project` call for any descendant. Child buckets are
    /// re-resolved on every traversal, not memoized.
    ///
    /// Cyclic key relations are not detected here; a cycle reachable from a
    /// root keeps producing nodes for as long as the caller keeps consuming.
    /// Call [`Forest::check_acyclic`] first when that guarantee is needed.
    pub fn materialize<'f, T, F>(&'f self, project: &'f F) -> Roots<'f, R, K, O, T>
    where
        F: Fn(&'f R, usize, u32, Children<'f, R, K, O, T>) -> T,
    {
        let project: &'f ProjectFn<'f, R, K, O, T> = project;
        Roots::new(self, project)
    }

    /// Flat depth-first pre-order traversal yielding
    /// `(record, sibling_index, depth)`.
    pub fn dfs(&self) -> Dfs<'_, R, K, O> {
        Dfs::new(self)
    }

    /// Verify that the parent/child relation is acyclic.
    ///
    /// Runs Kahn's algorithm over the key relation, counting one edge per
    /// (parent record, child record) pair; duplicate own keys therefore
    /// contribute one edge each. Returns [`ForestError::CycleDetected`]
    /// naming one key on a cycle.
    pub fn check_acyclic(&self) -> Result<(), ForestError>
    where
        K: Debug,
    {
        let n = self.entries.len();
        let mut in_deg: Vec<usize> = (0..n)
            .map(|id| self.own_run(&self.entries[id].parent).len())
            .collect();
        let mut stack: Vec<usize> = (0..n).filter(|&id| in_deg[id] == 0).collect();

        let mut seen = 0usize;
        while let Some(id) = stack.pop() {
            seen += 1;
            for &child in self.child_run(&self.entries[id].own) {
                in_deg[child] -= 1;
                if in_deg[child] == 0 {
                    stack.push(child);
                }
            }
        }

        if seen < n {
            let offender = (0..n)
                .find(|&id| in_deg[id] > 0)
                .map(|id| format!("{:?}", self.entries[id].own))
                .unwrap_or_default();
            log::warn!("parent/child relation has a cycle through key {offender}");
            return Err(ForestError::CycleDetected(offender));
        }
        Ok(())
    }

    pub(crate) fn entry(&self, id: usize) -> &Entry<R, K> {
        &self.entries[id]
    }

    /// Run of own-key index ids whose key equals `key`.
    fn own_run(&self, key: &K) -> &[usize] {
        let lo = self
            .by_own
            .partition_point(|&id| self.order.cmp(&self.entries[id].own, key) == Ordering::Less);
        let hi = self
            .by_own
            .partition_point(|&id| self.order.cmp(&self.entries[id].own, key) != Ordering::Greater);
        &self.by_own[lo..hi]
    }

    /// Child bucket for `key`: ids of entries whose parent key equals `key`,
    /// in input order.
    pub(crate) fn child_run(&self, key: &K) -> &[usize] {
        let lo = self.by_parent.partition_point(|&id| {
            self.order.cmp(&self.entries[id].parent, key) == Ordering::Less
        });
        let hi = self.by_parent.partition_point(|&id| {
            self.order.cmp(&self.entries[id].parent, key) != Ordering::Greater
        });
        &self.by_parent[lo..hi]
    }

    /// Input-order ids of entries whose parent key matches no own key.
    pub(crate) fn root_ids(&self) -> &[usize] {
        self.roots.get_or_init(|| {
            let roots: Vec<usize> = (0..self.entries.len())
                .filter(|&id| self.own_run(&self.entries[id].parent).is_empty())
                .collect();
            log::trace!("{} roots of {} records", roots.len(), self.entries.len());
            roots
        })
    }
}
