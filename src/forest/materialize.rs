//! Lazy depth-first projection of a [`Forest`] into caller-defined results.
//!
//! [`Roots`] walks the root set; each projected node receives a [`Children`]
//! iterator that projects the next child only when advanced. Both iterators
//! borrow the forest, which pins the indexes for as long as any projection is
//! outstanding.

use super::Forest;
use crate::order::KeyOrder;

/// Projection callback as stored by the traversal iterators.
///
/// The indirection through `dyn` lets [`Children`] mention the callback in
/// its own parameter list without an infinitely recursive generic type;
/// [`Forest::materialize`] coerces any matching closure reference to this.
pub type ProjectFn<'f, R, K, O, T> = dyn Fn(&'f R, usize, u32, Children<'f, R, K, O, T>) -> T + 'f;

/// Lazy iterator over projected roots, in input order.
///
/// Created by [`Forest::materialize`].
pub struct Roots<'f, R, K, O, T> {
    forest: &'f Forest<R, K, O>,
    ids: std::slice::Iter<'f, usize>,
    sibling: usize,
    project: &'f ProjectFn<'f, R, K, O, T>,
}

impl<'f, R, K, O: KeyOrder<K>, T> Roots<'f, R, K, O, T> {
    pub(crate) fn new(
        forest: &'f Forest<R, K, O>,
        project: &'f ProjectFn<'f, R, K, O, T>,
    ) -> Self {
        Self {
            forest,
            ids: forest.root_ids().iter(),
            sibling: 0,
            project,
        }
    }
}

impl<'f, R, K, O: KeyOrder<K>, T> Iterator for Roots<'f, R, K, O, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let &id = self.ids.next()?;
        let sibling = self.sibling;
        self.sibling += 1;
        let entry = self.forest.entry(id);
        let children = Children {
            forest: self.forest,
            run: self.forest.child_run(&entry.own),
            pos: 0,
            depth: 1,
            project: self.project,
        };
        Some((self.project)(&entry.record, sibling, 0, children))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'f, R, K, O: KeyOrder<K>, T> ExactSizeIterator for Roots<'f, R, K, O, T> {}

/// Lazy iterator over one node's projected children, in input order.
///
/// Advancing it projects the next child and hands that child its own
/// `Children`; dropping it unconsumed skips the subtree entirely.
pub struct Children<'f, R, K, O, T> {
    forest: &'f Forest<R, K, O>,
    /// Child bucket of the parent node: entry ids in input order.
    run: &'f [usize],
    pos: usize,
    depth: u32,
    project: &'f ProjectFn<'f, R, K, O, T>,
}

impl<'f, R, K, O: KeyOrder<K>, T> Children<'f, R, K, O, T> {
    /// Depth at which this sequence's elements sit (parent depth + 1).
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<'f, R, K, O: KeyOrder<K>, T> Iterator for Children<'f, R, K, O, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let &id = self.run.get(self.pos)?;
        let sibling = self.pos;
        self.pos += 1;
        let entry = self.forest.entry(id);
        let grandchildren = Children {
            forest: self.forest,
            run: self.forest.child_run(&entry.own),
            pos: 0,
            depth: self.depth + 1,
            project: self.project,
        };
        Some((self.project)(&entry.record, sibling, self.depth, grandchildren))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.run.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<'f, R, K, O: KeyOrder<K>, T> ExactSizeIterator for Children<'f, R, K, O, T> {}
