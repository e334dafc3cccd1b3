//! Flat depth-first pre-order traversal of a [`Forest`].
//!
//! Uses an explicit frame stack rather than call-stack recursion, so deeply
//! nested forests cannot exhaust the call stack and each `next()` does a
//! bounded amount of work even on cyclic key relations.

use super::Forest;
use crate::order::KeyOrder;

struct Frame<'f> {
    /// Child bucket being walked (root set for the bottom frame).
    run: &'f [usize],
    pos: usize,
}

/// Iterator yielding `(record, sibling_index, depth)` in depth-first
/// pre-order. Created by [`Forest::dfs`].
pub struct Dfs<'f, R, K, O> {
    forest: &'f Forest<R, K, O>,
    stack: Vec<Frame<'f>>,
}

impl<'f, R, K, O: KeyOrder<K>> Dfs<'f, R, K, O> {
    pub(crate) fn new(forest: &'f Forest<R, K, O>) -> Self {
        Self {
            forest,
            stack: vec![Frame {
                run: forest.root_ids(),
                pos: 0,
            }],
        }
    }
}

impl<'f, R, K, O: KeyOrder<K>> Iterator for Dfs<'f, R, K, O> {
    type Item = (&'f R, usize, u32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(&id) = frame.run.get(frame.pos) else {
                self.stack.pop();
                continue;
            };
            let sibling = frame.pos;
            frame.pos += 1;
            let depth = (self.stack.len() - 1) as u32;
            let entry = self.forest.entry(id);
            self.stack.push(Frame {
                run: self.forest.child_run(&entry.own),
                pos: 0,
            });
            return Some((&entry.record, sibling, depth));
        }
    }
}
