//! Depth-first flattening of ad-hoc trees via a caller-supplied child function.
//!
//! Where [`Forest`](crate::Forest) reconstructs parent/child links from keys,
//! [`flatten`] takes them as given: a child-selector function maps a node to
//! its children directly. The traversal discipline is the same — lazy
//! depth-first pre-order, input order preserved, one node per advancement.

use itertools::Either;

/// Lazily flatten the trees rooted at `roots` in depth-first pre-order.
///
/// `children` maps a node to its child sequence (empty for leaves); `select`
/// projects each node from its record, 0-based sibling index, and depth
/// (0 for roots). Children are only requested as the output is advanced, so
/// abandoning enumeration stops all further work even for child functions
/// describing unbounded trees.
///
/// ```
/// use forest_join::flatten::flatten;
///
/// let out: Vec<(u32, u32)> = flatten(
///     vec![1u32, 4],
///     |&n| if n < 3 { vec![n + 1] } else { Vec::new() },
///     |n, _i, depth| (n, depth),
/// )
/// .collect();
/// assert_eq!(out, vec![(1, 0), (2, 1), (3, 2), (4, 0)]);
/// ```
pub fn flatten<R, I, C, CI, S, T>(
    roots: I,
    children: C,
    select: S,
) -> Flatten<I::IntoIter, C, CI, S>
where
    I: IntoIterator<Item = R>,
    C: FnMut(&R) -> CI,
    CI: IntoIterator<Item = R>,
    S: FnMut(R, usize, u32) -> T,
{
    Flatten {
        stack: vec![Frame {
            iter: Either::Left(roots.into_iter()),
            pos: 0,
        }],
        children,
        select,
    }
}

struct Frame<RI, CIter> {
    iter: Either<RI, CIter>,
    pos: usize,
}

/// Lazy depth-first pre-order iterator created by [`flatten`].
///
/// Holds one frame per open tree level; the frame depth is the node depth.
pub struct Flatten<RI, C, CI: IntoIterator, S> {
    stack: Vec<Frame<RI, CI::IntoIter>>,
    children: C,
    select: S,
}

impl<R, RI, C, CI, S, T> Iterator for Flatten<RI, C, CI, S>
where
    RI: Iterator<Item = R>,
    C: FnMut(&R) -> CI,
    CI: IntoIterator<Item = R>,
    S: FnMut(R, usize, u32) -> T,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some(node) = frame.iter.next() else {
                self.stack.pop();
                continue;
            };
            let sibling = frame.pos;
            frame.pos += 1;
            let depth = (self.stack.len() - 1) as u32;
            let kids = (self.children)(&node);
            self.stack.push(Frame {
                iter: Either::Right(kids.into_iter()),
                pos: 0,
            });
            return Some((self.select)(node, sibling, depth));
        }
    }
}
