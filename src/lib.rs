//! # forest-join
//!
//! forest-join reconstructs the forest implied by a flat sequence of records
//! carrying parent/child key pairs, and traverses it lazily. Records stay
//! opaque: the caller supplies two key-extraction functions (a record's own
//! key and the key of its claimed parent) and a projection that receives each
//! node together with its sibling index, depth, and a lazy sequence of its
//! projected children.
//!
//! ## Features
//! - [`Forest`]: one-shot buffering of any record source plus sorted key
//!   indexes for logarithmic parent/child lookup
//! - [`Forest::materialize`]: lazy depth-first projection where unconsumed
//!   child sequences cost nothing
//! - [`Forest::dfs`]: flat pre-order traversal yielding `(record, sibling,
//!   depth)` without call-stack recursion
//! - [`flatten`](crate::flatten::flatten): the same traversal discipline over
//!   ad-hoc trees described by a child-selector function
//! - Pluggable key ordering via [`KeyOrder`](crate::order::KeyOrder) for key
//!   types without a usable `Ord`
//!
//! ## Ordering and laziness
//!
//! Output order always follows input order: roots keep their relative input
//! order at depth 0, and each node's children keep their input order within
//! that parent. The key order is used only for index lookup. Projection is
//! pull-based, one node per advancement, so abandoning enumeration stops all
//! further work; see [`Forest::check_acyclic`] for the opt-in cycle guard.
//!
//! ## Usage
//!
//! ```
//! use forest_join::prelude::*;
//!
//! let records = vec![(1u32, 0u32), (2, 1), (3, 1), (4, 2)];
//! let forest = Forest::from_records(records, |r| r.0, |r| r.1);
//! let proj = |r: &(u32, u32),
//!             _i: usize,
//!             depth: u32,
//!             kids: Children<'_, (u32, u32), u32, NaturalOrder, Vec<(u32, u32)>>| {
//!     let mut out = vec![(r.0, depth)];
//!     for kid in kids {
//!         out.extend(kid);
//!     }
//!     out
//! };
//! let flat: Vec<(u32, u32)> = forest.materialize(&proj).flatten().collect();
//! assert_eq!(flat, vec![(1, 0), (2, 1), (4, 2), (3, 1)]);
//! ```

pub mod flatten;
pub mod forest;
pub mod forest_error;
pub mod order;

pub use forest::{Children, Dfs, Forest, Roots};
pub use forest_error::ForestError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::flatten::flatten;
    pub use crate::forest::{Children, Dfs, Forest, Roots};
    pub use crate::forest_error::ForestError;
    pub use crate::order::{KeyOrder, NaturalOrder, OrderBy};
}
