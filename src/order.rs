//! Key orderings used to build the sorted indexes of a [`Forest`](crate::Forest).
//!
//! The order affects lookup only; output order always follows input order.

use std::cmp::Ordering;

/// Total order over keys.
///
/// A `Forest` sorts its own-key and parent-key indexes with this order and
/// resolves lookups by binary search, so implementations must be total and
/// consistent across calls.
pub trait KeyOrder<K> {
    fn cmp(&self, a: &K, b: &K) -> Ordering;
}

/// The `Ord`-based order; default for [`Forest::from_records`](crate::Forest::from_records).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> KeyOrder<K> for NaturalOrder {
    #[inline]
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Comparator-backed order for key types without a usable `Ord`.
///
/// ```
/// use forest_join::order::{KeyOrder, OrderBy};
///
/// let ci = OrderBy(|a: &String, b: &String| {
///     a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
/// });
/// assert_eq!(ci.cmp(&"Ab".into(), &"aB".into()), std::cmp::Ordering::Equal);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct OrderBy<F>(pub F);

impl<K, F> KeyOrder<K> for OrderBy<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn cmp(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b)
    }
}
