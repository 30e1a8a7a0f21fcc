use std::cmp::Ordering;

use crate::SeqValue;

/// Ordering function used by sorting and binary search.
///
/// Called as `cmp(a, b)`; must describe a total order over the element type.
pub type Comparator<T> = dyn Fn(&T, &T) -> Ordering;

/// In-place sorting strategy, replaceable per sequence.
///
/// A strategy is a stateless capability: one instance may back any number of
/// sequences at once (a sequence with no explicit strategy resolves to a
/// single shared `'static` default), which is the only reason sharing across
/// threads is safe. A stateful implementation must document its own
/// thread-safety.
pub trait SortStrategy<T: SeqValue>: Send + Sync {
    /// Sorts `slots` in place.
    ///
    /// Substitutes the natural order of `T` when no comparator is given.
    fn sort(&self, slots: &mut [T], cmp: Option<&Comparator<T>>);
}

/// Default strategy: the standard library's unstable slice sort.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdSortStrategy;

impl<T: SeqValue> SortStrategy<T> for StdSortStrategy {
    fn sort(&self, slots: &mut [T], cmp: Option<&Comparator<T>>) {
        match cmp {
            Some(cmp) => slots.sort_unstable_by(|a, b| cmp(a, b)),
            None => slots.sort_unstable(),
        }
    }
}
