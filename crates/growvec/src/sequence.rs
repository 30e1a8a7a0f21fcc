use std::{cmp::Ordering, fmt, mem, sync::Arc};

use log::debug;

use crate::{Comparator, Cursor, Error, Result, SeqValue, SortStrategy, StdSortStrategy};

/// Capacity used by [`Sequence::new`] and added on every growth step.
pub const DEFAULT_CAPACITY: usize = 10;

/// Growable, indexable sequence backed by a contiguous slot array.
///
/// The backing store is always sized to the capacity; only the prefix
/// `[0, len)` is logically occupied. Appending past capacity swaps in a
/// store with [`DEFAULT_CAPACITY`] extra slots — growth is additive, never
/// doubling, and callers rely on the exact progression. Capacity is never
/// reduced automatically, with one exception: sorting first truncates the
/// store to the occupied prefix, so `capacity() == len()` after any sort.
///
/// Sorting is delegated to a replaceable [`SortStrategy`]; a sequence with
/// no explicit strategy uses a shared default.
pub struct Sequence<T: SeqValue> {
    /// Backing store; its length is the capacity. `slots[len..]` holds
    /// default or stale values and is logically absent.
    slots: Box<[T]>,
    len: usize,
    strategy: Option<Arc<dyn SortStrategy<T>>>,
}

impl<T: SeqValue> Sequence<T> {
    /// Creates an empty sequence with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::alloc(DEFAULT_CAPACITY)
    }

    /// Creates an empty sequence with exactly `capacity` slots.
    ///
    /// The parameter is signed so that a negative capacity is rejected with
    /// [`Error::InvalidCapacity`] instead of being silently unrepresentable.
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        if capacity < 0 {
            return Err(Error::InvalidCapacity { capacity });
        }
        Ok(Self::alloc(capacity as usize))
    }

    fn alloc(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, T::default);
        Self {
            slots: slots.into_boxed_slice(),
            len: 0,
            strategy: None,
        }
    }

    /// Number of logically occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical slot count of the backing store.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the element at `index`, or [`Error::IndexOutOfRange`] when
    /// `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.slots[index])
    }

    /// Overwrites the element at `index`. Touches exactly one slot.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.slots[index] = value;
        Ok(())
    }

    /// Appends `value`, growing the backing store first when full.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.slots[self.len] = value;
        self.len += 1;
    }

    /// Swaps in a store with [`DEFAULT_CAPACITY`] extra slots, moving every
    /// occupied element into its prefix. The old store is discarded
    /// wholesale.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity + DEFAULT_CAPACITY;
        let mut slots = mem::take(&mut self.slots).into_vec();
        slots.resize_with(new_capacity, T::default);
        self.slots = slots.into_boxed_slice();
        debug!("sequence grown: capacity {old_capacity} -> {new_capacity}");
    }

    /// Index of the first element equal to `value`, scanning `[0, len)`.
    ///
    /// Comparison is by value equality, not identity.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.slots[..self.len].iter().position(|slot| slot == value)
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.slots[..self.len].first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.slots[..self.len].last()
    }

    /// Clones the occupied prefix into a `Vec`.
    pub fn collect(&self) -> Vec<T> {
        self.slots[..self.len].to_vec()
    }

    /// Logically drops all elements. Capacity is untouched; the slots keep
    /// their old values until overwritten.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Starts a traversal positioned before the first element.
    ///
    /// Cursors are independent; any number may traverse the same sequence
    /// at once.
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Replaces the sort strategy, or unsets it with `None`.
    ///
    /// An unset sequence resolves to the shared default strategy at sort
    /// time.
    pub fn set_sort_strategy(&mut self, strategy: Option<Arc<dyn SortStrategy<T>>>) {
        self.strategy = strategy;
    }


    /// Sorts the occupied prefix by natural order.
    ///
    /// Shrinks the backing store to the occupied prefix first, so
    /// `capacity() == len()` afterwards.
    pub fn sort(&mut self) {
        self.sort_slots(None);
    }

    /// Sorts the occupied prefix by `cmp`. Same capacity side effect as
    /// [`sort`](Sequence::sort).
    pub fn sort_by<F>(&mut self, cmp: F)
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        let cmp: &Comparator<T> = &cmp;
        self.sort_slots(Some(cmp));
    }

    fn sort_slots(&mut self, cmp: Option<&Comparator<T>>) {
        if self.capacity() > self.len {
            let mut slots = mem::take(&mut self.slots).into_vec();
            slots.truncate(self.len);
            self.slots = slots.into_boxed_slice();
            debug!("sequence truncated for sort: capacity {}", self.len);
        }
        static DEFAULT: StdSortStrategy = StdSortStrategy;
        let strategy: &dyn SortStrategy<T> = match &self.strategy {
            Some(strategy) => strategy.as_ref(),
            None => &DEFAULT,
        };
        strategy.sort(&mut self.slots, cmp);
    }

    /// Binary search for `value` by natural order.
    ///
    /// See [`binary_search_by`](Sequence::binary_search_by) for the searched
    /// range.
    pub fn binary_search(&self, value: &T) -> Option<usize> {
        self.binary_search_by(value, T::cmp)
    }

    /// Recursive binary search for `value` under `cmp`.
    ///
    /// Returns `None` immediately on an empty sequence. The initial upper
    /// bound is the last slot of the backing store, not the last occupied
    /// index: when `capacity() > len()` the unoccupied default-valued slots
    /// take part in the search. Sorting first shrinks the store to the
    /// occupied prefix, which makes the two bounds coincide. The slots must
    /// already be ordered under `cmp`; no validation is performed.
    pub fn binary_search_by<F>(&self, value: &T, cmp: F) -> Option<usize>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        if self.len == 0 {
            return None;
        }
        self.search_slots(value, &cmp, 0, self.capacity() - 1)
    }

    fn search_slots<F>(&self, value: &T, cmp: &F, lower: usize, upper: usize) -> Option<usize>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        if lower > upper {
            return None;
        }
        // Midpoint written to stay overflow-safe at extreme bounds.
        let mid = lower + (upper - lower) / 2;
        match cmp(value, &self.slots[mid]) {
            Ordering::Less => self.search_slots(value, cmp, lower, mid.checked_sub(1)?),
            Ordering::Equal => Some(mid),
            Ordering::Greater => self.search_slots(value, cmp, mid + 1, upper),
        }
    }
}

impl<T: SeqValue> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SeqValue> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T: SeqValue> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T: SeqValue> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("slots", &&self.slots[..self.len])
            .finish()
    }
}
