use std::fmt::Debug;

/// Marker trait for types that can be stored in a [`Sequence`].
///
/// This trait is automatically implemented for any type that satisfies the
/// required bounds. No manual implementation is needed.
///
/// `Ord` carries the natural order used by sorting and binary search when no
/// comparator is given, and (through `Eq`) the equality used by linear
/// search. `Default` supplies the fill for unoccupied slots and the value a
/// [`Cursor`] yields when read out of range.
///
/// [`Sequence`]: crate::Sequence
/// [`Cursor`]: crate::Cursor
pub trait SeqValue
where
    Self: Sized + Debug + Clone + Default + Ord + Send + Sync + 'static,
{
}

impl<T> SeqValue for T where T: Sized + Debug + Clone + Default + Ord + Send + Sync + 'static {}
