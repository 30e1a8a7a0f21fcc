use crate::{SeqValue, Sequence};

/// Forward-only traversal over the occupied prefix of a [`Sequence`].
///
/// A cursor starts before the first element; the first [`advance`] moves it
/// onto index 0. Bounds are checked against the sequence's length at the
/// moment of each advance, not when the cursor is created. Cursors are
/// independent: any number may traverse the same sequence at once.
///
/// # Example
/// ```ignore
/// let mut c = seq.cursor();
/// while let Some(val) = c.next() {
///     // process val
/// }
/// ```
///
/// [`advance`]: Cursor::advance
pub struct Cursor<'a, T: SeqValue> {
    source: &'a Sequence<T>,
    /// Index the cursor rests on; meaningless until `started`.
    pos: usize,
    started: bool,
}

impl<'a, T: SeqValue> Cursor<'a, T> {
    /// Creates a cursor positioned before the first element.
    #[inline]
    pub fn new(source: &'a Sequence<T>) -> Self {
        Self {
            source,
            pos: 0,
            started: false,
        }
    }

    /// Moves the cursor onto the next index.
    ///
    /// Returns whether that index is occupied. Safe to call past the end;
    /// the cursor just stays exhausted.
    #[inline]
    pub fn advance(&mut self) -> bool {
        if self.started {
            self.pos = self.pos.saturating_add(1);
        } else {
            self.started = true;
        }
        self.pos < self.source.len()
    }

    /// Returns the element under the cursor.
    ///
    /// Before the first advance, and once the cursor has run past the end,
    /// this yields `T::default()` rather than an error. Indexed access via
    /// [`Sequence::get`] keeps the strict contract.
    pub fn current(&self) -> T {
        if !self.started {
            return T::default();
        }
        match self.source.get(self.pos) {
            Ok(value) => value.clone(),
            Err(_) => T::default(),
        }
    }

    /// Returns the next value and advances, or `None` if exhausted.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<T> {
        if self.advance() {
            self.source.get(self.pos).ok().cloned()
        } else {
            None
        }
    }

    /// Index under the cursor, or `None` before the first advance.
    #[inline]
    pub fn position(&self) -> Option<usize> {
        self.started.then_some(self.pos)
    }

    /// Number of occupied slots still ahead of the cursor.
    #[inline]
    pub fn remaining(&self) -> usize {
        let consumed = if self.started {
            self.pos.saturating_add(1)
        } else {
            0
        };
        self.source.len().saturating_sub(consumed)
    }

    /// Rewinds to before the first element.
    ///
    /// A restarted traversal over an unmutated sequence repeats the same
    /// values.
    #[inline]
    pub fn reset(&mut self) {
        self.pos = 0;
        self.started = false;
    }
}
