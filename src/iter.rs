//! Cursors, element handles and iterators for `BitSet`.
//!
//! [`Cursor`] is a bidirectional position in a set: either an element or
//! the past-the-end position `N`. Dereferencing a cursor yields a [`Ref`],
//! a read-only handle that behaves like the element value and can be turned
//! back into the cursor it came from. [`ReverseCursor`] walks the other way.
//! [`Iter`] is the Rust-native front end over the same scans.

use core::{
    fmt,
    iter::FusedIterator,
    ops::Deref,
    ptr,
};

use crate::{BitSet, Word};

/// A bidirectional position within a [`BitSet`].
///
/// A cursor either points at an element of the set or is the past-the-end
/// cursor, whose position is `N`. Cursors are created by
/// [`begin`](BitSet::begin), [`end`](BitSet::end), [`find`](BitSet::find)
/// and the bound lookups.
///
/// # Examples
///
/// ```
/// use fixed_bit_set::bit_set;
///
/// let set: bit_set!(16, u8) = [2, 9, 14].into();
///
/// let mut cursor = set.begin();
/// assert_eq!(cursor.value(), 2);
/// cursor.move_next();
/// assert_eq!(cursor.value(), 9);
/// cursor.move_next();
/// cursor.move_next();
/// assert!(cursor.is_end());
///
/// cursor.move_prev();
/// assert_eq!(cursor.value(), 14);
/// ```
pub struct Cursor<'a, const N: usize, const WORDS: usize, W: Word = u64> {
    set: &'a BitSet<N, WORDS, W>,
    pos: usize,
}

impl<'a, const N: usize, const WORDS: usize, W: Word> Cursor<'a, N, WORDS, W> {
    #[inline]
    pub(crate) fn new(set: &'a BitSet<N, WORDS, W>, pos: usize) -> Self {
        debug_assert!(pos <= N, "cursor {pos} out of range for capacity {N}");
        Self { set, pos }
    }

    /// Returns the element this cursor points at, or `N` for the end
    /// cursor.
    #[must_use]
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns `true` if this is the past-the-end cursor.
    #[must_use]
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos == N
    }

    /// Returns the set this cursor walks.
    #[must_use]
    #[inline]
    pub fn set(&self) -> &'a BitSet<N, WORDS, W> {
        self.set
    }

    /// Returns a handle to the current element, or [`None`] at the end.
    #[must_use]
    #[inline]
    pub fn get(&self) -> Option<Ref<'a, N, WORDS, W>> {
        (!self.is_end()).then(|| Ref::new(self.set, self.pos))
    }

    /// Returns a handle to the current element.
    ///
    /// The cursor must not be the end cursor.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Ref<'a, N, WORDS, W> {
        debug_assert!(!self.is_end(), "dereferenced the end cursor");
        Ref::new(self.set, self.pos)
    }

    /// Advances to the next larger element, or to the end.
    ///
    /// The cursor must not be the end cursor.
    #[inline]
    pub fn move_next(&mut self) {
        debug_assert!(!self.is_end(), "advanced past the end cursor");
        self.pos = self.set.find_next(self.pos + 1);
    }

    /// Steps back to the next smaller element.
    ///
    /// The cursor must not be at the smallest element. Stepping back from
    /// the end cursor reaches the largest element.
    #[inline]
    pub fn move_prev(&mut self) {
        debug_assert!(self.pos > 0, "moved before the first element");
        let prev = self.set.find_prev(self.pos - 1);
        debug_assert!(prev < N, "moved before the first element");
        self.pos = prev;
    }

    /// Returns an iterator over the elements from this cursor up to, but
    /// not including, `last`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(32) = [1, 5, 8, 20].into();
    /// let elems: Vec<_> = set.lower_bound(2).until(set.upper_bound(8)).collect();
    /// assert_eq!(elems, [5, 8]);
    /// ```
    #[must_use]
    pub fn until(self, last: Self) -> Iter<'a, N, WORDS, W> {
        debug_assert!(
            ptr::eq(self.set, last.set),
            "cursors belong to different sets"
        );
        Iter::new(self.set, self.pos, last.pos.max(self.pos))
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Clone for Cursor<'_, N, WORDS, W> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Copy for Cursor<'_, N, WORDS, W> {}

impl<const N: usize, const WORDS: usize, W: Word> PartialEq for Cursor<'_, N, WORDS, W> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            ptr::eq(self.set, other.set),
            "compared cursors of different sets"
        );
        self.pos == other.pos
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Eq for Cursor<'_, N, WORDS, W> {}

impl<const N: usize, const WORDS: usize, W: Word> fmt::Debug for Cursor<'_, N, WORDS, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").field("pos", &self.pos).finish()
    }
}

/// A read-only handle to an element of a [`BitSet`].
///
/// A `Ref` dereferences to the element value and compares equal to plain
/// integers. It remembers its set, so [`cursor`](Ref::cursor) recovers the
/// cursor at the same element.
///
/// # Examples
///
/// ```
/// # use fixed_bit_set::bit_set;
/// let set: bit_set!(8, u8) = [3, 6].into();
///
/// let r = set.front();
/// assert_eq!(r, 3);
/// assert_eq!(*r + 1, 4);
/// assert_eq!(r.cursor(), set.begin());
/// ```
pub struct Ref<'a, const N: usize, const WORDS: usize, W: Word = u64> {
    set: &'a BitSet<N, WORDS, W>,
    value: usize,
}

impl<'a, const N: usize, const WORDS: usize, W: Word> Ref<'a, N, WORDS, W> {
    #[inline]
    pub(crate) fn new(set: &'a BitSet<N, WORDS, W>, value: usize) -> Self {
        debug_assert!(value < N, "element {value} out of range for capacity {N}");
        Self { set, value }
    }

    /// Returns the element value.
    #[must_use]
    #[inline]
    pub fn get(&self) -> usize {
        self.value
    }

    /// Returns the cursor at this element.
    #[must_use]
    #[inline]
    pub fn cursor(&self) -> Cursor<'a, N, WORDS, W> {
        Cursor::new(self.set, self.value)
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Clone for Ref<'_, N, WORDS, W> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Copy for Ref<'_, N, WORDS, W> {}

impl<const N: usize, const WORDS: usize, W: Word> Deref for Ref<'_, N, WORDS, W> {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &usize {
        &self.value
    }
}

impl<const N: usize, const WORDS: usize, W: Word> From<Ref<'_, N, WORDS, W>> for usize {
    #[inline]
    fn from(r: Ref<'_, N, WORDS, W>) -> Self {
        r.value
    }
}

impl<const N: usize, const WORDS: usize, W: Word> PartialEq for Ref<'_, N, WORDS, W> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Eq for Ref<'_, N, WORDS, W> {}

impl<const N: usize, const WORDS: usize, W: Word> PartialEq<usize> for Ref<'_, N, WORDS, W> {
    #[inline]
    fn eq(&self, other: &usize) -> bool {
        self.value == *other
    }
}

impl<const N: usize, const WORDS: usize, W: Word> fmt::Debug for Ref<'_, N, WORDS, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value, f)
    }
}

impl<const N: usize, const WORDS: usize, W: Word> fmt::Display for Ref<'_, N, WORDS, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

/// A cursor that walks a [`BitSet`] from the largest element down.
///
/// It wraps a forward [`Cursor`] (its [`base`](ReverseCursor::base)) and
/// refers to the element just before it, so
/// [`rbegin`](BitSet::rbegin) wraps [`end`](BitSet::end) and
/// [`rend`](BitSet::rend) wraps [`begin`](BitSet::begin).
///
/// # Examples
///
/// ```
/// # use fixed_bit_set::bit_set;
/// let set: bit_set!(100) = [1, 50, 99].into();
///
/// let mut elems = Vec::new();
/// let mut cursor = set.rbegin();
/// while cursor != set.rend() {
///     elems.push(cursor.value().get());
///     cursor.move_next();
/// }
/// assert_eq!(elems, [99, 50, 1]);
/// ```
pub struct ReverseCursor<'a, const N: usize, const WORDS: usize, W: Word = u64> {
    base: Cursor<'a, N, WORDS, W>,
}

impl<'a, const N: usize, const WORDS: usize, W: Word> ReverseCursor<'a, N, WORDS, W> {
    #[inline]
    pub(crate) fn new(base: Cursor<'a, N, WORDS, W>) -> Self {
        Self { base }
    }

    /// Returns the underlying forward cursor, one past the element this
    /// cursor refers to.
    #[must_use]
    #[inline]
    pub fn base(&self) -> Cursor<'a, N, WORDS, W> {
        self.base
    }

    /// Returns `true` if this is the past-the-end reverse cursor.
    #[must_use]
    #[inline]
    pub fn is_end(&self) -> bool {
        self.base.pos == self.base.set.find_first()
    }

    /// Returns a handle to the current element, or [`None`] at the end.
    #[must_use]
    pub fn get(&self) -> Option<Ref<'a, N, WORDS, W>> {
        (!self.is_end()).then(|| self.value())
    }

    /// Returns a handle to the current element.
    ///
    /// The cursor must not be the end cursor.
    #[must_use]
    pub fn value(&self) -> Ref<'a, N, WORDS, W> {
        let mut prev = self.base;
        prev.move_prev();
        prev.value()
    }

    /// Moves to the next smaller element, or to the end.
    #[inline]
    pub fn move_next(&mut self) {
        self.base.move_prev();
    }

    /// Moves back to the next larger element.
    #[inline]
    pub fn move_prev(&mut self) {
        self.base.move_next();
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Clone for ReverseCursor<'_, N, WORDS, W> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Copy for ReverseCursor<'_, N, WORDS, W> {}

impl<const N: usize, const WORDS: usize, W: Word> PartialEq for ReverseCursor<'_, N, WORDS, W> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Eq for ReverseCursor<'_, N, WORDS, W> {}

impl<const N: usize, const WORDS: usize, W: Word> fmt::Debug for ReverseCursor<'_, N, WORDS, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReverseCursor")
            .field("base", &self.base.pos)
            .finish()
    }
}

/// An iterator over the elements of a [`BitSet`] in ascending order.
///
/// This struct is created by [`iter`](BitSet::iter), [`range`](BitSet::range)
/// and [`Cursor::until`]. It is double-ended and knows its exact length.
pub struct Iter<'a, const N: usize, const WORDS: usize, W: Word = u64> {
    set: &'a BitSet<N, WORDS, W>,
    front: usize, // next candidate, inclusive
    back: usize,  // end of the window, exclusive
}

impl<'a, const N: usize, const WORDS: usize, W: Word> Iter<'a, N, WORDS, W> {
    #[inline]
    pub(crate) fn new(set: &'a BitSet<N, WORDS, W>, front: usize, back: usize) -> Self {
        debug_assert!(front <= back && back <= N);
        Self { set, front, back }
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Clone for Iter<'_, N, WORDS, W> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Iterator for Iter<'_, N, WORDS, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let x = self.set.find_next(self.front);
        if x >= self.back {
            self.front = self.back;
            return None;
        }
        self.front = x + 1;
        Some(x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }

    #[inline]
    fn min(mut self) -> Option<Self::Item> {
        self.next()
    }

    #[inline]
    fn max(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<const N: usize, const WORDS: usize, W: Word> DoubleEndedIterator for Iter<'_, N, WORDS, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back <= self.front {
            return None;
        }
        let x = self.set.find_prev(self.back - 1);
        if x >= N || x < self.front {
            self.back = self.front;
            return None;
        }
        self.back = x;
        Some(x)
    }
}

impl<const N: usize, const WORDS: usize, W: Word> ExactSizeIterator for Iter<'_, N, WORDS, W> {
    fn len(&self) -> usize {
        if self.front >= self.back {
            return 0;
        }
        self.set.rank(self.back) - self.set.rank(self.front)
    }
}

impl<const N: usize, const WORDS: usize, W: Word> FusedIterator for Iter<'_, N, WORDS, W> {}

impl<const N: usize, const WORDS: usize, W: Word> fmt::Debug for Iter<'_, N, WORDS, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An owning iterator over the elements of a [`BitSet`] in ascending order.
///
/// This struct is created by the [`IntoIterator`] implementation for
/// [`BitSet`].
#[derive(Clone)]
pub struct IntoIter<const N: usize, const WORDS: usize, W: Word = u64> {
    set: BitSet<N, WORDS, W>,
    front: usize,
    back: usize,
}

impl<const N: usize, const WORDS: usize, W: Word> IntoIter<N, WORDS, W> {
    /// Runs `f` on a borrowing iterator over the remaining window and keeps
    /// its progress.
    #[inline]
    fn with_iter<T>(&mut self, f: impl FnOnce(&mut Iter<'_, N, WORDS, W>) -> T) -> T {
        let mut iter = Iter::new(&self.set, self.front, self.back);
        let out = f(&mut iter);
        (self.front, self.back) = (iter.front, iter.back);
        out
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Iterator for IntoIter<N, WORDS, W> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.with_iter(|it| it.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len();
        (n, Some(n))
    }
}

impl<const N: usize, const WORDS: usize, W: Word> DoubleEndedIterator for IntoIter<N, WORDS, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.with_iter(|it| it.next_back())
    }
}

impl<const N: usize, const WORDS: usize, W: Word> ExactSizeIterator for IntoIter<N, WORDS, W> {
    fn len(&self) -> usize {
        Iter::new(&self.set, self.front, self.back).len()
    }
}

impl<const N: usize, const WORDS: usize, W: Word> FusedIterator for IntoIter<N, WORDS, W> {}

impl<'a, const N: usize, const WORDS: usize, W: Word> IntoIterator for &'a BitSet<N, WORDS, W> {
    type IntoIter = Iter<'a, N, WORDS, W>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<const N: usize, const WORDS: usize, W: Word> IntoIterator for BitSet<N, WORDS, W> {
    type IntoIter = IntoIter<N, WORDS, W>;
    type Item = usize;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            set: self,
            front: 0,
            back: N,
        }
    }
}

impl<const N: usize, const WORDS: usize, W: Word> FromIterator<usize> for BitSet<N, WORDS, W> {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.insert_range(iter);
        set
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Extend<usize> for BitSet<N, WORDS, W> {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        self.insert_range(iter);
    }
}

impl<'a, const N: usize, const WORDS: usize, W: Word> Extend<&'a usize> for BitSet<N, WORDS, W> {
    fn extend<I: IntoIterator<Item = &'a usize>>(&mut self, iter: I) {
        self.insert_range(iter.into_iter().copied());
    }
}
