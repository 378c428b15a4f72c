//! `BitSet` struct and core implementation.

use core::{
    mem,
    ops::{Bound, RangeBounds},
};

use crate::{
    Word,
    iter::{Cursor, Iter, Ref, ReverseCursor},
    storage::{before_mask, block_offset, locate, used_mask, word_count, word_index},
    traits::CapacityError,
};

/// A fixed-capacity ordered set of the integers `0..N`, packed one bit per
/// element into an inline array of `WORDS` words of type `W`.
///
/// # Overview
///
/// `BitSet` offers the interface of a sorted set (ordered iteration,
/// `lower_bound`/`upper_bound`, lexicographic ordering) together with the
/// bitwise algebra of a bitset (`&`, `|`, `^`, `-`, `!`, `<<`, `>>`). Every
/// whole-set operation runs in O(`WORDS`) and never looks at individual
/// elements.
///
/// # Parameters
///
/// - `N`: the capacity; the set can hold exactly the elements `0..N`.
/// - `WORDS`: the number of storage words, which must equal
///   [`word_count::<W>(N)`](word_count). A mismatch is rejected at compile
///   time. The [`bit_set!`](crate::bit_set) macro fills it in for you.
/// - `W`: the storage word, any unsigned integer (defaults to `u64`).
///
/// # Contract
///
/// Elements passed to the single-element operations must be below `N`, and
/// shift amounts must be below `N`. Violations are caught by debug
/// assertions; checked variants such as [`try_insert`](Self::try_insert)
/// are available where the input is not trusted.
///
/// # Examples
///
/// ```
/// use fixed_bit_set::bit_set;
///
/// let mut set = <bit_set!(16, u8)>::new();
/// assert!(set.insert(11));
/// assert!(set.insert(3));
/// assert!(!set.insert(3)); // already present
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.iter().collect::<Vec<_>>(), [3, 11]);
/// assert_eq!(set.lower_bound(4).get().map(|r| r.get()), Some(11));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitSet<const N: usize, const WORDS: usize, W: Word = u64> {
    pub(crate) words: [W; WORDS],
}

impl<const N: usize, const WORDS: usize, W: Word> BitSet<N, WORDS, W> {
    /// Creates an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// const EMPTY: bit_set!(10) = <bit_set!(10)>::new();
    /// assert!(EMPTY.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        const {
            assert!(
                WORDS == word_count::<W>(N),
                "WORDS must equal word_count::<W>(N)"
            );
        }
        Self {
            words: [W::ZERO; WORDS],
        }
    }

    /// Creates a set from its raw storage words.
    ///
    /// The words use the layout described in [`storage`](crate::storage):
    /// element 0 is the most significant bit of the last word.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] naming the lowest out-of-range element if
    /// any padding bit (an element at or above `N`) is set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set = <bit_set!(12, u8)>::from_words([0b1000_0000, 0b0100_0001]).unwrap();
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [1, 7, 8]);
    ///
    /// let err = <bit_set!(12, u8)>::from_words([0b0000_1000, 0]).unwrap_err();
    /// assert_eq!(err.index, 12);
    /// ```
    pub fn from_words(words: [W; WORDS]) -> Result<Self, CapacityError> {
        let mut set = Self::new();
        set.words = words;
        if let Some(&head) = set.words.first() {
            let stray = head & !used_mask::<W>(N, WORDS);
            if !stray.is_zero() {
                let index = (WORDS - 1) * W::BITS as usize + stray.leading_zeros() as usize;
                return Err(CapacityError::new(index, N));
            }
        }
        Ok(set)
    }

    /// Returns the raw storage words.
    #[must_use]
    #[inline(always)]
    pub const fn as_words(&self) -> &[W; WORDS] {
        &self.words
    }

    /// Consumes the set and returns its raw storage words.
    #[must_use]
    #[inline(always)]
    pub const fn into_words(self) -> [W; WORDS] {
        self.words
    }

    /// Returns the capacity `N`, the number of distinct elements the set can
    /// hold.
    #[must_use]
    #[inline(always)]
    pub const fn max_size() -> usize {
        N
    }

    /// Returns the number of bits in storage, `N` rounded up to a whole
    /// number of words.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// assert_eq!(<bit_set!(17, u8)>::max_size(), 17);
    /// assert_eq!(<bit_set!(17, u8)>::capacity(), 24);
    /// ```
    #[must_use]
    #[inline(always)]
    pub const fn capacity() -> usize {
        WORDS * W::BITS as usize
    }

    /// Zeroes the padding bits of the highest block.
    #[inline(always)]
    pub(crate) fn clear_padding(&mut self) {
        if let Some(head) = self.words.first_mut() {
            *head &= used_mask::<W>(N, WORDS);
        }
    }

    // ========================================================================
    // Single-element operations
    // ========================================================================

    #[inline(always)]
    fn slot(&self, x: usize) -> (usize, W) {
        debug_assert!(x < N, "element {x} out of range for capacity {N}");
        locate::<W>(x, WORDS)
    }

    /// Returns `true` if `x` is in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(8, u8) = [1, 4].into();
    /// assert!(set.contains(4));
    /// assert!(!set.contains(5));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains(&self, x: usize) -> bool {
        let (i, mask) = self.slot(x);
        !(self.words[i] & mask).is_zero()
    }

    /// Returns the number of occurrences of `x`, either 0 or 1.
    #[must_use]
    #[inline]
    pub fn count(&self, x: usize) -> usize {
        usize::from(self.contains(x))
    }

    /// Adds `x` to the set.
    ///
    /// Returns `true` if `x` was not present before.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set = <bit_set!(8, u8)>::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// ```
    #[inline]
    pub fn insert(&mut self, x: usize) -> bool {
        let (i, mask) = self.slot(x);
        let word = &mut self.words[i];
        let inserted = (*word & mask).is_zero();
        *word |= mask;
        inserted
    }

    /// Adds `x` to the set, rejecting elements outside `0..N`.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if `x >= N`; the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set = <bit_set!(8, u8)>::new();
    /// assert_eq!(set.try_insert(7), Ok(true));
    /// assert!(set.try_insert(8).is_err());
    /// ```
    pub fn try_insert(&mut self, x: usize) -> Result<bool, CapacityError> {
        if x >= N {
            return Err(CapacityError::new(x, N));
        }
        Ok(self.insert(x))
    }

    /// Adds every element produced by `iter`.
    pub fn insert_range<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for x in iter {
            self.insert(x);
        }
    }

    /// Removes `x` from the set.
    ///
    /// Returns `true` if `x` was present.
    #[inline]
    pub fn remove(&mut self, x: usize) -> bool {
        let (i, mask) = self.slot(x);
        let word = &mut self.words[i];
        let removed = !(*word & mask).is_zero();
        *word &= !mask;
        removed
    }

    /// Removes `x` from the set and returns how many elements were removed,
    /// either 0 or 1.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set: bit_set!(8, u8) = [3].into();
    /// assert_eq!(set.erase(3), 1);
    /// assert_eq!(set.erase(3), 0);
    /// ```
    #[inline]
    pub fn erase(&mut self, x: usize) -> usize {
        usize::from(self.remove(x))
    }

    /// Removes every element within `range`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set: bit_set!(16, u8) = [1, 4, 6, 9, 15].into();
    /// set.erase_range(4..=9);
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [1, 15]);
    /// ```
    pub fn erase_range<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = Self::bounds(range);
        let mut x = self.find_next(start);
        while x < end {
            self.remove(x);
            x = self.find_next(x + 1);
        }
    }

    /// Flips the membership of `x` and returns whether it was present
    /// before.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set = <bit_set!(8, u8)>::new();
    /// assert!(!set.toggle(5));
    /// assert!(set.contains(5));
    /// assert!(set.toggle(5));
    /// assert!(!set.contains(5));
    /// ```
    #[doc(alias = "replace")]
    #[inline]
    pub fn toggle(&mut self, x: usize) -> bool {
        let (i, mask) = self.slot(x);
        let word = &mut self.words[i];
        let prev = !(*word & mask).is_zero();
        *word ^= mask;
        prev
    }

    /// Retains only the elements for which `f` returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set: bit_set!(10) = (0..10).collect();
    /// set.retain(|x| x % 3 == 0);
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [0, 3, 6, 9]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(usize) -> bool,
    {
        let mut x = self.find_first();
        while x < N {
            if !f(x) {
                self.remove(x);
            }
            x = self.find_next(x + 1);
        }
    }

    // ========================================================================
    // Whole-set state
    // ========================================================================

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.words = [W::ZERO; WORDS];
        debug_assert!(self.is_empty());
    }

    /// Inserts every element of `0..N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set = <bit_set!(13, u8)>::new();
    /// set.fill();
    /// assert!(set.is_full());
    /// assert_eq!(set.len(), 13);
    /// ```
    #[inline]
    pub fn fill(&mut self) {
        self.words = [W::ONES; WORDS];
        self.clear_padding();
        debug_assert!(self.is_full());
    }

    /// Exchanges the contents of two sets.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.words, &mut other.words);
    }

    /// Returns the number of elements.
    ///
    /// Time complexity: O(`WORDS`); the count is not cached.
    #[must_use]
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        match self.words.as_slice() {
            [] => 0,
            [w] => w.count_ones() as usize,
            [w1, w0] => w1.count_ones() as usize + w0.count_ones() as usize,
            words => words.iter().map(|w| w.count_ones() as usize).sum(),
        }
    }

    /// Returns the number of elements as a signed integer.
    #[must_use]
    pub fn ssize(&self) -> isize {
        self.len() as isize
    }

    /// Returns `true` if the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self.words.as_slice() {
            [] => true,
            [w] => w.is_zero(),
            [w1, w0] => (*w1 | *w0).is_zero(),
            words => words.iter().all(|w| w.is_zero()),
        }
    }

    /// Returns `true` if the set holds every element of `0..N`.
    #[must_use]
    pub fn is_full(&self) -> bool {
        match self.words.split_first() {
            None => true,
            Some((&head, tail)) => {
                head == used_mask::<W>(N, WORDS) && tail.iter().all(|&w| w == W::ONES)
            }
        }
    }

    /// Returns the number of elements strictly below `x`.
    ///
    /// `x` may equal `N`, in which case this is [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(20, u8) = [5, 10, 15].into();
    /// assert_eq!(set.rank(0), 0);
    /// assert_eq!(set.rank(6), 1);
    /// assert_eq!(set.rank(15), 2);
    /// assert_eq!(set.rank(20), 3);
    /// ```
    #[must_use]
    pub fn rank(&self, x: usize) -> usize {
        debug_assert!(x <= N, "rank position {x} out of range for capacity {N}");
        if x >= N {
            return self.len();
        }
        let (block, offset) = block_offset::<W>(x, WORDS);
        let i = word_index(block, WORDS);
        let below: usize = self.words[i + 1..]
            .iter()
            .map(|w| w.count_ones() as usize)
            .sum();
        below + (self.words[i] & before_mask::<W>(offset)).count_ones() as usize
    }

    // ========================================================================
    // Scans
    // ========================================================================

    /// Smallest element, or `N` if the set is empty.
    pub(crate) fn find_first(&self) -> usize {
        let mut base = 0;
        for &word in self.words.iter().rev() {
            if !word.is_zero() {
                return base + word.leading_zeros() as usize;
            }
            base += W::BITS as usize;
        }
        N
    }

    /// Largest element, or `N` if the set is empty.
    pub(crate) fn find_last(&self) -> usize {
        let bits = W::BITS as usize;
        for (i, &word) in self.words.iter().enumerate() {
            if !word.is_zero() {
                let block = word_index(i, WORDS);
                return (block + 1) * bits - 1 - word.trailing_zeros() as usize;
            }
        }
        N
    }

    /// Smallest element `>= k`, or `N` if there is none.
    pub(crate) fn find_next(&self, k: usize) -> usize {
        debug_assert!(k <= N, "cursor {k} out of range for capacity {N}");
        if k >= N {
            return N;
        }
        let (block, offset) = block_offset::<W>(k, WORDS);
        let i = word_index(block, WORDS);

        // first partial word
        let head = self.words[i] << offset;
        if !head.is_zero() {
            return k + head.leading_zeros() as usize;
        }

        // remaining words, towards element N - 1
        let mut base = (block + 1) * W::BITS as usize;
        for &word in self.words[..i].iter().rev() {
            if !word.is_zero() {
                return base + word.leading_zeros() as usize;
            }
            base += W::BITS as usize;
        }
        N
    }

    /// Largest element `<= k`, or `N` if there is none.
    pub(crate) fn find_prev(&self, k: usize) -> usize {
        debug_assert!(k < N, "cursor {k} out of range for capacity {N}");
        let (block, offset) = block_offset::<W>(k, WORDS);
        let i = word_index(block, WORDS);

        // first partial word
        let head = self.words[i] >> (W::BITS - 1 - offset);
        if !head.is_zero() {
            return k - head.trailing_zeros() as usize;
        }

        // remaining words, towards element 0; `start` is the first element
        // of the block just scanned
        let mut start = block * W::BITS as usize;
        for &word in &self.words[i + 1..] {
            if !word.is_zero() {
                return start - 1 - word.trailing_zeros() as usize;
            }
            start -= W::BITS as usize;
        }
        N
    }

    /// Returns the smallest element, or [`None`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(100) = [70, 5, 20].into();
    /// assert_eq!(set.first(), Some(5));
    /// assert_eq!(set.last(), Some(70));
    /// assert_eq!(<bit_set!(100)>::new().first(), None);
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        let x = self.find_first();
        (x < N).then_some(x)
    }

    /// Returns the largest element, or [`None`] if the set is empty.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        let x = self.find_last();
        (x < N).then_some(x)
    }

    /// Returns a handle to the smallest element.
    ///
    /// The set must not be empty.
    #[must_use]
    pub fn front(&self) -> Ref<'_, N, WORDS, W> {
        debug_assert!(!self.is_empty(), "front() called on an empty set");
        Ref::new(self, self.find_first())
    }

    /// Returns a handle to the largest element.
    ///
    /// The set must not be empty.
    #[must_use]
    pub fn back(&self) -> Ref<'_, N, WORDS, W> {
        debug_assert!(!self.is_empty(), "back() called on an empty set");
        Ref::new(self, self.find_last())
    }

    // ========================================================================
    // Cursors and iteration
    // ========================================================================

    /// Returns a cursor at the smallest element, or [`end`](Self::end) if
    /// the set is empty.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, N, WORDS, W> {
        Cursor::new(self, self.find_first())
    }

    /// Returns the past-the-end cursor.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, N, WORDS, W> {
        Cursor::new(self, N)
    }

    /// Returns a reverse cursor at the largest element.
    #[must_use]
    pub fn rbegin(&self) -> ReverseCursor<'_, N, WORDS, W> {
        ReverseCursor::new(self.end())
    }

    /// Returns the past-the-end reverse cursor.
    #[must_use]
    pub fn rend(&self) -> ReverseCursor<'_, N, WORDS, W> {
        ReverseCursor::new(self.begin())
    }

    /// Returns a cursor at `x` if it is present, otherwise
    /// [`end`](Self::end).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(8, u8) = [2, 6].into();
    /// assert_eq!(set.find(6).position(), 6);
    /// assert!(set.find(3).is_end());
    /// ```
    #[must_use]
    pub fn find(&self, x: usize) -> Cursor<'_, N, WORDS, W> {
        if self.contains(x) {
            Cursor::new(self, x)
        } else {
            self.end()
        }
    }

    /// Returns a cursor at the smallest element `>= x`.
    #[must_use]
    pub fn lower_bound(&self, x: usize) -> Cursor<'_, N, WORDS, W> {
        debug_assert!(x < N, "element {x} out of range for capacity {N}");
        Cursor::new(self, self.find_next(x))
    }

    /// Returns a cursor at the smallest element `> x`.
    #[must_use]
    pub fn upper_bound(&self, x: usize) -> Cursor<'_, N, WORDS, W> {
        debug_assert!(x < N, "element {x} out of range for capacity {N}");
        Cursor::new(self, self.find_next(x + 1))
    }

    /// Returns `(lower_bound(x), upper_bound(x))`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(16, u8) = [3, 9].into();
    ///
    /// let (lo, hi) = set.equal_range(3);
    /// assert_eq!(lo.until(hi).collect::<Vec<_>>(), [3]);
    ///
    /// let (lo, hi) = set.equal_range(5);
    /// assert_eq!(lo, hi);
    /// ```
    #[must_use]
    pub fn equal_range(&self, x: usize) -> (Cursor<'_, N, WORDS, W>, Cursor<'_, N, WORDS, W>) {
        (self.lower_bound(x), self.upper_bound(x))
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(70) = [64, 3, 40].into();
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [3, 40, 64]);
    /// assert_eq!(set.iter().rev().collect::<Vec<_>>(), [64, 40, 3]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, N, WORDS, W> {
        Iter::new(self, 0, N)
    }

    /// Returns an iterator over the elements within `range`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let set: bit_set!(32, u8) = [1, 8, 9, 17, 30].into();
    /// assert_eq!(set.range(8..18).collect::<Vec<_>>(), [8, 9, 17]);
    /// assert_eq!(set.range(..=8).collect::<Vec<_>>(), [1, 8]);
    /// ```
    #[must_use]
    pub fn range<R>(&self, range: R) -> Iter<'_, N, WORDS, W>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = Self::bounds(range);
        Iter::new(self, start, end)
    }

    /// Resolves `range` to a half-open window clamped to `0..=N`.
    fn bounds<R>(range: R) -> (usize, usize)
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => N,
        };
        debug_assert!(
            start <= end && end <= N,
            "range {start}..{end} out of range for capacity {N}"
        );
        (start.min(N), end.clamp(start.min(N), N))
    }

    // ========================================================================
    // Shift Operations
    // ========================================================================

    /// Adds `n` to every element, dropping the ones that reach `N`.
    ///
    /// This is the `<<=` operator. `n` must be below `N`; shifting by zero
    /// leaves the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set: bit_set!(8, u8) = [0, 7].into();
    /// set.shift_left(1);
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [1]);
    /// ```
    pub fn shift_left(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        debug_assert!(n < N, "shift amount {n} out of range for capacity {N}");
        let bits = W::BITS as usize;
        let (word_shift, bit_shift) = (n / bits, (n % bits) as u32);

        match self.words.as_mut_slice() {
            [] => {}
            [word] => {
                *word = if word_shift == 0 {
                    *word >> bit_shift
                } else {
                    W::ZERO
                };
            }
            words => {
                // words move towards index 0, pulling bits down from the
                // next word
                for i in 0..WORDS {
                    let src = i + word_shift;
                    let mut word = if src < WORDS {
                        words[src] >> bit_shift
                    } else {
                        W::ZERO
                    };
                    if bit_shift != 0 && src + 1 < WORDS {
                        word |= words[src + 1] << (W::BITS - bit_shift);
                    }
                    words[i] = word;
                }
            }
        }
        self.clear_padding();
    }

    /// Subtracts `n` from every element, dropping the ones that go below
    /// zero.
    ///
    /// This is the `>>=` operator. `n` must be below `N`; shifting by zero
    /// leaves the set untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set: bit_set!(20, u8) = [1, 9, 19].into();
    /// set.shift_right(9);
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [0, 10]);
    /// ```
    pub fn shift_right(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        debug_assert!(n < N, "shift amount {n} out of range for capacity {N}");
        let bits = W::BITS as usize;
        let (word_shift, bit_shift) = (n / bits, (n % bits) as u32);

        match self.words.as_mut_slice() {
            [] => {}
            [word] => {
                *word = if word_shift == 0 {
                    *word << bit_shift
                } else {
                    W::ZERO
                };
            }
            words => {
                // words move towards index WORDS - 1, pulling bits up from
                // the previous word
                for i in (0..WORDS).rev() {
                    let word = match i.checked_sub(word_shift) {
                        Some(src) => {
                            let mut word = words[src] << bit_shift;
                            if bit_shift != 0 && src > 0 {
                                word |= words[src - 1] >> (W::BITS - bit_shift);
                            }
                            word
                        }
                        None => W::ZERO,
                    };
                    words[i] = word;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::bit_set;

    type Small = bit_set!(20, u8);

    #[test]
    fn test_scans_across_words() {
        let set: Small = [0, 7, 8, 15, 16, 19].into();
        assert_eq!(set.find_first(), 0);
        assert_eq!(set.find_last(), 19);
        assert_eq!(set.find_next(1), 7);
        assert_eq!(set.find_next(9), 15);
        assert_eq!(set.find_next(17), 19);
        assert_eq!(set.find_next(20), 20);
        assert_eq!(set.find_prev(19), 19);
        assert_eq!(set.find_prev(18), 16);
        assert_eq!(set.find_prev(14), 8);
        assert_eq!(set.find_prev(6), 0);
    }

    #[test]
    fn test_scans_on_empty_return_sentinel() {
        let set = Small::new();
        assert_eq!(set.find_first(), 20);
        assert_eq!(set.find_last(), 20);
        assert_eq!(set.find_next(0), 20);
        assert_eq!(set.find_prev(19), 20);
    }

    #[test]
    fn test_padding_stays_clear() {
        let mut set = Small::new();
        set.fill();
        assert_eq!(set.words[0], 0b1111_0000);
        set.insert(19);
        set.shift_left(3);
        assert_eq!(set.words[0] & 0b0000_1111, 0);
        assert_eq!(set.len(), 17);
    }

    #[test]
    fn test_zero_capacity() {
        let mut set = <bit_set!(0, u8)>::new();
        assert!(set.is_empty());
        assert!(set.is_full());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
        assert_eq!(set.iter().count(), 0);
        set.fill();
        set.clear();
        set.shift_left(0);
        assert!(set.begin().is_end());
    }
}
