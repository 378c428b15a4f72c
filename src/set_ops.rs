//! Whole-set algebra, relational predicates and ordering for `BitSet`.
//!
//! Every operation here walks the two word arrays in lockstep and never
//! visits individual elements.

use core::cmp::Ordering;

use crate::{BitSet, Word};

impl<const N: usize, const WORDS: usize, W: Word> BitSet<N, WORDS, W> {
    /// Combines every word of `self` with the matching word of `other`.
    #[inline(always)]
    fn zip_assign(&mut self, other: &Self, op: impl Fn(W, W) -> W) {
        match (self.words.as_mut_slice(), other.words.as_slice()) {
            ([a], [b]) => *a = op(*a, *b),
            ([a1, a0], [b1, b0]) => {
                *a1 = op(*a1, *b1);
                *a0 = op(*a0, *b0);
            }
            (dst, src) => {
                for (d, &s) in dst.iter_mut().zip(src) {
                    *d = op(*d, s);
                }
            }
        }
    }

    /// Adds every element of `other` to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut a: bit_set!(16, u8) = [1, 9].into();
    /// let b: bit_set!(16, u8) = [2, 9].into();
    ///
    /// a.union_with(&b);
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [1, 2, 9]);
    /// ```
    pub fn union_with(&mut self, other: &Self) {
        self.zip_assign(other, |a, b| a | b);
    }

    /// Creates a new set holding the elements present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = *self;
        result.union_with(other);
        result
    }

    /// Keeps only the elements of `self` that are also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut a: bit_set!(16, u8) = [1, 9, 12].into();
    /// let b: bit_set!(16, u8) = [2, 9, 12].into();
    ///
    /// a.intersection_with(&b);
    /// assert_eq!(a.iter().collect::<Vec<_>>(), [9, 12]);
    /// ```
    pub fn intersection_with(&mut self, other: &Self) {
        self.zip_assign(other, |a, b| a & b);
    }

    /// Creates a new set holding the elements present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = *self;
        result.intersection_with(other);
        result
    }

    /// Removes every element of `other` from `self`.
    pub fn difference_with(&mut self, other: &Self) {
        self.zip_assign(other, |a, b| a & !b);
    }

    /// Creates a new set holding the elements of `self` that are not in
    /// `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = *self;
        result.difference_with(other);
        result
    }

    /// Keeps the elements present in exactly one of the two sets.
    pub fn symmetric_difference_with(&mut self, other: &Self) {
        self.zip_assign(other, |a, b| a ^ b);
    }

    /// Creates a new set holding the elements present in exactly one of the
    /// two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = *self;
        result.symmetric_difference_with(other);
        result
    }

    /// Replaces the set with its complement within `0..N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_bit_set::bit_set;
    /// let mut set: bit_set!(5, u8) = [0, 3].into();
    /// set.complement();
    /// assert_eq!(set.iter().collect::<Vec<_>>(), [1, 2, 4]);
    /// ```
    #[doc(alias = "flip")]
    pub fn complement(&mut self) -> &mut Self {
        for word in &mut self.words {
            *word = !*word;
        }
        self.clear_padding();
        self
    }

    /// Returns `true` if every element of `self` is in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        is_subset_of(self, other)
    }

    /// Returns `true` if every element of `other` is in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        is_superset_of(self, other)
    }

    /// Returns `true` if `self` is a subset of `other` and the two differ.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        is_proper_subset_of(self, other)
    }

    /// Returns `true` if `self` is a superset of `other` and the two differ.
    #[must_use]
    pub fn is_proper_superset(&self, other: &Self) -> bool {
        is_proper_superset_of(self, other)
    }

    /// Returns `true` if the two sets share at least one element.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        intersects(self, other)
    }

    /// Returns `true` if the two sets share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        disjoint(self, other)
    }
}

/// Returns `true` if every element of `a` is in `b`.
///
/// # Examples
///
/// ```
/// use fixed_bit_set::{bit_set, is_subset_of};
///
/// let a: bit_set!(100) = [3, 70].into();
/// let b: bit_set!(100) = [3, 4, 70].into();
/// assert!(is_subset_of(&a, &b));
/// assert!(!is_subset_of(&b, &a));
/// assert!(is_subset_of(&a, &a));
/// ```
#[must_use]
pub fn is_subset_of<const N: usize, const WORDS: usize, W: Word>(
    a: &BitSet<N, WORDS, W>,
    b: &BitSet<N, WORDS, W>,
) -> bool {
    a.words
        .iter()
        .zip(&b.words)
        .all(|(&x, &y)| (x & !y).is_zero())
}

/// Returns `true` if every element of `b` is in `a`.
#[must_use]
pub fn is_superset_of<const N: usize, const WORDS: usize, W: Word>(
    a: &BitSet<N, WORDS, W>,
    b: &BitSet<N, WORDS, W>,
) -> bool {
    is_subset_of(b, a)
}

/// Returns `true` if `a` is a subset of `b` and `b` has at least one more
/// element.
///
/// Decided in a single pass over the words.
///
/// # Examples
///
/// ```
/// use fixed_bit_set::{bit_set, is_proper_subset_of};
///
/// let a: bit_set!(100) = [3].into();
/// let b: bit_set!(100) = [3, 90].into();
/// assert!(is_proper_subset_of(&a, &b));
/// assert!(!is_proper_subset_of(&a, &a));
/// ```
#[must_use]
pub fn is_proper_subset_of<const N: usize, const WORDS: usize, W: Word>(
    a: &BitSet<N, WORDS, W>,
    b: &BitSet<N, WORDS, W>,
) -> bool {
    let mut pairs = a.words.iter().zip(&b.words);
    while let Some((&x, &y)) = pairs.next() {
        if !(x & !y).is_zero() {
            return false;
        }
        if !(y & !x).is_zero() {
            // strictness settled; only the subset check remains
            return pairs.all(|(&x, &y)| (x & !y).is_zero());
        }
    }
    false
}

/// Returns `true` if `b` is a proper subset of `a`.
#[must_use]
pub fn is_proper_superset_of<const N: usize, const WORDS: usize, W: Word>(
    a: &BitSet<N, WORDS, W>,
    b: &BitSet<N, WORDS, W>,
) -> bool {
    is_proper_subset_of(b, a)
}

/// Returns `true` if `a` and `b` share at least one element.
#[must_use]
pub fn intersects<const N: usize, const WORDS: usize, W: Word>(
    a: &BitSet<N, WORDS, W>,
    b: &BitSet<N, WORDS, W>,
) -> bool {
    a.words
        .iter()
        .zip(&b.words)
        .any(|(&x, &y)| !(x & y).is_zero())
}

/// Returns `true` if `a` and `b` share no element.
#[must_use]
pub fn disjoint<const N: usize, const WORDS: usize, W: Word>(
    a: &BitSet<N, WORDS, W>,
    b: &BitSet<N, WORDS, W>,
) -> bool {
    !intersects(a, b)
}

impl<const N: usize, const WORDS: usize, W: Word> PartialOrd for BitSet<N, WORDS, W> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sets are ordered lexicographically by their ascending element sequences,
/// the same order as `BTreeSet<usize>`: `{0} < {0, 1} < {1}`.
impl<const N: usize, const WORDS: usize, W: Word> Ord for BitSet<N, WORDS, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // the last word holds the smallest elements
        for i in (0..WORDS).rev() {
            let (a, b) = (self.words[i], other.words[i]);
            if a == b {
                continue;
            }

            // `first` is the smallest element in exactly one of the sets;
            // `after` covers the larger elements sharing its word
            let diff = a ^ b;
            let lz = diff.leading_zeros();
            let first = W::TOP >> lz;
            let after = (W::ONES >> lz) >> 1;

            let self_holds = !(a & first).is_zero();
            let (lacking, lacking_higher) = if self_holds {
                (b, &other.words[..i])
            } else {
                (a, &self.words[..i])
            };

            // the set without `first` is smaller only if it has nothing left
            let lacking_has_more =
                !(lacking & after).is_zero() || lacking_higher.iter().any(|w| !w.is_zero());
            return if self_holds == lacking_has_more {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use core::cmp::Ordering;

    use super::*;
    use crate::bit_set;

    type Set = bit_set!(20, u8);

    fn set(elems: &[usize]) -> Set {
        elems.iter().copied().collect()
    }

    #[test]
    fn test_prefix_orders_first() {
        assert!(set(&[0]) < set(&[0, 1]));
        assert!(set(&[0, 1]) < set(&[1]));
        assert!(set(&[]) < set(&[19]));
        assert!(set(&[1]) > set(&[0, 5]));
        assert!(set(&[2, 17]) < set(&[2, 18]));
        assert!(set(&[2, 17]) > set(&[2, 16, 19]));
        assert_eq!(set(&[4, 12]).cmp(&set(&[4, 12])), Ordering::Equal);
    }

    #[test]
    fn test_proper_subset_needs_extra_element() {
        let a = set(&[1, 10]);
        let b = set(&[1, 10, 19]);
        assert!(is_proper_subset_of(&a, &b));
        assert!(!is_proper_subset_of(&b, &a));
        assert!(!is_proper_subset_of(&a, &a));
        assert!(is_proper_superset_of(&b, &a));
        assert!(!is_proper_subset_of(&set(&[2]), &set(&[3, 4])));
    }

    #[test]
    fn test_complement_respects_padding() {
        let mut s = set(&[0, 19]);
        s.complement();
        assert_eq!(s.len(), 18);
        assert!(!s.contains(0));
        assert!(!s.contains(19));
        s.complement();
        assert_eq!(s, set(&[0, 19]));
    }
}
