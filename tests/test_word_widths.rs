use fixed_bit_set::{BitSet, Word, bit_set};

fn exercise<const N: usize, const WORDS: usize, W: Word>() {
    let elems = [0, 1, N / 3, N / 2, N - 2, N - 1];
    let set: BitSet<N, WORDS, W> = elems.into();

    let mut expected = elems.to_vec();
    expected.sort_unstable();
    expected.dedup();

    assert_eq!(set.iter().collect::<Vec<_>>(), expected);
    assert_eq!(set.iter().rev().collect::<Vec<_>>(), {
        let mut rev = expected.clone();
        rev.reverse();
        rev
    });
    assert_eq!(set.len(), expected.len());
    assert_eq!(set.first(), Some(0));
    assert_eq!(set.last(), Some(N - 1));
    assert_eq!(set.lower_bound(2).position(), expected[2]);

    let shifted = set << 1;
    assert!(shifted.contains(1));
    assert!(!shifted.contains(0));
    assert!(shifted.contains(N - 1));

    let mut full = BitSet::<N, WORDS, W>::new();
    full.fill();
    assert!(full.is_full());
    assert_eq!(full.len(), N);
    assert_eq!((!set).len(), N - set.len());
    assert!(set.is_proper_subset(&full));
}

#[test]
fn test_u8_words() {
    exercise::<50, { fixed_bit_set::word_count::<u8>(50) }, u8>();
}

#[test]
fn test_u16_words() {
    exercise::<50, { fixed_bit_set::word_count::<u16>(50) }, u16>();
}

#[test]
fn test_u32_words() {
    exercise::<50, { fixed_bit_set::word_count::<u32>(50) }, u32>();
}

#[test]
fn test_u64_words() {
    exercise::<130, { fixed_bit_set::word_count::<u64>(130) }, u64>();
}

#[test]
fn test_u128_words() {
    exercise::<300, { fixed_bit_set::word_count::<u128>(300) }, u128>();
}

#[test]
fn test_usize_words() {
    exercise::<70, { fixed_bit_set::word_count::<usize>(70) }, usize>();
}

#[test]
fn test_single_word_exact_fit() {
    let set: bit_set!(32, u32) = [0, 31].into();
    assert_eq!(set.as_words(), &[0x8000_0001]);
    assert_eq!((set >> 31).iter().collect::<Vec<_>>(), [0]);
}
