use fixed_bit_set::{BitSet, CapacityError, bit_set};

type Small = bit_set!(20, u8);
type Wide = bit_set!(200);

#[test]
fn test_new() {
    let set = Wide::new();
    assert!(set.is_empty());
    assert!(!set.is_full());
    assert_eq!(set.len(), 0);
    assert_eq!(Wide::max_size(), 200);
    assert_eq!(Wide::capacity(), 256);
    assert_eq!(set, Wide::default());
}

#[test]
fn test_basic_operations() {
    let mut set = Wide::new();

    // Insert reports whether the element was new
    assert!(set.insert(10));
    assert!(set.insert(142));
    assert!(!set.insert(10));

    assert!(set.contains(10));
    assert!(set.contains(142));
    assert!(!set.contains(11));
    assert_eq!(set.count(142), 1);
    assert_eq!(set.count(141), 0);
    assert_eq!(set.len(), 2);
    assert_eq!(set.ssize(), 2);

    // Remove and erase
    assert!(set.remove(10));
    assert!(!set.remove(10));
    assert_eq!(set.erase(142), 1);
    assert_eq!(set.erase(142), 0);
    assert!(set.is_empty());
}

#[test]
fn test_fill_and_clear() {
    let mut set = Small::new();
    set.fill();
    assert!(set.is_full());
    assert_eq!(set.len(), 20);
    assert_eq!(set.last(), Some(19));

    set.remove(7);
    assert!(!set.is_full());

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.first(), None);
}

#[test]
fn test_exact_word_multiple_is_full() {
    let mut set = <bit_set!(64)>::new();
    set.fill();
    assert!(set.is_full());
    assert_eq!(set.as_words(), &[u64::MAX]);
    assert_eq!(set.back(), 63);
}

#[test]
fn test_single_element_capacity() {
    let mut set = <bit_set!(1, u8)>::new();
    assert!(!set.is_full());
    set.insert(0);
    assert!(set.is_full());
    assert_eq!(set.iter().collect::<Vec<_>>(), [0]);
    set.complement();
    assert!(set.is_empty());
}

#[test]
fn test_toggle_returns_previous() {
    let mut set = Small::new();
    assert!(!set.toggle(19));
    assert!(set.contains(19));
    assert!(set.toggle(19));
    assert!(!set.contains(19));
}

#[test]
fn test_try_insert() {
    let mut set = Small::new();
    assert_eq!(set.try_insert(19), Ok(true));
    assert_eq!(set.try_insert(19), Ok(false));
    assert_eq!(
        set.try_insert(20),
        Err(CapacityError {
            index: 20,
            capacity: 20
        })
    );
    assert_eq!(set.len(), 1);
}

#[test]
fn test_try_from_slice() {
    let set = Small::try_from(&[3, 1, 4, 1, 5][..]).unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), [1, 3, 4, 5]);

    let err = Small::try_from(&[3, 25][..]).unwrap_err();
    assert_eq!(err.index, 25);
}

#[test]
fn test_from_iterator_and_extend() {
    let mut set: Wide = [7, 3, 150].into_iter().collect();
    set.extend([3, 4]);
    set.extend(&[199, 0]);
    assert_eq!(set.iter().collect::<Vec<_>>(), [0, 3, 4, 7, 150, 199]);
}

#[test]
fn test_insert_and_erase_range() {
    let mut set = Wide::new();
    set.insert_range(50..120);
    assert_eq!(set.len(), 70);
    assert_eq!(set.first(), Some(50));
    assert_eq!(set.last(), Some(119));

    set.erase_range(60..=109);
    assert_eq!(set.len(), 20);
    assert_eq!(set.range(55..115).collect::<Vec<_>>(), [
        55, 56, 57, 58, 59, 110, 111, 112, 113, 114
    ]);

    set.erase_range(..);
    assert!(set.is_empty());
}

#[test]
fn test_retain() {
    let mut set: Wide = (0..200).collect();
    set.retain(|x| x % 64 == 0);
    assert_eq!(set.iter().collect::<Vec<_>>(), [0, 64, 128, 192]);
}

#[test]
fn test_range_bounds() {
    let set: Small = [0, 5, 8, 13, 19].into();
    assert_eq!(set.range(..).collect::<Vec<_>>(), [0, 5, 8, 13, 19]);
    assert_eq!(set.range(5..13).collect::<Vec<_>>(), [5, 8]);
    assert_eq!(set.range(5..=13).collect::<Vec<_>>(), [5, 8, 13]);
    assert_eq!(set.range(14..).collect::<Vec<_>>(), [19]);
    assert_eq!(set.range(6..8).count(), 0);
    assert_eq!(set.range(1..19).rev().collect::<Vec<_>>(), [13, 8, 5]);
    assert_eq!(set.range(1..19).len(), 3);
}

#[test]
fn test_rank() {
    let set: Wide = [0, 63, 64, 65, 199].into();
    assert_eq!(set.rank(0), 0);
    assert_eq!(set.rank(1), 1);
    assert_eq!(set.rank(64), 2);
    assert_eq!(set.rank(66), 4);
    assert_eq!(set.rank(199), 4);
    assert_eq!(set.rank(200), 5);
}

#[test]
fn test_words_round_trip() {
    let set: Small = [0, 9, 16].into();
    // element 0 is the top bit of the last word
    assert_eq!(set.into_words(), [0b1000_0000, 0b0100_0000, 0b1000_0000]);
    assert_eq!(Small::from_words(set.into_words()), Ok(set));

    let err = Small::from_words([0b0000_0100, 0, 0]).unwrap_err();
    assert_eq!(err.index, 21);
}

#[test]
fn test_swap() {
    let mut a: Small = [1, 2].into();
    let mut b: Small = [18].into();
    a.swap(&mut b);
    assert_eq!(a, [18].into());
    assert_eq!(b, [1, 2].into());
}

#[test]
fn test_front_back() {
    let set: Wide = [42, 7, 190].into();
    assert_eq!(set.front(), 7);
    assert_eq!(set.back(), 190);
    assert_eq!(set.first(), Some(7));
    assert_eq!(set.last(), Some(190));
}

#[test]
fn test_const_construction() {
    const EMPTY: BitSet<10, 1, u16> = BitSet::new();
    assert!(EMPTY.is_empty());
    assert_eq!(EMPTY.as_words(), &[0u16]);
}

#[test]
fn test_hash_follows_contents() {
    use std::collections::HashSet;

    let mut seen = HashSet::new();
    seen.insert(Small::from([1, 2]));
    seen.insert([2, 1].into());
    seen.insert([3].into());
    assert_eq!(seen.len(), 2);
}

#[test]
fn test_display_and_parse() {
    let set: Small = [0, 1, 19].into();
    let text = set.to_string();
    assert_eq!(text, "10000000000000000011");
    assert_eq!(text.parse::<Small>(), Ok(set));
    assert_eq!(format!("{set:?}"), "{0, 1, 19}");
}

#[test]
#[should_panic(expected = "out of range")]
#[cfg(debug_assertions)]
fn test_insert_out_of_range_panics_in_debug() {
    let mut set = Small::new();
    set.insert(20);
}
