use fixed_bit_set::{BitSet, bit_set, word_count};

#[test]
fn test_default_word_is_u64() {
    let set = <bit_set!(100)>::new();
    let words: &[u64; 2] = set.as_words();
    assert_eq!(words, &[0, 0]);
    assert_eq!(<bit_set!(100)>::capacity(), 128);
}

#[test]
fn test_explicit_word_type() {
    type Bytes = bit_set!(100, u8);
    assert_eq!(Bytes::capacity(), 104);
    assert_eq!(Bytes::new().into_words().len(), 13);

    type Halves = bit_set!(100, u16);
    assert_eq!(Halves::capacity(), 112);
}

#[test]
fn test_macro_matches_spelled_out_type() {
    let spelled: BitSet<40, { word_count::<u32>(40) }, u32> = [1, 39].into();
    let via_macro: bit_set!(40, u32) = spelled;
    assert_eq!(via_macro.len(), 2);
    assert_eq!(BitSet::<40, 2, u32>::max_size(), 40);
}

#[test]
fn test_macro_accepts_const_expressions() {
    const LANES: usize = 12;
    let mut set = <bit_set!(LANES * 2, u8)>::new();
    set.fill();
    assert_eq!(set.len(), 24);
    assert_eq!(<bit_set!(LANES * 2, u8)>::capacity(), 24);
}

#[test]
fn test_zero_capacity() {
    let set = <bit_set!(0)>::new();
    assert!(set.is_empty());
    assert!(set.is_full());
    assert_eq!(set.into_words(), [0u64; 0]);
    assert_eq!(format!("{set:?}"), "{}");
}
