use fixed_bit_set::bit_set;

#[test]
fn test_shift_left_drops_overflow() {
    let set: bit_set!(8, u8) = [0, 7].into();
    assert_eq!((set << 1).iter().collect::<Vec<_>>(), [1]);
    assert_eq!((set << 7).iter().collect::<Vec<_>>(), [7]);
}

#[test]
fn test_shift_right_drops_underflow() {
    let set: bit_set!(8, u8) = [0, 7].into();
    assert_eq!((set >> 1).iter().collect::<Vec<_>>(), [6]);
    assert_eq!((set >> 7).iter().collect::<Vec<_>>(), [0]);
}

#[test]
fn test_shift_by_zero_is_identity() {
    let set: bit_set!(100) = [0, 50, 99].into();
    assert_eq!(set << 0, set);
    assert_eq!(set >> 0, set);
}

#[test]
fn test_twin_primes() {
    let primes: bit_set!(16, u8) = [2, 3, 5, 7, 11, 13].into();
    let twins = primes & (primes >> 2);
    assert_eq!(twins.iter().collect::<Vec<_>>(), [3, 5, 11]);
}

#[test]
fn test_shift_across_words() {
    let set: bit_set!(40, u8) = [0, 7, 8, 15, 39].into();

    let up = set << 9;
    assert_eq!(up.iter().collect::<Vec<_>>(), [9, 16, 17, 24]);

    let down = set >> 9;
    assert_eq!(down.iter().collect::<Vec<_>>(), [6, 30]);

    let up_words = set << 16;
    assert_eq!(up_words.iter().collect::<Vec<_>>(), [16, 23, 24, 31]);
}

#[test]
fn test_shift_keeps_padding_clear() {
    let mut set = <bit_set!(20, u8)>::new();
    set.fill();
    set <<= 5;
    assert_eq!(set.len(), 15);
    assert_eq!(set.first(), Some(5));
    assert_eq!(set.last(), Some(19));
    assert_eq!(set.as_words()[0] & 0x0F, 0);

    set >>= 19;
    assert_eq!(set.iter().collect::<Vec<_>>(), [0]);
}

#[test]
fn test_shift_large_words() {
    let set: bit_set!(300) = [0, 63, 64, 127, 255, 299].into();

    assert_eq!((set << 64).iter().collect::<Vec<_>>(), [
        64, 127, 128, 191
    ]);
    assert_eq!((set << 1).iter().collect::<Vec<_>>(), [
        1, 64, 65, 128, 256
    ]);
    assert_eq!((set >> 65).iter().collect::<Vec<_>>(), [62, 190, 234]);
    assert_eq!((&set >> 299).iter().collect::<Vec<_>>(), [0]);
}

#[test]
fn test_shift_u128_words() {
    let set: bit_set!(200, u128) = [0, 127, 128, 199].into();
    assert_eq!((set << 72).iter().collect::<Vec<_>>(), [72, 199]);
    assert_eq!((set >> 100).iter().collect::<Vec<_>>(), [27, 28, 99]);
}

#[test]
#[should_panic(expected = "shift amount")]
#[cfg(debug_assertions)]
fn test_shift_out_of_range_panics_in_debug() {
    let set: bit_set!(8, u8) = [0].into();
    let _ = set << 8;
}
