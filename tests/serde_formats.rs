#![cfg(feature = "serde")]

use fixed_bit_set::bit_set;
use serde::{Deserialize, Serialize};

type Set = bit_set!(100);

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Config {
    name: String,
    enabled: Set,
    #[serde(with = "fixed_bit_set::serde::words")]
    raw: bit_set!(20, u8),
    #[serde(with = "fixed_bit_set::serde::binary")]
    mask: bit_set!(8, u8),
}

fn sample() -> Config {
    Config {
        name: "lanes".into(),
        enabled: [0, 42, 99].into(),
        raw: [1, 19].into(),
        mask: [0, 7].into(),
    }
}

#[test]
fn test_json_layout() {
    let json = serde_json::to_string(&sample()).unwrap();
    assert_eq!(
        json,
        r#"{"name":"lanes","enabled":[0,42,99],"raw":[16,0,64],"mask":"10000001"}"#
    );
    assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), sample());
}

#[test]
fn test_json_rejects_out_of_range() {
    let err = serde_json::from_str::<Set>("[1, 100]").unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_json_accepts_unsorted_duplicates() {
    let set: Set = serde_json::from_str("[9, 3, 9]").unwrap();
    assert_eq!(set.iter().collect::<Vec<_>>(), [3, 9]);
}

#[test]
fn test_bincode_round_trip() {
    let bytes = bincode::serialize(&sample()).unwrap();
    let back: Config = bincode::deserialize(&bytes).unwrap();
    assert_eq!(back, sample());
}
