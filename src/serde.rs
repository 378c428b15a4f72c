//! Serde implementations for `BitSet`.
//!
//! By default a set serializes as the ascending sequence of its elements,
//! which reads naturally in self-describing formats and stays independent of
//! the storage word. The [`words`] and [`binary`] modules offer alternative
//! representations for use with `#[serde(with = "...")]`.

use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::{SerializeSeq, SerializeTuple},
};

use crate::{BitSet, Word};

impl<const N: usize, const WORDS: usize, W: Word> Serialize for BitSet<N, WORDS, W> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for x in self {
            seq.serialize_element(&x)?;
        }
        seq.end()
    }
}

impl<'de, const N: usize, const WORDS: usize, W: Word> Deserialize<'de> for BitSet<N, WORDS, W> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ElementsVisitor<const N: usize, const WORDS: usize, W>(PhantomData<W>);

        impl<'de, const N: usize, const WORDS: usize, W: Word> Visitor<'de>
            for ElementsVisitor<N, WORDS, W>
        {
            type Value = BitSet<N, WORDS, W>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence of elements below {N}")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = BitSet::new();
                while let Some(x) = seq.next_element::<usize>()? {
                    set.try_insert(x).map_err(<A::Error as de::Error>::custom)?;
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(ElementsVisitor(PhantomData))
    }
}

/// Serde implementation serializing the set as its raw storage words.
///
/// The words form a fixed-length tuple in storage order: the first word
/// holds the highest block and element 0 is the most significant bit of the
/// last word. Deserialization rejects a wrong number of words and any set
/// padding bit.
///
/// # Examples
///
/// ```
/// use fixed_bit_set::bit_set;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Frame {
///     #[serde(with = "fixed_bit_set::serde::words")]
///     channels: bit_set!(12, u8),
/// }
///
/// let frame = Frame { channels: [0, 9].into() };
/// let json = serde_json::to_string(&frame).unwrap();
/// assert_eq!(json, r#"{"channels":[64,128]}"#);
/// ```
pub mod words {
    use super::*;

    /// Serialize the set as a tuple of `WORDS` words.
    pub fn serialize<S, const N: usize, const WORDS: usize, W>(
        set: &BitSet<N, WORDS, W>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        W: Word + Serialize,
    {
        let mut tuple = serializer.serialize_tuple(WORDS)?;
        for word in set.as_words() {
            tuple.serialize_element(word)?;
        }
        tuple.end()
    }

    /// Deserialize the set from a tuple of `WORDS` words.
    pub fn deserialize<'de, D, const N: usize, const WORDS: usize, W>(
        deserializer: D,
    ) -> Result<BitSet<N, WORDS, W>, D::Error>
    where
        D: Deserializer<'de>,
        W: Word + Deserialize<'de>,
    {
        struct WordsVisitor<const N: usize, const WORDS: usize, W>(PhantomData<W>);

        impl<'de, const N: usize, const WORDS: usize, W> Visitor<'de> for WordsVisitor<N, WORDS, W>
        where
            W: Word + Deserialize<'de>,
        {
            type Value = BitSet<N, WORDS, W>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a tuple of {WORDS} words")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut words = [W::ZERO; WORDS];
                for (i, slot) in words.iter_mut().enumerate() {
                    *slot = seq
                        .next_element()?
                        .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
                }
                if seq.next_element::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(WORDS + 1, &self));
                }
                BitSet::from_words(words).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_tuple(WORDS, WordsVisitor(PhantomData))
    }
}

/// Serde implementation serializing the set as a binary string.
///
/// The string has exactly `N` digits with element 0 rightmost, the format
/// produced by `{:b}`. Deserialization accepts anything
/// [`FromStr`](core::str::FromStr) does.
///
/// # Examples
///
/// ```
/// use fixed_bit_set::bit_set;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Mask {
///     #[serde(with = "fixed_bit_set::serde::binary")]
///     bits: bit_set!(6, u8),
/// }
///
/// let mask = Mask { bits: [0, 5].into() };
/// let json = serde_json::to_string(&mask).unwrap();
/// assert_eq!(json, r#"{"bits":"100001"}"#);
/// ```
pub mod binary {
    use super::*;

    /// Serialize the set as a string of `N` binary digits.
    pub fn serialize<S, const N: usize, const WORDS: usize, W>(
        set: &BitSet<N, WORDS, W>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        W: Word,
    {
        serializer.collect_str(set)
    }

    /// Deserialize the set from a binary string.
    pub fn deserialize<'de, D, const N: usize, const WORDS: usize, W>(
        deserializer: D,
    ) -> Result<BitSet<N, WORDS, W>, D::Error>
    where
        D: Deserializer<'de>,
        W: Word,
    {
        struct BinaryVisitor<const N: usize, const WORDS: usize, W>(PhantomData<W>);

        impl<const N: usize, const WORDS: usize, W: Word> Visitor<'_> for BinaryVisitor<N, WORDS, W> {
            type Value = BitSet<N, WORDS, W>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a binary string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(BinaryVisitor(PhantomData))
    }
}
