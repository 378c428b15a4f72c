//! Rkyv implementation for `BitSet`.
//!
//! A set archives as the ascending list of its elements, so the archived
//! form does not depend on the storage word.

use alloc::vec::Vec;

use rkyv::{
    Archive, Archived, Deserialize, Place, Serialize,
    rancor::{Fallible, Source},
    ser::{Allocator, Writer},
    vec::{ArchivedVec, VecResolver},
};

use crate::{BitSet, Word};

/// The archived version of [`BitSet`]: its elements in ascending order.
pub type ArchivedBitSet = ArchivedVec<Archived<u32>>;

/// The resolver for [`BitSet`].
pub type BitSetResolver = VecResolver;

impl<const N: usize, const WORDS: usize, W: Word> BitSet<N, WORDS, W> {
    fn archived_elements(&self) -> Vec<u32> {
        self.iter().map(|x| x as u32).collect()
    }
}

impl<const N: usize, const WORDS: usize, W: Word> Archive for BitSet<N, WORDS, W> {
    type Archived = ArchivedBitSet;
    type Resolver = BitSetResolver;

    fn resolve(&self, resolver: Self::Resolver, out: Place<Self::Archived>) {
        ArchivedVec::resolve_from_slice(&self.archived_elements(), resolver, out);
    }
}

impl<S, const N: usize, const WORDS: usize, W> Serialize<S> for BitSet<N, WORDS, W>
where
    S: Fallible + Allocator + Writer + ?Sized,
    W: Word,
{
    #[inline]
    fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        debug_assert!(N as u64 <= u64::from(u32::MAX) + 1);
        ArchivedVec::<_>::serialize_from_slice(&self.archived_elements(), serializer)
    }
}

impl<D, const N: usize, const WORDS: usize, W> Deserialize<BitSet<N, WORDS, W>, D>
    for ArchivedBitSet
where
    D: Fallible + ?Sized,
    D::Error: Source,
    W: Word,
{
    fn deserialize(&self, _deserializer: &mut D) -> Result<BitSet<N, WORDS, W>, D::Error> {
        let mut set = BitSet::new();
        for x in self.iter() {
            set.try_insert(x.to_native() as usize)
                .map_err(<D::Error as Source>::new)?;
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use crate::bit_set;

    type Set = bit_set!(200);

    #[test]
    fn test_basic_archive() {
        let set: Set = [5, 64, 199].into();

        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&set).unwrap();
        let archived = rkyv::access::<super::ArchivedBitSet, rkyv::rancor::Error>(&bytes).unwrap();
        assert_eq!(archived.len(), 3);

        let deserialized: Set = rkyv::api::high::from_bytes::<_, rkyv::rancor::Error>(&bytes).unwrap();
        assert_eq!(deserialized, set);
    }

    #[test]
    fn test_out_of_range_element_is_rejected() {
        let wide: bit_set!(300) = [10, 250].into();
        let bytes = rkyv::to_bytes::<rkyv::rancor::Error>(&wide).unwrap();

        let narrow = rkyv::api::high::from_bytes::<Set, rkyv::rancor::Error>(&bytes);
        assert!(narrow.is_err());
    }
}
