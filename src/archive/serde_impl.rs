// ============================================================================
// Serde Integration
// FixedArray as a fixed-length tuple of exactly N elements
// ============================================================================
//
// serde's own array impls stop at 32 elements; these cover every N.

use crate::array::FixedArray;
use arrayvec::ArrayVec;
use core::fmt;
use core::marker::PhantomData;
use serde::de::{self, Deserialize, Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeTuple, Serializer};

impl<T: Serialize, const N: usize> Serialize for FixedArray<T, N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(N)?;
        for value in self.iter() {
            tuple.serialize_element(value)?;
        }
        tuple.end()
    }
}

struct FixedArrayVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for FixedArrayVisitor<T, N> {
    type Value = FixedArray<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "an array of length {}", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut staged = ArrayVec::<T, N>::new();
        for index in 0..N {
            match seq.next_element()? {
                Some(value) => staged.push(value),
                None => return Err(de::Error::invalid_length(index, &self)),
            }
        }
        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(N + 1, &self));
        }

        staged
            .into_inner()
            .map(FixedArray)
            .map_err(|partial| de::Error::invalid_length(partial.len(), &self))
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedArray<T, N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(N, FixedArrayVisitor(PhantomData))
    }
}
