// ============================================================================
// FixedArray Serialization Hook
// Reads and writes exactly N elements in index order
// ============================================================================

use super::traits::{read_sequence_into, write_sequence, Archive, ElementReader, ElementWriter};
use crate::array::FixedArray;
use arrayvec::ArrayVec;

impl<T, const N: usize> FixedArray<T, N> {
    /// Write all `N` elements to `writer` in index order.
    ///
    /// # Errors
    /// Propagates the writer's error unchanged.
    pub fn save<W>(&self, writer: &mut W) -> Result<(), W::Error>
    where
        W: ElementWriter<T> + ?Sized,
    {
        tracing::trace!(len = N, "saving fixed array");
        write_sequence(writer, self.as_slice())
    }

    /// Read exactly `N` elements from `reader` into a new instance.
    ///
    /// `T` needs no `Default`: elements are staged on the stack and the
    /// array is only built once all `N` have arrived.
    ///
    /// # Errors
    /// Propagates the reader's error unchanged; nothing is constructed.
    pub fn load<R>(reader: &mut R) -> Result<Self, R::Error>
    where
        R: ElementReader<T> + ?Sized,
    {
        tracing::trace!(len = N, "loading fixed array");
        reader.begin_sequence(N)?;
        let mut staged = ArrayVec::<T, N>::new();
        for _ in 0..N {
            staged.push(reader.read_element()?);
        }
        reader.end_sequence()?;

        match staged.into_inner() {
            Ok(data) => Ok(Self(data)),
            Err(_) => unreachable!("exactly N elements were staged"),
        }
    }

    /// Overwrite all `N` slots with elements read from `reader`.
    ///
    /// On error the slots before the failing element have already been
    /// replaced.
    pub fn load_into<R>(&mut self, reader: &mut R) -> Result<(), R::Error>
    where
        R: ElementReader<T> + ?Sized,
    {
        tracing::trace!(len = N, "loading fixed array in place");
        read_sequence_into(reader, self.as_mut_slice())
    }

    /// Bidirectional hook: saves or loads depending on `archive`.
    pub fn archive<A>(&mut self, archive: &mut A) -> Result<(), A::Error>
    where
        A: Archive<T> + ?Sized,
    {
        archive.archive_slots(self.as_mut_slice())
    }
}


#[cfg(all(test, feature = "std"))]
mod proptests {
    use crate::archive::IterReader;
    use crate::array::FixedArray;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_trip_preserves_order(init in prop::array::uniform16(any::<i64>())) {
            let a = FixedArray::new(init);
            let mut buffer: Vec<i64> = Vec::new();
            a.save(&mut buffer).unwrap();
            prop_assert_eq!(buffer.as_slice(), a.as_slice());

            let b = FixedArray::<i64, 16>::load(&mut IterReader::new(buffer)).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn round_trip_owned_values(words in prop::array::uniform4(".{0,8}")) {
            let a = FixedArray::new(words);
            let mut buffer: Vec<String> = Vec::new();
            a.save(&mut buffer).unwrap();

            let mut b = FixedArray::<String, 4>::default();
            b.load_into(&mut IterReader::new(buffer)).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
