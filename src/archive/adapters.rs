// ============================================================================
// Stock Archive Adapters
// Ready-made readers and writers over common buffers
// ============================================================================

use super::traits::{ElementReader, ElementWriter};
use crate::array::{ArrayError, ArrayResult};
use arrayvec::ArrayVec;

// ============================================================================
// Writers
// ============================================================================

#[cfg(feature = "std")]
impl<T: Clone> ElementWriter<T> for Vec<T> {
    type Error = core::convert::Infallible;

    fn begin_sequence(&mut self, len: usize) -> Result<(), Self::Error> {
        self.reserve(len);
        Ok(())
    }

    fn write_element(&mut self, value: &T) -> Result<(), Self::Error> {
        self.push(value.clone());
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<A> ElementWriter<A::Item> for smallvec::SmallVec<A>
where
    A: smallvec::Array,
    A::Item: Clone,
{
    type Error = core::convert::Infallible;

    fn begin_sequence(&mut self, len: usize) -> Result<(), Self::Error> {
        self.reserve(len);
        Ok(())
    }

    fn write_element(&mut self, value: &A::Item) -> Result<(), Self::Error> {
        self.push(value.clone());
        Ok(())
    }
}

/// Allocation-free writer, usable on device targets.
///
/// The whole sequence is rejected up front if it does not fit, so a failed
/// save leaves the buffer untouched.
impl<T: Clone, const CAP: usize> ElementWriter<T> for ArrayVec<T, CAP> {
    type Error = ArrayError;

    fn begin_sequence(&mut self, len: usize) -> ArrayResult<()> {
        if len > self.remaining_capacity() {
            tracing::debug!(
                len,
                remaining = self.remaining_capacity(),
                capacity = CAP,
                "archive buffer cannot hold sequence"
            );
            return Err(ArrayError::ArchiveFull { capacity: CAP });
        }
        Ok(())
    }

    fn write_element(&mut self, value: &T) -> ArrayResult<()> {
        self.try_push(value.clone()).map_err(|_| {
            tracing::debug!(capacity = CAP, "archive buffer full");
            ArrayError::ArchiveFull { capacity: CAP }
        })
    }
}

// ============================================================================
// Readers
// ============================================================================

/// Reader over any iterator, tracking how many elements each sequence
/// consumed.
#[derive(Debug, Clone)]
pub struct IterReader<I> {
    iter: I,
    expected: usize,
    read: usize,
}

impl<I: Iterator> IterReader<I> {
    pub fn new<II>(source: II) -> Self
    where
        II: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
            expected: 0,
            read: 0,
        }
    }

    /// Elements consumed by the current (or last) sequence.
    pub fn elements_read(&self) -> usize {
        self.read
    }

    /// Give back the iterator, positioned after the last element read.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> ElementReader<I::Item> for IterReader<I> {
    type Error = ArrayError;

    fn begin_sequence(&mut self, len: usize) -> ArrayResult<()> {
        self.expected = len;
        self.read = 0;
        Ok(())
    }

    fn read_element(&mut self) -> ArrayResult<I::Item> {
        match self.iter.next() {
            Some(value) => {
                self.read += 1;
                Ok(value)
            },
            None => {
                tracing::debug!(
                    expected = self.expected,
                    read = self.read,
                    "archive reader exhausted"
                );
                Err(ArrayError::ArchiveExhausted {
                    expected: self.expected,
                    read: self.read,
                })
            },
        }
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;
    use crate::array::{FixedArray, Vector3i};
    use smallvec::SmallVec;

    #[test]
    fn test_vec_writer_appends() {
        let mut out = vec![0];
        Vector3i::new([1, 2, 3]).save(&mut out).unwrap();
        assert_eq!(out, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_smallvec_writer_stays_inline() {
        let mut out: SmallVec<[i32; 4]> = SmallVec::new();
        Vector3i::new([7, 8, 9]).save(&mut out).unwrap();
        assert_eq!(out.as_slice(), &[7, 8, 9]);
        assert!(!out.spilled());
    }

    #[test]
    fn test_arrayvec_writer() {
        let mut out = ArrayVec::<i32, 3>::new();
        Vector3i::new([4, 5, 6]).save(&mut out).unwrap();
        assert_eq!(out.as_slice(), &[4, 5, 6]);
        assert!(out.is_full());
    }

    #[test]
    fn test_arrayvec_writer_rejects_oversized_sequence() {
        let mut out = ArrayVec::<i32, 4>::new();
        out.push(1);
        out.push(2);

        let result = Vector3i::new([4, 5, 6]).save(&mut out);
        assert_eq!(result, Err(ArrayError::ArchiveFull { capacity: 4 }));
        assert_eq!(out.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_arrayvec_write_element_full() {
        let mut out = ArrayVec::<u8, 1>::new();
        assert_eq!(out.write_element(&1), Ok(()));
        assert_eq!(
            out.write_element(&2),
            Err(ArrayError::ArchiveFull { capacity: 1 })
        );
    }

    #[test]
    fn test_iter_reader_counts_per_sequence() {
        let mut reader = IterReader::new(1..=5);
        let a = FixedArray::<i32, 2>::load(&mut reader).unwrap();
        assert_eq!(reader.elements_read(), 2);
        let b = FixedArray::<i32, 3>::load(&mut reader).unwrap();
        assert_eq!(reader.elements_read(), 3);
        assert_eq!(a.as_slice(), &[1, 2]);
        assert_eq!(b.as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn test_iter_reader_exhausted() {
        let mut reader = IterReader::new(vec![1.0f64]);
        let result = FixedArray::<f64, 3>::load(&mut reader);
        assert_eq!(
            result,
            Err(ArrayError::ArchiveExhausted {
                expected: 3,
                read: 1
            })
        );
    }

    #[test]
    fn test_iter_reader_empty_sequence() {
        let mut reader = IterReader::new(core::iter::empty::<u8>());
        let a = FixedArray::<u8, 0>::load(&mut reader).unwrap();
        assert!(a.is_empty());
        assert_eq!(reader.elements_read(), 0);
    }
}
