// ============================================================================
// Archive Capability Traits
// Contract between FixedArray and an external serialization framework
// ============================================================================

/// A sink that accepts a sequence of `T` in order.
///
/// Implemented by the serialization framework. The array calls
/// [`begin_sequence`](Self::begin_sequence) once with its length, then
/// [`write_element`](Self::write_element) exactly that many times in index
/// order, then [`end_sequence`](Self::end_sequence).
pub trait ElementWriter<T> {
    /// Error reported by the framework
    type Error;

    /// Announce a sequence of `len` elements.
    ///
    /// Formats with a length prefix write it here. A writer that cannot hold
    /// `len` more elements should fail here rather than part-way through.
    fn begin_sequence(&mut self, len: usize) -> Result<(), Self::Error> {
        let _ = len;
        Ok(())
    }

    /// Write the next element.
    fn write_element(&mut self, value: &T) -> Result<(), Self::Error>;

    /// Close the sequence opened by `begin_sequence`.
    fn end_sequence(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A source that yields a sequence of `T` in order.
///
/// Mirror of [`ElementWriter`]: `begin_sequence(len)`, then `len` calls to
/// [`read_element`](Self::read_element), then `end_sequence()`.
pub trait ElementReader<T> {
    /// Error reported by the framework
    type Error;

    /// Announce that `len` elements are about to be read.
    fn begin_sequence(&mut self, len: usize) -> Result<(), Self::Error> {
        let _ = len;
        Ok(())
    }

    /// Read the next element.
    fn read_element(&mut self) -> Result<T, Self::Error>;

    fn end_sequence(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Bidirectional archive: one call site serves both saving and loading.
///
/// `archive_slots` either writes every slot out or overwrites every slot
/// with freshly read values, depending on the direction of the archive.
pub trait Archive<T> {
    type Error;

    /// Transfer all of `slots` in index order.
    fn archive_slots(&mut self, slots: &mut [T]) -> Result<(), Self::Error>;

    /// True when `archive_slots` overwrites the slots.
    fn is_loading(&self) -> bool;
}

/// Saving direction: wraps an [`ElementWriter`].
#[derive(Debug, Default)]
pub struct Saving<W>(pub W);

/// Loading direction: wraps an [`ElementReader`].
#[derive(Debug, Default)]
pub struct Loading<R>(pub R);

impl<W> Saving<W> {
    pub fn into_inner(self) -> W {
        self.0
    }
}

impl<R> Loading<R> {
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<T, W: ElementWriter<T>> Archive<T> for Saving<W> {
    type Error = W::Error;

    fn archive_slots(&mut self, slots: &mut [T]) -> Result<(), W::Error> {
        write_sequence(&mut self.0, slots)
    }

    fn is_loading(&self) -> bool {
        false
    }
}

impl<T, R: ElementReader<T>> Archive<T> for Loading<R> {
    type Error = R::Error;

    fn archive_slots(&mut self, slots: &mut [T]) -> Result<(), R::Error> {
        read_sequence_into(&mut self.0, slots)
    }

    fn is_loading(&self) -> bool {
        true
    }
}

pub(crate) fn write_sequence<T, W>(writer: &mut W, slots: &[T]) -> Result<(), W::Error>
where
    W: ElementWriter<T> + ?Sized,
{
    writer.begin_sequence(slots.len())?;
    for value in slots {
        writer.write_element(value)?;
    }
    writer.end_sequence()
}

pub(crate) fn read_sequence_into<T, R>(reader: &mut R, slots: &mut [T]) -> Result<(), R::Error>
where
    R: ElementReader<T> + ?Sized,
{
    reader.begin_sequence(slots.len())?;
    for slot in slots.iter_mut() {
        *slot = reader.read_element()?;
    }
    reader.end_sequence()
}
