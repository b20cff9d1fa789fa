// ============================================================================
// Fixed-Size Array
// Allocation-free value container with compile-time length
// ============================================================================

use super::errors::{ArrayError, ArrayResult};
use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::ops::{Deref, DerefMut, Index, IndexMut, Range};

/// Homogeneous container holding exactly `N` values of `T` inline.
///
/// The layout is that of `[T; N]`: no indirection, no heap, no length
/// field. Copies are element-wise and fully independent.
///
/// Two access tiers are provided:
/// - **checked**: [`at`](Self::at) / [`at_mut`](Self::at_mut) return
///   [`ArrayError::OutOfRange`] for `index >= N`.
/// - **unchecked**: `a[i]` asserts `i < N` in debug builds only, and
///   [`get_unchecked`](Self::get_unchecked) performs no check at all.
///
/// # Example
/// ```
/// use fixed_array::FixedArray;
///
/// let mut a = FixedArray::<i32, 3>::default();
/// a.fill(7);
/// assert_eq!(a.at(2), Ok(&7));
/// assert!(a.at(3).is_err());
///
/// let b = FixedArray::<i32, 3>::broadcast(9);
/// assert_eq!(b.as_slice(), &[9, 9, 9]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FixedArray<T, const N: usize>(pub [T; N]);

#[cold]
#[inline(never)]
fn out_of_range(index: usize, len: usize) -> ArrayError {
    tracing::trace!(index, len, "checked array access out of range");
    ArrayError::OutOfRange { index, len }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Number of slots, available at compile time.
    pub const LEN: usize = N;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Wrap an existing array.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self(data)
    }

    /// Build each slot from its index.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self(core::array::from_fn(f))
    }

    /// Create an instance with every slot set to a clone of `value`.
    #[inline]
    pub fn broadcast(value: T) -> Self
    where
        T: Clone,
    {
        Self(core::array::from_fn(|_| value.clone()))
    }

    /// `broadcast` for `Copy` types, usable in const contexts.
    ///
    /// ```
    /// use fixed_array::Vector3d;
    ///
    /// const ORIGIN: Vector3d = Vector3d::splat(0.0);
    /// assert_eq!(ORIGIN.as_slice(), &[0.0, 0.0, 0.0]);
    /// ```
    #[inline]
    pub const fn splat(value: T) -> Self
    where
        T: Copy,
    {
        Self([value; N])
    }

    /// Set every slot to a clone of `value`.
    #[inline]
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.0.fill(value);
    }

    // ========================================================================
    // Checked Access
    // ========================================================================

    /// Reference to slot `index`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `index >= N`.
    #[inline]
    pub fn at(&self, index: usize) -> ArrayResult<&T> {
        match self.0.get(index) {
            Some(value) => Ok(value),
            None => Err(out_of_range(index, N)),
        }
    }

    /// Mutable reference to slot `index`.
    ///
    /// # Errors
    /// Returns `OutOfRange` if `index >= N`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> ArrayResult<&mut T> {
        match self.0.get_mut(index) {
            Some(value) => Ok(value),
            None => Err(out_of_range(index, N)),
        }
    }

    // ========================================================================
    // Unchecked Access
    // ========================================================================

    /// Reference to slot `index` without a bounds check in release builds.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < N, "index {} out of bounds for length {}", index, N);
        // SAFETY: caller guarantees `index < N`.
        unsafe { self.0.get_unchecked(index) }
    }

    /// Mutable reference to slot `index` without a bounds check in release
    /// builds.
    ///
    /// # Safety
    /// `index` must be less than `N`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "index {} out of bounds for length {}", index, N);
        // SAFETY: caller guarantees `index < N`.
        unsafe { self.0.get_unchecked_mut(index) }
    }

    /// First slot. Panics when `N == 0`.
    #[inline]
    pub fn front(&self) -> &T {
        &self.0[0]
    }

    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.0[0]
    }

    /// Last slot. Panics when `N == 0`.
    #[inline]
    pub fn back(&self) -> &T {
        &self.0[N.wrapping_sub(1)]
    }

    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        &mut self.0[N.wrapping_sub(1)]
    }

    // ========================================================================
    // Storage and Size
    // ========================================================================

    /// Pointer to the first slot.
    ///
    /// For `N == 0` the pointer is dangling but non-null and must not be
    /// dereferenced.
    #[inline]
    pub const fn data(&self) -> *const T {
        self.0.as_ptr()
    }

    #[inline]
    pub fn data_mut(&mut self) -> *mut T {
        self.0.as_mut_ptr()
    }

    /// The `begin`/`end` pointer pair spanning all `N` slots.
    #[inline]
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.0.as_ptr_range()
    }

    #[inline]
    pub fn as_mut_ptr_range(&mut self) -> Range<*mut T> {
        self.0.as_mut_ptr_range()
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.0
    }

    /// Always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Always `N`; the capacity can never grow.
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Traverse all `N` slots in index order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Apply `f` to each slot, producing an array of the same length.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> FixedArray<U, N> {
        FixedArray(self.0.map(f))
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(index < N, "index {} out of bounds for length {}", index, N);
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < N, "index {} out of bounds for length {}", index, N);
        &mut self.0[index]
    }
}

// Arrays only implement Default up to 32 elements
impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> Borrow<[T]> for FixedArray<T, N> {
    #[inline]
    fn borrow(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedArray<T, N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self(data)
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    #[inline]
    fn from(array: FixedArray<T, N>) -> Self {
        array.0
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = ArrayError;

    fn try_from(slice: &[T]) -> ArrayResult<Self> {
        if slice.len() != N {
            return Err(ArrayError::LengthMismatch {
                expected: N,
                actual: slice.len(),
            });
        }
        Ok(Self::from_fn(|i| slice[i].clone()))
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

// ============================================================================
// Type Aliases for Common Use Cases
// ============================================================================

/// Double-precision 3-vector (positions, velocities, forces)
pub type Vector3d = FixedArray<f64, 3>;

/// Single-precision 3-vector
pub type Vector3f = FixedArray<f32, 3>;

/// Integer 3-vector (grid indices, periodic image counts)
pub type Vector3i = FixedArray<i32, 3>;

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fill_sets_every_slot(init in prop::array::uniform8(any::<i64>()), v in any::<i64>()) {
            let mut a = FixedArray::new(init);
            a.fill(v);
            for i in 0..8 {
                prop_assert_eq!(a[i], v);
            }
        }

        #[test]
        fn broadcast_sets_every_slot(v in any::<u16>()) {
            let a = FixedArray::<u16, 13>::broadcast(v);
            prop_assert!(a.iter().all(|&x| x == v));
            prop_assert_eq!(a.len(), 13);
        }

        #[test]
        fn at_fails_exactly_past_the_end(
            init in prop::array::uniform5(any::<i32>()),
            i in 0usize..64,
        ) {
            let a = FixedArray::new(init);
            match a.at(i) {
                Ok(value) => {
                    prop_assert!(i < 5);
                    prop_assert!(core::ptr::eq(value, &a[i]));
                }
                Err(e) => {
                    prop_assert!(i >= 5);
                    prop_assert_eq!(e, ArrayError::OutOfRange { index: i, len: 5 });
                }
            }
        }
    }
}
