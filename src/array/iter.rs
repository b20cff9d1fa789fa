// ============================================================================
// Iteration Support
// Borrowing and consuming traversal over all N slots
// ============================================================================
//
// Every traversal is finite (exactly N items) and restartable: each call to
// `iter()` or `into_iter()` on a borrow yields an independent cursor.

use super::fixed_array::FixedArray;

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = core::array::IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    type A5 = FixedArray<i32, 5>;

    fn from_vec(values: &[i32]) -> A5 {
        A5::from_fn(|i| values.get(i).copied().unwrap_or_default())
    }

    #[test]
    fn test_iteration_yields_exactly_n() {
        let a = A5::new([1, 2, 3, 4, 5]);
        assert_eq!(a.iter().count(), 5);
        assert_eq!((&a).into_iter().len(), 5);
        assert_eq!(a.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let a = A5::new([1, 2, 3, 4, 5]);
        let first: Vec<_> = a.iter().collect();
        let second: Vec<_> = a.iter().collect();
        assert_eq!(first, second);

        let mut left = a.iter();
        let mut right = a.iter();
        left.next();
        assert_eq!(right.next(), Some(&1));
        assert_eq!(left.next(), Some(&2));
    }

    #[test]
    fn test_iter_mut() {
        let mut a = A5::new([1, 2, 3, 4, 5]);
        for v in &mut a {
            *v *= 10;
        }
        a.iter_mut().for_each(|v| *v += 1);
        assert_eq!(a.as_slice(), &[11, 21, 31, 41, 51]);
    }

    #[test]
    fn test_empty_iteration() {
        let mut a = FixedArray::<f64, 0>::default();
        assert!(a.iter().next().is_none());
        assert!(a.iter_mut().next().is_none());
        assert!((&a).into_iter().next().is_none());
        assert!(a.into_iter().next().is_none());

        let mut b = FixedArray::<f64, 0>::default();
        let range = b.as_mut_ptr_range();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn test_consuming_iteration_moves_owned_values() {
        let a = FixedArray::<String, 2>::new(["a".to_string(), "b".to_string()]);
        let joined: String = a.into_iter().collect();
        assert_eq!(joined, "ab");
    }

    #[test]
    fn test_front_back_agree_with_iteration() {
        fn prop(values: Vec<i32>) -> bool {
            let a = from_vec(&values);
            a.iter().next() == Some(a.front()) && a.iter().nth(A5::LEN - 1) == Some(a.back())
        }
        quickcheck(prop as fn(Vec<i32>) -> bool);
    }

    #[test]
    fn test_pointer_range_spans_n_slots() {
        fn prop(values: Vec<i32>) -> bool {
            let a = from_vec(&values);
            let range = a.as_ptr_range();
            // SAFETY: both pointers come from the same array.
            let span = unsafe { range.end.offset_from(range.start) };
            let expected = (0..A5::LEN).map(|i| values.get(i).copied().unwrap_or_default());
            span == 5 && a.iter().copied().eq(expected)
        }
        quickcheck(prop as fn(Vec<i32>) -> bool);
    }
}
