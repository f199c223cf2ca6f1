// This file is part of grow-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowVec;

impl<T> Extend<T> for GrowVec<T> {
    /// Appends every item, making room for the iterator's lower size bound
    /// up front with amortized growth.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.grow_for(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T: Clone> GrowVec<T> {
    /// Clones and appends every element of `src`.
    ///
    /// Grows at most once, to the larger of the exact need and the doubled
    /// capacity, so repeated small appends stay amortized `O(1)` per element.
    pub fn extend_from_slice(&mut self, src: &[T]) {
        self.grow_for(src.len());
        for item in src {
            // SAFETY: `grow_for` left room for all of `src`.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    /// Moves the array in; capacity is exactly `N`.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        for item in src {
            // SAFETY: `v` has exactly `N` slots.
            unsafe { v.push_unchecked(item) };
        }
        v
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    /// Clones the slice in; capacity is exactly `src.len()`.
    fn from(src: &[T]) -> Self {
        let mut v = Self::new();
        v.extend_from_slice(src);
        v
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::vec::GrowVec;
    use alloc::string::String;

    #[test]
    fn test_from_iter_and_extend() {
        let mut v: GrowVec<i32> = (1..=3).collect();
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 3);
        v.extend([4, 5]);
        assert_eq!(v, [1, 2, 3, 4, 5]);
        v.extend(&[6]);
        assert_eq!(v, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_extend_with_unknown_size_grows_by_doubling() {
        let mut v: GrowVec<u32> = GrowVec::new();
        v.extend((0..100u32).filter(|x| x % 2 == 0));
        assert_eq!(v.len(), 50);
        assert_eq!(v.capacity(), 64);
    }

    #[test]
    fn test_extend_from_slice_and_from_slice() {
        let mut v: GrowVec<String> = GrowVec::new();
        let src = [String::from("a"), String::from("b")];
        v.extend_from_slice(&src);
        assert_eq!(v.capacity(), 2);
        v.extend_from_slice(&src[..1]);
        assert_eq!(v.as_slice(), &["a", "b", "a"]);
        assert_eq!(v.capacity(), 4);

        let w = GrowVec::from(&src[..]);
        assert_eq!(w.as_slice(), &src);
        assert_eq!(w.capacity(), 2);
    }

    #[test]
    fn test_repeated_small_appends_grow_by_doubling() {
        let mut a: GrowVec<u32> = GrowVec::new();
        let mut b: GrowVec<u32> = GrowVec::new();
        let (mut a_grows, mut b_grows) = (0, 0);
        for i in 0..1000u32 {
            let (ca, cb) = (a.capacity(), b.capacity());
            a.extend_from_slice(&[i]);
            b.extend(core::iter::once(i));
            a_grows += usize::from(a.capacity() != ca);
            b_grows += usize::from(b.capacity() != cb);
        }
        assert_eq!(a.len(), 1000);
        assert_eq!(b.as_slice(), a.as_slice());
        assert!(a_grows <= 11, "extend_from_slice grew {a_grows} times");
        assert!(b_grows <= 11, "extend grew {b_grows} times");
        assert_eq!(a.capacity(), 1024);
        assert_eq!(b.capacity(), 1024);
    }

    #[test]
    fn test_from_array_is_exact() {
        let v: GrowVec<u8> = [7, 8, 9].into();
        assert_eq!(v, [7, 8, 9]);
        assert_eq!(v.capacity(), 3);

        let e: GrowVec<u8> = [].into();
        assert!(e.is_empty());
        assert_eq!(e.capacity(), 0);
    }
}
