//! [Insertion Sort]: A simple sorting algorithm that builds the final sorted
//! array (or list) one item at a time by comparisons.
//!
//! [Insertion Sort]: https://en.wikipedia.org/wiki/Insertion_sort

/// Sorts the provided array in-place, in ascending order.
///
/// Insertion sort is `stable` meaning equal elements retain their original
/// relative position.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time in the worst case. For each element in the array,
/// the algorithm works backwards through the sorted prefix, shifting larger
/// elements one position rightward until the element's slot is found. On an
/// already-sorted array the inner scan never runs, taking *O*(*n*) time.
///
/// # Example
///
/// ```
/// use algo_drills::prelude::*;
///
/// let mut arr = [64, 34, 25, 12, 22, 11, 90, 5];
///
/// insertion_sort(&mut arr);
///
/// assert_eq!(arr, [5, 11, 12, 22, 25, 34, 64, 90]);
/// ```
pub fn insertion_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 1..arr.len() {
        // `current` is moved out of slot `i`, leaving a hole that the shifts
        // walk leftward. The hole guard writes `current` back into the hole
        // when it drops, so a panicking comparison cannot leave the slice
        // with a duplicated (and later double-dropped) element.
        unsafe {
            let mut hole = Hole {
                current: core::mem::ManuallyDrop::new(core::ptr::read(&raw const arr[i])),
                slot: &raw mut arr[i],
            };

            let mut j = i;

            while j > 0 && arr[j - 1] > *hole.current {
                core::ptr::copy_nonoverlapping(&raw const arr[j - 1], &raw mut arr[j], 1);
                j -= 1;
                hole.slot = &raw mut arr[j];
            }
        }
    }
}

/// One element held out of the slice while its slot is shifted into place.
/// Dropping the guard moves the element back into `slot`, on the normal path
/// and during unwinding alike.
struct Hole<T> {
    current: core::mem::ManuallyDrop<T>,
    slot: *mut T,
}

impl<T> Drop for Hole<T> {
    fn drop(&mut self) {
        unsafe {
            core::ptr::copy_nonoverlapping(&*self.current, self.slot, 1);
        }
    }
}
