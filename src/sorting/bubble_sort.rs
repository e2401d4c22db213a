//! [Bubble Sort]: A simple sorting algorithm that repeatedly steps through the
//! input list element by element, comparing the current element with the one
//! after it, swapping their values if needed.
//!
//! [Bubble Sort]: https://en.wikipedia.org/wiki/Bubble_sort

/// Sorts the provided array in-place, in ascending order.
///
/// Bubble sort is `stable` meaning equal elements retain their original
/// relative position.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time in the worst case. For every element of the list,
/// the algorithm compares an adjacent pair and swaps them if the ordering is
/// incorrect (ascending). A pass that performs no swaps ends the sort early,
/// so an already-sorted list takes *O*(*n*) time.
///
/// # Example
///
/// ```
/// use algo_drills::prelude::*;
///
/// let mut arr = [7, 12, 9, 11, 3, 2, 11, 6, 14, 1];
///
/// bubble_sort(&mut arr);
///
/// assert_eq!(arr, [1, 2, 3, 6, 7, 9, 11, 11, 12, 14]);
/// ```
pub fn bubble_sort<T: PartialOrd>(arr: &mut [T]) {
    bubble_sort_with(arr, |_| {});
}

/// Sorts the provided array in-place, in ascending order, reporting the
/// array's state to `on_pass` before every pass and once more after sorting
/// completes.
///
/// The observer makes each pass visible: printing every state shows the sort
/// progressing, and counting invocations shows how many passes ran before the
/// early exit. On an empty or single-element array `on_pass` is invoked
/// exactly once, with the array unchanged.
///
/// # Example
///
/// ```
/// use algo_drills::prelude::*;
///
/// let mut arr = [1, 2, 3, 4, 5];
/// let mut passes = 0;
///
/// bubble_sort_with(&mut arr, |_| passes += 1);
///
/// // One pass with no swaps, then the final report.
/// assert_eq!(passes, 2);
/// ```
pub fn bubble_sort_with<T, F>(arr: &mut [T], mut on_pass: F)
where
    T: PartialOrd,
    F: FnMut(&[T]),
{
    let len = arr.len();

    for i in 0..len.saturating_sub(1) {
        on_pass(arr);

        let mut swapped = false;

        for j in 0..(len - 1 - i) {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }

        // A pass with no swaps means the array is already sorted.
        if !swapped {
            break;
        }
    }

    on_pass(arr);
}
