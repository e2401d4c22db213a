//! [Selection Sort]: A simple sorting algorithm that repeatedly selects the
//! smallest element from the unsorted suffix and moves it to the front.
//!
//! [Selection Sort]: https://en.wikipedia.org/wiki/Selection_sort

/// Sorts the provided array in-place, in ascending order.
///
/// Selection sort is `unstable`: the swap that moves each minimum into place
/// can reorder equal elements.
///
/// # Time Complexity
///
/// Takes *O*(*n^2*) time regardless of input order. For every position, the
/// algorithm scans the remaining suffix for its minimum and swaps it into
/// place (a no-op swap when the minimum is already there). There is no early
/// exit.
///
/// # Example
///
/// ```
/// use algo_drills::prelude::*;
///
/// let mut arr = [7, 12, 9, 11, 3, 2, 11, 6, 14, 1];
///
/// selection_sort(&mut arr);
///
/// assert_eq!(arr, [1, 2, 3, 6, 7, 9, 11, 11, 12, 14]);
/// ```
pub fn selection_sort<T: PartialOrd>(arr: &mut [T]) {
    for i in 0..arr.len() {
        let mut min_index = i;

        for j in i..arr.len() {
            if arr[j] < arr[min_index] {
                min_index = j;
            }
        }

        arr.swap(i, min_index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_array() {
        let mut arr = [7, 12, 9, 11, 3, 2, 11, 6, 14, 1];
        selection_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 6, 7, 9, 11, 11, 12, 14]);
    }

    #[test]
    fn test_empty_array() {
        let mut arr: [i32; 0] = [];
        selection_sort(&mut arr);
        assert_eq!(arr, []);
    }

    #[test]
    fn test_single_element() {
        let mut arr = [5];
        selection_sort(&mut arr);
        assert_eq!(arr, [5]);
    }

    #[test]
    fn test_already_sorted() {
        let mut arr = [1, 2, 3, 4, 5];
        selection_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut arr = [5, 4, 3, 2, 1];
        selection_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_duplicates() {
        let mut arr = [3, 1, 3, 2];
        selection_sort(&mut arr);
        assert_eq!(arr, [1, 2, 3, 3]);
    }

    #[test]
    fn test_all_equal() {
        let mut arr = [7, 7, 7, 7];
        selection_sort(&mut arr);
        assert_eq!(arr, [7, 7, 7, 7]);
    }
}
