//! Reverse an array in-place with a pair of converging pointers.

/// Reverses the provided array in-place.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Two indices converge from the ends of the array,
/// swapping as they go.
///
/// # Example
///
/// ```
/// use algo_drills::prelude::*;
///
/// let mut arr = [1, 2, 3, 4, 5];
///
/// reverse(&mut arr);
///
/// assert_eq!(arr, [5, 4, 3, 2, 1]);
/// ```
pub fn reverse<T>(arr: &mut [T]) {
    if arr.is_empty() {
        return;
    }

    let mut left = 0;
    let mut right = arr.len() - 1;

    while left < right {
        arr.swap(left, right);
        left += 1;
        right -= 1;
    }
}
