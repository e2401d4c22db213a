//! Maximum sum over fixed-size windows, computed with a sliding window.

/// Returns the maximum sum of any contiguous subarray of length `k`, or
/// [`None`] when no window of that length exists (`k` is zero or larger than
/// the array).
///
/// Sums are accumulated in `i64`, so windows of large-magnitude `i32`
/// elements cannot overflow.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. The first window is summed directly; each later
/// window adds the entering element and subtracts the leaving one instead of
/// re-summing.
///
/// # Example
///
/// ```
/// use algo_drills::prelude::*;
///
/// let arr = [2, 1, 5, 1, 3, 2];
///
/// assert_eq!(max_sum_subarray(&arr, 3), Some(9));
/// assert_eq!(max_sum_subarray(&arr, 7), None);
/// ```
pub fn max_sum_subarray(arr: &[i32], k: usize) -> Option<i64> {
    if k == 0 || k > arr.len() {
        return None;
    }

    let mut window_sum: i64 = arr[..k].iter().map(|&elem| i64::from(elem)).sum();
    let mut max_sum = window_sum;

    for i in k..arr.len() {
        window_sum += i64::from(arr[i]) - i64::from(arr[i - k]);
        if window_sum > max_sum {
            max_sum = window_sum;
        }
    }

    Some(max_sum)
}
