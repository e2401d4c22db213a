//! Move every zero to the back of an array while keeping the non-zero
//! elements in their original order.

/// Moves all zeros to the end of the array in-place.
///
/// The relative order of the non-zero elements is preserved; the order among
/// the trailing zeros is immaterial since they are indistinguishable.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. A read pointer walks the array while a write pointer
/// tracks the end of the non-zero prefix.
///
/// # Example
///
/// ```
/// use algo_drills::prelude::*;
///
/// let mut arr = [0, 1, 2, 0, 3, 4];
///
/// zeros_to_end(&mut arr);
///
/// assert_eq!(arr, [1, 2, 3, 4, 0, 0]);
/// ```
pub fn zeros_to_end(arr: &mut [i32]) {
    let mut write = 0;

    for read in 0..arr.len() {
        if arr[read] != 0 {
            arr.swap(write, read);
            write += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_array() {
        let mut arr = [0, 1, 2, 0, 3, 4];
        zeros_to_end(&mut arr);
        assert_eq!(arr, [1, 2, 3, 4, 0, 0]);
    }

    #[test]
    fn test_no_zeros() {
        let mut arr = [5, 3, 1];
        zeros_to_end(&mut arr);
        assert_eq!(arr, [5, 3, 1]);
    }

    #[test]
    fn test_all_zeros() {
        let mut arr = [0, 0, 0];
        zeros_to_end(&mut arr);
        assert_eq!(arr, [0, 0, 0]);
    }

    #[test]
    fn test_empty_array() {
        let mut arr: [i32; 0] = [];
        zeros_to_end(&mut arr);
        assert_eq!(arr, []);
    }

    #[test]
    fn test_leading_and_trailing_zeros() {
        let mut arr = [0, 0, 7, 0, 8, 0];
        zeros_to_end(&mut arr);
        assert_eq!(arr, [7, 8, 0, 0, 0, 0]);
    }
}
