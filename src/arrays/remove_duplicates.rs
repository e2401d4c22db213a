//! Remove duplicates from a sorted array in-place, keeping one copy of each
//! run of equal elements.

/// Compacts the sorted array so every element appears once, returning the
/// deduplicated prefix.
///
/// Duplicates are swapped past the write point rather than dropped, so the
/// full array still holds every original element; only the returned prefix
/// is meaningful. The input must already be sorted for runs of equal
/// elements to be adjacent.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. A single read pointer walks the array while a write
/// pointer tracks the end of the deduplicated prefix.
///
/// # Example
///
/// ```
/// use algo_drills::prelude::*;
///
/// let mut arr = [1, 1, 1, 2, 3, 3, 4, 5, 5];
///
/// assert_eq!(remove_duplicates(&mut arr), [1, 2, 3, 4, 5]);
/// ```
pub fn remove_duplicates<T: PartialEq>(arr: &mut [T]) -> &mut [T] {
    if arr.is_empty() {
        return arr;
    }

    let mut write = 1;

    for read in 1..arr.len() {
        if arr[read] != arr[write - 1] {
            arr.swap(write, read);
            write += 1;
        }
    }

    &mut arr[..write]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_array() {
        let mut arr = [1, 1, 1, 2, 3, 3, 4, 5, 5];
        assert_eq!(remove_duplicates(&mut arr), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_array() {
        let mut arr: [i32; 0] = [];
        assert_eq!(remove_duplicates(&mut arr), []);
    }

    #[test]
    fn test_single_element() {
        let mut arr = [4];
        assert_eq!(remove_duplicates(&mut arr), [4]);
    }

    #[test]
    fn test_no_duplicates() {
        let mut arr = [1, 2, 3, 4];
        assert_eq!(remove_duplicates(&mut arr), [1, 2, 3, 4]);
    }

    #[test]
    fn test_all_equal() {
        let mut arr = [9, 9, 9, 9];
        assert_eq!(remove_duplicates(&mut arr), [9]);
    }
}
