//! Palindrome check with a pair of converging pointers.

/// Returns `true` if the text reads the same forwards and backwards.
///
/// Bytes are compared as-is: no case folding and no skipping of punctuation
/// or whitespace.
///
/// # Time Complexity
///
/// Takes *O*(*n*) time. Two indices converge from the ends of the text,
/// comparing one pair of bytes per step.
///
/// # Examples
///
/// ```
/// use algo_drills::prelude::*;
///
/// assert!(is_palindrome("racecar"));
/// assert!(!is_palindrome("rust"));
/// ```
pub fn is_palindrome(text: &str) -> bool {
    let bytes = text.as_bytes();

    if bytes.is_empty() {
        return true;
    }

    let mut left = 0;
    let mut right = bytes.len() - 1;

    while left < right {
        if bytes[left] != bytes[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }

    true
}
