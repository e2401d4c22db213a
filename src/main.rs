//! Demonstration runs of the drills on the reference arrays.

use algo_drills::prelude::*;

fn main() {
    // Bubble sort, printing the array before every pass and once at the end.
    let mut arr = [7, 12, 9, 11, 3, 2, 11, 6, 14, 1];
    bubble_sort_with(&mut arr, |state| println!("{state:?}"));

    let mut arr = [64, 34, 25, 12, 22, 11, 90, 5];
    insertion_sort(&mut arr);
    println!("{arr:?}");

    let mut arr = [7, 12, 9, 11, 3, 2, 11, 6, 14, 1];
    selection_sort(&mut arr);
    println!("{arr:?}");

    let mut arr = [1, 1, 1, 2, 3, 3, 4, 5, 5];
    println!("{:?}", remove_duplicates(&mut arr));

    let mut arr = [1, 2, 3, 4, 5];
    reverse(&mut arr);
    println!("{arr:?}");

    let arr = [2, 1, 5, 1, 3, 2];
    println!("{:?}", max_sum_subarray(&arr, 3));

    let text = "racecar";
    println!("{text} is a palindrome: {}", is_palindrome(text));

    let mut arr = [0, 1, 2, 0, 3, 4];
    zeros_to_end(&mut arr);
    println!("{arr:?}");
}
