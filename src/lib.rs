//! Textbook array and sorting algorithm drills.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod arrays;
pub mod sorting;

/// Array & Sorting Drills Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use super::sorting::bubble_sort::*;
    #[doc(no_inline)]
    pub use super::sorting::insertion_sort::*;
    #[doc(no_inline)]
    pub use super::sorting::selection_sort::*;

    #[doc(no_inline)]
    pub use super::arrays::remove_duplicates::*;
    #[doc(no_inline)]
    pub use super::arrays::reverse::*;
    #[doc(no_inline)]
    pub use super::arrays::sliding_window::*;
    #[doc(no_inline)]
    pub use super::arrays::two_pointer::*;
    #[doc(no_inline)]
    pub use super::arrays::zeros_to_end::*;
}
