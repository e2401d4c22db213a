//! Array Drills.

pub mod remove_duplicates;
pub mod reverse;
pub mod sliding_window;
pub mod two_pointer;
pub mod zeros_to_end;
