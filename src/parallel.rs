//! Switches between rayon and plain iterators depending on the `rayon` feature.
//!
//! Both variants yield the same items in the same order after `collect()`,
//! so results never depend on the feature.

cfg_if! {
    if #[cfg(feature = "rayon")] {
        pub use rayon::prelude::*;

        pub fn opt_par_range(len: usize) -> rayon::range::Iter<usize> {
            (0..len).into_par_iter()
        }

    } else {
        pub fn opt_par_range(len: usize) -> std::ops::Range<usize> {
            0..len
        }
    }
}
