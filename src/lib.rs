//! Textbook merge sort and quick sort, plus the programs that drive them.
//!
//! The algorithms live in their own crates, `counting_merge_sort` and `lomuto_quick_sort`.
//! [`stable`] and [`unstable`] expose them, next to quadratic baselines, behind the common
//! [`sort_test_tools::Sort`] interface.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(v: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(v);
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod error;
pub mod program;
pub mod range;
pub mod stable;
pub mod unstable;

pub use error::{InputViolation, SortError, SortResult};
