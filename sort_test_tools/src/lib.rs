pub mod patterns;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

/// A partition scheme that uses the last element of `arr` as pivot.
///
/// Returns the final position of the pivot. All elements left of it compare less or equal, all
/// elements right of it compare greater or equal.
pub trait Partition {
    fn name() -> String;

    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord;

    fn partition_by<T, F>(arr: &mut [T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool;
}

#[macro_export]
macro_rules! instantiate_sort_tests {
    (@tests $sort_impl:ty, $($test_name:ident),*) => {
        $(
            #[test]
            fn $test_name() {
                $crate::tests::$test_name::<$sort_impl>();
            }
        )*
    };
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @tests $sort_impl,
            basic,
            fixed_seed,
            random,
            random_uniform,
            random_zipf,
            random_narrow,
            all_equal,
            ascending,
            descending,
            ascending_saw,
            descending_saw,
            pipe_organ,
            already_sorted_unchanged,
            int_edge,
            random_str,
            random_large_val,
            sort_by_reverse
        );
    };
}

#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @tests $sort_impl,
            stability,
            stability_all_equal_keys,
            stability_descending_keys
        );
    };
}

#[macro_export]
macro_rules! instantiate_partition_tests {
    (@tests $partition_impl:ty, $($test_name:ident),*) => {
        $(
            #[test]
            fn $test_name() {
                $crate::tests::$test_name::<$partition_impl>();
            }
        )*
    };
    ($partition_impl:ty) => {
        $crate::instantiate_partition_tests!(
            @tests $partition_impl,
            partition_basic,
            partition_invariant,
            partition_retains_set,
            partition_pivot_is_max,
            partition_pivot_is_min,
            partition_by_reverse
        );
    };
}
