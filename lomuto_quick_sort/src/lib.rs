use std::cmp::Ordering;

mod quicksort;

/// Sorts `v` with a recursive quick sort using Lomuto partitioning.
///
/// The last element of every range is the pivot. This sort is unstable, *O*(*n* \* log(*n*))
/// on average and *O*(*n*^2) for already sorted or all equal input. Recursion always descends
/// into the smaller partition, limiting stack depth to *O*(log(*n*)).
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort::quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts `v` with the comparator function `compare`, see [`sort`].
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort::quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Partitions `v` around its last element and returns the pivot's final position.
///
/// Afterwards every element before the returned index is less or equal and every element after
/// it is greater or equal to the pivot. Returns 0 for an empty slice.
pub fn partition<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    quicksort::partition_lomuto(v, &mut |a, b| a.lt(b))
}

/// Like [`partition`] but orders elements with `is_less`.
pub fn partition_by<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    quicksort::partition_lomuto(v, is_less)
}
