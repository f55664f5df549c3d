use std::cmp::Ordering;

mod mergesort;

/// Sorts `v` with a top-down merge sort and returns the merge work.
///
/// The merge work is the sum of the lengths of all ranges that were merged, i.e. for every
/// recursive call on `[low, high]` with more than one element, `high - low + 1` is added. It does
/// *not* count element comparisons, a merge step adds its full range length no matter how many
/// comparisons it needed. An empty or single element slice performs no merge and returns 0.
///
/// The sort is stable and *O*(*n* \* log(*n*)) worst-case. It allocates a scratch buffer of
/// `v.len().div_ceil(2)` elements once and reuses it for every merge.
pub fn sort<T>(v: &mut [T]) -> usize
where
    T: Ord + Clone,
{
    mergesort::merge_sort(v, &mut |a, b| a.lt(b))
}

/// Sorts `v` with the comparator function `compare` and returns the merge work.
///
/// See [`sort`] for the meaning of the returned value.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    mergesort::merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}
