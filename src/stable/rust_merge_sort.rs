use std::cmp::Ordering;

sort_impl!("rust_counting_merge_sort");

/// Sorts `data` and returns the merge work, see [`counting_merge_sort::sort`].
pub fn sort<T: Ord + Clone>(data: &mut [T]) -> usize {
    counting_merge_sort::sort(data)
}

pub fn sort_by<T: Clone, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) -> usize {
    counting_merge_sort::sort_by(data, compare)
}
