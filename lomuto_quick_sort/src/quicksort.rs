/// Sorts `v` recursively.
///
/// After each partition the shorter side is sorted by a recursive call and the longer side by the
/// next loop iteration, so the recursion depth never exceeds *O*(log(*n*)) even when every pivot
/// is the minimum or maximum of its range.
pub(crate) fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_pos = partition_lomuto(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`. The pivot is in its final position.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}

/// Partitions `v` around `v[v.len() - 1]` and returns the pivot's final position.
///
/// `v[..store]` holds the elements that are not greater than the pivot seen so far. Every such
/// element found by the scan is swapped to `store`, then the pivot is swapped in right behind
/// them.
pub(crate) fn partition_lomuto<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len == 0 {
        return 0;
    }

    let last = len - 1;
    let (rest, pivot) = v.split_at_mut(last);
    let pivot = &pivot[0];

    let mut store = 0;
    for scan in 0..rest.len() {
        // `rest[scan] <= pivot`
        if !is_less(pivot, &rest[scan]) {
            rest.swap(store, scan);
            store += 1;
        }
    }

    v.swap(store, last);

    store
}
