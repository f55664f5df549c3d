/// Sorts `v` and returns the accumulated merge work.
pub(crate) fn merge_sort<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    // The left half of any range is the larger one, and the largest range is `v` itself.
    let mut scratch = Vec::with_capacity(len - len / 2);

    merge_sort_range(v, &mut scratch, is_less)
}

fn merge_sort_range<T, F>(v: &mut [T], scratch: &mut Vec<T>, is_less: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    // Relative form of `(low + high) / 2`, the left half includes `mid`.
    let mid = (len - 1) / 2;

    let (left, right) = v.split_at_mut(mid + 1);
    let mut work = merge_sort_range(left, scratch, is_less);
    work += merge_sort_range(right, scratch, is_less);

    // Counted for every merge regardless of how many comparisons it takes.
    work += len;

    merge(v, mid + 1, scratch, is_less);

    work
}

/// Merges the sorted runs `v[..left_len]` and `v[left_len..]` in place.
///
/// The left run is copied into `scratch` and merged back with the right run, front to back. The
/// write cursor never overtakes the right read cursor, so the right run can be read in place and
/// whatever is left of it after the loop already sits in its final position. Ties take the left
/// element, which keeps the sort stable.
fn merge<T, F>(v: &mut [T], left_len: usize, scratch: &mut Vec<T>, is_less: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    scratch.clear();
    scratch.extend_from_slice(&v[..left_len]);

    let len = v.len();
    let mut out = 0;
    let mut left = 0;
    let mut right = left_len;

    while left < scratch.len() && right < len {
        if is_less(&v[right], &scratch[left]) {
            // `out` only ever holds a stale copy of an element already in `scratch`.
            v.swap(out, right);
            right += 1;
        } else {
            v[out].clone_from(&scratch[left]);
            left += 1;
        }
        out += 1;
    }

    for val in &scratch[left..] {
        v[out].clone_from(val);
        out += 1;
    }
}
