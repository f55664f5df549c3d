use std::cmp::Ordering;

sort_impl!("rust_insertion_sort");

/// Sorts the slice with a textbook insertion sort.
///
/// This sort is stable and *O*(*n*^2) worst-case, *O*(*n*) for already sorted input.
pub fn sort<T: Ord>(data: &mut [T]) {
    insertion_sort(data, &mut |a, b| a.lt(b));
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], mut compare: F) {
    insertion_sort(data, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Shift v[i] to the left until it sits behind an element that is not greater.
        let mut hole = i;
        while hole > 0 && is_less(&v[hole], &v[hole - 1]) {
            v.swap(hole, hole - 1);
            hole -= 1;
        }
    }
}
