use std::cmp::Ordering;

sort_impl!("rust_lomuto_quick_sort");

pub fn sort<T: Ord>(data: &mut [T]) {
    lomuto_quick_sort::sort(data);
}

pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(data: &mut [T], compare: F) {
    lomuto_quick_sort::sort_by(data, compare);
}
