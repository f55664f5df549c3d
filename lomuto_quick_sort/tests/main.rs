use sort_test_tools::{instantiate_partition_tests, instantiate_sort_tests, patterns, Partition, Sort};

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "lomuto_quick_sort".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone,
    {
        lomuto_quick_sort::sort(arr);
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> std::cmp::Ordering,
    {
        lomuto_quick_sort::sort_by(arr, compare);
    }
}

struct PartitionImpl {}

impl Partition for PartitionImpl {
    fn name() -> String {
        "lomuto_partition".into()
    }

    fn partition<T>(arr: &mut [T]) -> usize
    where
        T: Ord,
    {
        lomuto_quick_sort::partition(arr)
    }

    fn partition_by<T, F>(arr: &mut [T], is_less: &mut F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        lomuto_quick_sort::partition_by(arr, is_less)
    }
}

instantiate_sort_tests!(SortImpl);

instantiate_partition_tests!(PartitionImpl);

#[test]
fn sample_array() {
    let mut v = [10, 7, 8, 9, 1, 5, 3, 6, 2, 4];
    lomuto_quick_sort::sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn partition_empty() {
    let mut v: [i32; 0] = [];
    assert_eq!(lomuto_quick_sort::partition(&mut v), 0);
}

#[test]
fn partition_keeps_duplicates_left() {
    // Elements equal to the pivot go left of it.
    let mut v = [3, 1, 3, 5, 3];
    let pivot_pos = lomuto_quick_sort::partition(&mut v);
    assert_eq!(pivot_pos, 3);
    assert_eq!(v, [3, 1, 3, 3, 5]);
}

#[test]
fn deep_degenerate_input() {
    // Every partition of ascending and descending input is maximally unbalanced.
    let mut v = patterns::ascending(5_000);
    lomuto_quick_sort::sort(&mut v);
    assert_eq!(v, patterns::ascending(5_000));

    let mut v = patterns::descending(5_000);
    lomuto_quick_sort::sort(&mut v);
    assert_eq!(v, patterns::ascending(5_000));
}
