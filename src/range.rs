//! Sorting over inclusive index ranges `[low, high]`.
//!
//! These mirror the classic `sort(a, low, high)` signatures. A range with `low >= high` holds at
//! most one element and is left untouched, anything else must lie inside the slice.

use crate::error::{InputViolation, SortResult};

fn checked_range<T>(v: &mut [T], low: usize, high: usize) -> SortResult<&mut [T]> {
    if high >= v.len() || low > high {
        return Err(InputViolation::RangeOutOfBounds {
            low,
            high,
            len: v.len(),
        }
        .into());
    }

    Ok(&mut v[low..=high])
}

/// Merge sorts `v[low..=high]` and returns the merge work.
///
/// See [`counting_merge_sort::sort`] for what the merge work counts.
pub fn merge_sort<T>(v: &mut [T], low: usize, high: usize) -> SortResult<usize>
where
    T: Ord + Clone,
{
    if low >= high {
        return Ok(0);
    }

    let range = checked_range(v, low, high)?;
    Ok(counting_merge_sort::sort(range))
}

/// Quick sorts `v[low..=high]`.
pub fn quick_sort<T>(v: &mut [T], low: usize, high: usize) -> SortResult<()>
where
    T: Ord,
{
    if low >= high {
        return Ok(());
    }

    let range = checked_range(v, low, high)?;
    lomuto_quick_sort::sort(range);
    Ok(())
}

/// Partitions `v[low..=high]` around `v[high]` and returns the pivot's final index in `v`.
pub fn partition<T>(v: &mut [T], low: usize, high: usize) -> SortResult<usize>
where
    T: Ord,
{
    let range = checked_range(v, low, high)?;
    Ok(low + lomuto_quick_sort::partition(range))
}
