// Recursive quick sort with Lomuto partitioning.
pub mod rust_quick_sort;

// Quadratic baseline for the measurement tool.
pub mod rust_selection_sort;
