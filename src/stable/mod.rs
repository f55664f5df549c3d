// Top-down merge sort that reports its merge work.
pub mod rust_merge_sort;

// Quadratic baseline for the measurement tool.
pub mod rust_insertion_sort;
