//! Input parsing and output rendering for the `merge_sort` and `quick_sort` programs.

use std::fmt::{Display, Write as _};
use std::io::{Read, Write};

use crate::error::{InputViolation, SortResult};
use crate::stable::rust_merge_sort;
use crate::unstable::rust_quick_sort;

/// Capacity of the fixed buffers the classic version of the merge sort program used.
pub const DEFAULT_MAX_LEN: usize = 500_000;

/// Input of the quick sort program.
pub const SAMPLE: [i64; 10] = [10, 7, 8, 9, 1, 5, 3, 6, 2, 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLimits {
    /// Largest element count accepted.
    pub max_len: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

fn parse_token(position: usize, token: &str) -> Result<i64, InputViolation> {
    token.parse().map_err(|_| InputViolation::NotAnInteger {
        position,
        token: token.to_owned(),
    })
}

/// Parses an element count `n` followed by `n` integers, all separated by whitespace.
///
/// Tokens are numbered from 1 in errors. Anything after the `n`-th value is ignored.
pub fn parse_sequence(input: &str, limits: InputLimits) -> SortResult<Vec<i64>> {
    let mut tokens = input
        .split_whitespace()
        .enumerate()
        .map(|(idx, token)| parse_token(idx + 1, token));

    let count = tokens.next().ok_or(InputViolation::MissingCount)??;

    if count < 0 {
        return Err(InputViolation::NegativeCount { count }.into());
    }

    if count as u64 > limits.max_len as u64 {
        return Err(InputViolation::TooManyElements {
            count: usize::try_from(count).unwrap_or(usize::MAX),
            max: limits.max_len,
        }
        .into());
    }

    // Fits, it is at most `limits.max_len`.
    let count = count as usize;

    let values = tokens.take(count).collect::<Result<Vec<_>, _>>()?;
    if values.len() < count {
        return Err(InputViolation::MissingElements {
            expected: count,
            found: values.len(),
        }
        .into());
    }

    log::debug!("parsed {count} elements");

    Ok(values)
}

/// Reads all of `reader` and parses it with [`parse_sequence`].
pub fn read_sequence<R: Read>(mut reader: R, limits: InputLimits) -> SortResult<Vec<i64>> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;

    parse_sequence(&input, limits)
}

/// `1 2 3\n`, or nothing at all for an empty slice.
pub fn render_space_separated<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for (idx, val) in values.iter().enumerate() {
        let sep = if idx + 1 == values.len() { '\n' } else { ' ' };
        // Writing to a String cannot fail.
        let _ = write!(out, "{val}{sep}");
    }

    out
}

/// `1 2 3 \n`, every value followed by a space.
pub fn render_with_trailing_space<T: Display>(values: &[T]) -> String {
    let mut out = String::new();
    for val in values {
        let _ = write!(out, "{val} ");
    }
    out.push('\n');

    out
}

/// Reads the input, merge sorts it and prints the sorted values followed by the merge work.
///
/// Returns the merge work.
pub fn run_merge_sort<R, W>(input: R, mut output: W, limits: InputLimits) -> SortResult<usize>
where
    R: Read,
    W: Write,
{
    let mut values = read_sequence(input, limits)?;

    let merge_work = rust_merge_sort::sort(&mut values);
    log::debug!(
        "merge sorted {} elements, merge work: {merge_work}",
        values.len()
    );

    output.write_all(render_space_separated(&values).as_bytes())?;
    writeln!(output, "{merge_work}")?;
    output.flush()?;

    Ok(merge_work)
}

/// Prints `values`, quick sorts them and prints them again.
pub fn run_quick_sort<W: Write>(mut output: W, values: &mut [i64]) -> SortResult<()> {
    writeln!(output, "Before sorting: ")?;
    output.write_all(render_with_trailing_space(values).as_bytes())?;

    rust_quick_sort::sort(values);
    log::debug!("quick sorted {} elements", values.len());

    writeln!(output, "After sorting: ")?;
    output.write_all(render_with_trailing_space(values).as_bytes())?;
    output.flush()?;

    Ok(())
}
