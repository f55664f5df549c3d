use classic_sorts::program::{self, InputLimits};
use classic_sorts::{InputViolation, SortError};

fn run_merge(input: &str, limits: InputLimits) -> Result<String, SortError> {
    let mut output = Vec::new();
    program::run_merge_sort(input.as_bytes(), &mut output, limits)?;

    Ok(String::from_utf8(output).unwrap())
}

fn merge_violation(input: &str, limits: InputLimits) -> InputViolation {
    match run_merge(input, limits) {
        Err(SortError::InvalidInput(violation)) => violation,
        Err(err) => panic!("unexpected error: {err}"),
        Ok(output) => panic!("expected an input violation, got output {output:?}"),
    }
}

#[test]
fn merge_sort_scenario() {
    let output = run_merge("5\n5 4 3 2 1\n", InputLimits::default()).unwrap();
    assert_eq!(output, "1 2 3 4 5\n12\n");
}

#[test]
fn merge_sort_any_whitespace() {
    let output = run_merge("  4\t3\n\n-1 3\r\n 0 ", InputLimits::default()).unwrap();
    assert_eq!(output, "-1 0 3 3\n8\n");
}

#[test]
fn merge_sort_empty_and_single() {
    assert_eq!(run_merge("0", InputLimits::default()).unwrap(), "0\n");
    assert_eq!(run_merge("1 -7", InputLimits::default()).unwrap(), "-7\n0\n");
}

#[test]
fn merge_sort_ignores_trailing_tokens() {
    let output = run_merge("2 9 8 7 junk", InputLimits::default()).unwrap();
    assert_eq!(output, "8 9\n2\n");
}

#[test]
fn merge_sort_returns_merge_work() {
    let mut output = Vec::new();
    let work =
        program::run_merge_sort("4 4 3 2 1".as_bytes(), &mut output, InputLimits::default())
            .unwrap();

    assert_eq!(work, 8);
    assert_eq!(output, b"1 2 3 4\n8\n");
}

#[test]
fn merge_sort_input_violations() {
    let limits = InputLimits::default();

    assert_eq!(merge_violation("", limits), InputViolation::MissingCount);
    assert_eq!(merge_violation(" \n\t", limits), InputViolation::MissingCount);
    assert_eq!(
        merge_violation("-3 1 2 3", limits),
        InputViolation::NegativeCount { count: -3 }
    );
    assert_eq!(
        merge_violation("3 1 x 3", limits),
        InputViolation::NotAnInteger {
            position: 3,
            token: "x".into()
        }
    );
    assert_eq!(
        merge_violation("three", limits),
        InputViolation::NotAnInteger {
            position: 1,
            token: "three".into()
        }
    );
    assert_eq!(
        merge_violation("4 1 2", limits),
        InputViolation::MissingElements {
            expected: 4,
            found: 2
        }
    );
    assert_eq!(
        merge_violation("1 99999999999999999999", limits),
        InputViolation::NotAnInteger {
            position: 2,
            token: "99999999999999999999".into()
        }
    );
}

#[test]
fn merge_sort_length_limit() {
    let limits = InputLimits { max_len: 3 };

    assert_eq!(
        merge_violation("4 1 2 3 4", limits),
        InputViolation::TooManyElements { count: 4, max: 3 }
    );
    assert_eq!(run_merge("3 3 1 2", limits).unwrap(), "1 2 3\n5\n");

    assert_eq!(InputLimits::default().max_len, 500_000);
}

#[test]
fn merge_sort_limit_message() {
    let err = run_merge("10 1", InputLimits { max_len: 2 }).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid input: element count 10 exceeds the limit of 2"
    );
    assert_eq!(
        err.violation(),
        Some(&InputViolation::TooManyElements { count: 10, max: 2 })
    );
}

#[test]
fn quick_sort_scenario() {
    let mut values = program::SAMPLE.to_vec();
    let mut output = Vec::new();
    program::run_quick_sort(&mut output, &mut values).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Before sorting: \n10 7 8 9 1 5 3 6 2 4 \nAfter sorting: \n1 2 3 4 5 6 7 8 9 10 \n"
    );
    assert_eq!(values, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
}

#[test]
fn render() {
    assert_eq!(program::render_space_separated::<i64>(&[]), "");
    assert_eq!(program::render_space_separated(&[1]), "1\n");
    assert_eq!(program::render_space_separated(&[-1, 2, 3]), "-1 2 3\n");

    assert_eq!(program::render_with_trailing_space::<i64>(&[]), "\n");
    assert_eq!(program::render_with_trailing_space(&[4, -5]), "4 -5 \n");
}

#[test]
fn parse_sequence() {
    let values = program::parse_sequence("3 -1 0 1", InputLimits::default()).unwrap();
    assert_eq!(values, [-1, 0, 1]);

    let values = program::parse_sequence("0 1 2", InputLimits::default()).unwrap();
    assert!(values.is_empty());

    let values = program::parse_sequence("0", InputLimits { max_len: 0 }).unwrap();
    assert!(values.is_empty());
}
