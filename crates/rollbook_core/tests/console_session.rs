use rollbook_core::console::maths::{add, divide, ArithmeticError};
use rollbook_core::console::{run_sum_session, SessionEnd};
use std::io::Cursor;

fn run(input: &str) -> (Vec<i64>, SessionEnd, String) {
    let mut out = Vec::new();
    let summary = run_sum_session(Cursor::new(input.to_string()), &mut out).unwrap();
    (summary.sums, summary.end, String::from_utf8(out).unwrap())
}

#[test]
fn repeats_until_sentinel() {
    let (sums, end, text) = run("1 2\n0\n10 -4\n1\n");

    assert_eq!(sums, vec![3, 6]);
    assert_eq!(end, SessionEnd::Sentinel);
    assert!(text.contains("Sum is : 3"));
    assert!(text.contains("Sum is : 6"));
    assert_eq!(text.matches("Enter 1 to exit").count(), 2);
}

#[test]
fn malformed_operand_is_discarded_and_same_field_reprompted() {
    let (sums, end, text) = run("abc 4\nx.y 5\n1\n");

    assert_eq!(sums, vec![9]);
    assert_eq!(end, SessionEnd::Sentinel);
    assert_eq!(text.matches("Enter only integer value.").count(), 2);
    assert_eq!(text.matches("Enter the value : ").count(), 4);
}

#[test]
fn malformed_exit_answer_is_reprompted() {
    let (sums, end, text) = run("2 2\nquit 1\n");

    assert_eq!(sums, vec![4]);
    assert_eq!(end, SessionEnd::Sentinel);
    assert_eq!(text.matches("Enter 1 to exit").count(), 2);
}

#[test]
fn end_of_input_closes_session_cleanly() {
    let (sums, end, _) = run("5\n");
    assert!(sums.is_empty());
    assert_eq!(end, SessionEnd::InputClosed);

    let (sums, end, _) = run("");
    assert!(sums.is_empty());
    assert_eq!(end, SessionEnd::InputClosed);
}

#[test]
fn division_overloads_are_resolved_by_operand_types() {
    assert_eq!(divide(9_i32, 2_i32), Ok(4));
    assert_eq!(divide(9.0_f64, 2.0_f64), 4.5);
    assert_eq!(divide("9", "x"), Err(ArithmeticError::InvalidNumber("x".to_string())));
    assert_eq!(add(2, 3), 5);
}
