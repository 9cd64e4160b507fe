mod common;
use common::*;

#[test]
fn test_no_precedence() {
    assert_eq!(run_program("?1+2*3"), "9");
    assert_eq!(run_program("?2+3*2^2"), "100");
    assert_eq!(run_program("?1+(2*3)"), "7");
}

#[test]
fn test_unary_minus_and_not() {
    assert_eq!(run_program("?-5+2"), "-3");
    assert_eq!(run_program("?--5"), "5");
    assert_eq!(run_program("?!0"), "1");
    assert_eq!(run_program("?!7"), "0");
    assert_eq!(run_program("?-(1;3)"), "-3");
}

#[test]
fn test_comparisons_and_logic() {
    assert_eq!(run_program("?2<3"), "1");
    assert_eq!(run_program("?3<2"), "0");
    assert_eq!(run_program("?3>2"), "1");
    assert_eq!(run_program("?2=2"), "1");
    assert_eq!(run_program("?2=3"), "0");
    assert_eq!(run_program("?2&3"), "1");
    assert_eq!(run_program("?2&0"), "0");
    assert_eq!(run_program("?0|9"), "1");
    assert_eq!(run_program("?0|0"), "0");
}

#[test]
fn test_string_concatenation() {
    assert_eq!(run_program(r#"?"A"+1"#), "A1");
    assert_eq!(run_program(r#"?1+"A""#), "1A");
    assert_eq!(run_program(r#"?"x"+"y"+1+2"#), "xy12");
}

#[test]
fn test_string_to_number_coercion() {
    assert_eq!(run_program(r#"A="12x";?A+1"#), "12x1");
    assert_eq!(run_program(r#"A="12x";?A*1"#), "12");
    assert_eq!(run_program(r#"A="abc";?A*1"#), "0");
    assert_eq!(run_program(r#"A="2.5e1";?A*2"#), "50");
}

#[test]
fn test_division_by_zero_reports_and_yields_zero() {
    assert_eq!(run_program("?1/0"), "?DIVISION BY ZERO IN LINE 1\n0");
    assert_eq!(run_program("?1%0"), "?MODULO BY ZERO IN LINE 1\n0");
    assert_eq!(run_program("?7/2"), "3.5");
    assert_eq!(run_program("?10%3"), "1");
}

#[test]
fn test_type_flip() {
    assert_eq!(run_program(r#"A=5;B=$A+"!";?B"#), "5!");
    assert_eq!(run_program(r#"A="41";?$A+1"#), "42");
    assert_eq!(run_program("?$_+1"), "1");
}

#[test]
fn test_flip_round_trips_through_parse() {
    assert_eq!(run_program("A=5;B=$A;C=$B;?(C=5)"), "1");
    assert_eq!(run_program("A=0-2.5;B=$A;C=$B;?(C=0-2.5)"), "1");
}

#[test]
fn test_number_formatting() {
    assert_eq!(run_program("?0.1+0.2"), "0.3");
    assert_eq!(run_program("?1000000000000000"), "1e+15");
    assert_eq!(run_program("?0.00001"), "1e-05");
    assert_eq!(run_program("?1/3"), "0.333333333333333");
}

#[test]
fn test_line_number_variable() {
    assert_eq!(run_program("?#\n?#"), "12");
}

#[test]
fn test_print_skips_leading_equals() {
    assert_eq!(run_program("?=2+2"), "4");
}

#[test]
fn test_junk_primary_reads_as_zero() {
    assert_eq!(run_program("?]"), "0");
    assert_eq!(run_program("?5+]"), "5");
}

#[test]
fn test_keyboard_poll() {
    let mut runtime = file_runtime();
    runtime.host_mut().keys.push_back(65);
    runtime.load("?:\n?:");
    runtime.run();
    assert_eq!(runtime.host().output, "650");
}

#[test]
fn test_blocking_input_reads_a_line() {
    let mut runtime = file_runtime();
    runtime.host_mut().inputs.push_back("hi there".to_string());
    runtime.load("A=?\n?A");
    runtime.run();
    assert_eq!(runtime.host().output, "hi there");
}
