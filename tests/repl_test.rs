mod common;
use common::*;

#[test]
fn test_assignments_echo() {
    assert_eq!(repl(&["A=5"]), "< A = 5\n");
    assert_eq!(repl(&["A\"hi\""]), "< A = \"hi\"\n");
    assert_eq!(repl(&["A=5", "A"]), "< A = 5\n< A = undefined\n");
    assert_eq!(repl(&["0@2=9"]), "< @2 = 9\n");
}

#[test]
fn test_block_assignments_echo_too() {
    assert_eq!(repl(&["?(A=7;)"]), "< A = 7\n7");
}

#[test]
fn test_file_mode_does_not_echo() {
    assert_eq!(run_program("A=5"), "");
}

#[test]
fn test_one_entry_can_hold_many_segments() {
    assert_eq!(repl(&["A=1;B=2"]), "< A = 1\n< B = 2\n");
}

#[test]
fn test_prompt_counts_segments_and_interleaves() {
    let mut runtime = repl_runtime();
    assert_eq!(runtime.prompt(), "1> ");
    runtime.enter("A=1;B=2");
    assert_eq!(runtime.prompt(), "3> ");
    runtime.enter("?5");
    assert_eq!(runtime.prompt(), "\n4> ");
    runtime.enter("?\"x\\n\"");
    assert_eq!(runtime.prompt(), "5> ");
}

#[test]
fn test_jump_can_rerun_earlier_lines() {
    let mut runtime = repl_runtime();
    runtime.enter("A=0");
    runtime.enter("A+1;#=(A<2)*2");
    assert_eq!(runtime.host().output, "< A = 0\n< A = 1\n< A = 2\n");
}

#[test]
fn test_vars_listing() {
    assert_eq!(
        repl(&["A=5", "B\"x\"", ":vars"]),
        "< A = 5\n< B = \"x\"\nA = 5\nB = \"x\"\n"
    );
    assert_eq!(repl(&[":vars"]), "No variables defined.\n");
}

#[test]
fn test_array_listing() {
    assert_eq!(
        repl(&["0@1=5", ":array"]),
        "< @1 = 5\nArray (size: 2):\n  @0 = 0\n  @1 = 5\n"
    );
    assert_eq!(repl(&[":array"]), "Array is empty.\n");
}

#[test]
fn test_array_listing_truncates_at_twenty() {
    let out = repl(&["0@24=1", ":array"]);
    assert!(out.contains("Array (size: 25):"));
    assert!(out.contains("  @19 = 0\n"));
    assert!(!out.contains("  @20 = 0\n"));
    assert!(out.contains("  ... (25 elements total)\n"));
}

#[test]
fn test_lines_listing() {
    assert_eq!(
        repl(&["A=1", ":lines"]),
        "< A = 1\nProgram (1 lines):\n    1: A=1\n"
    );
    assert_eq!(repl(&[":lines"]), "No lines in program.\n");
}

#[test]
fn test_clear_keeps_the_program() {
    let out = repl(&["A=1", ":clear", ":vars", ":lines"]);
    assert!(out.contains("All variables and array cleared.\n"));
    assert!(out.contains("No variables defined.\n"));
    assert!(out.contains("Program (1 lines):"));
}

#[test]
fn test_reset_clears_everything() {
    let out = repl(&["A=1", ":reset", ":vars", ":lines"]);
    assert!(out.contains("REPL completely reset.\n"));
    assert!(out.contains("No variables defined.\n"));
    assert!(out.contains("No lines in program.\n"));
    let mut runtime = repl_runtime();
    runtime.enter("A=1");
    runtime.enter(":reset");
    assert_eq!(runtime.prompt(), "1> ");
}

#[test]
fn test_reset_then_same_input_gives_same_state() {
    let first = repl(&["A=1", "B=A+1", ":vars"]);
    let again = repl(&["A=1", "B=A+1", ":reset", "A=1", "B=A+1", ":vars"]);
    assert!(again.ends_with(&first));
}

#[test]
fn test_debug_command() {
    let out = repl(&["A\"AB\"", ":debug A"]);
    assert!(out.contains("Variable A (string):\n"));
    assert!(out.contains("  Content: \"AB\"\n"));
    assert!(out.contains("  Bytes (hex): 41 42\n"));
    assert!(out.contains("  Bytes (dec): 65 66\n"));
    assert_eq!(repl(&["A=5", ":debug A"]), "< A = 5\nVariable A = 5 (number)\n");
    assert_eq!(repl(&[":debug A"]), "Variable A is undefined\n");
    assert_eq!(
        repl(&[":debug abc"]),
        "Usage: :debug VARIABLE (e.g. :debug A or :debug _)\n"
    );
}

#[test]
fn test_unknown_command_changes_nothing() {
    let out = repl(&["A=1", ":wat", ":vars"]);
    assert!(out.contains("Unknown command: :wat\n"));
    assert!(out.contains("Type ':help' for the list of commands.\n"));
    assert!(out.contains("A = 1\n"));
}

#[test]
fn test_exit_finishes_the_session() {
    let mut runtime = repl_runtime();
    runtime.enter("A=1");
    assert!(!runtime.done());
    runtime.enter(":exit");
    assert!(runtime.done());
    assert!(runtime.host().output.contains("Goodbye.\n"));
}

#[test]
fn test_meta_commands_work_from_programs() {
    let out = run_program("A=1\n:vars");
    assert_eq!(out, "A = 1\n");
}

#[test]
fn test_empty_entries_are_skipped() {
    let mut runtime = repl_runtime();
    assert!(!runtime.enter(""));
    assert!(!runtime.enter("\n"));
    assert_eq!(runtime.prompt(), "1> ");
}

#[test]
fn test_help_texts_exist() {
    assert!(repl(&[":help"]).contains(":debug VAR"));
    assert!(repl(&[":syntax"]).contains("#=expr"));
    assert!(repl(&[":screen"]).contains("gotoxy(x,y)"));
}
