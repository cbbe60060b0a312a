//! Interactive sessions driven through in-memory buffers
use std::io::Cursor;

use identifier_validator::shell::Shell;
use identifier_validator::validation::{SplitPolicy, Validator, ValidatorOptions};

fn run_session(input: &str, validator: Validator) -> String {
    let mut shell = Shell::new(Cursor::new(input.to_string()), Vec::new(), validator);
    shell.run().expect("session should not fail");
    String::from_utf8(shell.into_output()).expect("utf8 output")
}

#[test]
fn test_full_session() {
    let input = "1\nMyClass\n2\nDoWork\n4\ncom.Example\n5\nclass\n3\n\nexit\n";
    let out = run_session(input, Validator::default());

    assert!(out.contains("'MyClass' is a valid class name."));
    assert!(out.contains(
        "Warning: Method names should start with a lowercase letter (camelCase convention)\n\
         'DoWork' is a valid method name."
    ));
    assert!(out.contains("Warning: Package segments should be lowercase ('Example')"));
    assert!(out.contains("'com.Example' is a valid package name."));
    assert!(out.contains("Error: Identifier cannot be a Java keyword"));
    assert!(out.contains("Error: Variable name cannot be empty"));
    assert!(out.ends_with("Thank you for using the Java Identifier Validator!\n"));

    // menu is shown once per round: five validations plus the exit round
    assert_eq!(out.matches("What would you like to validate?").count(), 6);
}

#[test]
fn test_input_is_trimmed() {
    let out = run_session("  1  \n   Widget\t\n6\n", Validator::default());
    assert!(out.contains("'Widget' is a valid class name."));
}

#[test]
fn test_invalid_choice_reprompts_without_identifier() {
    let out = run_session("9\n6\n", Validator::default());
    assert!(out.contains("Invalid choice. Please enter a number between 1 and 6."));
    assert!(!out.contains("Enter the identifier to validate"));
}

#[test]
fn test_exit_word_at_either_prompt() {
    let out = run_session("EXIT\n", Validator::default());
    assert!(!out.contains("Enter the identifier to validate"));

    let out = run_session("1\nExit\n", Validator::default());
    assert!(!out.contains("is a valid"));
    assert!(out.ends_with("Thank you for using the Java Identifier Validator!\n"));
}

#[test]
fn test_errors_do_not_end_session() {
    let out = run_session("1\n1abc\n1\nabc-d\n1\nOk\n6\n", Validator::default());
    assert!(out.contains(
        "Error: Class name must start with a letter, underscore (_), or dollar sign ($)"
    ));
    assert!(out.contains(
        "Error: Class name can only contain letters, numbers, underscores (_), or dollar signs ($)"
    ));
    assert!(out.contains("'Ok' is a valid class name."));
}

#[test]
fn test_validator_options_apply_in_session() {
    let validator = Validator::new(ValidatorOptions {
        split_policy: SplitPolicy::DropTrailing,
        ..ValidatorOptions::without_advisories()
    });
    let out = run_session("4\ncom.Example.\n6\n", validator);
    assert!(out.contains("'com.Example.' is a valid package name."));
    assert!(!out.contains("Warning:"));
}
