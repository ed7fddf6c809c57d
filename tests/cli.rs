//! Integration test suite for `jsonlex` CLI
use assert_cmd::Command;

/// Helper function to run the `main` binary with the given arguments and return a
/// [`assert_cmd::assert::Assert`].
fn run_main(args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd =
        Command::cargo_bin("jsonlex").expect("Failed to find main binary");
    cmd.args(args);
    cmd.assert()
}

/// Runs the binary expecting success and returns STDOUT.
fn stdout_of(args: &[&str]) -> String {
    let assert = run_main(args).success().code(0);
    String::from_utf8(assert.get_output().stdout.clone())
        .expect("Invalid UTF-8 output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn simple_object() {
        let output = stdout_of(&["from-string", r#"{"foo": "bar"}"#]);
        assert_eq!(output, "Tokens: [{ foo : bar }]\n");
    }

    #[test]
    fn legacy_subcommand_name() {
        let output = stdout_of(&["fromString", r#"[1, "two", true, null]"#]);
        assert_eq!(output, "Tokens: [[ 1 , two , true , null ]]\n");
    }

    #[test]
    fn leading_minus_is_not_a_flag() {
        let output = stdout_of(&["from-string", "-1.5e3"]);
        assert_eq!(output, "Tokens: [-1.5e3]\n");
    }

    #[test]
    fn json_format() {
        let output = stdout_of(&[
            "from-string",
            "--format",
            "json",
            r#"{"foo": {"bar": 42}}"#,
        ]);
        let json: Value =
            serde_json::from_str(&output).expect("Failed to parse output JSON");
        let tokens = json.as_array().expect("expected a JSON array");
        assert_eq!(tokens.len(), 9);
        assert_eq!(tokens[1]["kind"], "string_lit");
        assert_eq!(tokens[1]["value"], "foo");
        assert_eq!(tokens[6]["kind"], "number_lit");
        assert_eq!(tokens[6]["value"], "42");
    }

    #[test]
    fn unterminated_string_fails() {
        let assert = run_main(&["from-string", r#"{"foo": "bar"#]);
        let output = assert.failure().code(1).get_output().clone();
        assert!(output.stdout.is_empty(), "no partial token list expected");
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(
            stderr.contains("failed to parse json: unterminated string"),
            "unexpected stderr: {stderr:?}"
        );
    }

    #[test]
    fn unexpected_character_fails() {
        let assert = run_main(&["from-string", "abc"]);
        let output = assert.failure().code(1).get_output().clone();
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("invalid character at position 0: a"));
    }

    #[test]
    fn missing_argument() {
        run_main(&["from-string"]).failure();
    }

    #[test]
    fn extra_argument() {
        run_main(&["from-string", "{}", "[]"]).failure();
    }

    #[test]
    fn shell_completions() {
        let output = stdout_of(&["generate", "shell", "bash"]);
        assert!(output.contains("jsonlex"));
    }
}
