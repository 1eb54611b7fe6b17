//! Tests for `stencil check`.

mod support;

use support::*;

#[test]
fn test_check_clean_template_exits_0() {
    let t = Test::with_fixtures();

    let output = t.check(&["seed.redacted.py"]);
    assert_success(&output);
    assert_stdout_contains(&output, "clean");
}

#[test]
fn test_check_populated_template_exits_1_and_names_file() {
    let t = Test::with_fixtures();

    let output = t.check(&["seed.py"]);
    assert_exit_code(&output, 1);
    assert_stdout_contains(&output, "seed.py");
    assert_stdout_contains(&output, "live secret material");
    assert_stderr_contains(&output, "stencil strip");
}

#[test]
fn test_check_mixed_files_exits_1() {
    let t = Test::with_fixtures();

    let output = t.check(&["seed.redacted.py", "seed.py"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "1 of 2");
}

#[test]
fn test_check_json_report() {
    let t = Test::with_fixtures();

    let output = t.check_json(&["seed.redacted.py", "seed.py"]);
    assert_exit_code(&output, 1);
    assert_stdout_contains(&output, "\"clean\": true");
    assert_stdout_contains(&output, "\"clean\": false");
    assert_stdout_contains(&output, "\"live_lines\"");
}

#[test]
fn test_check_does_not_print_secret_values() {
    let t = Test::with_fixtures();

    let output = t.check(&["seed.py"]);
    assert_stdout_excludes(&output, "AKIAEXAMPLE123");
    assert_stdout_excludes(&output, "c2VjcmV0");
}

#[test]
fn test_check_unterminated_block_exits_2() {
    let t = Test::new();
    t.write("broken.py", "# -----BEGIN SECRET ENV-----\nFOO=1\n");

    let output = t.check(&["broken.py"]);
    assert_exit_code(&output, 2);
}

#[test]
fn test_check_missing_file_exits_1() {
    let t = Test::new();

    let output = t.check(&["no-such.py"]);
    assert_exit_code(&output, 1);
    assert_stderr_contains(&output, "cannot read template");
}

#[test]
fn test_check_requires_at_least_one_file() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("check")
        .output()
        .expect("failed to run stencil check");
    assert_exit_code(&output, 1);
}
