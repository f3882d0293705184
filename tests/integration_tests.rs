//! Integration tests for wordnum
//!
//! These tests drive the binary end to end.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a wordnum Command running in `dir`
fn wordnum(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("wordnum");
    cmd.current_dir(dir.path())
        .env_remove("WORDNUM_LOG")
        .env_remove("WORDNUM_LOG_FORMAT");
    cmd
}

fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// =============================================================================
// Basic CLI Tests
// =============================================================================

mod cli_basics {
    use super::*;

    #[test]
    fn test_help() {
        let dir = create_temp_dir();
        wordnum(&dir).arg("--help").assert().success();
    }

    #[test]
    fn test_version() {
        let dir = create_temp_dir();
        wordnum(&dir).arg("--version").assert().success();
    }

    #[test]
    fn test_no_arguments_prints_help() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage"));
    }

    #[test]
    fn test_inputs_are_mutually_exclusive() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["-n", "5", "-t", "the 5 pumps"])
            .assert()
            .failure();
    }
}

// =============================================================================
// Number Conversion
// =============================================================================

mod number {
    use super::*;

    #[test]
    fn test_number_converts() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["-n", "1025"])
            .assert()
            .success()
            .stdout("one thousand and twenty five\n");
    }

    #[test]
    fn test_zero() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["--number", "0"])
            .assert()
            .success()
            .stdout("zero\n");
    }

    #[test]
    fn test_negative_is_rejected() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["-n", "-136"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("non-negative"));
    }

    #[test]
    fn test_fraction_is_rejected() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["-n", "0.5"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Expected an integer"));
    }

    #[test]
    fn test_overflow_names_largest_unit() {
        let dir = create_temp_dir();
        let too_big = format!("1{}", "0".repeat(153));
        wordnum(&dir)
            .args(["-n", too_big.as_str()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("novenquadragintillion"));
    }

    #[test]
    fn test_verbose_keeps_stdout_clean() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["-v", "-n", "3000000000"])
            .assert()
            .success()
            .stdout("three billion\n");
    }
}

// =============================================================================
// File and Text Input
// =============================================================================

mod file_and_text {
    use super::*;

    #[test]
    fn test_file_converts() {
        let dir = create_temp_dir();
        let path = write_input(
            &dir,
            "test5.txt",
            "The speed of light is 299792458 meters per second",
        );
        wordnum(&dir)
            .arg("-f")
            .arg(&path)
            .assert()
            .success()
            .stdout(
                "two hundred and ninety nine million, seven hundred and ninety two thousand, \
                 four hundred and fifty eight\n",
            );
    }

    #[test]
    fn test_file_with_newline() {
        let dir = create_temp_dir();
        let path = write_input(
            &dir,
            "test17.txt",
            "trying out whether a new line character 1234567890987654321\nhas an effect",
        );
        wordnum(&dir)
            .arg("-f")
            .arg(&path)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "one quintillion, two hundred and thirty four quadrillion,",
            ));
    }

    #[test]
    fn test_invalid_file_prints_message() {
        let dir = create_temp_dir();
        let path = write_input(
            &dir,
            "test12.txt",
            "The speed of light is 299,792,458 meters per second",
        );
        wordnum(&dir)
            .arg("-f")
            .arg(&path)
            .assert()
            .success()
            .stdout("number invalid\n");
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["-f", "NOT_HERE.txt"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("does not exist"));
    }

    #[test]
    fn test_directory_fails() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .arg("-f")
            .arg(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("is not a file"));
    }

    #[test]
    fn test_text_converts() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["-t", "In the year 681 things were different!"])
            .assert()
            .success()
            .stdout("six hundred and eighty one\n");
    }

    #[test]
    fn test_text_with_two_numbers_is_invalid() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args([
                "-t",
                "The car travelled 200 mile and it took 3 hours to get to the city.",
            ])
            .assert()
            .success()
            .stdout("number invalid\n");
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod config {
    use super::*;

    #[test]
    fn test_config_init_creates_file() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Created wordnum.toml"));
        assert!(dir.path().join("wordnum.toml").exists());

        wordnum(&dir)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));
    }

    #[test]
    fn test_config_show_defaults() {
        let dir = create_temp_dir();
        wordnum(&dir)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("No wordnum.toml found"))
            .stdout(predicate::str::contains("invalid_message = \"number invalid\""));
    }

    #[test]
    fn test_config_validate_reports_warnings() {
        let dir = create_temp_dir();
        write_input(&dir, "wordnum.toml", "[logging]\nlevel = \"loud\"\n");
        wordnum(&dir)
            .args(["config", "validate"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration warnings"))
            .stdout(predicate::str::contains("loud"));
    }

    #[test]
    fn test_custom_invalid_message() {
        let dir = create_temp_dir();
        write_input(
            &dir,
            "custom.toml",
            "[output]\ninvalid_message = \"no single number\"\n",
        );
        wordnum(&dir)
            .args(["--config-file", "custom.toml", "-t", "Use 0.25 kilos, please"])
            .assert()
            .success()
            .stdout("no single number\n");
    }

    #[test]
    fn test_malformed_config_fails() {
        let dir = create_temp_dir();
        write_input(&dir, "wordnum.toml", "[logging\n");
        wordnum(&dir)
            .args(["-n", "5"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("wordnum.toml"));
    }
}
