// Allow deprecated cargo_bin - the deprecation is for custom build-dir edge case
// which doesn't apply to this project. See: https://docs.rs/assert_cmd
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn quizkeep(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quizkeep").unwrap();
    cmd.env("QUIZKEEP_STATE", temp.path().join("state"))
        .env("QUIZKEEP_CONFIG", temp.path().join("config.toml"))
        .env_remove("QUIZKEEP_NAMESPACE")
        .env_remove("QUIZKEEP_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_shows_all_subcommands() {
    Command::cargo_bin("quizkeep")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("select"))
        .stdout(predicate::str::contains("next"))
        .stdout(predicate::str::contains("restart"))
        .stdout(predicate::str::contains("questions"))
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("draft"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version_is_semver() {
    Command::cargo_bin("quizkeep")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

#[test]
fn test_first_run_shows_default_question() {
    let temp = tempfile::tempdir().unwrap();

    quizkeep(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 2"))
        .stdout(predicate::str::contains("What is the capital of France?"))
        .stdout(predicate::str::contains("3) Paris"));

    assert!(temp.path().join("state").join("default.json").exists());
}

#[test]
fn test_show_json_hides_correct_answer() {
    let temp = tempfile::tempdir().unwrap();

    quizkeep(&temp)
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"phase\": \"in_progress\""))
        .stdout(predicate::str::contains("Paris"))
        .stdout(predicate::str::contains("correctAnswer").not());
}

#[test]
fn test_full_default_run() {
    let temp = tempfile::tempdir().unwrap();

    quizkeep(&temp)
        .args(["select", "Paris"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected: Paris"));

    quizkeep(&temp)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 2 of 2"));

    quizkeep(&temp)
        .args(["select", "--number", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected: Harper Lee"));

    quizkeep(&temp)
        .arg("next")
        .assert()
        .success()
        .stdout(predicate::str::contains("Results"))
        .stdout(predicate::str::contains("Score: 2/2"));

    quizkeep(&temp)
        .args(["show", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"phase\": \"finished\""))
        .stdout(predicate::str::contains("\"score\": 2"));

    quizkeep(&temp)
        .args(["select", "Paris"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("finished"));

    quizkeep(&temp)
        .arg("restart")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 2"));
}

#[test]
fn test_next_without_selection_fails() {
    let temp = tempfile::tempdir().unwrap();

    quizkeep(&temp)
        .arg("next")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No option selected"));
}

#[test]
fn test_select_number_out_of_range_fails() {
    let temp = tempfile::tempdir().unwrap();

    quizkeep(&temp)
        .args(["select", "-n", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Option 9 does not exist"));
}

#[test]
fn test_wrong_answers_score_zero() {
    let temp = tempfile::tempdir().unwrap();

    for _ in 0..2 {
        quizkeep(&temp).args(["select", "-n", "2"]).assert().success();
        quizkeep(&temp).arg("next").assert().success();
    }

    quizkeep(&temp)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/2"));
}

#[test]
fn test_author_question_and_list() {
    let temp = tempfile::tempdir().unwrap();

    quizkeep(&temp)
        .args(["draft", "text", "Largest ocean?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question: Largest ocean?"));
    quizkeep(&temp)
        .args(["draft", "option", "1", "Pacific"])
        .assert()
        .success();
    quizkeep(&temp)
        .args(["draft", "option", "3", "Atlantic"])
        .assert()
        .success();
    quizkeep(&temp)
        .args(["draft", "answer", "Pacific"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Correct answer: Pacific"));

    quizkeep(&temp)
        .args(["draft", "submit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added question 3: Largest ocean?"));

    quizkeep(&temp)
        .args(["draft", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question: \n"));

    quizkeep(&temp)
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("3. Largest ocean? (2 options)"));
}

#[test]
fn test_delete_question() {
    let temp = tempfile::tempdir().unwrap();

    quizkeep(&temp)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted question 1: What is the capital of France?",
        ));

    quizkeep(&temp)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 1"))
        .stdout(predicate::str::contains("Mockingbird"));

    quizkeep(&temp)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    quizkeep(&temp)
        .args(["delete", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("start at 1"));
}

#[test]
fn test_namespace_env_selects_store_file() {
    let temp = tempfile::tempdir().unwrap();

    quizkeep(&temp)
        .env("QUIZKEEP_NAMESPACE", "trivia")
        .arg("show")
        .assert()
        .success();

    assert!(temp.path().join("state").join("trivia.json").exists());
    assert!(!temp.path().join("state").join("default.json").exists());
}
