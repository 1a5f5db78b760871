//! Integration tests for the generate and random commands

mod common;

use predicates::prelude::*;

use common::TestWorkspace;

fn calc_buttons(html: &str) -> usize {
    html.matches("<button class=\"calc-btn").count()
}

#[test]
fn test_generate_calculator_from_idea() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["generate", "I want a calculator app", "-o", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculator"))
        .stdout(predicate::str::contains("page.html"));

    let html = workspace.read_file("page.html");
    assert!(html.contains("readonly"));
    assert_eq!(calc_buttons(&html), 19);
    assert!(html.contains("// HTML"));
    assert!(html.contains("// JavaScript"));
}

#[test]
fn test_generate_from_category() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["generate", "--category", "games", "-o", "game.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tic Tac Toe"));

    let html = workspace.read_file("game.html");
    assert!(html.contains("id=\"previewSection\" class=\"bg-white rounded-lg shadow p-6 mb-8\">"));
    assert_eq!(html.matches("<style data-mount=").count(), 1);
    assert_eq!(html.matches("<script data-mount=").count(), 1);
}

#[test]
fn test_idea_takes_precedence_over_category() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args([
            "generate",
            "show me a photo gallery",
            "--category",
            "games",
            "-o",
            "page.html",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Image Gallery"));
}

#[test]
fn test_generate_without_input_prompts() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["generate", "-o", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter an app idea or select a category",
        ));
    assert!(!workspace.file_exists("page.html"));
}

#[test]
fn test_generate_whitespace_idea_prompts() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["generate", "   ", "-o", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter an app idea"));
    assert!(!workspace.file_exists("page.html"));
}

#[test]
fn test_generate_unknown_category() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["generate", "--category", "weather", "-o", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No template selected."));
    assert!(!workspace.file_exists("page.html"));
}

#[test]
fn test_generate_to_stdout() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["generate", "todo", "-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("todoInput"));
    assert!(!workspace.file_exists("appforge.html"));
}

#[test]
fn test_generate_default_output() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["generate", "a shop product"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Card"));
    assert!(workspace.file_exists("appforge.html"));
}

#[test]
fn test_generate_into_missing_directory_fails() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["generate", "calc", "-o", "nope/page.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write file"));
}

#[test]
fn test_random_is_reproducible_with_seed() {
    let workspace = TestWorkspace::new();
    let run = |file: &str| {
        workspace
            .cmd()
            .args(["--seed", "7", "random", "-o", file])
            .output()
            .unwrap()
    };
    let first = run("a.html");
    let second = run("b.html");
    assert!(first.status.success());

    let name = |out: &std::process::Output| {
        String::from_utf8_lossy(&out.stdout)
            .split(" -> ")
            .next()
            .unwrap_or_default()
            .to_string()
    };
    assert_eq!(name(&first), name(&second));
    assert!(workspace.file_exists("a.html"));
    assert!(workspace.file_exists("b.html"));
}

#[test]
fn test_unmatched_idea_still_mounts_something() {
    let workspace = TestWorkspace::new();
    workspace
        .cmd()
        .args(["--seed", "1", "generate", "zzz", "-o", "page.html"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));
    assert!(workspace.file_exists("page.html"));
}

#[test]
fn test_same_seed_renders_identical_pages() {
    let workspace = TestWorkspace::new();
    for file in ["a.html", "b.html"] {
        workspace
            .cmd()
            .args(["--seed", "3", "generate", "--category", "dashboard", "-o", file])
            .assert()
            .success();
    }
    assert_eq!(workspace.read_file("a.html"), workspace.read_file("b.html"));

    for file in ["c.html", "d.html"] {
        workspace
            .cmd()
            .args(["--seed", "5", "random", "-o", file])
            .assert()
            .success();
    }
    assert_eq!(workspace.read_file("c.html"), workspace.read_file("d.html"));
}
