//! Integration tests for the sd-cli commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temp directory holding `graph.json`:
/// Ada -[Moonrise]- Bo -[Night Train]- Cleo, Cleo -[Harbor]- Dev,
/// and Eve alone in Solo.
fn test_graph() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("graph.json"),
        r#"{
  "actors": [
    { "id": 1, "name": "Ada", "popularity": 9.5 },
    { "id": 2, "name": "Bo", "popularity": 4.0 },
    { "id": 3, "name": "Cleo" },
    { "id": 4, "name": "Dev", "popularity": 1.0 },
    { "id": 5, "name": "Eve" }
  ],
  "movies": [
    { "id": 10, "title": "Moonrise", "release_date": "1999-04-01" },
    { "id": 20, "title": "Night Train" },
    { "id": 30, "title": "Harbor" },
    { "id": 40, "title": "Solo" }
  ],
  "credits": [
    { "actor": 1, "movie": 10 },
    { "actor": 2, "movie": 10 },
    { "actor": 2, "movie": 20 },
    { "actor": 3, "movie": 20 },
    { "actor": 3, "movie": 30 },
    { "actor": 4, "movie": 30 },
    { "actor": 5, "movie": 40 }
  ]
}
"#,
    )
    .unwrap();
    dir
}

fn sixdeg(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sixdeg").unwrap();
    cmd.current_dir(dir.path()).env("NO_COLOR", "1");
    cmd
}

// -----------------------------------------------------------------------
// connect
// -----------------------------------------------------------------------

#[test]
fn connect_prints_shortest_path() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["connect", "Ada", "Dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ada -> Moonrise -> Bo -> Night Train -> Cleo -> Harbor -> Dev",
        ))
        .stdout(predicate::str::contains("3 connections"));
}

#[test]
fn connect_names_are_case_insensitive() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["connect", "ada", "BO"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada -> Moonrise -> Bo"))
        .stdout(predicate::str::contains("1 connection"));
}

#[test]
fn connect_ids() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["connect", "Ada", "Cleo", "--ids"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 10 2 20 3"));
}

#[test]
fn connect_unreachable_is_not_an_error() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["connect", "Ada", "Eve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No connection between Ada and Eve"));
}

#[test]
fn connect_unknown_actor_fails() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["connect", "Ada", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("actor not found"));
}

#[test]
fn graph_flag_overrides_default_file() {
    let dir = test_graph();
    fs::rename(dir.path().join("graph.json"), dir.path().join("films.json")).unwrap();
    sixdeg(&dir)
        .args(["connect", "Ada", "Bo", "--graph", "films.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada -> Moonrise -> Bo"));
}

#[test]
fn missing_graph_file_fails() {
    let dir = TempDir::new().unwrap();
    sixdeg(&dir)
        .args(["stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read graph file"));
}

#[test]
fn malformed_graph_file_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("graph.json"), "{ not json").unwrap();
    sixdeg(&dir)
        .args(["stats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load graph file"));
}

// -----------------------------------------------------------------------
// validate
// -----------------------------------------------------------------------

#[test]
fn validate_accepts_real_path() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["validate", "Ada", "moonrise", "Bo", "Night Train", "Cleo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid path"))
        .stdout(predicate::str::contains("2 connections"));
}

#[test]
fn validate_single_hop_is_one_connection() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["validate", "Ada", "Moonrise", "Bo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 connection"))
        .stdout(predicate::str::contains("1 connections").not());
}

#[test]
fn validate_unknown_title_is_not_found() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["validate", "Ada", "Sunset", "Bo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("movie not found"));
}

#[test]
fn validate_unknown_actor_is_not_found() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["validate", "Ada", "Moonrise", "Nobody"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("actor not found"));
}

#[test]
fn validate_rejects_missing_credit() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["validate", "Ada", "Night Train", "Cleo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid path"));
}

#[test]
fn validate_rejects_even_length() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["validate", "Ada", "Moonrise"])
        .assert()
        .failure();
}

#[test]
fn validate_rejects_self_hop() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["validate", "Ada", "Moonrise", "Ada"])
        .assert()
        .failure();
}

// -----------------------------------------------------------------------
// show / stats
// -----------------------------------------------------------------------

#[test]
fn show_lists_filmography() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["show", "bo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bo"))
        .stdout(predicate::str::contains("Moonrise"))
        .stdout(predicate::str::contains("Night Train"))
        .stdout(predicate::str::contains("1999-04-01"))
        .stdout(predicate::str::contains("2 movies"));
}

#[test]
fn stats_counts_records() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Actors:  5"))
        .stdout(predicate::str::contains("Movies:  4"))
        .stdout(predicate::str::contains("Credits: 7"));
}

// -----------------------------------------------------------------------
// play
// -----------------------------------------------------------------------

#[test]
fn play_by_write_ins_reaches_target() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["play", "Ada", "Cleo", "--seed", "7"])
        .write_stdin("moonrise\nbo\nnight train\ncleo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You reached Cleo!"))
        .stdout(predicate::str::contains("Ada -> Moonrise -> Bo -> Night Train -> Cleo"))
        .stdout(predicate::str::contains("was in"))
        .stdout(predicate::str::contains("Path verified"))
        .stdout(predicate::str::contains("2 connections in 4 turns"));
}

#[test]
fn play_by_menu_numbers() {
    let dir = test_graph();
    // Ada has one film and Moonrise one other cast member.
    sixdeg(&dir)
        .args(["play", "Ada", "Bo", "--seed", "1"])
        .write_stdin("1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Moonrise"))
        .stdout(predicate::str::contains("Who else was in Moonrise?"))
        .stdout(predicate::str::contains("You reached Bo!"))
        .stdout(predicate::str::contains("1 connection in 2 turns"));
}

#[test]
fn play_reports_bad_input_and_continues() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["play", "Ada", "Bo", "--seed", "3"])
        .write_stdin("9\nback\nzzzzzz\n1\nbo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("9 is not an option"))
        .stdout(predicate::str::contains("already at the starting actor"))
        .stdout(predicate::str::contains("no match for \"zzzzzz\""))
        .stdout(predicate::str::contains("You reached Bo!"));
}

#[test]
fn play_back_and_shuffle_are_counted() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["play", "Ada", "Bo", "--seed", "5"])
        .write_stdin("1\nback\nshuffle\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 back, 1 shuffle, 0 loops cut"));
}

#[test]
fn play_dead_end_keeps_session_alive() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["play", "Eve", "Ada", "--seed", "2"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dead end: no unvisited costars left in Solo."))
        .stdout(predicate::str::contains("Game abandoned."));
}

#[test]
fn play_quit_abandons_game() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["play", "Ada", "Dev", "--seed", "4"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game abandoned."))
        .stdout(predicate::str::contains("You reached").not());
}

#[test]
fn play_same_start_and_target_is_won_immediately() {
    let dir = test_graph();
    sixdeg(&dir)
        .args(["play", "Ada", "ada"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You reached Ada!"))
        .stdout(predicate::str::contains("0 connections in 0 turns"));
}
