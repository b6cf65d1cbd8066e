use std::process::Command;

use assert_cmd::prelude::*;
use log_analyzer::{analyse, ingest};
use predicates::prelude::*;

fn noise_maker() -> Command {
    Command::new(env!("CARGO_BIN_EXE_noise-maker"))
}

fn run(args: &[&str]) -> String {
    let output = noise_maker()
        .args(args)
        .output()
        .expect("failed to run noise-maker");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("output is UTF-8")
}

#[test]
fn seeded_output_is_repeatable() {
    let first = run(&["--count", "40", "--seed", "7"]);
    let second = run(&["--count", "40", "--seed", "7"]);
    assert_eq!(first, second);
    assert_eq!(first.lines().count(), 40);
}

#[test]
fn generated_log_is_understood_by_the_analyzer() {
    let text = run(&["--count", "200", "--seed", "11", "--malformed-ratio", "0.25"]);
    let parsed = ingest::parse_log(&text);
    assert_eq!(parsed.entries.len() + parsed.skipped, 200);
    assert!(parsed.skipped > 0);

    let stats = analyse(&parsed.entries);
    assert!(stats.unique_ip_count > 0);
    assert_eq!(stats.top_ips.len(), 3);
    assert!(stats.top_urls.windows(2).all(|w| w[0].count >= w[1].count));
}

#[test]
fn writes_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.log");
    noise_maker()
        .args(["--count", "30", "--seed", "3", "--format", "common", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 30 log lines"));

    let parsed = ingest::read_log(&path).unwrap();
    assert_eq!(parsed.entries.len(), 30);
    assert_eq!(parsed.skipped, 0);
}

#[test]
fn rejects_ratio_above_one() {
    noise_maker()
        .args(["--malformed-ratio", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not between 0 and 1"));
}
