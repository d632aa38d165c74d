//! Runs the `revw` binary against small review files.

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::TempDir;

const REVIEWS: &str = "\
take again,comments,difficulty,overall quality,course
yes,,3,,CS101
NO,Terrible class,,2,CS102
Yes,Great lectures and helpful professor,4,5,CS101
";

fn revw(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_revw"))
        .args(args)
        .current_dir(dir)
        .env_clear()
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .output()
        .expect("revw should start")
}

fn workspace() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("reviews.csv"), REVIEWS).expect("write reviews");
    dir
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "revw failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

#[test]
fn process_summarizes_and_exports() {
    let dir = workspace();
    let out = revw(dir.path(), &["process", "reviews.csv", "--output"]);
    let json = stdout_json(&out);

    assert_eq!(json["rows"], 3);
    assert_eq!(json["summary"]["row_count"], 3);
    assert_eq!(json["summary"]["sentiment_counts"]["Negative"], 1);
    assert_eq!(json["output"], "processed_professor_reviews.csv");
    assert!(json.get("reviews").is_none());

    let exported = std::fs::read_to_string(dir.path().join("processed_professor_reviews.csv"))
        .expect("export should exist");
    let header = exported.lines().next().unwrap_or_default();
    assert_eq!(
        header,
        "take again,comments,difficulty,overall quality,course,sentiment,automated_feedback"
    );
    assert_eq!(exported.lines().count(), 4);
}

#[test]
fn process_rows_flag_includes_enriched_reviews() {
    let dir = workspace();
    let json = stdout_json(&revw(dir.path(), &["process", "reviews.csv", "--rows"]));

    let reviews = json["reviews"].as_array().expect("reviews array");
    assert_eq!(reviews.len(), 3);
    assert_eq!(reviews[0]["comment"], "No comment");
    assert_eq!(reviews[0]["sentiment"], "Neutral");
    assert_eq!(reviews[1]["take_again"], "No");
}

#[test]
fn feedback_lists_one_entry_per_row() {
    let dir = workspace();
    let json = stdout_json(&revw(dir.path(), &["feedback", "reviews.csv"]));

    let entries = json.as_array().expect("entries array");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["row"], 1);
    assert_eq!(entries[1]["sentiment"], "Negative");
}

#[test]
fn report_respects_term_limit() {
    let dir = workspace();
    let json = stdout_json(&revw(dir.path(), &["report", "reviews.csv", "--terms", "2"]));

    assert!(json["top_terms"].as_array().is_some_and(|terms| terms.len() <= 2));
    let shares = json["take_again_share"].as_array().expect("share array");
    assert_eq!(shares[0]["value"], "Yes");
    assert_eq!(shares[0]["count"], 2);
}

#[test]
fn project_config_remaps_columns() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(
        dir.path().join("reviews.csv"),
        "again,text,hard,quality\nyes,Boring,2,3\n",
    )
    .expect("write reviews");
    std::fs::create_dir(dir.path().join(".revw")).expect("config dir");
    std::fs::write(
        dir.path().join(".revw/config.toml"),
        "[columns]\ntake_again = \"again\"\ncomments = \"text\"\ndifficulty = \"hard\"\noverall_quality = \"quality\"\n",
    )
    .expect("write config");

    let json = stdout_json(&revw(dir.path(), &["process", "reviews.csv"]));
    assert_eq!(json["rows"], 1);
}

#[test]
fn missing_column_fails_with_context() {
    let dir = TempDir::new().expect("tempdir");
    std::fs::write(dir.path().join("bad.csv"), "comments,difficulty\nok,3\n").expect("write");

    let out = revw(dir.path(), &["process", "bad.csv"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.starts_with("revw error: failed to process bad.csv"));
    assert!(stderr.contains("take again"));
}

#[test]
fn schema_lists_registered_names() {
    let dir = TempDir::new().expect("tempdir");
    let json = stdout_json(&revw(dir.path(), &["schema"]));
    let names = json.as_array().expect("names array");
    assert!(names.iter().any(|name| name == "classified_review"));
}
