use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn moviebox(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("moviebox").unwrap();
    cmd.env("MOVIEBOX_DATA", home.join("movies"))
        .env("MOVIEBOX_CONFIG_DIR", home.join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(home);
    cmd
}

fn stored_documents(home: &Path) -> usize {
    match fs::read_dir(home.join("movies")) {
        Ok(entries) => entries
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".json"))
            .count(),
        Err(_) => 0,
    }
}

const BATCH: &str = r#"[
  {"title": "Dune", "director": "Denis Villeneuve", "year": 2021, "genre": "Sci-Fi",
   "duration": 155, "rating": 8.0},
  {"title": "Arrival", "director": "Denis Villeneuve", "year": 2016, "genre": "Sci-Fi",
   "duration": 116, "rating": 7.9, "cast": "Amy Adams"}
]"#;

#[test]
fn test_add_then_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    moviebox(temp_dir.path())
        .args([
            "add", "--title", "Heat", "--director", "Michael Mann", "--year", "1995",
            "--genre", "Crime", "--duration", "170", "--rating", "8.3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Movie \"Heat\" added"));

    moviebox(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Heat (1995), Michael Mann"));

    assert_eq!(stored_documents(temp_dir.path()), 1);
}

#[test]
fn test_add_rejects_invalid_record() {
    let temp_dir = tempfile::tempdir().unwrap();

    moviebox(temp_dir.path())
        .args([
            "add", "--title", "Heat", "--director", "Michael Mann", "--year", "1700",
            "--genre", "Crime", "--duration", "170", "--rating", "8.3",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("year must be between 1895 and 2030"));

    assert_eq!(stored_documents(temp_dir.path()), 0);
}

#[test]
fn test_import_skips_existing_movies() {
    let temp_dir = tempfile::tempdir().unwrap();
    let batch = temp_dir.path().join("batch.json");
    fs::write(&batch, BATCH).unwrap();

    moviebox(temp_dir.path())
        .arg("import")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 of 2 movies"));

    moviebox(temp_dir.path())
        .arg("import")
        .arg(&batch)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 0 of 2 movies"))
        .stdout(predicate::str::contains("Skipped 2 already in the catalog"));

    assert_eq!(stored_documents(temp_dir.path()), 2);
}

#[test]
fn test_invalid_import_persists_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let batch = temp_dir.path().join("bad.json");
    fs::write(
        &batch,
        r#"[{"title": "Ok", "director": "A", "year": 2000, "genre": "Drama", "duration": 90, "rating": 6},
            {"title": "No genre", "director": "B", "year": 2001, "duration": 90, "rating": 6}]"#,
    )
    .unwrap();

    moviebox(temp_dir.path())
        .arg("import")
        .arg(&batch)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field 'genre' in movie 2"));

    assert_eq!(stored_documents(temp_dir.path()), 0);
}

#[test]
fn test_export_writes_combined_document() {
    let temp_dir = tempfile::tempdir().unwrap();
    let batch = temp_dir.path().join("batch.json");
    fs::write(&batch, BATCH).unwrap();

    moviebox(temp_dir.path())
        .arg("import")
        .arg(&batch)
        .assert()
        .success();

    let out = temp_dir.path().join("out").join("everything.json");
    moviebox(temp_dir.path())
        .arg("export")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 movies"));

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    let titles: Vec<&str> = exported
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles.len(), 2);
    assert!(titles.contains(&"Dune"));
    assert!(titles.contains(&"Arrival"));
}

#[test]
fn test_export_empty_catalog_to_default_file() {
    let temp_dir = tempfile::tempdir().unwrap();

    moviebox(temp_dir.path())
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("No movies to export."));

    let text = fs::read_to_string(temp_dir.path().join("all_movies.json")).unwrap();
    assert_eq!(text.trim(), "[]");
}

#[test]
fn test_validate_reports_result_and_exit_code() {
    let temp_dir = tempfile::tempdir().unwrap();
    let good = temp_dir.path().join("good.json");
    let bad = temp_dir.path().join("bad.json");
    fs::write(&good, BATCH).unwrap();
    fs::write(&bad, r#"{"title": "not a list"}"#).unwrap();

    moviebox(temp_dir.path())
        .arg("validate")
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("file is valid"));

    moviebox(temp_dir.path())
        .arg("validate")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be an array of objects"));

    assert_eq!(stored_documents(temp_dir.path()), 0);
}

#[test]
fn test_delete_unknown_id_warns() {
    let temp_dir = tempfile::tempdir().unwrap();

    moviebox(temp_dir.path())
        .args(["rm", "movie-missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No movie with id movie-missing"));
}

#[test]
fn test_config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    moviebox(temp_dir.path())
        .args(["config", "export-file", "backup.json"])
        .assert()
        .success();

    moviebox(temp_dir.path())
        .args(["config", "export-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backup.json"));
}
