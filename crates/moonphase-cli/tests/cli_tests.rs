use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config file
#[allow(deprecated)]
fn moonphase(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("moonphase").unwrap();
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG");
    cmd
}

fn calc_json(config_dir: &TempDir, extra: &[&str]) -> serde_json::Value {
    let output = moonphase(config_dir)
        .args(["--format", "json", "calc", "--no-delay", "--utc"])
        .args(extra)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_classify_plain() {
    let dir = TempDir::new().unwrap();
    moonphase(&dir)
        .args(["classify", "0.25"])
        .assert()
        .success()
        .stdout("First Quarter (waxing)\n");
}

#[test]
fn test_classify_json() {
    let dir = TempDir::new().unwrap();
    let output = moonphase(&dir)
        .args(["--format", "json", "classify", "0.5"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Full Moon");
    assert_eq!(json["direction"], "waning");
}

#[test]
fn test_classify_out_of_range_falls_back() {
    let dir = TempDir::new().unwrap();
    moonphase(&dir)
        .args(["classify", "-0.1"])
        .assert()
        .success()
        .stdout("Old Moon (waning)\n");
}

#[test]
fn test_calc_json_reports_visible_snapshot() {
    let dir = TempDir::new().unwrap();
    // Six days after the synodic reference new moon
    let json = calc_json(
        &dir,
        &["--provider", "synodic", "--day", "12", "--month", "1", "--year", "2000"],
    );

    assert_eq!(json["stage"], "visible");
    assert_eq!(json["generation"], 1);
    assert_eq!(json["result"]["phaseName"], "Young Moon");
    assert_eq!(json["result"]["phaseDescription"], "waxing");
    assert!(
        json["result"]["ageAsPercentage"]
            .as_str()
            .unwrap()
            .ends_with('%')
    );
}

#[test]
fn test_calc_precision_is_clamped() {
    let dir = TempDir::new().unwrap();
    let date = ["--day", "18", "--month", "2", "--year", "2007"];

    let capped = calc_json(&dir, &[&date[..], &["--precision", "25"]].concat());
    let twenty = calc_json(&dir, &[&date[..], &["--precision", "20"]].concat());

    assert_eq!(capped["result"], twenty["result"]);
    let age = capped["result"]["ageInDays"].as_str().unwrap();
    assert_eq!(age.split('.').nth(1).unwrap().len(), 20);
}

#[test]
fn test_calc_plain_shows_progress_and_result() {
    let dir = TempDir::new().unwrap();
    moonphase(&dir)
        .args([
            "calc", "--no-delay", "--utc", "--day", "25", "--month", "1", "--year", "2024",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("animating..."))
        .stderr(predicate::str::contains("done"))
        .stdout(predicate::str::contains("Date:         2024-01-25"))
        .stdout(predicate::str::contains("Illumination:"));
}

#[test]
fn test_calc_strict_rejects_invalid_date() {
    let dir = TempDir::new().unwrap();
    moonphase(&dir)
        .args([
            "calc", "--no-delay", "--strict", "--day", "31", "--month", "2", "--year", "2023",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed"))
        .stderr(predicate::str::contains("Invalid date: 2023-02-31"));
}

#[test]
fn test_calc_strict_json_reports_failure_kind() {
    let dir = TempDir::new().unwrap();
    let output = moonphase(&dir)
        .args([
            "--format", "json", "calc", "--no-delay", "--utc", "--strict", "--day", "30",
            "--month", "2", "--year", "2024",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stage"], "failed");
    assert_eq!(json["error"]["kind"], "invalid_date");
    assert!(json.get("result").is_none());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Calculation failed: Invalid date: 2024-02-30"), "{stderr}");
}

#[test]
fn test_calc_normalizes_invalid_date_by_default() {
    let dir = TempDir::new().unwrap();
    let json = calc_json(&dir, &["--day", "31", "--month", "2", "--year", "2023"]);
    assert_eq!(json["stage"], "visible");
    assert_eq!(json["request"]["date"]["day"], 31);
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    moonphase(&dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(path.exists());

    moonphase(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    moonphase(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("loading_ms = 1500"))
        .stdout(predicate::str::contains("provider = \"ephemeris\""));
}

#[test]
fn test_config_file_drives_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[timing]\nanimation_ms = 0\nloading_ms = 0\n\n[calculation]\nprecision = 4\nprovider = \"synodic\"\ntimezone = \"utc\"\n",
    )
    .unwrap();

    let output = moonphase(&dir)
        .args(["--format", "json", "calc", "--day", "12", "--month", "1", "--year", "2000"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let age = json["result"]["ageInDays"].as_str().unwrap();
    assert_eq!(age.split('.').nth(1).unwrap().len(), 4);
    assert_eq!(json["request"]["precision"], 4);
}
