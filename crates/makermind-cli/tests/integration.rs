#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn makermind(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("makermind").unwrap();
    cmd.current_dir(dir.path())
        .env("MAKERMIND_ROOT", dir.path())
        .env_remove("API_KEY")
        .env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn slot_file(dir: &TempDir, key: &str) -> std::path::PathBuf {
    dir.path().join(".makermind").join(format!("{key}.json"))
}

fn write_slot(dir: &TempDir, key: &str, body: &str) {
    std::fs::create_dir_all(dir.path().join(".makermind")).unwrap();
    std::fs::write(slot_file(dir, key), body).unwrap();
}

fn read_slot(dir: &TempDir, key: &str) -> serde_json::Value {
    let raw = std::fs::read_to_string(slot_file(dir, key)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn seed_saved_project(dir: &TempDir) {
    write_slot(
        dir,
        "maker_saved_projects",
        r#"[{
            "id": "p-42",
            "title": "Rope Basket",
            "description": "Coiled rope storage.",
            "category": "Crafts",
            "timeEstimate": "2h",
            "matchScore": 81,
            "missingTools": [],
            "missingMaterials": [],
            "materials": ["Cotton rope"],
            "diyAlternatives": [],
            "steps": ["Coil", "Stitch"],
            "costEstimate": 12.5,
            "color": "bg-verde-500"
        }]"#,
    );
}

fn onboard(dir: &TempDir) {
    makermind(dir)
        .args([
            "onboard",
            "--name",
            "Rosa",
            "--style",
            "boho",
            "--persona",
            "Warm, layered, handmade.",
        ])
        .assert()
        .success();
}

// ---------------------------------------------------------------------------
// status
// ---------------------------------------------------------------------------

#[test]
fn status_reports_missing_configuration() {
    let dir = TempDir::new().unwrap();
    makermind(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI service is not configured"))
        .stdout(predicate::str::contains("View:      onboarding"));
}

#[test]
fn status_json_after_onboarding() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);
    let out = makermind(&dir)
        .args(["status", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["configured"], false);
    assert_eq!(v["view"], "dashboard");
    assert_eq!(v["profile"], "Rosa");
}

// ---------------------------------------------------------------------------
// onboard / profile
// ---------------------------------------------------------------------------

#[test]
fn onboard_persists_profile_with_defaults() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);
    let profile = read_slot(&dir, "maker_user");
    assert_eq!(profile["name"], "Rosa");
    assert_eq!(profile["styles"][0], "boho");
    assert_eq!(profile["styleDescription"], "Warm, layered, handmade.");
    assert_eq!(profile["perProjectBudget"], 25.0);
}

#[test]
fn onboard_without_credential_falls_back_to_default_persona() {
    let dir = TempDir::new().unwrap();
    makermind(&dir)
        .args(["onboard", "--style", "rustic", "--budget", "40"])
        .assert()
        .success()
        .stderr(predicate::str::contains("not configured"));
    let profile = read_slot(&dir, "maker_user");
    assert_eq!(profile["name"], "Maker");
    assert_eq!(profile["styleDescription"], "A creative maker.");
    assert_eq!(profile["perProjectBudget"], 40.0);
}

#[test]
fn onboard_edit_keeps_existing_fields() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);
    makermind(&dir)
        .args(["onboard", "--skill", "Baking=Expert"])
        .assert()
        .success();
    let profile = read_slot(&dir, "maker_user");
    assert_eq!(profile["name"], "Rosa");
    assert_eq!(profile["styleDescription"], "Warm, layered, handmade.");
    assert_eq!(profile["skills"]["Baking"], "Expert");
}

#[test]
fn onboard_rejects_unknown_style() {
    let dir = TempDir::new().unwrap();
    makermind(&dir)
        .args(["onboard", "--style", "vaporwave"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown style"));
}

#[test]
fn profile_without_onboarding_fails() {
    let dir = TempDir::new().unwrap();
    makermind(&dir)
        .arg("profile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("makermind onboard"));
}

// ---------------------------------------------------------------------------
// inventory
// ---------------------------------------------------------------------------

#[test]
fn inventory_add_list_remove() {
    let dir = TempDir::new().unwrap();
    let out = makermind(&dir)
        .args(["inventory", "add", "Cotton", "Rope", "-q", "10m", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let material: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(material["name"], "Cotton Rope");
    assert_eq!(material["category"], "General");
    let id = material["id"].as_str().unwrap().to_string();

    makermind(&dir)
        .args(["inventory", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cotton Rope"))
        .stdout(predicate::str::contains("10m"));

    makermind(&dir)
        .args(["inventory", "remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    makermind(&dir)
        .args(["inventory", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your stash is empty."));
}

#[test]
fn inventory_default_quantity() {
    let dir = TempDir::new().unwrap();
    makermind(&dir)
        .args(["inventory", "add", "Buttons"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 unit"));
}

#[test]
fn removing_unknown_material_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    makermind(&dir)
        .args(["inventory", "remove", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No material"));
}

#[test]
fn corrupted_inventory_lists_as_empty() {
    let dir = TempDir::new().unwrap();
    write_slot(&dir, "maker_inventory", "{not json");
    makermind(&dir)
        .args(["inventory", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

// ---------------------------------------------------------------------------
// saved / schedule
// ---------------------------------------------------------------------------

#[test]
fn saved_list_filters_by_cost() {
    let dir = TempDir::new().unwrap();
    seed_saved_project(&dir);
    makermind(&dir)
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rope Basket"));
    makermind(&dir)
        .args(["saved", "list", "--max-cost", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No projects."));
}

#[test]
fn schedule_assign_twice_keeps_one_entry() {
    let dir = TempDir::new().unwrap();
    seed_saved_project(&dir);
    for _ in 0..2 {
        makermind(&dir)
            .args(["schedule", "assign", "mon", "p-42"])
            .assert()
            .success()
            .stdout(predicate::str::contains("on Monday"));
    }
    let schedule = read_slot(&dir, "maker_schedule");
    assert_eq!(schedule["Monday"], serde_json::json!(["p-42"]));

    makermind(&dir)
        .args(["schedule", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rope Basket [p-42]"));
}

#[test]
fn schedule_rejects_unknown_day() {
    let dir = TempDir::new().unwrap();
    seed_saved_project(&dir);
    makermind(&dir)
        .args(["schedule", "assign", "someday", "p-42"])
        .assert()
        .failure();
}

#[test]
fn removed_saved_project_drops_off_the_calendar() {
    let dir = TempDir::new().unwrap();
    seed_saved_project(&dir);
    makermind(&dir)
        .args(["schedule", "assign", "Friday", "p-42"])
        .assert()
        .success();
    makermind(&dir)
        .args(["saved", "remove", "p-42"])
        .assert()
        .success();

    // The id stays in the slot but is no longer shown.
    let schedule = read_slot(&dir, "maker_schedule");
    assert_eq!(schedule["Friday"], serde_json::json!(["p-42"]));
    makermind(&dir)
        .args(["schedule", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rope Basket").not());
}

// ---------------------------------------------------------------------------
// review
// ---------------------------------------------------------------------------

#[test]
fn reviews_list_newest_first() {
    let dir = TempDir::new().unwrap();
    makermind(&dir)
        .args(["review", "add", "p-42", "3", "first", "try"])
        .assert()
        .success();
    makermind(&dir)
        .args(["review", "add", "p-42", "5", "nailed", "it"])
        .assert()
        .success();

    let out = makermind(&dir)
        .args(["review", "list", "p-42", "--json"])
        .output()
        .unwrap();
    let reviews: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(reviews.as_array().unwrap().len(), 2);
    assert_eq!(reviews[0]["text"], "nailed it");
    assert_eq!(reviews[1]["text"], "first try");
}

#[test]
fn review_with_zero_rating_is_rejected() {
    let dir = TempDir::new().unwrap();
    makermind(&dir)
        .args(["review", "add", "p-42", "0", "meh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating from 1 to 5"));
    assert!(!slot_file(&dir, "maker_reviews").exists());
}

// ---------------------------------------------------------------------------
// AI-backed commands without a credential
// ---------------------------------------------------------------------------

#[test]
fn recommend_without_credential_shows_configuration_needed() {
    let dir = TempDir::new().unwrap();
    onboard(&dir);
    makermind(&dir)
        .arg("recommend")
        .assert()
        .success()
        .stdout(predicate::str::contains("AI service is not configured"));
}

#[test]
fn resources_without_credential_shows_configuration_needed() {
    let dir = TempDir::new().unwrap();
    seed_saved_project(&dir);
    makermind(&dir)
        .args(["resources", "p-42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AI service is not configured"));
}
