use std::process::Command;

use tempfile::TempDir;

fn folio_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folio"))
}

fn init(tmp: &TempDir) {
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();
    assert!(output.status.success());
}

fn login(tmp: &TempDir) {
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args([
            "login",
            "--email=admin@portfolio.com",
            "--password=Admin@2024",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn test_init_creates_folio_directory() {
    let tmp = TempDir::new().unwrap();

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(tmp.path().join(".folio").exists());
}

#[test]
fn test_init_twice_fails() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["init"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Already initialized"));
}

#[test]
fn test_list_without_init_fails() {
    let tmp = TempDir::new().unwrap();

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["list", "project"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not in a folio project"));
}

#[test]
fn test_login_with_wrong_password_fails() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["login", "--email=admin@portfolio.com", "--password=nope"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid email or password"));
}

#[test]
fn test_mutation_without_login_is_refused() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["add", "skill", "Rust"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not logged in"));
}

#[test]
fn test_logout_revokes_admin_access() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["logout"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["add", "skill", "Rust"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_list_serves_bundled_defaults_before_any_write() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["settings", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("John Developer"));
}

#[test]
fn test_full_project_workflow() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    // Add
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args([
            "add",
            "project",
            "Folio CLI",
            "--description=Local-first portfolio manager",
            "--tech=Rust",
            "--tech=clap",
            "--featured",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let created: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("add --json prints the record");
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["title"], "Folio CLI");
    assert_eq!(created["featured"], true);
    assert_eq!(created["techStack"][1], "clap");

    // List includes the new record alongside the defaults
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["list", "project"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Folio CLI"));
    assert!(stdout.contains("E-Commerce Platform"));

    // Update
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["update", "project", &id, "--title=Folio", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let updated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(updated["title"], "Folio");
    assert_eq!(updated["techStack"][0], "Rust");

    // Get
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["get", "project", &id])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Folio"));

    // Delete
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["delete", "project", &id, "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["get", "project", &id])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));
}

#[test]
fn test_delete_without_force_fails_non_interactively() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["delete", "skill", "1"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--force"));

    // The record is still there.
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["get", "skill", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn test_delete_unknown_entity_type_fails() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["delete", "widget", "1", "--force"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid entity type"));
}

#[test]
fn test_settings_set_persists_across_invocations() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["settings", "set", "--site-name=Jane Builder"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["settings", "show", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let settings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(settings["siteName"], "Jane Builder");
    // Untouched fields keep their previous values.
    assert_eq!(settings["email"], "john@developer.com");
}

#[test]
fn test_contact_submission_does_not_grow_the_inbox() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let before = folio_cmd()
        .current_dir(tmp.path())
        .args(["messages", "list", "--json"])
        .output()
        .unwrap();
    assert!(before.status.success());
    let before: serde_json::Value = serde_json::from_slice(&before.stdout).unwrap();

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args([
            "contact",
            "--name=Visitor",
            "--email=visitor@example.com",
            "--subject=Hello",
            "--message=Nice site!",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("has been sent"));

    let after = folio_cmd()
        .current_dir(tmp.path())
        .args(["messages", "list", "--json"])
        .output()
        .unwrap();
    let after: serde_json::Value = serde_json::from_slice(&after.stdout).unwrap();
    assert_eq!(
        before.as_array().unwrap().len(),
        after.as_array().unwrap().len()
    );
}

#[test]
fn test_contact_with_blank_field_fails_validation() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args([
            "contact",
            "--name=Visitor",
            "--email=visitor@example.com",
            "--subject=Hello",
            "--message=  ",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("message is required"));
}

#[test]
fn test_messages_read_marks_seeded_message() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["messages", "list", "--unread", "--json"])
        .output()
        .unwrap();
    let unread: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let count = unread.as_array().unwrap().len();
    assert!(count > 0);
    let id = unread[0]["id"].as_str().unwrap().to_string();

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["messages", "read", &id])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["messages", "list", "--unread", "--json"])
        .output()
        .unwrap();
    let unread: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(unread.as_array().unwrap().len(), count - 1);
}

#[test]
fn test_social_add_and_remove_by_index() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["social", "add", "Mastodon", "https://example.social/@john"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["social", "list", "--json"])
        .output()
        .unwrap();
    let links: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let len = links.as_array().unwrap().len();
    assert_eq!(links[len - 1]["platform"], "Mastodon");
    assert_eq!(links[len - 1]["icon"], "mastodon");

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["social", "remove", &(len - 1).to_string()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["social", "list", "--json"])
        .output()
        .unwrap();
    let links: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(links.as_array().unwrap().len(), len - 1);
}

#[test]
fn test_media_upload_and_list() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
    png.extend_from_slice(&[0u8; 64]);
    let image = tmp.path().join("logo.png");
    std::fs::write(&image, &png).unwrap();

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["media", "upload", "logo.png", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let item: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(item["name"], "logo.png");
    assert!(item["url"]
        .as_str()
        .unwrap()
        .starts_with("data:image/png;base64,"));

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["media", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("logo.png"));
}

#[test]
fn test_media_upload_rejects_non_image() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let file = tmp.path().join("notes.txt");
    std::fs::write(&file, b"plain text").unwrap();

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["media", "upload", "notes.txt"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("must be an image"));
}

#[test]
fn test_reset_reverts_to_defaults_and_keeps_session() {
    let tmp = TempDir::new().unwrap();
    init(&tmp);
    login(&tmp);

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["settings", "set", "--site-name=Changed"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["reset", "--force"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["settings", "show"])
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("John Developer"));

    // Still logged in: reset clears content, not the session.
    let output = folio_cmd()
        .current_dir(tmp.path())
        .args(["add", "skill", "Rust", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
}
