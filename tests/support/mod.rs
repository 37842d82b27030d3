use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use tempfile::TempDir;

/// Get a Command for quern
pub fn quern() -> Command {
    cargo_bin_cmd!("quern")
}

/// Set up an initialized vault and return its directory
pub fn setup_vault() -> TempDir {
    let dir = TempDir::new().unwrap();
    quern()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();
    dir
}

/// Write a note file with raw frontmatter text under the vault.
///
/// Pass an empty frontmatter string for a bare-body note.
pub fn write_note(dir: &TempDir, rel_path: &str, frontmatter: &str, body: &str) {
    let path = dir.path().join(rel_path);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let content = if frontmatter.is_empty() {
        format!("{body}\n")
    } else {
        format!("---\n{}\n---\n\n{body}\n", frontmatter.trim())
    };
    fs::write(path, content).unwrap();
}

/// Write an atomic note under permanent/ with the given tags
#[allow(dead_code)]
pub fn write_atomic_note(dir: &TempDir, title: &str, tags: &[&str], body: &str) {
    let frontmatter = if tags.is_empty() {
        "type: atomic".to_string()
    } else {
        let tag_lines: Vec<String> = tags.iter().map(|t| format!("  - {t}")).collect();
        format!("type: atomic\ntags:\n{}", tag_lines.join("\n"))
    };
    write_note(dir, &format!("permanent/{title}.md"), &frontmatter, body);
}

/// Run quern in the vault dir and return stdout as String
#[allow(dead_code)]
pub fn run_and_get_stdout(dir: &TempDir, args: &[&str]) -> String {
    let output = quern()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run quern in the vault dir and parse stdout as JSON
#[allow(dead_code)]
pub fn run_and_get_json(dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = quern()
        .current_dir(dir.path())
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
